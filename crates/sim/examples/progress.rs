//! Prints one line per completed run as the averages settle.
//!
//! cargo run -p outbreak-sim --example progress

use outbreak_shared::config::SimulationParams;
use outbreak_sim::monte_carlo::run_monte_carlo;

fn main() {
    let params = SimulationParams { num_runs: 20, seed: 7, ..SimulationParams::default() };

    run_monte_carlo(params, |results| {
        let ci = results.tenth_detection_day_95_ci;
        println!(
            "run {:>3}: first {:>5.1}  tenth {:>5.1} [{:>5.1}, {:>5.1}]  days {:>3}  final {:>8.1}",
            results.completed_runs,
            results.avg_first_detection_day,
            results.avg_tenth_detection_day,
            ci.low,
            ci.high,
            results.n_days(),
            results.final_avg_infected(),
        );
    });
}
