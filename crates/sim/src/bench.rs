use outbreak_shared::config::{SimulationParams, TransitionModel};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::time::Instant;

use crate::engine::run_simulation_capped;
use crate::monte_carlo::MonteCarlo;

/// Runs still going past this day are counted as capped rather than timed out.
pub const PROFILE_DAY_CAP: u32 = 5_000;

/// Profiling scenario. Seeded large enough that the `Expected` model's
/// rounded flows do not stall at a fixed point.
pub fn profile_scenario() -> SimulationParams {
    let mut params = SimulationParams { initial_infected: 20, ..SimulationParams::default() };
    params.disease.detection_probability = 0.5;
    params
}

pub fn run_profile(n_runs: u32) {
    let n_runs = n_runs.max(1);
    let base = profile_scenario();

    // Warmup
    for i in 0..10 {
        let mut rng = Pcg64::seed_from_u64(i);
        let _ = run_simulation_capped(&base, &mut rng, PROFILE_DAY_CAP);
    }

    println!("=== Per-run Benchmark ({} runs) ===", n_runs);
    for model in [TransitionModel::Binomial, TransitionModel::Expected] {
        let params = SimulationParams { transition_model: model, ..base.clone() };
        let start = Instant::now();
        let mut days = 0usize;
        let mut capped = 0u32;
        for run in 0..n_runs {
            let mut rng = Pcg64::seed_from_u64(params.run_seed(run));
            match run_simulation_capped(&params, &mut rng, PROFILE_DAY_CAP) {
                Ok(history) => days += history.len(),
                Err(_) => {
                    days += PROFILE_DAY_CAP as usize + 1;
                    capped += 1;
                }
            }
        }
        let elapsed = start.elapsed();
        let us = elapsed.as_micros() as f64 / n_runs as f64;
        println!(
            "{:<9} {:.1}µs/run ({:.0} runs/sec, {:.1} days/run, {} capped)",
            format!("{:?}:", model),
            us,
            1_000_000.0 / us.max(1e-9),
            days as f64 / n_runs as f64,
            capped,
        );
    }

    // Aggregation is rebuilt from every history after each run
    let params = SimulationParams { num_runs: n_runs, ..base };
    let start = Instant::now();
    let completed = MonteCarlo::new(params).count();
    let orchestrated = start.elapsed();

    println!("\n=== Orchestrated ({} snapshots) ===", completed);
    println!("Total:        {:.3}s", orchestrated.as_secs_f64());
    println!(
        "Per snapshot: {:.1}µs",
        orchestrated.as_micros() as f64 / completed.max(1) as f64
    );
}
