use outbreak_shared::result::SimulationResults;
use outbreak_shared::stats::ConfidenceInterval;
use outbreak_sim::runner::ScenarioResult;
use std::time::Duration;

fn fmt_ci(ci: &ConfidenceInterval) -> String {
    format!("[{:.2}, {:.2}]", ci.low, ci.high)
}

pub fn print_results(results: &SimulationResults, elapsed: Duration) {
    println!("\n========================================");
    println!("  Disease:          {}", results.disease.name);
    println!("  Runs:             {}", results.completed_runs);
    println!("  Time:             {:.2}s", elapsed.as_secs_f64());
    println!("  Days simulated:   {}", results.n_days());
    println!(
        "  First detection:  day {:.1} {}",
        results.avg_first_detection_day,
        fmt_ci(&results.first_detection_day_95_ci)
    );
    println!(
        "  Tenth detection:  day {:.1} {}",
        results.avg_tenth_detection_day,
        fmt_ci(&results.tenth_detection_day_95_ci)
    );
    println!("  Final ever-infected (avg): {:.1}", results.final_avg_infected());
    println!("========================================");
}

pub fn print_table(results: &SimulationResults) {
    println!("\n  Day   Avg ever-infected");
    for d in &results.aggregated_data {
        println!("  {:>4}  {:>17.2}", d.day, d.avg_infected);
    }
}

pub fn print_sweep(rows: &[ScenarioResult], elapsed: Duration) {
    println!("\n  Beta    Runs  First (95% CI)             Tenth (95% CI)             Days");
    for row in rows {
        let beta = row.params.disease.transmission_rate;
        match &row.results {
            Some(r) => println!(
                "  {:<6.3} {:>5}  {:>6.2} {:<19} {:>6.2} {:<19} {:>5}",
                beta,
                r.completed_runs,
                r.avg_first_detection_day,
                fmt_ci(&r.first_detection_day_95_ci),
                r.avg_tenth_detection_day,
                fmt_ci(&r.tenth_detection_day_95_ci),
                r.n_days(),
            ),
            None => println!("  {:<6.3} {:>5}  (no runs)", beta, 0),
        }
    }
    println!("\n  Time: {:.2}s", elapsed.as_secs_f64());
}
