use outbreak_sim::monte_carlo::MonteCarlo;

use super::params::ParamArgs;
use crate::output;

pub fn run(args: &ParamArgs, max_days: Option<u32>, json: bool, table: bool) -> anyhow::Result<()> {
    let params = args.load()?;
    tracing::info!(
        runs = params.num_runs,
        population = params.population,
        disease = %params.disease.name,
        "running simulation"
    );

    let start = std::time::Instant::now();
    let mut sim = MonteCarlo::new(params);
    let mut last = None;
    loop {
        let results = match max_days {
            Some(cap) => sim.next_capped(cap).transpose()?,
            None => sim.next(),
        };
        let Some(results) = results else { break };
        tracing::info!(
            completed_runs = results.completed_runs,
            avg_first_detection_day = results.avg_first_detection_day,
            avg_tenth_detection_day = results.avg_tenth_detection_day,
            "progress"
        );
        last = Some(results);
    }
    let elapsed = start.elapsed();

    let Some(results) = last else {
        tracing::warn!("no runs requested");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        output::print_results(&results, elapsed);
        if table {
            output::print_table(&results);
        }
    }
    Ok(())
}
