use outbreak_sim::runner;

use super::params::ParamArgs;
use crate::output;

pub fn run(args: &ParamArgs, rates: &[f64], workers: usize, json: bool) -> anyhow::Result<()> {
    if rates.is_empty() {
        anyhow::bail!("--rates needs at least one transmission rate");
    }
    let base = args.load()?;
    let n_workers = if workers == 0 { None } else { Some(workers) };

    let start = std::time::Instant::now();
    let scenarios = runner::transmission_sweep(&base, rates);
    let results = runner::run_sweep(scenarios, n_workers)?;
    let elapsed = start.elapsed();

    if json {
        let snapshots: Vec<_> = results.iter().map(|r| &r.results).collect();
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    } else {
        output::print_sweep(&results, elapsed);
    }
    Ok(())
}
