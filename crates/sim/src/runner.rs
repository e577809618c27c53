use rayon::prelude::*;

use outbreak_shared::config::SimulationParams;
use outbreak_shared::result::SimulationResults;

use crate::monte_carlo::MonteCarlo;

/// Final snapshot of one orchestration in a sweep. `None` when the scenario
/// asked for zero runs.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub params: SimulationParams,
    pub results: Option<SimulationResults>,
}

/// Runs each scenario's full orchestration to completion on a rayon pool.
///
/// Scenarios are independent: each owns its own accumulator and performs its
/// runs sequentially. Output order matches `scenarios`.
pub fn run_sweep(
    scenarios: Vec<SimulationParams>,
    n_workers: Option<usize>,
) -> anyhow::Result<Vec<ScenarioResult>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?;

    tracing::info!(scenarios = scenarios.len(), "starting sweep");
    let results = pool.install(|| {
        scenarios
            .into_par_iter()
            .map(|params| {
                let results = MonteCarlo::new(params.clone()).last();
                ScenarioResult { params, results }
            })
            .collect::<Vec<_>>()
    });
    tracing::info!("sweep finished");

    Ok(results)
}

/// One scenario per transmission rate, everything else taken from `base`.
/// Every scenario shares `base.seed`, so they differ only in the rate.
pub fn transmission_sweep(base: &SimulationParams, rates: &[f64]) -> Vec<SimulationParams> {
    rates
        .iter()
        .map(|&transmission_rate| {
            let mut params = base.clone();
            params.disease.transmission_rate = transmission_rate;
            params
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmission_sweep_only_changes_rate() {
        let base = SimulationParams::default();
        let scenarios = transmission_sweep(&base, &[0.1, 0.2]);
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].disease.transmission_rate, 0.1);
        assert_eq!(scenarios[1].disease.transmission_rate, 0.2);
        assert_eq!(scenarios[1].population, base.population);
        assert_eq!(scenarios[1].seed, base.seed);
    }
}
