use std::sync::atomic::{AtomicBool, Ordering};

use outbreak_shared::config::{DiseaseParams, SimulationParams, TransitionModel};
use outbreak_shared::result::SimulationResults;
use outbreak_sim::engine::MIN_HORIZON_DAYS;
use outbreak_sim::monte_carlo::{
    run_monte_carlo, run_monte_carlo_async, run_monte_carlo_until, MonteCarlo,
};
use outbreak_sim::runner::{run_sweep, transmission_sweep};

fn small_outbreak(num_runs: u32) -> SimulationParams {
    SimulationParams {
        population: 2_000,
        initial_infected: 3,
        num_runs,
        seed: 11,
        disease: DiseaseParams {
            transmission_rate: 0.6,
            incubation_days: 3.0,
            recovery_days: 6.0,
            detection_probability: 0.3,
            ..DiseaseParams::default()
        },
        ..SimulationParams::default()
    }
}

fn collect(params: SimulationParams) -> Vec<SimulationResults> {
    let mut snapshots = Vec::new();
    run_monte_carlo(params, |results| snapshots.push(results));
    snapshots
}

#[test]
fn test_no_transmission_single_run() {
    let params = SimulationParams {
        population: 500,
        initial_infected: 1,
        num_runs: 1,
        disease: DiseaseParams {
            transmission_rate: 0.0,
            recovery_days: 0.0,
            detection_probability: 0.0,
            ..DiseaseParams::default()
        },
        ..SimulationParams::default()
    };
    let snapshots = collect(params);
    assert_eq!(snapshots.len(), 1);

    let results = &snapshots[0];
    assert_eq!(results.completed_runs, 1);
    // the single infection recovers on day 1; ever-infected stays at 1
    assert_eq!(results.n_days(), MIN_HORIZON_DAYS as usize + 1);
    assert_eq!(results.avg_first_detection_day, 0.0);
    assert_eq!(results.avg_tenth_detection_day, 0.0);
    assert_eq!(<[f64; 2]>::from(results.first_detection_day_95_ci), [0.0, 0.0]);
    assert_eq!(<[f64; 2]>::from(results.tenth_detection_day_95_ci), [0.0, 0.0]);
    assert!(results.aggregated_data.iter().all(|d| d.avg_infected == 1.0));
}

#[test]
fn test_zero_runs_never_calls_back() {
    assert!(collect(small_outbreak(0)).is_empty());
}

#[test]
fn test_progress_is_ordered_and_complete() {
    let snapshots = collect(small_outbreak(8));
    assert_eq!(snapshots.len(), 8);
    for (k, results) in snapshots.iter().enumerate() {
        assert_eq!(results.completed_runs as usize, k + 1);
        assert_eq!(results.disease, small_outbreak(8).disease);
    }
    // the series only ever grows
    for pair in snapshots.windows(2) {
        assert!(pair[1].n_days() >= pair[0].n_days());
    }
}

#[test]
fn test_averages_stay_within_population() {
    let params = small_outbreak(10);
    let population = params.population as f64;
    for results in collect(params) {
        assert!(results.n_days() > MIN_HORIZON_DAYS as usize);
        for d in &results.aggregated_data {
            assert!(d.avg_infected >= 0.0 && d.avg_infected <= population, "{:?}", d);
        }
        for ci in [results.first_detection_day_95_ci, results.tenth_detection_day_95_ci] {
            assert!(ci.low <= ci.high);
        }
        assert!(results.first_detection_day_95_ci.contains(results.avg_first_detection_day));
        assert!(results.tenth_detection_day_95_ci.contains(results.avg_tenth_detection_day));
    }
}

#[test]
fn test_same_seed_is_reproducible() {
    let a = collect(small_outbreak(4));
    let b = collect(small_outbreak(4));
    assert_eq!(a, b);
}

#[test]
fn test_histories_terminate_correctly() {
    let mut sim = MonteCarlo::new(small_outbreak(6));
    sim.by_ref().for_each(drop);
    for history in sim.accumulator().histories() {
        let last = history.last().unwrap();
        assert!(last.day >= MIN_HORIZON_DAYS);
        assert!(last.is_extinct() || last.tenth_detection_day.is_some());
        if let Some(tenth) = last.tenth_detection_day {
            assert!(tenth >= last.first_detection_day.unwrap());
        }
    }
}

#[test]
fn test_expected_model_runs_are_identical() {
    let mut params = small_outbreak(3);
    params.transition_model = TransitionModel::Expected;
    let snapshots = collect(params);
    let last = snapshots.last().unwrap();
    // every run follows the same deterministic path
    assert_eq!(last.first_detection_day_95_ci.width(), 0.0);
    assert_eq!(last.tenth_detection_day_95_ci.width(), 0.0);
    assert_eq!(last.aggregated_data, snapshots[0].aggregated_data);
}

#[test]
fn test_cancellation_stops_between_runs() {
    let cancel = AtomicBool::new(false);
    let mut seen = 0;
    let completed = run_monte_carlo_until(small_outbreak(10), &cancel, |results| {
        seen += 1;
        if results.completed_runs == 3 {
            cancel.store(true, Ordering::Relaxed);
        }
    });
    assert_eq!(completed, 3);
    assert_eq!(seen, 3);
}

#[tokio::test]
async fn test_async_driver_matches_sync() {
    let mut snapshots = Vec::new();
    run_monte_carlo_async(small_outbreak(4), |results| snapshots.push(results)).await;
    assert_eq!(snapshots, collect(small_outbreak(4)));
}

#[tokio::test]
async fn test_async_driver_yields_between_runs() {
    let ticks = std::sync::Arc::new(std::sync::atomic::AtomicU32::new(0));
    let counter = ticks.clone();
    let ticker = tokio::spawn(async move {
        loop {
            counter.fetch_add(1, Ordering::Relaxed);
            tokio::task::yield_now().await;
        }
    });

    let mut observed = Vec::new();
    run_monte_carlo_async(small_outbreak(5), |_| observed.push(ticks.load(Ordering::Relaxed)))
        .await;
    ticker.abort();

    assert_eq!(observed.len(), 5);
    // the ticker task got scheduled in between progress callbacks
    assert!(observed.last().unwrap() > observed.first().unwrap());
}

#[test]
fn test_sweep_preserves_order() {
    let base = small_outbreak(3);
    let scenarios = transmission_sweep(&base, &[0.0, 0.6]);
    let results = run_sweep(scenarios, Some(2)).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].params.disease.transmission_rate, 0.0);
    assert_eq!(results[1].params.disease.transmission_rate, 0.6);
    for r in &results {
        assert_eq!(r.results.as_ref().unwrap().completed_runs, 3);
    }
    // a sweep scenario matches a standalone orchestration of the same params
    assert_eq!(results[1].results.as_ref(), collect(small_outbreak(3)).last());
}

#[test]
fn test_sweep_with_zero_runs() {
    let results = run_sweep(vec![small_outbreak(0)], Some(1)).unwrap();
    assert!(results[0].results.is_none());
}
