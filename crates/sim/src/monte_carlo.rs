//! Sequences independent runs and publishes a fresh snapshot after each one.
//!
//! Runs execute one at a time on the caller's thread. The only suspension
//! point is between runs: [`MonteCarlo::next`] returns after a single run,
//! and the async driver awaits a yield before starting the next one.

use std::sync::atomic::{AtomicBool, Ordering};

use outbreak_shared::config::{DiseaseParams, SimulationParams};
use outbreak_shared::result::SimulationResults;
use outbreak_shared::state::RunHistory;
use outbreak_shared::stats::{confidence_interval_95, mean};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::aggregate::aggregate;
use crate::engine::{run_simulation, run_simulation_capped, RunError};

/// Cross-run state for one orchestration: every history so far plus the
/// detection-day samples taken from their final states.
#[derive(Debug, Clone)]
pub struct RunAccumulator {
    disease: DiseaseParams,
    histories: Vec<RunHistory>,
    first_detection_days: Vec<f64>,
    tenth_detection_days: Vec<f64>,
}

impl RunAccumulator {
    pub fn new(disease: DiseaseParams) -> Self {
        Self {
            disease,
            histories: Vec::new(),
            first_detection_days: Vec::new(),
            tenth_detection_days: Vec::new(),
        }
    }

    /// Folds in one finished run and rebuilds the full snapshot.
    pub fn record(&mut self, history: RunHistory) -> SimulationResults {
        if let Some(last) = history.last() {
            if let Some(day) = last.first_detection_day {
                self.first_detection_days.push(day as f64);
            }
            if let Some(day) = last.tenth_detection_day {
                self.tenth_detection_days.push(day as f64);
            }
        }
        self.histories.push(history);
        self.snapshot()
    }

    pub fn snapshot(&self) -> SimulationResults {
        SimulationResults {
            aggregated_data: aggregate(&self.histories),
            avg_first_detection_day: mean(&self.first_detection_days),
            avg_tenth_detection_day: mean(&self.tenth_detection_days),
            first_detection_day_95_ci: confidence_interval_95(&self.first_detection_days),
            tenth_detection_day_95_ci: confidence_interval_95(&self.tenth_detection_days),
            completed_runs: self.completed_runs(),
            disease: self.disease.clone(),
        }
    }

    #[inline]
    pub fn completed_runs(&self) -> u32 {
        self.histories.len() as u32
    }

    pub fn histories(&self) -> &[RunHistory] {
        &self.histories
    }
}

/// Lazily performs `params.num_runs` runs, one per call to `next`.
///
/// Dropping the iterator early abandons the remaining runs.
pub struct MonteCarlo {
    params: SimulationParams,
    acc: RunAccumulator,
}

impl MonteCarlo {
    pub fn new(params: SimulationParams) -> Self {
        let acc = RunAccumulator::new(params.disease.clone());
        Self { params, acc }
    }

    pub fn completed_runs(&self) -> u32 {
        self.acc.completed_runs()
    }

    pub fn remaining_runs(&self) -> u32 {
        self.params.num_runs.saturating_sub(self.completed_runs())
    }

    pub fn accumulator(&self) -> &RunAccumulator {
        &self.acc
    }

    /// Like `next`, but a run still going after `max_days` aborts the
    /// orchestration with [`RunError::StepLimit`]. The failed run is not
    /// recorded.
    pub fn next_capped(&mut self, max_days: u32) -> Option<Result<SimulationResults, RunError>> {
        if self.remaining_runs() == 0 {
            return None;
        }
        let mut rng = self.next_rng();
        Some(run_simulation_capped(&self.params, &mut rng, max_days).map(|h| self.finish_run(h)))
    }

    fn next_rng(&self) -> Pcg64 {
        Pcg64::seed_from_u64(self.params.run_seed(self.completed_runs()))
    }

    fn finish_run(&mut self, history: RunHistory) -> SimulationResults {
        if let Some(last) = history.last() {
            tracing::debug!(
                run = self.completed_runs(),
                days = last.day,
                first_detection_day = ?last.first_detection_day,
                tenth_detection_day = ?last.tenth_detection_day,
                "run complete"
            );
        }
        self.acc.record(history)
    }
}

impl Iterator for MonteCarlo {
    type Item = SimulationResults;

    fn next(&mut self) -> Option<SimulationResults> {
        if self.remaining_runs() == 0 {
            return None;
        }
        let mut rng = self.next_rng();
        let history = run_simulation(&self.params, &mut rng);
        Some(self.finish_run(history))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining_runs() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MonteCarlo {}

/// Performs `params.num_runs` runs, calling `on_progress` with a snapshot
/// after each. With zero runs the callback is never invoked.
///
/// Blocks the calling thread until every run is done; runs go back to back
/// with no yield in between. Use [`run_monte_carlo_async`] to hand control
/// back to a runtime between runs, or drive [`MonteCarlo`] directly.
pub fn run_monte_carlo<F>(params: SimulationParams, on_progress: F)
where
    F: FnMut(SimulationResults),
{
    MonteCarlo::new(params).for_each(on_progress);
}

/// Like [`run_monte_carlo`], but stops at the next inter-run yield point once
/// `cancel` is set. Returns the number of completed runs.
pub fn run_monte_carlo_until<F>(params: SimulationParams, cancel: &AtomicBool, mut on_progress: F) -> u32
where
    F: FnMut(SimulationResults),
{
    let mut sim = MonteCarlo::new(params);
    while !cancel.load(Ordering::Relaxed) {
        match sim.next() {
            Some(results) => on_progress(results),
            None => break,
        }
    }
    sim.completed_runs()
}

/// Async driver: hands control back to the runtime between runs so a long
/// orchestration never blocks other tasks for more than one run.
pub async fn run_monte_carlo_async<F>(params: SimulationParams, mut on_progress: F)
where
    F: FnMut(SimulationResults),
{
    let mut sim = MonteCarlo::new(params);
    while let Some(results) = sim.next() {
        on_progress(results);
        if sim.remaining_runs() > 0 {
            tokio::task::yield_now().await;
        }
    }
}
