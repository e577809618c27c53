use outbreak_shared::config::SimulationParams;
use outbreak_shared::state::{RunHistory, SimulationState};
use rand::Rng;
use thiserror::Error;

use crate::step::{initialize, step};

/// Every run is simulated through at least this day, whatever happens earlier.
pub const MIN_HORIZON_DAYS: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("run did not terminate within {max_days} days")]
    StepLimit { max_days: u32 },
}

/// Termination predicate: the outbreak died out or reached tenth detection,
/// and the minimum horizon has been covered.
#[inline]
pub fn is_terminal(state: &SimulationState) -> bool {
    (state.is_extinct() || state.tenth_detection_day.is_some()) && state.day >= MIN_HORIZON_DAYS
}

/// Simulates one run from day 0 until [`is_terminal`] holds.
///
/// There is no upper bound: parameters that neither die out nor reach tenth
/// detection never return. Use [`run_simulation_capped`] when that matters.
pub fn run_simulation<R: Rng + ?Sized>(params: &SimulationParams, rng: &mut R) -> RunHistory {
    let mut state = initialize(params);
    let mut history = RunHistory::new(state.clone());
    loop {
        state = step(&state, params, rng);
        history.push(state.clone());
        if is_terminal(&state) {
            return history;
        }
    }
}

/// Same as [`run_simulation`] but gives up once `max_days` is passed without
/// termination.
pub fn run_simulation_capped<R: Rng + ?Sized>(
    params: &SimulationParams,
    rng: &mut R,
    max_days: u32,
) -> Result<RunHistory, RunError> {
    let mut state = initialize(params);
    let mut history = RunHistory::new(state.clone());
    loop {
        if state.day >= max_days {
            tracing::trace!(max_days, "run hit day cap");
            return Err(RunError::StepLimit { max_days });
        }
        state = step(&state, params, rng);
        history.push(state.clone());
        if is_terminal(&state) {
            return Ok(history);
        }
    }
}
