//! Day-0 construction and the one-day stochastic SEIR transition.

use outbreak_shared::config::SimulationParams;
use outbreak_shared::state::{
    SimulationState, FIRST_DETECTION_THRESHOLD, TENTH_DETECTION_THRESHOLD,
};
use rand::Rng;

use crate::transitions::{draw, exit_probability, infection_probability};

/// Builds the day-0 state. Seeds larger than the population are a caller
/// error and leave no susceptibles.
pub fn initialize(params: &SimulationParams) -> SimulationState {
    SimulationState {
        day: 0,
        susceptible: params
            .population
            .saturating_sub(params.initial_exposed)
            .saturating_sub(params.initial_infected),
        exposed: params.initial_exposed,
        infected: params.initial_infected,
        recovered: 0,
        cumulative_infected: params.initial_infected,
        cumulative_detected: 0,
        first_detection_day: None,
        tenth_detection_day: None,
    }
}

/// Advances `state` by one day.
///
/// All three flows are drawn from the previous day's counts, so no
/// compartment is overdrawn and the population total is unchanged. Only new
/// E→I transitions are eligible for detection.
pub fn step<R: Rng + ?Sized>(
    state: &SimulationState,
    params: &SimulationParams,
    rng: &mut R,
) -> SimulationState {
    let disease = &params.disease;
    let model = params.transition_model;

    let p_inf = infection_probability(disease.transmission_rate, state.infected, state.population());
    let new_exposed = draw(model, rng, state.susceptible, p_inf);
    let new_infected = draw(model, rng, state.exposed, exit_probability(disease.incubation_days));
    let new_recovered = draw(model, rng, state.infected, exit_probability(disease.recovery_days));
    let new_detected = draw(model, rng, new_infected, disease.detection_probability);

    let day = state.day + 1;
    let cumulative_detected = state.cumulative_detected + new_detected;

    SimulationState {
        day,
        susceptible: state.susceptible - new_exposed,
        exposed: state.exposed + new_exposed - new_infected,
        infected: state.infected + new_infected - new_recovered,
        recovered: state.recovered + new_recovered,
        cumulative_infected: state.cumulative_infected + new_infected,
        cumulative_detected,
        first_detection_day: sticky(
            state.first_detection_day,
            cumulative_detected,
            FIRST_DETECTION_THRESHOLD,
            day,
        ),
        tenth_detection_day: sticky(
            state.tenth_detection_day,
            cumulative_detected,
            TENTH_DETECTION_THRESHOLD,
            day,
        ),
    }
}

// Once set, a detection day is never overwritten.
#[inline]
fn sticky(previous: Option<u32>, detected: u64, threshold: u64, day: u32) -> Option<u32> {
    previous.or((detected >= threshold).then_some(day))
}
