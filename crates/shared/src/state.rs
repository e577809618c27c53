use serde::{Deserialize, Serialize};

/// Detected-case counts at which a detection day is recorded.
pub const FIRST_DETECTION_THRESHOLD: u64 = 1;
pub const TENTH_DETECTION_THRESHOLD: u64 = 10;

/// Epidemic snapshot for one simulated day of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    pub day: u32,
    pub susceptible: u64,
    pub exposed: u64,
    pub infected: u64,
    pub recovered: u64,
    /// Every individual that has entered the infected compartment so far.
    pub cumulative_infected: u64,
    /// Detected subset of `cumulative_infected`.
    pub cumulative_detected: u64,
    pub first_detection_day: Option<u32>,
    pub tenth_detection_day: Option<u32>,
}

impl SimulationState {
    #[inline]
    pub fn population(&self) -> u64 {
        self.susceptible + self.exposed + self.infected + self.recovered
    }

    /// Ever-infected count, the quantity averaged across runs.
    #[inline]
    pub fn ever_infected(&self) -> u64 {
        self.infected + self.recovered
    }

    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.infected == 0 && self.exposed == 0
    }
}

/// Day-indexed states of one run; index `i` holds day `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunHistory(Vec<SimulationState>);

impl RunHistory {
    pub fn new(initial: SimulationState) -> Self {
        Self(vec![initial])
    }

    #[inline]
    pub fn push(&mut self, state: SimulationState) {
        debug_assert_eq!(state.day as usize, self.0.len());
        self.0.push(state);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, day: usize) -> Option<&SimulationState> {
        self.0.get(day)
    }

    #[inline]
    pub fn last(&self) -> Option<&SimulationState> {
        self.0.last()
    }

    pub fn states(&self) -> &[SimulationState] {
        &self.0
    }
}

impl From<Vec<SimulationState>> for RunHistory {
    fn from(states: Vec<SimulationState>) -> Self {
        Self(states)
    }
}
