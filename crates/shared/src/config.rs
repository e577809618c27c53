use serde::{Deserialize, Serialize};
use thiserror::Error;

// Baseline scenario parameters
pub const BASELINE_RUNS: u32 = 100;
pub const POPULATION: u64 = 10_000;
pub const INITIAL_EXPOSED: u64 = 0;
pub const INITIAL_INFECTED: u64 = 1;
pub const DISEASE_NAME: &str = "COVID-19";
pub const TRANSMISSION_RATE: f64 = 0.3; // β, R0 ≈ β · recovery_days
pub const INCUBATION_DAYS: f64 = 5.0;
pub const RECOVERY_DAYS: f64 = 10.0;
pub const DETECTION_PROBABILITY: f64 = 0.1;

/// How a compartment flow turns a per-individual probability into a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionModel {
    /// Each individual moves independently: `Binomial(n, p)`.
    #[default]
    Binomial,
    /// Deterministic mean-field flow: `round(n · p)`. Draws no randomness.
    Expected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseParams {
    pub name: String,
    pub transmission_rate: f64,
    pub incubation_days: f64,
    pub recovery_days: f64,
    pub detection_probability: f64,
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self {
            name: DISEASE_NAME.to_string(),
            transmission_rate: TRANSMISSION_RATE,
            incubation_days: INCUBATION_DAYS,
            recovery_days: RECOVERY_DAYS,
            detection_probability: DETECTION_PROBABILITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub population: u64,
    pub initial_exposed: u64,
    pub initial_infected: u64,
    pub disease: DiseaseParams,
    pub num_runs: u32,
    /// Base seed; run `i` draws from a stream seeded with `seed + i`.
    pub seed: u64,
    pub transition_model: TransitionModel,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            population: POPULATION,
            initial_exposed: INITIAL_EXPOSED,
            initial_infected: INITIAL_INFECTED,
            disease: DiseaseParams::default(),
            num_runs: BASELINE_RUNS,
            seed: 0,
            transition_model: TransitionModel::Binomial,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("initial seeds ({seeded}) exceed population ({population})")]
    SeedsExceedPopulation { seeded: u64, population: u64 },
    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidRate { field: &'static str, value: f64 },
    #[error("detection_probability must be within [0, 1], got {0}")]
    DetectionProbability(f64),
}

impl SimulationParams {
    /// Seed for the `run`-th independent trial.
    #[inline]
    pub fn run_seed(&self, run: u32) -> u64 {
        self.seed.wrapping_add(run as u64)
    }

    /// Checks the caller-side preconditions. The engine never calls this;
    /// invalid input there yields degenerate output instead of an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seeded = self.initial_exposed.saturating_add(self.initial_infected);
        if seeded > self.population {
            return Err(ConfigError::SeedsExceedPopulation {
                seeded,
                population: self.population,
            });
        }

        let rates = [
            ("transmission_rate", self.disease.transmission_rate),
            ("incubation_days", self.disease.incubation_days),
            ("recovery_days", self.disease.recovery_days),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { field, value });
            }
        }

        let p = self.disease.detection_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::DetectionProbability(p));
        }
        Ok(())
    }
}
