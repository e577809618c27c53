use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use outbreak_shared::config::{SimulationParams, TransitionModel};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModelArg {
    Binomial,
    Expected,
}

impl From<ModelArg> for TransitionModel {
    fn from(model: ModelArg) -> Self {
        match model {
            ModelArg::Binomial => TransitionModel::Binomial,
            ModelArg::Expected => TransitionModel::Expected,
        }
    }
}

/// Scenario flags shared by `run` and `sweep`. Flags override the JSON file,
/// which overrides the built-in defaults.
#[derive(Debug, Args)]
pub struct ParamArgs {
    /// JSON parameter file (missing fields fall back to defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of Monte Carlo runs
    #[arg(long)]
    pub runs: Option<u32>,
    /// Base seed; run i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,
    /// Population size
    #[arg(long)]
    pub population: Option<u64>,
    /// Initially infected individuals
    #[arg(long)]
    pub initial_infected: Option<u64>,
    /// Initially exposed individuals
    #[arg(long)]
    pub initial_exposed: Option<u64>,
    /// Per-day transmission rate (beta)
    #[arg(long)]
    pub transmission_rate: Option<f64>,
    /// Mean incubation period in days
    #[arg(long)]
    pub incubation_days: Option<f64>,
    /// Mean infectious period in days
    #[arg(long)]
    pub recovery_days: Option<f64>,
    /// Probability that a new infection is detected
    #[arg(long)]
    pub detection_probability: Option<f64>,
    /// Transition draw model
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,
}

impl ParamArgs {
    pub fn load(&self) -> anyhow::Result<SimulationParams> {
        let mut params = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => SimulationParams::default(),
        };

        if let Some(v) = self.runs {
            params.num_runs = v;
        }
        if let Some(v) = self.seed {
            params.seed = v;
        }
        if let Some(v) = self.population {
            params.population = v;
        }
        if let Some(v) = self.initial_infected {
            params.initial_infected = v;
        }
        if let Some(v) = self.initial_exposed {
            params.initial_exposed = v;
        }
        if let Some(v) = self.transmission_rate {
            params.disease.transmission_rate = v;
        }
        if let Some(v) = self.incubation_days {
            params.disease.incubation_days = v;
        }
        if let Some(v) = self.recovery_days {
            params.disease.recovery_days = v;
        }
        if let Some(v) = self.detection_probability {
            params.disease.detection_probability = v;
        }
        if let Some(v) = self.model {
            params.transition_model = v.into();
        }

        params.validate().context("Invalid simulation parameters")?;
        Ok(params)
    }
}
