use serde::{Deserialize, Serialize};

use crate::config::DiseaseParams;
use crate::stats::ConfidenceInterval;

/// Cross-run average for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedState {
    pub day: u32,
    /// Mean of `infected + recovered` over the runs that reached `day`.
    pub avg_infected: f64,
}

/// Point-in-time snapshot handed out after every completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub aggregated_data: Vec<AggregatedState>,
    pub avg_first_detection_day: f64,
    pub avg_tenth_detection_day: f64,
    pub first_detection_day_95_ci: ConfidenceInterval,
    pub tenth_detection_day_95_ci: ConfidenceInterval,
    pub completed_runs: u32,
    pub disease: DiseaseParams,
}

impl SimulationResults {
    pub fn n_days(&self) -> usize {
        self.aggregated_data.len()
    }

    pub fn peak_avg_infected(&self) -> f64 {
        self.aggregated_data
            .iter()
            .map(|d| d.avg_infected)
            .fold(0.0, f64::max)
    }

    /// Final cumulative average, i.e. the last day of the longest run.
    pub fn final_avg_infected(&self) -> f64 {
        self.aggregated_data.last().map_or(0.0, |d| d.avg_infected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(values: &[f64]) -> SimulationResults {
        SimulationResults {
            aggregated_data: values
                .iter()
                .enumerate()
                .map(|(day, &avg_infected)| AggregatedState { day: day as u32, avg_infected })
                .collect(),
            avg_first_detection_day: 0.0,
            avg_tenth_detection_day: 0.0,
            first_detection_day_95_ci: ConfidenceInterval::default(),
            tenth_detection_day_95_ci: ConfidenceInterval::default(),
            completed_runs: 1,
            disease: DiseaseParams::default(),
        }
    }

    #[test]
    fn test_summary_accessors() {
        let r = results(&[1.0, 4.0, 9.0, 8.5]);
        assert_eq!(r.n_days(), 4);
        assert_eq!(r.peak_avg_infected(), 9.0);
        assert_eq!(r.final_avg_infected(), 8.5);
        assert_eq!(results(&[]).final_avg_infected(), 0.0);
    }
}
