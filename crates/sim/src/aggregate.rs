use outbreak_shared::result::AggregatedState;
use outbreak_shared::state::RunHistory;

/// Averages `infected + recovered` per day across `histories`.
///
/// The series spans the longest history. A day only averages the runs that
/// reached it; shorter runs are left out rather than counted as zero, so
/// later days describe the longer-lived epidemics.
pub fn aggregate(histories: &[RunHistory]) -> Vec<AggregatedState> {
    let max_days = histories.iter().map(RunHistory::len).max().unwrap_or(0);

    (0..max_days)
        .map(|day| {
            let (total, runs_with_day) = histories
                .iter()
                .filter_map(|run| run.get(day))
                .fold((0u64, 0u64), |(total, n), s| (total + s.ever_infected(), n + 1));
            // the longest history always covers `day`
            debug_assert!(runs_with_day > 0);
            AggregatedState {
                day: day as u32,
                avg_infected: total as f64 / runs_with_day.max(1) as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak_shared::state::SimulationState;

    fn history(len: usize, ever_infected: impl Fn(usize) -> u64) -> RunHistory {
        (0..len)
            .map(|day| {
                let cumulative = ever_infected(day);
                SimulationState {
                    day: day as u32,
                    susceptible: 1_000 - cumulative,
                    exposed: 0,
                    infected: cumulative / 2,
                    recovered: cumulative - cumulative / 2,
                    cumulative_infected: cumulative,
                    cumulative_detected: 0,
                    first_detection_day: None,
                    tenth_detection_day: None,
                }
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_ragged_runs_average_survivors_only() {
        let short = history(15, |_| 10);
        let long = history(30, |_| 30);
        let series = aggregate(&[short, long]);

        assert_eq!(series.len(), 30);
        assert_eq!(series[5].avg_infected, 20.0);
        assert_eq!(series[14].avg_infected, 20.0);
        // only the length-30 run reaches day 20
        assert_eq!(series[20].avg_infected, 30.0);
        for (i, d) in series.iter().enumerate() {
            assert_eq!(d.day as usize, i);
        }
    }

    #[test]
    fn test_counts_infected_plus_recovered() {
        let series = aggregate(&[history(21, |day| day as u64 * 3)]);
        assert_eq!(series[0].avg_infected, 0.0);
        assert_eq!(series[7].avg_infected, 21.0);
        assert_eq!(series[20].avg_infected, 60.0);
    }
}
