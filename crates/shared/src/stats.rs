/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.96;

/// Closed interval estimate for a mean, serialized as `[low, high]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

impl ConfidenceInterval {
    #[inline]
    pub fn point(value: f64) -> Self {
        Self { low: value, high: value }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl From<[f64; 2]> for ConfidenceInterval {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<ConfidenceInterval> for [f64; 2] {
    fn from(ci: ConfidenceInterval) -> Self {
        [ci.low, ci.high]
    }
}

/// Arithmetic mean; 0 for no samples.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

/// Sample standard deviation (n − 1 denominator). `None` below two samples.
pub fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let m = mean(samples);
    let ss: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    Some((ss / (samples.len() - 1) as f64).sqrt())
}

/// Normal-approximation 95% interval for the mean of `samples`.
///
/// Fewer than two samples give the degenerate interval `[mean, mean]`
/// (`[0, 0]` when empty).
pub fn confidence_interval_95(samples: &[f64]) -> ConfidenceInterval {
    let m = mean(samples);
    match sample_std_dev(samples) {
        None => ConfidenceInterval::point(m),
        Some(sd) => {
            let half = Z_95 * sd / (samples.len() as f64).sqrt();
            ConfidenceInterval { low: m - half, high: m + half }
        }
    }
}
