use outbreak_shared::config::TransitionModel;
use rand::Rng;
use rand_distr::{Binomial, Distribution};

/// Per-day probability that a susceptible individual is infected.
#[inline]
pub fn infection_probability(transmission_rate: f64, infected: u64, population: u64) -> f64 {
    if population == 0 {
        return 0.0;
    }
    let pressure = transmission_rate * infected as f64 / population as f64;
    1.0 - (-pressure).exp()
}

/// Per-day exit probability from a compartment with mean dwell `mean_days`.
#[inline]
pub fn exit_probability(mean_days: f64) -> f64 {
    if mean_days <= 0.0 {
        1.0
    } else {
        1.0 - (-1.0 / mean_days).exp()
    }
}

/// Number of the `n` individuals that make a transition with probability `p`.
/// The result never exceeds `n`.
#[inline]
pub fn draw<R: Rng + ?Sized>(model: TransitionModel, rng: &mut R, n: u64, p: f64) -> u64 {
    // NaN lands in the first arm
    if n == 0 || !(p > 0.0) {
        return 0;
    }
    if p >= 1.0 {
        return n;
    }
    match model {
        TransitionModel::Expected => ((n as f64 * p).round() as u64).min(n),
        TransitionModel::Binomial => match Binomial::new(n, p) {
            Ok(binomial) => binomial.sample(rng).min(n),
            Err(_) => 0,
        },
    }
}
