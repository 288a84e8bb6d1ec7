//! Athletic profiles.
//!
//! Profiles define plausible sensor values for each workout kind. They are
//! used by the package generator to produce realistic argument lists.

mod runner;
mod swimmer;
mod walker;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use workouts::WorkoutKind;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

/// Trait for athletic profiles.
///
/// Implementations produce sensor arguments in the positional order the
/// workout dispatcher expects for [`AthleteProfile::kind`].
pub trait AthleteProfile: Send + Sync {
    /// The workout kind this profile produces packages for.
    fn kind(&self) -> WorkoutKind;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Samples one argument list.
    fn sample_args(&self, rng: &mut dyn RngCore) -> Vec<f64>;
}

/// Samples a variance factor from a normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut dyn RngCore) -> f64 {
    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}

/// Samples a workout duration in hours, rounded to whole minutes.
pub(crate) fn sample_duration(rng: &mut dyn RngCore, min_h: f64, max_h: f64) -> f64 {
    let minutes = rng.gen_range((min_h * 60.0).round()..=(max_h * 60.0).round());
    minutes.round() / 60.0
}

/// Samples a body weight around `mean` kilograms.
pub(crate) fn sample_weight(rng: &mut dyn RngCore, mean: f64) -> f64 {
    match Normal::new(mean, mean * 0.12) {
        Ok(normal) => normal.sample(rng).clamp(40.0, 150.0).round(),
        Err(_) => mean,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_variance_factor_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let profile = RunnerProfile::default();
        for _ in 0..200 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
    }

    #[test]
    fn test_zero_variance_is_neutral() {
        let mut rng = StdRng::seed_from_u64(7);
        let profile = RunnerProfile::steady();
        assert!((sample_variance(&profile, &mut rng) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duration_is_whole_minutes() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let duration = sample_duration(&mut rng, 0.5, 2.0);
            assert!((0.5..=2.0).contains(&duration));
            let minutes = duration * 60.0;
            assert!((minutes - minutes.round()).abs() < 1e-9);
        }
    }
}
