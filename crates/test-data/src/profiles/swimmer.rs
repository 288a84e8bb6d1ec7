//! Swimmer athletic profile.

use rand::{Rng, RngCore};
use workouts::WorkoutKind;

use super::{AthleteProfile, sample_duration, sample_variance, sample_weight};

/// Athletic profile for pool swimming.
///
/// Stroke count and lap count are sampled independently: the reported mean
/// speed depends only on pool length and laps.
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Strokes per minute.
    stroke_rate: f64,
    /// Pool lengths swum per hour.
    laps_per_hour: f64,
    /// Pool lengths to choose from, in metres.
    pool_lengths: Vec<f64>,
    /// Mean body weight in kg.
    weight: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            stroke_rate: 12.0,
            laps_per_hour: 40.0,
            pool_lengths: vec![25.0, 50.0],
            weight: 78.0,
            variance: 0.1,
        }
    }
}

impl SwimmerProfile {
    /// Creates a profile restricted to a 50 m pool.
    pub fn long_course() -> Self {
        Self {
            laps_per_hour: 60.0,
            pool_lengths: vec![50.0],
            ..Default::default()
        }
    }

    /// Creates a casual swimmer profile in a 25 m pool.
    pub fn casual() -> Self {
        Self {
            stroke_rate: 9.0,
            laps_per_hour: 24.0,
            pool_lengths: vec![25.0],
            variance: 0.15,
            ..Default::default()
        }
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn sample_args(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let duration = sample_duration(rng, 0.5, 1.5);
        let factor = sample_variance(self, rng);
        let strokes = (self.stroke_rate * factor * duration * 60.0).round();
        let laps = (self.laps_per_hour * factor * duration).round();
        let weight = sample_weight(rng, self.weight);
        let pool_length = if self.pool_lengths.is_empty() {
            25.0
        } else {
            self.pool_lengths[rng.gen_range(0..self.pool_lengths.len())]
        };
        vec![strokes, duration, weight, pool_length, laps]
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_sample_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let args = SwimmerProfile::long_course().sample_args(&mut rng);
        assert_eq!(args.len(), WorkoutKind::Swimming.arity());
        assert!((args[3] - 50.0).abs() < f64::EPSILON);
        assert!(args[4] >= 0.0);
    }
}
