//! Runner athletic profile.

use rand::RngCore;
use workouts::WorkoutKind;

use super::{AthleteProfile, sample_duration, sample_variance, sample_weight};

/// Athletic profile for running workouts.
///
/// Based on typical recreational to competitive runner cadence:
/// - Base cadence: ~165 steps/min
/// - Session length: 20 minutes to 2 hours
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Mean body weight in kg.
    weight: f64,
    /// Shortest and longest session in hours.
    duration_range: (f64, f64),
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 165.0,
            weight: 72.0,
            duration_range: (0.33, 2.0),
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~185 steps/min, lighter).
    pub fn elite() -> Self {
        Self {
            cadence: 185.0,
            weight: 62.0,
            variance: 0.04,
            ..Default::default()
        }
    }

    /// Creates a recreational runner profile (~155 steps/min).
    pub fn recreational() -> Self {
        Self {
            weight: 80.0,
            variance: 0.12,
            ..Self::with_cadence(155.0)
        }
    }

    /// Creates a profile without day-to-day variance.
    pub fn steady() -> Self {
        Self {
            variance: 0.0,
            ..Default::default()
        }
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn sample_args(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let (min_h, max_h) = self.duration_range;
        let duration = sample_duration(rng, min_h, max_h);
        let steps = (self.cadence * sample_variance(self, rng) * duration * 60.0).round();
        let weight = sample_weight(rng, self.weight);
        vec![steps, duration, weight]
    }
}
