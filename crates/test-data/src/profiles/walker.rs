//! Walker athletic profile.

use rand::{Rng, RngCore};
use workouts::WorkoutKind;

use super::{AthleteProfile, sample_duration, sample_variance, sample_weight};

/// Athletic profile for sports walking.
///
/// - Base cadence: ~115 steps/min
/// - Height drawn uniformly from a typical adult range
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Mean body weight in kg.
    weight: f64,
    /// Height range in cm.
    height_range: (f64, f64),
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 115.0,
            weight: 75.0,
            height_range: (155.0, 195.0),
            variance: 0.1,
        }
    }
}

impl WalkerProfile {
    /// Creates a brisk walker profile (~130 steps/min).
    pub fn brisk() -> Self {
        Self {
            cadence: 130.0,
            ..Default::default()
        }
    }

    /// Creates a leisurely walker profile (~95 steps/min).
    pub fn leisurely() -> Self {
        Self {
            cadence: 95.0,
            variance: 0.15,
            ..Default::default()
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn sample_args(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let duration = sample_duration(rng, 0.25, 3.0);
        let steps = (self.cadence * sample_variance(self, rng) * duration * 60.0).round();
        let weight = sample_weight(rng, self.weight);
        let (min_cm, max_cm) = self.height_range;
        let height = rng.gen_range(min_cm..=max_cm).round();
        vec![steps, duration, weight, height]
    }
}
