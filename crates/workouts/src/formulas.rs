//! Distance, speed and calorie formulas for each workout kind.
//!
//! Every formula is a pure function of the workout's fields and the constants
//! below. Kind-specific behavior is selected by matching on [`Workout`].

use crate::models::{Metrics, Workout, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Metres covered by one step.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Metres covered by one swimming stroke.
pub const STROKE_LENGTH_M: f64 = 1.38;

pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

impl WorkoutKind {
    /// Length of one action (step or stroke) in metres.
    pub fn step_length(&self) -> f64 {
        match self {
            WorkoutKind::Swimming => STROKE_LENGTH_M,
            WorkoutKind::Running | WorkoutKind::Walking => STEP_LENGTH_M,
        }
    }
}

impl Workout {
    /// Distance in kilometres.
    pub fn distance(&self) -> f64 {
        f64::from(self.reading().action) * self.kind().step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    ///
    /// Swimming derives speed from pool length and lap count, not from the
    /// stroke-based distance.
    pub fn mean_speed(&self) -> f64 {
        match *self {
            Workout::Swimming {
                reading,
                pool_length,
                lap_count,
            } => pool_length * f64::from(lap_count) / M_IN_KM / reading.duration,
            Workout::Running { reading } | Workout::Walking { reading, .. } => {
                self.distance() / reading.duration
            }
        }
    }

    pub fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        match *self {
            Workout::Running { reading } => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * reading.weight / M_IN_KM
                    * reading.duration
                    * MIN_IN_H
            }
            Workout::Walking { reading, height } => {
                // Floor division, not rounding.
                let speed_height = (speed.powi(2) / height).floor();
                (WALK_WEIGHT_MULTIPLIER * reading.weight
                    + speed_height * WALK_SPEED_HEIGHT_MULTIPLIER * reading.weight)
                    * reading.duration
                    * MIN_IN_H
            }
            Workout::Swimming { reading, .. } => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * reading.weight
            }
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            distance: self.distance(),
            mean_speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}
