use std::fmt;

use crate::models::{Metrics, Workout};

/// Summary of one workout, ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Kilometres per hour.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(training_type: &'static str, duration: f64, metrics: Metrics) -> Self {
        Self {
            training_type,
            duration,
            distance: metrics.distance,
            speed: metrics.mean_speed,
            calories: metrics.calories,
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl Workout {
    pub fn info(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().display_name(),
            self.reading().duration,
            self.metrics(),
        )
    }
}
