use std::fmt;

use crate::errors::WorkoutError;

/// The closed set of supported workout types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    Walking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    /// Looks up the kind for a sensor type code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(WorkoutKind::Swimming),
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::Walking),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
        }
    }

    /// Label used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
        }
    }

    /// Number of positional arguments in a sensor package of this kind.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fields every sensor package carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Steps, or strokes when swimming.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl SensorReading {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(WorkoutError::InvalidDuration(duration));
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

/// A single workout built from one sensor package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming {
        reading: SensorReading,
        /// Metres.
        pool_length: f64,
        lap_count: u32,
    },
    Running {
        reading: SensorReading,
    },
    Walking {
        reading: SensorReading,
        /// Centimetres.
        height: f64,
    },
}

impl Workout {
    pub fn running(action: u32, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        Ok(Workout::Running {
            reading: SensorReading::new(action, duration, weight)?,
        })
    }

    pub fn walking(
        action: u32,
        duration: f64,
        weight: f64,
        height: f64,
    ) -> Result<Self, WorkoutError> {
        let reading = SensorReading::new(action, duration, weight)?;
        if !height.is_finite() || height <= 0.0 {
            return Err(WorkoutError::InvalidHeight(height));
        }
        Ok(Workout::Walking { reading, height })
    }

    pub fn swimming(
        action: u32,
        duration: f64,
        weight: f64,
        pool_length: f64,
        lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Workout::Swimming {
            reading: SensorReading::new(action, duration, weight)?,
            pool_length,
            lap_count,
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Swimming { .. } => WorkoutKind::Swimming,
            Workout::Running { .. } => WorkoutKind::Running,
            Workout::Walking { .. } => WorkoutKind::Walking,
        }
    }

    pub fn reading(&self) -> &SensorReading {
        match self {
            Workout::Swimming { reading, .. }
            | Workout::Running { reading }
            | Workout::Walking { reading, .. } => reading,
        }
    }
}

/// Statistics derived from a workout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Kilometres.
    pub distance: f64,
    /// Kilometres per hour.
    pub mean_speed: f64,
    pub calories: f64,
}
