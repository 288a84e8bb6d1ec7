//! Turns a sensor type code and its flat argument list into a [`Workout`].

use tracing::warn;

use crate::{
    errors::WorkoutError,
    models::{Workout, WorkoutKind},
};

/// Builds a workout from a raw sensor package.
///
/// Arguments are positional and depend on the kind:
/// - `"RUN"`: `action, duration, weight`
/// - `"WLK"`: `action, duration, weight, height`
/// - `"SWM"`: `action, duration, weight, pool_length, lap_count`
///
/// Unknown codes return `Ok(None)`.
pub fn read_package(code: &str, args: &[f64]) -> Result<Option<Workout>, WorkoutError> {
    let Some(kind) = WorkoutKind::from_code(code) else {
        warn!("Unknown workout code {code:?}, ignoring package");
        return Ok(None);
    };
    build(kind, args).map(Some)
}

/// Builds a workout of a known kind from its positional arguments.
pub fn build(kind: WorkoutKind, args: &[f64]) -> Result<Workout, WorkoutError> {
    if args.len() != kind.arity() {
        return Err(WorkoutError::Arity {
            kind,
            expected: kind.arity(),
            actual: args.len(),
        });
    }

    let action = count("action", args[0])?;
    let (duration, weight) = (args[1], args[2]);

    match kind {
        WorkoutKind::Running => Workout::running(action, duration, weight),
        WorkoutKind::Walking => Workout::walking(action, duration, weight, args[3]),
        WorkoutKind::Swimming => Workout::swimming(
            action,
            duration,
            weight,
            args[3],
            count("lap_count", args[4])?,
        ),
    }
}

fn count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(WorkoutError::InvalidCount { field, value });
    }
    Ok(value as u32)
}
