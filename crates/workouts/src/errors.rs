use thiserror::Error;

use crate::models::WorkoutKind;

/// Failure to build a workout from a raw sensor package.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("{kind} expects {expected} arguments, got {actual}")]
    Arity {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid duration: {0} h (must be positive and finite)")]
    InvalidDuration(f64),

    #[error("Invalid height: {0} (must be positive)")]
    InvalidHeight(f64),

    #[error("Invalid {field}: {value} (must be a non-negative whole number)")]
    InvalidCount { field: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Package #{index} ({code}): {source}")]
    Package {
        index: usize,
        code: String,
        #[source]
        source: WorkoutError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid error policy: {0} (expected \"abort\" or \"skip\")")]
    InvalidPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message_names_kind() {
        let err = WorkoutError::Arity {
            kind: WorkoutKind::Walking,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "SportsWalking expects 4 arguments, got 3");
    }

    #[test]
    fn test_package_error_keeps_source() {
        use std::error::Error as _;

        let err = DriverError::Package {
            index: 2,
            code: "RUN".into(),
            source: WorkoutError::InvalidDuration(0.0),
        };
        assert!(err.to_string().starts_with("Package #2 (RUN)"));
        assert!(err.source().is_some());
    }
}
