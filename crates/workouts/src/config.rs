//! Driver configuration: which sensor packages to process and what to do when
//! one of them fails.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const CONFIG_PATH_VAR: &str = "WORKOUTS_CONFIG";
pub const ON_ERROR_VAR: &str = "WORKOUTS_ON_ERROR";

/// Raw sensor data for one workout: a type code and its positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub args: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, args: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            args: args.into(),
        }
    }
}

/// What the driver does when a package cannot be turned into a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first failing package.
    #[default]
    Abort,
    /// Log the failure and continue with the next package.
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    pub packages: Vec<SensorPackage>,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            packages: reference_packages(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl DriverConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration through `get` instead of the process environment.
    ///
    /// `WORKOUTS_CONFIG` names a JSON file replacing the built-in packages;
    /// `WORKOUTS_ON_ERROR` overrides the error policy.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = match get(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(policy) = get(ON_ERROR_VAR) {
            config.on_error = policy.parse()?;
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The three sample packages processed when nothing else is configured.
pub fn reference_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_data() {
        let config = DriverConfig::default();
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        let codes: Vec<&str> = config.packages.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
        assert_eq!(config.packages[2].args, vec![9000.0, 1.0, 75.0, 180.0]);
    }

    #[test]
    fn test_from_env_without_vars() {
        let config = DriverConfig::from_env_with(|_| None).expect("cfg");
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn test_from_env_policy_override() {
        let get = |k: &str| match k {
            ON_ERROR_VAR => Some("Skip".into()),
            _ => None,
        };
        let config = DriverConfig::from_env_with(get).expect("cfg");
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.packages, reference_packages());
    }

    #[test]
    fn test_from_env_invalid_policy() {
        let get = |k: &str| match k {
            ON_ERROR_VAR => Some("retry".into()),
            _ => None,
        };
        let res = DriverConfig::from_env_with(get);
        assert!(matches!(res, Err(ConfigError::InvalidPolicy(p)) if p == "retry"));
    }

    #[test]
    fn test_from_env_missing_file() {
        let get = |k: &str| match k {
            CONFIG_PATH_VAR => Some("/nonexistent/workouts.json".into()),
            _ => None,
        };
        let res = DriverConfig::from_env_with(get);
        assert!(matches!(res, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_from_json() {
        let config = DriverConfig::from_json(
            r#"{"packages":[{"code":"RUN","args":[15000,1,75]}],"on_error":"skip"}"#,
        )
        .expect("cfg");
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(
            config.packages,
            vec![SensorPackage::new("RUN", [15000.0, 1.0, 75.0])]
        );
    }

    #[test]
    fn test_from_json_defaults_policy() {
        let config = DriverConfig::from_json(r#"{"packages":[]}"#).expect("cfg");
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert!(config.packages.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            DriverConfig::from_json("{\"packages\": 3}"),
            Err(ConfigError::Parse(_))
        ));
    }
}
