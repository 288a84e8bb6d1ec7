//! Workout statistics for swimming, running and walking.
//!
//! A sensor package (a type code plus positional numeric arguments) is turned
//! into a [`Workout`] by [`read_package`], its [`Metrics`] are derived from
//! per-kind formulas, and [`InfoMessage`] renders the one-line summary.

pub mod config;
pub mod dispatch;
pub mod driver;
pub mod errors;
pub mod formulas;
pub mod models;
pub mod report;

pub use config::{DriverConfig, ErrorPolicy, SensorPackage};
pub use dispatch::read_package;
pub use driver::{RunSummary, run};
pub use errors::{ConfigError, DriverError, WorkoutError};
pub use models::{Metrics, SensorReading, Workout, WorkoutKind};
pub use report::InfoMessage;
