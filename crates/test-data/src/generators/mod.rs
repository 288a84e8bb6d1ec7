//! Sensor package generators for test data.
//!
//! - [`PackageGenerator`]: seeded generation of [`SensorPackage`](workouts::SensorPackage)
//!   lists from athlete profiles, optionally mixed with unknown type codes

pub mod package;

pub use package::{PackageGenerator, UNKNOWN_CODES};
