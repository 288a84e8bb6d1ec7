//! Test data generation for workouts.
//!
//! This crate produces plausible sensor packages for swimming, running and
//! walking workouts to support manual runs of the `workouts` driver and
//! property-style integration tests.
//!
//! # Quick Start
//!
//! ```rust
//! use test_data::prelude::*;
//!
//! let mut generator = PackageGenerator::new(12345).with_unknown_codes(0.1);
//! let config = generator.config(30, ErrorPolicy::Skip);
//! assert_eq!(config.packages.len(), 30);
//! ```

pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::{DriverConfig, ErrorPolicy, SensorPackage, WorkoutKind};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::generators::{PackageGenerator, UNKNOWN_CODES};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{DriverConfig, ErrorPolicy, SensorPackage, WorkoutKind};
}
