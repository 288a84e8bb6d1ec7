//! Sensor package generation from athlete profiles.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;
use workouts::{DriverConfig, ErrorPolicy, SensorPackage};

use crate::profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile};

/// Type codes that the workout dispatcher does not recognize.
pub const UNKNOWN_CODES: [&str; 4] = ["XYZ", "BIK", "ROW", "swm"];

/// Generates sensor packages deterministically from a seed.
pub struct PackageGenerator {
    rng: StdRng,
    profiles: Vec<Box<dyn AthleteProfile>>,
    /// Probability (0.0-1.0) that a package gets an unknown type code.
    unknown_fraction: f64,
}

impl PackageGenerator {
    /// Creates a generator cycling through the default swimmer, runner and
    /// walker profiles.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            profiles: vec![
                Box::new(SwimmerProfile::default()),
                Box::new(RunnerProfile::default()),
                Box::new(WalkerProfile::default()),
            ],
            unknown_fraction: 0.0,
        }
    }

    /// Replaces the profile rotation.
    pub fn with_profiles(mut self, profiles: Vec<Box<dyn AthleteProfile>>) -> Self {
        self.profiles = profiles;
        self
    }

    /// Makes roughly `fraction` of generated packages carry an unknown code.
    pub fn with_unknown_codes(mut self, fraction: f64) -> Self {
        self.unknown_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Samples one package from `profile`.
    pub fn package(&mut self, profile: &dyn AthleteProfile) -> SensorPackage {
        let args = profile.sample_args(&mut self.rng);
        SensorPackage::new(profile.kind().code(), args)
    }

    /// Samples `count` packages, cycling through the configured profiles.
    pub fn packages(&mut self, count: usize) -> Vec<SensorPackage> {
        if self.profiles.is_empty() {
            return Vec::new();
        }

        let mut packages = Vec::with_capacity(count);
        for i in 0..count {
            let profile = &self.profiles[i % self.profiles.len()];
            let args = profile.sample_args(&mut self.rng);
            let code = if self.unknown_fraction > 0.0
                && self.rng.r#gen::<f64>() < self.unknown_fraction
            {
                UNKNOWN_CODES[self.rng.gen_range(0..UNKNOWN_CODES.len())]
            } else {
                profile.kind().code()
            };
            packages.push(SensorPackage::new(code, args));
        }

        debug!(count, "Generated sensor packages");
        packages
    }

    /// Builds a driver configuration of `count` generated packages.
    pub fn config(&mut self, count: usize, on_error: ErrorPolicy) -> DriverConfig {
        DriverConfig {
            packages: self.packages(count),
            on_error,
        }
    }
}
