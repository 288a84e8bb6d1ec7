use std::io::Write;

use tracing::{debug, error, info};

use crate::{
    config::{DriverConfig, ErrorPolicy},
    dispatch::read_package,
    errors::DriverError,
};

/// Counts of what happened to the configured packages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reported: usize,
    /// Packages with an unknown type code.
    pub skipped: usize,
    /// Packages that failed under [`ErrorPolicy::Skip`].
    pub failed: usize,
}

/// Processes every configured package in order, writing one report line per
/// workout to `out`.
pub fn run(config: &DriverConfig, out: &mut impl Write) -> Result<RunSummary, DriverError> {
    let mut summary = RunSummary::default();

    for (index, package) in config.packages.iter().enumerate() {
        let workout = match read_package(&package.code, &package.args) {
            Ok(Some(workout)) => workout,
            Ok(None) => {
                summary.skipped += 1;
                continue;
            }
            Err(source) => match config.on_error {
                ErrorPolicy::Abort => {
                    return Err(DriverError::Package {
                        index,
                        code: package.code.clone(),
                        source,
                    });
                }
                ErrorPolicy::Skip => {
                    error!(index, code = %package.code, "Skipping package: {source}");
                    summary.failed += 1;
                    continue;
                }
            },
        };

        let message = workout.info();
        debug!(index, kind = %workout.kind(), ?message, "Computed workout");
        writeln!(out, "{message}")?;
        summary.reported += 1;
    }

    info!(
        reported = summary.reported,
        skipped = summary.skipped,
        failed = summary.failed,
        "Run complete"
    );
    Ok(summary)
}
