use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{DriverConfig, run};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DriverConfig::from_env()?;
    tracing::debug!(
        packages = config.packages.len(),
        on_error = ?config.on_error,
        "Loaded configuration"
    );

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())?;

    Ok(())
}
