//! Logging setup and configuration

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log levels accepted in configuration files and on the command line
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn is_valid_log_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level)
}

/// Setup tracing subscriber for the application
///
/// `RUST_LOG` takes precedence over `default_level`. Output goes to stderr so
/// that device listings on stdout stay machine-readable.
pub fn setup_logging(default_level: &str) -> crate::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| crate::Error::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| crate::Error::Config(format!("Logging already initialized: {}", e)))?;

    Ok(())
}
