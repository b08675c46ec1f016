//! Log subscriber setup.
//!
//! Logs are written to stderr; stdout carries only results.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CliConfig;
use crate::error::CliError;

/// Install the global subscriber using the configured filter.
pub fn init_logging(config: &CliConfig) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    tracing::debug!(log_level = %config.log_level, "Logging initialized");
    Ok(())
}
