//! Tool error types.

use thiserror::Error;

/// Errors raised by the command-line wrapper itself.
///
/// Calculation failures are not errors here; they are reported through
/// `calculator::Evaluation`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Log filter rejected or subscriber already installed
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),

    /// JSON report could not be produced
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
