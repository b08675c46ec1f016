//! Tool configuration from environment variables and flags.

use std::env;

use crate::cli::Args;

/// Default log filter. Results go to stdout, so only warnings reach stderr.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for a single `calc` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive (trace, debug, info, warn, error)
    pub log_level: String,

    /// Print the operation and evaluation as JSON
    pub json_output: bool,

    /// Fractional digits for plain output; `None` prints the shortest exact form
    pub precision: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_output: false,
            precision: None,
        }
    }
}

impl CliConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CALC_LOG_LEVEL` or `RUST_LOG`: Log filter (default: warn)
    /// - `CALC_JSON_OUTPUT`: Enable JSON output (default: false)
    /// - `CALC_PRECISION`: Fractional digits for plain output (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup("CALC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),

            json_output: lookup("CALC_JSON_OUTPUT")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            precision: lookup("CALC_PRECISION").and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Apply command-line overrides.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        if args.json {
            self.json_output = true;
        }
        if args.precision.is_some() {
            self.precision = args.precision;
        }
        self
    }
}
