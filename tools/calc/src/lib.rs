//! # calc
//!
//! Thin command-line wrapper over the `calculator` library.
//!
//! ## Usage
//!
//! ```bash
//! calc add 2.3 4.3          # 6.6
//! calc divide 4 0           # error: division by zero: 4 / 0 (exit 1)
//! calc sqrt 5.3 --precision 6
//! calc --json sqrt -4       # JSON report, "error":"invalid_argument" (exit 1)
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Args, Command};
pub use config::CliConfig;
pub use error::CliError;
pub use output::{render, Output};

use calculator::Evaluation;

/// Exit status when the calculation succeeded.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when the calculation failed (division by zero, domain error).
pub const EXIT_CALC_FAILURE: u8 = 1;

/// Map a calculation outcome to the process exit status.
pub fn exit_status(ok: bool) -> u8 {
    if ok {
        EXIT_SUCCESS
    } else {
        EXIT_CALC_FAILURE
    }
}

/// Evaluate the parsed command and render the outcome.
///
/// Returns the rendered output and whether the calculation succeeded.
pub fn run(args: &Args, config: &CliConfig) -> Result<(Output, bool), CliError> {
    let operation = args.command.operation();
    tracing::debug!(operation = %operation, "Evaluating");

    let evaluation = Evaluation::from(operation.evaluate());
    tracing::debug!(
        operation = %operation,
        value = evaluation.value,
        error = ?evaluation.error,
        "Evaluated"
    );

    let output = render(&operation, &evaluation, config)?;
    Ok((output, evaluation.is_ok()))
}
