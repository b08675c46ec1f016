//! Rendering evaluations for the terminal.

use calculator::{Evaluation, Operation};
use serde::Serialize;

use crate::config::CliConfig;
use crate::error::CliError;

/// Rendered text and the stream it belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Result channel
    Stdout(String),
    /// Diagnostics
    Stderr(String),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    operation: &'a Operation,
    result: &'a Evaluation,
}

/// Render an evaluation.
///
/// JSON output always goes to stdout so callers can parse failures too.
/// Plain output sends failures to stderr.
pub fn render(
    operation: &Operation,
    evaluation: &Evaluation,
    config: &CliConfig,
) -> Result<Output, CliError> {
    if config.json_output {
        let report = JsonReport {
            operation,
            result: evaluation,
        };
        return Ok(Output::Stdout(serde_json::to_string(&report)?));
    }

    if let Some(message) = &evaluation.message {
        return Ok(Output::Stderr(format!("error: {message}")));
    }

    Ok(Output::Stdout(format_value(evaluation.value, config.precision)))
}

/// Format a value, honoring an optional fixed precision.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use calculator::{BinaryOp, UnaryOp};

    use super::*;

    fn plain() -> CliConfig {
        CliConfig::default()
    }

    fn json() -> CliConfig {
        CliConfig {
            json_output: true,
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_plain_success() {
        let op = Operation::binary(BinaryOp::Add, 2.3, 4.3);
        let eval = Evaluation::from(op.evaluate());
        assert_eq!(
            render(&op, &eval, &plain()).unwrap(),
            Output::Stdout("6.6".to_string())
        );
    }

    #[test]
    fn test_plain_precision() {
        let op = Operation::unary(UnaryOp::Sqrt, 5.3);
        let eval = Evaluation::from(op.evaluate());
        let config = CliConfig {
            precision: Some(6),
            ..CliConfig::default()
        };
        assert_eq!(
            render(&op, &eval, &config).unwrap(),
            Output::Stdout("2.302173".to_string())
        );
    }

    #[test]
    fn test_plain_failure_goes_to_stderr() {
        let op = Operation::binary(BinaryOp::Divide, 4.0, 0.0);
        let eval = Evaluation::from(op.evaluate());
        assert_eq!(
            render(&op, &eval, &plain()).unwrap(),
            Output::Stderr("error: division by zero: 4 / 0".to_string())
        );
    }

    #[test]
    fn test_json_success() {
        let op = Operation::unary(UnaryOp::Sqrt, 4.0);
        let eval = Evaluation::from(op.evaluate());
        let want = r#"{"operation":{"op":"sqrt","a":4.0},"result":{"value":2.0}}"#;
        assert_eq!(
            render(&op, &eval, &json()).unwrap(),
            Output::Stdout(want.to_string())
        );
    }

    #[test]
    fn test_json_failure_stays_on_stdout() {
        let op = Operation::unary(UnaryOp::Sqrt, -4.0);
        let eval = Evaluation::from(op.evaluate());
        let Output::Stdout(text) = render(&op, &eval, &json()).unwrap() else {
            panic!("json output must go to stdout");
        };

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["result"]["value"], 0.0);
        assert_eq!(parsed["result"]["error"], "invalid_argument");
        assert_eq!(parsed["operation"]["op"], "sqrt");
    }

    #[test]
    fn test_format_infinity() {
        assert_eq!(format_value(f64::INFINITY, None), "inf");
        assert_eq!(format_value(f64::INFINITY, Some(2)), "inf");
        assert_eq!(format_value(0.1 + 0.2, Some(2)), "0.30");
    }
}
