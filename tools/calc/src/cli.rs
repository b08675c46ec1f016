//! Command-line arguments.

use calculator::{BinaryOp, Operation, UnaryOp};
use clap::{Parser, Subcommand};

/// IEEE 754 double-precision calculator
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Calculation to run
    #[command(subcommand)]
    pub command: Command,

    /// Print the operation and result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Fractional digits for plain output
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Log filter (overrides CALC_LOG_LEVEL / RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// One subcommand per calculator operation.
///
/// Operands may start with `-` (`-4`, `-1e3`, `-inf`), so options must come
/// before the subcommand or after the operands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// a + b
    Add {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },

    /// a - b
    Subtract {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },

    /// a * b
    Multiply {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },

    /// a / b (fails when b is zero)
    Divide {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },

    /// Square root (fails for negative values, -inf and NaN)
    Sqrt {
        #[arg(allow_hyphen_values = true)]
        a: f64,
    },
}

impl Command {
    /// The calculation this subcommand describes.
    pub fn operation(&self) -> Operation {
        match *self {
            Self::Add { a, b } => Operation::binary(BinaryOp::Add, a, b),
            Self::Subtract { a, b } => Operation::binary(BinaryOp::Subtract, a, b),
            Self::Multiply { a, b } => Operation::binary(BinaryOp::Multiply, a, b),
            Self::Divide { a, b } => Operation::binary(BinaryOp::Divide, a, b),
            Self::Sqrt { a } => Operation::unary(UnaryOp::Sqrt, a),
        }
    }
}
