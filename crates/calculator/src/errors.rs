//! Calculator error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a fallible arithmetic operation.
pub type CalcResult = Result<f64, CalcError>;

/// Errors signaled by the partial operations.
///
/// Only `divide` and `sqrt` can fail; the total operations never construct one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalcError {
    /// Divisor compared equal to zero (`+0.0` or `-0.0`).
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The numerator of the rejected division.
        dividend: f64,
    },

    /// Input has no real square root (negative, `-inf` or NaN).
    #[error("invalid argument: no real square root of {value}")]
    InvalidArgument {
        /// The rejected input.
        value: f64,
    },
}

impl CalcError {
    /// The fieldless error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Error taxonomy without the offending operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`CalcError::DivisionByZero`].
    DivisionByZero,
    /// See [`CalcError::InvalidArgument`].
    InvalidArgument,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division_by_zero"),
            Self::InvalidArgument => write!(f, "invalid_argument"),
        }
    }
}
