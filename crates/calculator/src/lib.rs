//! # Calculator
//!
//! Pure arithmetic over IEEE 754 binary64 values.
//!
//! ## Components
//!
//! - `arithmetic` - `add`, `subtract`, `multiply`, `divide`, `sqrt`
//! - `errors` - `CalcError` (division by zero, domain error) and `ErrorKind`
//! - `operation` - Operations as serializable data, `Evaluation` outcomes
//! - `tolerance` - Absolute-tolerance float comparison
//!
//! ## Error Contract
//!
//! Only `divide` and `sqrt` are partial. They return `Result<f64, CalcError>`;
//! `Evaluation::from` turns a failure into the `0.0` placeholder plus its
//! error kind for callers that need a value in every case.
//!
//! Every function is stateless and safe to call from any number of threads.
//!
//! ## Usage Example
//!
//! ```
//! use calculator::{divide, sqrt, CalcError};
//!
//! assert_eq!(divide(4.2, 2.1), Ok(2.0));
//! assert!(matches!(divide(1.0, -0.0), Err(CalcError::DivisionByZero { .. })));
//! assert_eq!(sqrt(f64::INFINITY), Ok(f64::INFINITY));
//! assert!(sqrt(f64::NAN).is_err());
//! ```

#![warn(missing_docs)]

pub mod arithmetic;
pub mod errors;
pub mod operation;
pub mod tolerance;

pub use arithmetic::{add, divide, multiply, sqrt, subtract};
pub use errors::{CalcError, CalcResult, ErrorKind};
pub use operation::{BinaryOp, Evaluation, OperandError, Operation, ParseOpError, UnaryOp};
pub use tolerance::{approx_eq, SQRT_TOLERANCE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
