//! # Operations as data
//!
//! Lets wrappers describe a calculation, dispatch it, and report the outcome
//! without re-implementing the arithmetic contract.
//!
//! ## Wire shape
//!
//! ```json
//! {"op": "divide", "a": 4.0, "b": 2.0}
//! {"op": "sqrt", "a": 16.0}
//! ```
//!
//! `op` selects the variant and fixes the operand count: binary operators
//! require `b`, `sqrt` forbids it, and unknown fields are rejected.
//!
//! NaN and infinite operands serialize as `null` (JSON has no representation
//! for them) and `null` is not accepted back, so only finite operands round-trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arithmetic;
use crate::errors::{CalcResult, ErrorKind};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, fails on a zero divisor
    Divide,
}

impl BinaryOp {
    /// Every binary operator.
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Apply the operator.
    pub fn apply(self, a: f64, b: f64) -> CalcResult {
        match self {
            Self::Add => Ok(arithmetic::add(a, b)),
            Self::Subtract => Ok(arithmetic::subtract(a, b)),
            Self::Multiply => Ok(arithmetic::multiply(a, b)),
            Self::Divide => arithmetic::divide(a, b),
        }
    }

    /// Infix symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Whether the operator can fail.
    pub fn is_partial(self) -> bool {
        matches!(self, Self::Divide)
    }
}

impl FromStr for BinaryOp {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "sub" | "-" => Ok(Self::Subtract),
            "multiply" | "mul" | "*" => Ok(Self::Multiply),
            "divide" | "div" | "/" => Ok(Self::Divide),
            _ => Err(ParseOpError(s.to_string())),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// Real square root, fails outside `[0, +inf]`
    Sqrt,
}

impl UnaryOp {
    /// Apply the operator.
    pub fn apply(self, a: f64) -> CalcResult {
        match self {
            Self::Sqrt => arithmetic::sqrt(a),
        }
    }

    /// Function name used in the display form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
        }
    }
}

impl FromStr for UnaryOp {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqrt" => Ok(Self::Sqrt),
            _ => Err(ParseOpError(s.to_string())),
        }
    }
}

/// Unknown operator name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator: {0:?}")]
pub struct ParseOpError(pub String);

/// Operand count does not match the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// Binary operator without `b`
    #[error("operator {0:?} requires operand b")]
    MissingOperand(BinaryOp),

    /// Unary operator given `b`
    #[error("operator {0:?} takes a single operand")]
    UnexpectedOperand(UnaryOp),
}

/// Tag values accepted in `op`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OpTag {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
}

/// Wire form of [`Operation`], tagged on `op`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaggedOperation {
    op: OpTag,
    a: f64,
    #[serde(default)]
    b: Option<f64>,
}

impl TryFrom<TaggedOperation> for Operation {
    type Error = OperandError;

    fn try_from(raw: TaggedOperation) -> Result<Self, Self::Error> {
        let binary = match raw.op {
            OpTag::Add => BinaryOp::Add,
            OpTag::Subtract => BinaryOp::Subtract,
            OpTag::Multiply => BinaryOp::Multiply,
            OpTag::Divide => BinaryOp::Divide,
            OpTag::Sqrt => {
                return match raw.b {
                    Some(_) => Err(OperandError::UnexpectedOperand(UnaryOp::Sqrt)),
                    None => Ok(Self::unary(UnaryOp::Sqrt, raw.a)),
                };
            }
        };
        let b = raw.b.ok_or(OperandError::MissingOperand(binary))?;
        Ok(Self::binary(binary, raw.a, b))
    }
}

/// A single calculation.
///
/// Serializes as a flat object tagged on `op`; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "TaggedOperation")]
pub enum Operation {
    /// Two-operand calculation.
    Binary {
        /// Operator
        op: BinaryOp,
        /// Left operand
        a: f64,
        /// Right operand
        b: f64,
    },
    /// One-operand calculation.
    Unary {
        /// Operator
        op: UnaryOp,
        /// Operand
        a: f64,
    },
}

impl Operation {
    /// Shorthand for [`Operation::Binary`].
    pub fn binary(op: BinaryOp, a: f64, b: f64) -> Self {
        Self::Binary { op, a, b }
    }

    /// Shorthand for [`Operation::Unary`].
    pub fn unary(op: UnaryOp, a: f64) -> Self {
        Self::Unary { op, a }
    }

    /// Run the calculation.
    pub fn evaluate(&self) -> CalcResult {
        match *self {
            Self::Binary { op, a, b } => op.apply(a, b),
            Self::Unary { op, a } => op.apply(a),
        }
    }

    /// Operator symbol or function name.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Binary { op, .. } => op.symbol(),
            Self::Unary { op, .. } => op.name(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary { op, a, b } => write!(f, "{} {} {}", a, op.symbol(), b),
            Self::Unary { op, a } => write!(f, "{}({})", op.name(), a),
        }
    }
}

/// Outcome of a calculation with the zero placeholder applied.
///
/// A failed calculation always reports `value == 0.0`; check `error` first.
/// Output only: a NaN or infinite `value` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Result, or `0.0` on failure
    pub value: f64,
    /// Error kind, if the calculation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    /// Human readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Evaluation {
    /// True if the calculation succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<CalcResult> for Evaluation {
    fn from(result: CalcResult) -> Self {
        match result {
            Ok(value) => Self {
                value,
                error: None,
                message: None,
            },
            Err(err) => Self {
                value: 0.0,
                error: Some(err.kind()),
                message: Some(err.to_string()),
            },
        }
    }
}
