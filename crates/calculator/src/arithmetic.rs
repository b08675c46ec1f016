//! # Arithmetic
//!
//! The five calculator operations over IEEE 754 binary64.
//!
//! ## Contract
//!
//! - `add`, `subtract`, `multiply` are total and return the IEEE result unchanged
//!   (NaN and signed infinities propagate).
//! - `divide` rejects any divisor comparing equal to zero, including `-0.0`,
//!   instead of producing an infinite quotient.
//! - `sqrt` accepts `0`, positive finite values and `+inf`; everything else
//!   (negative values, `-inf`, NaN) is a domain error.

use crate::errors::{CalcError, CalcResult};

/// Returns `a + b`.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`.
///
/// # Errors
///
/// [`CalcError::DivisionByZero`] when `b == 0.0` (either sign).
pub fn divide(a: f64, b: f64) -> CalcResult {
    // -0.0 == 0.0 under IEEE comparison
    if b == 0.0 {
        return Err(CalcError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// Returns the non-negative square root of `a`.
///
/// `sqrt(0) == 0` and `sqrt(+inf) == +inf`.
///
/// # Errors
///
/// [`CalcError::InvalidArgument`] when `a` is negative (including `-inf`) or NaN.
pub fn sqrt(a: f64) -> CalcResult {
    if a.is_nan() || a < 0.0 {
        return Err(CalcError::InvalidArgument { value: a });
    }
    if a == 0.0 {
        // Normalizes -0.0
        return Ok(0.0);
    }
    Ok(a.sqrt())
}
