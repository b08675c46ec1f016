//! Floating point comparison with an absolute tolerance.

/// Absolute accuracy bound for [`crate::sqrt`] against the platform square root.
pub const SQRT_TOLERANCE: f64 = 1e-6;

/// Returns true when `a` and `b` differ by less than `tolerance`.
///
/// Two `+inf` values compare equal. Any NaN operand compares unequal.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == f64::INFINITY && b == f64::INFINITY {
        return true;
    }
    (a - b).abs() < tolerance
}
