//! # Arithmetic Property Tests
//!
//! Randomized checks of the calculator contract. Each property samples
//! 100 operands uniformly from `[0, 100)`, like the table-driven unit tests
//! but without fixed inputs.

use calculator::{
    add, approx_eq, divide, multiply, sqrt, subtract, BinaryOp, CalcError, Evaluation, ErrorKind,
    Operation, UnaryOp, SQRT_TOLERANCE,
};
use rand::Rng;

const SAMPLES: usize = 100;

fn sample_pair(rng: &mut impl Rng) -> (f64, f64) {
    (rng.gen::<f64>() * 100.0, rng.gen::<f64>() * 100.0)
}

#[test]
fn test_add_random_is_bit_exact() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let (a, b) = sample_pair(&mut rng);
        let want = a + b;
        let got = add(a, b);
        assert_eq!(
            want.to_bits(),
            got.to_bits(),
            "adding {a} and {b}: want {want}, got {got}"
        );
    }
}

#[test]
fn test_add_commutes() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let (a, b) = sample_pair(&mut rng);
        assert_eq!(add(a, b), add(b, a), "{a} + {b}");
    }
}

#[test]
fn test_subtract_is_antisymmetric() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let (a, b) = sample_pair(&mut rng);
        assert_eq!(subtract(a, b), -subtract(b, a), "{a} - {b}");
    }
}

#[test]
fn test_divide_then_multiply_round_trips() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let (a, b) = sample_pair(&mut rng);
        if b == 0.0 {
            continue;
        }
        let quotient = divide(a, b).expect("non-zero divisor");
        let back = multiply(quotient, b);
        let tolerance = a.abs().max(1.0) * 4.0 * f64::EPSILON;
        assert!(
            (back - a).abs() <= tolerance,
            "({a} / {b}) * {b} = {back}"
        );
    }
}

#[test]
fn test_divide_by_zero_for_any_dividend() {
    let dividends = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ];

    for x in dividends {
        for zero in [0.0, -0.0] {
            assert!(
                matches!(divide(x, zero), Err(CalcError::DivisionByZero { .. })),
                "{x} / {zero} should fail"
            );
        }
    }
}

#[test]
fn test_sqrt_random_matches_platform() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let a = rng.gen::<f64>() * 100.0;
        let want = a.sqrt();
        let got = sqrt(a).expect("non-negative input");
        assert!(
            approx_eq(want, got, SQRT_TOLERANCE),
            "sqrt({a}): want {want}, got {got}"
        );
        assert!(got >= 0.0);
    }
}

#[test]
fn test_sqrt_rejects_every_negative() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let a = -(rng.gen::<f64>() * 100.0) - f64::MIN_POSITIVE;
        let eval = Evaluation::from(sqrt(a));
        assert_eq!(eval.error, Some(ErrorKind::InvalidArgument), "sqrt({a})");
        assert_eq!(eval.value, 0.0);
    }
}

#[test]
fn test_operation_dispatch_agrees_with_functions() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let (a, b) = sample_pair(&mut rng);
        assert_eq!(Operation::binary(BinaryOp::Add, a, b).evaluate(), Ok(add(a, b)));
        assert_eq!(
            Operation::binary(BinaryOp::Subtract, a, b).evaluate(),
            Ok(subtract(a, b))
        );
        assert_eq!(
            Operation::binary(BinaryOp::Multiply, a, b).evaluate(),
            Ok(multiply(a, b))
        );
        assert_eq!(Operation::binary(BinaryOp::Divide, a, b).evaluate(), divide(a, b));
        assert_eq!(Operation::unary(UnaryOp::Sqrt, a).evaluate(), sqrt(a));
    }
}
