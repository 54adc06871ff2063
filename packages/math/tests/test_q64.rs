use faceswap_math::q64::*;
use faceswap_math::{MathError, Q64};
use soroban_sdk::Env;

// ============================================================
// MUL_DIV TESTS
// ============================================================

#[test]
fn test_mul_div_basic() {
    let env = Env::default();
    assert_eq!(mul_div(&env, 10, 20, 5), Ok(40));
    assert_eq!(mul_div(&env, 0, 100, 50), Ok(0));
    assert_eq!(mul_div(&env, 100, 0, 50), Ok(0));
}

#[test]
fn test_mul_div_rounds_down() {
    let env = Env::default();
    assert_eq!(mul_div(&env, 1, 1, 2), Ok(0));
    assert_eq!(mul_div(&env, 3, 1, 2), Ok(1));
    assert_eq!(mul_div(&env, 5, 1, 3), Ok(1));
}

#[test]
fn test_mul_div_wide_intermediate() {
    let env = Env::default();

    // a * b overflows u128 but the quotient fits
    let max = u128::MAX;
    assert_eq!(mul_div(&env, max, max, max), Ok(max));
    assert_eq!(mul_div(&env, Q64 * 3, Q64 * 5, Q64), Ok(Q64 * 15));
}

#[test]
fn test_mul_div_overflow() {
    let env = Env::default();
    assert_eq!(mul_div(&env, u128::MAX, 2, 1), Err(MathError::Overflow));
}

#[test]
fn test_mul_div_zero_denominator() {
    let env = Env::default();
    assert_eq!(mul_div(&env, 1, 1, 0), Err(MathError::DivisionByZero));
    assert_eq!(
        mul_div_rounding_up(&env, 1, 1, 0),
        Err(MathError::DivisionByZero)
    );
}

// ============================================================
// ROUNDING UP TESTS
// ============================================================

#[test]
fn test_mul_div_rounding_up() {
    let env = Env::default();

    // 10 / 3 rounds up to 4
    assert_eq!(mul_div_rounding_up(&env, 10, 1, 3), Ok(4));
    // exact division is unchanged
    assert_eq!(mul_div_rounding_up(&env, 10, 1, 5), Ok(2));
    assert_eq!(mul_div_rounding_up(&env, 0, 7, 3), Ok(0));
}

#[test]
fn test_mul_div_rounding_up_overflow_at_boundary() {
    let env = Env::default();

    // (2^43 - 1) * (2^86 + 2^43 + 1) = 2^129 - 1, so the floor quotient by 2
    // is exactly u128::MAX with remainder 1
    let a = (1u128 << 43) - 1;
    let b = (1u128 << 86) + (1u128 << 43) + 1;
    assert_eq!(mul_div(&env, a, b, 2), Ok(u128::MAX));
    assert_eq!(mul_div_rounding_up(&env, a, b, 2), Err(MathError::Overflow));
}

#[test]
fn test_rounding_directions_differ_by_at_most_one() {
    let env = Env::default();
    let cases = [(7u128, 11u128, 3u128), (Q64 + 1, Q64 - 1, 1_000_003), (1, 1, 1)];

    for (a, b, d) in cases {
        let down = mul_div(&env, a, b, d).unwrap();
        let up = mul_div_rounding_up(&env, a, b, d).unwrap();
        assert!(up == down || up == down + 1, "a={} b={} d={}", a, b, d);
    }
}
