// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};
use crate::error::MathError;

/// Multiply-divide with a 256-bit intermediate, rounding down.
/// Calculates: (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128().ok_or(MathError::Overflow)
}

/// Multiply-divide with a 256-bit intermediate, rounding up.
/// Calculates: ceil((a * b) / denominator)
pub fn mul_div_rounding_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let den_256 = U256::from_u128(env, denominator);
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let quotient = product.div(&den_256).to_u128().ok_or(MathError::Overflow)?;

    if product.rem_euclid(&den_256) > U256::from_u32(env, 0) {
        quotient.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(quotient)
    }
}

/// Multiply two Q64.64 numbers whose product stays below 2^128.
/// Used by the tick ratio decomposition where both factors are <= 2^64.
#[inline]
pub(crate) fn mul_shift_64(a: u128, b: u128) -> Result<u128, MathError> {
    a.checked_mul(b).map(|p| p >> 64).ok_or(MathError::Overflow)
}
