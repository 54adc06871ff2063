// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::Env;
use crate::constants::Q64;
use crate::error::MathError;
use crate::q64::{mul_div, mul_div_rounding_up};

#[inline]
fn sorted(sqrt_price_a: u128, sqrt_price_b: u128) -> (u128, u128) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

#[inline]
fn mul_div_dir(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    if round_up {
        mul_div_rounding_up(env, a, b, denominator)
    } else {
        mul_div(env, a, b, denominator)
    }
}

/// Token0 amount spanned by `liquidity` between two sqrt prices.
/// Formula: L * (upper - lower) * 2^64 / (upper * lower)
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 {
        return Err(MathError::DivisionByZero);
    }

    let numerator = mul_div_dir(env, liquidity, sqrt_upper - sqrt_lower, sqrt_upper, round_up)?;
    mul_div_dir(env, numerator, Q64, sqrt_lower, round_up)
}

/// Token1 amount spanned by `liquidity` between two sqrt prices.
/// Formula: L * (upper - lower) / 2^64
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    mul_div_dir(env, liquidity, sqrt_upper - sqrt_lower, Q64, round_up)
}

/// Token amounts (amount0, amount1) a position of `liquidity` over
/// [sqrt_price_lower, sqrt_price_upper) represents at `current_sqrt_price`.
/// Rounded down.
pub fn get_amounts_for_liquidity(
    env: &Env,
    current_sqrt_price: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    liquidity: u128,
) -> Result<(u128, u128), MathError> {
    if liquidity == 0 || sqrt_price_lower >= sqrt_price_upper {
        return Ok((0, 0));
    }

    if current_sqrt_price <= sqrt_price_lower {
        let amount0 = get_amount_0_delta(env, sqrt_price_lower, sqrt_price_upper, liquidity, false)?;
        Ok((amount0, 0))
    } else if current_sqrt_price >= sqrt_price_upper {
        let amount1 = get_amount_1_delta(env, sqrt_price_lower, sqrt_price_upper, liquidity, false)?;
        Ok((0, amount1))
    } else {
        let amount0 = get_amount_0_delta(env, current_sqrt_price, sqrt_price_upper, liquidity, false)?;
        let amount1 = get_amount_1_delta(env, sqrt_price_lower, current_sqrt_price, liquidity, false)?;
        Ok((amount0, amount1))
    }
}
