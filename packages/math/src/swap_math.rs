// SPDX-License-Identifier: MIT
// Single-Range Swap Step

use soroban_sdk::Env;
use crate::constants::Q64;
use crate::error::MathError;
use crate::liquidity::{get_amount_0_delta, get_amount_1_delta};
use crate::q64::{mul_div, mul_div_rounding_up};

/// Outcome of swapping inside one liquidity range
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapStep {
    /// Sqrt price after the step
    pub sqrt_price_next: u128,
    /// Input consumed by the step (fee excluded)
    pub amount_in: u128,
    /// Output produced by the step
    pub amount_out: u128,
}

impl SwapStep {
    /// Whether the step ended exactly on `sqrt_price_target`
    #[inline]
    pub fn reached(&self, sqrt_price_target: u128) -> bool {
        self.sqrt_price_next == sqrt_price_target
    }
}

/// Sqrt price after adding `amount_in` of the input token at constant liquidity.
///
/// zero_for_one: L * P / (L + amount * P / 2^64), rounded up
/// one_for_zero: P + amount * 2^64 / L, rounded down
///
/// Rounding always leaves the price short of where exact math would put it.
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<u128, MathError> {
    if amount_in == 0 {
        return Ok(sqrt_price);
    }

    if zero_for_one {
        let product = mul_div(env, amount_in, sqrt_price, Q64)?;
        let denominator = liquidity.checked_add(product).ok_or(MathError::Overflow)?;
        mul_div_rounding_up(env, liquidity, sqrt_price, denominator)
    } else {
        let quotient = mul_div(env, amount_in, Q64, liquidity)?;
        sqrt_price.checked_add(quotient).ok_or(MathError::Overflow)
    }
}

/// Compute one exact-input swap step from `sqrt_price_current` towards
/// `sqrt_price_target`.
///
/// If `amount_remaining` covers the input needed to reach the target, the
/// step ends on the target and consumes exactly that input. Otherwise the
/// whole `amount_remaining` is consumed and the price stops inside the range.
/// With zero liquidity the target is reached at no cost.
pub fn compute_swap_step(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_remaining: u128,
    zero_for_one: bool,
) -> Result<SwapStep, MathError> {
    let to_target = if zero_for_one {
        get_amount_0_delta(env, sqrt_price_target, sqrt_price_current, liquidity, true)
    } else {
        get_amount_1_delta(env, sqrt_price_current, sqrt_price_target, liquidity, true)
    };

    // A range too deep to express in u128 can never be fully consumed
    let to_target = match to_target {
        Ok(amount) => amount,
        Err(MathError::Overflow) => u128::MAX,
        Err(err) => return Err(err),
    };

    let sqrt_price_next = if amount_remaining >= to_target {
        sqrt_price_target
    } else {
        let next = get_next_sqrt_price_from_input(
            env,
            sqrt_price_current,
            liquidity,
            amount_remaining,
            zero_for_one,
        )?;
        if zero_for_one {
            next.max(sqrt_price_target)
        } else {
            next.min(sqrt_price_target)
        }
    };

    let amount_in = if sqrt_price_next == sqrt_price_target {
        to_target.min(amount_remaining)
    } else {
        amount_remaining
    };

    let amount_out = if zero_for_one {
        get_amount_1_delta(env, sqrt_price_next, sqrt_price_current, liquidity, false)?
    } else {
        get_amount_0_delta(env, sqrt_price_current, sqrt_price_next, liquidity, false)?
    };

    Ok(SwapStep {
        sqrt_price_next,
        amount_in,
        amount_out,
    })
}

/// Protocol fee charged on a step that consumed `amount_in` out of a
/// `amount_remaining` budget.
///
/// A step that stops inside its range keeps the whole unspent budget as
/// fee. A step that reaches its boundary is charged
/// ceil(amount_in * fee / (denominator - fee)), capped at what is left.
pub fn calculate_step_fee(
    env: &Env,
    amount_in: u128,
    amount_remaining: u128,
    reached_target: bool,
    fee_bps: u128,
    fee_denominator: u128,
) -> Result<u128, MathError> {
    let unspent = amount_remaining
        .checked_sub(amount_in)
        .ok_or(MathError::Overflow)?;

    if !reached_target {
        return Ok(unspent);
    }

    let net_denominator = fee_denominator
        .checked_sub(fee_bps)
        .ok_or(MathError::Overflow)?;
    let fee = mul_div_rounding_up(env, amount_in, fee_bps, net_denominator)?;

    Ok(fee.min(unspent))
}
