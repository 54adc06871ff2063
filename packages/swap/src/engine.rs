use soroban_sdk::{log, Env, Vec};
use faceswap_math::{
    calculate_step_fee, compute_swap_step, get_sqrt_price_at_tick, get_tick_at_sqrt_price,
    mul_div,
    constants::{
        FEE_DENOMINATOR_BPS, MAX_SQRT_PRICE, MAX_SWAP_ITERATIONS, MIN_SQRT_PRICE,
        PROTOCOL_FEE_BPS,
    },
};
use faceswap_tick::{cross_tick, find_next_initialized_tick, TickInfo};
use crate::error::SwapError;
use crate::types::SwapResult;

// ============================================================
// SWAP STATE
// ============================================================

/// Pool state the swap loop reads and advances
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapState {
    pub sqrt_price_x64: u128,
    pub current_tick: i32,
    pub liquidity: u128,
}

// ============================================================
// PUBLIC SWAP FUNCTIONS
// ============================================================

/// Execute an exact-input swap against `state`.
///
/// # Arguments
/// * `env` - Soroban environment
/// * `state` - Pool state, advanced only when the swap succeeds
/// * `read_tick` - Callback to read a tick record from storage
/// * `initialized_ticks` - Sorted indices of every initialized tick
/// * `amount_in` - Input amount, fees included
/// * `zero_for_one` - Direction (true = token0 -> token1, price decreases)
///
/// The input is consumed range by range. When liquidity runs out after
/// the price has moved, the swap ends early and the unconsumed input is
/// left out of `SwapResult::amount_in`.
///
/// # Errors
/// * `AmountTooSmall` - zero input, or input too small to move the price
/// * `InsufficientLiquidity` - no liquidity in the swap direction
/// * `UninitializedTick` / `Overflow` - inconsistent storage or arithmetic overflow
pub fn engine_swap<F>(
    env: &Env,
    state: &mut SwapState,
    read_tick: F,
    initialized_ticks: &Vec<i32>,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<SwapResult, SwapError>
where
    F: Fn(i32) -> Option<TickInfo>,
{
    if amount_in == 0 {
        return Err(SwapError::AmountTooSmall);
    }

    let mut sqrt_price = state.sqrt_price_x64;
    let mut current_tick = state.current_tick;
    let mut liquidity = state.liquidity;

    let mut amount_remaining = amount_in;
    let mut amount_out_total: u128 = 0;
    let mut fee_total: u128 = 0;
    let mut ticks_crossed: u32 = 0;

    let mut iterations = 0;

    while iterations < MAX_SWAP_ITERATIONS {
        iterations += 1;

        if amount_remaining == 0 {
            break;
        }

        let next_tick = find_next_initialized_tick(initialized_ticks, current_tick, zero_for_one);

        // Nothing left to trade against in this direction
        if next_tick.is_none() && liquidity == 0 {
            break;
        }

        let sqrt_target = match next_tick {
            Some(tick) => get_sqrt_price_at_tick(tick)?,
            None if zero_for_one => MIN_SQRT_PRICE,
            None => MAX_SQRT_PRICE,
        };

        if next_tick.is_none() && sqrt_price == sqrt_target {
            break;
        }

        // Input the step may spend once the protocol fee is set aside
        let amount_available = mul_div(
            env,
            amount_remaining,
            FEE_DENOMINATOR_BPS - PROTOCOL_FEE_BPS,
            FEE_DENOMINATOR_BPS,
        )?;

        let step = compute_swap_step(
            env,
            sqrt_price,
            sqrt_target,
            liquidity,
            amount_available,
            zero_for_one,
        )?;
        let target_reached = step.reached(sqrt_target);

        let step_fee = calculate_step_fee(
            env,
            step.amount_in,
            amount_remaining,
            target_reached,
            PROTOCOL_FEE_BPS,
            FEE_DENOMINATOR_BPS,
        )?;

        amount_remaining = amount_remaining
            .checked_sub(step.amount_in)
            .and_then(|rest| rest.checked_sub(step_fee))
            .ok_or(SwapError::Overflow)?;
        amount_out_total = amount_out_total
            .checked_add(step.amount_out)
            .ok_or(SwapError::Overflow)?;
        fee_total = fee_total.checked_add(step_fee).ok_or(SwapError::Overflow)?;

        if !target_reached {
            sqrt_price = step.sqrt_price_next;
            current_tick = get_tick_at_sqrt_price(sqrt_price)?;
            break;
        }

        sqrt_price = sqrt_target;

        match next_tick {
            Some(tick) => {
                liquidity = cross_tick(read_tick(tick).as_ref(), liquidity, zero_for_one)?;
                ticks_crossed += 1;
                current_tick = if zero_for_one { tick - 1 } else { tick };

                log!(env, "crossed tick", tick, liquidity);
            }
            None => {
                // Global price bound
                current_tick = get_tick_at_sqrt_price(sqrt_price)?;
                break;
            }
        }
    }

    if sqrt_price == state.sqrt_price_x64 {
        let consumed = amount_in - amount_remaining;
        return Err(if liquidity == 0 || consumed == 0 {
            SwapError::InsufficientLiquidity
        } else {
            SwapError::AmountTooSmall
        });
    }

    state.sqrt_price_x64 = sqrt_price;
    state.current_tick = current_tick;
    state.liquidity = liquidity;

    Ok(SwapResult {
        amount_in: amount_in - amount_remaining,
        amount_out: amount_out_total,
        fee_amount: fee_total,
        sqrt_price_x64: sqrt_price,
        current_tick,
        liquidity,
        ticks_crossed,
    })
}

/// Quote a swap without executing (read-only simulation)
pub fn quote_swap<F>(
    env: &Env,
    state: &SwapState,
    read_tick: F,
    initialized_ticks: &Vec<i32>,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<SwapResult, SwapError>
where
    F: Fn(i32) -> Option<TickInfo>,
{
    let mut sim_state = state.clone();
    engine_swap(env, &mut sim_state, read_tick, initialized_ticks, amount_in, zero_for_one)
}
