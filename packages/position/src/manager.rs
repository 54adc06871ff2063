// Position Management Logic

use faceswap_tick::{is_valid_tick, update_liquidity_net, TickError, TickInfo};
use crate::error::PositionError;

/// Everything `add_liquidity` will write, computed before any write happens
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityPlan {
    pub lower: TickInfo,
    pub upper: TickInfo,
    /// Pool liquidity after the addition
    pub pool_liquidity: u128,
    /// Whether the new position is active at the current tick
    pub in_range: bool,
}

/// Validate position parameters and return the signed liquidity delta.
///
/// # Errors
/// * `InvalidRange` - `lower >= upper`
/// * `InvalidTick` - a bound is outside the tick range
/// * `InvalidLiquidityAmount` - zero liquidity
/// * `Overflow` - liquidity does not fit a signed tick delta
pub fn validate_position_params(
    lower: i32,
    upper: i32,
    liquidity_delta: u128,
) -> Result<i128, PositionError> {
    if lower >= upper {
        return Err(PositionError::InvalidRange);
    }
    if !is_valid_tick(lower) || !is_valid_tick(upper) {
        return Err(PositionError::InvalidTick);
    }
    if liquidity_delta == 0 {
        return Err(PositionError::InvalidLiquidityAmount);
    }

    i128::try_from(liquidity_delta).map_err(|_| PositionError::Overflow)
}

/// Active at `current_tick` when lower <= current < upper
#[inline]
pub fn is_in_range(current_tick: i32, lower: i32, upper: i32) -> bool {
    current_tick >= lower && current_tick < upper
}

/// Compute the tick and pool updates for adding `liquidity_delta` over
/// [lower_tick, upper_tick). Nothing is written; the caller persists the
/// plan only once every check has passed.
pub fn plan_add_liquidity(
    read_tick: impl Fn(i32) -> Option<TickInfo>,
    current_tick: i32,
    pool_liquidity: u128,
    lower_tick: i32,
    upper_tick: i32,
    liquidity_delta: u128,
) -> Result<LiquidityPlan, PositionError> {
    let signed_delta = validate_position_params(lower_tick, upper_tick, liquidity_delta)?;

    let lower_info = read_tick(lower_tick).ok_or(TickError::Uninitialized)?;
    let upper_info = read_tick(upper_tick).ok_or(TickError::Uninitialized)?;

    let lower = update_liquidity_net(&lower_info, signed_delta, false)?;
    let upper = update_liquidity_net(&upper_info, signed_delta, true)?;

    let in_range = is_in_range(current_tick, lower_tick, upper_tick);
    let pool_liquidity = if in_range {
        pool_liquidity
            .checked_add(liquidity_delta)
            .ok_or(PositionError::Overflow)?
    } else {
        pool_liquidity
    };

    Ok(LiquidityPlan {
        lower,
        upper,
        pool_liquidity,
        in_range,
    })
}
