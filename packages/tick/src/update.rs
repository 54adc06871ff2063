// Tick Update and Crossing Logic

use faceswap_math::constants::{MAX_TICK, MIN_TICK};
use crate::error::TickError;
use crate::types::TickInfo;

/// Apply a liquidity delta to a tick bounding a position.
///
/// The lower bound gains `liquidity_delta`, the upper bound loses it, so
/// crossing the range left-to-right first activates then deactivates it.
/// Returns the updated record; the caller decides when to persist it.
pub fn update_liquidity_net(
    info: &TickInfo,
    liquidity_delta: i128,
    upper: bool,
) -> Result<TickInfo, TickError> {
    let liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(TickError::Overflow)?;

    Ok(TickInfo {
        tick_index: info.tick_index,
        liquidity_net,
    })
}

/// Cross a tick boundary during a swap and return the new active liquidity.
///
/// Moving up (`zero_for_one == false`) adds `liquidity_net`, moving down
/// subtracts it. The tick record itself is left untouched.
pub fn cross_tick(
    info: Option<&TickInfo>,
    liquidity: u128,
    zero_for_one: bool,
) -> Result<u128, TickError> {
    let info = info.ok_or(TickError::Uninitialized)?;

    let delta = if zero_for_one {
        info.liquidity_net.checked_neg().ok_or(TickError::Overflow)?
    } else {
        info.liquidity_net
    };

    if delta >= 0 {
        liquidity.checked_add(delta.unsigned_abs())
    } else {
        liquidity.checked_sub(delta.unsigned_abs())
    }
    .ok_or(TickError::Overflow)
}

/// Check if a tick is within valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}
