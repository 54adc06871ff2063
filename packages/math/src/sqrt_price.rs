// SPDX-License-Identifier: MIT
// Tick <-> Sqrt Price Conversion

use crate::constants::{MAX_SQRT_PRICE, MAX_TICK, MIN_SQRT_PRICE, MIN_TICK, Q64};
use crate::error::MathError;
use crate::q64::mul_shift_64;

/// Q64.64 factors 2^64 / sqrt(1.0001)^(2^i) for i = 0..18.
/// Multiplying the factors for the set bits of |tick| yields the
/// sqrt price of -|tick|.
const TICK_RATIO_FACTORS: [u128; 19] = [
    18445821805675392312, // 0x1
    18444899583751176498, // 0x2
    18443055278223354163, // 0x4
    18439367220385604838, // 0x8
    18431993317065449818, // 0x10
    18417254355718160513, // 0x20
    18387811781193591352, // 0x40
    18329067761203520168, // 0x80
    18212142134806087855, // 0x100
    17980523815641551639, // 0x200
    17526086738831147014, // 0x400
    16651378430235024244, // 0x800
    15030750278693429945, // 0x1000
    12247334978882834400, // 0x2000
    8131365268884726201,  // 0x4000
    3584323654723342298,  // 0x8000
    696457651847595234,   // 0x10000
    26294789957452057,    // 0x20000
    37481735321082,       // 0x40000
];

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64
///
/// Strictly increasing over [MIN_TICK, MAX_TICK]. Positive ticks are
/// computed as the reciprocal of the negative tick, so `tick` and
/// `-tick` are not exact inverses in the last bit.
pub fn get_sqrt_price_at_tick(tick: i32) -> Result<u128, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();
    let mut ratio: u128 = Q64;

    for (bit, factor) in TICK_RATIO_FACTORS.iter().enumerate() {
        if abs_tick & (1u32 << bit) != 0 {
            ratio = mul_shift_64(ratio, *factor)?;
        }
    }

    if tick > 0 {
        if ratio == 0 {
            return Err(MathError::DivisionByZero);
        }
        ratio = u128::MAX / ratio;
    }

    Ok(ratio)
}

/// Convert a Q64.64 sqrt price to the greatest tick whose sqrt price
/// is less than or equal to it.
///
/// Binary search over the tick range; at most 20 evaluations of
/// `get_sqrt_price_at_tick`.
pub fn get_tick_at_sqrt_price(sqrt_price_x64: u128) -> Result<i32, MathError> {
    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price_x64) {
        return Err(MathError::SqrtPriceOutOfRange);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        // Upper midpoint so `low = mid` always makes progress
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_price_at_tick(mid)? <= sqrt_price_x64 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Whether a sqrt price lies inside the supported price range
#[inline]
pub fn is_valid_sqrt_price(sqrt_price_x64: u128) -> bool {
    (MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price_x64)
}
