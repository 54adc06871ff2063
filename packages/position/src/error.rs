// Position Errors

use faceswap_math::MathError;
use faceswap_tick::TickError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionError {
    /// lower_tick >= upper_tick
    InvalidRange,
    /// Bound outside [MIN_TICK, MAX_TICK]
    InvalidTick,
    /// Zero liquidity delta
    InvalidLiquidityAmount,
    /// Bound tick has no record
    UninitializedTick,
    Overflow,
}

impl From<TickError> for PositionError {
    fn from(err: TickError) -> Self {
        match err {
            TickError::Uninitialized => PositionError::UninitializedTick,
            TickError::InvalidTick => PositionError::InvalidTick,
            TickError::Overflow => PositionError::Overflow,
        }
    }
}

impl From<MathError> for PositionError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::TickOutOfRange => PositionError::InvalidTick,
            _ => PositionError::Overflow,
        }
    }
}
