// Swap Errors

use faceswap_math::MathError;
use faceswap_tick::TickError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapError {
    /// No liquidity left to move the price
    InsufficientLiquidity,
    /// Input too small to move the price by one unit
    AmountTooSmall,
    /// Boundary tick in the index has no record
    UninitializedTick,
    Overflow,
}

impl From<MathError> for SwapError {
    fn from(_: MathError) -> Self {
        SwapError::Overflow
    }
}

impl From<TickError> for SwapError {
    fn from(err: TickError) -> Self {
        match err {
            TickError::Uninitialized => SwapError::UninitializedTick,
            TickError::InvalidTick | TickError::Overflow => SwapError::Overflow,
        }
    }
}
