// Error handling module:
// - Uses contracterror derive macro for typed errors
// - Codes grouped by area in blocks of 100
// - Package errors convert into contract errors through From

use soroban_sdk::contracterror;

use faceswap_math::MathError;
use faceswap_position::PositionError;
use faceswap_swap::SwapError;
use faceswap_tick::TickError;

/// Errors returned by every pool entry point
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FaceSwapError {
    // Initialization errors (100-199)
    /// Record already exists
    AlreadyInitialized = 100,
    /// Pool or fee collector has not been initialized
    NotInitialized = 101,

    // Range and price errors (200-299)
    /// Invalid tick range: lower must be < upper
    InvalidRange = 200,
    /// Tick out of valid range
    InvalidTick = 201,
    /// Sqrt price out of valid range
    InvalidSqrtPrice = 202,
    /// Initial tick does not match the initial sqrt price
    PriceTickMismatch = 203,

    // Tick errors (300-399)
    /// Tick record has not been created
    UninitializedTick = 300,

    // Liquidity errors (400-499)
    /// Liquidity amount must be positive
    InvalidLiquidityAmount = 400,
    /// Not enough liquidity to move the price
    InsufficientLiquidity = 401,
    /// No position with the requested id
    PositionNotFound = 402,

    // Swap errors (500-599)
    /// Swap amount too small to move the price
    SwapAmountTooSmall = 500,

    // Authorization errors (600-699)
    /// Caller is not the pool authority
    Unauthorized = 600,

    // Math errors (700-799)
    ArithmeticOverflow = 700,
    DivisionByZero = 701,
}

impl From<MathError> for FaceSwapError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow => FaceSwapError::ArithmeticOverflow,
            MathError::DivisionByZero => FaceSwapError::DivisionByZero,
            MathError::TickOutOfRange => FaceSwapError::InvalidTick,
            MathError::SqrtPriceOutOfRange => FaceSwapError::InvalidSqrtPrice,
        }
    }
}

impl From<TickError> for FaceSwapError {
    fn from(err: TickError) -> Self {
        match err {
            TickError::Uninitialized => FaceSwapError::UninitializedTick,
            TickError::InvalidTick => FaceSwapError::InvalidTick,
            TickError::Overflow => FaceSwapError::ArithmeticOverflow,
        }
    }
}

impl From<PositionError> for FaceSwapError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::InvalidRange => FaceSwapError::InvalidRange,
            PositionError::InvalidTick => FaceSwapError::InvalidTick,
            PositionError::InvalidLiquidityAmount => FaceSwapError::InvalidLiquidityAmount,
            PositionError::UninitializedTick => FaceSwapError::UninitializedTick,
            PositionError::Overflow => FaceSwapError::ArithmeticOverflow,
        }
    }
}

impl From<SwapError> for FaceSwapError {
    fn from(err: SwapError) -> Self {
        match err {
            SwapError::InsufficientLiquidity => FaceSwapError::InsufficientLiquidity,
            SwapError::AmountTooSmall => FaceSwapError::SwapAmountTooSmall,
            SwapError::UninitializedTick => FaceSwapError::UninitializedTick,
            SwapError::Overflow => FaceSwapError::ArithmeticOverflow,
        }
    }
}
