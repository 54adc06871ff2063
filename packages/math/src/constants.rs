// Protocol constants for the FaceSwap pool.
//
// Grouped by functionality. Tick bounds are the widest range whose
// Q64.64 sqrt price still fits in a u128.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value (price ≈ 1.0001^-443636 ≈ 5.4e-20)
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick value (price ≈ 1.0001^443636 ≈ 1.8e19)
pub const MAX_TICK: i32 = 443636;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Sqrt price at MIN_TICK
pub const MIN_SQRT_PRICE: u128 = 4295048016;

/// Sqrt price at MAX_TICK
pub const MAX_SQRT_PRICE: u128 = 79226673521066979257578248091;

/// Sqrt price for a 1:1 price ratio (2^64)
pub const SQRT_PRICE_1_1: u128 = Q64;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Upper bound on loop iterations in a single swap
pub const MAX_SWAP_ITERATIONS: u32 = 1024;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Protocol fee taken from swap input (0.3% = 30 bps)
pub const PROTOCOL_FEE_BPS: u128 = 30;

/// Basis-point denominator (100% = 10000 bps)
pub const FEE_DENOMINATOR_BPS: u128 = 10000;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64), the scaling factor of the Q64.64 format
pub const Q64: u128 = 1u128 << 64;
