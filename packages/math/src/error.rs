// SPDX-License-Identifier: MIT
// Math Errors

/// Failure modes of the fixed-point helpers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MathError {
    /// Result does not fit in the destination integer
    Overflow,
    DivisionByZero,
    /// Tick outside [MIN_TICK, MAX_TICK]
    TickOutOfRange,
    /// Sqrt price outside [MIN_SQRT_PRICE, MAX_SQRT_PRICE]
    SqrtPriceOutOfRange,
}
