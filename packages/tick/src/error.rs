// Tick Errors

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickError {
    /// Tick record has not been created
    Uninitialized,
    /// Tick index outside [MIN_TICK, MAX_TICK]
    InvalidTick,
    /// Liquidity accounting left its integer range
    Overflow,
}
