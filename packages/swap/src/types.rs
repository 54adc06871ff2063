use soroban_sdk::contracttype;

/// Outcome of an executed or quoted swap
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwapResult {
    /// Input consumed, fees included
    pub amount_in: u128,
    pub amount_out: u128,
    /// Portion of `amount_in` paid as protocol fee
    pub fee_amount: u128,
    pub sqrt_price_x64: u128,
    pub current_tick: i32,
    pub liquidity: u128,
    pub ticks_crossed: u32,
}
