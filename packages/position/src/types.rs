use soroban_sdk::{contracttype, Address};

/// A liquidity provider's stake over [lower_tick, upper_tick)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub owner: Address,
    pub lower_tick: i32,
    pub upper_tick: i32,
    pub liquidity: u128,
}

/// Position with the token amounts it represents at the current price
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub position_id: u64,
    pub owner: Address,
    pub lower_tick: i32,
    pub upper_tick: i32,
    pub liquidity: u128,
    pub amount0: u128,
    pub amount1: u128,
    pub in_range: bool,
}
