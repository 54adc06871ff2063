// Pool Types - Using types from packages

use soroban_sdk::{contracttype, Address};

pub use faceswap_position::{Position, PositionInfo};
pub use faceswap_swap::{FeeCollector, SwapResult};
pub use faceswap_tick::TickInfo;

// ============================================================
// POOL CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Address that initialized the pool; manages its tick grid
    pub authority: Address,
}

// ============================================================
// POOL STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt price as Q64.64 fixed point
    pub sqrt_price_x64: u128,
    /// Current tick
    pub current_tick: i32,
    /// Active liquidity in range
    pub liquidity: u128,
}
