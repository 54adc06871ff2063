// Tick Types

use soroban_sdk::contracttype;

/// Information stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickInfo {
    /// Index of the tick this record describes
    pub tick_index: i32,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
}

impl TickInfo {
    /// Fresh record with no liquidity referencing it
    pub fn new(tick_index: i32) -> Self {
        Self {
            tick_index,
            liquidity_net: 0,
        }
    }
}
