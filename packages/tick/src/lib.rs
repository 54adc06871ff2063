#![no_std]

pub mod error;
pub mod index;
pub mod types;
pub mod update;

pub use error::TickError;
pub use index::{find_next_initialized_tick, insert_tick};
pub use types::TickInfo;
pub use update::{cross_tick, is_valid_tick, update_liquidity_net};
