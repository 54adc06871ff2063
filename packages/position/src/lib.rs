#![no_std]

pub mod error;
pub mod info;
pub mod manager;
pub mod types;

pub use error::PositionError;
pub use info::position_info;
pub use manager::{is_in_range, plan_add_liquidity, validate_position_params, LiquidityPlan};
pub use types::{Position, PositionInfo};
