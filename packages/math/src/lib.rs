// FaceSwap Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod q64;
pub mod sqrt_price;
pub mod liquidity;
pub mod swap_math;

pub use constants::*;
pub use error::MathError;

pub use q64::{mul_div, mul_div_rounding_up};

pub use sqrt_price::{get_sqrt_price_at_tick, get_tick_at_sqrt_price, is_valid_sqrt_price};

pub use liquidity::{get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity};

pub use swap_math::{
    calculate_step_fee,
    compute_swap_step,
    get_next_sqrt_price_from_input,
    SwapStep,
};
