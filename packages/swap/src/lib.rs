#![no_std]

pub mod engine;
pub mod error;
pub mod fee;
pub mod types;

pub use engine::{engine_swap, quote_swap, SwapState};
pub use error::SwapError;
pub use fee::FeeCollector;
pub use types::SwapResult;
