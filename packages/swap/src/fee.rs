// Protocol Fee Ledger

use soroban_sdk::contracttype;
use crate::error::SwapError;

/// Singleton ledger of protocol fees accrued by swaps
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeCollector {
    pub total_fees: u128,
}

impl FeeCollector {
    pub fn new() -> Self {
        Self { total_fees: 0 }
    }

    /// Add a swap's fee to the running total
    pub fn accrue(&mut self, amount: u128) -> Result<(), SwapError> {
        self.total_fees = self
            .total_fees
            .checked_add(amount)
            .ok_or(SwapError::Overflow)?;
        Ok(())
    }
}
