// Position Valuation

use soroban_sdk::Env;
use faceswap_math::{get_amounts_for_liquidity, get_sqrt_price_at_tick};
use crate::error::PositionError;
use crate::manager::is_in_range;
use crate::types::{Position, PositionInfo};

/// Describe a position together with the token amounts its liquidity
/// represents at `sqrt_price_x64`.
pub fn position_info(
    env: &Env,
    position_id: u64,
    position: &Position,
    sqrt_price_x64: u128,
    current_tick: i32,
) -> Result<PositionInfo, PositionError> {
    let sqrt_lower = get_sqrt_price_at_tick(position.lower_tick)?;
    let sqrt_upper = get_sqrt_price_at_tick(position.upper_tick)?;

    let (amount0, amount1) = get_amounts_for_liquidity(
        env,
        sqrt_price_x64,
        sqrt_lower,
        sqrt_upper,
        position.liquidity,
    )?;

    Ok(PositionInfo {
        position_id,
        owner: position.owner.clone(),
        lower_tick: position.lower_tick,
        upper_tick: position.upper_tick,
        liquidity: position.liquidity,
        amount0,
        amount1,
        in_range: is_in_range(current_tick, position.lower_tick, position.upper_tick),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceswap_math::Q64;
    use soroban_sdk::{testutils::Address as _, Address};

    #[test]
    fn test_info_in_range() {
        let env = Env::default();
        let position = Position {
            owner: Address::generate(&env),
            lower_tick: -600,
            upper_tick: 600,
            liquidity: 1_000_000_000_000,
        };

        let info = position_info(&env, 3, &position, Q64, 0).unwrap();

        assert_eq!(info.position_id, 3);
        assert_eq!(info.owner, position.owner);
        assert_eq!(info.amount0, 29553010879);
        assert_eq!(info.amount1, 29553010879);
        assert!(info.in_range);
    }

    #[test]
    fn test_info_above_range() {
        let env = Env::default();
        let position = Position {
            owner: Address::generate(&env),
            lower_tick: -600,
            upper_tick: 600,
            liquidity: 1_000_000_000_000,
        };
        let price = get_sqrt_price_at_tick(600).unwrap();

        let info = position_info(&env, 0, &position, price, 600).unwrap();

        assert_eq!(info.amount0, 0);
        assert_eq!(info.amount1, 60005999255);
        assert!(!info.in_range);
    }
}
