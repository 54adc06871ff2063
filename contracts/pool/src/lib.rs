#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

// External packages
use faceswap_math::{get_tick_at_sqrt_price, is_valid_sqrt_price};
use faceswap_position::{plan_add_liquidity, position_info};
use faceswap_swap::{engine_swap, quote_swap, SwapState};
use faceswap_tick::{insert_tick, is_valid_tick};

// Local modules
mod error;
mod events;
mod storage;
pub mod types;

pub use error::FaceSwapError;
use events::*;
use storage::*;
use types::{
    FeeCollector, PoolConfig, PoolState, Position, PositionInfo, SwapResult, TickInfo,
};

#[contract]
pub struct FaceSwapPool;

#[contractimpl]
impl FaceSwapPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the pool at a starting price
    ///
    /// # Arguments
    /// * `authority` - Pool authority, allowed to initialize ticks
    /// * `sqrt_price_x64` - Initial sqrt price (Q64.64)
    /// * `current_tick` - Initial tick, must equal the floor tick of `sqrt_price_x64`
    pub fn initialize_pool(
        env: Env,
        authority: Address,
        sqrt_price_x64: u128,
        current_tick: i32,
    ) -> Result<(), FaceSwapError> {
        authority.require_auth();

        if is_initialized(&env) {
            return Err(FaceSwapError::AlreadyInitialized);
        }
        if !is_valid_sqrt_price(sqrt_price_x64) {
            return Err(FaceSwapError::InvalidSqrtPrice);
        }
        if !is_valid_tick(current_tick) {
            return Err(FaceSwapError::InvalidTick);
        }

        let expected_tick = get_tick_at_sqrt_price(sqrt_price_x64)?;
        if expected_tick != current_tick {
            log!(&env, "tick mismatch", current_tick, expected_tick);
            return Err(FaceSwapError::PriceTickMismatch);
        }

        write_pool_config(&env, &PoolConfig { authority: authority.clone() });
        write_pool_state(
            &env,
            &PoolState {
                sqrt_price_x64,
                current_tick,
                liquidity: 0,
            },
        );
        set_initialized(&env);

        emit_pool_init(&env, &authority, sqrt_price_x64, current_tick);
        Ok(())
    }

    /// Create the pool's protocol fee ledger with a zero balance
    pub fn initialize_fee_collector(env: Env, payer: Address) -> Result<(), FaceSwapError> {
        payer.require_auth();

        if has_fee_collector(&env) {
            return Err(FaceSwapError::AlreadyInitialized);
        }

        write_fee_collector(&env, &FeeCollector::new());

        emit_fee_init(&env, &payer);
        Ok(())
    }

    /// Create a tick record with zero net liquidity
    pub fn initialize_tick(env: Env, caller: Address, tick_index: i32) -> Result<(), FaceSwapError> {
        caller.require_auth();

        let config = read_pool_config(&env).ok_or(FaceSwapError::NotInitialized)?;
        if caller != config.authority {
            return Err(FaceSwapError::Unauthorized);
        }
        if !is_valid_tick(tick_index) {
            return Err(FaceSwapError::InvalidTick);
        }
        if has_tick(&env, tick_index) {
            return Err(FaceSwapError::AlreadyInitialized);
        }

        let mut ticks = read_tick_index(&env);
        insert_tick(&mut ticks, tick_index);

        write_tick_info(&env, tick_index, &TickInfo::new(tick_index));
        write_tick_index(&env, &ticks);

        emit_tick_init(&env, tick_index);
        Ok(())
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Add liquidity over [lower_tick, upper_tick) as a new position
    ///
    /// Both bounds must be initialized ticks. Returns the new position id.
    pub fn add_liquidity(
        env: Env,
        owner: Address,
        liquidity_delta: u128,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<u64, FaceSwapError> {
        owner.require_auth();

        let mut pool = read_pool_state(&env).ok_or(FaceSwapError::NotInitialized)?;

        let plan = plan_add_liquidity(
            |tick| read_tick_info(&env, tick),
            pool.current_tick,
            pool.liquidity,
            lower_tick,
            upper_tick,
            liquidity_delta,
        )?;

        let position_id = read_position_count(&env);
        let next_count = position_id
            .checked_add(1)
            .ok_or(FaceSwapError::ArithmeticOverflow)?;

        // All checks passed; persist the plan
        write_tick_info(&env, lower_tick, &plan.lower);
        write_tick_info(&env, upper_tick, &plan.upper);

        pool.liquidity = plan.pool_liquidity;
        write_pool_state(&env, &pool);

        write_position(
            &env,
            position_id,
            &Position {
                owner: owner.clone(),
                lower_tick,
                upper_tick,
                liquidity: liquidity_delta,
            },
        );
        write_position_count(&env, next_count);

        emit_add_liquidity(&env, &owner, position_id, lower_tick, upper_tick, liquidity_delta);
        Ok(position_id)
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Swap `amount_in` of the input token (fees included)
    ///
    /// `zero_for_one = true` sells token0 and moves the price down.
    /// If liquidity runs out after the price moved, the swap is filled
    /// partially and `SwapResult::amount_in` reports what was consumed.
    pub fn swap(
        env: Env,
        trader: Address,
        amount_in: u128,
        zero_for_one: bool,
    ) -> Result<SwapResult, FaceSwapError> {
        trader.require_auth();

        let pool = read_pool_state(&env).ok_or(FaceSwapError::NotInitialized)?;
        let mut collector = read_fee_collector(&env).ok_or(FaceSwapError::NotInitialized)?;
        let ticks = read_tick_index(&env);

        let mut state = SwapState {
            sqrt_price_x64: pool.sqrt_price_x64,
            current_tick: pool.current_tick,
            liquidity: pool.liquidity,
        };

        let result = engine_swap(
            &env,
            &mut state,
            |tick| read_tick_info(&env, tick),
            &ticks,
            amount_in,
            zero_for_one,
        )?;

        collector.accrue(result.fee_amount)?;

        write_pool_state(
            &env,
            &PoolState {
                sqrt_price_x64: state.sqrt_price_x64,
                current_tick: state.current_tick,
                liquidity: state.liquidity,
            },
        );
        write_fee_collector(&env, &collector);

        if result.amount_in < amount_in {
            log!(&env, "partial fill", result.amount_in, amount_in);
        }

        emit_swap(
            &env,
            &trader,
            result.amount_in,
            result.amount_out,
            result.fee_amount,
            zero_for_one,
        );
        emit_sync_tick(&env, state.current_tick, state.sqrt_price_x64, state.liquidity);

        Ok(result)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Check if pool is initialized
    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Get current pool state (price, tick, liquidity)
    pub fn get_pool_state(env: Env) -> Result<PoolState, FaceSwapError> {
        read_pool_state(&env).ok_or(FaceSwapError::NotInitialized)
    }

    pub fn get_pool_config(env: Env) -> Result<PoolConfig, FaceSwapError> {
        read_pool_config(&env).ok_or(FaceSwapError::NotInitialized)
    }

    pub fn get_tick(env: Env, tick_index: i32) -> Result<TickInfo, FaceSwapError> {
        read_tick_info(&env, tick_index).ok_or(FaceSwapError::UninitializedTick)
    }

    /// Initialized tick indices in ascending order
    pub fn get_initialized_ticks(env: Env) -> Vec<i32> {
        read_tick_index(&env)
    }

    pub fn get_position(env: Env, position_id: u64) -> Result<Position, FaceSwapError> {
        read_position(&env, position_id).ok_or(FaceSwapError::PositionNotFound)
    }

    /// Position with the token amounts it holds at the current price
    pub fn get_position_info(env: Env, position_id: u64) -> Result<PositionInfo, FaceSwapError> {
        let pool = read_pool_state(&env).ok_or(FaceSwapError::NotInitialized)?;
        let position = read_position(&env, position_id).ok_or(FaceSwapError::PositionNotFound)?;

        Ok(position_info(
            &env,
            position_id,
            &position,
            pool.sqrt_price_x64,
            pool.current_tick,
        )?)
    }

    pub fn get_position_count(env: Env) -> u64 {
        read_position_count(&env)
    }

    pub fn get_fee_collector(env: Env) -> Result<FeeCollector, FaceSwapError> {
        read_fee_collector(&env).ok_or(FaceSwapError::NotInitialized)
    }

    /// Simulate a swap against the current state without writing anything
    pub fn quote_swap(
        env: Env,
        amount_in: u128,
        zero_for_one: bool,
    ) -> Result<SwapResult, FaceSwapError> {
        let pool = read_pool_state(&env).ok_or(FaceSwapError::NotInitialized)?;
        let ticks = read_tick_index(&env);

        let state = SwapState {
            sqrt_price_x64: pool.sqrt_price_x64,
            current_tick: pool.current_tick,
            liquidity: pool.liquidity,
        };

        Ok(quote_swap(
            &env,
            &state,
            |tick| read_tick_info(&env, tick),
            &ticks,
            amount_in,
            zero_for_one,
        )?)
    }
}
