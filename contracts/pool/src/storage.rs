// SPDX-License-Identifier: MIT
//
// Storage module:
// - One enum for every storage key
// - Encapsulated read/write helpers
// - Every write extends the entry's TTL

use soroban_sdk::{contracttype, Env, Vec};

use crate::types::{FeeCollector, PoolConfig, PoolState, Position, TickInfo};

// ============================================================
// STORAGE KEYS
// ============================================================

/// All storage keys used in the contract
#[contracttype]
pub enum DataKey {
    /// Initialization flag
    Initialized,
    /// Pool configuration (authority)
    PoolConfig,
    /// Pool state (price, tick, liquidity)
    PoolState,
    /// Tick data by tick index
    Tick(i32),
    /// Sorted indices of initialized ticks
    TickIndex,
    /// Position by sequential id
    Position(u64),
    /// Number of positions created so far
    PositionCount,
    /// Protocol fee ledger (one per pool)
    FeeCollector,
}

// ============================================================
// STORAGE CONFIGURATION
// ============================================================

/// Storage TTL constants (in ledgers)
pub mod storage_ttl {
    /// Extend once the remaining TTL drops below this (about 1 year at 5s per ledger)
    pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 6_307_200;
    /// Bump amount when extending TTL
    pub const PERSISTENT_BUMP_AMOUNT: u32 = 6_307_200;
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        storage_ttl::PERSISTENT_LIFETIME_THRESHOLD,
        storage_ttl::PERSISTENT_BUMP_AMOUNT,
    );
}

// ============================================================
// INITIALIZATION STORAGE
// ============================================================

/// Check if pool is initialized
#[inline]
pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

/// Mark pool as initialized
pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_persistent_ttl(env, &DataKey::Initialized);
}

// ============================================================
// POOL STORAGE
// ============================================================

pub fn write_pool_config(env: &Env, config: &PoolConfig) {
    env.storage().persistent().set(&DataKey::PoolConfig, config);
    extend_persistent_ttl(env, &DataKey::PoolConfig);
}

/// Read pool configuration, `None` before initialization
pub fn read_pool_config(env: &Env) -> Option<PoolConfig> {
    env.storage().persistent().get(&DataKey::PoolConfig)
}

pub fn write_pool_state(env: &Env, state: &PoolState) {
    env.storage().persistent().set(&DataKey::PoolState, state);
    extend_persistent_ttl(env, &DataKey::PoolState);
}

/// Read pool state, `None` before initialization
pub fn read_pool_state(env: &Env) -> Option<PoolState> {
    env.storage().persistent().get(&DataKey::PoolState)
}

// ============================================================
// TICK STORAGE
// ============================================================

pub fn write_tick_info(env: &Env, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(tick);
    env.storage().persistent().set(&key, info);
    extend_persistent_ttl(env, &key);
}

/// Read tick info, `None` if the tick was never initialized
pub fn read_tick_info(env: &Env, tick: i32) -> Option<TickInfo> {
    env.storage().persistent().get(&DataKey::Tick(tick))
}

#[inline]
pub fn has_tick(env: &Env, tick: i32) -> bool {
    env.storage().persistent().has(&DataKey::Tick(tick))
}

pub fn write_tick_index(env: &Env, ticks: &Vec<i32>) {
    env.storage().persistent().set(&DataKey::TickIndex, ticks);
    extend_persistent_ttl(env, &DataKey::TickIndex);
}

/// Read the sorted initialized-tick list (empty if none)
pub fn read_tick_index(env: &Env) -> Vec<i32> {
    env.storage()
        .persistent()
        .get(&DataKey::TickIndex)
        .unwrap_or_else(|| Vec::new(env))
}

// ============================================================
// POSITION STORAGE
// ============================================================

pub fn write_position(env: &Env, position_id: u64, pos: &Position) {
    let key = DataKey::Position(position_id);
    env.storage().persistent().set(&key, pos);
    extend_persistent_ttl(env, &key);
}

pub fn read_position(env: &Env, position_id: u64) -> Option<Position> {
    env.storage().persistent().get(&DataKey::Position(position_id))
}

pub fn read_position_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::PositionCount)
        .unwrap_or(0)
}

pub fn write_position_count(env: &Env, count: u64) {
    env.storage().persistent().set(&DataKey::PositionCount, &count);
    extend_persistent_ttl(env, &DataKey::PositionCount);
}

// ============================================================
// FEE COLLECTOR STORAGE
// ============================================================

#[inline]
pub fn has_fee_collector(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::FeeCollector)
}

pub fn write_fee_collector(env: &Env, collector: &FeeCollector) {
    env.storage().persistent().set(&DataKey::FeeCollector, collector);
    extend_persistent_ttl(env, &DataKey::FeeCollector);
}

pub fn read_fee_collector(env: &Env) -> Option<FeeCollector> {
    env.storage().persistent().get(&DataKey::FeeCollector)
}
