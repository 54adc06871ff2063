use soroban_sdk::{Address, Env, Symbol};

// ============================================================
// EVENT NAMES
// ============================================================

/// Event name constants
pub struct EventName;

impl EventName {
    pub fn pool_init(env: &Env) -> Symbol {
        Symbol::new(env, "pool_init")
    }

    pub fn fee_init(env: &Env) -> Symbol {
        Symbol::new(env, "fee_init")
    }

    pub fn tick_init(env: &Env) -> Symbol {
        Symbol::new(env, "tick_init")
    }

    pub fn add_liquidity(env: &Env) -> Symbol {
        Symbol::new(env, "add_liq")
    }

    pub fn swap(env: &Env) -> Symbol {
        Symbol::new(env, "swap")
    }

    pub fn sync_tick(env: &Env) -> Symbol {
        Symbol::new(env, "synctk")
    }
}

// ============================================================
// EVENT EMITTERS
// ============================================================

/// Emit pool initialized event
pub fn emit_pool_init(env: &Env, authority: &Address, sqrt_price_x64: u128, current_tick: i32) {
    env.events().publish(
        (EventName::pool_init(env),),
        (authority.clone(), sqrt_price_x64, current_tick),
    );
}

/// Emit fee collector initialized event
pub fn emit_fee_init(env: &Env, payer: &Address) {
    env.events().publish((EventName::fee_init(env),), payer.clone());
}

/// Emit tick initialized event
pub fn emit_tick_init(env: &Env, tick_index: i32) {
    env.events().publish((EventName::tick_init(env),), tick_index);
}

/// Emit add liquidity event
pub fn emit_add_liquidity(
    env: &Env,
    owner: &Address,
    position_id: u64,
    lower_tick: i32,
    upper_tick: i32,
    liquidity: u128,
) {
    env.events().publish(
        (EventName::add_liquidity(env),),
        (owner.clone(), position_id, lower_tick, upper_tick, liquidity),
    );
}

/// Emit swap event
pub fn emit_swap(
    env: &Env,
    trader: &Address,
    amount_in: u128,
    amount_out: u128,
    fee_amount: u128,
    zero_for_one: bool,
) {
    env.events().publish(
        (EventName::swap(env),),
        (trader.clone(), amount_in, amount_out, fee_amount, zero_for_one),
    );
}

/// Emit sync tick event (final tick and price after a swap)
pub fn emit_sync_tick(env: &Env, tick: i32, sqrt_price_x64: u128, liquidity: u128) {
    env.events().publish(
        (EventName::sync_tick(env),),
        (tick, sqrt_price_x64, liquidity),
    );
}
