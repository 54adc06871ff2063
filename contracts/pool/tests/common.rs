#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env};
use faceswap_pool::{FaceSwapPool, FaceSwapPoolClient};

// Test constants
pub const DEFAULT_SQRT_PRICE_X64: u128 = 1u128 << 64; // Price = 1.0
pub const DEFAULT_TICK: i32 = 0;

/// sqrt price at tick -10
pub const SQRT_PRICE_TICK_NEG_10: u128 = 18437523468038800957;
/// sqrt price at tick 10
pub const SQRT_PRICE_TICK_10: u128 = 18455969290605290428;

pub const DEEP_LIQUIDITY: u128 = 1_000_000_000_000;

/// Register the pool contract without initializing it
pub fn register_pool(env: &Env) -> FaceSwapPoolClient<'_> {
    let pool_id = env.register(FaceSwapPool, ());
    FaceSwapPoolClient::new(env, &pool_id)
}

/// Pool at price 1.0 with its fee collector, no ticks
pub fn setup_pool(env: &Env) -> (FaceSwapPoolClient<'_>, Address) {
    let authority = Address::generate(env);
    let client = register_pool(env);

    client.initialize_pool(&authority, &DEFAULT_SQRT_PRICE_X64, &DEFAULT_TICK);
    client.initialize_fee_collector(&authority);

    (client, authority)
}

/// Pool with `liquidity` provided over [lower, upper)
pub fn setup_pool_with_liquidity(
    env: &Env,
    liquidity: u128,
    lower: i32,
    upper: i32,
) -> (FaceSwapPoolClient<'_>, Address, Address) {
    let (client, authority) = setup_pool(env);
    let lp = Address::generate(env);

    client.initialize_tick(&authority, &lower);
    client.initialize_tick(&authority, &upper);
    client.add_liquidity(&lp, &liquidity, &lower, &upper);

    (client, authority, lp)
}
