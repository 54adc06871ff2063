mod common;

use soroban_sdk::{testutils::Address as _, Address, Env};
use faceswap_pool::FaceSwapError;

#[test]
fn test_fee_collector_starts_empty() {
    let env = Env::default();
    env.mock_all_auths();

    let client = common::register_pool(&env);
    let payer = Address::generate(&env);

    client.initialize_fee_collector(&payer);

    assert_eq!(client.get_fee_collector().total_fees, 0);
}

#[test]
fn test_fee_collector_missing() {
    let env = Env::default();
    let client = common::register_pool(&env);

    assert_eq!(client.try_get_fee_collector(), Err(Ok(FaceSwapError::NotInitialized)));
}

#[test]
fn test_fee_collector_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _authority, _lp) = common::setup_pool_with_liquidity(&env, 1000, -10, 10);
    let trader = Address::generate(&env);
    client.swap(&trader, &500, &true);

    let other = Address::generate(&env);
    assert_eq!(
        client.try_initialize_fee_collector(&other),
        Err(Ok(FaceSwapError::AlreadyInitialized))
    );

    // Existing balance is not reset
    assert_eq!(client.get_fee_collector().total_fees, 1);
}

#[test]
fn test_fees_never_decrease() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _authority, _lp) =
        common::setup_pool_with_liquidity(&env, common::DEEP_LIQUIDITY, -600, 600);
    let trader = Address::generate(&env);

    let mut last = client.get_fee_collector().total_fees;
    let swaps = [(1_000_000u128, true), (250_000, false), (1, true), (5_000_000, false)];

    for (amount, zero_for_one) in swaps {
        let result = client.try_swap(&trader, &amount, &zero_for_one);
        let total = client.get_fee_collector().total_fees;

        match result {
            Ok(Ok(swap)) => assert_eq!(total, last + swap.fee_amount),
            _ => assert_eq!(total, last),
        }
        assert!(total >= last);
        last = total;
    }
}
