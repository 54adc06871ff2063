// Property-Based Testing with Proptest
// Run with: cargo test -p faceswap-math --test test_proptest

use faceswap_math::*;
use proptest::prelude::*;
use soroban_sdk::Env;

// ============================================================
// Q64 PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: mul_div(a, b, b) = a (when b != 0)
    #[test]
    fn prop_mul_div_identity(a in 0u128..u128::MAX, b in 1u128..u128::MAX) {
        let env = Env::default();
        prop_assert_eq!(mul_div(&env, a, b, b), Ok(a));
    }

    /// Property: rounding up never lands below rounding down
    #[test]
    fn prop_mul_div_rounding_order(
        a in 0u128..u128::MAX / 2,
        b in 0u128..(1u128 << 64),
        denom in 1u128..u128::MAX
    ) {
        let env = Env::default();
        if let (Ok(down), Ok(up)) = (
            mul_div(&env, a, b, denom),
            mul_div_rounding_up(&env, a, b, denom),
        ) {
            prop_assert!(up == down || up == down + 1);
        }
    }
}

// ============================================================
// TICK MATH PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: tick -> price is strictly increasing over the full range
    #[test]
    fn prop_tick_monotonic(tick in MIN_TICK..MAX_TICK) {
        let price1 = get_sqrt_price_at_tick(tick).unwrap();
        let price2 = get_sqrt_price_at_tick(tick + 1).unwrap();
        prop_assert!(price2 > price1, "tick={}, price1={}, price2={}", tick, price1, price2);
    }

    /// Property: sqrt_price_to_tick(tick_to_sqrt_price(t)) = t
    #[test]
    fn prop_tick_round_trip(tick in MIN_TICK..=MAX_TICK) {
        let price = get_sqrt_price_at_tick(tick).unwrap();
        prop_assert_eq!(get_tick_at_sqrt_price(price), Ok(tick));
    }

    /// Property: any price strictly between two adjacent tick prices maps
    /// to the lower tick
    #[test]
    fn prop_tick_floor(tick in MIN_TICK..MAX_TICK) {
        let next = get_sqrt_price_at_tick(tick + 1).unwrap();
        prop_assert_eq!(get_tick_at_sqrt_price(next - 1), Ok(tick));
    }

    /// Property: the tick found brackets the price
    #[test]
    fn prop_tick_brackets_price(sqrt_price in MIN_SQRT_PRICE..MAX_SQRT_PRICE) {
        let tick = get_tick_at_sqrt_price(sqrt_price).unwrap();
        prop_assert!(get_sqrt_price_at_tick(tick).unwrap() <= sqrt_price);
        prop_assert!(get_sqrt_price_at_tick(tick + 1).unwrap() > sqrt_price);
    }
}

// ============================================================
// SWAP STEP PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: a step never consumes more than it is given and never
    /// moves the price past its target or against the swap direction
    #[test]
    fn prop_swap_step_bounded(
        tick in -20000i32..20000,
        distance in 1i32..5000,
        liquidity in 0u128..1_000_000_000_000_000u128,
        amount in 0u128..1_000_000_000_000u128,
        zero_for_one: bool
    ) {
        let env = Env::default();
        let current = get_sqrt_price_at_tick(tick).unwrap();
        let target_tick = if zero_for_one { tick - distance } else { tick + distance };
        let target = get_sqrt_price_at_tick(target_tick).unwrap();

        let step = compute_swap_step(&env, current, target, liquidity, amount, zero_for_one).unwrap();

        prop_assert!(step.amount_in <= amount);
        if zero_for_one {
            prop_assert!(step.sqrt_price_next <= current && step.sqrt_price_next >= target);
        } else {
            prop_assert!(step.sqrt_price_next >= current && step.sqrt_price_next <= target);
        }
        if liquidity == 0 {
            prop_assert_eq!(step.sqrt_price_next, target);
            prop_assert_eq!(step.amount_in, 0);
        }
    }

    /// Property: the boundary fee never exceeds the unspent budget
    #[test]
    fn prop_step_fee_bounded(amount_in in 0u128..1u128 << 100, extra in 0u128..1u128 << 100) {
        let env = Env::default();
        let remaining = amount_in + extra;
        let fee = calculate_step_fee(
            &env, amount_in, remaining, true, PROTOCOL_FEE_BPS, FEE_DENOMINATOR_BPS,
        ).unwrap();
        prop_assert!(fee <= extra);
    }
}
