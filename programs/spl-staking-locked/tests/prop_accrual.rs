// Property tests for reward accrual, driven through the pure state
// transitions with explicit timestamps.
//
// Run: cargo test -p spl-staking-locked --test prop_accrual

use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;
use spl_staking_locked::lifecycle;
use spl_staking_locked::math::PRECISION;
use spl_staking_locked::state::{Settings, Stats, UserInfo};
use spl_staking_locked::views;

const START: u32 = 1_700_000_000;

fn pool(rate: u64) -> (Settings, Stats) {
    let settings = Settings {
        administrator: Pubkey::new_unique(),
        token_mint: Pubkey::new_unique(),
        reward_rate_per_second_per_token_numerator: rate,
        ..Settings::default()
    };
    let stats = Stats {
        last_update_time: START,
        ..Stats::default()
    };
    (settings, stats)
}

fn staked(settings: &Settings, stats: &mut Stats, amount: u64) -> UserInfo {
    let mut user_info = UserInfo::default();
    lifecycle::stake(settings, stats, &mut user_info, Pubkey::new_unique(), amount, START)
        .unwrap();
    user_info
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn accrual_is_linear_in_elapsed_time(
        stake in 1u64..=1_000_000_000_000,
        rate in 0u64..=10_000_000,
        elapsed in 0u32..=50_000_000,
    ) {
        let (settings, mut stats) = pool(rate);
        let user_info = staked(&settings, &mut stats, stake);

        let viewed = views::current_rewards(&settings, &stats, &user_info, START + elapsed)
            .unwrap();

        let expected = u128::from(stake) * u128::from(rate) * u128::from(elapsed)
            / u128::from(PRECISION);
        prop_assert_eq!(u128::from(viewed.total_reward), expected);
    }

    #[test]
    fn zero_rate_rewards_stay_constant(
        stake in 1u64..=u64::MAX / 2,
        first in 0u32..=1_000_000,
        extra in 0u32..=1_000_000,
    ) {
        let (settings, mut stats) = pool(0);
        let user_info = staked(&settings, &mut stats, stake);

        let early = views::current_rewards(&settings, &stats, &user_info, START + first).unwrap();
        let late = views::current_rewards(&settings, &stats, &user_info, START + first + extra)
            .unwrap();

        prop_assert_eq!(early.total_reward, 0);
        prop_assert_eq!(late.total_reward, 0);
    }

    #[test]
    fn accumulator_frozen_while_nothing_staked(
        stake in 1u64..=1_000_000_000,
        rate in 1u64..=10_000_000,
        before in 1u32..=1_000_000,
        idle in 1u32..=1_000_000,
    ) {
        let (settings, mut stats) = pool(rate);
        let mut user_info = staked(&settings, &mut stats, stake);
        lifecycle::request_withdrawal(&settings, &mut stats, &mut user_info, START + before)
            .unwrap();
        let reward_per_token = stats.reward_per_token_stored_numerator;
        let promised = stats.total_reward_promised;

        stats.settle(&settings, START + before + idle).unwrap();

        prop_assert_eq!(stats.reward_per_token_stored_numerator, reward_per_token);
        prop_assert_eq!(stats.total_reward_promised, promised);
        prop_assert_eq!(stats.last_update_time, START + before + idle);
    }

    #[test]
    fn requests_accumulate_and_restart_the_clock(
        first_stake in 1u64..=1_000_000_000,
        second_stake in 1u64..=1_000_000_000,
        rate in 0u64..=10_000_000,
        gap in 0u32..=100_000,
    ) {
        let (settings, mut stats) = pool(rate);
        let user = Pubkey::new_unique();
        let mut user_info = UserInfo::default();

        lifecycle::stake(&settings, &mut stats, &mut user_info, user, first_stake, START).unwrap();
        let first = lifecycle::request_withdrawal(
            &settings, &mut stats, &mut user_info, START + gap,
        ).unwrap();
        lifecycle::stake(
            &settings, &mut stats, &mut user_info, user, second_stake, START + gap,
        ).unwrap();
        let second = lifecycle::request_withdrawal(
            &settings, &mut stats, &mut user_info, START + 2 * gap,
        ).unwrap();

        prop_assert_eq!(second.total_token_amount, first_stake + second_stake);
        prop_assert_eq!(
            second.total_reward_amount,
            first.added_reward_amount + second.added_reward_amount
        );
        prop_assert_eq!(user_info.withdrawal_request_time, START + 2 * gap);
        prop_assert_eq!(stats.total_staked, 0);
    }

    #[test]
    fn funding_lasts_through_reported_runway(
        stake in 1u64..=1_000_000_000,
        rate in 1u64..=10_000_000,
        funding in 0u64..=1_000_000_000,
    ) {
        let (settings, mut stats) = pool(rate);
        staked(&settings, &mut stats, stake);
        stats.total_reward_provided = funding;

        let runway = views::reward_runway(&settings, &stats, START).unwrap().runway_seconds;
        prop_assume!(runway <= u64::from(u32::MAX - START));

        let horizon = START + runway as u32;
        let unallocated = views::unallocated_rewards(&settings, &stats, horizon)
            .unwrap()
            .unallocated_rewards;
        prop_assert!(unallocated >= 0);
    }
}
