//! State transitions for administrator instructions.

use crate::error::StakingError;
use crate::events::*;
use crate::math;
use crate::state::{Settings, Stats, MAX_WITHDRAWAL_DELAY_SECONDS};
use anchor_lang::prelude::*;

fn require_administrator(settings: &Settings, caller: Pubkey) -> Result<()> {
    require_keys_eq!(settings.administrator, caller, StakingError::Unauthorized);
    Ok(())
}

fn require_valid_delay(withdrawal_delay_seconds: u32) -> Result<()> {
    require!(
        withdrawal_delay_seconds <= MAX_WITHDRAWAL_DELAY_SECONDS,
        StakingError::InvalidAmount
    );
    Ok(())
}

pub fn initialize(
    settings: &mut Settings,
    stats: &mut Stats,
    administrator: Pubkey,
    token_mint: Pubkey,
    withdrawal_delay_seconds: u32,
    reward_rate_yearly_numerator: u64,
    now: u32,
) -> Result<Initialized> {
    require_valid_delay(withdrawal_delay_seconds)?;

    let reward_rate_per_second_numerator = math::per_second_rate(reward_rate_yearly_numerator);

    settings.administrator = administrator;
    settings.pending_administrator = None;
    settings.token_mint = token_mint;
    settings.withdrawal_delay_seconds = withdrawal_delay_seconds;
    settings.reward_rate_per_second_per_token_numerator = reward_rate_per_second_numerator;

    stats.reward_per_token_stored_numerator = 0;
    stats.last_update_time = now;
    stats.total_staked = 0;
    stats.total_reward_promised = 0;
    stats.total_reward_provided = 0;

    Ok(Initialized {
        administrator,
        token_mint,
        withdrawal_delay_seconds,
        reward_rate_yearly_numerator,
        reward_rate_per_second_numerator,
    })
}

pub fn add_rewards(
    settings: &Settings,
    stats: &mut Stats,
    caller: Pubkey,
    amount: u64,
    now: u32,
) -> Result<RewardsAdded> {
    require_administrator(settings, caller)?;
    require!(amount > 0, StakingError::InvalidAmount);

    stats.settle(settings, now)?;
    stats.total_reward_provided = stats
        .total_reward_provided
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    Ok(RewardsAdded {
        administrator: caller,
        amount,
        total_reward_provided: stats.total_reward_provided,
    })
}

/// Settles at the old rate first so the new one only applies going forward.
pub fn configure_reward_ratio(
    settings: &mut Settings,
    stats: &mut Stats,
    caller: Pubkey,
    new_reward_rate_yearly_numerator: u64,
    now: u32,
) -> Result<RewardRatioConfigured> {
    require_administrator(settings, caller)?;

    stats.settle(settings, now)?;

    let new_reward_rate_per_second_numerator =
        math::per_second_rate(new_reward_rate_yearly_numerator);
    settings.reward_rate_per_second_per_token_numerator = new_reward_rate_per_second_numerator;

    Ok(RewardRatioConfigured {
        administrator: caller,
        new_reward_rate_yearly_numerator,
        new_reward_rate_per_second_numerator,
    })
}

/// Pending requests are measured against the new delay from their own
/// request time.
pub fn configure_withdrawal_delay(
    settings: &mut Settings,
    stats: &mut Stats,
    caller: Pubkey,
    new_withdrawal_delay_seconds: u32,
    now: u32,
) -> Result<WithdrawalDelayConfigured> {
    require_administrator(settings, caller)?;
    require_valid_delay(new_withdrawal_delay_seconds)?;

    stats.settle(settings, now)?;

    let old_withdrawal_delay_seconds = settings.withdrawal_delay_seconds;
    settings.withdrawal_delay_seconds = new_withdrawal_delay_seconds;

    Ok(WithdrawalDelayConfigured {
        administrator: caller,
        old_withdrawal_delay_seconds,
        new_withdrawal_delay_seconds,
    })
}

pub fn initiate_ownership_transfer(
    settings: &mut Settings,
    caller: Pubkey,
    new_administrator: Pubkey,
) -> Result<OwnershipTransferInitiated> {
    require_administrator(settings, caller)?;

    settings.pending_administrator = Some(new_administrator);

    Ok(OwnershipTransferInitiated {
        current_administrator: caller,
        new_administrator,
    })
}

pub fn finalize_ownership_transfer(
    settings: &mut Settings,
    caller: Pubkey,
) -> Result<OwnershipTransferFinalized> {
    require!(
        settings.pending_administrator == Some(caller),
        StakingError::UnauthorizedOwnershipTransfer
    );

    let old_administrator = settings.administrator;
    settings.administrator = caller;
    settings.pending_administrator = None;

    Ok(OwnershipTransferFinalized {
        old_administrator,
        new_administrator: caller,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PRECISION;
    use crate::state::{UserInfo, SECONDS_PER_DAY, SECONDS_PER_YEAR};

    const START: u32 = 1_700_000_000;

    fn initialized(administrator: Pubkey, yearly: u64) -> (Settings, Stats) {
        let mut settings = Settings::default();
        let mut stats = Stats::default();
        initialize(
            &mut settings,
            &mut stats,
            administrator,
            Pubkey::new_unique(),
            5 * SECONDS_PER_DAY,
            yearly,
            START,
        )
        .unwrap();
        (settings, stats)
    }

    #[test]
    fn initialize_derives_per_second_rate() {
        let administrator = Pubkey::new_unique();
        let mut settings = Settings::default();
        let mut stats = Stats::default();

        let event = initialize(
            &mut settings,
            &mut stats,
            administrator,
            Pubkey::new_unique(),
            5 * SECONDS_PER_DAY,
            80_000_000_000,
            START,
        )
        .unwrap();

        assert_eq!(settings.administrator, administrator);
        assert_eq!(settings.pending_administrator, None);
        assert_eq!(settings.reward_rate_per_second_per_token_numerator, 2_536);
        assert_eq!(event.reward_rate_per_second_numerator, 2_536);
        assert_eq!(stats.last_update_time, START);
    }

    #[test]
    fn initialize_rejects_long_delay() {
        let mut settings = Settings::default();
        let mut stats = Stats::default();

        let err = initialize(
            &mut settings,
            &mut stats,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            MAX_WITHDRAWAL_DELAY_SECONDS + 1,
            0,
            START,
        )
        .unwrap_err();

        assert_eq!(err, StakingError::InvalidAmount.into());
    }

    #[test]
    fn admin_instructions_reject_other_callers() {
        let administrator = Pubkey::new_unique();
        let intruder = Pubkey::new_unique();
        let (mut settings, mut stats) = initialized(administrator, 0);
        let unauthorized: anchor_lang::error::Error = StakingError::Unauthorized.into();

        assert_eq!(
            add_rewards(&settings, &mut stats, intruder, 10, START).unwrap_err(),
            unauthorized
        );
        assert_eq!(
            configure_reward_ratio(&mut settings, &mut stats, intruder, 1, START).unwrap_err(),
            unauthorized
        );
        assert_eq!(
            configure_withdrawal_delay(&mut settings, &mut stats, intruder, 0, START)
                .unwrap_err(),
            unauthorized
        );
        assert_eq!(
            initiate_ownership_transfer(&mut settings, intruder, intruder).unwrap_err(),
            unauthorized
        );
        assert_eq!(settings.administrator, administrator);
        assert_eq!(settings.pending_administrator, None);
    }

    #[test]
    fn add_rewards_validates_and_accumulates() {
        let administrator = Pubkey::new_unique();
        let (settings, mut stats) = initialized(administrator, 0);

        let err = add_rewards(&settings, &mut stats, administrator, 0, START).unwrap_err();
        assert_eq!(err, StakingError::InvalidAmount.into());

        add_rewards(&settings, &mut stats, administrator, 300, START + 1).unwrap();
        let event = add_rewards(&settings, &mut stats, administrator, 200, START + 2).unwrap();

        assert_eq!(event.total_reward_provided, 500);
        assert_eq!(stats.total_reward_provided, 500);
        assert_eq!(stats.last_update_time, START + 2);
    }

    #[test]
    fn rate_change_applies_only_going_forward() {
        let administrator = Pubkey::new_unique();
        let yearly = PRECISION / 1_000 * SECONDS_PER_YEAR;
        let (mut settings, mut stats) = initialized(administrator, yearly);
        let mut user_info = UserInfo::default();
        crate::lifecycle::stake(
            &settings,
            &mut stats,
            &mut user_info,
            Pubkey::new_unique(),
            10_000,
            START,
        )
        .unwrap();

        configure_reward_ratio(&mut settings, &mut stats, administrator, 0, START + 100).unwrap();
        assert_eq!(stats.total_reward_promised, 1_000);

        stats.settle(&settings, START + 1_000).unwrap();
        assert_eq!(user_info.pending_rewards(&stats).unwrap(), 1_000);
        assert_eq!(stats.total_reward_promised, 1_000);
    }

    #[test]
    fn withdrawal_delay_is_bounded() {
        let administrator = Pubkey::new_unique();
        let (mut settings, mut stats) = initialized(administrator, 0);

        let err = configure_withdrawal_delay(
            &mut settings,
            &mut stats,
            administrator,
            MAX_WITHDRAWAL_DELAY_SECONDS + 1,
            START,
        )
        .unwrap_err();
        assert_eq!(err, StakingError::InvalidAmount.into());

        let event = configure_withdrawal_delay(
            &mut settings,
            &mut stats,
            administrator,
            MAX_WITHDRAWAL_DELAY_SECONDS,
            START,
        )
        .unwrap();
        assert_eq!(event.old_withdrawal_delay_seconds, 5 * SECONDS_PER_DAY);
        assert_eq!(settings.withdrawal_delay_seconds, MAX_WITHDRAWAL_DELAY_SECONDS);

        configure_withdrawal_delay(&mut settings, &mut stats, administrator, 0, START).unwrap();
        assert_eq!(settings.withdrawal_delay_seconds, 0);
    }

    fn pending_request(settings: &Settings, stats: &mut Stats) -> UserInfo {
        let mut user_info = UserInfo::default();
        crate::lifecycle::stake(settings, stats, &mut user_info, Pubkey::new_unique(), 10, START)
            .unwrap();
        crate::lifecycle::request_withdrawal(settings, stats, &mut user_info, START + 100)
            .unwrap();
        user_info
    }

    #[test]
    fn shorter_delay_applies_to_pending_request() {
        let administrator = Pubkey::new_unique();
        let (mut settings, mut stats) = initialized(administrator, 0);
        let mut user_info = pending_request(&settings, &mut stats);

        configure_withdrawal_delay(&mut settings, &mut stats, administrator, 50, START + 110)
            .unwrap();

        let err = crate::lifecycle::withdraw(&settings, &mut stats, &mut user_info, 0, START + 149)
            .unwrap_err();
        assert_eq!(err, StakingError::WithdrawalDelayNotMet.into());

        let event =
            crate::lifecycle::withdraw(&settings, &mut stats, &mut user_info, 0, START + 150)
                .unwrap();
        assert_eq!(event.token_amount, 10);
        assert_eq!(user_info.withdrawal_request_amount, 0);
    }

    #[test]
    fn longer_delay_applies_to_pending_request() {
        let administrator = Pubkey::new_unique();
        let (mut settings, mut stats) = initialized(administrator, 0);
        let mut user_info = pending_request(&settings, &mut stats);

        configure_withdrawal_delay(
            &mut settings,
            &mut stats,
            administrator,
            10 * SECONDS_PER_DAY,
            START + 200,
        )
        .unwrap();

        let old_unlock = START + 100 + 5 * SECONDS_PER_DAY;
        let err = crate::lifecycle::withdraw(&settings, &mut stats, &mut user_info, 0, old_unlock)
            .unwrap_err();
        assert_eq!(err, StakingError::WithdrawalDelayNotMet.into());
        assert_eq!(user_info.withdrawal_request_amount, 10);

        let new_unlock = START + 100 + 10 * SECONDS_PER_DAY;
        let event =
            crate::lifecycle::withdraw(&settings, &mut stats, &mut user_info, 0, new_unlock)
                .unwrap();
        assert_eq!(event.token_amount, 10);
    }

    #[test]
    fn ownership_transfer_is_two_phase() {
        let administrator = Pubkey::new_unique();
        let candidate = Pubkey::new_unique();
        let bystander = Pubkey::new_unique();
        let (mut settings, _) = initialized(administrator, 0);

        let err = finalize_ownership_transfer(&mut settings, candidate).unwrap_err();
        assert_eq!(err, StakingError::UnauthorizedOwnershipTransfer.into());

        initiate_ownership_transfer(&mut settings, administrator, candidate).unwrap();
        assert_eq!(settings.pending_administrator, Some(candidate));
        assert_eq!(settings.administrator, administrator);

        let err = finalize_ownership_transfer(&mut settings, bystander).unwrap_err();
        assert_eq!(err, StakingError::UnauthorizedOwnershipTransfer.into());

        let event = finalize_ownership_transfer(&mut settings, candidate).unwrap();
        assert_eq!(event.old_administrator, administrator);
        assert_eq!(settings.administrator, candidate);
        assert_eq!(settings.pending_administrator, None);

        let err = initiate_ownership_transfer(&mut settings, administrator, bystander)
            .unwrap_err();
        assert_eq!(err, StakingError::Unauthorized.into());
    }
}
