//! State transitions for participant instructions.
//!
//! Each function validates, settles `Stats`, reconciles the position and
//! applies its effect, returning the event to emit. Token movement is left to
//! the instruction handlers in `processor`.

use crate::error::StakingError;
use crate::events::*;
use crate::state::{Settings, Stats, UserInfo};
use anchor_lang::prelude::*;

impl UserInfo {
    /// Earliest timestamp at which the pending request may be withdrawn.
    pub fn withdrawal_unlocks_at(&self, withdrawal_delay_seconds: u32) -> u64 {
        u64::from(self.withdrawal_request_time) + u64::from(withdrawal_delay_seconds)
    }

    fn clear_withdrawal_request(&mut self) {
        self.withdrawal_request_time = 0;
        self.withdrawal_request_amount = 0;
        self.withdrawal_request_reward_amount = 0;
    }

    fn require_withdrawable(&self, settings: &Settings, now: u32) -> Result<()> {
        // On-chain, Anchor rejects a missing `user_info` account before this runs.
        require!(self.is_initialized(), StakingError::AccountNotInitialized);
        require!(
            self.withdrawal_request_amount > 0,
            StakingError::NoWithdrawalRequest
        );
        require!(
            u64::from(now) >= self.withdrawal_unlocks_at(settings.withdrawal_delay_seconds),
            StakingError::WithdrawalDelayNotMet
        );
        Ok(())
    }
}

pub fn stake(
    settings: &Settings,
    stats: &mut Stats,
    user_info: &mut UserInfo,
    user: Pubkey,
    amount: u64,
    now: u32,
) -> Result<Staked> {
    require!(amount > 0, StakingError::InvalidAmount);

    stats.settle(settings, now)?;

    if !user_info.is_initialized() {
        user_info.user = user;
    }
    // A fresh position has nothing staked, so this only moves its checkpoint.
    user_info.reconcile(stats)?;

    if user_info.stake_amount == 0 {
        user_info.staked_at = now;
    }

    user_info.stake_amount = user_info
        .stake_amount
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    stats.add_stake(amount)?;

    Ok(Staked {
        user,
        amount,
        total_user_staked: user_info.stake_amount,
        total_staked: stats.total_staked,
        staked_at: user_info.staked_at,
    })
}

pub fn request_withdrawal(
    settings: &Settings,
    stats: &mut Stats,
    user_info: &mut UserInfo,
    now: u32,
) -> Result<WithdrawalRequested> {
    require!(user_info.stake_amount > 0, StakingError::NoStakeToWithdraw);

    stats.settle(settings, now)?;
    user_info.reconcile(stats)?;

    let stake_amount = user_info.stake_amount;
    let reward_amount = user_info.captured_reward;

    stats.remove_stake(stake_amount)?;
    user_info.stake_amount = 0;
    user_info.staked_at = 0;
    user_info.captured_reward = 0;

    user_info.withdrawal_request_time = now;
    user_info.withdrawal_request_amount = user_info
        .withdrawal_request_amount
        .checked_add(stake_amount)
        .ok_or(StakingError::MathOverflow)?;
    user_info.withdrawal_request_reward_amount = user_info
        .withdrawal_request_reward_amount
        .checked_add(reward_amount)
        .ok_or(StakingError::MathOverflow)?;

    Ok(WithdrawalRequested {
        user: user_info.user,
        added_token_amount: stake_amount,
        total_token_amount: user_info.withdrawal_request_amount,
        added_reward_amount: reward_amount,
        total_reward_amount: user_info.withdrawal_request_reward_amount,
        withdrawal_request_time: now,
    })
}

/// `reward_custody_balance` is the protocol reward account balance.
pub fn withdraw(
    settings: &Settings,
    stats: &mut Stats,
    user_info: &mut UserInfo,
    reward_custody_balance: u64,
    now: u32,
) -> Result<Withdrawn> {
    user_info.require_withdrawable(settings, now)?;
    require!(
        reward_custody_balance >= user_info.withdrawal_request_reward_amount,
        StakingError::InsufficientRewards
    );

    stats.settle(settings, now)?;

    let event = Withdrawn {
        user: user_info.user,
        token_amount: user_info.withdrawal_request_amount,
        reward_amount: user_info.withdrawal_request_reward_amount,
        withdrawal_request_time: user_info.withdrawal_request_time,
        withdrawn_at: now,
    };
    user_info.clear_withdrawal_request();

    Ok(event)
}

/// Returns principal only. The queued reward stays in protocol custody and is
/// not credited back to `total_reward_provided`.
pub fn withdraw_and_forfeit_rewards(
    settings: &Settings,
    stats: &mut Stats,
    user_info: &mut UserInfo,
    now: u32,
) -> Result<WithdrawnAndForfeitedRewards> {
    user_info.require_withdrawable(settings, now)?;

    stats.settle(settings, now)?;

    let event = WithdrawnAndForfeitedRewards {
        user: user_info.user,
        token_amount: user_info.withdrawal_request_amount,
        forfeited_reward_amount: user_info.withdrawal_request_reward_amount,
    };
    user_info.clear_withdrawal_request();

    Ok(event)
}
