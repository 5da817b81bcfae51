//! Reward-per-token accumulator bookkeeping.
//!
//! `Stats` is advanced to `now` before anything else happens in a mutating
//! instruction, then the acting `UserInfo` is checked against the refreshed
//! accumulator. Views run the same code against a cloned snapshot.

use crate::error::StakingError;
use crate::math;
use crate::state::{Settings, Stats, UserInfo};
use anchor_lang::prelude::*;

impl Stats {
    /// Advances the accumulator and promised rewards to `now` at the current
    /// rate. Nothing accrues while `total_staked` is zero.
    pub fn settle(&mut self, settings: &Settings, now: u32) -> Result<()> {
        let elapsed = now
            .checked_sub(self.last_update_time)
            .ok_or(StakingError::ClockRegression)?;

        if self.total_staked > 0 && elapsed > 0 {
            let increment = math::reward_per_token_increment(
                settings.reward_rate_per_second_per_token_numerator,
                elapsed,
            )?;
            self.reward_per_token_stored_numerator = self
                .reward_per_token_stored_numerator
                .checked_add(increment)
                .ok_or(StakingError::MathOverflow)?;

            let promised = math::earned(self.total_staked, increment)?;
            self.total_reward_promised = self
                .total_reward_promised
                .checked_add(promised)
                .ok_or(StakingError::MathOverflow)?;
        }

        self.last_update_time = now;
        Ok(())
    }

    /// Copy of `self` settled to `now`.
    pub fn settled(&self, settings: &Settings, now: u32) -> Result<Stats> {
        let mut snapshot = self.clone();
        snapshot.settle(settings, now)?;
        Ok(snapshot)
    }

    /// Funded minus promised rewards. Negative means the pool is in deficit.
    pub fn unallocated_rewards(&self) -> i128 {
        i128::from(self.total_reward_provided) - i128::from(self.total_reward_promised)
    }

    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}

impl UserInfo {
    /// Reward earned since this position's checkpoint, not yet captured.
    pub fn pending_rewards(&self, stats: &Stats) -> Result<u64> {
        math::uncaptured_rewards(
            self.stake_amount,
            stats.reward_per_token_stored_numerator,
            self.reward_per_token_paid_numerator,
        )
    }

    /// Moves pending rewards into `captured_reward` and moves the checkpoint
    /// up to the accumulator. `stats` must already be settled.
    pub fn reconcile(&mut self, stats: &Stats) -> Result<u64> {
        let owed = self.pending_rewards(stats)?;
        self.captured_reward = self
            .captured_reward
            .checked_add(owed)
            .ok_or(StakingError::MathOverflow)?;
        self.reward_per_token_paid_numerator = stats.reward_per_token_stored_numerator;
        Ok(owed)
    }
}
