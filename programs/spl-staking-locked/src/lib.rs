//! # spl staking locked - Locked Token Staking with Continuous Rewards
//!
//! ## Business Process Flow
//!
//! 1. Initial Setup:
//!    - The program upgrade authority initializes the pool with the staked
//!      token mint, a withdrawal delay and a yearly reward rate
//!    - The initializer becomes the pool administrator
//!    - A protocol token account owned by the settings PDA holds reward funding
//!
//! 2. User Staking Flow:
//!    - User stakes tokens into a custody account owned by their position PDA
//!    - Rewards accrue every second at the configured rate per staked token
//!    - Further stakes top up the position without resetting its entry time
//!
//! 3. Withdrawal Flow:
//!    a. Request:
//!       - User requests withdrawal of the whole position
//!       - Accrued rewards are captured and queued next to the principal
//!       - Queued tokens stop earning; the delay clock starts (or restarts)
//!
//!    b. Waiting Period:
//!       - User waits at least the withdrawal delay from the latest request
//!
//!    c. Withdrawal:
//!       - `withdraw` returns principal plus queued reward (reward paid from
//!         protocol custody)
//!       - `withdraw_and_forfeit_rewards` returns principal only and leaves the
//!         reward in protocol custody
//!
//! 4. Administrative Functions:
//!    - Fund rewards, change the reward rate and the withdrawal delay
//!    - Two-phase administrator hand-off (initiate, then finalize by the
//!      candidate)
//!
//! 5. Health Views:
//!    - Current rewards of a position, unallocated rewards and reward runway,
//!      computed against the clock without writing state
//!
//! Every instruction first settles the global reward-per-token accumulator to
//! the current time, so rate changes never apply retroactively.
#![allow(unexpected_cfgs)]

pub mod account_structs;
pub mod admin;
pub mod error;
pub mod events;
mod guard;
pub mod ledger;
pub mod lifecycle;
pub mod math;
pub mod processor;
pub mod state;
pub mod views;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("E4ix78FMZ2HPjKvAyvRXJ4v5ipqZYkVUuswjuHkX7Q3v");

#[program]
pub mod spl_staking_locked {
    use super::*;

    /// Creates the pool:
    /// - withdrawal_delay_seconds: wait between a withdrawal request and the withdrawal (max 31 days)
    /// - reward_rate_yearly_numerator: yearly reward per token scaled by 1e12 (80_000_000_000 is 8%)
    pub fn initialize(
        ctx: Context<Initialize>,
        withdrawal_delay_seconds: u32,
        reward_rate_yearly_numerator: u64,
    ) -> Result<()> {
        processor::initialize(ctx, withdrawal_delay_seconds, reward_rate_yearly_numerator)
    }

    /// Administrator deposits reward funding into protocol custody.
    pub fn add_rewards(ctx: Context<AddRewards>, amount: u64) -> Result<()> {
        processor::add_rewards(ctx, amount)
    }

    pub fn configure_reward_ratio(
        ctx: Context<ConfigureRewardRatio>,
        new_reward_rate_yearly_numerator: u64,
    ) -> Result<()> {
        processor::configure_reward_ratio(ctx, new_reward_rate_yearly_numerator)
    }

    pub fn configure_withdrawal_delay(
        ctx: Context<ConfigureWithdrawalDelay>,
        new_withdrawal_delay_seconds: u32,
    ) -> Result<()> {
        processor::configure_withdrawal_delay(ctx, new_withdrawal_delay_seconds)
    }

    pub fn initiate_ownership_transfer(
        ctx: Context<InitiateOwnershipTransfer>,
        new_administrator: Pubkey,
    ) -> Result<()> {
        processor::initiate_ownership_transfer(ctx, new_administrator)
    }

    pub fn finalize_ownership_transfer(ctx: Context<FinalizeOwnershipTransfer>) -> Result<()> {
        processor::finalize_ownership_transfer(ctx)
    }

    /// Stakes tokens, opening the position on first use.
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        processor::stake(ctx, amount)
    }

    /// Queues the whole stake and its rewards for withdrawal.
    pub fn request_withdrawal(ctx: Context<RequestWithdrawal>) -> Result<()> {
        processor::request_withdrawal(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        processor::withdraw(ctx)
    }

    pub fn withdraw_and_forfeit_rewards(ctx: Context<WithdrawAndForfeitRewards>) -> Result<()> {
        processor::withdraw_and_forfeit_rewards(ctx)
    }

    pub fn view_current_rewards(ctx: Context<ViewCurrentRewards>) -> Result<u64> {
        processor::view_current_rewards(ctx)
    }

    /// Provided minus promised rewards; negative while the pool is underfunded.
    pub fn view_unallocated_rewards(ctx: Context<ViewPool>) -> Result<i128> {
        processor::view_unallocated_rewards(ctx)
    }

    /// Seconds until funding runs out, or u64::MAX when nothing is being consumed.
    pub fn view_reward_runway(ctx: Context<ViewPool>) -> Result<u64> {
        processor::view_reward_runway(ctx)
    }
}
