use anchor_lang::prelude::*;

pub const SETTINGS_SEED: &[u8] = b"settings";
pub const STATS_SEED: &[u8] = b"stats";
pub const USER_INFO_SEED: &[u8] = b"user_info";

pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY as u64; // 31,536,000
pub const MAX_WITHDRAWAL_DELAY_SECONDS: u32 = 31 * SECONDS_PER_DAY;

/// Pool configuration and administrator authority.
#[account]
#[derive(Default, Debug)]
pub struct Settings {
    pub administrator: Pubkey,
    /// Set only while a two-phase administrator hand-off is in flight.
    pub pending_administrator: Option<Pubkey>,
    pub token_mint: Pubkey,
    pub withdrawal_delay_seconds: u32,
    /// Reward per second per staked unit, scaled by `PRECISION`.
    pub reward_rate_per_second_per_token_numerator: u64,
    pub bump: u8,
}

impl Settings {
    pub const LEN: usize = 8 + 32 + (1 + 32) + 32 + 4 + 8 + 1;
}

/// Protocol-wide reward accumulator.
#[account]
#[derive(Default, Debug)]
pub struct Stats {
    /// Cumulative reward per staked unit since genesis, scaled by `PRECISION`.
    pub reward_per_token_stored_numerator: u64,
    pub last_update_time: u32,
    pub total_staked: u64,
    pub total_reward_promised: u64,
    pub total_reward_provided: u64,
}

impl Stats {
    pub const LEN: usize = 8 + 8 + 4 + 8 + 8 + 8;
}

/// A single participant's position.
#[account]
#[derive(Default, Debug)]
pub struct UserInfo {
    pub user: Pubkey,
    pub stake_amount: u64,
    /// Zero while the position is empty. Top-up stakes keep the original value.
    pub staked_at: u32,
    pub reward_per_token_paid_numerator: u64,
    pub captured_reward: u64,
    pub withdrawal_request_time: u32,
    pub withdrawal_request_amount: u64,
    pub withdrawal_request_reward_amount: u64,
}

impl UserInfo {
    pub const LEN: usize = 8 + 32 + 8 + 4 + 8 + 8 + 4 + 8 + 8;

    pub fn is_initialized(&self) -> bool {
        self.user != Pubkey::default()
    }
}
