use crate::error::StakingError;
use crate::state::SECONDS_PER_YEAR;
use anchor_lang::prelude::*;

/// Fixed-point scale shared by rate and accumulator numerators.
pub const PRECISION: u64 = 1_000_000_000_000;

/// Converts a yearly rate numerator (e.g. 80_000_000_000 for 8%) into a
/// per-second per-token numerator. Floors; the remainder is dropped once here
/// and never recovered during accrual.
pub fn per_second_rate(yearly_numerator: u64) -> u64 {
    yearly_numerator / SECONDS_PER_YEAR
}

/// Accumulator increase for `elapsed` seconds at `rate_numerator`.
pub fn reward_per_token_increment(rate_numerator: u64, elapsed: u32) -> Result<u64> {
    rate_numerator
        .checked_mul(u64::from(elapsed))
        .ok_or_else(|| error!(StakingError::MathOverflow))
}

/// Tokens earned by `amount` units over an accumulator delta, floored.
pub fn earned(amount: u64, reward_per_token_delta: u64) -> Result<u64> {
    let earned = u128::from(amount) * u128::from(reward_per_token_delta) / u128::from(PRECISION);
    u64::try_from(earned).map_err(|_| error!(StakingError::MathOverflow))
}

/// Reward owed to a position since its last checkpoint.
pub fn uncaptured_rewards(
    stake_amount: u64,
    reward_per_token_stored_numerator: u64,
    reward_per_token_paid_numerator: u64,
) -> Result<u64> {
    let diff = reward_per_token_stored_numerator
        .checked_sub(reward_per_token_paid_numerator)
        .ok_or_else(|| error!(StakingError::MathOverflow))?;
    earned(stake_amount, diff)
}

/// Seconds of funding left for `available` tokens consumed at
/// `total_staked * rate_numerator / PRECISION` tokens per second.
/// Returns `u64::MAX` when nothing is being consumed.
pub fn runway_seconds(available: u64, total_staked: u64, rate_numerator: u64) -> u64 {
    let burn_numerator = u128::from(total_staked) * u128::from(rate_numerator);
    if burn_numerator == 0 {
        return u64::MAX;
    }
    let runway = u128::from(available) * u128::from(PRECISION) / burn_numerator;
    u64::try_from(runway).unwrap_or(u64::MAX)
}
