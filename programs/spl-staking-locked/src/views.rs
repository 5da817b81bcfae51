//! Read-only pool health queries. Nothing here writes to an account.

use crate::error::StakingError;
use crate::events::*;
use crate::math;
use crate::state::{Settings, Stats, UserInfo};
use anchor_lang::prelude::*;

pub fn current_rewards(
    settings: &Settings,
    stats: &Stats,
    user_info: &UserInfo,
    now: u32,
) -> Result<CurrentRewardsViewed> {
    let snapshot = stats.settled(settings, now)?;
    let uncaptured_reward = user_info.pending_rewards(&snapshot)?;
    let total_reward = user_info
        .captured_reward
        .checked_add(uncaptured_reward)
        .ok_or(StakingError::MathOverflow)?;

    Ok(CurrentRewardsViewed {
        user: user_info.user,
        captured_reward: user_info.captured_reward,
        uncaptured_reward,
        total_reward,
    })
}

pub fn unallocated_rewards(
    settings: &Settings,
    stats: &Stats,
    now: u32,
) -> Result<UnallocatedRewardsViewed> {
    let snapshot = stats.settled(settings, now)?;
    Ok(UnallocatedRewardsViewed {
        unallocated_rewards: snapshot.unallocated_rewards(),
    })
}

/// `runway_seconds` is `u64::MAX` while nothing is staked or the rate is zero,
/// and zero once the pool is in deficit.
pub fn reward_runway(settings: &Settings, stats: &Stats, now: u32) -> Result<RewardRunwayViewed> {
    let snapshot = stats.settled(settings, now)?;
    let available_rewards =
        u64::try_from(snapshot.unallocated_rewards().max(0)).unwrap_or(u64::MAX);

    Ok(RewardRunwayViewed {
        available_rewards,
        runway_seconds: math::runway_seconds(
            available_rewards,
            snapshot.total_staked,
            settings.reward_rate_per_second_per_token_numerator,
        ),
    })
}
