use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct Initialized {
    pub administrator: Pubkey,
    pub token_mint: Pubkey,
    pub withdrawal_delay_seconds: u32,
    pub reward_rate_yearly_numerator: u64,
    pub reward_rate_per_second_numerator: u64,
}

#[event]
#[derive(Debug)]
pub struct RewardsAdded {
    pub administrator: Pubkey,
    pub amount: u64,
    pub total_reward_provided: u64,
}

#[event]
#[derive(Debug)]
pub struct RewardRatioConfigured {
    pub administrator: Pubkey,
    pub new_reward_rate_yearly_numerator: u64,
    pub new_reward_rate_per_second_numerator: u64,
}

#[event]
#[derive(Debug)]
pub struct WithdrawalDelayConfigured {
    pub administrator: Pubkey,
    pub old_withdrawal_delay_seconds: u32,
    pub new_withdrawal_delay_seconds: u32,
}

#[event]
#[derive(Debug)]
pub struct OwnershipTransferInitiated {
    pub current_administrator: Pubkey,
    pub new_administrator: Pubkey,
}

#[event]
#[derive(Debug)]
pub struct OwnershipTransferFinalized {
    pub old_administrator: Pubkey,
    pub new_administrator: Pubkey,
}

#[event]
#[derive(Debug)]
pub struct Staked {
    pub user: Pubkey,
    pub amount: u64,
    pub total_user_staked: u64,
    pub total_staked: u64,
    pub staked_at: u32,
}

#[event]
#[derive(Debug)]
pub struct WithdrawalRequested {
    pub user: Pubkey,
    pub added_token_amount: u64,
    pub total_token_amount: u64,
    pub added_reward_amount: u64,
    pub total_reward_amount: u64,
    pub withdrawal_request_time: u32,
}

#[event]
#[derive(Debug)]
pub struct Withdrawn {
    pub user: Pubkey,
    pub token_amount: u64,
    pub reward_amount: u64,
    pub withdrawal_request_time: u32,
    pub withdrawn_at: u32,
}

#[event]
#[derive(Debug)]
pub struct WithdrawnAndForfeitedRewards {
    pub user: Pubkey,
    pub token_amount: u64,
    pub forfeited_reward_amount: u64,
}

#[event]
#[derive(Debug)]
pub struct CurrentRewardsViewed {
    pub user: Pubkey,
    pub captured_reward: u64,
    pub uncaptured_reward: u64,
    pub total_reward: u64,
}

#[event]
#[derive(Debug)]
pub struct UnallocatedRewardsViewed {
    pub unallocated_rewards: i128,
}

#[event]
#[derive(Debug)]
pub struct RewardRunwayViewed {
    pub available_rewards: u64,
    pub runway_seconds: u64,
}
