use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Invalid amount")]
    InvalidAmount = 1,
    #[msg("No stake to withdraw")]
    NoStakeToWithdraw = 2,
    #[msg("No withdrawal request found")]
    NoWithdrawalRequest = 3,
    #[msg("Staking position has not been initialized")]
    AccountNotInitialized = 4,
    #[msg("Withdrawal delay period has not been met")]
    WithdrawalDelayNotMet = 5,
    #[msg("Insufficient rewards in pool")]
    InsufficientRewards = 6,

    #[msg("Signer is not the administrator")]
    Unauthorized = 7,
    #[msg("Unauthorized ownership transfer")]
    UnauthorizedOwnershipTransfer = 8,

    #[msg("Clock moved backwards since the last settlement")]
    ClockRegression = 9,
    #[msg("Math overflow occurred")]
    MathOverflow = 10,

    #[msg("ProgramData account did not match expected PDA.")]
    InvalidProgramData = 11,
    #[msg("Program has no upgrade authority (set to None).")]
    NoUpgradeAuthority = 12,
    #[msg("Signer is not the upgrade authority.")]
    InvalidUpgradeAuthority = 13,
    #[msg("Invalid mint provided")]
    InvalidMint = 14,
}
