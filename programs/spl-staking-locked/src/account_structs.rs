use crate::error::*;
use crate::guard::program_data_address;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = signer,
        space = Settings::LEN,
        seeds = [SETTINGS_SEED],
        bump
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        init,
        payer = signer,
        space = Stats::LEN,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,

    /// Reward custody, owned by the settings PDA.
    #[account(
        init,
        payer = signer,
        associated_token::mint = token_mint,
        associated_token::authority = settings,
    )]
    pub protocol_token_account: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == program_data_address() @ StakingError::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AddRewards<'info> {
    pub administrator: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        has_one = administrator @ StakingError::Unauthorized
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,

    #[account(
        mut,
        token::mint = settings.token_mint,
        constraint = admin_token_account.owner == administrator.key() @ StakingError::Unauthorized
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = settings.token_mint,
        associated_token::authority = settings,
    )]
    pub protocol_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct ConfigureRewardRatio<'info> {
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        has_one = administrator @ StakingError::Unauthorized
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,
}

#[derive(Accounts)]
pub struct ConfigureWithdrawalDelay<'info> {
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        has_one = administrator @ StakingError::Unauthorized
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,
}

#[derive(Accounts)]
pub struct InitiateOwnershipTransfer<'info> {
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        has_one = administrator @ StakingError::Unauthorized
    )]
    pub settings: Account<'info, Settings>,
}

#[derive(Accounts)]
pub struct FinalizeOwnershipTransfer<'info> {
    pub new_administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump
    )]
    pub settings: Account<'info, Settings>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserInfo::LEN,
        seeds = [USER_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,

    #[account(
        mut,
        associated_token::mint = settings.token_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Principal custody for this position, signed for by the user_info PDA.
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user_info,
    )]
    pub user_info_token_account: Account<'info, TokenAccount>,

    #[account(
        constraint = token_mint.key() == settings.token_mint @ StakingError::InvalidMint
    )]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RequestWithdrawal<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,

    #[account(
        mut,
        seeds = [USER_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,

    #[account(
        mut,
        seeds = [USER_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,

    #[account(
        mut,
        associated_token::mint = settings.token_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = settings.token_mint,
        associated_token::authority = user_info,
    )]
    pub user_info_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = settings.token_mint,
        associated_token::authority = settings,
    )]
    pub protocol_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct WithdrawAndForfeitRewards<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,

    #[account(
        mut,
        seeds = [USER_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,

    #[account(
        mut,
        associated_token::mint = settings.token_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = settings.token_mint,
        associated_token::authority = user_info,
    )]
    pub user_info_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct ViewCurrentRewards<'info> {
    /// CHECK: Only used to derive the user_info PDA; any position may be queried
    pub user: UncheckedAccount<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,

    #[account(
        seeds = [USER_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,
}

#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, Stats>,
}
