use crate::account_structs::*;
use crate::admin;
use crate::error::*;
use crate::guard::require_upgrade_authority;
use crate::lifecycle;
use crate::state::{SETTINGS_SEED, USER_INFO_SEED};
use crate::views;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

fn current_timestamp() -> Result<u32> {
    let now = Clock::get()?.unix_timestamp;
    u32::try_from(now).map_err(|_| error!(StakingError::MathOverflow))
}

pub fn initialize(
    ctx: Context<Initialize>,
    withdrawal_delay_seconds: u32,
    reward_rate_yearly_numerator: u64,
) -> Result<()> {
    require_upgrade_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;

    let now = current_timestamp()?;
    let settings = &mut ctx.accounts.settings;
    settings.bump = ctx.bumps.settings;

    let event = admin::initialize(
        settings,
        &mut ctx.accounts.stats,
        ctx.accounts.signer.key(),
        ctx.accounts.token_mint.key(),
        withdrawal_delay_seconds,
        reward_rate_yearly_numerator,
        now,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn add_rewards(ctx: Context<AddRewards>, amount: u64) -> Result<()> {
    let now = current_timestamp()?;
    let event = admin::add_rewards(
        &ctx.accounts.settings,
        &mut ctx.accounts.stats,
        ctx.accounts.administrator.key(),
        amount,
        now,
    )?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.admin_token_account.to_account_info(),
        to: ctx.accounts.protocol_token_account.to_account_info(),
        authority: ctx.accounts.administrator.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn configure_reward_ratio(
    ctx: Context<ConfigureRewardRatio>,
    new_reward_rate_yearly_numerator: u64,
) -> Result<()> {
    let now = current_timestamp()?;
    let event = admin::configure_reward_ratio(
        &mut ctx.accounts.settings,
        &mut ctx.accounts.stats,
        ctx.accounts.administrator.key(),
        new_reward_rate_yearly_numerator,
        now,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn configure_withdrawal_delay(
    ctx: Context<ConfigureWithdrawalDelay>,
    new_withdrawal_delay_seconds: u32,
) -> Result<()> {
    let now = current_timestamp()?;
    let event = admin::configure_withdrawal_delay(
        &mut ctx.accounts.settings,
        &mut ctx.accounts.stats,
        ctx.accounts.administrator.key(),
        new_withdrawal_delay_seconds,
        now,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn initiate_ownership_transfer(
    ctx: Context<InitiateOwnershipTransfer>,
    new_administrator: Pubkey,
) -> Result<()> {
    let event = admin::initiate_ownership_transfer(
        &mut ctx.accounts.settings,
        ctx.accounts.administrator.key(),
        new_administrator,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn finalize_ownership_transfer(ctx: Context<FinalizeOwnershipTransfer>) -> Result<()> {
    let event = admin::finalize_ownership_transfer(
        &mut ctx.accounts.settings,
        ctx.accounts.new_administrator.key(),
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let now = current_timestamp()?;
    let event = lifecycle::stake(
        &ctx.accounts.settings,
        &mut ctx.accounts.stats,
        &mut ctx.accounts.user_info,
        ctx.accounts.user.key(),
        amount,
        now,
    )?;

    // Fails with the token program's own error if the user balance is short.
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.user_info_token_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn request_withdrawal(ctx: Context<RequestWithdrawal>) -> Result<()> {
    let now = current_timestamp()?;
    let event = lifecycle::request_withdrawal(
        &ctx.accounts.settings,
        &mut ctx.accounts.stats,
        &mut ctx.accounts.user_info,
        now,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let now = current_timestamp()?;
    let event = lifecycle::withdraw(
        &ctx.accounts.settings,
        &mut ctx.accounts.stats,
        &mut ctx.accounts.user_info,
        ctx.accounts.protocol_token_account.amount,
        now,
    )?;

    if event.token_amount > 0 {
        let user_key = ctx.accounts.user.key();
        let seeds: &[&[u8]] = &[USER_INFO_SEED, user_key.as_ref(), &[ctx.bumps.user_info]];
        let signer = &[&seeds[..]];
        let cpi_accounts = Transfer {
            from: ctx.accounts.user_info_token_account.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.user_info.to_account_info(),
        };
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                cpi_accounts,
                signer,
            ),
            event.token_amount,
        )?;
    }

    // Rewards come out of protocol custody, in the same token as the stake.
    if event.reward_amount > 0 {
        let seeds: &[&[u8]] = &[SETTINGS_SEED, &[ctx.accounts.settings.bump]];
        let signer = &[&seeds[..]];
        let cpi_accounts = Transfer {
            from: ctx.accounts.protocol_token_account.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.settings.to_account_info(),
        };
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                cpi_accounts,
                signer,
            ),
            event.reward_amount,
        )?;
    }

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn withdraw_and_forfeit_rewards(ctx: Context<WithdrawAndForfeitRewards>) -> Result<()> {
    let now = current_timestamp()?;
    let event = lifecycle::withdraw_and_forfeit_rewards(
        &ctx.accounts.settings,
        &mut ctx.accounts.stats,
        &mut ctx.accounts.user_info,
        now,
    )?;

    let user_key = ctx.accounts.user.key();
    let seeds: &[&[u8]] = &[USER_INFO_SEED, user_key.as_ref(), &[ctx.bumps.user_info]];
    let signer = &[&seeds[..]];
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_info_token_account.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.user_info.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        ),
        event.token_amount,
    )?;

    msg!("{:?}", event);
    emit!(event);
    Ok(())
}

pub fn view_current_rewards(ctx: Context<ViewCurrentRewards>) -> Result<u64> {
    let now = current_timestamp()?;
    let event = views::current_rewards(
        &ctx.accounts.settings,
        &ctx.accounts.stats,
        &ctx.accounts.user_info,
        now,
    )?;
    let total_reward = event.total_reward;

    msg!("{:?}", event);
    emit!(event);
    Ok(total_reward)
}

pub fn view_unallocated_rewards(ctx: Context<ViewPool>) -> Result<i128> {
    let now = current_timestamp()?;
    let event = views::unallocated_rewards(&ctx.accounts.settings, &ctx.accounts.stats, now)?;
    let unallocated_rewards = event.unallocated_rewards;

    msg!("{:?}", event);
    emit!(event);
    Ok(unallocated_rewards)
}

pub fn view_reward_runway(ctx: Context<ViewPool>) -> Result<u64> {
    let now = current_timestamp()?;
    let event = views::reward_runway(&ctx.accounts.settings, &ctx.accounts.stats, now)?;
    let runway_seconds = event.runway_seconds;

    msg!("{:?}", event);
    emit!(event);
    Ok(runway_seconds)
}
