use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{AssetClass, EventAccount, GlobalConfig};
use crate::constants::{SEED_ASSET_CLASS, SEED_ASSET_VAULT, SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::{FightPurged, FundsPurged};
use crate::utils::credit;

#[derive(Accounts)]
pub struct PurgeUnclaimed<'info> {
    pub operator: Signer<'info>,

    #[account(
        seeds = [SEED_GLOBAL_CONFIG],
        bump = global_config.bump,
        constraint = global_config.is_operator(&operator.key()) @ CustomError::Unauthorized
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [SEED_EVENT, event.event_key.as_bytes()],
        bump = event.bump
    )]
    pub event: Box<Account<'info, EventAccount>>,

    #[account(
        seeds = [SEED_ASSET_CLASS, asset_class.id.to_le_bytes().as_ref()],
        bump = asset_class.bump,
        constraint = asset_class.id == event.asset_class @ CustomError::AssetMismatch
    )]
    pub asset_class: Box<Account<'info, AssetClass>>,

    #[account(
        mut,
        seeds = [SEED_ASSET_VAULT, asset_class.key().as_ref()],
        bump = asset_class.vault_bump,
        token::authority = asset_class,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = recipient.mint == asset_class.mint @ CustomError::AssetMismatch,
    )]
    pub recipient: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Sweeps every settled fight's unclaimed remainder to `recipient` once the
/// claim window has closed.
pub fn purge_unclaimed(ctx: Context<PurgeUnclaimed>) -> Result<()> {
    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();

    let (swept, total) = ctx.accounts.event.purge_total(clock.unix_timestamp)?;
    for &(fight_number, amount) in swept.iter() {
        emit!(FightPurged {
            event: event_key,
            fight_number,
            amount,
        });
    }

    credit(
        &ctx.accounts.token_program,
        &ctx.accounts.asset_class,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.recipient.to_account_info(),
        total,
    )?;

    msg!("Purged {} from {} fights", total, swept.len());

    emit!(FundsPurged {
        event: event_key,
        recipient: ctx.accounts.recipient.key(),
        amount: total,
    });

    Ok(())
}
