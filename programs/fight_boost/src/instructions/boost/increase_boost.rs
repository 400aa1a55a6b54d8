use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{AssetClass, Boost, EventAccount, GlobalConfig};
use crate::constants::{
    SEED_ASSET_CLASS, SEED_ASSET_VAULT, SEED_BOOST, SEED_EVENT, SEED_GLOBAL_CONFIG,
};
use crate::errors::CustomError;
use crate::events::BoostIncreased;
use crate::utils::debit;

#[derive(Accounts)]
pub struct IncreaseBoost<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        seeds = [SEED_GLOBAL_CONFIG],
        bump = global_config.bump,
        constraint = !global_config.paused @ CustomError::Paused
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [SEED_EVENT, event.event_key.as_bytes()],
        bump = event.bump
    )]
    pub event: Box<Account<'info, EventAccount>>,

    #[account(
        mut,
        seeds = [
            SEED_BOOST,
            event.key().as_ref(),
            boost.fight_number.to_le_bytes().as_ref(),
            boost.index.to_le_bytes().as_ref()
        ],
        bump = boost.bump,
        constraint = boost.owner == participant.key() @ CustomError::Unauthorized
    )]
    pub boost: Box<Account<'info, Boost>>,

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
        constraint = participant_token_account.mint == asset_class.mint
            @ CustomError::AssetMismatch,
        token::authority = participant,
    )]
    pub participant_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Tops up an existing boost. The prediction stays as placed.
pub fn increase_boost(ctx: Context<IncreaseBoost>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();
    let fight_number = ctx.accounts.boost.fight_number;

    let fight = ctx.accounts.event.fight_mut(fight_number)?;
    fight.record_top_up(amount, clock.unix_timestamp)?;
    let new_amount = ctx.accounts.boost.top_up(amount)?;

    debit(
        &ctx.accounts.token_program,
        ctx.accounts.participant_token_account.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.participant.to_account_info(),
        amount,
    )?;

    let boost_index = ctx.accounts.boost.index;
    msg!("Boost {} on fight {} raised to {}", boost_index, fight_number, new_amount);

    emit!(BoostIncreased {
        event: event_key,
        fight_number,
        boost_index,
        owner: ctx.accounts.participant.key(),
        added_amount: amount,
        new_amount,
    });

    Ok(())
}
