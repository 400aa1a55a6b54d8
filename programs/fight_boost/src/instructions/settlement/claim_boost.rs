use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{AssetClass, Boost, EventAccount};
use crate::constants::{SEED_ASSET_CLASS, SEED_ASSET_VAULT, SEED_BOOST, SEED_EVENT};
use crate::errors::CustomError;
use crate::events::{BoostClaimed, ClaimPaid};
use crate::utils::{credit, settle_boost};

#[derive(Accounts)]
pub struct ClaimBoost<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

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
        bump = boost.bump
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

pub fn claim_boost(ctx: Context<ClaimBoost>) -> Result<()> {
    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();
    let participant = ctx.accounts.participant.key();

    // 1. Mark claimed and book the payout
    let outcome = settle_boost(
        &event_key,
        &mut ctx.accounts.event,
        &mut ctx.accounts.boost,
        &participant,
        clock.unix_timestamp,
    )?;

    // 2. Pay out
    credit(
        &ctx.accounts.token_program,
        &ctx.accounts.asset_class,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.participant_token_account.to_account_info(),
        outcome.payout,
    )?;

    let boost = &ctx.accounts.boost;
    msg!(
        "Boost {} on fight {} claimed: {}",
        boost.index,
        boost.fight_number,
        outcome.payout
    );

    emit!(BoostClaimed {
        event: event_key,
        fight_number: boost.fight_number,
        boost_index: boost.index,
        owner: participant,
        payout: outcome.payout,
        points: outcome.points,
        refund: outcome.refund,
    });

    emit!(ClaimPaid {
        event: event_key,
        owner: participant,
        boosts_claimed: 1,
        total_payout: outcome.payout,
    });

    Ok(())
}
