use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{
    AssetClass, Boost, EventAccount, FightMethod, FightSide, GlobalConfig, ParticipantBoosts,
};
use crate::constants::{
    SEED_ASSET_CLASS, SEED_ASSET_VAULT, SEED_BOOST, SEED_EVENT, SEED_GLOBAL_CONFIG,
    SEED_PARTICIPANT_BOOSTS,
};
use crate::errors::CustomError;
use crate::events::BoostPlaced;
use crate::utils::debit;

#[derive(Accounts)]
#[instruction(fight_number: u8, boost_index: u32)]
pub struct PlaceBoost<'info> {
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

    #[account(
        init,
        payer = participant,
        space = Boost::LEN,
        seeds = [
            SEED_BOOST,
            event.key().as_ref(),
            fight_number.to_le_bytes().as_ref(),
            boost_index.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub boost: Box<Account<'info, Boost>>,

    #[account(
        init_if_needed,
        payer = participant,
        space = ParticipantBoosts::LEN,
        seeds = [
            SEED_PARTICIPANT_BOOSTS,
            event.key().as_ref(),
            fight_number.to_le_bytes().as_ref(),
            participant.key().as_ref()
        ],
        bump
    )]
    pub participant_boosts: Box<Account<'info, ParticipantBoosts>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// `boost_index` must be the fight's next free index; it is part of the
/// boost PDA so the client derives the address before sending.
pub fn place_boost(
    ctx: Context<PlaceBoost>,
    fight_number: u8,
    boost_index: u32,
    predicted_winner: FightSide,
    predicted_method: FightMethod,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, CustomError::InvalidArgument);
    Boost::validate_prediction(predicted_winner, predicted_method)?;

    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();
    let participant = ctx.accounts.participant.key();

    // 1. Ledger effects
    {
        let fight = ctx.accounts.event.fight_mut(fight_number)?;
        fight.ensure_accepts_boosts(clock.unix_timestamp)?;
        fight.next_boost_index(boost_index)?;
        fight.record_stake(amount)?;
    }

    {
        let boost = &mut ctx.accounts.boost;
        boost.event = event_key;
        boost.fight_number = fight_number;
        boost.index = boost_index;
        boost.owner = participant;
        boost.amount = amount;
        boost.predicted_winner = predicted_winner;
        boost.predicted_method = predicted_method;
        boost.claimed = false;
        boost.created_at = clock.unix_timestamp;
        boost.bump = ctx.bumps.boost;
    }

    {
        let index = &mut ctx.accounts.participant_boosts;
        index.event = event_key;
        index.fight_number = fight_number;
        index.owner = participant;
        index.bump = ctx.bumps.participant_boosts;
        index.push(boost_index)?;
    }

    // 2. Pull the stake into custody
    debit(
        &ctx.accounts.token_program,
        ctx.accounts.participant_token_account.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.participant.to_account_info(),
        amount,
    )?;

    msg!("Boost {} placed on fight {}: {}", boost_index, fight_number, amount);

    emit!(BoostPlaced {
        event: event_key,
        fight_number,
        boost_index,
        owner: participant,
        amount,
        predicted_winner,
        predicted_method,
    });

    Ok(())
}
