use anchor_lang::prelude::*;
use crate::state::{AssetClass, EventAccount, GlobalConfig};
use crate::constants::{SEED_ASSET_CLASS, SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::EventCreated;

#[derive(Accounts)]
#[instruction(
    event_key: String,
    fight_count: u8,
    asset_class_id: u64,
)]
pub struct CreateEvent<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [SEED_GLOBAL_CONFIG],
        bump = global_config.bump,
        constraint = global_config.is_operator(&operator.key()) @ CustomError::Unauthorized
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        seeds = [SEED_ASSET_CLASS, asset_class_id.to_le_bytes().as_ref()],
        bump = asset_class.bump
    )]
    pub asset_class: Box<Account<'info, AssetClass>>,

    #[account(
        init,
        payer = operator,
        space = EventAccount::space(fight_count),
        seeds = [SEED_EVENT, event_key.as_bytes()],
        bump
    )]
    pub event: Box<Account<'info, EventAccount>>,

    pub system_program: Program<'info, System>,
}

pub fn create_event(
    ctx: Context<CreateEvent>,
    event_key: String,
    fight_count: u8,
    asset_class_id: u64,
    default_boost_cutoff: i64,
) -> Result<()> {
    EventAccount::validate_key(&event_key)?;
    let clock = Clock::get()?;

    let event = &mut ctx.accounts.event;
    event.event_key = event_key.clone();
    event.creator = ctx.accounts.operator.key();
    event.asset_class = asset_class_id;
    event.claim_deadline = 0;
    event.created_at = clock.unix_timestamp;
    event.init_fights(fight_count, default_boost_cutoff)?;
    event.bump = ctx.bumps.event;

    msg!("Event {} created with {} fights", event_key, fight_count);

    emit!(EventCreated {
        event: event.key(),
        event_key,
        asset_class: asset_class_id,
        fight_count,
        default_boost_cutoff,
    });

    Ok(())
}
