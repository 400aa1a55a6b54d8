use anchor_lang::prelude::*;
use crate::state::{EventAccount, GlobalConfig};
use crate::constants::{SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::FightCancelled;

#[derive(Accounts)]
pub struct CancelFight<'info> {
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
}

/// Voids a fight. Every boost on it becomes refundable at face value.
pub fn cancel_fight(ctx: Context<CancelFight>, fight_number: u8) -> Result<()> {
    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();

    let fight = ctx.accounts.event.fight_mut(fight_number)?;
    fight.cancel(clock.unix_timestamp)?;

    msg!("Fight {} cancelled, refunding pool of {}", fight_number, fight.original_pool);

    emit!(FightCancelled {
        event: event_key,
        fight_number,
        original_pool: fight.original_pool,
        bonus_pool: fight.bonus_pool,
    });

    Ok(())
}
