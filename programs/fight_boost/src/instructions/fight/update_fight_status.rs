use anchor_lang::prelude::*;
use crate::state::{EventAccount, FightStatus, GlobalConfig};
use crate::constants::{SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::FightStatusUpdated;

#[derive(Accounts)]
pub struct UpdateFightStatus<'info> {
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

pub fn update_fight_status(
    ctx: Context<UpdateFightStatus>,
    fight_number: u8,
    status: FightStatus,
) -> Result<()> {
    let event_key = ctx.accounts.event.key();
    let fight = ctx.accounts.event.fight_mut(fight_number)?;
    let old_status = fight.update_status(status)?;

    if old_status == status {
        return Ok(());
    }

    msg!("Fight {} status: {:?} -> {:?}", fight_number, old_status, status);

    emit!(FightStatusUpdated {
        event: event_key,
        fight_number,
        old_status,
        new_status: status,
    });

    Ok(())
}
