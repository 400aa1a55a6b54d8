use anchor_lang::prelude::*;
use crate::state::{EventAccount, GlobalConfig};
use crate::constants::{SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::BoostCutoffUpdated;

#[derive(Accounts)]
pub struct SetBoostCutoff<'info> {
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

/// `fight_number` 0 targets every fight that is not settled yet.
pub fn set_boost_cutoff(
    ctx: Context<SetBoostCutoff>,
    fight_number: u8,
    boost_cutoff: i64,
) -> Result<()> {
    let event_key = ctx.accounts.event.key();
    let updated = ctx.accounts.event.set_boost_cutoff(fight_number, boost_cutoff)?;

    for number in updated {
        emit!(BoostCutoffUpdated {
            event: event_key,
            fight_number: number,
            boost_cutoff,
        });
    }

    Ok(())
}
