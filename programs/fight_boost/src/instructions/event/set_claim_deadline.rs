use anchor_lang::prelude::*;
use crate::state::{EventAccount, GlobalConfig};
use crate::constants::{SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::ClaimDeadlineUpdated;

#[derive(Accounts)]
pub struct SetClaimDeadline<'info> {
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

pub fn set_claim_deadline(ctx: Context<SetClaimDeadline>, deadline: i64) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let old_deadline = event.set_claim_deadline(deadline)?;

    msg!("Claim deadline for {}: {} -> {}", event.event_key, old_deadline, deadline);

    emit!(ClaimDeadlineUpdated {
        event: event.key(),
        old_deadline,
        new_deadline: deadline,
    });

    Ok(())
}
