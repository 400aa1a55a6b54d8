use anchor_lang::prelude::*;
use crate::state::GlobalConfig;
use crate::constants::SEED_GLOBAL_CONFIG;
use crate::errors::CustomError;
use crate::events::OperatorUpdated;

#[derive(Accounts)]
pub struct UpdateOperator<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GLOBAL_CONFIG],
        bump = global_config.bump,
        constraint = global_config.admin == admin.key() @ CustomError::Unauthorized
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

pub fn update_operator(
    ctx: Context<UpdateOperator>,
    operator: Pubkey,
    enabled: bool,
) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;

    if enabled {
        global_config.grant_operator(operator)?;
    } else {
        global_config.revoke_operator(&operator)?;
    }

    msg!("Operator {} enabled: {}", operator, enabled);

    emit!(OperatorUpdated { operator, enabled });

    Ok(())
}
