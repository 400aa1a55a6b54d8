use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{AssetClass, EventAccount, GlobalConfig};
use crate::constants::{SEED_ASSET_CLASS, SEED_ASSET_VAULT, SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::BonusDeposited;
use crate::utils::debit;

#[derive(Accounts)]
pub struct DepositBonus<'info> {
    #[account(mut)]
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
        constraint = operator_token_account.mint == asset_class.mint @ CustomError::AssetMismatch,
        token::authority = operator,
    )]
    pub operator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn deposit_bonus(ctx: Context<DepositBonus>, fight_number: u8, amount: u64) -> Result<()> {
    let event_key = ctx.accounts.event.key();

    let fight = ctx.accounts.event.fight_mut(fight_number)?;
    fight.record_bonus(amount)?;
    let bonus_pool = fight.bonus_pool;

    debit(
        &ctx.accounts.token_program,
        ctx.accounts.operator_token_account.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.operator.to_account_info(),
        amount,
    )?;

    msg!("Bonus of {} added to fight {}", amount, fight_number);

    emit!(BonusDeposited {
        event: event_key,
        fight_number,
        depositor: ctx.accounts.operator.key(),
        amount,
        bonus_pool,
    });

    Ok(())
}
