use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::state::{AssetClass, GlobalConfig};
use crate::constants::{SEED_ASSET_CLASS, SEED_ASSET_VAULT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::AssetClassConfigured;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ConfigAssetClass<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [SEED_GLOBAL_CONFIG],
        bump = global_config.bump,
        constraint = global_config.is_operator(&operator.key()) @ CustomError::Unauthorized
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        init,
        payer = operator,
        space = AssetClass::LEN,
        seeds = [SEED_ASSET_CLASS, id.to_le_bytes().as_ref()],
        bump
    )]
    pub asset_class: Account<'info, AssetClass>,

    #[account(
        init,
        payer = operator,
        seeds = [SEED_ASSET_VAULT, asset_class.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = asset_class,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn config_asset_class(ctx: Context<ConfigAssetClass>, id: u64) -> Result<()> {
    let asset_class = &mut ctx.accounts.asset_class;

    asset_class.id = id;
    asset_class.mint = ctx.accounts.mint.key();
    asset_class.vault = ctx.accounts.vault.key();
    asset_class.bump = ctx.bumps.asset_class;
    asset_class.vault_bump = ctx.bumps.vault;

    msg!("Asset class {} configured, mint: {}", id, asset_class.mint);

    emit!(AssetClassConfigured {
        asset_class: id,
        mint: asset_class.mint,
        vault: asset_class.vault,
    });

    Ok(())
}
