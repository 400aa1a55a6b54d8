use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, Transfer};
use crate::constants::SEED_ASSET_CLASS;
use crate::state::AssetClass;

/// Pulls `amount` from a signer-owned token account into the asset class vault.
pub fn debit<'info>(
    token_program: &Program<'info, Token>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from,
                to: vault,
                authority,
            },
        ),
        amount,
    )
}

/// Pushes `amount` out of the vault, signed by the asset class PDA.
pub fn credit<'info>(
    token_program: &Program<'info, Token>,
    asset_class: &Account<'info, AssetClass>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let id_bytes = asset_class.id.to_le_bytes();
    let seeds = &[SEED_ASSET_CLASS, id_bytes.as_ref(), &[asset_class.bump]];
    let signer = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault,
                to,
                authority: asset_class.to_account_info(),
            },
            signer,
        ),
        amount,
    )
}
