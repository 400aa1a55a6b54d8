use anchor_lang::prelude::*;
use crate::constants::DISCRIMINATOR_SIZE;

/// One season partition of the point asset. Events draw stakes from and pay
/// out to the vault of exactly one asset class.
#[account]
pub struct AssetClass {
    pub id: u64,

    /// SPL mint of the season's points
    pub mint: Pubkey,

    /// Custody token account, owned by this PDA
    pub vault: Pubkey,

    pub bump: u8,
    pub vault_bump: u8,
}

impl AssetClass {
    // 8 + 8 + 32 + 32 + 1 + 1
    pub const LEN: usize = DISCRIMINATOR_SIZE + 8 + 32 + 32 + 1 + 1;
}
