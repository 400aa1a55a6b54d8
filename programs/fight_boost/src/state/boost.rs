use anchor_lang::prelude::*;
use crate::constants::{DISCRIMINATOR_SIZE, MAX_BOOSTS_PER_PARTICIPANT};
use crate::errors::CustomError;
use crate::state::{FightMethod, FightSide};

#[account]
pub struct Boost {
    pub event: Pubkey,
    pub fight_number: u8,
    pub index: u32,
    pub owner: Pubkey,

    /// Only grows, through top-ups
    pub amount: u64,

    // Fixed at placement
    pub predicted_winner: FightSide,
    pub predicted_method: FightMethod,

    pub claimed: bool,
    pub created_at: i64,
    pub bump: u8,
}

impl Boost {
    // 8 + 32 + 1 + 4 + 32 + 8 + 1 + 1 + 1 + 8 + 1
    pub const LEN: usize = DISCRIMINATOR_SIZE + 32 + 1 + 4 + 32 + 8 + 1 + 1 + 1 + 8 + 1;

    pub fn validate_prediction(winner: FightSide, method: FightMethod) -> Result<()> {
        require!(winner != FightSide::None, CustomError::InvalidArgument);
        require!(method != FightMethod::NoContest, CustomError::InvalidArgument);
        Ok(())
    }

    /// Returns the new amount.
    pub fn top_up(&mut self, added_amount: u64) -> Result<u64> {
        require!(added_amount > 0, CustomError::InvalidArgument);
        require!(!self.claimed, CustomError::AlreadyClaimed);
        self.amount = self
            .amount
            .checked_add(added_amount)
            .ok_or(CustomError::MathOverflow)?;
        Ok(self.amount)
    }
}

/// Reverse index from (event, fight, participant) to the participant's boost
/// indices on that fight. Clients read it to batch claims.
#[account]
pub struct ParticipantBoosts {
    pub event: Pubkey,
    pub fight_number: u8,
    pub owner: Pubkey,
    pub indices: Vec<u32>,
    pub bump: u8,
}

impl ParticipantBoosts {
    pub const LEN: usize =
        DISCRIMINATOR_SIZE + 32 + 1 + 32 + (4 + 4 * MAX_BOOSTS_PER_PARTICIPANT) + 1;

    pub fn push(&mut self, index: u32) -> Result<()> {
        if self.indices.contains(&index) {
            return Ok(());
        }
        require!(
            self.indices.len() < MAX_BOOSTS_PER_PARTICIPANT,
            CustomError::TooManyBoosts
        );
        self.indices.push(index);
        Ok(())
    }
}
