use anchor_lang::prelude::*;
use crate::constants::{DISCRIMINATOR_SIZE, MAX_OPERATORS};
use crate::errors::CustomError;

#[account]
pub struct GlobalConfig {
    /// Holds the capability-management capability only. Being admin does not
    /// by itself allow event or fight operations.
    pub admin: Pubkey,

    /// Holders of the operator capability
    pub operators: Vec<Pubkey>,

    /// Circuit breaker for boost placement and top-ups
    pub paused: bool,

    pub bump: u8,
}

impl GlobalConfig {
    pub const LEN: usize = DISCRIMINATOR_SIZE + 32 + (4 + 32 * MAX_OPERATORS) + 1 + 1;

    pub fn is_operator(&self, key: &Pubkey) -> bool {
        self.operators.contains(key)
    }

    pub fn grant_operator(&mut self, operator: Pubkey) -> Result<()> {
        require!(!self.is_operator(&operator), CustomError::AlreadyExists);
        require!(self.operators.len() < MAX_OPERATORS, CustomError::TooManyOperators);
        self.operators.push(operator);
        Ok(())
    }

    pub fn revoke_operator(&mut self, operator: &Pubkey) -> Result<()> {
        let idx = self
            .operators
            .iter()
            .position(|k| k == operator)
            .ok_or(CustomError::NotFound)?;
        self.operators.swap_remove(idx);
        Ok(())
    }
}
