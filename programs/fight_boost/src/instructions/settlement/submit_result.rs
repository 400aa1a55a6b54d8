use anchor_lang::prelude::*;
use crate::state::{EventAccount, FightMethod, FightResult, FightSide, GlobalConfig};
use crate::constants::{SEED_EVENT, SEED_GLOBAL_CONFIG};
use crate::errors::CustomError;
use crate::events::ResultSubmitted;

#[derive(Accounts)]
pub struct SubmitResult<'info> {
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

/// Records the outcome and the off-chain scoring aggregates. Only their shape
/// is checked here; the sums themselves are trusted.
#[allow(clippy::too_many_arguments)]
pub fn submit_result(
    ctx: Context<SubmitResult>,
    fight_number: u8,
    winner: FightSide,
    method: FightMethod,
    points_for_winner: u64,
    points_for_winner_and_method: u64,
    sum_winners_stakes: u64,
    winning_pool_total_shares: u128,
) -> Result<()> {
    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();

    let result = FightResult {
        winner,
        method,
        points_for_winner,
        points_for_winner_and_method,
        sum_winners_stakes,
        winning_pool_total_shares,
    };

    let fight = ctx.accounts.event.fight_mut(fight_number)?;
    let resubmitted = fight.apply_result(&result, clock.unix_timestamp)?;

    msg!(
        "Fight {} resolved: {:?} by {:?} (resubmitted: {})",
        fight_number,
        winner,
        method,
        resubmitted
    );

    emit!(ResultSubmitted {
        event: event_key,
        fight_number,
        winner,
        method,
        points_for_winner,
        points_for_winner_and_method,
        sum_winners_stakes,
        winning_pool_total_shares,
        resubmitted,
    });

    Ok(())
}
