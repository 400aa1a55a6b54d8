use crate::errors::CustomError;
use crate::state::{FightMethod, FightSide};
use anchor_lang::prelude::*;

/// -------------------------------------------------------------------
/// 1. POINTS
/// -------------------------------------------------------------------

/// Score of one prediction against the actual outcome.
/// - Wrong side: 0.
/// - Right side and method: the method score.
/// - Right side only: the winner score.
pub fn calculate_points(
    predicted_winner: FightSide,
    predicted_method: FightMethod,
    actual_winner: FightSide,
    actual_method: FightMethod,
    points_for_winner: u64,
    points_for_winner_and_method: u64,
) -> u64 {
    if predicted_winner != actual_winner {
        return 0;
    }
    if predicted_method == actual_method {
        return points_for_winner_and_method;
    }
    points_for_winner
}

/// -------------------------------------------------------------------
/// 2. PRIZE POOL SHARES
/// -------------------------------------------------------------------

/// What losers and the bonus contributed: the part of the pool that is not
/// winners' principal.
pub fn calculate_prize_pool(
    original_pool: u64,
    sum_winners_stakes: u64,
    bonus_pool: u64,
) -> Result<u64> {
    let losers = original_pool
        .checked_sub(sum_winners_stakes)
        .ok_or(CustomError::MathOverflow)?;
    let prize = losers
        .checked_add(bonus_pool)
        .ok_or(CustomError::MathOverflow)?;
    Ok(prize)
}

/// floor(prize_pool * points * amount / total_shares)
pub fn calculate_winnings(
    prize_pool: u64,
    points: u64,
    amount: u64,
    winning_pool_total_shares: u128,
) -> Result<u64> {
    require!(winning_pool_total_shares > 0, CustomError::NoWinners);

    let share_units = (points as u128)
        .checked_mul(amount as u128)
        .ok_or(CustomError::MathOverflow)?;

    let winnings = (prize_pool as u128)
        .checked_mul(share_units)
        .ok_or(CustomError::MathOverflow)?
        .checked_div(winning_pool_total_shares)
        .ok_or(CustomError::MathOverflow)?;

    u64::try_from(winnings).map_err(|_| CustomError::MathOverflow.into())
}

/// Principal back plus the points-weighted share of the prize pool.
pub fn calculate_payout(
    amount: u64,
    points: u64,
    prize_pool: u64,
    winning_pool_total_shares: u128,
) -> Result<u64> {
    let winnings = calculate_winnings(prize_pool, points, amount, winning_pool_total_shares)?;
    let payout = amount
        .checked_add(winnings)
        .ok_or(CustomError::MathOverflow)?;
    Ok(payout)
}
