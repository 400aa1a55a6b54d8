use anchor_lang::prelude::*;
use crate::errors::CustomError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightStatus {
    Open,
    Closed,
    Resolved,
    /// Voided fight. Terminal like `Resolved`, but every boost is refunded.
    Cancelled,
}

impl FightStatus {
    /// Position in the forward-only order. Both terminal variants share a rank.
    pub fn rank(&self) -> u8 {
        match self {
            FightStatus::Open => 0,
            FightStatus::Closed => 1,
            FightStatus::Resolved | FightStatus::Cancelled => 2,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.rank() == 2
    }

    /// Guard for plain status updates. Only `Open` and `Closed` are reachable
    /// this way; settling goes through a result or a cancellation.
    pub fn can_transition(&self, to: FightStatus) -> bool {
        !self.is_settled() && !to.is_settled() && to.rank() >= self.rank()
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightSide {
    SideA,
    SideB,
    None,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightMethod {
    KnockOut,
    Submission,
    Decision,
    NoContest,
}

/// Authority-supplied outcome and scoring aggregates for one fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FightResult {
    pub winner: FightSide,
    pub method: FightMethod,
    pub points_for_winner: u64,
    pub points_for_winner_and_method: u64,
    pub sum_winners_stakes: u64,
    pub winning_pool_total_shares: u128,
}

/// A single prediction market inside an event. Stored inline in
/// `EventAccount::fights`, so every mutation of a fight is serialized by the
/// event account lock.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Fight {
    pub number: u8,
    pub status: FightStatus,
    pub winner: FightSide,
    pub method: FightMethod,

    pub bonus_pool: u64,
    pub original_pool: u64,
    pub sum_winners_stakes: u64,
    pub winning_pool_total_shares: u128,
    pub points_for_winner: u64,
    pub points_for_winner_and_method: u64,
    pub claimed_amount: u64,

    /// 0 = no cutoff, status alone decides
    pub boost_cutoff: i64,
    /// Next boost index to hand out
    pub boost_count: u32,
    pub resolved_at: i64,
}

impl Fight {
    // 1 + 1 + 1 + 1 + 8 + 8 + 8 + 16 + 8 + 8 + 8 + 8 + 4 + 8
    pub const SIZE: usize = 4 + 6 * 8 + 16 + 8 + 4 + 8;

    pub fn new(number: u8, boost_cutoff: i64) -> Self {
        Self {
            number,
            status: FightStatus::Open,
            winner: FightSide::None,
            method: FightMethod::NoContest,
            bonus_pool: 0,
            original_pool: 0,
            sum_winners_stakes: 0,
            winning_pool_total_shares: 0,
            points_for_winner: 0,
            points_for_winner_and_method: 0,
            claimed_amount: 0,
            boost_cutoff,
            boost_count: 0,
            resolved_at: 0,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == FightStatus::Cancelled
    }

    pub fn update_status(&mut self, to: FightStatus) -> Result<FightStatus> {
        require!(self.status.can_transition(to), CustomError::InvalidTransition);
        let old = self.status;
        self.status = to;
        Ok(old)
    }

    pub fn set_boost_cutoff(&mut self, cutoff: i64) -> Result<()> {
        require!(cutoff >= 0, CustomError::InvalidArgument);
        require!(!self.status.is_settled(), CustomError::InvalidTransition);
        self.boost_cutoff = cutoff;
        Ok(())
    }

    pub fn cancel(&mut self, now: i64) -> Result<()> {
        require!(!self.status.is_settled(), CustomError::InvalidTransition);
        self.status = FightStatus::Cancelled;
        self.winner = FightSide::None;
        self.method = FightMethod::NoContest;
        self.resolved_at = now;
        Ok(())
    }

    pub fn ensure_accepts_boosts(&self, now: i64) -> Result<()> {
        require!(self.status == FightStatus::Open, CustomError::NotOpen);
        require!(
            self.boost_cutoff == 0 || now <= self.boost_cutoff,
            CustomError::NotOpen
        );
        Ok(())
    }

    /// Hands out the next boost index. Callers must ask for exactly that index,
    /// since it is part of the boost address.
    pub fn next_boost_index(&mut self, requested: u32) -> Result<u32> {
        require!(requested == self.boost_count, CustomError::InvalidArgument);
        self.boost_count = self
            .boost_count
            .checked_add(1)
            .ok_or(CustomError::MathOverflow)?;
        Ok(requested)
    }

    /// Adds to an existing boost's stake, under the same rules as a new boost.
    pub fn record_top_up(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, CustomError::InvalidArgument);
        self.ensure_accepts_boosts(now)?;
        self.record_stake(amount)
    }

    pub fn record_stake(&mut self, amount: u64) -> Result<()> {
        self.original_pool = self
            .original_pool
            .checked_add(amount)
            .ok_or(CustomError::MathOverflow)?;
        Ok(())
    }

    pub fn record_bonus(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, CustomError::InvalidArgument);
        require!(!self.status.is_settled(), CustomError::InvalidTransition);
        self.bonus_pool = self
            .bonus_pool
            .checked_add(amount)
            .ok_or(CustomError::MathOverflow)?;
        Ok(())
    }

    /// Everything that ever backed this fight: stakes plus bonus.
    pub fn total_pool(&self) -> Result<u64> {
        self.original_pool
            .checked_add(self.bonus_pool)
            .ok_or(CustomError::MathOverflow.into())
    }

    pub fn unclaimed(&self) -> Result<u64> {
        Ok(self.total_pool()?.saturating_sub(self.claimed_amount))
    }

    pub fn has_winners(&self) -> bool {
        self.sum_winners_stakes > 0 && self.winning_pool_total_shares > 0
    }

    /// Single path through which paid-out or refunded amounts leave the pool.
    pub fn record_payout(&mut self, amount: u64) -> Result<()> {
        let claimed = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(CustomError::MathOverflow)?;
        require!(claimed <= self.total_pool()?, CustomError::PoolExhausted);
        self.claimed_amount = claimed;
        Ok(())
    }

    /// Stores the authority result verbatim after shape checks. Returns
    /// whether this replaced an earlier result.
    pub fn apply_result(&mut self, result: &FightResult, now: i64) -> Result<bool> {
        require!(!self.is_cancelled(), CustomError::InvalidTransition);
        let resubmitted = self.status == FightStatus::Resolved;
        if resubmitted {
            require!(self.claimed_amount == 0, CustomError::ResultLocked);
        }
        validate_result(result, self.original_pool)?;

        self.status = FightStatus::Resolved;
        self.winner = result.winner;
        self.method = result.method;
        self.points_for_winner = result.points_for_winner;
        self.points_for_winner_and_method = result.points_for_winner_and_method;
        self.sum_winners_stakes = result.sum_winners_stakes;
        self.winning_pool_total_shares = result.winning_pool_total_shares;
        self.resolved_at = now;

        Ok(resubmitted)
    }
}

fn validate_result(result: &FightResult, original_pool: u64) -> Result<()> {
    require!(result.points_for_winner > 0, CustomError::InvalidArgument);
    require!(
        result.points_for_winner_and_method >= result.points_for_winner,
        CustomError::InvalidArgument
    );
    require!(
        (result.winner == FightSide::None) == (result.method == FightMethod::NoContest),
        CustomError::InvalidArgument
    );
    require!(
        result.sum_winners_stakes <= original_pool,
        CustomError::InvalidArgument
    );
    require!(
        (result.sum_winners_stakes == 0) == (result.winning_pool_total_shares == 0),
        CustomError::InvalidArgument
    );

    if result.sum_winners_stakes == 0 {
        return Ok(());
    }
    require!(result.winner != FightSide::None, CustomError::InvalidArgument);

    // Every winning boost scores between the two point levels, so the share
    // total is bracketed by the winning stake times each level.
    let stakes = result.sum_winners_stakes as u128;
    let min_shares = stakes
        .checked_mul(result.points_for_winner as u128)
        .ok_or(CustomError::MathOverflow)?;
    let max_shares = stakes
        .checked_mul(result.points_for_winner_and_method as u128)
        .ok_or(CustomError::MathOverflow)?;
    require!(
        result.winning_pool_total_shares >= min_shares
            && result.winning_pool_total_shares <= max_shares,
        CustomError::InvalidArgument
    );

    Ok(())
}
