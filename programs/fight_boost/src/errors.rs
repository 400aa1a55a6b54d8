use anchor_lang::prelude::*;

#[error_code]
pub enum CustomError {
    #[msg("Boosting is paused.")]
    Paused,
    #[msg("Caller lacks the required capability or does not own the boost.")]
    Unauthorized,
    #[msg("Unknown event, fight or boost.")]
    NotFound,
    #[msg("Record already exists.")]
    AlreadyExists,
    #[msg("Invalid argument.")]
    InvalidArgument,
    #[msg("Fight status cannot move backwards or leave a terminal state.")]
    InvalidTransition,
    #[msg("Fight is not open for boosts.")]
    NotOpen,
    #[msg("Fight has not been resolved yet.")]
    NotResolved,
    #[msg("Result is locked: payouts have already been made on this fight.")]
    ResultLocked,
    #[msg("Boost is already claimed.")]
    AlreadyClaimed,
    #[msg("Boost prediction did not score any points.")]
    NotAWinner,
    #[msg("Fight has no winning boosts to pay.")]
    NoWinners,
    #[msg("Claim deadline has passed.")]
    DeadlinePassed,
    #[msg("Claim window is still open.")]
    ClaimWindowOpen,
    #[msg("Nothing left to move.")]
    NoSurplus,
    #[msg("Payout would exceed the fight pool.")]
    PoolExhausted,
    #[msg("Participant boost index is full for this fight.")]
    TooManyBoosts,
    #[msg("Operator list is full.")]
    TooManyOperators,
    #[msg("Token account does not match the event asset class.")]
    AssetMismatch,
    #[msg("Math operation overflow.")]
    MathOverflow,
}

#[cfg(test)]
pub fn assert_custom_err<T: std::fmt::Debug>(res: Result<T>, expected: CustomError) {
    assert_eq!(res.unwrap_err(), anchor_lang::error::Error::from(expected));
}
