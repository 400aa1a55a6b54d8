use anchor_lang::prelude::*;
use crate::state::{Boost, EventAccount};
use crate::constants::SEED_EVENT;
use crate::errors::CustomError;
use crate::utils::{quote, ClaimQuote};

#[derive(Accounts)]
pub struct QuoteClaimable<'info> {
    #[account(
        seeds = [SEED_EVENT, event.event_key.as_bytes()],
        bump = event.bump
    )]
    pub event: Box<Account<'info, EventAccount>>,
}

/// Read-only. The participant's boosts on the fight are passed as remaining
/// accounts; the quote comes back as return data.
pub fn quote_claimable<'info>(
    ctx: Context<'_, '_, '_, 'info, QuoteClaimable<'info>>,
    fight_number: u8,
    participant: Pubkey,
    enforce_deadline: bool,
) -> Result<ClaimQuote> {
    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();

    let mut boosts = Vec::with_capacity(ctx.remaining_accounts.len());
    for boost_info in ctx.remaining_accounts.iter() {
        require_keys_eq!(*boost_info.owner, crate::ID, CustomError::NotFound);
        let boost_data = boost_info.try_borrow_data()?;
        boosts.push(Boost::try_deserialize(&mut &boost_data[..])?);
    }

    let claim_quote = quote(
        &event_key,
        &ctx.accounts.event,
        fight_number,
        &participant,
        boosts.iter(),
        clock.unix_timestamp,
        enforce_deadline,
    )?;

    msg!(
        "Quote for {} on fight {}: {} over {} boosts",
        participant,
        fight_number,
        claim_quote.total_payout,
        claim_quote.claimable_boosts
    );

    Ok(claim_quote)
}
