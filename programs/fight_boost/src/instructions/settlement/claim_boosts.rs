use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{AssetClass, Boost, EventAccount};
use crate::constants::{SEED_ASSET_CLASS, SEED_ASSET_VAULT, SEED_EVENT};
use crate::errors::CustomError;
use crate::events::{BoostClaimed, ClaimPaid};
use crate::utils::{credit, settle_boost};

/// Batch claim accounts. The boosts themselves come in as remaining accounts,
/// in the same order as the requested (fight, index) pairs.
#[derive(Accounts)]
pub struct ClaimBoosts<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_EVENT, event.event_key.as_bytes()],
        bump = event.bump
    )]
    pub event: Box<Account<'info, EventAccount>>,

    #[account(
        seeds = [SEED_ASSET_CLASS, asset_class.id.to_le_bytes().as_ref()],
        bump = asset_class.bump,
        constraint = asset_class.id == event.asset_class @ CustomError::AssetMismatch
    )]
    pub asset_class: Box<Account<'info, AssetClass>>,

    #[account(
        mut,
        seeds = [SEED_ASSET_VAULT, asset_class.key().as_ref()],
        bump = asset_class.vault_bump,
        token::authority = asset_class,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = participant_token_account.mint == asset_class.mint
            @ CustomError::AssetMismatch,
        token::authority = participant,
    )]
    pub participant_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_boosts<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimBoosts<'info>>,
    fight_number: u8,
    boost_indices: Vec<u32>,
) -> Result<()> {
    let targets: Vec<(u8, u32)> = boost_indices
        .into_iter()
        .map(|index| (fight_number, index))
        .collect();

    claim_and_pay(ctx, &targets)
}

/// Settles every target, then pays the sum in one transfer.
pub(crate) fn claim_and_pay<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimBoosts<'info>>,
    targets: &[(u8, u32)],
) -> Result<()> {
    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();
    let participant = ctx.accounts.participant.key();

    let (total_payout, boosts_claimed) = settle_boost_accounts(
        &event_key,
        &mut ctx.accounts.event,
        &participant,
        ctx.remaining_accounts,
        targets,
        clock.unix_timestamp,
    )?;

    credit(
        &ctx.accounts.token_program,
        &ctx.accounts.asset_class,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.participant_token_account.to_account_info(),
        total_payout,
    )?;

    msg!("Claimed {} boosts for {}", boosts_claimed, total_payout);

    emit!(ClaimPaid {
        event: event_key,
        owner: participant,
        boosts_claimed,
        total_payout,
    });

    Ok(())
}

/// Loads each remaining account as a `Boost`, claims it and writes it back.
/// Returns (total payout, boosts claimed). Any failure aborts the whole batch.
pub(crate) fn settle_boost_accounts(
    event_key: &Pubkey,
    event: &mut EventAccount,
    participant: &Pubkey,
    boost_accounts: &[AccountInfo],
    targets: &[(u8, u32)],
    now: i64,
) -> Result<(u64, u32)> {
    require!(!targets.is_empty(), CustomError::InvalidArgument);
    require!(
        boost_accounts.len() == targets.len(),
        CustomError::InvalidArgument
    );

    let mut total_payout: u64 = 0;
    let mut boosts_claimed: u32 = 0;

    for (boost_info, &(fight_number, index)) in boost_accounts.iter().zip(targets) {
        require_keys_eq!(*boost_info.owner, crate::ID, CustomError::NotFound);
        require!(boost_info.is_writable, CustomError::InvalidArgument);

        let mut boost_data = boost_info.try_borrow_mut_data()?;
        let mut boost = Boost::try_deserialize(&mut &boost_data[..])?;

        require!(
            boost.fight_number == fight_number && boost.index == index,
            CustomError::NotFound
        );

        let outcome = settle_boost(event_key, event, &mut boost, participant, now)?;

        let mut new_data: Vec<u8> = Vec::new();
        boost.try_serialize(&mut new_data)?;

        if new_data.len() <= boost_data.len() {
            boost_data[..new_data.len()].copy_from_slice(&new_data);
        } else {
            return Err(ProgramError::AccountDataTooSmall.into());
        }

        emit!(BoostClaimed {
            event: *event_key,
            fight_number,
            boost_index: index,
            owner: *participant,
            payout: outcome.payout,
            points: outcome.points,
            refund: outcome.refund,
        });

        total_payout = total_payout
            .checked_add(outcome.payout)
            .ok_or(CustomError::MathOverflow)?;
        boosts_claimed = boosts_claimed
            .checked_add(1)
            .ok_or(CustomError::MathOverflow)?;
    }

    Ok((total_payout, boosts_claimed))
}
