use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{FightMethod, FightSide, FightStatus};
use utils::ClaimQuote;

declare_id!("8YHgYDmMbm1UNLVT6nuA95rSjwrUnGqs7V19tW4cnMWR");

#[program]
pub mod fight_boost {
    use super::*;

    // --- ADMIN & ACCESS ---

    pub fn initialize_protocol(ctx: Context<InitializeProtocol>) -> Result<()> {
        admin::initialize_protocol(ctx)
    }

    pub fn update_operator(
        ctx: Context<UpdateOperator>,
        operator: Pubkey,
        enabled: bool,
    ) -> Result<()> {
        admin::update_operator(ctx, operator, enabled)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        admin::transfer_admin(ctx, new_admin)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        admin::set_pause(ctx, paused)
    }

    pub fn config_asset_class(ctx: Context<ConfigAssetClass>, id: u64) -> Result<()> {
        admin::config_asset_class(ctx, id)
    }

    // --- EVENTS ---

    pub fn create_event(
        ctx: Context<CreateEvent>,
        event_key: String,
        fight_count: u8,
        asset_class_id: u64,
        default_boost_cutoff: i64,
    ) -> Result<()> {
        crate::instructions::event::create_event(
            ctx,
            event_key,
            fight_count,
            asset_class_id,
            default_boost_cutoff,
        )
    }

    pub fn set_claim_deadline(ctx: Context<SetClaimDeadline>, deadline: i64) -> Result<()> {
        crate::instructions::event::set_claim_deadline(ctx, deadline)
    }

    // --- FIGHTS ---

    pub fn update_fight_status(
        ctx: Context<UpdateFightStatus>,
        fight_number: u8,
        status: FightStatus,
    ) -> Result<()> {
        fight::update_fight_status(ctx, fight_number, status)
    }

    pub fn set_boost_cutoff(
        ctx: Context<SetBoostCutoff>,
        fight_number: u8,
        boost_cutoff: i64,
    ) -> Result<()> {
        fight::set_boost_cutoff(ctx, fight_number, boost_cutoff)
    }

    pub fn cancel_fight(ctx: Context<CancelFight>, fight_number: u8) -> Result<()> {
        fight::cancel_fight(ctx, fight_number)
    }

    pub fn deposit_bonus(
        ctx: Context<DepositBonus>,
        fight_number: u8,
        amount: u64,
    ) -> Result<()> {
        fight::deposit_bonus(ctx, fight_number, amount)
    }

    // --- BOOSTS ---

    pub fn place_boost(
        ctx: Context<PlaceBoost>,
        fight_number: u8,
        boost_index: u32,
        predicted_winner: FightSide,
        predicted_method: FightMethod,
        amount: u64,
    ) -> Result<()> {
        boost::place_boost(
            ctx,
            fight_number,
            boost_index,
            predicted_winner,
            predicted_method,
            amount,
        )
    }

    pub fn increase_boost(ctx: Context<IncreaseBoost>, amount: u64) -> Result<()> {
        boost::increase_boost(ctx, amount)
    }

    // --- SETTLEMENT ---

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
        settlement::submit_result(
            ctx,
            fight_number,
            winner,
            method,
            points_for_winner,
            points_for_winner_and_method,
            sum_winners_stakes,
            winning_pool_total_shares,
        )
    }

    pub fn claim_boost(ctx: Context<ClaimBoost>) -> Result<()> {
        settlement::claim_boost(ctx)
    }

    pub fn claim_boosts<'info>(
        ctx: Context<'_, '_, '_, 'info, ClaimBoosts<'info>>,
        fight_number: u8,
        boost_indices: Vec<u32>,
    ) -> Result<()> {
        settlement::claim_boosts(ctx, fight_number, boost_indices)
    }

    pub fn claim_across_fights<'info>(
        ctx: Context<'_, '_, '_, 'info, ClaimBoosts<'info>>,
        claims: Vec<FightClaim>,
    ) -> Result<()> {
        settlement::claim_across_fights(ctx, claims)
    }

    pub fn quote_claimable<'info>(
        ctx: Context<'_, '_, '_, 'info, QuoteClaimable<'info>>,
        fight_number: u8,
        participant: Pubkey,
        enforce_deadline: bool,
    ) -> Result<ClaimQuote> {
        settlement::quote_claimable(ctx, fight_number, participant, enforce_deadline)
    }

    pub fn purge_unclaimed(ctx: Context<PurgeUnclaimed>) -> Result<()> {
        settlement::purge_unclaimed(ctx)
    }
}
