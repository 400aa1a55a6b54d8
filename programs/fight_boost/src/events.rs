use anchor_lang::prelude::*;
use crate::state::{FightMethod, FightSide, FightStatus};

// --- ACCESS GATE ---
#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
}

#[event]
pub struct OperatorUpdated {
    pub operator: Pubkey,
    pub enabled: bool,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct PauseChanged {
    pub is_paused: bool,
}

#[event]
pub struct AssetClassConfigured {
    pub asset_class: u64,
    pub mint: Pubkey,
    pub vault: Pubkey,
}

// --- EVENTS & FIGHTS ---
#[event]
pub struct EventCreated {
    pub event: Pubkey,
    pub event_key: String,
    pub asset_class: u64,
    pub fight_count: u8,
    pub default_boost_cutoff: i64,
}

#[event]
pub struct ClaimDeadlineUpdated {
    pub event: Pubkey,
    pub old_deadline: i64,
    pub new_deadline: i64,
}

#[event]
pub struct FightStatusUpdated {
    pub event: Pubkey,
    pub fight_number: u8,
    pub old_status: FightStatus,
    pub new_status: FightStatus,
}

#[event]
pub struct BoostCutoffUpdated {
    pub event: Pubkey,
    pub fight_number: u8,
    pub boost_cutoff: i64,
}

#[event]
pub struct FightCancelled {
    pub event: Pubkey,
    pub fight_number: u8,
    pub original_pool: u64,
    pub bonus_pool: u64,
}

#[event]
pub struct BonusDeposited {
    pub event: Pubkey,
    pub fight_number: u8,
    pub depositor: Pubkey,
    pub amount: u64,
    pub bonus_pool: u64,
}

// --- BOOSTS ---
#[event]
pub struct BoostPlaced {
    pub event: Pubkey,
    pub fight_number: u8,
    pub boost_index: u32,
    pub owner: Pubkey,
    pub amount: u64,
    pub predicted_winner: FightSide,
    pub predicted_method: FightMethod,
}

#[event]
pub struct BoostIncreased {
    pub event: Pubkey,
    pub fight_number: u8,
    pub boost_index: u32,
    pub owner: Pubkey,
    pub added_amount: u64,
    pub new_amount: u64,
}

// --- SETTLEMENT ---
#[event]
pub struct ResultSubmitted {
    pub event: Pubkey,
    pub fight_number: u8,
    pub winner: FightSide,
    pub method: FightMethod,
    pub points_for_winner: u64,
    pub points_for_winner_and_method: u64,
    pub sum_winners_stakes: u64,
    pub winning_pool_total_shares: u128,
    pub resubmitted: bool,
}

#[event]
pub struct BoostClaimed {
    pub event: Pubkey,
    pub fight_number: u8,
    pub boost_index: u32,
    pub owner: Pubkey,
    pub payout: u64,
    pub points: u64,
    pub refund: bool,
}

#[event]
pub struct ClaimPaid {
    pub event: Pubkey,
    pub owner: Pubkey,
    pub boosts_claimed: u32,
    pub total_payout: u64,
}

#[event]
pub struct FightPurged {
    pub event: Pubkey,
    pub fight_number: u8,
    pub amount: u64,
}

#[event]
pub struct FundsPurged {
    pub event: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
