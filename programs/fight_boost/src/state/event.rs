use anchor_lang::prelude::*;
use crate::constants::{
    ALL_FIGHTS, DISCRIMINATOR_SIZE, MAX_EVENT_KEY_LEN, MAX_FIGHTS_PER_EVENT,
};
use crate::errors::CustomError;
use crate::state::Fight;

#[account]
pub struct EventAccount {
    /// Opaque key, also the PDA seed
    pub event_key: String,
    pub creator: Pubkey,

    /// Season partition of the point asset this event stakes and pays in
    pub asset_class: u64,

    /// 0 = claims never expire. Once non-zero it can only move later.
    pub claim_deadline: i64,
    pub created_at: i64,

    /// Fight N lives at index N - 1
    pub fights: Vec<Fight>,

    pub bump: u8,
}

impl EventAccount {
    // 8 + (4 + 32) + 32 + 8 + 8 + 8 + 4 + 1
    pub const BASE_LEN: usize =
        DISCRIMINATOR_SIZE + (4 + MAX_EVENT_KEY_LEN) + 32 + 8 + 8 + 8 + 4 + 1;

    pub fn space(fight_count: u8) -> usize {
        Self::BASE_LEN + fight_count as usize * Fight::SIZE
    }

    pub fn validate_key(event_key: &str) -> Result<()> {
        require!(
            !event_key.is_empty() && event_key.len() <= MAX_EVENT_KEY_LEN,
            CustomError::InvalidArgument
        );
        Ok(())
    }

    pub fn init_fights(&mut self, fight_count: u8, default_boost_cutoff: i64) -> Result<()> {
        require!(
            fight_count > 0 && fight_count <= MAX_FIGHTS_PER_EVENT,
            CustomError::InvalidArgument
        );
        require!(default_boost_cutoff >= 0, CustomError::InvalidArgument);

        self.fights = (1..=fight_count)
            .map(|number| Fight::new(number, default_boost_cutoff))
            .collect();
        Ok(())
    }

    pub fn fight_count(&self) -> u8 {
        self.fights.len() as u8
    }

    pub fn fight(&self, fight_number: u8) -> Result<&Fight> {
        let idx = (fight_number as usize)
            .checked_sub(1)
            .ok_or(CustomError::NotFound)?;
        self.fights.get(idx).ok_or(CustomError::NotFound.into())
    }

    pub fn fight_mut(&mut self, fight_number: u8) -> Result<&mut Fight> {
        let idx = (fight_number as usize)
            .checked_sub(1)
            .ok_or(CustomError::NotFound)?;
        self.fights.get_mut(idx).ok_or(CustomError::NotFound.into())
    }

    /// Returns the previous deadline.
    pub fn set_claim_deadline(&mut self, deadline: i64) -> Result<i64> {
        require!(deadline >= 0, CustomError::InvalidArgument);
        let old = self.claim_deadline;
        require!(old == 0 || deadline >= old, CustomError::InvalidArgument);
        self.claim_deadline = deadline;
        Ok(old)
    }

    pub fn claim_window_open(&self, now: i64) -> bool {
        self.claim_deadline == 0 || now <= self.claim_deadline
    }

    /// Applies a cutoff to one fight, or to every unsettled fight when
    /// `fight_number` is `ALL_FIGHTS`. Returns the fight numbers touched.
    pub fn set_boost_cutoff(&mut self, fight_number: u8, cutoff: i64) -> Result<Vec<u8>> {
        require!(cutoff >= 0, CustomError::InvalidArgument);

        if fight_number != ALL_FIGHTS {
            self.fight_mut(fight_number)?.set_boost_cutoff(cutoff)?;
            return Ok(vec![fight_number]);
        }

        let mut updated = Vec::new();
        for fight in self.fights.iter_mut().filter(|f| !f.status.is_settled()) {
            fight.set_boost_cutoff(cutoff)?;
            updated.push(fight.number);
        }
        Ok(updated)
    }

    pub fn ensure_purgeable(&self, now: i64) -> Result<()> {
        require!(
            self.claim_deadline != 0 && now > self.claim_deadline,
            CustomError::ClaimWindowOpen
        );
        Ok(())
    }

    /// Marks every settled fight's remainder as claimed and returns what was
    /// swept per fight. Purging twice sweeps nothing the second time.
    pub fn sweep_unclaimed(&mut self) -> Result<Vec<(u8, u64)>> {
        let mut swept = Vec::new();
        for fight in self.fights.iter_mut().filter(|f| f.status.is_settled()) {
            let remainder = fight.unclaimed()?;
            if remainder == 0 {
                continue;
            }
            fight.record_payout(remainder)?;
            swept.push((fight.number, remainder));
        }
        Ok(swept)
    }

    /// Window check, sweep and sum in one step. Fails with `NoSurplus` when
    /// nothing is left to sweep.
    pub fn purge_total(&mut self, now: i64) -> Result<(Vec<(u8, u64)>, u64)> {
        self.ensure_purgeable(now)?;
        let swept = self.sweep_unclaimed()?;

        let mut total: u64 = 0;
        for &(_, amount) in swept.iter() {
            total = total.checked_add(amount).ok_or(CustomError::MathOverflow)?;
        }
        require!(total > 0, CustomError::NoSurplus);
        Ok((swept, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_custom_err;
    use crate::state::{FightResult, FightMethod, FightSide, FightStatus};

    fn event(fight_count: u8) -> EventAccount {
        let mut event = EventAccount {
            event_key: "E1".to_string(),
            creator: Pubkey::new_unique(),
            asset_class: 1,
            claim_deadline: 0,
            created_at: 0,
            fights: Vec::new(),
            bump: 255,
        };
        event.init_fights(fight_count, 0).unwrap();
        event
    }

    #[test]
    fn init_creates_open_fights_numbered_from_one() {
        let mut ev = event(3);
        assert_eq!(ev.fight_count(), 3);
        for (i, fight) in ev.fights.iter().enumerate() {
            assert_eq!(fight.number as usize, i + 1);
            assert_eq!(fight.status, FightStatus::Open);
            assert_eq!(fight.boost_cutoff, 0);
        }

        ev.init_fights(2, 500).unwrap();
        assert!(ev.fights.iter().all(|f| f.boost_cutoff == 500));
    }

    #[test]
    fn init_rejects_bad_fight_counts() {
        let mut ev = event(1);
        assert_custom_err(ev.init_fights(0, 0), CustomError::InvalidArgument);
        assert_custom_err(
            ev.init_fights(MAX_FIGHTS_PER_EVENT + 1, 0),
            CustomError::InvalidArgument,
        );
    }

    #[test]
    fn event_key_length_is_bounded() {
        EventAccount::validate_key("UFC-300").unwrap();
        assert_custom_err(EventAccount::validate_key(""), CustomError::InvalidArgument);
        let long = "x".repeat(MAX_EVENT_KEY_LEN + 1);
        assert_custom_err(EventAccount::validate_key(&long), CustomError::InvalidArgument);
    }

    #[test]
    fn fight_lookup_is_one_based() {
        let ev = event(2);
        assert_eq!(ev.fight(1).unwrap().number, 1);
        assert_eq!(ev.fight(2).unwrap().number, 2);
        assert_custom_err(ev.fight(0), CustomError::NotFound);
        assert_custom_err(ev.fight(3), CustomError::NotFound);
    }

    #[test]
    fn claim_deadline_never_decreases() {
        let mut ev = event(1);
        assert_eq!(ev.set_claim_deadline(1_000).unwrap(), 0);
        assert_eq!(ev.set_claim_deadline(1_000).unwrap(), 1_000);
        assert_eq!(ev.set_claim_deadline(2_000).unwrap(), 1_000);

        assert_custom_err(ev.set_claim_deadline(1_999), CustomError::InvalidArgument);
        assert_custom_err(ev.set_claim_deadline(0), CustomError::InvalidArgument);
        assert_custom_err(ev.set_claim_deadline(-5), CustomError::InvalidArgument);
        assert_eq!(ev.claim_deadline, 2_000);
    }

    #[test]
    fn claim_window_bounds() {
        let mut ev = event(1);
        assert!(ev.claim_window_open(i64::MAX));
        assert_custom_err(ev.ensure_purgeable(i64::MAX), CustomError::ClaimWindowOpen);

        ev.set_claim_deadline(100).unwrap();
        assert!(ev.claim_window_open(100));
        assert!(!ev.claim_window_open(101));
        assert_custom_err(ev.ensure_purgeable(100), CustomError::ClaimWindowOpen);
        ev.ensure_purgeable(101).unwrap();
    }

    #[test]
    fn cutoff_for_all_skips_settled_fights() {
        let mut ev = event(3);
        ev.fight_mut(2).unwrap().cancel(1).unwrap();

        let updated = ev.set_boost_cutoff(ALL_FIGHTS, 900).unwrap();
        assert_eq!(updated, vec![1, 3]);
        assert_eq!(ev.fight(1).unwrap().boost_cutoff, 900);
        assert_eq!(ev.fight(2).unwrap().boost_cutoff, 0);
        assert_eq!(ev.fight(3).unwrap().boost_cutoff, 900);

        assert_custom_err(ev.set_boost_cutoff(2, 900), CustomError::InvalidTransition);
        assert_custom_err(ev.set_boost_cutoff(4, 900), CustomError::NotFound);
    }

    #[test]
    fn sweep_takes_settled_remainders_once() {
        let mut ev = event(3);

        // fight 1: resolved with nobody on the winning side
        let f1 = ev.fight_mut(1).unwrap();
        f1.record_stake(300).unwrap();
        f1.record_bonus(20).unwrap();
        f1.apply_result(
            &FightResult {
                winner: FightSide::SideB,
                method: FightMethod::Decision,
                points_for_winner: 5,
                points_for_winner_and_method: 8,
                sum_winners_stakes: 0,
                winning_pool_total_shares: 0,
            },
            10,
        )
        .unwrap();

        // fight 2: cancelled, partly refunded
        let f2 = ev.fight_mut(2).unwrap();
        f2.record_stake(100).unwrap();
        f2.cancel(10).unwrap();
        f2.record_payout(60).unwrap();

        // fight 3: still open, must be left alone
        ev.fight_mut(3).unwrap().record_stake(500).unwrap();

        let swept = ev.sweep_unclaimed().unwrap();
        assert_eq!(swept, vec![(1, 320), (2, 40)]);
        assert_eq!(ev.fight(1).unwrap().claimed_amount, 320);
        assert_eq!(ev.fight(2).unwrap().claimed_amount, 100);
        assert_eq!(ev.fight(3).unwrap().claimed_amount, 0);

        assert!(ev.sweep_unclaimed().unwrap().is_empty());
    }

    #[test]
    fn purge_total_sums_once_then_has_nothing_left() {
        let mut ev = event(2);
        let f1 = ev.fight_mut(1).unwrap();
        f1.record_stake(70).unwrap();
        f1.cancel(10).unwrap();
        let f2 = ev.fight_mut(2).unwrap();
        f2.record_stake(30).unwrap();
        f2.cancel(10).unwrap();

        assert_custom_err(ev.purge_total(500), CustomError::ClaimWindowOpen);

        ev.set_claim_deadline(100).unwrap();
        assert_custom_err(ev.purge_total(100), CustomError::ClaimWindowOpen);

        let (swept, total) = ev.purge_total(101).unwrap();
        assert_eq!(swept, vec![(1, 70), (2, 30)]);
        assert_eq!(total, 100);

        assert_custom_err(ev.purge_total(102), CustomError::NoSurplus);
    }

    #[test]
    fn purge_with_nothing_settled_is_no_surplus() {
        let mut ev = event(2);
        ev.fight_mut(1).unwrap().record_stake(40).unwrap();
        ev.set_claim_deadline(100).unwrap();

        assert_custom_err(ev.purge_total(101), CustomError::NoSurplus);
        assert_eq!(ev.fight(1).unwrap().claimed_amount, 0);
    }
}
