use crate::errors::CustomError;
use crate::state::{Boost, EventAccount, Fight, FightStatus};
use crate::utils::scoring::{calculate_payout, calculate_points, calculate_prize_pool};
use anchor_lang::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub payout: u64,
    pub points: u64,
    /// Paid as a cancellation refund rather than from the scoring
    pub refund: bool,
}

/// Preview of what a participant could claim on one fight right now.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimQuote {
    pub total_payout: u64,
    pub claimable_boosts: u32,
}

fn points_for(fight: &Fight, boost: &Boost) -> u64 {
    calculate_points(
        boost.predicted_winner,
        boost.predicted_method,
        fight.winner,
        fight.method,
        fight.points_for_winner,
        fight.points_for_winner_and_method,
    )
}

/// What a single boost is owed, without touching the ledger.
pub fn evaluate_claim(fight: &Fight, boost: &Boost) -> Result<ClaimOutcome> {
    require!(!boost.claimed, CustomError::AlreadyClaimed);

    if fight.is_cancelled() {
        return Ok(ClaimOutcome {
            payout: boost.amount,
            points: 0,
            refund: true,
        });
    }

    require!(fight.status == FightStatus::Resolved, CustomError::NotResolved);
    require!(fight.has_winners(), CustomError::NoWinners);

    let points = points_for(fight, boost);
    require!(points > 0, CustomError::NotAWinner);

    let prize_pool = calculate_prize_pool(
        fight.original_pool,
        fight.sum_winners_stakes,
        fight.bonus_pool,
    )?;
    let payout = calculate_payout(
        boost.amount,
        points,
        prize_pool,
        fight.winning_pool_total_shares,
    )?;

    Ok(ClaimOutcome {
        payout,
        points,
        refund: false,
    })
}

/// Claims one boost against its fight: checks ownership and the claim window,
/// adds the payout to the fight's claimed total and flags the boost. The
/// caller moves the funds afterwards.
pub fn settle_boost(
    event_key: &Pubkey,
    event: &mut EventAccount,
    boost: &mut Boost,
    claimant: &Pubkey,
    now: i64,
) -> Result<ClaimOutcome> {
    require_keys_eq!(boost.event, *event_key, CustomError::NotFound);
    require_keys_eq!(boost.owner, *claimant, CustomError::Unauthorized);
    require!(!boost.claimed, CustomError::AlreadyClaimed);
    require!(event.claim_window_open(now), CustomError::DeadlinePassed);

    let fight = event.fight_mut(boost.fight_number)?;
    let outcome = evaluate_claim(fight, boost)?;

    fight.record_payout(outcome.payout)?;
    boost.claimed = true;

    Ok(outcome)
}

/// Read-only projection of claiming every given boost of `participant` on
/// one fight. Non-paying boosts are skipped; the conservation guard runs on a
/// copy of the fight.
pub fn quote<'a>(
    event_key: &Pubkey,
    event: &EventAccount,
    fight_number: u8,
    participant: &Pubkey,
    boosts: impl IntoIterator<Item = &'a Boost>,
    now: i64,
    enforce_deadline: bool,
) -> Result<ClaimQuote> {
    let mut scratch = event.fight(fight_number)?.clone();
    require!(scratch.status.is_settled(), CustomError::NotResolved);
    let mut quote = ClaimQuote::default();

    if enforce_deadline && !event.claim_window_open(now) {
        return Ok(quote);
    }

    for boost in boosts {
        require!(
            boost.event == *event_key
                && boost.fight_number == fight_number
                && boost.owner == *participant,
            CustomError::NotFound
        );
        if boost.claimed {
            continue;
        }
        let pays = scratch.is_cancelled()
            || (scratch.has_winners() && points_for(&scratch, boost) > 0);
        if !pays {
            continue;
        }

        let outcome = evaluate_claim(&scratch, boost)?;
        scratch.record_payout(outcome.payout)?;

        quote.total_payout = quote
            .total_payout
            .checked_add(outcome.payout)
            .ok_or(CustomError::MathOverflow)?;
        quote.claimable_boosts = quote
            .claimable_boosts
            .checked_add(1)
            .ok_or(CustomError::MathOverflow)?;
    }

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_custom_err;
    use crate::state::{FightMethod, FightResult, FightSide};

    struct Setup {
        key: Pubkey,
        event: EventAccount,
        boosts: Vec<Boost>,
    }

    impl Setup {
        fn new(fight_count: u8) -> Self {
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
            Self {
                key: Pubkey::new_unique(),
                event,
                boosts: Vec::new(),
            }
        }

        fn stake(
            &mut self,
            fight_number: u8,
            owner: Pubkey,
            amount: u64,
            winner: FightSide,
            method: FightMethod,
        ) -> usize {
            let fight = self.event.fight_mut(fight_number).unwrap();
            fight.ensure_accepts_boosts(0).unwrap();
            let index = fight.next_boost_index(fight.boost_count).unwrap();
            fight.record_stake(amount).unwrap();
            self.boosts.push(Boost {
                event: self.key,
                fight_number,
                index,
                owner,
                amount,
                predicted_winner: winner,
                predicted_method: method,
                claimed: false,
                created_at: 0,
                bump: 255,
            });
            self.boosts.len() - 1
        }

        fn claim(&mut self, i: usize, claimant: &Pubkey, now: i64) -> Result<ClaimOutcome> {
            settle_boost(&self.key, &mut self.event, &mut self.boosts[i], claimant, now)
        }
    }

    fn result_a_ko(sum: u64, shares: u128) -> FightResult {
        FightResult {
            winner: FightSide::SideA,
            method: FightMethod::KnockOut,
            points_for_winner: 10,
            points_for_winner_and_method: 20,
            sum_winners_stakes: sum,
            winning_pool_total_shares: shares,
        }
    }

    /// One fight: A stakes 100 on SideA by KO, B stakes 50 on SideB.
    fn two_stakers(bonus: u64) -> (Setup, Pubkey, Pubkey) {
        let mut s = Setup::new(1);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        s.stake(1, alice, 100, FightSide::SideA, FightMethod::KnockOut);
        s.stake(1, bob, 50, FightSide::SideB, FightMethod::Decision);
        resolve_a_ko(&mut s, bonus);
        (s, alice, bob)
    }

    /// One fight with A's 100 on SideA by KO as the whole pool.
    fn lone_winner(bonus: u64) -> (Setup, Pubkey) {
        let mut s = Setup::new(1);
        let alice = Pubkey::new_unique();
        s.stake(1, alice, 100, FightSide::SideA, FightMethod::KnockOut);
        resolve_a_ko(&mut s, bonus);
        (s, alice)
    }

    fn resolve_a_ko(s: &mut Setup, bonus: u64) {
        if bonus > 0 {
            s.event.fight_mut(1).unwrap().record_bonus(bonus).unwrap();
        }
        s.event
            .fight_mut(1)
            .unwrap()
            .apply_result(&result_a_ko(100, 2_000), 10)
            .unwrap();
    }

    #[test]
    fn lone_winner_recovers_principal() {
        let (mut s, alice) = lone_winner(0);

        let outcome = s.claim(0, &alice, 20).unwrap();
        assert_eq!(outcome.payout, 100);
        assert_eq!(outcome.points, 20);
        assert!(!outcome.refund);
        assert_eq!(s.event.fight(1).unwrap().unclaimed().unwrap(), 0);
    }

    #[test]
    fn lone_winner_takes_the_bonus() {
        let (mut s, alice) = lone_winner(50);
        assert_eq!(s.claim(0, &alice, 20).unwrap().payout, 150);
        assert_eq!(s.event.fight(1).unwrap().unclaimed().unwrap(), 0);
    }

    #[test]
    fn winner_takes_losing_stake_loser_gets_nothing() {
        let (mut s, alice, bob) = two_stakers(0);

        // prize pool = 150 - 100 = 50
        let outcome = s.claim(0, &alice, 20).unwrap();
        assert_eq!(outcome.payout, 150);
        assert_eq!(outcome.points, 20);

        assert_custom_err(s.claim(1, &bob, 20), CustomError::NotAWinner);
        assert!(!s.boosts[1].claimed);
        assert_eq!(s.event.fight(1).unwrap().claimed_amount, 150);
    }

    #[test]
    fn bonus_flows_to_winner() {
        let (mut s, alice, _) = two_stakers(50);
        assert_eq!(s.claim(0, &alice, 20).unwrap().payout, 200);
    }

    #[test]
    fn second_claim_is_rejected() {
        let (mut s, alice, _) = two_stakers(50);
        s.claim(0, &alice, 20).unwrap();
        assert_custom_err(s.claim(0, &alice, 21), CustomError::AlreadyClaimed);
        assert_eq!(s.event.fight(1).unwrap().claimed_amount, 200);
    }

    #[test]
    fn only_the_owner_can_claim() {
        let (mut s, _, bob) = two_stakers(0);
        assert_custom_err(s.claim(0, &bob, 20), CustomError::Unauthorized);
        assert!(!s.boosts[0].claimed);
    }

    #[test]
    fn boost_from_another_event_is_unknown() {
        let (mut s, alice, _) = two_stakers(0);
        s.boosts[0].event = Pubkey::new_unique();
        assert_custom_err(s.claim(0, &alice, 20), CustomError::NotFound);
    }

    #[test]
    fn claims_fail_closed_after_deadline() {
        let (mut s, alice, _) = two_stakers(0);
        s.event.set_claim_deadline(100).unwrap();
        assert_custom_err(s.claim(0, &alice, 101), CustomError::DeadlinePassed);
        s.claim(0, &alice, 100).unwrap();
    }

    #[test]
    fn claim_before_resolution_is_rejected() {
        let mut s = Setup::new(1);
        let alice = Pubkey::new_unique();
        s.stake(1, alice, 100, FightSide::SideA, FightMethod::KnockOut);
        assert_custom_err(s.claim(0, &alice, 1), CustomError::NotResolved);

        s.event.fight_mut(1).unwrap().update_status(FightStatus::Closed).unwrap();
        assert_custom_err(s.claim(0, &alice, 1), CustomError::NotResolved);
    }

    #[test]
    fn no_winner_result_blocks_claims() {
        let mut s = Setup::new(1);
        let alice = Pubkey::new_unique();
        s.stake(1, alice, 100, FightSide::SideA, FightMethod::KnockOut);
        s.event
            .fight_mut(1)
            .unwrap()
            .apply_result(
                &FightResult {
                    winner: FightSide::None,
                    method: FightMethod::NoContest,
                    points_for_winner: 1,
                    points_for_winner_and_method: 1,
                    sum_winners_stakes: 0,
                    winning_pool_total_shares: 0,
                },
                5,
            )
            .unwrap();
        assert_custom_err(s.claim(0, &alice, 6), CustomError::NoWinners);
    }

    #[test]
    fn cancelled_fight_refunds_every_prediction() {
        let mut s = Setup::new(1);
        let owners: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        s.stake(1, owners[0], 70, FightSide::SideA, FightMethod::KnockOut);
        s.stake(1, owners[1], 30, FightSide::SideB, FightMethod::Decision);
        s.stake(1, owners[2], 5, FightSide::SideB, FightMethod::Submission);
        s.event.fight_mut(1).unwrap().record_bonus(40).unwrap();
        s.event.fight_mut(1).unwrap().cancel(9).unwrap();

        for (i, owner) in owners.iter().enumerate() {
            let outcome = s.claim(i, owner, 10).unwrap();
            assert!(outcome.refund);
            assert_eq!(outcome.payout, s.boosts[i].amount);
        }

        // Bonus is left for the purge
        let fight = s.event.fight(1).unwrap();
        assert_eq!(fight.claimed_amount, 105);
        assert_eq!(fight.unclaimed().unwrap(), 40);
    }

    #[test]
    fn method_match_earns_a_larger_share() {
        let mut s = Setup::new(1);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();
        s.stake(1, a, 100, FightSide::SideA, FightMethod::KnockOut); // 20 pts
        s.stake(1, b, 100, FightSide::SideA, FightMethod::Decision); // 10 pts
        s.stake(1, c, 300, FightSide::SideB, FightMethod::KnockOut);
        // shares = 100*20 + 100*10 = 3000, prize = 300
        s.event
            .fight_mut(1)
            .unwrap()
            .apply_result(&result_a_ko(200, 3_000), 1)
            .unwrap();

        assert_eq!(s.claim(0, &a, 2).unwrap().payout, 300);
        assert_eq!(s.claim(1, &b, 2).unwrap().payout, 200);
        assert_eq!(s.event.fight(1).unwrap().unclaimed().unwrap(), 0);
    }

    #[test]
    fn quote_matches_claims_and_skips_non_paying() {
        let mut s = Setup::new(1);
        let alice = Pubkey::new_unique();
        s.stake(1, alice, 100, FightSide::SideA, FightMethod::KnockOut);
        s.stake(1, alice, 40, FightSide::SideB, FightMethod::Decision);
        s.stake(1, alice, 60, FightSide::SideA, FightMethod::Decision);
        // shares = 100*20 + 60*10 = 2600, prize = 40
        s.event
            .fight_mut(1)
            .unwrap()
            .apply_result(&result_a_ko(160, 2_600), 1)
            .unwrap();

        let key = s.key;
        let q = quote(&key, &s.event, 1, &alice, s.boosts.iter(), 2, true).unwrap();
        assert_eq!(q.claimable_boosts, 2);
        // 100 + 40*2000/2600 = 130, 60 + 40*600/2600 = 69
        assert_eq!(q.total_payout, 199);
        assert_eq!(s.event.fight(1).unwrap().claimed_amount, 0);

        let paid = s.claim(0, &alice, 2).unwrap().payout
            + s.claim(2, &alice, 2).unwrap().payout;
        assert_eq!(paid, q.total_payout);

        let after = quote(&key, &s.event, 1, &alice, s.boosts.iter(), 2, true).unwrap();
        assert_eq!(after, ClaimQuote::default());
    }

    #[test]
    fn quote_respects_deadline_only_when_asked() {
        let (mut s, alice, _) = two_stakers(0);
        s.event.set_claim_deadline(50).unwrap();
        let key = s.key;
        let mine = &s.boosts[..1];

        let enforced = quote(&key, &s.event, 1, &alice, mine.iter(), 51, true).unwrap();
        assert_eq!(enforced.total_payout, 0);

        let ignored = quote(&key, &s.event, 1, &alice, mine.iter(), 51, false).unwrap();
        assert_eq!(ignored.total_payout, 150);
    }

    #[test]
    fn quote_on_unsettled_fight_fails_even_without_boosts() {
        let mut s = Setup::new(1);
        let alice = Pubkey::new_unique();
        let key = s.key;
        assert_custom_err(
            quote(&key, &s.event, 1, &alice, std::iter::empty::<&Boost>(), 1, true),
            CustomError::NotResolved,
        );

        s.event.set_claim_deadline(5).unwrap();
        s.event.fight_mut(1).unwrap().update_status(FightStatus::Closed).unwrap();
        assert_custom_err(
            quote(&key, &s.event, 1, &alice, std::iter::empty::<&Boost>(), 6, true),
            CustomError::NotResolved,
        );

        s.event.fight_mut(1).unwrap().cancel(7).unwrap();
        let q = quote(&key, &s.event, 1, &alice, std::iter::empty::<&Boost>(), 1, true).unwrap();
        assert_eq!(q, ClaimQuote::default());
    }

    #[test]
    fn quote_rejects_foreign_boosts() {
        let (s, alice, _) = two_stakers(0);
        let key = s.key;
        assert_custom_err(
            quote(&key, &s.event, 1, &alice, s.boosts.iter(), 1, true),
            CustomError::NotFound,
        );
        assert_custom_err(
            quote(&key, &s.event, 2, &alice, s.boosts[..1].iter(), 1, true),
            CustomError::NotFound,
        );
    }

    /// Deterministic pseudo-random stakes; claims every boost and checks the
    /// fight pool is never overdrawn, with honest and with skewed aggregates.
    #[test]
    fn payouts_never_exceed_pool() {
        let mut seed: u64 = 0x5eed_1234_abcd_0042;
        let mut next = |bound: u64| {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (seed >> 33) % bound
        };
        let sides = [FightSide::SideA, FightSide::SideB];
        let methods = [FightMethod::KnockOut, FightMethod::Submission, FightMethod::Decision];

        for round in 0..40 {
            let mut s = Setup::new(1);
            let owner = Pubkey::new_unique();
            let stakes = 1 + next(25);
            for _ in 0..stakes {
                let side = sides[next(2) as usize];
                let method = methods[next(3) as usize];
                s.stake(1, owner, 1 + next(10_000), side, method);
            }
            let bonus = next(5_000);
            if bonus > 0 {
                s.event.fight_mut(1).unwrap().record_bonus(bonus).unwrap();
            }

            let pw = 1 + next(50);
            let pwm = pw + next(50);
            let mut sum: u64 = 0;
            let mut shares: u128 = 0;
            for b in s.boosts.iter() {
                if b.predicted_winner != FightSide::SideA {
                    continue;
                }
                let pts = if b.predicted_method == FightMethod::KnockOut { pwm } else { pw };
                sum += b.amount;
                shares += (pts as u128) * (b.amount as u128);
            }

            // Odd rounds understate the aggregates, within the accepted shape
            let skewed = round % 2 == 1 && sum > 1;
            if skewed {
                sum /= 2;
                shares = (sum as u128) * (pw as u128);
            }

            let result = FightResult {
                winner: FightSide::SideA,
                method: FightMethod::KnockOut,
                points_for_winner: pw,
                points_for_winner_and_method: pwm,
                sum_winners_stakes: sum,
                winning_pool_total_shares: shares,
            };
            s.event.fight_mut(1).unwrap().apply_result(&result, 1).unwrap();

            let total = s.event.fight(1).unwrap().total_pool().unwrap();
            let mut paid: u64 = 0;
            for i in 0..s.boosts.len() {
                match s.claim(i, &owner, 2) {
                    Ok(outcome) => paid += outcome.payout,
                    Err(err) => {
                        let allowed = [
                            CustomError::NotAWinner,
                            CustomError::NoWinners,
                            CustomError::PoolExhausted,
                        ];
                        assert!(
                            allowed.iter().any(|e| err == anchor_lang::error::Error::from(*e)),
                            "unexpected error {err:?}"
                        );
                        assert!(!s.boosts[i].claimed);
                    }
                }
            }

            let fight = s.event.fight(1).unwrap();
            assert_eq!(fight.claimed_amount, paid);
            assert!(paid <= total);
        }
    }
}
