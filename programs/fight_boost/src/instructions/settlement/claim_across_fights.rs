use anchor_lang::prelude::*;
use crate::errors::CustomError;
use super::claim_boosts::{claim_and_pay, ClaimBoosts};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FightClaim {
    pub fight_number: u8,
    pub boost_indices: Vec<u32>,
}

/// Flattens the claims into (fight, index) pairs, in order.
pub fn flatten_claims(claims: &[FightClaim]) -> Result<Vec<(u8, u32)>> {
    let mut targets = Vec::new();
    for claim in claims {
        require!(!claim.boost_indices.is_empty(), CustomError::InvalidArgument);
        targets.extend(
            claim
                .boost_indices
                .iter()
                .map(|&index| (claim.fight_number, index)),
        );
    }
    Ok(targets)
}

/// Same accounts as `claim_boosts`; remaining accounts hold the boosts of
/// every `FightClaim` back to back.
pub fn claim_across_fights<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimBoosts<'info>>,
    claims: Vec<FightClaim>,
) -> Result<()> {
    let targets = flatten_claims(&claims)?;
    claim_and_pay(ctx, &targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_custom_err;

    #[test]
    fn claims_flatten_in_order() {
        let claims = vec![
            FightClaim { fight_number: 2, boost_indices: vec![4, 1] },
            FightClaim { fight_number: 1, boost_indices: vec![0] },
        ];
        assert_eq!(flatten_claims(&claims).unwrap(), vec![(2, 4), (2, 1), (1, 0)]);
    }

    #[test]
    fn empty_fight_claim_is_rejected() {
        let claims = vec![FightClaim { fight_number: 1, boost_indices: vec![] }];
        assert_custom_err(flatten_claims(&claims), CustomError::InvalidArgument);
    }
}
