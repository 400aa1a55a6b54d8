pub mod submit_result;
pub mod claim_boost;
pub mod claim_boosts;
pub mod claim_across_fights;
pub mod quote_claimable;
pub mod purge_unclaimed;

pub use submit_result::*;
pub use claim_boost::*;
pub use claim_boosts::*;
pub use claim_across_fights::*;
pub use quote_claimable::*;
pub use purge_unclaimed::*;
