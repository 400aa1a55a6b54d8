pub const SEED_GLOBAL_CONFIG: &[u8] = b"global_config";
pub const SEED_ASSET_CLASS: &[u8] = b"asset_class";
pub const SEED_ASSET_VAULT: &[u8] = b"asset_vault";
pub const SEED_EVENT: &[u8] = b"event";
pub const SEED_BOOST: &[u8] = b"boost";
pub const SEED_PARTICIPANT_BOOSTS: &[u8] = b"participant_boosts";

pub const DISCRIMINATOR_SIZE: usize = 8;

/// Event keys double as PDA seeds, so they are capped at the seed length limit.
pub const MAX_EVENT_KEY_LEN: usize = 32;
pub const MAX_FIGHTS_PER_EVENT: u8 = 32;
pub const MAX_OPERATORS: usize = 16;
pub const MAX_BOOSTS_PER_PARTICIPANT: usize = 64;

/// `set_boost_cutoff` target meaning "every fight of the event".
pub const ALL_FIGHTS: u8 = 0;
