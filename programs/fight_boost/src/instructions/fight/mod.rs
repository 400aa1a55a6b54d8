pub mod update_fight_status;
pub mod set_boost_cutoff;
pub mod cancel_fight;
pub mod deposit_bonus;

pub use update_fight_status::*;
pub use set_boost_cutoff::*;
pub use cancel_fight::*;
pub use deposit_bonus::*;
