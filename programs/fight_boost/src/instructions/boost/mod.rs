pub mod place_boost;
pub mod increase_boost;

pub use place_boost::*;
pub use increase_boost::*;
