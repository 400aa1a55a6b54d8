pub mod global_config;
pub mod asset_class;
pub mod fight;
pub mod event;
pub mod boost;

pub use global_config::*;
pub use asset_class::*;
pub use fight::*;
pub use event::*;
pub use boost::*;
