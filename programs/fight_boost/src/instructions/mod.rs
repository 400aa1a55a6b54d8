pub mod admin;
pub mod event;
pub mod fight;
pub mod boost;
pub mod settlement;

pub use admin::*;
pub use event::*;
pub use fight::*;
pub use boost::*;
pub use settlement::*;
