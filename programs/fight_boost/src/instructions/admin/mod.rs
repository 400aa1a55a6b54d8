pub mod initialize_protocol;
pub mod update_operator;
pub mod transfer_admin;
pub mod set_pause;
pub mod config_asset_class;

pub use initialize_protocol::*;
pub use update_operator::*;
pub use transfer_admin::*;
pub use set_pause::*;
pub use config_asset_class::*;
