pub mod scoring;
pub mod settlement;
pub mod transfer;

pub use scoring::*;
pub use settlement::*;
pub use transfer::*;
