pub mod create_event;
pub mod set_claim_deadline;

pub use create_event::*;
pub use set_claim_deadline::*;
