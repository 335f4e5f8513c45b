pub mod session_claim;

pub use session_claim::{AdminStanding, SessionClaim};
