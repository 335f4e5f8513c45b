//! Infrastructure Layer
//!
//! Session token encoding. Persistence and OTP delivery are provided by the
//! host application through the domain repository traits.

pub mod session_token;

pub use session_token::{SessionClaimsPayload, SessionTokenCodec};
