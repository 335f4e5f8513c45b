//! Domain Layer
//!
//! Contains entities, value objects, the access policy and repository traits.

pub mod entity;
pub mod policy;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::session_claim::{AdminStanding, SessionClaim};
pub use policy::{AccessDecision, AccessPolicy, RedirectReason};
pub use repository::{OtpVerifier, PhoneRegistry};
