//! Access (Storefront Admin Access & Customer Identity) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session claim, access policy, phone number, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Signed session token codec
//! - `presentation/` - HTTP handlers, DTOs, routers, admin gate middleware
//!
//! ## Features
//! - Admin gate: every request under the admin prefix needs an ADMIN claim
//!   whose elevation has not lapsed, otherwise it is redirected to sign-in
//!   with a `callbackUrl` (and `reason=admin-session-expired` when lapsed)
//! - Phone canonicalization/validation for Iranian mobile numbers, including
//!   Persian and Arabic-Indic digits
//! - OTP-backed phone registration against pluggable storage
//!
//! ## Security Model
//! - Session claims are HMAC-SHA256 signed; unverifiable tokens count as absent
//! - The access decision is a pure function of path, claim and current time

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use domain::policy::{AccessDecision, AccessPolicy};
pub use error::{AccessError, AccessResult};
pub use infra::session_token::{SessionClaimsPayload, SessionTokenCodec};
pub use presentation::router::{admin_router, phone_router, with_admin_gate};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod phone {
    pub use crate::domain::value_object::phone_number::{PhoneNumber, normalize, validate};
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::user_role::UserRole;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
