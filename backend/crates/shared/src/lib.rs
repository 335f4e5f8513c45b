//! Shared Kernel
//!
//! Domain-crossing vocabulary used by every backend crate:
//! - Unified error type ([`error::app_error::AppError`]) and result alias
//! - Error classification ([`error::kind::ErrorKind`]) mapped to HTTP status codes
//!
//! Nothing storefront-specific lives here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
