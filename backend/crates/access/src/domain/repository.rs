//! Repository Traits
//!
//! Interfaces to the storefront's persistence and OTP delivery. Both live
//! outside this crate; only their contracts are used here.

use crate::domain::value_object::phone_number::PhoneNumber;
use crate::error::AccessResult;

/// Registered phone numbers
#[trait_variant::make(PhoneRegistry: Send)]
pub trait LocalPhoneRegistry {
    /// Check if a canonical phone number is already registered
    async fn exists_by_phone(&self, phone: &PhoneNumber) -> AccessResult<bool>;

    /// Register a phone number
    ///
    /// Implementations backed by a unique index should report a concurrent
    /// duplicate as `AccessError::PhoneNumberTaken`.
    async fn create(&self, phone: &PhoneNumber) -> AccessResult<()>;
}

/// One-time code verification (pass/fail only)
#[trait_variant::make(OtpVerifier: Send)]
pub trait LocalOtpVerifier {
    /// Check a code previously sent to `phone`
    async fn verify(&self, phone: &PhoneNumber, code: &str) -> AccessResult<bool>;
}
