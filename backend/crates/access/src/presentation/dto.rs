//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Phone validation / registration
// ============================================================================

/// Request carrying a raw phone number as typed by the customer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneRequest {
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneValidationResponse {
    pub valid: bool,
    /// Best-effort canonical form, present even when invalid
    pub normalized: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneAvailabilityResponse {
    pub phone: String,
    pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPhoneRequest {
    pub phone: String,
    pub otp_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPhoneResponse {
    pub phone: String,
}

// ============================================================================
// Admin session
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionResponse {
    pub role: Option<String>,
    pub subject: Option<String>,
    pub admin_expires_at: Option<i64>,
    /// Seconds until admin elevation lapses; `None` when unbounded
    pub remaining_secs: Option<i64>,
}
