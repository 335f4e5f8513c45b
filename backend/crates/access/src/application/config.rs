//! Application Configuration
//!
//! Configuration for the admin access gate.

use crate::domain::policy::AccessPolicy;
use crate::error::AccessResult;

/// Admin gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Path prefix of the admin area
    pub protected_prefix: String,
    /// Admin sign-in page; always reachable, and the redirect target
    pub login_path: String,
    /// Cookie carrying the session token
    pub session_cookie_name: String,
    /// Secret key for HMAC-signed session tokens (32 bytes)
    pub session_secret: [u8; 32],
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_prefix: "/admin".to_string(),
            login_path: "/admin/login".to_string(),
            session_cookie_name: "session_token".to_string(),
            session_secret: [0u8; 32],
        }
    }
}

impl GateConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Build the access policy, rejecting a login path the gate cannot redirect to
    pub fn policy(&self) -> AccessResult<AccessPolicy> {
        AccessPolicy::new(&self.protected_prefix, &self.login_path)
    }
}
