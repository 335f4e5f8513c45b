//! Session Token Codec
//!
//! Session claims travel as HMAC-signed JSON (see `platform::token`). The
//! sign-in flow issues them with [`SessionTokenCodec::encode`]; the admin
//! gate reads them back with [`SessionTokenCodec::decode`].

use serde::{Deserialize, Serialize};

use crate::domain::entity::session_claim::SessionClaim;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AccessError, AccessResult};

/// Claims as serialized inside the token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaimsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_expires_at: Option<i64>,
    /// Token expiry (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl SessionClaimsPayload {
    pub fn from_claim(claim: &SessionClaim, exp: Option<i64>) -> Self {
        Self {
            sub: claim.subject.clone(),
            role: claim.role.map(|r| r.code().to_string()),
            admin_expires_at: claim.admin_expires_at,
            exp,
        }
    }

    fn into_claim(self) -> SessionClaim {
        let role = self.role.as_deref().and_then(|code| {
            let role = UserRole::from_code(code);
            if role.is_none() {
                tracing::debug!(role = %code, "Unknown role in session claims");
            }
            role
        });

        SessionClaim {
            subject: self.sub,
            role,
            admin_expires_at: self.admin_expires_at,
        }
    }
}

/// Encodes and verifies session tokens
#[derive(Clone)]
pub struct SessionTokenCodec {
    secret: [u8; 32],
}

impl SessionTokenCodec {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    pub fn encode(&self, payload: &SessionClaimsPayload) -> AccessResult<String> {
        let json = serde_json::to_vec(payload)?;
        Ok(platform::token::sign(&self.secret, &json)?)
    }

    /// Verify a token and extract its claim
    ///
    /// A token whose `exp` is before `now_secs` is rejected.
    pub fn decode(&self, token: &str, now_secs: i64) -> AccessResult<SessionClaim> {
        let json = platform::token::verify(&self.secret, token)?;
        let payload: SessionClaimsPayload = serde_json::from_slice(&json)?;

        if payload.exp.is_some_and(|exp| exp < now_secs) {
            return Err(AccessError::SessionExpired);
        }

        Ok(payload.into_claim())
    }
}

impl std::fmt::Debug for SessionTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenCodec").finish_non_exhaustive()
    }
}
