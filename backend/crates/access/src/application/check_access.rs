//! Check Access Use Case
//!
//! Resolves the caller's session claim from its token and runs the admin
//! access policy once. Token problems never surface as errors: a token that
//! cannot be trusted is the same as no token.

use std::sync::Arc;

use crate::domain::entity::session_claim::SessionClaim;
use crate::domain::policy::{AccessDecision, AccessPolicy};
use crate::infra::session_token::SessionTokenCodec;

/// Check access output
#[derive(Debug, Clone)]
pub struct AccessCheckOutput {
    pub decision: AccessDecision,
    /// Trusted claim, when a valid token was presented
    pub claim: Option<SessionClaim>,
}

/// Check access use case
pub struct CheckAccessUseCase {
    policy: Arc<AccessPolicy>,
    codec: Arc<SessionTokenCodec>,
}

impl CheckAccessUseCase {
    pub fn new(policy: Arc<AccessPolicy>, codec: Arc<SessionTokenCodec>) -> Self {
        Self { policy, codec }
    }

    pub fn execute(&self, path: &str, token: Option<&str>, now_secs: i64) -> AccessCheckOutput {
        if !self.policy.protects(path) {
            return AccessCheckOutput {
                decision: AccessDecision::Allow,
                claim: None,
            };
        }

        let claim = token.and_then(|token| self.resolve_claim(token, now_secs));
        let decision = self.policy.evaluate(path, claim.as_ref(), now_secs);

        match &decision {
            AccessDecision::Allow => {
                tracing::debug!(path = %path, "Admin access granted");
            }
            AccessDecision::RedirectUnauthorized { .. } => {
                tracing::info!(
                    path = %path,
                    has_claim = claim.is_some(),
                    "Admin access denied, redirecting to sign-in"
                );
            }
            AccessDecision::RedirectExpired { .. } => {
                tracing::info!(
                    path = %path,
                    subject = claim.as_ref().and_then(|c| c.subject.as_deref()).unwrap_or("-"),
                    "Admin session expired, redirecting to sign-in"
                );
            }
        }

        AccessCheckOutput { decision, claim }
    }

    fn resolve_claim(&self, token: &str, now_secs: i64) -> Option<SessionClaim> {
        match self.codec.decode(token, now_secs) {
            Ok(claim) => Some(claim),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring untrusted session token");
                None
            }
        }
    }
}
