//! Admin Access Policy
//!
//! Decides, for a request path and the caller's session claim, whether the
//! request reaches the admin area or is bounced to the sign-in page.
//!
//! Building a policy validates the login path once. Evaluation is then a pure
//! function of `(path, claim, now)`: it performs no I/O, reads no clock and
//! cannot fail.

use axum::http::HeaderValue;

use crate::domain::entity::session_claim::{AdminStanding, SessionClaim};
use crate::error::{AccessError, AccessResult};

/// Why a redirect to sign-in was issued, when it is not simply "not an admin"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    AdminSessionExpired,
}

impl RedirectReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RedirectReason::AdminSessionExpired => "admin-session-expired",
        }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No claim, or not an admin
    RedirectUnauthorized { callback_url: String },
    /// Admin whose elevation has lapsed
    RedirectExpired { callback_url: String },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Path the user returns to after signing in
    pub fn callback_url(&self) -> Option<&str> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::RedirectUnauthorized { callback_url }
            | AccessDecision::RedirectExpired { callback_url } => Some(callback_url),
        }
    }

    pub fn reason(&self) -> Option<RedirectReason> {
        match self {
            AccessDecision::RedirectExpired { .. } => Some(RedirectReason::AdminSessionExpired),
            _ => None,
        }
    }
}

/// Admin area access policy
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    protected_prefix: String,
    /// Redirect target, possibly with its own query string
    login_path: String,
    /// Path part of `login_path`; requests under it are never redirected
    login_page: String,
}

impl AccessPolicy {
    /// `protected_prefix` is matched per path segment (`/admin` covers
    /// `/admin` and `/admin/…`, not `/administrator`).
    ///
    /// `login_path` must be an absolute path usable as a `Location` header.
    pub fn new(
        protected_prefix: impl Into<String>,
        login_path: impl Into<String>,
    ) -> AccessResult<Self> {
        let protected_prefix = protected_prefix.into().trim_end_matches('/').to_string();
        let login_path = login_path.into();

        let login_page = login_path
            .split_once('?')
            .map_or(login_path.as_str(), |(page, _)| page);

        if !login_page.starts_with('/') {
            return Err(AccessError::InvalidGateConfig(format!(
                "login path must start with '/': {:?}",
                login_path
            )));
        }

        if HeaderValue::from_str(&login_path).is_err() {
            return Err(AccessError::InvalidGateConfig(format!(
                "login path is not a valid header value: {:?}",
                login_path
            )));
        }

        Ok(Self {
            protected_prefix,
            login_page: login_page.to_string(),
            login_path,
        })
    }

    pub fn protected_prefix(&self) -> &str {
        &self.protected_prefix
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Whether the policy applies to `path` at all
    pub fn protects(&self, path: &str) -> bool {
        if self.protected_prefix.is_empty() {
            return true;
        }

        match path.strip_prefix(self.protected_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Decide access for `path`
    ///
    /// `now_secs` is the current Unix time in whole seconds.
    pub fn evaluate(
        &self,
        path: &str,
        claim: Option<&SessionClaim>,
        now_secs: i64,
    ) -> AccessDecision {
        if !self.protects(path) || path.starts_with(&self.login_page) {
            return AccessDecision::Allow;
        }

        let standing = claim
            .map(|c| c.admin_standing(now_secs))
            .unwrap_or(AdminStanding::NotAdmin);

        match standing {
            AdminStanding::Admin => AccessDecision::Allow,
            AdminStanding::Expired => AccessDecision::RedirectExpired {
                callback_url: path.to_string(),
            },
            AdminStanding::NotAdmin => AccessDecision::RedirectUnauthorized {
                callback_url: path.to_string(),
            },
        }
    }

    /// Sign-in location for a redirect decision, `None` for [`AccessDecision::Allow`]
    ///
    /// `<login_path>?callbackUrl=<encoded path>[&reason=admin-session-expired]`
    pub fn redirect_location(&self, decision: &AccessDecision) -> Option<String> {
        let callback_url = decision.callback_url()?;
        let separator = if self.login_path.contains('?') { '&' } else { '?' };

        let mut location = format!(
            "{}{}callbackUrl={}",
            self.login_path,
            separator,
            urlencoding::encode(callback_url)
        );

        if let Some(reason) = decision.reason() {
            location.push_str("&reason=");
            location.push_str(reason.as_str());
        }

        Some(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;

    const NOW: i64 = 1_700_000_000;

    fn policy() -> AccessPolicy {
        AccessPolicy::new("/admin", "/admin/login").unwrap()
    }

    #[test]
    fn test_protects_segment_aware() {
        let policy = policy();
        assert!(policy.protects("/admin"));
        assert!(policy.protects("/admin/"));
        assert!(policy.protects("/admin/products/12"));
        assert!(!policy.protects("/administrator"));
        assert!(!policy.protects("/cart"));
        assert!(!policy.protects("/"));
    }

    #[test]
    fn test_trailing_slash_prefix() {
        let policy = AccessPolicy::new("/admin/", "/admin/login").unwrap();
        assert_eq!(policy.protected_prefix(), "/admin");
        assert!(policy.protects("/admin/orders"));
    }

    #[test]
    fn test_unprotected_path_allowed_without_claim() {
        assert_eq!(policy().evaluate("/products", None, NOW), AccessDecision::Allow);
    }

    #[test]
    fn test_login_path_always_allowed() {
        let policy = policy();
        let expired = SessionClaim::new(Some(UserRole::Admin), Some(NOW - 1));
        let user = SessionClaim::new(Some(UserRole::User), None);

        assert!(policy.evaluate("/admin/login", None, NOW).is_allowed());
        assert!(policy.evaluate("/admin/login", Some(&expired), NOW).is_allowed());
        assert!(policy.evaluate("/admin/login/otp", Some(&user), NOW).is_allowed());
    }

    #[test]
    fn test_missing_claim_redirects() {
        let decision = policy().evaluate("/admin/orders", None, NOW);
        assert_eq!(
            decision,
            AccessDecision::RedirectUnauthorized {
                callback_url: "/admin/orders".to_string()
            }
        );
        assert_eq!(decision.reason(), None);
    }

    #[test]
    fn test_admin_expired_redirects_with_reason() {
        let claim = SessionClaim::new(Some(UserRole::Admin), Some(NOW - 1));
        let decision = policy().evaluate("/admin/orders", Some(&claim), NOW);

        assert_eq!(decision.reason(), Some(RedirectReason::AdminSessionExpired));
        assert_eq!(decision.callback_url(), Some("/admin/orders"));
    }

    #[test]
    fn test_redirect_location_unauthorized() {
        let policy = policy();
        let decision = policy.evaluate("/admin/products/new", None, NOW);

        assert_eq!(
            policy.redirect_location(&decision).as_deref(),
            Some("/admin/login?callbackUrl=%2Fadmin%2Fproducts%2Fnew")
        );
    }

    #[test]
    fn test_redirect_location_expired() {
        let policy = policy();
        let claim = SessionClaim::new(Some(UserRole::Admin), Some(NOW - 60));
        let decision = policy.evaluate("/admin", Some(&claim), NOW);

        assert_eq!(
            policy.redirect_location(&decision).as_deref(),
            Some("/admin/login?callbackUrl=%2Fadmin&reason=admin-session-expired")
        );
    }

    #[test]
    fn test_redirect_location_login_path_with_query() {
        let policy = AccessPolicy::new("/admin", "/auth/signin?panel=admin").unwrap();
        let decision = policy.evaluate("/admin", None, NOW);

        assert_eq!(
            policy.redirect_location(&decision).as_deref(),
            Some("/auth/signin?panel=admin&callbackUrl=%2Fadmin")
        );
    }

    #[test]
    fn test_login_path_with_query_reachable() {
        let policy = AccessPolicy::new("/admin", "/admin/login?panel=1").unwrap();

        assert!(policy.evaluate("/admin/login", None, NOW).is_allowed());
        assert!(policy.evaluate("/admin/login/otp", None, NOW).is_allowed());

        let decision = policy.evaluate("/admin/orders", None, NOW);
        assert_eq!(
            policy.redirect_location(&decision).as_deref(),
            Some("/admin/login?panel=1&callbackUrl=%2Fadmin%2Forders")
        );
    }

    #[test]
    fn test_unusable_login_paths_rejected() {
        for login_path in ["", "?panel=1", "admin/login", "https://shop.example/login", "/admin/\nlogin"] {
            assert!(
                matches!(
                    AccessPolicy::new("/admin", login_path),
                    Err(AccessError::InvalidGateConfig(_))
                ),
                "accepted {login_path:?}"
            );
        }
    }

    #[test]
    fn test_allow_has_no_location() {
        assert_eq!(policy().redirect_location(&AccessDecision::Allow), None);
    }
}
