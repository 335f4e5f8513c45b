//! Session Claim Entity
//!
//! The authenticated facts the sign-in layer attaches to a request. Only the
//! role and the admin elevation expiry matter for access decisions.

use crate::domain::value_object::user_role::UserRole;

/// Where a claim stands with respect to admin access at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStanding {
    /// ADMIN role with no expiry, or an expiry not yet passed
    Admin,
    /// ADMIN role whose elevation has lapsed
    Expired,
    /// Any other role, or none at all
    NotAdmin,
}

/// Session claim entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionClaim {
    /// Account identifier from the sign-in layer (logging only)
    pub subject: Option<String>,
    /// Role at sign-in; `None` for unknown or missing roles
    pub role: Option<UserRole>,
    /// Admin elevation expiry (Unix timestamp, seconds); `None` never expires
    pub admin_expires_at: Option<i64>,
}

impl SessionClaim {
    pub fn new(role: Option<UserRole>, admin_expires_at: Option<i64>) -> Self {
        Self {
            subject: None,
            role,
            admin_expires_at,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Resolve admin standing at `now_secs`
    ///
    /// An expiry equal to `now_secs` is still valid.
    pub fn admin_standing(&self, now_secs: i64) -> AdminStanding {
        match (self.role, self.admin_expires_at) {
            (Some(UserRole::Admin), Some(expires_at)) if expires_at < now_secs => {
                AdminStanding::Expired
            }
            (Some(UserRole::Admin), _) => AdminStanding::Admin,
            _ => AdminStanding::NotAdmin,
        }
    }

    /// Seconds of admin elevation left, when admin and bounded
    pub fn admin_remaining_secs(&self, now_secs: i64) -> Option<i64> {
        match self.admin_standing(now_secs) {
            AdminStanding::Admin => self.admin_expires_at.map(|t| t - now_secs),
            _ => None,
        }
    }
}
