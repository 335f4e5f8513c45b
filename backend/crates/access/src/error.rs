//! Access Error Types
//!
//! Access-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Access-specific result type alias
pub type AccessResult<T> = Result<T, AccessError>;

#[derive(Debug, Error)]
pub enum AccessError {
    /// Phone number does not normalize to a valid mobile number
    #[error("Invalid mobile number")]
    InvalidPhoneNumber,

    #[error("Phone number already registered")]
    PhoneNumberTaken,

    /// OTP code missing or wrong
    #[error("One-time code rejected")]
    OtpRejected,

    /// OTP provider could not be reached
    #[error("OTP service unavailable: {0}")]
    OtpUnavailable(String),

    /// Session token failed signature or format checks
    #[error("Invalid session token: {0}")]
    SessionToken(#[from] platform::token::TokenError),

    /// Session token payload is not a claims object
    #[error("Invalid session claims: {0}")]
    SessionClaims(#[from] serde_json::Error),

    /// Session token past its `exp`
    #[error("Session token expired")]
    SessionExpired,

    /// Gate settings that cannot produce a working redirect
    #[error("Invalid gate configuration: {0}")]
    InvalidGateConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccessError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccessError::InvalidPhoneNumber => StatusCode::BAD_REQUEST,
            AccessError::PhoneNumberTaken => StatusCode::CONFLICT,
            AccessError::OtpRejected
            | AccessError::SessionToken(_)
            | AccessError::SessionClaims(_)
            | AccessError::SessionExpired => StatusCode::UNAUTHORIZED,
            AccessError::OtpUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AccessError::InvalidGateConfig(_) | AccessError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::InvalidPhoneNumber => ErrorKind::BadRequest,
            AccessError::PhoneNumberTaken => ErrorKind::Conflict,
            AccessError::OtpRejected
            | AccessError::SessionToken(_)
            | AccessError::SessionClaims(_)
            | AccessError::SessionExpired => ErrorKind::Unauthorized,
            AccessError::OtpUnavailable(_) => ErrorKind::ServiceUnavailable,
            AccessError::InvalidGateConfig(_) | AccessError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AccessError::InvalidPhoneNumber => {
                err.with_action("Enter an Iranian mobile number, e.g. 0912 123 4567")
            }
            AccessError::PhoneNumberTaken => err.with_action("Sign in with this number instead"),
            AccessError::OtpRejected => err.with_action("Request a new code and try again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccessError::Internal(msg) => {
                tracing::error!(message = %msg, "Access internal error");
            }
            AccessError::InvalidGateConfig(msg) => {
                tracing::error!(message = %msg, "Invalid gate configuration");
            }
            AccessError::OtpUnavailable(msg) => {
                tracing::error!(message = %msg, "OTP service unavailable");
            }
            AccessError::OtpRejected => {
                tracing::warn!("OTP verification failed");
            }
            AccessError::SessionToken(e) => {
                tracing::warn!(error = %e, "Rejected session token");
            }
            _ => {
                tracing::debug!(error = %self, "Access error");
            }
        }
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
