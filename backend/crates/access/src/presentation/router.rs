//! Routers

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::repository::{OtpVerifier, PhoneRegistry};
use crate::error::AccessResult;
use crate::presentation::handlers::{self, RegistrationAppState};
use crate::presentation::middleware::{AdminGateState, admin_gate};

/// Stateless phone helpers
pub fn phone_router() -> Router {
    Router::new().route("/validate", post(handlers::validate_phone))
}

/// Phone helpers plus registration, for any registry / OTP backend
///
/// The crate ships no storage or OTP delivery. The host application
/// implements [`PhoneRegistry`] over its user store and [`OtpVerifier`] over
/// its notification service, then mounts this router in place of
/// [`phone_router`]. The bundled `api` binary has neither, so it serves only
/// `/validate`.
pub fn registration_router_generic<R, O>(registry: R, otp: O) -> Router
where
    R: PhoneRegistry + Send + Sync + 'static,
    O: OtpVerifier + Send + Sync + 'static,
{
    let state = RegistrationAppState {
        registry: Arc::new(registry),
        otp: Arc::new(otp),
    };

    Router::new()
        .route(
            "/availability",
            post(handlers::phone_availability::<R, O>),
        )
        .route("/register", post(handlers::register_phone::<R, O>))
        .with_state(state)
        .merge(phone_router())
}

/// Admin API routes; mount under the protected prefix behind [`with_admin_gate`]
pub fn admin_router() -> Router {
    Router::new().route("/session", get(handlers::admin_session))
}

/// Put the admin gate in front of every route of `app`
///
/// Apply to the top-level router so the gate sees full request paths;
/// routes outside the protected prefix pass straight through.
///
/// Fails when `config.login_path` cannot be used as a redirect target.
pub fn with_admin_gate(app: Router, config: GateConfig) -> AccessResult<Router> {
    let state = AdminGateState::new(config)?;
    Ok(app.layer(from_fn_with_state(state, admin_gate)))
}
