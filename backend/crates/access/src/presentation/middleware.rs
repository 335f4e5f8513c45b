//! Admin Gate Middleware
//!
//! Runs ahead of every admin route: reads the session token, asks
//! [`CheckAccessUseCase`] for a decision and either forwards the request or
//! redirects to the sign-in page.

use axum::body::Body;
use axum::extract::{OriginalUri, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckAccessUseCase;
use crate::application::config::GateConfig;
use crate::domain::entity::session_claim::SessionClaim;
use crate::domain::policy::AccessPolicy;
use crate::error::AccessResult;
use crate::infra::session_token::SessionTokenCodec;

/// Middleware state
#[derive(Clone)]
pub struct AdminGateState {
    pub config: Arc<GateConfig>,
    pub policy: Arc<AccessPolicy>,
    pub codec: Arc<SessionTokenCodec>,
}

impl AdminGateState {
    pub fn new(config: GateConfig) -> AccessResult<Self> {
        Ok(Self {
            policy: Arc::new(config.policy()?),
            codec: Arc::new(SessionTokenCodec::new(config.session_secret)),
            config: Arc::new(config),
        })
    }
}

/// Gate result stored in request extensions for downstream handlers
#[derive(Debug, Clone)]
pub struct GateContext {
    pub claim: Option<SessionClaim>,
    /// Unix time (seconds) the decision was made at
    pub checked_at: i64,
}

/// Middleware that guards the admin area
pub async fn admin_gate(
    State(state): State<AdminGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // Nested routers see a stripped URI
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let token =
        platform::cookie::extract_session_token(req.headers(), &state.config.session_cookie_name);

    let now = chrono::Utc::now().timestamp();
    let use_case = CheckAccessUseCase::new(state.policy.clone(), state.codec.clone());
    let output = use_case.execute(&path, token.as_deref(), now);

    if let Some(location) = state.policy.redirect_location(&output.decision) {
        return Redirect::temporary(&location).into_response();
    }

    req.extensions_mut().insert(GateContext {
        claim: output.claim,
        checked_at: now,
    });

    next.run(req).await
}
