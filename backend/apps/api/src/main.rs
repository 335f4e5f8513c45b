//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use access::{GateConfig, admin_router, phone_router, with_admin_gate};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Gate configuration from the environment
///
/// Debug builds fall back to a random session secret; release builds
/// require `SESSION_SECRET` (base64, 32 bytes).
fn gate_config() -> anyhow::Result<GateConfig> {
    let mut config = if cfg!(debug_assertions) && env::var("SESSION_SECRET").is_err() {
        tracing::warn!("SESSION_SECRET not set, using a random secret");
        GateConfig::with_random_secret()
    } else {
        let secret_b64 = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must be set in production"))?;
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, secret_b64.trim())?;
        let session_secret: [u8; 32] = secret_bytes
            .try_into()
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to exactly 32 bytes"))?;
        GateConfig {
            session_secret,
            ..GateConfig::default()
        }
    };

    if let Ok(prefix) = env::var("ADMIN_PREFIX") {
        config.protected_prefix = prefix;
    }
    if let Ok(login_path) = env::var("ADMIN_LOGIN_PATH") {
        config.login_path = login_path;
    }
    if let Ok(cookie_name) = env::var("SESSION_COOKIE_NAME") {
        config.session_cookie_name = cookie_name;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,access=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gate_config = gate_config()?;
    tracing::info!(
        protected_prefix = %gate_config.protected_prefix,
        login_path = %gate_config.login_path,
        "Admin gate configured"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router; the gate wraps everything so it sees full paths
    let admin_api_prefix = format!(
        "{}/api",
        gate_config.protected_prefix.trim_end_matches('/')
    );
    // Registration needs host-provided storage and OTP backends
    // (`access::registration_router_generic`); this binary serves only the
    // stateless helpers.
    let app = Router::new()
        .nest("/api/phone", phone_router())
        .nest(&admin_api_prefix, admin_router());
    let app = with_admin_gate(app, gate_config)?
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:31113".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
