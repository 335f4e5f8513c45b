//! HTTP Handlers

use axum::extract::State;
use axum::{Extension, Json};
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::{RegisterPhoneInput, RegisterPhoneUseCase};
use crate::domain::repository::{OtpVerifier, PhoneRegistry};
use crate::domain::value_object::phone_number;
use crate::error::AccessResult;
use crate::presentation::dto::{
    AdminSessionResponse, PhoneAvailabilityResponse, PhoneRequest, PhoneValidationResponse,
    RegisterPhoneRequest, RegisterPhoneResponse,
};
use crate::presentation::middleware::GateContext;

/// Shared state for registration handlers
pub struct RegistrationAppState<R, O>
where
    R: PhoneRegistry + Send + Sync + 'static,
    O: OtpVerifier + Send + Sync + 'static,
{
    pub registry: Arc<R>,
    pub otp: Arc<O>,
}

// Manual impl: `R` and `O` themselves need not be `Clone`
impl<R, O> Clone for RegistrationAppState<R, O>
where
    R: PhoneRegistry + Send + Sync + 'static,
    O: OtpVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            otp: self.otp.clone(),
        }
    }
}

// ============================================================================
// Phone validation
// ============================================================================

/// POST /api/phone/validate
pub async fn validate_phone(Json(req): Json<PhoneRequest>) -> Json<PhoneValidationResponse> {
    let normalized = phone_number::normalize(&req.phone);
    let valid = phone_number::validate(&normalized);

    Json(PhoneValidationResponse { valid, normalized })
}

/// POST /api/phone/availability
pub async fn phone_availability<R, O>(
    State(state): State<RegistrationAppState<R, O>>,
    Json(req): Json<PhoneRequest>,
) -> AccessResult<Json<PhoneAvailabilityResponse>>
where
    R: PhoneRegistry + Send + Sync + 'static,
    O: OtpVerifier + Send + Sync + 'static,
{
    let use_case = RegisterPhoneUseCase::new(state.registry.clone(), state.otp.clone());
    let output = use_case.check_availability(&req.phone).await?;

    Ok(Json(PhoneAvailabilityResponse {
        phone: output.phone.into_db(),
        available: output.available,
    }))
}

/// POST /api/phone/register
pub async fn register_phone<R, O>(
    State(state): State<RegistrationAppState<R, O>>,
    Json(req): Json<RegisterPhoneRequest>,
) -> AccessResult<Json<RegisterPhoneResponse>>
where
    R: PhoneRegistry + Send + Sync + 'static,
    O: OtpVerifier + Send + Sync + 'static,
{
    let use_case = RegisterPhoneUseCase::new(state.registry.clone(), state.otp.clone());

    let input = RegisterPhoneInput {
        phone: req.phone,
        otp_code: req.otp_code,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(RegisterPhoneResponse {
        phone: output.phone.into_db(),
    }))
}

// ============================================================================
// Admin session
// ============================================================================

/// GET /admin/session
///
/// Must sit behind the admin gate, which supplies [`GateContext`].
pub async fn admin_session(
    Extension(ctx): Extension<GateContext>,
) -> Result<Json<AdminSessionResponse>, AppError> {
    let claim = ctx
        .claim
        .ok_or_else(|| AppError::unauthorized("No admin session"))?;

    Ok(Json(AdminSessionResponse {
        role: claim.role.map(|r| r.code().to_string()),
        remaining_secs: claim.admin_remaining_secs(ctx.checked_at),
        subject: claim.subject,
        admin_expires_at: claim.admin_expires_at,
    }))
}
