//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

use crate::application::config::GatewayConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::provider::{IdentityProvider, ProfileMirror};
use crate::error::GatewayResult;
use crate::presentation::dto::{
    HealthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SessionUser,
};

/// Fixed confirmation returned on successful registration
pub const SIGNUP_CONFIRMATION: &str = "Signup successful. Please verify your email.";

/// Shared state for gateway handlers
///
/// One provider handle serves both traits; it is constructed once at
/// startup and injected here, never accessed through a global.
#[derive(Clone)]
pub struct GatewayState<C>
where
    C: IdentityProvider + ProfileMirror + Clone + Send + Sync + 'static,
{
    pub provider: Arc<C>,
    pub config: Arc<GatewayConfig>,
}

// ============================================================================
// Health
// ============================================================================

/// GET /
pub async fn health<C>(State(state): State<GatewayState<C>>) -> Json<HealthResponse>
where
    C: IdentityProvider + ProfileMirror + Clone + Send + Sync + 'static,
{
    Json(HealthResponse {
        ok: true,
        service: state.config.service_name.clone(),
        status: "online",
    })
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<C>(
    State(state): State<GatewayState<C>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> GatewayResult<Json<RegisterResponse>>
where
    C: IdentityProvider + ProfileMirror + Clone + Send + Sync + 'static,
{
    // An absent or malformed body is treated as the empty request shape,
    // so it fails the same schema check as a missing field.
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    let use_case = RegisterUseCase::new(state.provider.clone());

    use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
            full_name: req.full_name,
        })
        .await?;

    Ok(Json(RegisterResponse {
        ok: true,
        message: SIGNUP_CONFIRMATION,
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<C>(
    State(state): State<GatewayState<C>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> GatewayResult<Json<LoginResponse>>
where
    C: IdentityProvider + ProfileMirror + Clone + Send + Sync + 'static,
{
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    let use_case = LoginUseCase::new(state.provider.clone(), state.provider.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        ok: true,
        user: SessionUser {
            id: output.user.id,
            email: output.user.email,
        },
        access_token: output.access_token,
    }))
}
