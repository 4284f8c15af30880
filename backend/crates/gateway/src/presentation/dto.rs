//! API DTOs (Data Transfer Objects)
//!
//! Request fields are all optional: presence is checked by the explicit
//! schema step in the domain layer, not by deserialization, so a missing
//! field yields the gateway's 400 envelope instead of a framework error.

use serde::{Deserialize, Serialize};

// ============================================================================
// Health
// ============================================================================

/// Health probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub status: &'static str,
}

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

/// Register response
///
/// Deliberately carries no identity, password, or token.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
    pub message: &'static str,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Identity attributes echoed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: SessionUser,
    /// Omitted entirely when the provider returned no token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}
