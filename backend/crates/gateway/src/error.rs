//! Gateway Error Types
//!
//! This module provides gateway-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Three caller-visible kinds exist: validation failures and provider
//! rejections surface as 400 with their message, everything else is a 500
//! whose detail is logged server-side and never disclosed.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::credentials::MissingCredentials;

/// Message returned to callers for any unexpected fault
const GENERIC_SERVER_ERROR: &str = "Server error";

/// Gateway-specific result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway-specific error variants
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request failed the input schema check
    #[error("{0}")]
    Validation(String),

    /// The identity provider rejected the operation; message is relayed verbatim
    #[error("{0}")]
    Provider(String),

    /// The outbound call itself failed (connect, TLS, decode)
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Validation(_) | GatewayError::Provider(_) => ErrorKind::BadRequest,
            GatewayError::Transport(_) | GatewayError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// 500-class errors always carry the fixed generic message; their
    /// detail only exists in the server log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            GatewayError::Validation(msg) | GatewayError::Provider(msg) => {
                AppError::new(self.kind(), msg.clone())
            }
            GatewayError::Transport(_) | GatewayError::Internal(_) => {
                AppError::new(self.kind(), GENERIC_SERVER_ERROR)
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GatewayError::Transport(e) => {
                tracing::error!(error = %e, "Upstream transport error");
            }
            GatewayError::Internal(msg) => {
                tracing::error!(message = %msg, "Gateway internal error");
            }
            GatewayError::Provider(msg) => {
                tracing::warn!(message = %msg, "Identity provider rejected request");
            }
            GatewayError::Validation(_) => {
                tracing::debug!(error = %self, "Request validation failed");
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<MissingCredentials> for GatewayError {
    fn from(err: MissingCredentials) -> Self {
        GatewayError::Validation(err.to_string())
    }
}
