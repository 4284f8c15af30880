//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Provides the wire envelope and the axum [`IntoResponse`] implementation
//! (feature-gated so non-HTTP consumers don't pull in axum).

use serde::Serialize;

use super::app_error::AppError;

/// Wire envelope for failed requests
///
/// Every error response has the shape `{"ok": false, "error": <message>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            ok: false,
            error: err.message().to_string(),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
