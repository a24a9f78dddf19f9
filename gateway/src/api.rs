use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use broker::BrokerError;

// Error envelope: every failure the frontend sees is {"detail": "..."}
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

// Liveness marker for GET /
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: String,
}

/// Broker failure crossing the HTTP boundary.
///
/// The broker decides the status code and the detail message; this wrapper
/// only shapes them into an axum response.
#[derive(Debug)]
pub struct ApiError(pub BrokerError);

impl From<BrokerError> for ApiError {
    fn from(err: BrokerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
