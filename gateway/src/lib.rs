//! HTTP surface for the ephemeral session broker.
//!
//! Routing, CORS, and error-to-status mapping live here; everything that
//! talks to the upstream provider lives in the `broker` crate.

pub mod api;
pub mod cors;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use broker::{BrokeredSession, SessionBroker};

use crate::api::{ApiError, LivenessResponse};

/// Fixed message for the liveness endpoint.
pub const LIVENESS_MESSAGE: &str = "Voice commerce agent backend is running!";

/// Shared per-process state: just the broker, behind an Arc so every
/// concurrent request sees the same immutable configuration.
#[derive(Clone)]
pub struct AppState {
    pub broker: Arc<SessionBroker>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/session", post(create_session))
        .layer(TraceLayer::new_for_http())
        .layer(cors::layer())
        .with_state(state)
}

// --- HANDLERS ---

async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

/// POST /session - mint an ephemeral key for the calling frontend.
///
/// Any request body is ignored; everything the upstream call needs comes
/// from process configuration.
async fn create_session(State(state): State<AppState>) -> Result<Json<BrokeredSession>, ApiError> {
    info!("session endpoint called, requesting ephemeral key from OpenAI");
    let session = state.broker.create_session().await?;
    Ok(Json(session))
}
