use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::ResumeDocument;
use crate::session::OperationKey;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingResponse {
    pub in_flight: Vec<OperationKey>,
}

/// GET /api/v1/loading
pub async fn handle_loading(State(state): State<AppState>) -> Json<LoadingResponse> {
    let session = state.session.lock().await;
    Json(LoadingResponse {
        in_flight: session.loading().in_flight(),
    })
}

/// POST /api/v1/session/reset
///
/// Cancels in-flight generation and restores the seeded document.
pub async fn handle_reset(State(state): State<AppState>) -> Json<ResumeDocument> {
    let mut session = state.session.lock().await;
    Json(session.reset().clone())
}
