//! Axum route handlers for the Generation API.
//!
//! Both endpoints return as soon as the operation has started. The generated
//! text lands in the document when the provider answers; clients watch
//! `/api/v1/loading` to know when.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::EntryId;
use crate::session::{spawn_generation, OperationKey};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerationAccepted {
    pub operation: OperationKey,
}

async fn start(state: &AppState, key: OperationKey) -> Result<(StatusCode, Json<GenerationAccepted>), AppError> {
    // The join handle is dropped: the task runs detached and reports through the session.
    spawn_generation(
        state.session.clone(),
        state.generator.clone(),
        key,
        state.config.generation_timeout(),
    )
    .await?;
    Ok((StatusCode::ACCEPTED, Json(GenerationAccepted { operation: key })))
}

/// POST /api/v1/generate/summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<GenerationAccepted>), AppError> {
    start(&state, OperationKey::Summary).await
}

/// POST /api/v1/generate/experience/:id
pub async fn handle_improve_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<GenerationAccepted>), AppError> {
    start(&state, OperationKey::ImproveExperience(EntryId::from(id))).await
}
