//! Axum route handlers for document edits.
//!
//! Each handler turns one presentation-layer intent into an `Edit`, applies it
//! under the session lock, and returns the new document.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::editor::mutation::{Edit, FieldTarget};
use crate::errors::AppError;
use crate::models::{Entry, ListSection, ResumeDocument};
use crate::render::render_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub target: FieldTarget,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub raw: String,
}

async fn apply_edit(state: &AppState, edit: Edit) -> Result<ResumeDocument, AppError> {
    let mut session = state.session.lock().await;
    let doc = session.apply(&edit)?;
    Ok(doc.clone())
}

/// GET /api/v1/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.session.lock().await.document().clone())
}

/// GET /api/v1/document/preview
pub async fn handle_preview(State(state): State<AppState>) -> String {
    render_text(state.session.lock().await.document())
}

/// PATCH /api/v1/document/field
pub async fn handle_set_field(
    State(state): State<AppState>,
    Json(req): Json<SetFieldRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = apply_edit(
        &state,
        Edit::SetField {
            target: req.target,
            value: req.value,
        },
    )
    .await?;
    Ok(Json(doc))
}

/// POST /api/v1/document/:section/entries
///
/// Appends a blank entry with a freshly generated id.
pub async fn handle_append_entry(
    State(state): State<AppState>,
    Path(section): Path<ListSection>,
) -> Result<(StatusCode, Json<ResumeDocument>), AppError> {
    let entry = Entry::blank(section);
    tracing::debug!("Appending {} entry {}", section, entry.id());
    let doc = apply_edit(&state, Edit::Append { section, entry }).await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

/// DELETE /api/v1/document/:section/entries/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((section, index)): Path<(ListSection, usize)>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = apply_edit(&state, Edit::Remove { section, index }).await?;
    Ok(Json(doc))
}

/// PUT /api/v1/document/skills
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = apply_edit(&state, Edit::ReplaceSkills { raw: req.raw }).await?;
    Ok(Json(doc))
}
