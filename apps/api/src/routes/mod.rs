pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editor::handlers as document;
use crate::generation::handlers as generation;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route("/api/v1/document", get(document::handle_get_document))
        .route("/api/v1/document/preview", get(document::handle_preview))
        .route("/api/v1/document/field", patch(document::handle_set_field))
        .route("/api/v1/document/skills", put(document::handle_replace_skills))
        .route(
            "/api/v1/document/:section/entries",
            post(document::handle_append_entry),
        )
        .route(
            "/api/v1/document/:section/entries/:index",
            delete(document::handle_remove_entry),
        )
        // Session API
        .route("/api/v1/loading", get(session::handle_loading))
        .route("/api/v1/session/reset", post(session::handle_reset))
        // Generation API
        .route(
            "/api/v1/generate/summary",
            post(generation::handle_generate_summary),
        )
        .route(
            "/api/v1/generate/experience/:id",
            post(generation::handle_improve_experience),
        )
        .with_state(state)
}
