use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::session::SharedSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one editing session this process serves.
    pub session: SharedSession,
    /// Pluggable text generator. Default: `LlmClient`; tests swap in scripted doubles.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
