//! Background generation tasks.
//!
//! The session lock is held only to begin and to complete an operation; the
//! provider call itself runs unlocked, raced against cancellation and a timeout.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use crate::generation::pipeline::{
    generate_summary, improve_experience, recover, IMPROVEMENT_FAILURE, SUMMARY_FAILURE,
};
use crate::llm_client::{LlmError, TextGenerator};
use crate::session::editor::{
    Completion, DropReason, EditorSession, GenerationInput, SessionError,
};
use crate::session::loading::OperationKey;

pub type SharedSession = Arc<Mutex<EditorSession>>;

pub fn shared(session: EditorSession) -> SharedSession {
    Arc::new(Mutex::new(session))
}

/// Begins `key` on the session and spawns the generation call.
///
/// Fails immediately (nothing spawned) if the operation is already running or
/// its entry does not exist.
pub async fn spawn_generation(
    session: SharedSession,
    generator: Arc<dyn TextGenerator>,
    key: OperationKey,
    timeout: Duration,
) -> Result<JoinHandle<Completion>, SessionError> {
    let ticket = session.lock().await.begin(key)?;

    Ok(tokio::spawn(async move {
        let token = ticket.token.clone();
        let text = tokio::select! {
            _ = token.cancelled() => None,
            text = run(generator.as_ref(), &ticket.input, timeout) => Some(text),
        };

        match text {
            Some(text) => session.lock().await.complete(ticket, text),
            None => {
                info!("{} cancelled before the provider answered", ticket.key);
                Completion::Dropped(DropReason::Cancelled)
            }
        }
    }))
}

async fn run(generator: &dyn TextGenerator, input: &GenerationInput, timeout: Duration) -> String {
    let (call, fallback) = match input {
        GenerationInput::Summary(doc) => (
            tokio::time::timeout(timeout, generate_summary(generator, doc)).await,
            SUMMARY_FAILURE,
        ),
        GenerationInput::Experience(entry) => (
            tokio::time::timeout(timeout, improve_experience(generator, entry)).await,
            IMPROVEMENT_FAILURE,
        ),
    };

    match call {
        Ok(text) => text,
        Err(_) => recover(
            Err(LlmError::Timeout {
                secs: timeout.as_secs(),
            }),
            fallback,
        ),
    }
}
