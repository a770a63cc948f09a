//! `EditorSession` — single writer of the document for one editing session.
//!
//! Write-back policy for generation results:
//! - the operation was cancelled (entry removed, session reset or dropped): result is dropped
//! - the target still exists: result overwrites the field, even if it was hand-edited meanwhile

use std::collections::HashMap;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::editor::mutation::{Edit, FieldTarget, MutationError, ScalarField};
use crate::models::{EntryField, EntryId, ExperienceEntry, ListSection, ResumeDocument};
use crate::session::loading::{LoadingTracker, OperationKey};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("operation {0} is already in flight")]
    AlreadyInFlight(OperationKey),

    #[error("experience entry {0} does not exist")]
    UnknownEntry(EntryId),
}

/// The document slice a generation operation reads.
#[derive(Debug, Clone)]
pub enum GenerationInput {
    Summary(ResumeDocument),
    Experience(ExperienceEntry),
}

/// Handed out by `begin`; redeemed by `complete` once the text is available.
#[derive(Debug)]
pub struct GenerationTicket {
    pub key: OperationKey,
    pub input: GenerationInput,
    pub token: CancellationToken,
    serial: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Cancelled,
    EntryRemoved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Dropped(DropReason),
}

struct InFlight {
    serial: u64,
    token: CancellationToken,
}

pub struct EditorSession {
    document: ResumeDocument,
    loading: LoadingTracker,
    cancel: CancellationToken,
    tasks: HashMap<OperationKey, InFlight>,
    next_serial: u64,
}

impl EditorSession {
    pub fn new(document: ResumeDocument) -> Self {
        Self {
            document,
            loading: LoadingTracker::new(),
            cancel: CancellationToken::new(),
            tasks: HashMap::new(),
            next_serial: 0,
        }
    }

    pub fn seeded() -> Self {
        Self::new(ResumeDocument::seeded())
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    /// Runs one mutation and swaps the result in. On error the document is unchanged.
    ///
    /// Operations tied to entries that the edit removed are cancelled.
    pub fn apply(&mut self, edit: &Edit) -> Result<&ResumeDocument, MutationError> {
        let next = edit.apply(&self.document)?;
        self.document = next;

        for key in self.loading.prune(&self.document) {
            if let Some(task) = self.tasks.remove(&key) {
                task.token.cancel();
            }
            info!("Cancelled {key}: its entry was removed");
        }

        Ok(&self.document)
    }

    /// Marks `key` in flight and snapshots the input it needs.
    pub fn begin(&mut self, key: OperationKey) -> Result<GenerationTicket, SessionError> {
        let input = match key {
            OperationKey::Summary => GenerationInput::Summary(self.document.clone()),
            OperationKey::ImproveExperience(id) => GenerationInput::Experience(
                self.document
                    .experience_by_id(id)
                    .cloned()
                    .ok_or(SessionError::UnknownEntry(id))?,
            ),
        };

        if !self.loading.start(key) {
            return Err(SessionError::AlreadyInFlight(key));
        }

        self.next_serial += 1;
        let serial = self.next_serial;
        let token = self.cancel.child_token();
        self.tasks.insert(
            key,
            InFlight {
                serial,
                token: token.clone(),
            },
        );
        debug!("Began {key} (serial {serial})");

        Ok(GenerationTicket {
            key,
            input,
            token,
            serial,
        })
    }

    /// Writes a generation result back and clears its loading flag.
    pub fn complete(&mut self, ticket: GenerationTicket, text: String) -> Completion {
        let current = self
            .tasks
            .get(&ticket.key)
            .is_some_and(|t| t.serial == ticket.serial);
        if ticket.token.is_cancelled() || !current {
            debug!("Dropping result of cancelled {}", ticket.key);
            return Completion::Dropped(DropReason::Cancelled);
        }

        self.tasks.remove(&ticket.key);
        self.loading.finish(ticket.key);

        let target = match ticket.key {
            OperationKey::Summary => FieldTarget::Scalar {
                field: ScalarField::Summary,
            },
            OperationKey::ImproveExperience(id) => match self.document.experience_index(id) {
                Some(index) => FieldTarget::List {
                    section: ListSection::Experience,
                    index,
                    field: EntryField::Description,
                },
                None => {
                    warn!("Dropping result of {}: entry no longer exists", ticket.key);
                    return Completion::Dropped(DropReason::EntryRemoved);
                }
            },
        };

        match self.apply(&Edit::SetField {
            target,
            value: text,
        }) {
            Ok(_) => {
                info!("Applied result of {}", ticket.key);
                Completion::Applied
            }
            Err(e) => {
                warn!("Dropping result of {}: {e}", ticket.key);
                Completion::Dropped(DropReason::EntryRemoved)
            }
        }
    }

    /// Cancels every in-flight operation and reinstates the seeded document.
    pub fn reset(&mut self) -> &ResumeDocument {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.tasks.clear();
        self.loading.clear();
        self.document = ResumeDocument::seeded();
        info!("Session reset to seeded document");
        &self.document
    }
}

impl Drop for EditorSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
