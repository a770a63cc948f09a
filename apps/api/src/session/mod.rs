// Editing session: the single owner of the current document, the per-operation
// loading flags, and the cancellation tokens of in-flight generation tasks.
// Mutations run under the session lock; generation calls run outside it.

pub mod editor;
pub mod handlers;
pub mod loading;
pub mod tasks;

pub use editor::{Completion, DropReason, EditorSession, GenerationTicket, SessionError};
pub use loading::{LoadingTracker, OperationKey};
pub use tasks::{shared, spawn_generation, SharedSession};
