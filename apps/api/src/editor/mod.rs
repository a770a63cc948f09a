// Mutation engine for the résumé document, plus the HTTP handlers that drive it.
// Every operation is pure: it reads the current document and returns the next one.

pub mod handlers;
pub mod mutation;

pub use mutation::{Edit, FieldTarget, MutationError, ScalarField};
