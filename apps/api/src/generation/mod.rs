// Generation Pipeline: builds an instruction from document data, calls the
// text generator, and returns either the generated text or a literal failure string.
// All provider calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod pipeline;
pub mod prompts;

pub use pipeline::{
    generate_summary, improve_experience, IMPROVEMENT_FAILURE, SUMMARY_FAILURE,
};
