//! Summary generation and experience-description improvement.
//!
//! Both operations read a slice of the document, never write it, and never fail:
//! a provider error is logged and replaced with a fixed human-readable string so
//! the caller can write it straight into the target field.

use tracing::{error, info};

use crate::generation::prompts::{IMPROVEMENT_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::{ExperienceEntry, ResumeDocument};

/// Written into the summary field when generation fails.
pub const SUMMARY_FAILURE: &str = "Error: Could not generate summary.";

/// Written into the experience description when improvement fails.
pub const IMPROVEMENT_FAILURE: &str = "Error: Could not get suggestions.";

// ────────────────────────────────────────────────────────────────────────────
// Prompt construction
// ────────────────────────────────────────────────────────────────────────────

pub fn build_summary_prompt(doc: &ResumeDocument) -> String {
    let experience_text = doc
        .experience
        .iter()
        .map(|exp| {
            format!(
                "Job: {} at {}. Description: {}",
                exp.job_title, exp.company, exp.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    SUMMARY_PROMPT_TEMPLATE
        .replace("{full_name}", &doc.personal_info.full_name)
        .replace("{experience_text}", &experience_text)
        .replace("{skills_text}", &doc.skills.join(", "))
}

pub fn build_improvement_prompt(entry: &ExperienceEntry) -> String {
    IMPROVEMENT_PROMPT_TEMPLATE
        .replace("{job_title}", &entry.job_title)
        .replace("{description}", &entry.description)
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Generates a 2–4 sentence third-person summary from the whole document.
pub async fn generate_summary(generator: &dyn TextGenerator, doc: &ResumeDocument) -> String {
    let prompt = build_summary_prompt(doc);
    info!(
        "Generating summary from {} experience entries and {} skills",
        doc.experience.len(),
        doc.skills.len()
    );
    recover(generator.complete(&prompt).await, SUMMARY_FAILURE)
}

/// Rewrites one entry's description as dash-prefixed achievement bullets.
pub async fn improve_experience(generator: &dyn TextGenerator, entry: &ExperienceEntry) -> String {
    let prompt = build_improvement_prompt(entry);
    info!("Improving description for experience entry {}", entry.id);
    recover(generator.complete(&prompt).await, IMPROVEMENT_FAILURE)
}

/// Converts a provider failure into its fallback string.
pub fn recover(result: Result<String, LlmError>, fallback: &str) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            error!("Text generation failed: {e}");
            fallback.to_string()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Records every prompt and answers with a fixed reply or a failure.
    pub(crate) struct ScriptedGenerator {
        reply: Option<String>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::Api {
                    status: 503,
                    message: "simulated network failure".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_summary_prompt_includes_name_jobs_and_skills() {
        let doc = ResumeDocument::seeded();
        let prompt = build_summary_prompt(&doc);
        assert!(prompt.contains("for a person named Your Name"));
        assert!(prompt.contains("Job: Software Engineer at Tech Solutions Inc.. Description: - Developed"));
        assert!(prompt.contains("React, TypeScript, Node.js, Tailwind CSS"));
        assert!(prompt.contains("2-4 sentences"));
        assert!(prompt.contains("Do not use personal pronouns"));
    }

    #[test]
    fn test_summary_prompt_lists_one_line_per_job() {
        let mut doc = ResumeDocument::seeded();
        let mut second = ExperienceEntry::blank();
        second.job_title = "Intern".to_string();
        second.company = "Startup".to_string();
        doc.experience.push(second);

        let prompt = build_summary_prompt(&doc);
        assert_eq!(prompt.matches("Job: ").count(), 2);
        assert!(prompt.contains("Job: Intern at Startup. Description: "));
    }

    #[test]
    fn test_improvement_prompt_constrains_format() {
        let mut entry = ExperienceEntry::blank();
        entry.job_title = "Data Engineer".to_string();
        entry.description = "Made pipelines".to_string();

        let prompt = build_improvement_prompt(&entry);
        assert!(prompt.contains(r#"The job title was "Data Engineer""#));
        assert!(prompt.contains("bulleted list format (using '-')"));
        assert!(prompt.contains("do not add any introductory text"));
        assert!(prompt.contains("Original Description:\nMade pipelines"));
    }

    #[tokio::test]
    async fn test_generate_summary_returns_text_verbatim() {
        let generator = ScriptedGenerator::replying("  Seasoned engineer.\n");
        let doc = ResumeDocument::seeded();
        let summary = generate_summary(&generator, &doc).await;
        assert_eq!(summary, "  Seasoned engineer.\n");
        assert_eq!(generator.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_summary_failure_returns_literal_and_leaves_document() {
        let generator = ScriptedGenerator::failing();
        let doc = ResumeDocument::seeded();
        let before = doc.clone();

        let summary = generate_summary(&generator, &doc).await;

        assert_eq!(summary, SUMMARY_FAILURE);
        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_improve_experience_failure_returns_literal() {
        let generator = ScriptedGenerator::failing();
        let entry = ResumeDocument::seeded().experience[0].clone();
        assert_eq!(
            improve_experience(&generator, &entry).await,
            IMPROVEMENT_FAILURE
        );
    }

    #[tokio::test]
    async fn test_improve_experience_sends_entry_prompt() {
        let generator = ScriptedGenerator::replying("- Cut latency 30%");
        let entry = ResumeDocument::seeded().experience[0].clone();
        let text = improve_experience(&generator, &entry).await;
        assert_eq!(text, "- Cut latency 30%");
        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains(r#"The job title was "Software Engineer""#));
    }
}
