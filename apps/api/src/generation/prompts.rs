// Prompt templates for the two generation workflows.
// Placeholders are filled with `str::replace` by generation::pipeline.

/// Summary prompt. Replace: {full_name}, {experience_text}, {skills_text}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Based on the following resume details, write a concise and professional summary of 2-4 sentences for a person named {full_name}.
Highlight key skills and experience. Write in the third person. Do not use personal pronouns like "I" or "My".

Experience:
{experience_text}

Skills:
{skills_text}

Summary:"#;

/// Experience rewrite prompt. Replace: {job_title}, {description}
pub const IMPROVEMENT_PROMPT_TEMPLATE: &str = r#"Rewrite the following job description for a resume to be more impactful. Use strong action verbs and focus on achievements and quantifiable results.
The job title was "{job_title}". Keep the output in a bulleted list format (using '-') and do not add any introductory text.

Original Description:
{description}

Improved Description:"#;
