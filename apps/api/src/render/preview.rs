use chrono::NaiveDate;

use crate::models::{PersonalInfo, ResumeDocument};

/// Shown in place of an empty end date.
pub const PRESENT: &str = "Present";

/// Splits a description into display bullets.
///
/// Blank lines are dropped, a single leading `-` is stripped, and the rest is trimmed.
pub fn description_bullets(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.strip_prefix('-').unwrap_or(line).trim())
        .collect()
}

/// Skills as displayed: empty strings are stored but never shown.
pub fn visible_skills(skills: &[String]) -> Vec<&str> {
    skills
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect()
}

/// `"2020-01-01"` → `"Jan 2020"`, `""` → `"Present"`. Anything else passes through.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return PRESENT.to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn contact_line(info: &PersonalInfo) -> String {
    [
        info.email.as_str(),
        info.phone_number.as_str(),
        info.address.as_str(),
        info.website.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

/// Renders the whole document as plain text. Sections with nothing to show are omitted.
pub fn render_text(doc: &ResumeDocument) -> String {
    let mut out = String::new();

    out.push_str(&doc.personal_info.full_name);
    out.push('\n');
    let contact = contact_line(&doc.personal_info);
    if !contact.is_empty() {
        out.push_str(&contact);
        out.push('\n');
    }

    if !doc.summary.is_empty() {
        push_heading(&mut out, "Summary");
        out.push_str(&doc.summary);
        out.push('\n');
    }

    if !doc.experience.is_empty() {
        push_heading(&mut out, "Experience");
        for exp in &doc.experience {
            out.push_str(&format!(
                "{} ({} - {})\n",
                exp.job_title,
                format_date(&exp.start_date),
                format_date(&exp.end_date)
            ));
            out.push_str(&format!("{}, {}\n", exp.company, exp.location));
            for bullet in description_bullets(&exp.description) {
                out.push_str(&format!("  • {bullet}\n"));
            }
        }
    }

    if !doc.education.is_empty() {
        push_heading(&mut out, "Education");
        for edu in &doc.education {
            out.push_str(&format!(
                "{} ({})\n{}, {}\n",
                edu.degree,
                format_date(&edu.graduation_date),
                edu.school,
                edu.location
            ));
        }
    }

    if !doc.projects.is_empty() {
        push_heading(&mut out, "Projects");
        for project in &doc.projects {
            out.push_str(&project.name);
            if !project.link.is_empty() {
                out.push_str(&format!(" [{}]", project.link));
            }
            out.push('\n');
            out.push_str(&project.description);
            out.push('\n');
        }
    }

    let skills = visible_skills(&doc.skills);
    if !skills.is_empty() {
        push_heading(&mut out, "Skills");
        out.push_str(&skills.join(", "));
        out.push('\n');
    }

    out
}

fn push_heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&title.to_uppercase());
    out.push('\n');
}
