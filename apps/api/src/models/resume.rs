//! The résumé document schema: one `ResumeDocument` per editing session.
//!
//! No field is ever absent. Unset values are empty strings or empty lists, so the
//! mutation engine never has to distinguish "missing" from "blank".

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Identifiers and section names
// ────────────────────────────────────────────────────────────────────────────

/// Stable identity of a list entry. Assigned once at creation, never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The three ordered list sections of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListSection {
    Experience,
    Education,
    Projects,
}

impl ListSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListSection::Experience => "experience",
            ListSection::Education => "education",
            ListSection::Projects => "projects",
        }
    }
}

impl fmt::Display for ListSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every field name that appears on any list entry shape.
/// Which names are valid depends on the section; see [`SectionEntry::field_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryField {
    JobTitle,
    Company,
    Location,
    StartDate,
    EndDate,
    Description,
    Degree,
    School,
    GraduationDate,
    Name,
    Link,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryField::JobTitle => "jobTitle",
            EntryField::Company => "company",
            EntryField::Location => "location",
            EntryField::StartDate => "startDate",
            EntryField::EndDate => "endDate",
            EntryField::Description => "description",
            EntryField::Degree => "degree",
            EntryField::School => "school",
            EntryField::GraduationDate => "graduationDate",
            EntryField::Name => "name",
            EntryField::Link => "link",
        };
        f.write_str(name)
    }
}

/// Fields of the personal-info record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    PhoneNumber,
    Address,
    Website,
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub website: String,
}

impl PersonalInfo {
    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Email => &mut self.email,
            PersonalField::PhoneNumber => &mut self.phone_number,
            PersonalField::Address => &mut self.address,
            PersonalField::Website => &mut self.website,
        }
    }
}

/// One job. An empty `end_date` means the position is ongoing.
/// `description` holds one bullet per line, optionally dash-prefixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub link: String,
}

/// Shared behavior of the three list entry shapes.
pub trait SectionEntry: Clone {
    const SECTION: ListSection;

    fn id(&self) -> EntryId;

    /// Returns the addressed field, or `None` when this shape has no such field.
    fn field_mut(&mut self, field: EntryField) -> Option<&mut String>;
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::new(),
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl SectionEntry for ExperienceEntry {
    const SECTION: ListSection = ListSection::Experience;

    fn id(&self) -> EntryId {
        self.id
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::JobTitle => Some(&mut self.job_title),
            EntryField::Company => Some(&mut self.company),
            EntryField::Location => Some(&mut self.location),
            EntryField::StartDate => Some(&mut self.start_date),
            EntryField::EndDate => Some(&mut self.end_date),
            EntryField::Description => Some(&mut self.description),
            _ => None,
        }
    }
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::new(),
            degree: String::new(),
            school: String::new(),
            location: String::new(),
            graduation_date: String::new(),
        }
    }
}

impl SectionEntry for EducationEntry {
    const SECTION: ListSection = ListSection::Education;

    fn id(&self) -> EntryId {
        self.id
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Degree => Some(&mut self.degree),
            EntryField::School => Some(&mut self.school),
            EntryField::Location => Some(&mut self.location),
            EntryField::GraduationDate => Some(&mut self.graduation_date),
            _ => None,
        }
    }
}

impl ProjectEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::new(),
            name: String::new(),
            description: String::new(),
            link: String::new(),
        }
    }
}

impl SectionEntry for ProjectEntry {
    const SECTION: ListSection = ListSection::Projects;

    fn id(&self) -> EntryId {
        self.id
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Name => Some(&mut self.name),
            EntryField::Description => Some(&mut self.description),
            EntryField::Link => Some(&mut self.link),
            _ => None,
        }
    }
}

/// A fully-formed entry of any list section, as handed to `append_entry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Entry {
    Experience(ExperienceEntry),
    Education(EducationEntry),
    Project(ProjectEntry),
}

impl Entry {
    /// A fresh entry with a new id and every field empty.
    pub fn blank(section: ListSection) -> Self {
        match section {
            ListSection::Experience => Entry::Experience(ExperienceEntry::blank()),
            ListSection::Education => Entry::Education(EducationEntry::blank()),
            ListSection::Projects => Entry::Project(ProjectEntry::blank()),
        }
    }

    pub fn id(&self) -> EntryId {
        match self {
            Entry::Experience(e) => e.id,
            Entry::Education(e) => e.id,
            Entry::Project(e) => e.id,
        }
    }

    pub fn section(&self) -> ListSection {
        match self {
            Entry::Experience(_) => ListSection::Experience,
            Entry::Education(_) => ListSection::Education,
            Entry::Project(_) => ListSection::Projects,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document root
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    /// Order-preserving; may hold duplicates or empty strings.
    pub skills: Vec<String>,
}

impl ResumeDocument {
    /// The placeholder document every session starts from.
    pub fn seeded() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "Your Name".to_string(),
                email: "your.email@example.com".to_string(),
                phone_number: "(123) 456-7890".to_string(),
                address: "Your City, ST".to_string(),
                website: "yourportfolio.com".to_string(),
            },
            summary: "A brief professional summary about you. Click the magic wand to generate \
                one with AI based on your experience and skills!"
                .to_string(),
            experience: vec![ExperienceEntry {
                id: EntryId::new(),
                job_title: "Software Engineer".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                location: "San Francisco, CA".to_string(),
                start_date: "2020-01-01".to_string(),
                end_date: "2023-12-31".to_string(),
                description: "- Developed and maintained web applications using React and Node.js.\n\
                    - Collaborated with cross-functional teams to deliver high-quality software.\n\
                    - Improved application performance by 20% through code optimization."
                    .to_string(),
            }],
            education: vec![EducationEntry {
                id: EntryId::new(),
                degree: "B.S. in Computer Science".to_string(),
                school: "University of Technology".to_string(),
                location: "Techville, USA".to_string(),
                graduation_date: "2020-05-01".to_string(),
            }],
            projects: vec![ProjectEntry {
                id: EntryId::new(),
                name: "Personal Portfolio".to_string(),
                description: "A responsive website to showcase my projects and skills.".to_string(),
                link: "yourportfolio.com".to_string(),
            }],
            skills: [
                "React",
                "TypeScript",
                "Node.js",
                "Tailwind CSS",
                "Gemini API",
                "Problem Solving",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    pub fn experience_index(&self, id: EntryId) -> Option<usize> {
        self.experience.iter().position(|e| e.id == id)
    }

    pub fn experience_by_id(&self, id: EntryId) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|e| e.id == id)
    }

    /// True when any list section holds an entry with this id.
    pub fn contains_entry(&self, id: EntryId) -> bool {
        self.experience.iter().any(|e| e.id == id)
            || self.education.iter().any(|e| e.id == id)
            || self.projects.iter().any(|e| e.id == id)
    }

    pub fn section_len(&self, section: ListSection) -> usize {
        match section {
            ListSection::Experience => self.experience.len(),
            ListSection::Education => self.education.len(),
            ListSection::Projects => self.projects.len(),
        }
    }
}
