//! Mutation Engine — the only way a `ResumeDocument` changes.
//!
//! Each operation validates its address first and builds the next document only
//! once the address is known to exist. An invalid address is a caller bug and is
//! reported as a `MutationError`; the input document is never touched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Entry, EntryField, EntryId, ListSection, PersonalField, ResumeDocument, SectionEntry,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error("index {index} is out of range for {section} (len {len})")]
    IndexOutOfRange {
        section: ListSection,
        index: usize,
        len: usize,
    },

    #[error("field '{field}' does not exist on {section} entries")]
    FieldNotOnSection {
        section: ListSection,
        field: EntryField,
    },

    #[error("cannot append a {entry} entry to {section}")]
    SectionMismatch {
        section: ListSection,
        entry: ListSection,
    },

    #[error("entry id {0} is already present in the document")]
    DuplicateId(EntryId),
}

/// Top-level scalar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Summary,
}

/// The closed set of addressable string fields in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldTarget {
    Scalar {
        field: ScalarField,
    },
    Record {
        field: PersonalField,
    },
    List {
        section: ListSection,
        index: usize,
        field: EntryField,
    },
}

/// One user edit, as delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Edit {
    SetField { target: FieldTarget, value: String },
    Append { section: ListSection, entry: Entry },
    Remove { section: ListSection, index: usize },
    ReplaceSkills { raw: String },
}

impl Edit {
    pub fn apply(&self, doc: &ResumeDocument) -> Result<ResumeDocument, MutationError> {
        match self {
            Edit::SetField { target, value } => set_field(doc, target, value),
            Edit::Append { section, entry } => append_entry(doc, *section, entry.clone()),
            Edit::Remove { section, index } => remove_entry(doc, *section, *index),
            Edit::ReplaceSkills { raw } => Ok(replace_skills(doc, raw)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field set
// ────────────────────────────────────────────────────────────────────────────

/// Returns a copy of `doc` with the addressed field set to `value`.
pub fn set_field(
    doc: &ResumeDocument,
    target: &FieldTarget,
    value: &str,
) -> Result<ResumeDocument, MutationError> {
    match *target {
        FieldTarget::Scalar {
            field: ScalarField::Summary,
        } => {
            let mut next = doc.clone();
            next.summary = value.to_string();
            Ok(next)
        }
        FieldTarget::Record { field } => {
            let mut next = doc.clone();
            *next.personal_info.field_mut(field) = value.to_string();
            Ok(next)
        }
        FieldTarget::List {
            section,
            index,
            field,
        } => {
            let mut next = doc.clone();
            match section {
                ListSection::Experience => {
                    set_in_list(&mut next.experience, index, field, value)?
                }
                ListSection::Education => set_in_list(&mut next.education, index, field, value)?,
                ListSection::Projects => set_in_list(&mut next.projects, index, field, value)?,
            }
            Ok(next)
        }
    }
}

fn set_in_list<T: SectionEntry>(
    list: &mut [T],
    index: usize,
    field: EntryField,
    value: &str,
) -> Result<(), MutationError> {
    let len = list.len();
    let entry = list.get_mut(index).ok_or(MutationError::IndexOutOfRange {
        section: T::SECTION,
        index,
        len,
    })?;
    let slot = entry
        .field_mut(field)
        .ok_or(MutationError::FieldNotOnSection {
            section: T::SECTION,
            field,
        })?;
    *slot = value.to_string();
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// List append / remove
// ────────────────────────────────────────────────────────────────────────────

/// Appends `entry` to the end of `section`. The entry carries its own id.
pub fn append_entry(
    doc: &ResumeDocument,
    section: ListSection,
    entry: Entry,
) -> Result<ResumeDocument, MutationError> {
    if entry.section() != section {
        return Err(MutationError::SectionMismatch {
            section,
            entry: entry.section(),
        });
    }
    if doc.contains_entry(entry.id()) {
        return Err(MutationError::DuplicateId(entry.id()));
    }

    let mut next = doc.clone();
    match entry {
        Entry::Experience(e) => next.experience.push(e),
        Entry::Education(e) => next.education.push(e),
        Entry::Project(e) => next.projects.push(e),
    }
    Ok(next)
}

/// Removes the entry rendered at `index`; later entries shift down by one.
pub fn remove_entry(
    doc: &ResumeDocument,
    section: ListSection,
    index: usize,
) -> Result<ResumeDocument, MutationError> {
    let len = doc.section_len(section);
    if index >= len {
        return Err(MutationError::IndexOutOfRange {
            section,
            index,
            len,
        });
    }

    let mut next = doc.clone();
    match section {
        ListSection::Experience => {
            next.experience.remove(index);
        }
        ListSection::Education => {
            next.education.remove(index);
        }
        ListSection::Projects => {
            next.projects.remove(index);
        }
    }
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Splits raw comma-separated input into trimmed pieces. Empty pieces are kept.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

pub fn replace_skills(doc: &ResumeDocument, raw: &str) -> ResumeDocument {
    let mut next = doc.clone();
    next.skills = parse_skills(raw);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn list_target(section: ListSection, index: usize, field: EntryField) -> FieldTarget {
        FieldTarget::List {
            section,
            index,
            field,
        }
    }

    fn doc_with_three_jobs() -> ResumeDocument {
        let mut doc = ResumeDocument::seeded();
        for title in ["Second", "Third"] {
            let mut job = ExperienceEntry::blank();
            job.job_title = title.to_string();
            doc = append_entry(&doc, ListSection::Experience, Entry::Experience(job)).unwrap();
        }
        doc
    }

    #[test]
    fn test_set_list_field_touches_only_the_addressed_field() {
        let doc = doc_with_three_jobs();
        let target = list_target(ListSection::Experience, 1, EntryField::Company);
        let next = set_field(&doc, &target, "Acme").unwrap();

        assert_eq!(next.experience[1].company, "Acme");
        assert_eq!(next.experience[1].job_title, doc.experience[1].job_title);
        assert_eq!(next.experience[1].id, doc.experience[1].id);
        assert_eq!(next.experience[0], doc.experience[0]);
        assert_eq!(next.experience[2], doc.experience[2]);
        assert_eq!(next.education, doc.education);
        assert_eq!(next.projects, doc.projects);
        assert_eq!(next.skills, doc.skills);
        assert_eq!(next.summary, doc.summary);
        assert_eq!(next.personal_info, doc.personal_info);
    }

    #[test]
    fn test_set_field_leaves_input_unchanged() {
        let doc = ResumeDocument::seeded();
        let before = doc.clone();
        let target = list_target(ListSection::Projects, 0, EntryField::Link);
        let _ = set_field(&doc, &target, "example.org").unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn test_set_record_field() {
        let doc = ResumeDocument::seeded();
        let target = FieldTarget::Record {
            field: PersonalField::Email,
        };
        let next = set_field(&doc, &target, "ada@example.com").unwrap();
        assert_eq!(next.personal_info.email, "ada@example.com");
        assert_eq!(next.personal_info.full_name, doc.personal_info.full_name);
        assert_eq!(next.experience, doc.experience);
    }

    #[test]
    fn test_set_scalar_replaces_whole_summary() {
        let doc = ResumeDocument::seeded();
        let target = FieldTarget::Scalar {
            field: ScalarField::Summary,
        };
        let next = set_field(&doc, &target, "").unwrap();
        assert_eq!(next.summary, "");
        assert_eq!(next.personal_info, doc.personal_info);
    }

    #[test]
    fn test_set_field_out_of_range_fails_loudly() {
        let doc = ResumeDocument::seeded();
        let target = list_target(ListSection::Education, 5, EntryField::Degree);
        let err = set_field(&doc, &target, "PhD").unwrap_err();
        assert_eq!(
            err,
            MutationError::IndexOutOfRange {
                section: ListSection::Education,
                index: 5,
                len: 1
            }
        );
    }

    #[test]
    fn test_set_field_foreign_to_shape_fails_loudly() {
        let doc = ResumeDocument::seeded();
        let target = list_target(ListSection::Projects, 0, EntryField::JobTitle);
        let err = set_field(&doc, &target, "Engineer").unwrap_err();
        assert!(matches!(
            err,
            MutationError::FieldNotOnSection {
                section: ListSection::Projects,
                field: EntryField::JobTitle
            }
        ));
    }

    #[test]
    fn test_append_preserves_existing_order() {
        let doc = doc_with_three_jobs();
        let entry = ExperienceEntry::blank();
        let id = entry.id;
        let next = append_entry(&doc, ListSection::Experience, Entry::Experience(entry)).unwrap();

        assert_eq!(next.experience.len(), 4);
        assert_eq!(&next.experience[..3], &doc.experience[..]);
        assert_eq!(next.experience[3].id, id);
    }

    #[test]
    fn test_append_rejects_mismatched_section() {
        let doc = ResumeDocument::seeded();
        let err = append_entry(
            &doc,
            ListSection::Education,
            Entry::Project(ProjectEntry::blank()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MutationError::SectionMismatch {
                section: ListSection::Education,
                entry: ListSection::Projects
            }
        );
    }

    #[test]
    fn test_append_rejects_reused_id() {
        let doc = ResumeDocument::seeded();
        let mut dup = EducationEntry::blank();
        dup.id = doc.experience[0].id;
        let err = append_entry(&doc, ListSection::Education, Entry::Education(dup)).unwrap_err();
        assert_eq!(err, MutationError::DuplicateId(doc.experience[0].id));
    }

    #[test]
    fn test_appended_ids_are_distinct_and_survive_removal() {
        let mut doc = ResumeDocument::seeded();
        for _ in 0..5 {
            doc = append_entry(
                &doc,
                ListSection::Projects,
                Entry::Project(ProjectEntry::blank()),
            )
            .unwrap();
        }
        let ids: Vec<EntryId> = doc.projects.iter().map(|p| p.id).collect();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let next = remove_entry(&doc, ListSection::Projects, 2).unwrap();
        let remaining: Vec<EntryId> = next.projects.iter().map(|p| p.id).collect();
        let expected: Vec<EntryId> = ids
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2)
            .map(|(_, id)| *id)
            .collect();
        assert_eq!(remaining, expected);
    }

    #[test]
    fn test_remove_shifts_following_entries_left() {
        let doc = doc_with_three_jobs();
        let next = remove_entry(&doc, ListSection::Experience, 1).unwrap();
        assert_eq!(next.experience.len(), 2);
        assert_eq!(next.experience[0], doc.experience[0]);
        assert_eq!(next.experience[1], doc.experience[2]);
    }

    #[test]
    fn test_remove_last_entry_leaves_empty_list() {
        let doc = ResumeDocument::seeded();
        let next = remove_entry(&doc, ListSection::Education, 0).unwrap();
        assert!(next.education.is_empty());
        assert_eq!(next.experience, doc.experience);
    }

    #[test]
    fn test_remove_out_of_range_fails_loudly() {
        let doc = ResumeDocument::seeded();
        let emptied = remove_entry(&doc, ListSection::Projects, 0).unwrap();
        let err = remove_entry(&emptied, ListSection::Projects, 0).unwrap_err();
        assert!(matches!(err, MutationError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn test_parse_skills_trims_each_piece() {
        assert_eq!(
            parse_skills("React, TypeScript ,  Node.js"),
            vec!["React", "TypeScript", "Node.js"]
        );
    }

    #[test]
    fn test_parse_skills_keeps_empty_pieces() {
        assert_eq!(parse_skills("A,,B"), vec!["A", "", "B"]);
        assert_eq!(parse_skills(""), vec![""]);
    }

    #[test]
    fn test_replace_skills_replaces_whole_list() {
        let doc = ResumeDocument::seeded();
        let next = replace_skills(&doc, "Rust, Go");
        assert_eq!(next.skills, vec!["Rust", "Go"]);
        assert_eq!(next.experience, doc.experience);
    }

    #[test]
    fn test_append_edit_remove_round_trip_preserves_unrelated_edits() {
        let start = ResumeDocument::seeded();
        let entry = ExperienceEntry::blank();
        let edits = [
            Edit::Append {
                section: ListSection::Experience,
                entry: Entry::Experience(entry),
            },
            Edit::SetField {
                target: list_target(ListSection::Experience, 1, EntryField::JobTitle),
                value: "Engineer".to_string(),
            },
            Edit::SetField {
                target: FieldTarget::Record {
                    field: PersonalField::FullName,
                },
                value: "Ada Lovelace".to_string(),
            },
            Edit::Remove {
                section: ListSection::Experience,
                index: 1,
            },
        ];

        let end = edits
            .iter()
            .try_fold(start.clone(), |doc, edit| edit.apply(&doc))
            .unwrap();

        assert_eq!(end.experience, start.experience);
        assert_eq!(end.personal_info.full_name, "Ada Lovelace");
        assert_eq!(end.skills, start.skills);
    }

    #[test]
    fn test_field_target_wire_format() {
        let json = serde_json::json!({
            "kind": "list",
            "section": "experience",
            "index": 0,
            "field": "jobTitle"
        });
        let target: FieldTarget = serde_json::from_value(json).unwrap();
        assert_eq!(
            target,
            list_target(ListSection::Experience, 0, EntryField::JobTitle)
        );

        let bad = serde_json::json!({ "kind": "record", "field": "shoeSize" });
        assert!(serde_json::from_value::<FieldTarget>(bad).is_err());
    }
}
