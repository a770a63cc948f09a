pub mod resume;

pub use resume::{
    EducationEntry, Entry, EntryField, EntryId, ExperienceEntry, ListSection, PersonalField,
    PersonalInfo, ProjectEntry, ResumeDocument, SectionEntry,
};
