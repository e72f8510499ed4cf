pub mod document;
pub mod photo;
pub mod seed;

pub use document::{
    format_document_date, EducationEntry, EntryId, PersonalDetails, ResumeDocument,
    TemplateId, WorkEntry,
};
pub use photo::PhotoRef;
pub use seed::DocumentSeed;
