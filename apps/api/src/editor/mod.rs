//! Field editor: the only way a `ResumeDocument` changes.
//!
//! Every user edit is one variant of [`Edit`]. [`apply`] takes the current
//! document by reference and returns a fresh one; the input is never touched.
//! Edits aimed at a stale entry id or an out-of-range index are absorbed as
//! no-ops and reported through [`EditOutcome::Ignored`], never as errors.

pub mod fields;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{EducationEntry, EntryId, PhotoRef, ResumeDocument, TemplateId, WorkEntry};

pub use fields::{EducationField, PersonalField, ScalarField, WorkField};

/// Locates one entry of an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryRef {
    Id(EntryId),
    Index(usize),
}

impl From<EntryId> for EntryRef {
    fn from(id: EntryId) -> Self {
        EntryRef::Id(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    SetScalar {
        field: ScalarField,
        value: String,
    },
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    SetPhoto {
        photo: Option<PhotoRef>,
    },
    SetTemplate {
        template: TemplateId,
    },
    AddEducation,
    UpdateEducation {
        entry: EntryRef,
        field: EducationField,
        value: String,
    },
    RemoveEducation {
        entry: EntryRef,
    },
    AddWork,
    UpdateWork {
        entry: EntryRef,
        field: WorkField,
        value: String,
    },
    RemoveWork {
        entry: EntryRef,
    },
    AddSkill,
    UpdateSkill {
        index: usize,
        value: String,
    },
    RemoveSkill {
        index: usize,
    },
    /// Replaces the whole skills list from comma-delimited text.
    SetSkillsFromText {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IgnoredReason {
    UnknownEntry { id: EntryId },
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EditOutcome {
    Changed,
    Ignored { reason: IgnoredReason },
}

impl EditOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, EditOutcome::Changed)
    }
}

/// Result of applying one edit: the new document and what happened.
#[derive(Debug, Clone)]
pub struct Applied {
    pub document: ResumeDocument,
    pub outcome: EditOutcome,
}

/// Applies one edit, returning a new document.
pub fn apply(doc: &ResumeDocument, edit: Edit) -> Applied {
    let mut next = doc.clone();
    let outcome = match apply_in_place(&mut next, edit) {
        Ok(()) => EditOutcome::Changed,
        Err(reason) => {
            debug!(?reason, "edit ignored");
            // An ignored edit leaves the document exactly as it was.
            next = doc.clone();
            EditOutcome::Ignored { reason }
        }
    };
    Applied {
        document: next,
        outcome,
    }
}

/// Applies a batch of edits in order, collecting one outcome per edit.
pub fn apply_all<I>(doc: &ResumeDocument, edits: I) -> (ResumeDocument, Vec<EditOutcome>)
where
    I: IntoIterator<Item = Edit>,
{
    let mut current = doc.clone();
    let mut outcomes = Vec::new();
    for edit in edits {
        let applied = apply(&current, edit);
        current = applied.document;
        outcomes.push(applied.outcome);
    }
    (current, outcomes)
}

/// Splits comma-delimited text into trimmed, non-empty items.
///
/// Blank items are dropped wherever they occur, so `"a,,b"` yields `["a", "b"]`
/// and `""` yields an empty list, never `[""]`.
pub fn split_delimited(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn apply_in_place(doc: &mut ResumeDocument, edit: Edit) -> Result<(), IgnoredReason> {
    match edit {
        Edit::SetScalar { field, value } => *field.slot(doc) = value,
        Edit::SetPersonal { field, value } => *field.slot(&mut doc.personal_details) = value,
        Edit::SetPhoto { photo } => doc.photo = photo,
        Edit::SetTemplate { template } => doc.template = template,

        Edit::AddEducation => doc.education.push(EducationEntry::blank()),
        Edit::UpdateEducation {
            entry,
            field,
            value,
        } => {
            let i = locate(&doc.education, entry, |e| e.id)?;
            *field.slot(&mut doc.education[i]) = value;
        }
        Edit::RemoveEducation { entry } => {
            let i = locate(&doc.education, entry, |e| e.id)?;
            doc.education.remove(i);
        }

        Edit::AddWork => doc.work_experience.push(WorkEntry::blank()),
        Edit::UpdateWork {
            entry,
            field,
            value,
        } => {
            let i = locate(&doc.work_experience, entry, |e| e.id)?;
            *field.slot(&mut doc.work_experience[i]) = value;
        }
        Edit::RemoveWork { entry } => {
            let i = locate(&doc.work_experience, entry, |e| e.id)?;
            doc.work_experience.remove(i);
        }

        Edit::AddSkill => doc.skills.push(String::new()),
        Edit::UpdateSkill { index, value } => {
            let len = doc.skills.len();
            let slot = doc
                .skills
                .get_mut(index)
                .ok_or(IgnoredReason::IndexOutOfRange { index, len })?;
            *slot = value;
        }
        Edit::RemoveSkill { index } => {
            let len = doc.skills.len();
            if index >= len {
                return Err(IgnoredReason::IndexOutOfRange { index, len });
            }
            doc.skills.remove(index);
        }
        Edit::SetSkillsFromText { text } => doc.skills = split_delimited(&text),
    }
    Ok(())
}

fn locate<T>(
    items: &[T],
    entry: EntryRef,
    id_of: impl Fn(&T) -> EntryId,
) -> Result<usize, IgnoredReason> {
    match entry {
        EntryRef::Id(id) => items
            .iter()
            .position(|item| id_of(item) == id)
            .ok_or(IgnoredReason::UnknownEntry { id }),
        EntryRef::Index(index) if index < items.len() => Ok(index),
        EntryRef::Index(index) => Err(IgnoredReason::IndexOutOfRange {
            index,
            len: items.len(),
        }),
    }
}
