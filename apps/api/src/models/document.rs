//! Resume document model: the canonical, layout-independent bio-data record.
//!
//! Every field is always present: absence is an empty string or an empty
//! collection, never a missing key. Deserialization fills omitted keys with
//! empty values so a partial payload still yields a complete document. The one
//! exception is an entry `id`: every education and work entry must carry it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::photo::PhotoRef;
use crate::models::seed::DocumentSeed;

/// Date format used for the document date and the render-time default (en-GB).
pub const DOCUMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats a calendar date the way the document date field expects it.
pub fn format_document_date(date: NaiveDate) -> String {
    date.format(DOCUMENT_DATE_FORMAT).to_string()
}

/// Stable identifier of an education or work entry. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Layout selector. Presentation only; never affects stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Elegant,
    Classic,
    Modern,
    Professional,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Elegant,
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Elegant => "elegant",
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Professional => "professional",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TemplateId::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identity {
    pub name: String,
    pub contact: String,
    /// Multi-line postal address.
    pub address: String,
    /// Free-form document date. Left blank, the renderer shows the render date.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    #[serde(default)]
    pub qualification: String,
    /// Institution, board or university.
    #[serde(default)]
    pub board: String,
    #[serde(default)]
    pub year: String,
    /// Grade, division or percentage.
    #[serde(default)]
    pub division: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::generate(),
            qualification: String::new(),
            board: String::new(),
            year: String::new(),
            division: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        [&self.qualification, &self.board, &self.year, &self.division]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: EntryId,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: String,
}

impl WorkEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::generate(),
            job_title: String::new(),
            company: String::new(),
            duration: String::new(),
            responsibilities: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.job_title,
            &self.company,
            &self.duration,
            &self.responsibilities,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalDetails {
    pub father_name: String,
    pub mother_name: String,
    pub dob: String,
    pub marital_status: String,
    pub nationality: String,
    /// Comma-delimited free text.
    pub languages: String,
    /// Job / location preference; printed as "Place" in the footer.
    pub job_location: String,
    /// National identity number (Aadhar).
    pub aadhar: String,
    pub email: String,
    /// Comma-delimited free text.
    pub hobbies: String,
    pub career_objective: String,
}

/// Root aggregate. Owned by exactly one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub identity: Identity,
    pub photo: Option<PhotoRef>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkEntry>,
    pub skills: Vec<String>,
    pub personal_details: PersonalDetails,
    pub declaration: String,
    pub template: TemplateId,
}

impl ResumeDocument {
    /// Builds the initial document of an editing session from a seed.
    ///
    /// `today` is only consulted when the seed asks for the creation date to
    /// be stamped into `identity.date`.
    pub fn from_seed(seed: &DocumentSeed, today: NaiveDate) -> Self {
        let date = if seed.stamp_creation_date {
            format_document_date(today)
        } else {
            String::new()
        };

        let education = seed
            .education_placeholders
            .iter()
            .map(|qualification| EducationEntry {
                qualification: qualification.clone(),
                ..EducationEntry::blank()
            })
            .collect();

        Self {
            identity: Identity {
                date,
                ..Identity::default()
            },
            photo: None,
            education,
            work_experience: Vec::new(),
            skills: Vec::new(),
            personal_details: PersonalDetails {
                nationality: seed.nationality.clone(),
                marital_status: seed.marital_status.clone(),
                ..PersonalDetails::default()
            },
            declaration: String::new(),
            template: seed.template,
        }
    }

}
