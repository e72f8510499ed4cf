use serde::{Deserialize, Serialize};

use crate::models::document::TemplateId;

/// Describes the initial document of every new editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentSeed {
    /// Qualifications pre-filled as blank education rows, in order.
    pub education_placeholders: Vec<String>,
    pub nationality: String,
    pub marital_status: String,
    pub template: TemplateId,
    /// Write the creation date into `identity.date`.
    pub stamp_creation_date: bool,
}

impl Default for DocumentSeed {
    fn default() -> Self {
        Self {
            education_placeholders: Vec::new(),
            nationality: "Indian".to_string(),
            marital_status: String::new(),
            template: TemplateId::Elegant,
            stamp_creation_date: true,
        }
    }
}
