//! "Polish": runs both rewrites concurrently and folds the successes back in.
//!
//! The two calls are independent: each is settled on its own, and a failure
//! of one never blocks the other from being applied. Results only ever reach
//! the document as ordinary editor edits.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::editor::{Edit, PersonalField, ScalarField};
use crate::gateway::{GatewayError, TextGateway};
use crate::models::ResumeDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldOutcome {
    /// The service answered; `value` is the trimmed replacement.
    Improved { value: String },
    /// The field was blank, so no call was made.
    Skipped,
    /// The call failed; the field keeps its current value.
    Failed { reason: String },
}

impl FieldOutcome {
    pub fn improved(&self) -> Option<&str> {
        match self {
            FieldOutcome::Improved { value } => Some(value.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrichment {
    pub declaration: FieldOutcome,
    pub languages: FieldOutcome,
}

impl Enrichment {
    /// Edits for the fields that were improved. Failed and skipped fields yield none.
    pub fn edits(&self) -> Vec<Edit> {
        let mut edits = Vec::new();
        if let Some(value) = self.declaration.improved() {
            edits.push(Edit::SetScalar {
                field: ScalarField::Declaration,
                value: value.to_string(),
            });
        }
        if let Some(value) = self.languages.improved() {
            edits.push(Edit::SetPersonal {
                field: PersonalField::Languages,
                value: value.to_string(),
            });
        }
        edits
    }

    /// Applies the improvements to `doc`, which may be newer than the snapshot
    /// the calls were made from.
    #[cfg(test)]
    pub fn apply_to(&self, doc: &ResumeDocument) -> ResumeDocument {
        crate::editor::apply_all(doc, self.edits()).0
    }

    pub fn any_failed(&self) -> bool {
        [&self.declaration, &self.languages]
            .iter()
            .any(|o| matches!(o, FieldOutcome::Failed { .. }))
    }
}

/// Rewrites the declaration and standardizes the languages of `doc` concurrently.
///
/// Completes once both calls have settled. `timeout` bounds each call separately.
pub async fn enrich(
    gateway: &dyn TextGateway,
    doc: &ResumeDocument,
    timeout: Option<Duration>,
) -> Enrichment {
    let declaration = doc.declaration.clone();
    let languages = doc.personal_details.languages.clone();

    let declaration_job = async {
        if declaration.trim().is_empty() {
            return FieldOutcome::Skipped;
        }
        let result = bounded(gateway.improve_declaration(&declaration), timeout).await;
        settle("declaration", result)
    };
    let languages_job = async {
        if languages.trim().is_empty() {
            return FieldOutcome::Skipped;
        }
        let result = bounded(gateway.standardize_languages(&languages), timeout).await;
        settle("languages", result)
    };

    let (declaration, languages) = tokio::join!(declaration_job, languages_job);
    let enrichment = Enrichment {
        declaration,
        languages,
    };
    info!(
        declaration = ?enrichment.declaration,
        languages = ?enrichment.languages,
        "enrichment settled"
    );
    enrichment
}

async fn bounded<F>(call: F, timeout: Option<Duration>) -> Result<String, GatewayError>
where
    F: Future<Output = Result<String, GatewayError>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| GatewayError::Timeout(limit))?,
        None => call.await,
    }
}

fn settle(field: &'static str, result: Result<String, GatewayError>) -> FieldOutcome {
    let outcome = result.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Err(GatewayError::EmptyResponse)
        } else {
            Ok(trimmed.to_string())
        }
    });
    match outcome {
        Ok(value) => FieldOutcome::Improved { value },
        Err(e) => {
            warn!(field, error = %e, "text improvement failed, keeping current value");
            FieldOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
