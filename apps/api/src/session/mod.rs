//! Editing sessions: one in-memory document per session, mutated only via the editor.
//!
//! Nothing here is persisted: a session lives until it is ended or the
//! process exits.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::editor::{self, Applied, Edit, EditOutcome};
use crate::errors::AppError;
use crate::models::ResumeDocument;

/// The local calendar date, used for seeding and for the render-time date default.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone, Default)]
pub struct SessionStore {
    documents: Arc<RwLock<HashMap<Uuid, ResumeDocument>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, document: ResumeDocument) -> Uuid {
        let id = Uuid::new_v4();
        self.documents.write().await.insert(id, document);
        info!("Session {id} started");
        id
    }

    /// Returns a snapshot of the session's current document.
    pub async fn get(&self, id: Uuid) -> Result<ResumeDocument, AppError> {
        self.documents
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub async fn apply(&self, id: Uuid, edit: Edit) -> Result<Applied, AppError> {
        let mut documents = self.documents.write().await;
        let current = documents.get_mut(&id).ok_or_else(|| not_found(id))?;
        let applied = editor::apply(current, edit);
        *current = applied.document.clone();
        Ok(applied)
    }

    /// Applies a batch of edits atomically with respect to other requests.
    pub async fn apply_all(
        &self,
        id: Uuid,
        edits: Vec<Edit>,
    ) -> Result<(ResumeDocument, Vec<EditOutcome>), AppError> {
        let mut documents = self.documents.write().await;
        let current = documents.get_mut(&id).ok_or_else(|| not_found(id))?;
        let (next, outcomes) = editor::apply_all(current, edits);
        *current = next.clone();
        Ok((next, outcomes))
    }

    pub async fn end(&self, id: Uuid) -> Result<(), AppError> {
        self.documents
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Session {id} ended"))
            .ok_or_else(|| not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ScalarField;

    fn name(value: &str) -> Edit {
        Edit::SetScalar {
            field: ScalarField::Name,
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_document() {
        let store = SessionStore::new();
        let mut doc = ResumeDocument::default();
        doc.identity.name = "Asha".into();
        let id = store.create(doc.clone()).await;
        assert_eq!(store.get(id).await.unwrap(), doc);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_apply_replaces_the_stored_document() {
        let store = SessionStore::new();
        let id = store.create(ResumeDocument::default()).await;
        let applied = store.apply(id, name("Ravi")).await.unwrap();
        assert!(applied.outcome.is_changed());
        assert_eq!(store.get(id).await.unwrap().identity.name, "Ravi");
    }

    #[tokio::test]
    async fn test_snapshots_are_independent_of_later_edits() {
        let store = SessionStore::new();
        let id = store.create(ResumeDocument::default()).await;
        let snapshot = store.get(id).await.unwrap();
        store.apply(id, name("Ravi")).await.unwrap();
        assert_eq!(snapshot.identity.name, "");
    }

    #[tokio::test]
    async fn test_apply_all_reports_each_outcome() {
        let store = SessionStore::new();
        let id = store.create(ResumeDocument::default()).await;
        let (doc, outcomes) = store
            .apply_all(id, vec![Edit::AddSkill, Edit::RemoveSkill { index: 5 }])
            .await
            .unwrap();
        assert_eq!(doc.skills, vec![String::new()]);
        assert!(outcomes[0].is_changed());
        assert!(!outcomes[1].is_changed());
    }

    #[tokio::test]
    async fn test_unknown_and_ended_sessions_are_not_found() {
        let store = SessionStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));

        let id = store.create(ResumeDocument::default()).await;
        store.end(id).await.unwrap();
        assert!(matches!(
            store.apply(id, Edit::AddSkill).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(store.end(id).await, Err(AppError::NotFound(_))));
    }
}
