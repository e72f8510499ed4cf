use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::editor::{Edit, EditOutcome};
use crate::errors::AppError;
use crate::gateway::{enrich, FieldOutcome};
use crate::models::{PhotoRef, ResumeDocument, TemplateId};
use crate::render::{render, render_selected, RenderedDocument};
use crate::session::today;
use crate::state::AppState;

/// Multipart field carrying the profile photo.
const PHOTO_FIELD: &str = "photo";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub document: ResumeDocument,
}

/// Either a single edit or `{ "edits": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum EditRequest {
    Batch { edits: Vec<Edit> },
    Single(Edit),
}

impl EditRequest {
    fn into_edits(self) -> Vec<Edit> {
        match self {
            EditRequest::Batch { edits } => edits,
            EditRequest::Single(edit) => vec![edit],
        }
    }
}

#[derive(Serialize)]
pub struct EditResponse {
    pub document: ResumeDocument,
    pub outcomes: Vec<EditOutcome>,
}

#[derive(Deserialize)]
pub struct RenderQuery {
    pub template: Option<String>,
}

#[derive(Serialize)]
pub struct PolishResponse {
    pub document: ResumeDocument,
    pub declaration: FieldOutcome,
    pub languages: FieldOutcome,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let document = ResumeDocument::from_seed(&state.config.seed, today());
    let session_id = state.sessions.create(document.clone()).await;
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            document,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.end(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/edits
pub async fn handle_apply_edits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EditRequest>,
) -> Result<Json<EditResponse>, AppError> {
    let (document, outcomes) = state.sessions.apply_all(id, req.into_edits()).await?;
    let ignored = outcomes.iter().filter(|o| !o.is_changed()).count();
    if ignored > 0 {
        info!("Session {id}: {ignored} of {} edits ignored", outcomes.len());
    }
    Ok(Json(EditResponse { document, outcomes }))
}

/// PUT /api/v1/sessions/:id/photo
///
/// Accepts a multipart upload and stores it as an embeddable data URI.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ResumeDocument>, AppError> {
    let mut photo: Option<PhotoRef> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let content_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("photo upload has no content type".into()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;
        photo = Some(
            PhotoRef::from_image_bytes(&content_type, &bytes)
                .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?,
        );
        info!("Session {id}: photo uploaded ({content_type}, {} bytes)", bytes.len());
        break;
    }

    let photo =
        photo.ok_or_else(|| AppError::Validation(format!("missing '{PHOTO_FIELD}' field")))?;
    let applied = state
        .sessions
        .apply(id, Edit::SetPhoto { photo: Some(photo) })
        .await?;
    Ok(Json(applied.document))
}

/// DELETE /api/v1/sessions/:id/photo
pub async fn handle_remove_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    let applied = state.sessions.apply(id, Edit::SetPhoto { photo: None }).await?;
    Ok(Json(applied.document))
}

/// GET /api/v1/sessions/:id/render?template=<id>
///
/// Renders under the requested template, or the stored selector when omitted.
/// The stored selector is not changed.
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<RenderQuery>,
) -> Result<Json<RenderedDocument>, AppError> {
    let document = state.sessions.get(id).await?;
    let rendered = match params.template.as_deref() {
        Some(name) => {
            let template = name
                .parse::<TemplateId>()
                .map_err(|e| AppError::Validation(e.to_string()))?;
            render(&document, template, today())
        }
        None => render_selected(&document, today()),
    };
    Ok(Json(rendered))
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateId>> {
    Json(TemplateId::ALL.to_vec())
}

/// POST /api/v1/sessions/:id/polish
///
/// Runs both text improvements concurrently against a snapshot, then applies
/// whatever succeeded to the session's current document. Returns once both
/// calls have settled.
pub async fn handle_polish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PolishResponse>, AppError> {
    let snapshot = state.sessions.get(id).await?;
    let enrichment = enrich(
        state.gateway.as_ref(),
        &snapshot,
        state.config.gateway_timeout,
    )
    .await;

    let (document, _) = state.sessions.apply_all(id, enrichment.edits()).await?;
    if enrichment.any_failed() {
        info!("Session {id}: polish finished with failures");
    }

    Ok(Json(PolishResponse {
        document,
        declaration: enrichment.declaration,
        languages: enrichment.languages,
    }))
}
