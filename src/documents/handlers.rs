use axum::{
    extract::{Multipart, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    config::AppConfig,
    documents::{
        dto::{DeleteResponse, DocumentMetadata, ListResponse, UploadResponse},
        upload::accept_upload,
    },
    error::ApiError,
    state::AppState,
};

pub fn document_routes(config: &AppConfig) -> Router<AppState> {
    // The body limit sits above the policy ceiling so the gateway's own size
    // check produces the response, not the framework default.
    let body_limit = (config.storage.max_upload_bytes as usize).saturating_add(1024 * 1024);
    Router::new()
        .route("/documents/upload", post(upload_document))
        .route("/documents", get(list_documents))
        .route("/documents/:id", delete(delete_document))
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
}

/// POST /documents/upload (multipart, field `document`)
#[instrument(skip(state, mp))]
pub async fn upload_document(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut mp: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let m = state.messages;
    loop {
        let field = match mp.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "malformed multipart body");
                return Err(ApiError::Validation(m.no_file.into()));
            }
        };
        if field.name() != Some("document") {
            continue;
        }
        let doc = accept_upload(&state, user_id, field).await?;
        info!(
            user_id = %user_id,
            document_id = %doc.id,
            size = doc.size,
            mimetype = %doc.mimetype,
            "document uploaded"
        );
        return Ok(Json(UploadResponse {
            success: true,
            message: m.uploaded,
            document: DocumentMetadata::from(&doc),
        }));
    }
    Err(ApiError::Validation(m.no_file.into()))
}

/// GET /documents
#[instrument(skip(state))]
pub async fn list_documents(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ListResponse>, ApiError> {
    let docs = state.documents.list(user_id).await;
    Ok(Json(ListResponse {
        success: true,
        documents: docs.iter().map(DocumentMetadata::from).collect(),
    }))
}

/// DELETE /documents/:id
#[instrument(skip(state))]
pub async fn delete_document(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let m = state.messages;
    // Registry removal decides the winner under concurrent deletes; only the
    // winner reaches the blob deletion below.
    let doc = state
        .documents
        .remove(user_id, id)
        .await
        .ok_or_else(|| ApiError::NotFound(m.document_not_found.into()))?;

    if let Err(e) = state.storage.delete(&doc.storage_name).await {
        error!(error = %e, key = %doc.storage_name, "failed to delete document bytes");
    }

    info!(user_id = %user_id, document_id = %id, "document deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: m.deleted,
    }))
}
