use axum::extract::multipart::Field;
use time::OffsetDateTime;
use tracing::warn;
use uuid::Uuid;

use crate::{
    documents::registry::{Document, DocumentStatus},
    error::ApiError,
    state::AppState,
};

/// Media types accepted for upload, mirroring the product's supported formats
/// (PDF, Word, plain text, common images, Excel).
pub const ALLOWED_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "text/plain",
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

pub fn is_allowed_type(mimetype: &str) -> bool {
    ALLOWED_TYPES.contains(&mimetype)
}

fn ext_from_mime(mimetype: &str) -> &'static str {
    match mimetype {
        "application/pdf" => "pdf",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
        "application/msword" => "doc",
        "text/plain" => "txt",
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "application/vnd.ms-excel" => "xls",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "xlsx",
        _ => "bin",
    }
}

/// Validates and persists one multipart file field. The byte stream goes
/// chunk-by-chunk into storage under a generated name; the client-supplied
/// filename is kept as display metadata only. On any failure (policy, disk,
/// truncated stream) neither a file nor a registry record remains.
pub async fn accept_upload(
    state: &AppState,
    owner_id: Uuid,
    mut field: Field<'_>,
) -> Result<Document, ApiError> {
    let m = state.messages;
    let max_bytes = state.config.storage.max_upload_bytes;

    let mimetype = match field.content_type() {
        Some(ct) if is_allowed_type(ct) => ct.to_string(),
        Some(ct) => {
            warn!(mimetype = %ct, "rejected upload of unsupported type");
            return Err(ApiError::UnsupportedType(m.unsupported_type.into()));
        }
        None => return Err(ApiError::UnsupportedType(m.unsupported_type.into())),
    };
    let original_name = field
        .file_name()
        .filter(|n| !n.is_empty())
        .unwrap_or("document")
        .to_string();

    let id = Uuid::new_v4();
    let storage_name = format!("{}.{}", id, ext_from_mime(&mimetype));
    let mut writer = state
        .storage
        .create(&storage_name)
        .await
        .map_err(|e| ApiError::internal(m.upload_failed, e))?;

    let mut size: u64 = 0;
    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                // Truncated or aborted stream; drop the partial bytes.
                writer.abort().await;
                return Err(ApiError::internal(m.upload_failed, e));
            }
        };
        size += chunk.len() as u64;
        if size > max_bytes {
            warn!(size, max_bytes, "rejected upload over size ceiling");
            writer.abort().await;
            return Err(ApiError::PayloadTooLarge(m.file_too_large.into()));
        }
        if let Err(e) = writer.write(chunk).await {
            writer.abort().await;
            return Err(ApiError::internal(m.upload_failed, e));
        }
    }

    let size = writer
        .commit()
        .await
        .map_err(|e| ApiError::internal(m.upload_failed, e))?;

    let doc = Document {
        id,
        owner_id,
        original_name,
        storage_name: storage_name.clone(),
        size,
        mimetype,
        uploaded_at: OffsetDateTime::now_utc(),
        status: DocumentStatus::Uploaded,
        content: None,
    };

    if let Err(e) = state.documents.insert(doc.clone()).await {
        // Roll the blob back so no orphaned bytes outlive a failed insert.
        if let Err(del) = state.storage.delete(&storage_name).await {
            warn!(error = %del, key = %storage_name, "orphaned blob cleanup failed");
        }
        return Err(ApiError::internal(m.upload_failed, e));
    }

    state.users.record_upload(owner_id).await;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_matches_supported_formats() {
        assert!(is_allowed_type("application/pdf"));
        assert!(is_allowed_type("text/plain"));
        assert!(is_allowed_type("image/gif"));
        assert!(is_allowed_type(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ));
        assert!(!is_allowed_type("application/zip"));
        assert!(!is_allowed_type("video/mp4"));
        assert!(!is_allowed_type("application/pdf; charset=utf-8"));
    }

    #[test]
    fn storage_extension_follows_media_type() {
        assert_eq!(ext_from_mime("application/pdf"), "pdf");
        assert_eq!(ext_from_mime("image/jpeg"), "jpg");
        assert_eq!(ext_from_mime("application/msword"), "doc");
        assert_eq!(ext_from_mime("application/unknown"), "bin");
    }
}
