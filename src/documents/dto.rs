use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::documents::registry::Document;

/// Client-visible document metadata. The storage path stays internal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub id: Uuid,
    pub original_name: String,
    pub size: u64,
    pub mimetype: String,
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: OffsetDateTime,
    pub processed: bool,
}

impl From<&Document> for DocumentMetadata {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            original_name: doc.original_name.clone(),
            size: doc.size,
            mimetype: doc.mimetype.clone(),
            uploaded_at: doc.uploaded_at,
            processed: doc.is_processed(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: &'static str,
    pub document: DocumentMetadata,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub documents: Vec<DocumentMetadata>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}
