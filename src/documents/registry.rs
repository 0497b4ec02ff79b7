use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Lifecycle of an uploaded document. `uploaded` is the only state reachable
/// through the API today; the extraction step moves a record to `processed`
/// or `processing_failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Uploaded,
    Processed,
    ProcessingFailed,
}

/// An uploaded file's record. `storage_name` locates the bytes on disk and is
/// never serialized to clients; `content` stays empty until extraction runs.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub original_name: String,
    pub storage_name: String,
    pub size: u64,
    pub mimetype: String,
    pub uploaded_at: OffsetDateTime,
    pub status: DocumentStatus,
    pub content: Option<String>,
}

impl Document {
    pub fn is_processed(&self) -> bool {
        self.status == DocumentStatus::Processed
    }
}

/// Document metadata persistence. All reads are owner-scoped. `remove` is the
/// atomicity point for deletion: under two racing removals of one id exactly
/// one caller observes the record.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, doc: Document) -> anyhow::Result<()>;
    async fn get_owned(&self, owner_id: Uuid, id: Uuid) -> Option<Document>;
    async fn list(&self, owner_id: Uuid) -> Vec<Document>;
    async fn remove(&self, owner_id: Uuid, id: Uuid) -> Option<Document>;
    /// Record the outcome of an extraction run. Returns false for unknown ids.
    async fn set_extraction_result(
        &self,
        id: Uuid,
        status: DocumentStatus,
        content: Option<String>,
    ) -> bool;
}

#[derive(Default)]
pub struct InMemoryDocumentRegistry {
    inner: RwLock<HashMap<Uuid, Document>>,
}

#[async_trait]
impl DocumentStore for InMemoryDocumentRegistry {
    async fn insert(&self, doc: Document) -> anyhow::Result<()> {
        let mut table = self.inner.write().await;
        anyhow::ensure!(
            !table.contains_key(&doc.id),
            "document id {} already registered",
            doc.id
        );
        table.insert(doc.id, doc);
        Ok(())
    }

    async fn get_owned(&self, owner_id: Uuid, id: Uuid) -> Option<Document> {
        let table = self.inner.read().await;
        table
            .get(&id)
            .filter(|d| d.owner_id == owner_id)
            .cloned()
    }

    async fn list(&self, owner_id: Uuid) -> Vec<Document> {
        let table = self.inner.read().await;
        let mut docs: Vec<Document> = table
            .values()
            .filter(|d| d.owner_id == owner_id)
            .cloned()
            .collect();
        docs.sort_by_key(|d| d.uploaded_at);
        docs
    }

    async fn remove(&self, owner_id: Uuid, id: Uuid) -> Option<Document> {
        let mut table = self.inner.write().await;
        match table.get(&id) {
            Some(d) if d.owner_id == owner_id => table.remove(&id),
            _ => None,
        }
    }

    async fn set_extraction_result(
        &self,
        id: Uuid,
        status: DocumentStatus,
        content: Option<String>,
    ) -> bool {
        let mut table = self.inner.write().await;
        match table.get_mut(&id) {
            Some(doc) => {
                doc.status = status;
                doc.content = content;
                true
            }
            None => false,
        }
    }
}
