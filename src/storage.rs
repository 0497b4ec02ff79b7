use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;

/// Blob persistence seam. The disk backend below is what production runs;
/// tests substitute their own implementations through `AppState`.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Open a writer for a new object. Nothing is visible under `key` until
    /// the writer commits.
    async fn create(&self, key: &str) -> anyhow::Result<Box<dyn BlobWriter>>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}

/// Incremental writer for one object. Dropping an uncommitted writer discards
/// whatever was written.
#[async_trait]
pub trait BlobWriter: Send {
    async fn write(&mut self, chunk: Bytes) -> anyhow::Result<()>;
    /// Make the object visible under its key and return the byte count.
    async fn commit(self: Box<Self>) -> anyhow::Result<u64>;
    async fn abort(self: Box<Self>);
}

/// Stores blobs as plain files under one root directory. Writers stream into
/// `<key>.part` and rename on commit, so a crashed or cancelled upload never
/// leaves a file under its final name.
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub async fn new(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("create storage dir {}", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
        // Keys are generated server-side; reject anything path-like anyway.
        anyhow::ensure!(
            !key.is_empty() && !key.contains('/') && !key.contains('\\') && !key.contains(".."),
            "invalid storage key {key:?}"
        );
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl StorageClient for DiskStorage {
    async fn create(&self, key: &str) -> anyhow::Result<Box<dyn BlobWriter>> {
        let final_path = self.path_for(key)?;
        let tmp_path = final_path.with_extension(format!(
            "{}part",
            final_path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| format!("{e}."))
                .unwrap_or_default()
        ));
        let file = tokio::fs::File::create(&tmp_path)
            .await
            .with_context(|| format!("create {}", tmp_path.display()))?;
        Ok(Box::new(DiskWriter {
            file: Some(file),
            tmp_path,
            final_path,
            written: 0,
            committed: false,
        }))
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::remove_file(&path)
            .await
            .with_context(|| format!("delete {}", path.display()))
    }
}

struct DiskWriter {
    file: Option<tokio::fs::File>,
    tmp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
    committed: bool,
}

#[async_trait]
impl BlobWriter for DiskWriter {
    async fn write(&mut self, chunk: Bytes) -> anyhow::Result<()> {
        let file = self
            .file
            .as_mut()
            .context("write after commit or abort")?;
        file.write_all(&chunk).await.context("write chunk")?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    async fn commit(mut self: Box<Self>) -> anyhow::Result<u64> {
        let mut file = self.file.take().context("already committed")?;
        file.flush().await.context("flush")?;
        file.sync_all().await.context("sync")?;
        drop(file);
        tokio::fs::rename(&self.tmp_path, &self.final_path)
            .await
            .with_context(|| format!("rename into {}", self.final_path.display()))?;
        self.committed = true;
        Ok(self.written)
    }

    async fn abort(mut self: Box<Self>) {
        self.file.take();
        let _ = tokio::fs::remove_file(&self.tmp_path).await;
        self.committed = true;
    }
}

impl Drop for DiskWriter {
    fn drop(&mut self) {
        // Covers cancelled uploads: the handler future is dropped mid-stream
        // and the temp file must not survive.
        if !self.committed {
            self.file.take();
            let _ = std::fs::remove_file(&self.tmp_path);
        }
    }
}
