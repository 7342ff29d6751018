//! Filesystem-backed [`FileStore`].
//!
//! All photos live flat under one root directory, served verbatim by the
//! static `/uploads` route. Filenames are derived from the owning item id,
//! `item-<id><ext>`, so a re-upload for the same item overwrites the previous
//! file instead of leaving orphans behind.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{FileStore, FileStoreError, FileUpload};

/// Photo store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    /// Use `root` as the storage directory. It is created lazily on the
    /// first store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Reject names that could escape the storage root. Deletion only ever
/// receives filenames this adapter produced, so anything with a path
/// separator or a parent-directory component is hostile or corrupt.
fn is_suspicious(filename: &str) -> bool {
    filename.contains('/') || filename.contains('\\') || filename.contains("..")
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn store(&self, upload: &FileUpload, owner_id: Uuid) -> Result<String, FileStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| FileStoreError::directory(err.to_string()))?;

        let filename = format!("item-{owner_id}{}", upload.extension().unwrap_or(""));
        tokio::fs::write(self.root.join(&filename), &upload.bytes)
            .await
            .map_err(|err| FileStoreError::write(err.to_string()))?;
        Ok(filename)
    }

    async fn delete(&self, filename: &str) -> bool {
        if filename.is_empty() {
            return false;
        }
        if is_suspicious(filename) {
            warn!(filename, "refusing to delete suspicious filename");
            return false;
        }
        match tokio::fs::remove_file(self.root.join(filename)).await {
            Ok(()) => true,
            // Already gone is the outcome the caller wanted.
            Err(err) if err.kind() == ErrorKind::NotFound => true,
            Err(err) => {
                warn!(filename, error = %err, "photo deletion failed");
                false
            }
        }
    }
}
