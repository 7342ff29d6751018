//! Photo persistence port: owner-addressed files under one storage root.

use async_trait::async_trait;
use uuid::Uuid;

/// Errors raised while storing a file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileStoreError {
    /// The storage root could not be created.
    #[error("failed to prepare storage root: {message}")]
    Directory { message: String },
    /// The file write failed (disk full, permission, …).
    #[error("failed to write file: {message}")]
    Write { message: String },
}

impl FileStoreError {
    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// An uploaded file's bytes plus the client-supplied name (used only for its
/// extension).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub bytes: Vec<u8>,
    pub original_name: Option<String>,
}

impl FileUpload {
    /// True when there is nothing to store.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The extension of the original filename, including the leading dot of
    /// the last `.`-delimited suffix; `None` when the name is absent or has
    /// no dot.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ports::FileUpload;
    ///
    /// let upload = FileUpload { bytes: vec![1], original_name: Some("shoe.png".into()) };
    /// assert_eq!(upload.extension(), Some(".png"));
    ///
    /// let bare = FileUpload { bytes: vec![1], original_name: Some("shoe".into()) };
    /// assert_eq!(bare.extension(), None);
    /// ```
    pub fn extension(&self) -> Option<&str> {
        let name = self.original_name.as_deref()?;
        name.rfind('.').map(|dot| &name[dot..])
    }
}

/// Port for photo file persistence.
///
/// Filenames are deterministic per owning item id (`item-<id><ext>`), so
/// re-storing for the same id overwrites rather than accumulating orphans.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Write the upload under the storage root, creating the root if needed,
    /// and return the stored filename (not a path).
    async fn store(&self, upload: &FileUpload, owner_id: Uuid) -> Result<String, FileStoreError>;

    /// Remove a stored file. Returns `false` without touching the filesystem
    /// for empty or suspicious names, `true` when the file is gone afterwards
    /// (including when it never existed), and `false` when the removal itself
    /// failed. Failures are logged, never propagated.
    async fn delete(&self, filename: &str) -> bool;
}
