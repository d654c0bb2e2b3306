//! Writes uploaded image bytes to the upload directory.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsafe file name: {0}")]
    UnsafeName(String),

    #[error("Failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Local directory holding uploaded images.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it is missing.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tracing::info!(dir = %self.dir.display(), "Upload directory ready");
        Ok(())
    }

    /// Reject names that could escape the upload directory.
    pub fn check_name(name: &str) -> Result<(), UploadError> {
        let unsafe_name = name.is_empty()
            || name.contains(['/', '\\', '\0'])
            || name.contains("..");
        if unsafe_name {
            return Err(UploadError::UnsafeName(name.to_string()));
        }
        Ok(())
    }

    /// Write `bytes` as `file_name` inside the upload directory.
    pub async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, UploadError> {
        Self::check_name(file_name)?;

        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored upload");

        Ok(path)
    }
}
