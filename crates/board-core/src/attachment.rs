//! Attachment naming for uploaded images.
//!
//! Only computes where an upload should live. Writing the bytes belongs to
//! whoever received the upload.

use serde::{Deserialize, Serialize};

/// Public prefix uploaded images are served under.
pub const DEFAULT_PUBLIC_PREFIX: &str = "/image";

/// What the upload handler knows about a received file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDescriptor {
    /// Client-supplied file name. Not sanitized here.
    pub original_name: String,
    /// Wall-clock milliseconds at upload time.
    pub uploaded_at_ms: i64,
}

/// A resolved storage location for an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAttachment {
    /// `<uploaded_at_ms>-<random>-<original_name>`
    pub file_name: String,
    /// The value stored on a post: `<prefix>/<file_name>`.
    pub public_path: String,
}

/// Derives collision-resistant names for uploaded files.
#[derive(Debug, Clone)]
pub struct AttachmentResolver {
    public_prefix: String,
}

impl AttachmentResolver {
    pub fn new(public_prefix: impl Into<String>) -> Self {
        let prefix: String = public_prefix.into();
        Self {
            public_prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve an upload to its stored name. `None` means no file was sent.
    pub fn resolve(&self, upload: Option<&UploadDescriptor>) -> Option<ResolvedAttachment> {
        let upload = upload?;
        let file_name = format!(
            "{}-{}-{}",
            upload.uploaded_at_ms,
            rand::random::<u64>(),
            upload.original_name
        );
        let public_path = format!("{}/{}", self.public_prefix, file_name);

        Some(ResolvedAttachment {
            file_name,
            public_path,
        })
    }
}

impl Default for AttachmentResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_PREFIX)
    }
}
