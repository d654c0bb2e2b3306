//! # Board Core
//!
//! The domain layer of the bulletin board.
//! Posts, attachment naming and the repository contract live here, with zero
//! infrastructure dependencies.

pub mod attachment;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use attachment::{AttachmentResolver, ResolvedAttachment, UploadDescriptor};
pub use error::{DomainError, RepoError};
pub use service::PostBoard;
