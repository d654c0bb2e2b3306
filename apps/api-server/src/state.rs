//! Application state - shared across all handlers.

use std::sync::Arc;

#[cfg(feature = "postgres")]
use anyhow::Context;

use board_core::ports::PostRepository;
use board_core::{AttachmentResolver, PostBoard};
use board_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use board_infra::{DatabaseConnections, PostgresPostRepository};

use crate::uploads::ImageStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostBoard,
    pub attachments: AttachmentResolver,
    pub images: ImageStore,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        attachments: AttachmentResolver,
        images: ImageStore,
    ) -> Self {
        Self {
            posts: PostBoard::new(repo),
            attachments,
            images,
        }
    }
}

/// The post repository plus the connection it was built on, if any.
pub struct Storage {
    pub repo: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    db: Option<DatabaseConnections>,
}

impl Storage {
    /// Connect to the configured database, or fall back to memory when none is configured.
    ///
    /// A configured database that cannot be reached is an error: the server
    /// must not start without it.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                let connections = DatabaseConnections::init(config)
                    .await
                    .context("Failed to connect to database")?;
                let repo = Arc::new(PostgresPostRepository::new(Arc::clone(&connections.main)));
                return Ok(Self {
                    repo,
                    db: Some(connections),
                });
            }
        }

        #[cfg(not(feature = "postgres"))]
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without postgres feature");
        }

        tracing::warn!("No database configured. Running in in-memory mode.");
        Ok(Self::in_memory())
    }

    pub fn in_memory() -> Self {
        Self {
            repo: Arc::new(InMemoryPostRepository::new()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Release the database connection after the server has stopped.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        #[cfg(feature = "postgres")]
        if let Some(db) = self.db {
            db.close().await.context("Failed to close database")?;
        }
        Ok(())
    }
}
