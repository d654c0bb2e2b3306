//! The post board - create, read and search access to posts.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPost, Post, PostId};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Post operations over an injected repository.
///
/// Holds no state of its own besides the shared repository handle, so clones
/// are cheap and can be handed to every request.
#[derive(Clone)]
pub struct PostBoard {
    repo: Arc<dyn PostRepository>,
}

impl PostBoard {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Store a new post and return its generated id.
    ///
    /// Input is not validated: an empty title or a free-form date is stored
    /// unchanged.
    pub async fn create(&self, input: NewPost) -> Result<Uuid, DomainError> {
        let post = Post::new(input);
        let saved = self.repo.insert(post).await?;
        tracing::debug!(post_id = %saved.id, "Post created");
        Ok(saved.id)
    }

    /// Every stored post, in storage order.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.find_all().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Look up a post by an externally supplied id.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = PostId::parse(raw_id)?;
        self.find(id).await
    }

    /// Posts whose title equals `keyword` exactly.
    pub async fn search_by_title(&self, keyword: &str) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.find_by_title(keyword).await?;
        tracing::debug!(keyword = %keyword, matches = posts.len(), "Searched posts by title");
        Ok(posts)
    }

    /// Load a post for the edit form. Same outcomes as [`PostBoard::get_by_id`].
    pub async fn get_for_edit(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = PostId::parse(raw_id)?;
        tracing::debug!(post_id = %id, "Loading post for edit");
        self.find(id).await
    }

    async fn find(&self, id: PostId) -> Result<Post, DomainError> {
        match self.repo.find_by_id(id.as_uuid()).await? {
            Some(post) => Ok(post),
            None => {
                tracing::debug!(post_id = %id, "Post not found");
                Err(DomainError::NotFound {
                    entity_type: "Post",
                    id: id.as_uuid(),
                })
            }
        }
    }
}
