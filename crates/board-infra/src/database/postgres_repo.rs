//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use board_core::domain::Post;
use board_core::error::RepoError;
use board_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_title(&self, title: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(keyword = %title, "Finding posts by title");

        // Bound as a parameter; the keyword never becomes SQL text.
        let result = PostEntity::find()
            .filter(post::Column::Title.eq(title))
            .all(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
