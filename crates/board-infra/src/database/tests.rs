use std::sync::Arc;

use board_core::domain::{NewPost, Post};
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, Transaction};

use crate::database::DatabaseConnections;
use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str, image_path: Option<&str>) -> post::Model {
    post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        date: "2024-01-01".to_owned(),
        image_path: image_path.map(str::to_owned),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post", Some("/image/1-2-a.png"));
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.image_path.as_deref(), Some("/image/1-2-a.png"));
}

#[tokio::test]
async fn test_find_post_by_id_absent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("a", None), model("b", None)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts: Vec<Post> = repo.find_all().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "a");
}

#[tokio::test]
async fn test_insert_post_returns_stored_row() {
    let post = Post::new(NewPost {
        title: "Hello".to_owned(),
        content: "World".to_owned(),
        date: "2024-01-01".to_owned(),
        image_path: None,
    });
    let stored = post::Model {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        date: post.date.clone(),
        image_path: None,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved = repo.insert(post.clone()).await.unwrap();
    assert_eq!(saved, post);
}

#[tokio::test]
async fn test_find_by_title_binds_keyword() {
    let keyword = "x' OR '1'='1";
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_by_title(keyword).await.unwrap();
    assert!(posts.is_empty());

    let log = Arc::into_inner(repo.db).unwrap().into_transaction_log();
    assert_eq!(
        log,
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "posts"."id", "posts"."title", "posts"."content", "posts"."date", "posts"."image_path" FROM "posts" WHERE "posts"."title" = $1"#,
            [keyword.into()],
        )]
    );
}

#[tokio::test]
async fn test_connection_error_maps_to_connection_kind() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_owned(),
        ))])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = BaseRepository::<Post, uuid::Uuid>::find_all(&repo).await.unwrap_err();
    assert!(matches!(err, RepoError::Connection(_)));
}

#[tokio::test]
async fn test_query_error_maps_to_query_kind() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("relation \"posts\" does not exist".to_owned())])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo.find_by_title("Foo").await.unwrap_err();
    assert!(matches!(err, RepoError::Query(_)));
}

#[tokio::test]
async fn test_repository_shares_connection_handle() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("shared", None)]])
        .into_connection();
    let connections = DatabaseConnections::from_conn(db);

    let repo = PostgresPostRepository::new(Arc::clone(&connections.main));
    assert_eq!(Arc::strong_count(&connections.main), 2);

    let posts: Vec<Post> = repo.find_all().await.unwrap();
    assert_eq!(posts[0].title, "shared");

    connections.close().await.unwrap();
}
