//! Post handlers.

use actix_web::{HttpResponse, web};

use board_shared::ApiResponse;
use board_shared::dto::{
    CreatePostRequest, CreatePostResponse, PostResponse, SearchQuery, SearchResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = state.posts.create(body.into_inner().into()).await?;
    tracing::info!(post_id = %id, "Post saved");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        CreatePostResponse { id },
        "Post saved",
    )))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(post))))
}

/// GET /api/posts/{id}/edit
pub async fn edit_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_for_edit(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(post))))
}

/// GET /api/search?value=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let keyword = query.into_inner().value;
    let posts = state.posts.search_by_title(&keyword).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SearchResponse {
        keyword,
        posts: posts.into_iter().map(Into::into).collect(),
    })))
}
