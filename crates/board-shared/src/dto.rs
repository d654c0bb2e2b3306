//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use board_core::domain::{NewPost, Post};

/// Request to save a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            date: req.date,
            image_path: req.image_path,
        }
    }
}

/// Response after a post was saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub id: Uuid,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
    pub image_path: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            date: post.date,
            image_path: post.image_path,
        }
    }
}

/// Query string of a title search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub value: String,
}

/// Search results together with the keyword that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub keyword: String,
    pub posts: Vec<PostResponse>,
}

/// Query string of an image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoQuery {
    pub name: Option<String>,
}

/// Where an uploaded image can be referenced from. `None` when no file was sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    pub image_path: Option<String>,
}
