//! Image upload handler.

use actix_web::{HttpResponse, web};

use board_core::UploadDescriptor;
use board_shared::ApiResponse;
use board_shared::dto::{PhotoQuery, PhotoResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::uploads::ImageStore;

/// POST /api/photo?name=<file name>
///
/// The request body is the raw image. A missing name or an empty body means
/// no file was sent, which is answered with a null `image_path`.
pub async fn upload_photo(
    state: web::Data<AppState>,
    query: web::Query<PhotoQuery>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let upload = match query.into_inner().name {
        Some(name) if !body.is_empty() => {
            ImageStore::check_name(&name)?;
            Some(UploadDescriptor {
                original_name: name,
                uploaded_at_ms: chrono::Utc::now().timestamp_millis(),
            })
        }
        _ => None,
    };

    let resolved = state.attachments.resolve(upload.as_ref());
    if let Some(attachment) = &resolved {
        state.images.write(&attachment.file_name, &body).await?;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PhotoResponse {
        image_path: resolved.map(|a| a.public_path),
    })))
}
