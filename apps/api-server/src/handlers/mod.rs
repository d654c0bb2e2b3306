//! HTTP handlers and route configuration.

mod health;
mod photo;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/", "/api/posts").permanent())
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/photo", web::post().to(photo::upload_photo))
                .route("/search", web::get().to(posts::search_posts))
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("", web::post().to(posts::create_post))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}/edit", web::get().to(posts::edit_post)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use board_core::AttachmentResolver;

    use super::configure_routes;
    use crate::state::{AppState, Storage};
    use crate::uploads::ImageStore;

    fn state(images: &std::path::Path) -> AppState {
        AppState::new(
            Storage::in_memory().repo,
            AttachmentResolver::default(),
            ImageStore::new(images),
        )
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_post_lifecycle() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app!(state(tmp.path()));

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "Hello",
                "content": "World",
                "date": "2024-01-01",
                "image_path": "/image/123-abc.png"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "Hello");
        assert_eq!(body["data"]["image_path"], "/image/123-abc.png");

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}/edit"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id"], id.as_str());

        let req = test::TestRequest::get()
            .uri("/api/search?value=Hello")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["keyword"], "Hello");
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/search?value=Nope")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["posts"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_lookup_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app!(state(tmp.path()));

        let req = test::TestRequest::get()
            .uri("/api/posts/not-an-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/posts/00000000-0000-0000-0000-000000000000/edit")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
    }

    #[actix_web::test]
    async fn test_photo_upload() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app!(state(tmp.path()));

        let req = test::TestRequest::post()
            .uri("/api/photo?name=cat.png")
            .set_payload("png bytes")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let image_path = body["data"]["image_path"].as_str().unwrap();
        assert!(image_path.starts_with("/image/"));
        assert!(image_path.ends_with("-cat.png"));

        let file_name = image_path.trim_start_matches("/image/");
        let stored = std::fs::read(tmp.path().join(file_name)).unwrap();
        assert_eq!(stored, b"png bytes");
    }

    #[actix_web::test]
    async fn test_photo_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app!(state(tmp.path()));

        let req = test::TestRequest::post().uri("/api/photo").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["image_path"].is_null());
    }

    #[actix_web::test]
    async fn test_photo_rejects_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app!(state(tmp.path()));

        let req = test::TestRequest::post()
            .uri("/api/photo?name=..%2F..%2Fevil.sh")
            .set_payload("#!/bin/sh")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_root_redirects_to_list() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app!(state(tmp.path()));

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    }
}
