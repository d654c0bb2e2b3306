//! # Board API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use board_core::AttachmentResolver;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod uploads;

use config::AppConfig;
use state::{AppState, Storage};
use telemetry::TelemetryConfig;
use uploads::ImageStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting board API server on {}:{}", config.host, config.port);

    let storage = Storage::connect(config.database.as_ref()).await?;

    let images = ImageStore::new(&config.uploads.dir);
    images
        .ensure_dir()
        .await
        .with_context(|| format!("Cannot prepare {}", images.dir().display()))?;

    let state = AppState::new(
        storage.repo.clone(),
        AttachmentResolver::new(config.uploads.public_prefix.clone()),
        images,
    );
    let max_upload = config.uploads.max_bytes;

    tracing::info!("Application state initialized");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(max_upload))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped, shutting down storage");
    storage.shutdown().await
}
