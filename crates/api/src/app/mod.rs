//! Application wiring: state, router, health, and the JSON 404 fallback.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;

use trove_store::{FileStore, ItemStore};

use crate::config::Config;

pub mod errors;
pub mod form;
pub mod routes;
pub mod uploads;

/// Whole-request body ceiling. Six image parts at 5 MB each plus text
/// fields fit comfortably under this.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Shared handler state.
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub uploads_dir: PathBuf,
}

/// Build the full application router from configuration.
///
/// Creates the uploads directory up front so the first upload does not race
/// directory creation.
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    std::fs::create_dir_all(&config.uploads_dir)?;

    let state = Arc::new(AppState {
        store: Arc::new(FileStore::new(&config.data_file)),
        uploads_dir: config.uploads_dir.clone(),
    });

    Ok(build_router(state))
}

/// Router assembly, separated so tests can inject their own state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/items", routes::items::router())
        .route("/uploads/:filename", get(uploads::serve_upload))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(Extension(state))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "error": "Route not found",
        })),
    )
}
