//! Uploaded-image storage and serving.
//!
//! Accepted files are written into the uploads directory under a generated
//! collision-resistant name (`<fieldname>-<unix_millis>-<random>.<ext>`) and
//! referenced everywhere else by their public `/uploads/<name>` path.
//! Orphaned files (after a failed create or a replaced image) are never
//! reclaimed; that is a documented gap, not a bug to fix here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Extension, Path as UrlPath};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use chrono::Utc;
use thiserror::Error;

use super::AppState;
use super::errors::json_error;

/// Per-file size ceiling (5 MB), matching the upload contract.
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// A file accepted into the uploads directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Server-relative reference stored on the item (`/uploads/<name>`).
    pub public_path: String,
}

/// Upload-constraint and storage failures, each mapped to a fixed
/// client-facing message.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File size too large. Maximum size is 5MB.")]
    TooLarge,
    #[error("Only image files are allowed!")]
    NotAnImage,
    #[error("Too many additional images. Maximum is 5.")]
    TooManyImages,
    #[error("failed to store upload: {0}")]
    Io(String),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Generate a storage name that cannot collide in practice: field name,
/// millisecond timestamp, random suffix, original extension.
fn storage_name(field_name: &str, original_name: Option<&str>) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::random();
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    format!("{field_name}-{millis}-{suffix}{ext}")
}

/// Validate and persist one uploaded file.
///
/// Only `image/*` content types are accepted, at most [`MAX_FILE_BYTES`]
/// each; the file content itself is not inspected.
pub fn store_upload(
    uploads_dir: &Path,
    field_name: &str,
    original_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<StoredUpload, UploadError> {
    if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
        return Err(UploadError::NotAnImage);
    }
    if bytes.len() > MAX_FILE_BYTES {
        return Err(UploadError::TooLarge);
    }

    let name = storage_name(field_name, original_name);
    let target: PathBuf = uploads_dir.join(&name);
    std::fs::write(&target, bytes).map_err(|e| UploadError::Io(e.to_string()))?;

    Ok(StoredUpload {
        public_path: format!("/uploads/{name}"),
    })
}

fn content_type_for(filename: &str) -> &'static str {
    match Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// `GET /uploads/:filename` — serve a stored upload.
pub async fn serve_upload(
    Extension(state): Extension<Arc<AppState>>,
    UrlPath(filename): UrlPath<String>,
) -> axum::response::Response {
    // A bare filename only; anything resembling a path escape is rejected.
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return json_error(StatusCode::NOT_FOUND, "Route not found");
    }

    let path = state.uploads_dir.join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&filename))],
            bytes,
        )
            .into_response(),
        Err(_) => json_error(StatusCode::NOT_FOUND, "Route not found"),
    }
}
