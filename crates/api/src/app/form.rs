//! Multipart form decoding for item create/update.
//!
//! Both endpoints take the same shape — text fields `name`, `type`,
//! `description`, one `coverImage` file, up to five `additionalImages`
//! files — with every part optional at this layer. Presence requirements
//! are enforced by the handlers.

use std::path::Path;

use axum::extract::Multipart;
use axum::http::StatusCode;
use thiserror::Error;

use trove_core::{ItemType, MAX_ADDITIONAL_IMAGES};

use super::uploads::{store_upload, StoredUpload, UploadError};

/// Decoded multipart item form.
///
/// Text fields are trimmed; a field that is empty after trimming counts as
/// absent. `additional_images` distinguishes "no parts supplied" (`None`)
/// from "parts supplied" (`Some(..)`) because update replaces the stored
/// set only in the latter case.
#[derive(Debug, Default)]
pub struct ItemForm {
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
    pub description: Option<String>,
    pub cover_image: Option<StoredUpload>,
    pub additional_images: Option<Vec<StoredUpload>>,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("{0}")]
    InvalidType(String),

    #[error("Invalid multipart request")]
    Malformed,
}

impl FormError {
    pub fn status(&self) -> StatusCode {
        match self {
            FormError::Upload(e) => e.status(),
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl ItemForm {
    /// Drain `multipart`, storing accepted files under `uploads_dir` as they
    /// arrive. Files stored before a later part fails are left behind on
    /// disk (no cleanup-on-error).
    pub async fn from_multipart(
        mut multipart: Multipart,
        uploads_dir: &Path,
    ) -> Result<Self, FormError> {
        let mut form = ItemForm::default();

        while let Some(field) = multipart.next_field().await.map_err(|_| FormError::Malformed)? {
            let Some(field_name) = field.name().map(str::to_string) else {
                continue;
            };

            match field_name.as_str() {
                "name" => {
                    let text = field.text().await.map_err(|_| FormError::Malformed)?;
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        form.name = Some(trimmed.to_string());
                    }
                }
                "description" => {
                    let text = field.text().await.map_err(|_| FormError::Malformed)?;
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        form.description = Some(trimmed.to_string());
                    }
                }
                "type" => {
                    let text = field.text().await.map_err(|_| FormError::Malformed)?;
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        let item_type = trimmed
                            .parse::<ItemType>()
                            .map_err(|e| FormError::InvalidType(e.to_string()))?;
                        form.item_type = Some(item_type);
                    }
                }
                "coverImage" => {
                    let original_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(|_| FormError::Malformed)?;
                    let stored = store_upload(
                        uploads_dir,
                        "coverImage",
                        original_name.as_deref(),
                        content_type.as_deref(),
                        &bytes,
                    )?;
                    form.cover_image = Some(stored);
                }
                "additionalImages" => {
                    let original_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(|_| FormError::Malformed)?;
                    let stored = store_upload(
                        uploads_dir,
                        "additionalImages",
                        original_name.as_deref(),
                        content_type.as_deref(),
                        &bytes,
                    )?;
                    let images = form.additional_images.get_or_insert_with(Vec::new);
                    if images.len() >= MAX_ADDITIONAL_IMAGES {
                        return Err(UploadError::TooManyImages.into());
                    }
                    images.push(stored);
                }
                // Unknown parts are ignored.
                _ => {}
            }
        }

        Ok(form)
    }
}
