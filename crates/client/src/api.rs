//! HTTP client for the item API.
//!
//! Every method resolves to an [`ApiEnvelope`]: connect failures, bad
//! statuses, and undecodable bodies are all folded into a non-success
//! envelope so callers can trigger the fallback behaviors without a second
//! error channel. Relative image paths in responses are rewritten to
//! absolute URLs against the server base.

use reqwest::multipart::{Form, Part};
use trove_core::{ApiEnvelope, Item, ItemId};

use crate::forms::{ItemFormData, ItemUpdateData, UploadFile};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    /// e.g. `http://localhost:3001` — no trailing slash.
    server_base: String,
}

impl ApiClient {
    pub fn new(server_base: impl Into<String>) -> Self {
        let server_base = server_base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            server_base,
        }
    }

    pub fn server_base(&self) -> &str {
        &self.server_base
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api{endpoint}", self.server_base)
    }

    /// Prefix any non-absolute image reference with the server base.
    fn resolve_image_urls(&self, mut item: Item) -> Item {
        if !item.cover_image.starts_with("http") {
            item.cover_image = format!("{}{}", self.server_base, item.cover_image);
        }
        for img in &mut item.additional_images {
            if !img.starts_with("http") {
                *img = format!("{}{img}", self.server_base);
            }
        }
        item
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: Result<reqwest::Response, reqwest::Error>,
        failure: &str,
    ) -> ApiEnvelope<T> {
        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "API request failed");
                return ApiEnvelope::failure(failure);
            }
        };
        match response.json::<ApiEnvelope<T>>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "API response was not a valid envelope");
                ApiEnvelope::failure(failure)
            }
        }
    }

    pub async fn health(&self) -> ApiEnvelope<()> {
        let response = self.http.get(self.api_url("/health")).send().await;
        Self::decode(response, "Network error occurred").await
    }

    pub async fn list_items(&self) -> ApiEnvelope<Vec<Item>> {
        let response = self.http.get(self.api_url("/items")).send().await;
        let mut envelope: ApiEnvelope<Vec<Item>> =
            Self::decode(response, "Network error occurred").await;
        if let Some(items) = envelope.data.take() {
            envelope.data = Some(
                items
                    .into_iter()
                    .map(|item| self.resolve_image_urls(item))
                    .collect(),
            );
        }
        envelope
    }

    pub async fn get_item(&self, id: &ItemId) -> ApiEnvelope<Item> {
        let response = self
            .http
            .get(self.api_url(&format!("/items/{id}")))
            .send()
            .await;
        let mut envelope: ApiEnvelope<Item> =
            Self::decode(response, "Network error occurred").await;
        if let Some(item) = envelope.data.take() {
            envelope.data = Some(self.resolve_image_urls(item));
        }
        envelope
    }

    pub async fn create_item(&self, form_data: ItemFormData) -> ApiEnvelope<Item> {
        let mut form = Form::new()
            .text("name", form_data.name)
            .text("type", form_data.item_type.as_str())
            .text("description", form_data.description);
        form = match attach_file(form, "coverImage", form_data.cover_image) {
            Ok(form) => form,
            Err(envelope) => return envelope,
        };
        for file in form_data.additional_images {
            form = match attach_file(form, "additionalImages", file) {
                Ok(form) => form,
                Err(envelope) => return envelope,
            };
        }

        let response = self
            .http
            .post(self.api_url("/items"))
            .multipart(form)
            .send()
            .await;
        let mut envelope: ApiEnvelope<Item> = Self::decode(response, "Upload failed").await;
        if let Some(item) = envelope.data.take() {
            envelope.data = Some(self.resolve_image_urls(item));
        }
        envelope
    }

    pub async fn update_item(&self, id: &ItemId, update: ItemUpdateData) -> ApiEnvelope<Item> {
        let mut form = Form::new();
        if let Some(name) = update.name {
            form = form.text("name", name);
        }
        if let Some(item_type) = update.item_type {
            form = form.text("type", item_type.as_str());
        }
        if let Some(description) = update.description {
            form = form.text("description", description);
        }
        if let Some(file) = update.cover_image {
            form = match attach_file(form, "coverImage", file) {
                Ok(form) => form,
                Err(envelope) => return envelope,
            };
        }
        if let Some(files) = update.additional_images {
            for file in files {
                form = match attach_file(form, "additionalImages", file) {
                    Ok(form) => form,
                    Err(envelope) => return envelope,
                };
            }
        }

        let response = self
            .http
            .put(self.api_url(&format!("/items/{id}")))
            .multipart(form)
            .send()
            .await;
        let mut envelope: ApiEnvelope<Item> = Self::decode(response, "Update failed").await;
        if let Some(item) = envelope.data.take() {
            envelope.data = Some(self.resolve_image_urls(item));
        }
        envelope
    }

    pub async fn delete_item(&self, id: &ItemId) -> ApiEnvelope<()> {
        let response = self
            .http
            .delete(self.api_url(&format!("/items/{id}")))
            .send()
            .await;
        Self::decode(response, "Network error occurred").await
    }
}

fn attach_file<T>(
    form: Form,
    field_name: &'static str,
    file: UploadFile,
) -> Result<Form, ApiEnvelope<T>> {
    let part = Part::bytes(file.bytes)
        .file_name(file.filename)
        .mime_str(&file.content_type)
        .map_err(|_| ApiEnvelope::failure("Upload failed"))?;
    Ok(form.part(field_name, part))
}
