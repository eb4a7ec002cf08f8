//! Item CRUD endpoints.

use std::sync::Arc;

use axum::extract::{Extension, Multipart, Path};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use chrono::Utc;

use trove_core::{Item, ItemId, ItemPatch};

use crate::app::errors::{json_created, json_error, json_message, json_ok, not_found_item};
use crate::app::form::ItemForm;
use crate::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn list_items(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    // Read faults degrade to an empty collection inside the store.
    let items = state.store.list_all();
    json_ok(items, "Items retrieved successfully")
}

pub async fn get_item(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // An unparseable id cannot name any record, so it is a plain 404.
    let Ok(id) = id.parse::<ItemId>() else {
        return not_found_item();
    };

    match state.store.get_by_id(&id) {
        Some(item) => json_ok(item, "Item retrieved successfully"),
        None => not_found_item(),
    }
}

pub async fn create_item(
    Extension(state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> axum::response::Response {
    let form = match ItemForm::from_multipart(multipart, &state.uploads_dir).await {
        Ok(form) => form,
        Err(e) => return json_error(e.status(), e.to_string()),
    };

    let (Some(name), Some(item_type), Some(description)) =
        (form.name, form.item_type, form.description)
    else {
        return json_error(
            StatusCode::BAD_REQUEST,
            "Name, type, and description are required",
        );
    };
    let Some(cover_image) = form.cover_image else {
        return json_error(StatusCode::BAD_REQUEST, "Cover image is required");
    };

    let item = Item {
        id: ItemId::new(),
        name,
        item_type,
        description,
        cover_image: cover_image.public_path,
        additional_images: form
            .additional_images
            .unwrap_or_default()
            .into_iter()
            .map(|stored| stored.public_path)
            .collect(),
        created_at: Utc::now(),
    };

    if let Err(e) = state.store.create(item.clone()) {
        tracing::error!(error = %e, "item create failed");
        return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create item");
    }

    json_created(item, "Item created successfully")
}

pub async fn update_item(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> axum::response::Response {
    let Ok(id) = id.parse::<ItemId>() else {
        return not_found_item();
    };
    if state.store.get_by_id(&id).is_none() {
        return not_found_item();
    }

    let form = match ItemForm::from_multipart(multipart, &state.uploads_dir).await {
        Ok(form) => form,
        Err(e) => return json_error(e.status(), e.to_string()),
    };

    let patch = ItemPatch {
        name: form.name,
        item_type: form.item_type,
        description: form.description,
        cover_image: form.cover_image.map(|stored| stored.public_path),
        // Supplied additional images replace the stored set wholesale;
        // absent means untouched.
        additional_images: form.additional_images.map(|images| {
            images
                .into_iter()
                .map(|stored| stored.public_path)
                .collect()
        }),
    };

    match state.store.update(&id, patch) {
        Ok(Some(item)) => json_ok(item, "Item updated successfully"),
        Ok(None) => not_found_item(),
        Err(e) => {
            tracing::error!(error = %e, %id, "item update failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update item")
        }
    }
}

pub async fn delete_item(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Ok(id) = id.parse::<ItemId>() else {
        return not_found_item();
    };

    match state.store.delete(&id) {
        Ok(true) => json_message("Item deleted successfully"),
        Ok(false) => not_found_item(),
        Err(e) => {
            tracing::error!(error = %e, %id, "item delete failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete item")
        }
    }
}
