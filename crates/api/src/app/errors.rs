//! Envelope helpers: every response, success or failure, is an
//! `ApiEnvelope` so no storage or parse fault can escape a handler raw.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use trove_core::ApiEnvelope;

pub fn json_ok<T: Serialize>(data: T, message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(ApiEnvelope::ok_with_message(data, message)),
    )
        .into_response()
}

pub fn json_created<T: Serialize>(data: T, message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::CREATED,
        Json(ApiEnvelope::ok_with_message(data, message)),
    )
        .into_response()
}

pub fn json_message(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(ApiEnvelope::<()>::message_only(message)),
    )
        .into_response()
}

pub fn json_error(status: StatusCode, error: impl Into<String>) -> axum::response::Response {
    (status, Json(ApiEnvelope::<()>::failure(error))).into_response()
}

pub fn not_found_item() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "Item not found")
}
