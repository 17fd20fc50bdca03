//! Success response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Favorite mutations answer 201 with a bare JSON string, for removals too.
pub fn created_message(message: String) -> (StatusCode, Json<String>) {
    (StatusCode::CREATED, Json(message))
}
