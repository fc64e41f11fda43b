//! Rendering of application errors as HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fx_shared::AppError;
use serde_json::json;

/// Renders an error as `{"error": <message>}` with the matching status code.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(json!({ "error": err.message() }))).into_response()
}
