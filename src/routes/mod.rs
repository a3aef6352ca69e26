pub mod tahanun;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 400 with a JSON error body
pub fn bad_request(msg: impl Into<String>) -> Response {
    let body = Json(ErrorResponse { error: msg.into() });
    (StatusCode::BAD_REQUEST, body).into_response()
}
