use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{
    error::AppError,
    message::{ChatResponse, ErrorResponse, HealthResponse},
    state::SharedState,
};

/// Takes the raw body so that a missing or malformed JSON payload reaches the
/// relay's validation instead of being rejected by an extractor.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    state.relay.relay(&body).await.map(Json)
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
