// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

pub const MISSING_KEY_MESSAGE: &str = "OPENAI_API_KEY not configured";

/// Every failure the relay can report. All of them become a JSON `{"error": ...}` body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("{}", MISSING_KEY_MESSAGE)]
    MissingCredential,

    #[error("{0}")]
    BadRequest(String),

    /// Already classified for display.
    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
