// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::{get, post},
};
use chat::{chat_handler, health_handler, method_not_allowed, not_found};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const CHAT_PATH: &str = "/api/chat";

/// Preflight answers: any origin, `POST,OPTIONS`, `content-type`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(health_handler))
        .route(CHAT_PATH, post(chat_handler).fallback(method_not_allowed))
        .fallback(not_found)
        // The relay takes whatever the caller sends; no buffering cap.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
