// src/serverless.rs
//! Function-style entrypoint: one `http::Request` in, one `http::Response` out,
//! with no router in between. Suitable for platforms that hand the handler a
//! raw request per invocation.

use axum::{
    Json,
    body::{Body, Bytes},
    http::{HeaderValue, Method, Request, Response, StatusCode, header},
    response::IntoResponse,
};

use crate::message::ErrorResponse;
use crate::services::relay::ChatRelay;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

pub async fn handle(relay: &ChatRelay, req: Request<Bytes>) -> Response<Body> {
    let mut res = match req.method() {
        &Method::OPTIONS => preflight(),
        &Method::POST => match relay.relay(req.body()).await {
            Ok(reply) => Json(reply).into_response(),
            Err(e) => e.into_response(),
        },
        _ => (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse::new("Method not allowed")),
        )
            .into_response(),
    };

    res.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    res
}

fn preflight() -> Response<Body> {
    let mut res = Response::new(Body::empty());
    let headers = res.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    res
}
