#![allow(dead_code)]

use articles_api::api::{self, AppState};
use articles_api::gateway::ExternalReviewClient;
use articles_api::storage::{Store, UserStore};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tower::util::ServiceExt as _;

/// Nothing listens here, so external calls fail fast with a refused connection
pub const UNREACHABLE_REVIEWS: &str = "http://127.0.0.1:1";

pub fn state_with(store: Store, reviews_url: &str, timeout: Duration) -> AppState {
    let client = ExternalReviewClient::new(reviews_url, timeout).unwrap();
    AppState::new(store, UserStore::seeded(), client)
}

/// Router over the demonstration catalog with an unreachable review service
pub fn seeded_router() -> Router {
    api::router(state_with(
        Store::seeded(),
        UNREACHABLE_REVIEWS,
        Duration::from_secs(2),
    ))
}

pub fn empty_router() -> Router {
    api::router(state_with(
        Store::new(),
        UNREACHABLE_REVIEWS,
        Duration::from_secs(2),
    ))
}

/// Serve `app` on an ephemeral port and return its base URL
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send a request, assert the status and return the decoded JSON body
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    expected: StatusCode,
) -> Value {
    let resp = send(app, method, uri, body).await;
    assert_eq!(resp.status(), expected, "unexpected status for {}", uri);
    json_body(resp).await
}

pub async fn assert_error_response(resp: Response<Body>, status: StatusCode) -> String {
    assert_eq!(resp.status(), status);
    let json = json_body(resp).await;
    assert_eq!(json["error"], status.to_string());
    json["message"].as_str().unwrap().to_string()
}
