pub mod articles;
pub mod extract;
pub mod models;
pub mod openapi;
pub mod review;
pub mod search;
pub mod users;

// Re-exports
pub use models::*;

use axum::{Json, Router, extract::State, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service status and collection sizes", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "API Articles en ligne".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_articles: store.article_count(),
        total_reviews: store.review_count(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome payload with the docs location", body = RootResponse)),
    tag = "Root"
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Bienvenue sur l'API Articles".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documentation: "/docs".to_string(),
    })
}

/// Assemble every route, plus the Swagger UI, with tracing and permissive CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(articles::routes())
        .merge(search::routes())
        .merge(review::routes())
        .merge(users::routes())
        .merge(openapi::docs_router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
