use crate::api::models::AppState;
use crate::api::review::handlers::*;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/articles/{id}/avis",
            get(list_reviews_handler).post(add_review_handler),
        )
        .route(
            "/api/articles/{id}/avis/statistiques",
            get(review_stats_handler),
        )
        .route(
            "/api/articles/{id}/avis-externes",
            get(external_reviews_handler),
        )
}
