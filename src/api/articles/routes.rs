use crate::api::articles::handlers::*;
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/articles",
            get(list_articles_handler).post(create_article_handler),
        )
        .route(
            "/api/articles/{id}",
            get(get_article_handler)
                .put(update_article_handler)
                .delete(delete_article_handler),
        )
}
