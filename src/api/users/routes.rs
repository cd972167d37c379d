use crate::api::models::AppState;
use crate::api::users::handlers::*;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/utilisateurs",
            get(list_users_handler).post(create_user_handler),
        )
        .route(
            "/api/utilisateurs/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}
