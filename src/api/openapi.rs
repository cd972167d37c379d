use crate::api::{articles, models, review, search, users};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Articles API",
        description = "API pour gérer les articles et leurs avis"
    ),
    paths(
        crate::api::root_handler,
        crate::api::health_handler,
        articles::handlers::list_articles_handler,
        articles::handlers::get_article_handler,
        articles::handlers::create_article_handler,
        articles::handlers::update_article_handler,
        articles::handlers::delete_article_handler,
        search::handlers::search_handler,
        review::handlers::list_reviews_handler,
        review::handlers::add_review_handler,
        review::handlers::review_stats_handler,
        review::handlers::external_reviews_handler,
        users::handlers::list_users_handler,
        users::handlers::get_user_handler,
        users::handlers::create_user_handler,
        users::handlers::update_user_handler,
        users::handlers::delete_user_handler,
    ),
    components(
        schemas(
            models::ArticleResponse,
            models::ArticleCreate,
            models::ArticleUpdate,
            models::AvisBase,
            models::ExternalReviewsResponse,
            models::UserCreate,
            models::UserUpdate,
            models::MessageResponse,
            models::HealthResponse,
            models::RootResponse,
            models::ErrorResponse,
            crate::storage::Article,
            crate::storage::Review,
            crate::storage::User,
            crate::stats::ReviewStats,
        )
    ),
    tags(
        (name = "Root"),
        (name = "Health"),
        (name = "Articles"),
        (name = "Avis"),
        (name = "Avis Externes"),
        (name = "Utilisateurs"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`; the UI also serves the raw document at `OPENAPI_JSON_PATH`
pub fn docs_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
