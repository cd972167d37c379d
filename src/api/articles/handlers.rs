use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::models::*;
use crate::storage::{Article, Store};
use axum::{Json, extract::State, http::StatusCode};
use tracing::info;

fn with_reviews(store: &Store, article: Article) -> ArticleResponse {
    let avis = store.reviews_for_article(article.id);
    ArticleResponse { article, avis }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ListQuery),
    responses(
        (status = 200, description = "Articles in insertion order", body = [ArticleResponse]),
        (status = 400, description = "Malformed skip or limit", body = ErrorResponse),
    ),
    tag = "Articles"
)]
pub async fn list_articles_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Json<Vec<ArticleResponse>> {
    let store = state.store.read().await;

    let articles = store
        .list_articles()
        .iter()
        .skip(query.skip)
        .take(query.limit)
        .cloned()
        .map(|a| with_reviews(&store, a))
        .collect();

    Json(articles)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(
        ("id" = u64, Path, description = "Article id"),
    ),
    responses(
        (status = 200, description = "Article with its reviews", body = ArticleResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Articles"
)]
pub async fn get_article_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<ArticleResponse>, AppError> {
    let store = state.store.read().await;
    let article = store.get_article(id).cloned().ok_or_else(|| article_not_found(id))?;

    Ok(Json(with_reviews(&store, article)))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleCreate,
    responses(
        (status = 201, description = "Article created", body = ArticleResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
    ),
    tag = "Articles"
)]
pub async fn create_article_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ArticleCreate>,
) -> Result<(StatusCode, Json<ArticleResponse>), AppError> {
    // Validate
    let fields = request.validate().map_err(AppError::BadRequest)?;

    let mut store = state.store.write().await;
    let article = store.create_article(fields);

    info!(article_id = article.id, titre = %article.titre, "Article created");

    Ok((StatusCode::CREATED, Json(with_reviews(&store, article))))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(
        ("id" = u64, Path, description = "Article id"),
    ),
    request_body = ArticleUpdate,
    responses(
        (status = 200, description = "Article updated", body = ArticleResponse),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Articles"
)]
pub async fn update_article_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<ArticleUpdate>,
) -> Result<Json<ArticleResponse>, AppError> {
    let patch = request.validate().map_err(AppError::BadRequest)?;

    let mut store = state.store.write().await;
    let article = store
        .update_article(id, patch)
        .ok_or_else(|| article_not_found(id))?;

    info!(article_id = id, "Article updated");

    Ok(Json(with_reviews(&store, article)))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(
        ("id" = u64, Path, description = "Article id"),
    ),
    responses(
        (status = 200, description = "Deleted, or already absent", body = MessageResponse),
    ),
    tag = "Articles"
)]
pub async fn delete_article_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Json<MessageResponse> {
    state.store.write().await.delete_article(id);

    info!(article_id = id, "Article deleted");

    Json(MessageResponse {
        message: format!("Article {} supprimé avec succès", id),
    })
}
