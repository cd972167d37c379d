use crate::api::extract::{ApiJson, ApiPath};
use crate::api::models::*;
use crate::gateway::ExternalReviews;
use crate::stats::{ReviewStats, review_stats};
use crate::storage::{NewReview, Review};
use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use tracing::info;

#[utoipa::path(
    get,
    path = "/api/articles/{id}/avis",
    params(
        ("id" = u64, Path, description = "Article id"),
    ),
    responses(
        (status = 200, description = "Reviews of the article", body = [Review]),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Avis"
)]
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<u64>,
) -> Result<Json<Vec<Review>>, AppError> {
    let store = state.store.read().await;
    if store.get_article(article_id).is_none() {
        return Err(article_not_found(article_id));
    }

    Ok(Json(store.reviews_for_article(article_id)))
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/avis",
    params(
        ("id" = u64, Path, description = "Article id"),
    ),
    request_body = AvisBase,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Note outside 1..=5", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Avis"
)]
pub async fn add_review_handler(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<u64>,
    ApiJson(request): ApiJson<AvisBase>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    // Existence check and insert share one write lock
    let mut store = state.store.write().await;
    if store.get_article(article_id).is_none() {
        return Err(article_not_found(article_id));
    }

    let note = request.validate_note().map_err(AppError::BadRequest)?;

    let review = store.create_review(NewReview {
        article_id,
        utilisateur: request.utilisateur,
        note,
        commentaire: request.commentaire,
    });

    info!(article_id, review_id = review.id, note, "Review added");

    Ok((StatusCode::CREATED, Json(review)))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}/avis/statistiques",
    params(
        ("id" = u64, Path, description = "Article id"),
    ),
    responses(
        (status = 200, description = "Review statistics", body = ReviewStats),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Avis"
)]
pub async fn review_stats_handler(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<u64>,
) -> Result<Json<ReviewStats>, AppError> {
    let store = state.store.read().await;
    if store.get_article(article_id).is_none() {
        return Err(article_not_found(article_id));
    }

    let reviews = store.reviews_for_article(article_id);
    Ok(Json(review_stats(&reviews)))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}/avis-externes",
    params(
        ("id" = u64, Path, description = "Article id"),
    ),
    responses(
        (status = 200, description = "Internal and third-party reviews; `erreur` is set when the partner is unavailable", body = ExternalReviewsResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse),
    ),
    tag = "Avis Externes"
)]
pub async fn external_reviews_handler(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<u64>,
) -> Result<Json<ExternalReviewsResponse>, AppError> {
    // Release the store before awaiting the third-party service
    let avis_internes = {
        let store = state.store.read().await;
        if store.get_article(article_id).is_none() {
            return Err(article_not_found(article_id));
        }
        store.reviews_for_article(article_id)
    };

    let response = match state.external_reviews.fetch_reviews(article_id).await {
        ExternalReviews::Available(avis_externes) => ExternalReviewsResponse {
            article_id,
            avis_internes,
            avis_externes,
            erreur: None,
        },
        ExternalReviews::Unavailable { error } => ExternalReviewsResponse {
            article_id,
            avis_internes,
            avis_externes: Value::Array(Vec::new()),
            erreur: Some(error),
        },
    };

    Ok(Json(response))
}
