use crate::api::extract::ApiQuery;
use crate::api::models::*;
use axum::{Json, extract::State};
use tracing::info;

#[utoipa::path(
    get,
    path = "/api/articles/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Articles matching every supplied filter", body = [ArticleResponse]),
        (status = 400, description = "Malformed price bound", body = ErrorResponse),
    ),
    tag = "Articles"
)]
pub async fn search_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Json<Vec<ArticleResponse>> {
    let store = state.store.read().await;

    let results: Vec<ArticleResponse> = store
        .list_articles()
        .iter()
        .filter(|a| query.matches(a))
        .cloned()
        .map(|article| ArticleResponse {
            avis: store.reviews_for_article(article.id),
            article,
        })
        .collect();

    info!(
        titre = ?query.titre,
        categorie = ?query.categorie,
        found = results.len(),
        "Search complete"
    );

    Json(results)
}
