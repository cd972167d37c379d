use crate::gateway::ExternalReviewClient;
use crate::storage::{
    Article, ArticlePatch, NewArticle, Review, Store, UserPatch, UserStore,
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use utoipa::{IntoParams, ToSchema};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub users: Arc<RwLock<UserStore>>,
    pub external_reviews: Arc<ExternalReviewClient>,
}

impl AppState {
    pub fn new(store: Store, users: UserStore, external_reviews: ExternalReviewClient) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            users: Arc::new(RwLock::new(users)),
            external_reviews: Arc::new(external_reviews),
        }
    }
}

/// Article with its reviews, recomputed on every read
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleResponse {
    #[serde(flatten)]
    pub article: Article,
    pub avis: Vec<Review>,
}

/// Body of `POST /api/articles`
#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleCreate {
    pub titre: String,
    pub description: String,
    pub prix: f64,
    pub stock: i64,
    pub categorie: String,
}

/// Body of `PUT /api/articles/{id}`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticleUpdate {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub prix: Option<f64>,
    pub stock: Option<i64>,
    pub categorie: Option<String>,
}

/// Body of `POST /api/articles/{id}/avis`
#[derive(Debug, Deserialize, ToSchema)]
pub struct AvisBase {
    pub utilisateur: String,
    pub note: i64,
    pub commentaire: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: usize,

    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub titre: Option<String>,
    pub categorie: Option<String>,
    pub prix_min: Option<f64>,
    pub prix_max: Option<f64>,
}

/// Internal reviews alongside whatever the third-party service returned
#[derive(Debug, Serialize, ToSchema)]
pub struct ExternalReviewsResponse {
    pub article_id: u64,
    pub avis_internes: Vec<Review>,
    #[schema(value_type = Object)]
    pub avis_externes: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub erreur: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserCreate {
    pub nom: String,
    pub email: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub nom: Option<String>,
    pub email: Option<String>,
}

/// Confirmation for deletions
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub total_articles: usize,
    pub total_reviews: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub documentation: String,
}

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

fn validate_prix(prix: f64) -> Result<(), String> {
    if !prix.is_finite() || prix < 0.0 {
        return Err("prix must be a non-negative number".to_string());
    }
    Ok(())
}

fn validate_stock(stock: i64) -> Result<u32, String> {
    if stock < 0 {
        return Err("stock must be a non-negative integer".to_string());
    }
    u32::try_from(stock).map_err(|_| format!("stock is out of range (max {})", u32::MAX))
}

fn validate_titre(titre: &str) -> Result<(), String> {
    if titre.trim().is_empty() {
        return Err("titre cannot be empty".to_string());
    }
    Ok(())
}

impl ArticleCreate {
    /// Validate the request and convert it into store fields
    pub fn validate(self) -> Result<NewArticle, String> {
        validate_titre(&self.titre)?;
        validate_prix(self.prix)?;
        let stock = validate_stock(self.stock)?;

        Ok(NewArticle {
            titre: self.titre,
            description: self.description,
            prix: self.prix,
            stock,
            categorie: self.categorie,
        })
    }
}

impl ArticleUpdate {
    /// Only supplied fields are checked
    pub fn validate(self) -> Result<ArticlePatch, String> {
        if let Some(titre) = &self.titre {
            validate_titre(titre)?;
        }
        if let Some(prix) = self.prix {
            validate_prix(prix)?;
        }
        let stock = self.stock.map(validate_stock).transpose()?;

        Ok(ArticlePatch {
            titre: self.titre,
            description: self.description,
            prix: self.prix,
            stock,
            categorie: self.categorie,
        })
    }
}

impl AvisBase {
    /// Returns the note narrowed to its valid range
    pub fn validate_note(&self) -> Result<u8, String> {
        u8::try_from(self.note)
            .ok()
            .filter(|note| (1..=5).contains(note))
            .ok_or_else(|| "La note doit être entre 1 et 5".to_string())
    }
}

impl SearchQuery {
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(titre) = self.titre.as_deref().filter(|t| !t.is_empty()) {
            if !article.titre.to_lowercase().contains(&titre.to_lowercase()) {
                return false;
            }
        }
        if let Some(categorie) = self.categorie.as_deref().filter(|c| !c.is_empty()) {
            if article.categorie.to_lowercase() != categorie.to_lowercase() {
                return false;
            }
        }
        if self.prix_min.is_some_and(|min| article.prix < min) {
            return false;
        }
        if self.prix_max.is_some_and(|max| article.prix > max) {
            return false;
        }
        true
    }
}

impl From<UserUpdate> for UserPatch {
    fn from(update: UserUpdate) -> Self {
        Self {
            nom: update.nom,
            email: update.email,
        }
    }
}

pub fn article_not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Article avec l'ID {} non trouvé", id))
}

pub fn user_not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Utilisateur avec l'ID {} non trouvé", id))
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse {
            error: status.to_string(),
            message,
        }))
        .into_response()
    }
}
