use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

/// Catalog item
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Article {
    pub id: u64,
    pub titre: String,
    pub description: String,
    pub prix: f64,
    pub stock: u32,
    pub categorie: String,
    pub date_ajout: DateTime<Utc>,
}

/// User review attached to one article
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Review {
    pub id: u64,
    pub article_id: u64,
    pub utilisateur: String,
    pub note: u8,
    pub commentaire: String,
    pub date_creation: DateTime<Utc>,
}

/// Fields required to create an article
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub titre: String,
    pub description: String,
    pub prix: f64,
    pub stock: u32,
    pub categorie: String,
}

/// Partial article update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub prix: Option<f64>,
    pub stock: Option<u32>,
    pub categorie: Option<String>,
}

/// Fields required to create a review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub article_id: u64,
    pub utilisateur: String,
    pub note: u8,
    pub commentaire: String,
}

/// In-memory article and review collections.
///
/// Deleting an article leaves its reviews in place. Since ids are assigned as
/// `max + 1`, removing the newest article lets the next created one inherit
/// those orphaned reviews.
#[derive(Debug, Default)]
pub struct Store {
    articles: Vec<Article>,
    reviews: Vec<Review>,
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demonstration catalog
    pub fn seeded() -> Self {
        let mut store = Self::new();
        super::seed::load(&mut store);
        info!(
            articles = store.article_count(),
            reviews = store.review_count(),
            "Loaded seed catalog"
        );
        store
    }

    pub fn list_articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get_article(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn create_article(&mut self, fields: NewArticle) -> Article {
        let article = Article {
            id: next_id(self.articles.iter().map(|a| a.id)),
            titre: fields.titre,
            description: fields.description,
            prix: fields.prix,
            stock: fields.stock,
            categorie: fields.categorie,
            date_ajout: Utc::now(),
        };
        self.articles.push(article.clone());
        article
    }

    pub fn update_article(&mut self, id: u64, patch: ArticlePatch) -> Option<Article> {
        let article = self.articles.iter_mut().find(|a| a.id == id)?;

        if let Some(titre) = patch.titre {
            article.titre = titre;
        }
        if let Some(description) = patch.description {
            article.description = description;
        }
        if let Some(prix) = patch.prix {
            article.prix = prix;
        }
        if let Some(stock) = patch.stock {
            article.stock = stock;
        }
        if let Some(categorie) = patch.categorie {
            article.categorie = categorie;
        }

        Some(article.clone())
    }

    /// Always succeeds, whether or not an article matched.
    pub fn delete_article(&mut self, id: u64) -> bool {
        self.articles.retain(|a| a.id != id);
        true
    }

    pub fn reviews_for_article(&self, article_id: u64) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.article_id == article_id)
            .cloned()
            .collect()
    }

    /// Callers check note range and article existence first.
    pub fn create_review(&mut self, fields: NewReview) -> Review {
        let review = Review {
            id: next_id(self.reviews.iter().map(|r| r.id)),
            article_id: fields.article_id,
            utilisateur: fields.utilisateur,
            note: fields.note,
            commentaire: fields.commentaire,
            date_creation: Utc::now(),
        };
        self.reviews.push(review.clone());
        review
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}
