use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ExternalReviewsConfig;

/// Why a call to the external review service failed
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("délai d'attente dépassé après {0:?}")]
    Timeout(Duration),
    #[error("statut HTTP inattendu {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Transport(reqwest::Error),
}

/// Result of a fail-open fetch: either the third-party payload or the reason it is missing
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalReviews {
    Available(Value),
    Unavailable { error: String },
}

/// Client for the third-party review service (`GET {base}/reviews/{article_id}`)
pub struct ExternalReviewClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ExternalReviewClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &ExternalReviewsConfig) -> Result<Self, GatewayError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and decode the payload, surfacing every failure
    pub async fn try_fetch(&self, article_id: u64) -> Result<Value, GatewayError> {
        let url = format!("{}/reviews/{}", self.base_url, article_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        response.json::<Value>().await.map_err(|e| self.classify(e))
    }

    /// Never fails; a broken dependency only degrades the outcome.
    pub async fn fetch_reviews(&self, article_id: u64) -> ExternalReviews {
        match self.try_fetch(article_id).await {
            Ok(payload) => {
                info!(article_id, "External reviews fetched");
                ExternalReviews::Available(payload)
            }
            Err(e) => {
                warn!(article_id, error = %e, "External review service unavailable");
                ExternalReviews::Unavailable {
                    error: format!("Impossible de récupérer les avis externes: {}", e),
                }
            }
        }
    }

    fn classify(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::Transport(err)
        }
    }
}
