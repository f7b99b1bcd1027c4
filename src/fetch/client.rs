//! HTTP client for dashboard documents
//!
//! Each widget document is a static JSON file resolved against the configured
//! base URL and fetched once. No caching, no retry.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::{DashboardConfig, DocumentPaths};
use crate::error::FetchError;
use crate::models::{
    CostChartDocument, CostRow, CostTrendDocument, DashboardCard, NominationCountDocument,
    NominationRow, PendingAction,
};

/// Client for the document host
#[derive(Debug, Clone)]
pub struct DashboardClient {
    /// HTTP client (reused across requests)
    http_client: Client,
    base_url: Url,
    paths: DocumentPaths,
}

impl DashboardClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Share an existing reqwest client (connection pool)
    pub fn with_client(http_client: Client, config: &DashboardConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.clone(),
            paths: config.paths.clone(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Resolve a document path against the base URL
    pub fn document_url(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }

    /// GET a document and parse it as `T`
    ///
    /// Transport errors, non-2xx statuses and shape mismatches all fail the
    /// whole fetch; nothing partial is returned.
    pub async fn fetch_document<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.document_url(path)?;
        let url_text = url.to_string();
        tracing::debug!(url = %url_text, "Fetching document");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url_text.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url_text, %status, "Document request failed");
            return Err(FetchError::Status {
                url: url_text,
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url_text.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(url = %url_text, error = %source, "Document did not parse");
            FetchError::Parse {
                url: url_text,
                source,
            }
        })
    }

    pub async fn fetch_nomination_counts(&self) -> Result<NominationCountDocument, FetchError> {
        self.fetch_document(&self.paths.nomination_counts).await
    }

    /// Cost table rows; the document must be a JSON array
    pub async fn fetch_cost_rows(&self) -> Result<Vec<CostRow>, FetchError> {
        self.fetch_document(&self.paths.cost_rows).await
    }

    pub async fn fetch_cost_chart(&self) -> Result<CostChartDocument, FetchError> {
        self.fetch_document(&self.paths.cost_chart).await
    }

    pub async fn fetch_cost_trend(&self) -> Result<CostTrendDocument, FetchError> {
        self.fetch_document(&self.paths.cost_trend).await
    }

    pub async fn fetch_cards(&self) -> Result<Vec<DashboardCard>, FetchError> {
        self.fetch_document(&self.paths.cards).await
    }

    pub async fn fetch_pending_actions(&self) -> Result<Vec<PendingAction>, FetchError> {
        self.fetch_document(&self.paths.pending_actions).await
    }

    pub async fn fetch_nominations(&self) -> Result<Vec<NominationRow>, FetchError> {
        self.fetch_document(&self.paths.nominations).await
    }
}
