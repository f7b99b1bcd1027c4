//! Runtime configuration
//!
//! Where the dashboard documents live and which host receives approve/reject
//! actions. Values come from the environment (after an optional `.env`),
//! with defaults matching the stock document names.

use anyhow::Result;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::utils::env;

/// Relative paths of the JSON documents each widget loads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentPaths {
    pub nomination_counts: String,
    pub cost_rows: String,
    pub cost_chart: String,
    pub cost_trend: String,
    pub cards: String,
    pub pending_actions: String,
    pub nominations: String,
}

impl Default for DocumentPaths {
    fn default() -> Self {
        Self {
            nomination_counts: "nominationcount.json".to_string(),
            cost_rows: "certificatecost.json".to_string(),
            cost_chart: "codtdata.json".to_string(),
            cost_trend: "newbarchartdata.json".to_string(),
            cards: "ldcarddata.json".to_string(),
            pending_actions: "ldpendingaction.json".to_string(),
            nominations: "LDNominationData.json".to_string(),
        }
    }
}

impl DocumentPaths {
    /// (name, path) pairs
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("nomination_counts", &self.nomination_counts),
            ("cost_rows", &self.cost_rows),
            ("cost_chart", &self.cost_chart),
            ("cost_trend", &self.cost_trend),
            ("cards", &self.cards),
            ("pending_actions", &self.pending_actions),
            ("nominations", &self.nominations),
        ]
    }

    /// (env var, path) pairs for env overrides
    fn entries_mut(&mut self) -> [(&'static str, &mut String); 7] {
        [
            ("LND_NOMINATION_COUNT_PATH", &mut self.nomination_counts),
            ("LND_COST_ROWS_PATH", &mut self.cost_rows),
            ("LND_COST_CHART_PATH", &mut self.cost_chart),
            ("LND_COST_TREND_PATH", &mut self.cost_trend),
            ("LND_CARDS_PATH", &mut self.cards),
            ("LND_PENDING_ACTIONS_PATH", &mut self.pending_actions),
            ("LND_NOMINATIONS_PATH", &mut self.nominations),
        ]
    }

    /// Every path must be non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in self.entries() {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyPath { name });
            }
        }
        Ok(())
    }
}

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL, always ending with `/`
    pub base_url: Url,
    pub paths: DocumentPaths,
}

impl DashboardConfig {
    /// Configuration with default document paths
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::validate_base_url(base_url)?,
            paths: DocumentPaths::default(),
        })
    }

    pub fn with_paths(mut self, paths: DocumentPaths) -> Result<Self, ConfigError> {
        paths.validate()?;
        self.paths = paths;
        Ok(self)
    }

    /// Load from `LND_API_BASE_URL` and the `LND_*_PATH` overrides
    pub fn from_env() -> Result<Self> {
        env::load_env()?;
        let base_url = env::get_base_url()?;

        let mut paths = DocumentPaths::default();
        for (var, path) in paths.entries_mut() {
            if let Some(value) = env::get_optional(var) {
                *path = value;
            }
        }
        paths.validate()?;

        tracing::debug!(base_url = %base_url, "Loaded dashboard configuration");
        Ok(Self { base_url, paths })
    }
}
