//! Environment variable management
//!
//! Handles loading and validation of the environment variables that point the
//! dashboard at its data host.

use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

use crate::error::ConfigError;

/// Variable holding the base URL documents and actions are resolved against
pub const BASE_URL_VAR: &str = "LND_API_BASE_URL";

/// Base URL used when `LND_API_BASE_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Load environment variables from .env file
///
/// Does not fail if .env file doesn't exist (optional configuration).
pub fn load_env() -> Result<()> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Read an optional variable, treating an empty value as unset
pub fn get_optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get the base URL from the environment, falling back to the local default
pub fn get_base_url() -> Result<Url> {
    let raw = get_optional(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    validate_base_url(&raw).with_context(|| format!("{} is not usable", BASE_URL_VAR))
}

/// Validate a base URL and normalise it to end with `/`
///
/// Relative document paths are joined onto the result, so the trailing slash
/// keeps the last path segment from being replaced.
///
/// # Errors
/// Returns error if the value does not parse or is not http(s)
pub fn validate_base_url(raw: &str) -> std::result::Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
