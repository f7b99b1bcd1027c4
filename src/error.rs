//! Error types for the dashboard backend
//!
//! Two failure kinds reach the user: a fetch failure, which replaces a widget
//! body with a "no data" notice, and an action failure on a single pending item.
//! The remaining enums cover local state transitions, configuration and export.

use thiserror::Error;

/// Message shown in place of a widget whose data could not be loaded
pub const NO_DATA_MESSAGE: &str = "No Data Available. Check Your Network Connection";

/// Failure while loading a JSON document for a widget
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request could not be built or sent (connection refused, DNS, ...)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Body was not the expected document shape
    #[error("Failed to parse document from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Document path could not be joined onto the base URL
    #[error("Invalid document path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl FetchError {
    /// Text shown to the user for any fetch failure
    pub fn user_message(&self) -> &'static str {
        NO_DATA_MESSAGE
    }
}

/// Failure of an approve/reject call against the action endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Endpoint answered with a non-2xx status
    #[error("Action endpoint returned status {0}")]
    Rejected(u16),

    /// Request never produced a response
    #[error("Action request failed: {0}")]
    Transport(String),
}

/// Invalid trigger on the pending-action list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Pending action '{0}' not found")]
    NotFound(String),

    /// Item is processing or waiting for reject confirmation; trigger ignored
    #[error("Pending action '{0}' is busy")]
    Busy(String),

    /// Confirm or cancel issued without an open reject confirmation
    #[error("Pending action '{0}' has no reject awaiting confirmation")]
    NoConfirmationPending(String),

    /// Completion reported for a request the list no longer tracks
    #[error("Pending action '{0}' is not processing")]
    NotProcessing(String),
}

/// Failure of an approve or reject trigger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApprovalError {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Invalid runtime configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Document path for {name} cannot be empty")]
    EmptyPath { name: &'static str },
}

/// Failure while writing an export sheet
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_user_message_is_no_data_notice() {
        let err = FetchError::InvalidPath {
            path: "::".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.user_message(), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_action_error_display() {
        assert_eq!(
            ActionError::Rejected(500).to_string(),
            "Action endpoint returned status 500"
        );
    }

    #[test]
    fn test_workflow_error_display() {
        let err = WorkflowError::Busy("id-1".to_string());
        assert!(err.to_string().contains("id-1"));
    }
}
