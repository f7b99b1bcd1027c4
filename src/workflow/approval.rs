//! Approve/reject submission
//!
//! The list lock is held only while changing item state, never across the
//! network call, so actions on different items proceed independently.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::sync::Mutex;

use super::pending::{ActionRequest, PendingActions};
use crate::error::{ActionError, ApprovalError, WorkflowError};
use crate::models::{ActionKind, PendingAction, PendingEntry};

/// Sends a single approve/reject decision to the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionTransport: Send + Sync {
    async fn submit(&self, id: &str, kind: ActionKind) -> Result<(), ActionError>;
}

/// `POST /api/certifications/{id}/{approve|reject}`; success is any 2xx
#[derive(Debug, Clone)]
pub struct HttpActionTransport {
    http_client: Client,
    base_url: Url,
}

impl HttpActionTransport {
    pub fn new(http_client: Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Endpoint URL for an action under the base path; the id is
    /// percent-encoded as one segment
    pub fn action_url(&self, id: &str, kind: ActionKind) -> Result<Url, ActionError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| ActionError::Transport(format!("Base URL {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "certifications", id, kind.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl ActionTransport for HttpActionTransport {
    async fn submit(&self, id: &str, kind: ActionKind) -> Result<(), ActionError> {
        let url = self.action_url(id, kind)?;
        tracing::info!(id, action = kind.as_str(), "Submitting pending action");

        let response = self
            .http_client
            .post(url)
            .send()
            .await
            .map_err(|e| ActionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ActionError::Rejected(status.as_u16()))
        }
    }
}

/// Pending list plus the transport that submits its decisions
pub struct ApprovalWorkflow<T: ActionTransport> {
    pending: Mutex<PendingActions>,
    transport: T,
}

impl<T: ActionTransport> ApprovalWorkflow<T> {
    pub fn new(transport: T) -> Self {
        Self {
            pending: Mutex::new(PendingActions::default()),
            transport,
        }
    }

    pub fn with_actions(transport: T, actions: Vec<PendingAction>) -> Self {
        Self {
            pending: Mutex::new(PendingActions::new(actions)),
            transport,
        }
    }

    /// Call before fetching a new list; see [`PendingActions::begin_reload`]
    pub async fn begin_reload(&self) {
        self.pending.lock().await.begin_reload();
    }

    pub async fn replace_all(&self, actions: Vec<PendingAction>) {
        self.pending.lock().await.replace_all(actions);
    }

    /// Current entries with their states
    pub async fn snapshot(&self) -> Vec<PendingEntry> {
        self.pending.lock().await.entries().to_vec()
    }

    pub async fn search(&self, term: &str) -> Vec<PendingEntry> {
        self.pending.lock().await.search(term)
    }

    /// Approve immediately; no confirmation step
    pub async fn approve(&self, id: &str) -> Result<(), ApprovalError> {
        let request = self.pending.lock().await.begin_approve(id)?;
        self.dispatch(request).await
    }

    /// Open the reject confirmation for an item
    pub async fn request_reject(&self, id: &str) -> Result<(), WorkflowError> {
        self.pending.lock().await.request_reject(id)
    }

    pub async fn cancel_reject(&self, id: &str) -> Result<(), WorkflowError> {
        self.pending.lock().await.cancel_reject(id)
    }

    /// User acknowledged the confirmation; send the reject
    pub async fn confirm_reject(&self, id: &str) -> Result<(), ApprovalError> {
        let request = self.pending.lock().await.confirm_reject(id)?;
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: ActionRequest) -> Result<(), ApprovalError> {
        let result = self.transport.submit(&request.id, request.kind).await;
        match &result {
            Ok(()) => {
                tracing::info!(id = %request.id, action = request.kind.as_str(), "Pending action resolved");
            }
            Err(e) => {
                tracing::warn!(id = %request.id, action = request.kind.as_str(), error = %e, "Pending action failed");
            }
        }

        if let Err(e) = self.pending.lock().await.complete(&request, &result) {
            tracing::warn!(id = %request.id, error = %e, "Action outcome not applied to the pending list");
            return Err(e.into());
        }
        result.map_err(ApprovalError::Action)
    }
}
