//! Pending-action list and per-item state machine
//!
//! ```text
//! Idle/Failed --approve--> Processing(approve)
//! Idle/Failed --reject---> AwaitingRejectConfirmation --confirm--> Processing(reject)
//!                                                     --cancel---> Idle
//! Processing --success--> (removed)
//! Processing --failure--> Failed
//! ```
//!
//! Items that are processing or awaiting confirmation ignore new triggers.
//! Transitions on one item never touch another.

use std::collections::{HashMap, HashSet};

use crate::error::{ActionError, WorkflowError};
use crate::models::{ActionKind, ItemState, PendingAction, PendingEntry};

/// Request to send to the action endpoint for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub id: String,
    pub kind: ActionKind,
}

/// The in-memory pending set, each action stored with its state
#[derive(Debug, Clone, Default)]
pub struct PendingActions {
    entries: Vec<PendingEntry>,
    /// Ids removed by a successful action since the last reload began
    resolved: HashSet<String>,
}

impl PendingActions {
    pub fn new(actions: Vec<PendingAction>) -> Self {
        Self {
            entries: actions.into_iter().map(PendingEntry::new).collect(),
            resolved: HashSet::new(),
        }
    }

    /// Mark the start of a list fetch
    ///
    /// Items resolved from here on are left out of the list that fetch
    /// returns, since the server may have answered before the action landed.
    pub fn begin_reload(&mut self) {
        self.resolved.clear();
    }

    /// Replace the set after a fresh fetch
    ///
    /// Incoming items that are processing or awaiting reject confirmation
    /// keep that state, so an in-flight request still completes against
    /// them. Items resolved since `begin_reload` are dropped.
    pub fn replace_all(&mut self, actions: Vec<PendingAction>) {
        let resolved = std::mem::take(&mut self.resolved);
        let mut busy: HashMap<String, ItemState> = self
            .entries
            .drain(..)
            .filter(|entry| entry.state.is_busy())
            .map(|entry| (entry.action.id, entry.state))
            .collect();

        self.entries = actions
            .into_iter()
            .filter(|action| !resolved.contains(&action.id))
            .map(|action| {
                let mut entry = PendingEntry::new(action);
                if let Some(state) = busy.remove(entry.id()) {
                    entry.state = state;
                }
                entry
            })
            .collect();
    }

    pub fn entries(&self) -> &[PendingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PendingEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut PendingEntry, WorkflowError> {
        self.entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))
    }

    fn idle_entry_mut(&mut self, id: &str) -> Result<&mut PendingEntry, WorkflowError> {
        let entry = self.entry_mut(id)?;
        if entry.state.is_busy() {
            return Err(WorkflowError::Busy(id.to_string()));
        }
        Ok(entry)
    }

    /// Approve goes straight to processing
    pub fn begin_approve(&mut self, id: &str) -> Result<ActionRequest, WorkflowError> {
        let entry = self.idle_entry_mut(id)?;
        entry.state = ItemState::Processing {
            action: ActionKind::Approve,
        };
        Ok(ActionRequest {
            id: id.to_string(),
            kind: ActionKind::Approve,
        })
    }

    /// Reject first opens a confirmation step; no request is issued yet
    pub fn request_reject(&mut self, id: &str) -> Result<(), WorkflowError> {
        let entry = self.idle_entry_mut(id)?;
        entry.state = ItemState::AwaitingRejectConfirmation;
        Ok(())
    }

    pub fn cancel_reject(&mut self, id: &str) -> Result<(), WorkflowError> {
        let entry = self.entry_mut(id)?;
        if entry.state != ItemState::AwaitingRejectConfirmation {
            return Err(WorkflowError::NoConfirmationPending(id.to_string()));
        }
        entry.state = ItemState::Idle;
        Ok(())
    }

    pub fn confirm_reject(&mut self, id: &str) -> Result<ActionRequest, WorkflowError> {
        let entry = self.entry_mut(id)?;
        if entry.state != ItemState::AwaitingRejectConfirmation {
            return Err(WorkflowError::NoConfirmationPending(id.to_string()));
        }
        entry.state = ItemState::Processing {
            action: ActionKind::Reject,
        };
        Ok(ActionRequest {
            id: id.to_string(),
            kind: ActionKind::Reject,
        })
    }

    /// Apply the endpoint's answer for an issued request
    ///
    /// Success removes exactly that item. Failure returns it to an
    /// actionable state carrying the error message.
    pub fn complete(
        &mut self,
        request: &ActionRequest,
        result: &Result<(), ActionError>,
    ) -> Result<(), WorkflowError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id() == request.id)
            .ok_or_else(|| WorkflowError::NotFound(request.id.clone()))?;

        if self.entries[idx].state != (ItemState::Processing { action: request.kind }) {
            return Err(WorkflowError::NotProcessing(request.id.clone()));
        }

        match result {
            Ok(()) => {
                self.entries.remove(idx);
                self.resolved.insert(request.id.clone());
            }
            Err(e) => {
                self.entries[idx].state = ItemState::Failed {
                    action: request.kind,
                    message: format!("Failed to {}: {}", request.kind.as_str(), e),
                };
            }
        }
        Ok(())
    }

    /// Entries whose username, certification, level or DU contain `term`
    pub fn search(&self, term: &str) -> Vec<PendingEntry> {
        search_pending(&self.entries, term)
    }
}

/// Case-insensitive substring search over username, certification name,
/// level and DU; a blank term matches everything
pub fn search_pending(entries: &[PendingEntry], term: &str) -> Vec<PendingEntry> {
    let needle = term.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            let a = &entry.action;
            [&a.username, &a.certification_name, &a.level, &a.du]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
