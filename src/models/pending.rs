use serde::{Deserialize, Serialize};

use crate::utils::format_nomination_date;

/// A certification nomination awaiting manager and/or DU-head approval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingAction {
    pub id: String,
    pub username: String,
    pub certification_name: String,
    pub level: String,
    /// Delivery unit
    pub du: String,
    pub nomination_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by_manager: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by_du_head: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks_manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks_duhead: Option<String>,
}

/// Decision submitted for a pending action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Approve,
    Reject,
}

impl ActionKind {
    /// Path segment used by the action endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Approve => "approve",
            ActionKind::Reject => "reject",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "approve" => Some(ActionKind::Approve),
            "reject" => Some(ActionKind::Reject),
            _ => None,
        }
    }
}

/// Per-item workflow state, stored next to the action it describes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemState {
    #[default]
    Idle,
    /// Reject clicked; waiting for the user to confirm in the modal
    AwaitingRejectConfirmation,
    Processing {
        action: ActionKind,
    },
    /// Last action failed; the item accepts new triggers
    Failed {
        action: ActionKind,
        message: String,
    },
}

impl ItemState {
    /// Processing flag as the list renders it (buttons disabled)
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            ItemState::Processing { .. } | ItemState::AwaitingRejectConfirmation
        )
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, ItemState::Processing { .. })
    }

    /// Error to surface for this item, if its last action failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ItemState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Pending action together with its workflow state
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PendingEntry {
    #[serde(flatten)]
    pub action: PendingAction,
    /// `nomination_date` as `dd/MM/yyyy`
    pub display_date: String,
    pub state: ItemState,
}

impl PendingEntry {
    pub fn new(action: PendingAction) -> Self {
        Self {
            display_date: format_nomination_date(&action.nomination_date),
            action,
            state: ItemState::Idle,
        }
    }

    pub fn id(&self) -> &str {
        &self.action.id
    }
}
