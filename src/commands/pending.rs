//! Pending-action commands
//!
//! Approve is sent immediately. Reject opens a confirmation that the webview
//! must confirm or cancel before anything is sent.

use tauri::State;

use crate::fetch::LoadState;
use crate::models::PendingEntry;
use crate::state::DashboardState;

/// Pending list filtered by a search term
///
/// # Arguments
/// * `search` - Matches username, certification name, level or DU
#[tauri::command]
pub async fn get_pending_actions(
    state: State<'_, DashboardState>,
    search: Option<String>,
) -> Result<LoadState<Vec<PendingEntry>>, String> {
    Ok(state.pending(search.as_deref().unwrap_or("")).await)
}

/// Approve a pending action
///
/// # Arguments
/// * `id` - Pending action id
#[tauri::command]
pub async fn approve_action(state: State<'_, DashboardState>, id: String) -> Result<(), String> {
    state
        .approve(&id)
        .await
        .map_err(|e| format!("Failed to approve {}: {}", id, e))
}

/// Open the reject confirmation for an item
#[tauri::command]
pub async fn request_reject(state: State<'_, DashboardState>, id: String) -> Result<(), String> {
    state
        .request_reject(&id)
        .await
        .map_err(|e| format!("Failed to start reject for {}: {}", id, e))
}

#[tauri::command]
pub async fn cancel_reject(state: State<'_, DashboardState>, id: String) -> Result<(), String> {
    state
        .cancel_reject(&id)
        .await
        .map_err(|e| format!("Failed to cancel reject for {}: {}", id, e))
}

/// Send the reject the user just confirmed
#[tauri::command]
pub async fn confirm_reject(state: State<'_, DashboardState>, id: String) -> Result<(), String> {
    state
        .confirm_reject(&id)
        .await
        .map_err(|e| format!("Failed to reject {}: {}", id, e))
}
