//! Export commands
//!
//! Return CSV text and a dated file name; the webview decides where to save.

use tauri::State;

use crate::aggregation::NominationQuery;
use crate::export::ExportFile;
use crate::state::DashboardState;

/// Export the cost table for one financial year
///
/// # Arguments
/// * `financial_year` - Year label; omitted means the most recent year
///
/// Returns: `None` while the cost data is unavailable
#[tauri::command]
pub async fn export_cost_table(
    state: State<'_, DashboardState>,
    financial_year: Option<String>,
) -> Result<Option<ExportFile>, String> {
    let today = chrono::Local::now().date_naive();
    state
        .export_cost_table(financial_year.as_deref(), today)
        .await
        .map_err(|e| format!("Failed to export cost table: {}", e))
}

/// Export the nomination table as currently filtered
#[tauri::command]
pub async fn export_nominations(
    state: State<'_, DashboardState>,
    query: Option<NominationQuery>,
) -> Result<Option<ExportFile>, String> {
    let today = chrono::Local::now().date_naive();
    state
        .export_nominations(&query.unwrap_or_default(), today)
        .await
        .map_err(|e| format!("Failed to export nominations: {}", e))
}
