//! Analytics commands
//!
//! Every view returns a `LoadState`, so the webview can tell loading, ready
//! and "no data" apart without a command error.

use tauri::State;

use crate::aggregation::{CostTableView, DerivedSeries, NominationQuery, NominationTableView};
use crate::fetch::LoadState;
use crate::models::{Choice, DashboardCard, FilterSelection};
use crate::state::{BreakdownView, DashboardState, TrendView};

/// Reload every widget document
#[tauri::command]
pub async fn refresh_dashboard(state: State<'_, DashboardState>) -> Result<(), String> {
    state.refresh_all().await;
    Ok(())
}

/// Nomination chart for a selection
///
/// # Arguments
/// * `selection` - Financial year, department, provider and month; "All" disables a dimension
#[tauri::command]
pub async fn get_nomination_chart(
    state: State<'_, DashboardState>,
    selection: Option<FilterSelection>,
) -> Result<LoadState<DerivedSeries>, String> {
    let selection = selection.unwrap_or_default();
    Ok(state.nomination_chart(&selection).await)
}

/// Cost table for one financial year
///
/// # Arguments
/// * `financial_year` - Year label; omitted means the most recent year
#[tauri::command]
pub async fn get_cost_table(
    state: State<'_, DashboardState>,
    financial_year: Option<String>,
) -> Result<LoadState<CostTableView>, String> {
    Ok(state.cost_table(financial_year.as_deref()).await)
}

/// Provider cost breakdown
///
/// # Arguments
/// * `year` - Year key; omitted means the most recent year
/// * `month` - Month label or "All"
#[tauri::command]
pub async fn get_cost_breakdown(
    state: State<'_, DashboardState>,
    year: Option<String>,
    month: Option<String>,
) -> Result<LoadState<BreakdownView>, String> {
    let month = month
        .as_deref()
        .map(Choice::from_label)
        .unwrap_or(Choice::All);
    Ok(state.cost_breakdown(year.as_deref(), &month).await)
}

/// Certifications-per-month trend; the month dimension is ignored
#[tauri::command]
pub async fn get_cost_trend(
    state: State<'_, DashboardState>,
    selection: Option<FilterSelection>,
) -> Result<LoadState<TrendView>, String> {
    let selection = selection.unwrap_or_default();
    Ok(state.cost_trend(&selection).await)
}

#[tauri::command]
pub async fn get_cards(state: State<'_, DashboardState>) -> Result<LoadState<Vec<DashboardCard>>, String> {
    Ok(state.cards().await)
}

/// Nomination table with search and column filters
#[tauri::command]
pub async fn get_nomination_table(
    state: State<'_, DashboardState>,
    query: Option<NominationQuery>,
) -> Result<LoadState<NominationTableView>, String> {
    let query = query.unwrap_or_default();
    Ok(state.nomination_table(&query).await)
}

/// Comma-joined emails for the selected nomination ids
///
/// # Arguments
/// * `nomination_ids` - Ids checked in the table
#[tauri::command]
pub async fn get_recipients(
    state: State<'_, DashboardState>,
    nomination_ids: Vec<i64>,
) -> Result<LoadState<String>, String> {
    Ok(state.recipients(&nomination_ids).await)
}
