//! Tauri IPC commands for the dashboard webview
//!
//! Analytics commands:
//! - refresh_dashboard: Reload every widget document
//! - get_nomination_chart: Nominations per month by provider, with cascading filters
//! - get_cost_table: Per-provider cost table for a financial year
//! - get_cost_breakdown: Provider cost doughnut for a year and month
//! - get_cost_trend: Certifications-per-month bar chart
//! - get_cards: Summary cards
//! - get_nomination_table: Filtered nomination table
//! - get_recipients: Email list for the selected nominations
//!
//! Pending-action commands:
//! - get_pending_actions: Pending list with per-item state
//! - approve_action / request_reject / cancel_reject / confirm_reject
//!
//! Export commands:
//! - export_cost_table / export_nominations: CSV text plus file name

pub mod analytics;
pub mod export;
pub mod pending;

pub use analytics::{
    get_cards, get_cost_breakdown, get_cost_table, get_cost_trend, get_nomination_chart,
    get_nomination_table, get_recipients, refresh_dashboard,
};
pub use export::{export_cost_table, export_nominations};
pub use pending::{approve_action, cancel_reject, confirm_reject, get_pending_actions, request_reject};
