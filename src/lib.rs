// L&D dashboard backend
// Module re-exports

pub mod aggregation;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod state;
pub mod utils;
pub mod workflow;

#[cfg(feature = "desktop")]
pub mod commands;

// Re-export commonly used types
pub use models::{
    CertificationRecord, Choice, CostRow, FilterSelection, ItemState, PendingAction, PendingEntry,
};

pub use aggregation::{aggregate, derive_filter_options, filter_records, order_month_labels};
pub use config::DashboardConfig;
pub use error::{ActionError, ApprovalError, FetchError, WorkflowError};
pub use fetch::{DashboardClient, LoadState};
pub use state::DashboardState;
pub use workflow::{ActionTransport, ApprovalWorkflow, HttpActionTransport};
