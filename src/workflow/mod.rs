//! Approval workflow
//!
//! Manager/DU-head sign-off on pending certification nominations.

pub mod approval;
pub mod pending;

pub use approval::{ActionTransport, ApprovalWorkflow, HttpActionTransport};
pub use pending::{search_pending, ActionRequest, PendingActions};
