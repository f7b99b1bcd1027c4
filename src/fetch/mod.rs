//! Fetch layer
//!
//! Loads widget documents over HTTP and tracks per-widget load state.

pub mod client;
pub mod load_state;

pub use client::DashboardClient;
pub use load_state::{DatasetSlot, LoadState, LoadTicket};
