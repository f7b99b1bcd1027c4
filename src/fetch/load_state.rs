//! Per-widget load state with stale-response protection
//!
//! A widget may refetch while an earlier request is still in flight. Each
//! load is tagged with a generation number and only the response for the
//! latest generation is applied; anything older is dropped.

use serde::Serialize;

use crate::error::FetchError;

/// What a widget body shows
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// Fetch failed; the widget shows this notice instead of any data
    NoData(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Derive a view from ready data; loading and no-data states pass through
    pub fn map<U, F>(&self, f: F) -> LoadState<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(data) => LoadState::Ready(f(data)),
            LoadState::NoData(message) => LoadState::NoData(message.clone()),
        }
    }
}

/// Ticket identifying one issued load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Latest load state of one widget's dataset
#[derive(Debug)]
pub struct DatasetSlot<T> {
    name: &'static str,
    generation: u64,
    state: LoadState<T>,
}

impl<T> DatasetSlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: 0,
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Start a new load; any earlier ticket becomes stale
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// True when `ticket` belongs to the most recent load
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a finished load; returns false if the ticket was stale
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<T, FetchError>) -> bool {
        if !self.accepts(ticket) {
            tracing::debug!(
                dataset = self.name,
                ticket = ticket.0,
                current = self.generation,
                "Dropping stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => {
                tracing::info!(dataset = self.name, "Dataset loaded");
                LoadState::Ready(data)
            }
            Err(e) => {
                tracing::warn!(dataset = self.name, error = %e, "Dataset unavailable");
                LoadState::NoData(e.user_message().to_string())
            }
        };
        true
    }
}
