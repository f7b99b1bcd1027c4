//! Calendar ordering of month labels
//!
//! Raw documents are not guaranteed to list months chronologically, so labels
//! are placed on a reference year and compared by calendar position rather
//! than lexically.

use chrono::Month;
use indexmap::IndexSet;
use serde::Serialize;

use crate::models::month::{self, CALENDAR};

/// Sort position of a label; unrecognised labels sort after December
fn sort_key(label: &str) -> usize {
    month::parse_label(label).map_or(CALENDAR.len(), month::slot)
}

/// Order month labels by calendar position
///
/// Labels that are not month names keep their relative order after the
/// calendar months.
pub fn order_month_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut ordered: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
    ordered.sort_by_key(|label| sort_key(label));
    ordered
}

/// One slot on a chart's month axis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisSlot {
    Calendar(Month),
    Other(String),
}

impl AxisSlot {
    pub fn label(&self) -> &str {
        match self {
            AxisSlot::Calendar(month) => month.name(),
            AxisSlot::Other(label) => label,
        }
    }
}

/// Month axis shared by every series of a chart
///
/// Always holds the twelve calendar months; labels that do not name a month
/// are appended in first-seen order so their counts are not dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAxis {
    slots: Vec<AxisSlot>,
}

impl MonthAxis {
    pub fn calendar() -> Self {
        Self {
            slots: CALENDAR.iter().copied().map(AxisSlot::Calendar).collect(),
        }
    }

    /// Calendar axis extended with any non-month labels in `labels`
    pub fn for_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let extras: IndexSet<&str> = labels
            .into_iter()
            .filter(|label| month::parse_label(label).is_none())
            .collect();
        let mut axis = Self::calendar();
        axis.slots
            .extend(extras.into_iter().map(|label| AxisSlot::Other(label.to_string())));
        axis
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of a raw month label on this axis
    pub fn position(&self, label: &str) -> Option<usize> {
        match month::parse_label(label) {
            Some(m) => Some(month::slot(m)),
            None => self.slots[CALENDAR.len()..]
                .iter()
                .position(|slot| slot.label() == label)
                .map(|idx| idx + CALENDAR.len()),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.label().to_string()).collect()
    }
}

impl Serialize for MonthAxis {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labels().serialize(serializer)
    }
}
