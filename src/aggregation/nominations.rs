//! Nomination table filtering

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::models::NominationRow;

/// Filters applied to the nomination table; `None` means unfiltered
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NominationQuery {
    pub search: Option<String>,
    pub provider: Option<String>,
    pub criticality: Option<String>,
    pub financial_year: Option<String>,
    pub department: Option<String>,
    /// Keep exams strictly after this date
    pub exam_after: Option<NaiveDate>,
    /// Keep exams strictly before this date
    pub exam_before: Option<NaiveDate>,
}

/// Dropdown values for the nomination table, taken from every row
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NominationOptions {
    pub financial_years: Vec<String>,
    pub providers: Vec<String>,
    pub criticalities: Vec<String>,
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NominationTableView {
    pub rows: Vec<NominationRow>,
    pub options: NominationOptions,
}

fn selected(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|v| !v.is_empty())
}

impl NominationQuery {
    pub fn matches(&self, row: &NominationRow) -> bool {
        if let Some(term) = selected(&self.search) {
            let term = term.to_lowercase();
            if !row
                .searchable_values()
                .iter()
                .any(|value| value.to_lowercase().contains(&term))
            {
                return false;
            }
        }

        let exact = [
            (selected(&self.provider), row.provider.as_str()),
            (selected(&self.criticality), row.criticality.as_str()),
            (selected(&self.financial_year), row.financial_year.as_str()),
            (selected(&self.department), row.department.as_str()),
        ];
        if exact
            .iter()
            .any(|(wanted, actual)| matches!(wanted, Some(w) if w != actual))
        {
            return false;
        }

        if let Some(after) = self.exam_after {
            if !row.exam_date.is_some_and(|d| d > after) {
                return false;
            }
        }
        if let Some(before) = self.exam_before {
            if !row.exam_date.is_some_and(|d| d < before) {
                return false;
            }
        }
        true
    }

    /// Drop both exam-date bounds
    pub fn clear_dates(&mut self) {
        self.exam_after = None;
        self.exam_before = None;
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn nomination_options(rows: &[NominationRow]) -> NominationOptions {
    NominationOptions {
        financial_years: distinct(rows.iter().map(|r| r.financial_year.as_str())),
        providers: distinct(rows.iter().map(|r| r.provider.as_str())),
        criticalities: distinct(rows.iter().map(|r| r.criticality.as_str())),
        departments: distinct(rows.iter().map(|r| r.department.as_str())),
    }
}

/// Rows passing the query, plus option lists from the full row set
pub fn nomination_table(rows: &[NominationRow], query: &NominationQuery) -> NominationTableView {
    NominationTableView {
        rows: rows.iter().filter(|r| query.matches(r)).cloned().collect(),
        options: nomination_options(rows),
    }
}

/// Comma-joined emails of the selected nominations, in table order
pub fn recipient_list(rows: &[NominationRow], selected_ids: &[i64]) -> String {
    rows.iter()
        .filter(|r| selected_ids.contains(&r.nomination_id))
        .map(|r| r.email.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
