use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::filter::filter_records;
use crate::models::{CertificationRecord, Dimension, FilterSelection, ALL};

/// Candidate values for each filter dropdown
///
/// Every list starts with `"All"`; the rest are distinct values in first-seen
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub financial_year: Vec<String>,
    pub department: Vec<String>,
    pub provider: Vec<String>,
    pub month: Vec<String>,
}

impl FilterOptions {
    pub fn for_dimension(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::FinancialYear => &self.financial_year,
            Dimension::Department => &self.department,
            Dimension::Provider => &self.provider,
            Dimension::Month => &self.month,
        }
    }
}

/// `"All"` followed by the distinct values, first-seen order
pub fn with_all<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: IndexSet<&str> = IndexSet::new();
    seen.insert(ALL);
    for value in values {
        seen.insert(value);
    }
    seen.into_iter().map(str::to_string).collect()
}

/// Option lists derived from the records the selection currently lets through
///
/// Options narrow as filters are applied: a value only appears if some
/// record matching the whole selection carries it.
pub fn derive_filter_options(
    records: &[CertificationRecord],
    selection: &FilterSelection,
) -> FilterOptions {
    let filtered = filter_records(records, selection);
    options_from(&filtered)
}

pub(crate) fn options_from(filtered: &[CertificationRecord]) -> FilterOptions {
    let column = |dim: Dimension| with_all(filtered.iter().map(|r| dim.value_of(r)));
    FilterOptions {
        financial_year: column(Dimension::FinancialYear),
        department: column(Dimension::Department),
        provider: column(Dimension::Provider),
        month: column(Dimension::Month),
    }
}
