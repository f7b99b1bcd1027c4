//! Provider cost breakdown for the doughnut chart

use serde::Serialize;

use super::options::with_all;
use crate::models::{Choice, CostChartDocument};

/// One value per provider for the selected year and month
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBreakdown {
    pub year: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub total: f64,
}

impl CostChartDocument {
    /// Years in descending label order
    pub fn years_descending(&self) -> Vec<String> {
        let mut years: Vec<String> = self.year_data.keys().cloned().collect();
        years.sort_by(|a, b| b.cmp(a));
        years
    }

    /// Most recent year, used until the user picks one
    pub fn default_year(&self) -> Option<String> {
        self.years_descending().into_iter().next()
    }

    /// Month dropdown: "All" followed by the document's month labels
    pub fn month_options(&self) -> Vec<String> {
        with_all(self.months.iter().map(String::as_str))
    }
}

/// Provider costs for `year`; `month` is "All" (whole year) or a month label
///
/// Providers follow the document's provider list. A provider with no data,
/// or no value at the month's slot, reads as 0. An unknown year yields no
/// values at all.
pub fn provider_breakdown(
    document: &CostChartDocument,
    year: Option<&str>,
    month: &Choice,
) -> ProviderBreakdown {
    let year = year.map(str::to_string).or_else(|| document.default_year());
    let labels = document.providers.clone();

    let Some(provider_data) = year.as_deref().and_then(|y| document.year_data.get(y)) else {
        return ProviderBreakdown {
            year,
            labels,
            values: Vec::new(),
            total: 0.0,
        };
    };

    let slot = match month {
        Choice::All => None,
        Choice::Only(label) => Some(document.months.iter().position(|m| m == label)),
    };

    let values: Vec<f64> = document
        .providers
        .iter()
        .map(|provider| {
            let costs = provider_data.get(provider);
            match (costs, slot) {
                (None, _) => 0.0,
                (Some(costs), None) => costs.iter().sum(),
                (Some(costs), Some(Some(idx))) => costs.get(idx).copied().unwrap_or(0.0),
                (Some(_), Some(None)) => 0.0,
            }
        })
        .collect();
    let total = values.iter().sum();

    ProviderBreakdown {
        year,
        labels,
        values,
        total,
    }
}
