//! Certifications-per-month trend across year/department/provider

use serde::Serialize;

use super::options::with_all;
use crate::models::{CostTrendDocument, FilterSelection, YearTrend};

/// Single-dataset bar chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub label: String,
    pub data: Vec<f64>,
}

/// Dropdown values for the trend chart, each starting with "All"
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendOptions {
    pub financial_year: Vec<String>,
    pub department: Vec<String>,
    pub provider: Vec<String>,
}

/// Dropdown values that cascade from the selection
///
/// Years are every year in the document. Departments come from the selected
/// year, or the first year when the year is "All". Providers come from that
/// year and the selected department, or all of its departments.
pub fn trend_options(document: &CostTrendDocument, selection: &FilterSelection) -> TrendOptions {
    let year = label_year(document, selection);
    let departments = year.into_iter().flat_map(|y| y.departments.iter());

    TrendOptions {
        financial_year: with_all(document.cost_data.keys().map(String::as_str)),
        department: with_all(departments.clone().map(|(name, _)| name.as_str())),
        provider: with_all(
            departments
                .filter(|(name, _)| selection.department.matches(name))
                .flat_map(|(_, providers)| providers.keys().map(String::as_str)),
        ),
    }
}

/// Year whose labels (and dropdown values) the chart shows
fn label_year<'a>(document: &'a CostTrendDocument, selection: &FilterSelection) -> Option<&'a YearTrend> {
    if selection.financial_year.is_all() {
        document.cost_data.values().next()
    } else {
        document.cost_data.get(selection.financial_year.as_str())
    }
}

/// Sum per-label values over all matching year/department/provider entries
///
/// Labels come from the selected year, or from the first year in the
/// document when the year is "All". The month dimension of the selection is
/// not used here. The series always has one point per label: missing values
/// count as zero and values past the last label are ignored. An unknown year
/// produces an empty series.
pub fn cost_trend(document: &CostTrendDocument, selection: &FilterSelection) -> TrendSeries {
    let label = if selection.provider.is_all() {
        "Certifications (All Providers)".to_string()
    } else {
        format!("Certifications ({})", selection.provider.as_str())
    };

    let labels = label_year(document, selection)
        .map(|y| y.labels.clone())
        .unwrap_or_default();

    let mut data = vec![0.0; labels.len()];
    let years = document
        .cost_data
        .iter()
        .filter(|(year, _)| selection.financial_year.matches(year));
    for (_, year) in years {
        for (department, providers) in &year.departments {
            if !selection.department.matches(department) {
                continue;
            }
            for (provider, values) in providers {
                if !selection.provider.matches(provider) {
                    continue;
                }
                for (slot, value) in data.iter_mut().zip(values) {
                    *slot += value;
                }
            }
        }
    }

    TrendSeries {
        labels,
        label,
        data,
    }
}
