//! Aggregation engine
//!
//! Pure functions turning raw documents plus a filter selection into
//! chart series, option lists and table totals. Hosts call them again
//! whenever the raw data or the selection changes; nothing is cached.

pub mod breakdown;
pub mod filter;
pub mod flatten;
pub mod months;
pub mod nominations;
pub mod options;
pub mod series;
pub mod totals;
pub mod trend;

use serde::Serialize;

use crate::models::{CertificationRecord, Dimension, FilterSelection};

pub use breakdown::{provider_breakdown, ProviderBreakdown};
pub use filter::filter_records;
pub use flatten::flatten_nominations;
pub use months::{order_month_labels, MonthAxis};
pub use nominations::{nomination_table, recipient_list, NominationQuery, NominationTableView};
pub use options::{derive_filter_options, FilterOptions};
pub use series::{series_by, series_by_provider, ChartSeries, Dataset};
pub use totals::{cost_table, financial_years_descending, CostTableRow, CostTableView};
pub use trend::{cost_trend, trend_options, TrendOptions, TrendSeries};

/// Everything the nomination bar chart renders for one selection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSeries {
    pub selection: FilterSelection,
    pub options: FilterOptions,
    pub series: ChartSeries,
    pub total: u64,
}

/// Filter once, then derive options and per-provider series from the subset
pub fn aggregate(records: &[CertificationRecord], selection: &FilterSelection) -> DerivedSeries {
    let filtered = filter_records(records, selection);
    let options = options::options_from(&filtered);
    let series = series::group_by_month(&filtered, Dimension::Provider);
    let total = filtered.iter().map(|r| r.count).sum();

    tracing::debug!(
        raw = records.len(),
        filtered = filtered.len(),
        series = series.datasets.len(),
        "Aggregated nomination counts"
    );

    DerivedSeries {
        selection: selection.clone(),
        options,
        series,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    #[test]
    fn test_aggregate_combines_options_and_series() {
        let records = vec![
            CertificationRecord::new("2024", "Eng", "AWS", "Jan", 3),
            CertificationRecord::new("2024", "Eng", "Azure", "Jan", 5),
            CertificationRecord::new("2023", "Ops", "AWS", "Feb", 1),
        ];
        let selection = FilterSelection::all().with_financial_year(Choice::only("2024"));
        let derived = aggregate(&records, &selection);

        assert_eq!(derived.total, 8);
        assert_eq!(derived.options.department, vec!["All", "Eng"]);
        assert_eq!(derived.series.datasets.len(), 2);
        assert_eq!(derived.selection, selection);
    }
}
