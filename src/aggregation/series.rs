use indexmap::IndexMap;
use serde::Serialize;

use super::filter::filter_records;
use super::months::MonthAxis;
use crate::models::{CertificationRecord, Dimension, FilterSelection};

/// One bar-chart dataset: a label and one value per axis month
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
}

/// Chart-ready series; every dataset has exactly `labels.len()` points
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: MonthAxis,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    pub fn empty() -> Self {
        Self {
            labels: MonthAxis::calendar(),
            datasets: Vec::new(),
        }
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}

/// Group already-filtered records into one series per distinct `group` value
///
/// Series appear in first-seen order. Counts sharing a group and month are
/// summed; months with no records stay at 0.
pub fn group_by_month(records: &[CertificationRecord], group: Dimension) -> ChartSeries {
    let axis = MonthAxis::for_labels(records.iter().map(|r| r.month.as_str()));
    let mut grouped: IndexMap<&str, Vec<u64>> = IndexMap::new();

    for record in records {
        let points = grouped
            .entry(group.value_of(record))
            .or_insert_with(|| vec![0; axis.len()]);
        if let Some(idx) = axis.position(&record.month) {
            points[idx] += record.count;
        }
    }

    let datasets = grouped
        .into_iter()
        .map(|(label, data)| Dataset {
            label: label.to_string(),
            data,
        })
        .collect();

    ChartSeries {
        labels: axis,
        datasets,
    }
}

/// Per-provider monthly series for the records the selection lets through
pub fn series_by_provider(
    records: &[CertificationRecord],
    selection: &FilterSelection,
) -> ChartSeries {
    series_by(records, selection, Dimension::Provider)
}

/// Per-`group` monthly series for the records the selection lets through
pub fn series_by(
    records: &[CertificationRecord],
    selection: &FilterSelection,
    group: Dimension,
) -> ChartSeries {
    let filtered = filter_records(records, selection);
    group_by_month(&filtered, group)
}
