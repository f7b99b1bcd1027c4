use crate::models::{CertificationRecord, FilterSelection};

/// Keep records matching every non-"All" dimension of the selection
pub fn filter_records(
    records: &[CertificationRecord],
    selection: &FilterSelection,
) -> Vec<CertificationRecord> {
    records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect()
}
