use crate::models::{CertificationRecord, NominationCountDocument};

/// Flatten per-provider monthly counts into one record per month key
///
/// Month keys are passed through as-is; nothing checks that they name a
/// calendar month.
pub fn flatten_nominations(document: &NominationCountDocument) -> Vec<CertificationRecord> {
    document
        .certifications
        .iter()
        .flat_map(|entry| {
            entry
                .monthly_data
                .iter()
                .map(move |(month, count)| CertificationRecord {
                    financial_year: entry.financial_year.clone(),
                    department: entry.department.clone(),
                    provider: entry.provider_name.clone(),
                    month: month.clone(),
                    count: *count,
                })
        })
        .collect()
}
