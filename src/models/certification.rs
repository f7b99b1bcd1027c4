use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Monthly nomination-count document (`nominationcount.json`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NominationCountDocument {
    pub certifications: Vec<NominationCountEntry>,
}

/// Per-provider, per-department nomination counts for one financial year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NominationCountEntry {
    pub financial_year: String,
    pub department: String,
    pub provider_name: String,
    /// Month label -> count, in document order
    #[serde(default)]
    pub monthly_data: IndexMap<String, u64>,
}

/// One flattened (year, department, provider, month) count
///
/// (financial_year, department, provider, month) is unique within one fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub financial_year: String,
    pub department: String,
    pub provider: String,
    pub month: String,
    pub count: u64,
}

impl CertificationRecord {
    pub fn new(
        financial_year: &str,
        department: &str,
        provider: &str,
        month: &str,
        count: u64,
    ) -> Self {
        Self {
            financial_year: financial_year.to_string(),
            department: department.to_string(),
            provider: provider.to_string(),
            month: month.to_string(),
            count,
        }
    }
}
