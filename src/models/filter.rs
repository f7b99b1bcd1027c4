use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CertificationRecord;

/// Sentinel label meaning "no restriction on this dimension"
pub const ALL: &str = "All";

/// Selection for one filter dimension
///
/// Travels over the wire as a plain string: `"All"` or the selected value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn only(value: impl Into<String>) -> Self {
        Choice::Only(value.into())
    }

    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Choice::All
        } else {
            Choice::Only(label.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    /// True when `value` passes this selection
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(selected) => selected == value,
        }
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Choice::from_label(&label))
    }
}

/// Dimension of a certification record that can be filtered or grouped on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    FinancialYear,
    Department,
    Provider,
    Month,
}

impl Dimension {
    pub const ALL_DIMENSIONS: [Dimension; 4] = [
        Dimension::FinancialYear,
        Dimension::Department,
        Dimension::Provider,
        Dimension::Month,
    ];

    pub fn value_of<'a>(&self, record: &'a CertificationRecord) -> &'a str {
        match self {
            Dimension::FinancialYear => &record.financial_year,
            Dimension::Department => &record.department,
            Dimension::Provider => &record.provider,
            Dimension::Month => &record.month,
        }
    }
}

/// Active filter selection for one widget
///
/// Immutable value handed to the aggregation functions; widgets build a new
/// one on every change instead of mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    pub financial_year: Choice,
    pub department: Choice,
    pub provider: Choice,
    pub month: Choice,
}

impl FilterSelection {
    /// Selection with every dimension set to "All"
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_financial_year(mut self, choice: Choice) -> Self {
        self.financial_year = choice;
        self
    }

    pub fn with_department(mut self, choice: Choice) -> Self {
        self.department = choice;
        self
    }

    pub fn with_provider(mut self, choice: Choice) -> Self {
        self.provider = choice;
        self
    }

    pub fn with_month(mut self, choice: Choice) -> Self {
        self.month = choice;
        self
    }

    pub fn choice(&self, dimension: Dimension) -> &Choice {
        match dimension {
            Dimension::FinancialYear => &self.financial_year,
            Dimension::Department => &self.department,
            Dimension::Provider => &self.provider,
            Dimension::Month => &self.month,
        }
    }

    /// True when every non-"All" dimension equals the record's field
    pub fn matches(&self, record: &CertificationRecord) -> bool {
        Dimension::ALL_DIMENSIONS
            .iter()
            .all(|dim| self.choice(*dim).matches(dim.value_of(record)))
    }
}
