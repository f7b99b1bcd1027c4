use std::ops::AddAssign;

use chrono::Month;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::month::{self, CALENDAR};

/// Count and spend for one month (or a sum of months)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonthlyCost {
    pub count: u64,
    pub estimated_cost: f64,
    pub actual_cost: f64,
}

impl MonthlyCost {
    pub fn new(count: u64, estimated_cost: f64, actual_cost: f64) -> Self {
        Self {
            count,
            estimated_cost,
            actual_cost,
        }
    }
}

impl AddAssign for MonthlyCost {
    fn add_assign(&mut self, rhs: Self) {
        self.count += rhs.count;
        self.estimated_cost += rhs.estimated_cost;
        self.actual_cost += rhs.actual_cost;
    }
}

/// Fixed twelve-slot breakdown indexed by calendar month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyBreakdown([MonthlyCost; 12]);

impl MonthlyBreakdown {
    pub fn get(&self, month: Month) -> &MonthlyCost {
        &self.0[month::slot(month)]
    }

    pub fn set(&mut self, month: Month, value: MonthlyCost) {
        self.0[month::slot(month)] = value;
    }

    pub fn add(&mut self, month: Month, value: MonthlyCost) {
        self.0[month::slot(month)] += value;
    }

    /// Months in calendar order with their figures
    pub fn iter(&self) -> impl Iterator<Item = (Month, &MonthlyCost)> {
        CALENDAR.iter().copied().zip(self.0.iter())
    }

    /// Sum over all twelve months
    pub fn total(&self) -> MonthlyCost {
        let mut total = MonthlyCost::default();
        for value in &self.0 {
            total += *value;
        }
        total
    }
}

impl Serialize for MonthlyBreakdown {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(12))?;
        for (month, value) in self.iter() {
            map.serialize_entry(month.name(), value)?;
        }
        map.end()
    }
}

/// One provider's certification cost row for a financial year
///
/// Wire shape (`certificatecost.json`) carries one object per month name.
/// Missing months, or missing fields inside a month, read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCostRow", into = "RawCostRow")]
pub struct CostRow {
    pub id: i64,
    pub provider: String,
    pub financial_year: String,
    pub months: MonthlyBreakdown,
}

impl CostRow {
    pub fn new(id: i64, provider: &str, financial_year: &str) -> Self {
        Self {
            id,
            provider: provider.to_string(),
            financial_year: financial_year.to_string(),
            months: MonthlyBreakdown::default(),
        }
    }

    pub fn with_month(mut self, month: Month, value: MonthlyCost) -> Self {
        self.months.set(month, value);
        self
    }

    /// Count and spend summed over the row's twelve months
    pub fn yearly_totals(&self) -> MonthlyCost {
        self.months.total()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCostRow {
    #[serde(default)]
    id: i64,
    provider: String,
    #[serde(rename = "FinancialYear")]
    financial_year: String,
    #[serde(rename = "January", default)]
    january: Option<MonthlyCost>,
    #[serde(rename = "February", default)]
    february: Option<MonthlyCost>,
    #[serde(rename = "March", default)]
    march: Option<MonthlyCost>,
    #[serde(rename = "April", default)]
    april: Option<MonthlyCost>,
    #[serde(rename = "May", default)]
    may: Option<MonthlyCost>,
    #[serde(rename = "June", default)]
    june: Option<MonthlyCost>,
    #[serde(rename = "July", default)]
    july: Option<MonthlyCost>,
    #[serde(rename = "August", default)]
    august: Option<MonthlyCost>,
    #[serde(rename = "September", default)]
    september: Option<MonthlyCost>,
    #[serde(rename = "October", default)]
    october: Option<MonthlyCost>,
    #[serde(rename = "November", default)]
    november: Option<MonthlyCost>,
    #[serde(rename = "December", default)]
    december: Option<MonthlyCost>,
}

impl From<RawCostRow> for CostRow {
    fn from(raw: RawCostRow) -> Self {
        let slots = [
            raw.january,
            raw.february,
            raw.march,
            raw.april,
            raw.may,
            raw.june,
            raw.july,
            raw.august,
            raw.september,
            raw.october,
            raw.november,
            raw.december,
        ];
        let mut months = MonthlyBreakdown::default();
        for (month, value) in CALENDAR.iter().zip(slots) {
            months.set(*month, value.unwrap_or_default());
        }
        Self {
            id: raw.id,
            provider: raw.provider,
            financial_year: raw.financial_year,
            months,
        }
    }
}

impl From<CostRow> for RawCostRow {
    fn from(row: CostRow) -> Self {
        let m = |month| Some(*row.months.get(month));
        RawCostRow {
            id: row.id,
            january: m(Month::January),
            february: m(Month::February),
            march: m(Month::March),
            april: m(Month::April),
            may: m(Month::May),
            june: m(Month::June),
            july: m(Month::July),
            august: m(Month::August),
            september: m(Month::September),
            october: m(Month::October),
            november: m(Month::November),
            december: m(Month::December),
            provider: row.provider,
            financial_year: row.financial_year,
        }
    }
}

/// Provider cost document for the doughnut chart (`codtdata.json`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CostChartDocument {
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default)]
    pub providers: Vec<String>,
    /// Year -> provider -> cost per month slot
    #[serde(rename = "yearData", default)]
    pub year_data: IndexMap<String, IndexMap<String, Vec<f64>>>,
}

/// Certifications-per-month document (`newbarchartdata.json`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CostTrendDocument {
    #[serde(rename = "costData", default)]
    pub cost_data: IndexMap<String, YearTrend>,
}

/// One year of the trend document: labels plus department -> provider -> values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct YearTrend {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub departments: IndexMap<String, IndexMap<String, Vec<f64>>>,
}
