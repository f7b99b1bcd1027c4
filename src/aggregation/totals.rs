//! Cost-table totals
//!
//! Per-row yearly totals, per-month totals across rows, and grand totals for
//! one financial year. Everything is recomputed from the rows on each call.

use serde::Serialize;

use crate::models::{CostRow, MonthlyBreakdown, MonthlyCost};

/// One provider row with its yearly totals
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostTableRow {
    pub id: i64,
    pub provider: String,
    pub months: MonthlyBreakdown,
    pub yearly: MonthlyCost,
}

/// Cost table for a single financial year
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostTableView {
    /// Every year present in the data, most recent first
    pub financial_years: Vec<String>,
    pub selected_year: Option<String>,
    pub rows: Vec<CostTableRow>,
    pub monthly_totals: MonthlyBreakdown,
    pub grand_totals: MonthlyCost,
}

/// Leading integer of a year label ("2024-25" -> 2024)
fn leading_year(label: &str) -> Option<i64> {
    let trimmed = label.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Distinct financial years, most recent first
///
/// Years compare by their leading number; labels without one go last in
/// first-seen order.
pub fn financial_years_descending(rows: &[CostRow]) -> Vec<String> {
    let mut years: Vec<String> = Vec::new();
    for row in rows {
        if !years.contains(&row.financial_year) {
            years.push(row.financial_year.clone());
        }
    }
    years.sort_by(|a, b| match (leading_year(a), leading_year(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    years
}

/// Sum a row set into monthly totals and a grand total
pub fn sum_rows<'a, I>(rows: I) -> (MonthlyBreakdown, MonthlyCost)
where
    I: IntoIterator<Item = &'a CostRow>,
{
    let mut monthly = MonthlyBreakdown::default();
    let mut grand = MonthlyCost::default();
    for row in rows {
        for (month, value) in row.months.iter() {
            monthly.add(month, *value);
        }
        grand += row.yearly_totals();
    }
    (monthly, grand)
}

/// Build the cost table for `year`, or for the most recent year when `None`
pub fn cost_table(rows: &[CostRow], year: Option<&str>) -> CostTableView {
    let financial_years = financial_years_descending(rows);
    let selected_year = year
        .map(str::to_string)
        .or_else(|| financial_years.first().cloned());

    let selected: Vec<&CostRow> = match &selected_year {
        Some(y) => rows.iter().filter(|r| &r.financial_year == y).collect(),
        None => Vec::new(),
    };
    let (monthly_totals, grand_totals) = sum_rows(selected.iter().copied());

    let table_rows = selected
        .iter()
        .map(|row| CostTableRow {
            id: row.id,
            provider: row.provider.clone(),
            months: row.months,
            yearly: row.yearly_totals(),
        })
        .collect();

    tracing::debug!(
        year = selected_year.as_deref().unwrap_or("-"),
        rows = selected.len(),
        "Computed cost table"
    );

    CostTableView {
        financial_years,
        selected_year,
        rows: table_rows,
        monthly_totals,
        grand_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn rows() -> Vec<CostRow> {
        vec![
            CostRow::new(1, "AWS", "2023")
                .with_month(Month::January, MonthlyCost::new(2, 200.0, 190.0)),
            CostRow::new(2, "AWS", "2024")
                .with_month(Month::January, MonthlyCost::new(1, 100.0, 120.0))
                .with_month(Month::July, MonthlyCost::new(3, 300.0, 310.0)),
            CostRow::new(3, "Azure", "2024")
                .with_month(Month::July, MonthlyCost::new(1, 50.0, 45.0)),
        ]
    }

    #[test]
    fn test_years_sorted_descending_numerically() {
        let data = vec![
            CostRow::new(1, "A", "2022"),
            CostRow::new(2, "A", "2024-25"),
            CostRow::new(3, "A", "FY-old"),
            CostRow::new(4, "A", "2023"),
            CostRow::new(5, "A", "2024-25"),
        ];
        assert_eq!(
            financial_years_descending(&data),
            vec!["2024-25", "2023", "2022", "FY-old"]
        );
    }

    #[test]
    fn test_defaults_to_most_recent_year() {
        let view = cost_table(&rows(), None);
        assert_eq!(view.selected_year.as_deref(), Some("2024"));
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_grand_totals_match_row_totals() {
        let view = cost_table(&rows(), Some("2024"));
        let mut expected = MonthlyCost::default();
        for row in &view.rows {
            expected += row.yearly;
        }
        assert_eq!(view.grand_totals, expected);
        assert_eq!(view.grand_totals.count, 5);
        assert_eq!(view.grand_totals.estimated_cost, 450.0);
        assert_eq!(view.grand_totals.actual_cost, 475.0);
    }

    #[test]
    fn test_monthly_totals_across_rows() {
        let view = cost_table(&rows(), Some("2024"));
        assert_eq!(view.monthly_totals.get(Month::July).count, 4);
        assert_eq!(view.monthly_totals.get(Month::January).actual_cost, 120.0);
        assert_eq!(view.monthly_totals.get(Month::March).count, 0);
    }

    #[test]
    fn test_changing_year_recomputes_totals() {
        let data = rows();
        let first = cost_table(&data, Some("2024"));
        let second = cost_table(&data, Some("2023"));
        assert_eq!(first.grand_totals.count, 5);
        assert_eq!(second.grand_totals.count, 2);
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.rows[0].id, 1);
    }

    #[test]
    fn test_unknown_year_is_empty_but_selected() {
        let view = cost_table(&rows(), Some("1999"));
        assert_eq!(view.selected_year.as_deref(), Some("1999"));
        assert!(view.rows.is_empty());
        assert_eq!(view.grand_totals, MonthlyCost::default());
    }

    #[test]
    fn test_no_rows() {
        let view = cost_table(&[], None);
        assert!(view.financial_years.is_empty());
        assert_eq!(view.selected_year, None);
        assert!(view.rows.is_empty());
    }
}
