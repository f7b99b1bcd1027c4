//! CSV export of the cost and nomination tables

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregation::CostTableView;
use crate::error::ExportError;
use crate::models::{MonthlyCost, NominationRow};
use crate::utils::date_stamp;

pub const COST_EXPORT_PREFIX: &str = "Certification_Cost";
pub const NOMINATION_EXPORT_PREFIX: &str = "LD_Nominations";

/// Header row plus data rows, ready to be written out
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportSheet {
    /// Render as CSV text
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Rendered export with the file name it should be saved under
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

/// `<prefix>_<YYYY-MM-DD>.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date_stamp(date))
}

fn push_cost(cells: &mut Vec<String>, value: &MonthlyCost) {
    cells.push(value.count.to_string());
    cells.push(value.estimated_cost.to_string());
    cells.push(value.actual_cost.to_string());
}

/// One row per provider: count/estimated/actual per month, then yearly totals
pub fn cost_table_sheet(view: &CostTableView) -> ExportSheet {
    let mut headers = vec!["Provider".to_string()];
    for month in crate::models::month::CALENDAR {
        let name = month.name();
        headers.push(format!("{}_Count", name));
        headers.push(format!("{}_Estimated_Cost", name));
        headers.push(format!("{}_Actual_Cost", name));
    }
    headers.extend(
        [
            "Yearly_Total_Count",
            "Yearly_Total_Estimated_Cost",
            "Yearly_Total_Actual_Cost",
        ]
        .map(String::from),
    );

    let rows = view
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.provider.clone()];
            for (_, value) in row.months.iter() {
                push_cost(&mut cells, value);
            }
            push_cost(&mut cells, &row.yearly);
            cells
        })
        .collect();

    ExportSheet { headers, rows }
}

/// Nomination table as shown, one row per nomination
pub fn nomination_sheet(rows: &[NominationRow]) -> ExportSheet {
    let headers = [
        "Employee_Id",
        "Employee_Name",
        "Email",
        "Department",
        "Provider",
        "Certification_Name",
        "Criticality",
        "Financial_Year",
        "Nomination_Date",
        "Exam_Date",
        "Exam_Status",
        "Nomination_Status",
        "Cost_Of_Certification",
    ]
    .map(String::from)
    .to_vec();

    let rows = rows
        .iter()
        .map(|row| {
            vec![
                row.employee_id.to_string(),
                row.employee_name.clone(),
                row.email.clone(),
                row.department.clone(),
                row.provider.clone(),
                row.certification_name.clone(),
                row.criticality.clone(),
                row.financial_year.clone(),
                row.nomination_date.clone(),
                row.exam_date.map(date_stamp).unwrap_or_default(),
                row.exam_status.clone(),
                row.nomination_status.clone(),
                row.cost_of_certification.to_string(),
            ]
        })
        .collect();

    ExportSheet { headers, rows }
}

/// Render a sheet and name it for `date`
pub fn export(sheet: &ExportSheet, prefix: &str, date: NaiveDate) -> Result<ExportFile, ExportError> {
    let contents = sheet.to_csv()?;
    tracing::info!(prefix, rows = sheet.rows.len(), "Exported sheet");
    Ok(ExportFile {
        file_name: export_file_name(prefix, date),
        contents,
    })
}
