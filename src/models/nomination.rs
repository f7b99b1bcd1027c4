use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the nomination table (`LDNominationData.json`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NominationRow {
    pub nomination_id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub email: String,
    pub department: String,
    pub provider: String,
    pub certification_name: String,
    pub criticality: String,
    #[serde(default)]
    pub planned_exam_month: String,
    #[serde(default)]
    pub motivation_description: String,
    #[serde(default)]
    pub manager_recommendation: String,
    #[serde(default)]
    pub manager_remarks: String,
    #[serde(default)]
    pub is_department_approved: bool,
    #[serde(default)]
    pub is_lnd_approved: bool,
    #[serde(default)]
    pub nomination_date: String,
    /// Unparseable or blank dates read as no exam date
    #[serde(default, deserialize_with = "lenient_date")]
    pub exam_date: Option<NaiveDate>,
    #[serde(default)]
    pub exam_status: String,
    #[serde(default)]
    pub upload_certificate_status: String,
    #[serde(default)]
    pub skill_matrix_status: String,
    #[serde(default)]
    pub reimbursement_status: String,
    #[serde(default)]
    pub nomination_status: String,
    pub financial_year: String,
    #[serde(default)]
    pub cost_of_certification: f64,
}

impl NominationRow {
    /// Field values a free-text search looks at
    ///
    /// Zero numbers, false flags and blank strings are skipped, matching what
    /// the table treats as "no value".
    pub fn searchable_values(&self) -> Vec<String> {
        let mut values: Vec<String> = [
            &self.employee_name,
            &self.email,
            &self.department,
            &self.provider,
            &self.certification_name,
            &self.criticality,
            &self.planned_exam_month,
            &self.motivation_description,
            &self.manager_recommendation,
            &self.manager_remarks,
            &self.nomination_date,
            &self.exam_status,
            &self.upload_certificate_status,
            &self.skill_matrix_status,
            &self.reimbursement_status,
            &self.nomination_status,
            &self.financial_year,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect();

        for number in [self.nomination_id, self.employee_id] {
            if number != 0 {
                values.push(number.to_string());
            }
        }
        if self.cost_of_certification != 0.0 {
            values.push(self.cost_of_certification.to_string());
        }
        for flag in [self.is_department_approved, self.is_lnd_approved] {
            if flag {
                values.push("true".to_string());
            }
        }
        if let Some(date) = self.exam_date {
            values.push(date.format("%Y-%m-%d").to_string());
        }
        values
    }
}

fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| crate::utils::dates::parse_date(&s)))
}
