//! Date parsing and display helpers
//!
//! Documents carry plain `YYYY-MM-DD` dates, occasionally full RFC 3339
//! timestamps. The pending list shows them as `dd/MM/yyyy`.

use chrono::{DateTime, NaiveDate};

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp; blank or malformed input is `None`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Render a nomination date as `dd/MM/yyyy`
///
/// Input that does not parse is returned unchanged rather than hidden.
pub fn format_nomination_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `YYYY-MM-DD` stamp used in export file names
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
