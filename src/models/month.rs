//! Calendar month helpers shared by the cost and certification models

use chrono::Month;

/// The twelve calendar months, January first
pub const CALENDAR: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Zero-based slot of a month in a 12-element array
pub fn slot(month: Month) -> usize {
    month.number_from_month() as usize - 1
}

/// Parse a full or three-letter English month name, ignoring case
pub fn parse_label(label: &str) -> Option<Month> {
    label.trim().parse::<Month>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_matches_calendar_position() {
        for (idx, month) in CALENDAR.iter().enumerate() {
            assert_eq!(slot(*month), idx);
        }
    }

    #[test]
    fn test_parse_label_accepts_full_and_short_names() {
        assert_eq!(parse_label("January"), Some(Month::January));
        assert_eq!(parse_label("jan"), Some(Month::January));
        assert_eq!(parse_label(" SEP "), Some(Month::September));
        assert_eq!(parse_label("Q1"), None);
        assert_eq!(parse_label(""), None);
    }
}
