use chrono::{DateTime, NaiveDate};

/// Formats a completion date as "Month D, YYYY".
///
/// Accepts the `YYYY-MM-DD` value of a date input or an RFC 3339 timestamp.
/// Anything else, including the empty string, yields an empty string.
pub fn format_completion_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_input_values() {
        assert_eq!(format_completion_date("2024-03-05"), "March 5, 2024");
        assert_eq!(format_completion_date("1999-12-31"), "December 31, 1999");
    }

    #[test]
    fn formats_timestamps_by_their_own_date() {
        assert_eq!(format_completion_date("2023-07-14T23:30:00+02:00"), "July 14, 2023");
    }

    #[test]
    fn empty_or_garbage_renders_empty() {
        assert_eq!(format_completion_date(""), "");
        assert_eq!(format_completion_date("   "), "");
        assert_eq!(format_completion_date("next tuesday"), "");
        assert_eq!(format_completion_date("2024-02-30"), "");
    }
}
