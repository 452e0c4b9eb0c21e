use chrono::{DateTime, NaiveDate, Utc};

use crate::utils::constants::NOT_SPECIFIED;

/// Formats a backend timestamp as `Mar 5, 09:30`.
/// Empty values read "Not specified"; unparseable ones are shown as-is.
pub fn format_date_time(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return NOT_SPECIFIED.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format("%b %-d, %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d").to_string();
    }
    raw.to_string()
}

/// Current time in seconds since the Unix epoch
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_timestamps() {
        assert_eq!(format_date_time(Some("2024-03-05T09:30:00.000Z")), "Mar 5, 09:30");
        assert_eq!(format_date_time(Some("2024-12-25")), "Dec 25");
    }

    #[test]
    fn empty_reads_not_specified() {
        assert_eq!(format_date_time(None), "Not specified");
        assert_eq!(format_date_time(Some("  ")), "Not specified");
        assert_eq!(format_date_time(Some("soon")), "soon");
    }
}
