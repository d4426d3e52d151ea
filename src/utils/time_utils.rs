use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a query timestamp into the naive wall-clock form samples are
/// stored in. Accepts RFC 3339 (offset dropped, wall time kept), naive ISO
/// date-times and bare dates (midnight).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.naive_local());
    }
    if let Ok(at) = value.parse::<NaiveDateTime>() {
        return Some(at);
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
