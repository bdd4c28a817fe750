//! Parsing of `fecha` values as emitted by the backend.
//!
//! Two formats have been seen in the wild: ISO dates (`2023-06-01`,
//! `2023-06-01T10:20:30Z`) and day-first dates (`1/6/2023 10:20`). Both are
//! accepted; anything else is treated as "no date".

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a `fecha` into epoch milliseconds (UTC).
///
/// Returns `None` for empty, missing or unparseable input. `None` orders
/// below every `Some`, so undated records sort last in descending order.
pub fn parse_fecha_to_timestamp(fecha: Option<&str>) -> Option<i64> {
    let raw = fecha?.trim();
    if raw.is_empty() {
        return None;
    }

    parse_general(raw).or_else(|| parse_day_first(raw))
}

fn parse_general(raw: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Strict `D/M/YYYY[ H:M[:S]]`, interpreted as UTC.
fn parse_day_first(raw: &str) -> Option<i64> {
    let mut parts = raw.split_whitespace();
    let date_part = parts.next()?;
    let time_part = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let date_fields: Vec<&str> = date_part.split('/').collect();
    let [day, month, year] = date_fields.as_slice() else {
        return None;
    };
    let day = digits(day, 1, 2)?;
    let month = digits(month, 1, 2)?;
    let year = digits(year, 4, 4)?;
    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;

    let time = match time_part {
        None => NaiveTime::MIN,
        Some(time_part) => {
            let time_fields: Vec<&str> = time_part.split(':').collect();
            match time_fields.as_slice() {
                [hour, minute] => NaiveTime::from_hms_opt(
                    digits(hour, 1, 2)?,
                    digits(minute, 1, 2)?,
                    0,
                )?,
                [hour, minute, second] => NaiveTime::from_hms_opt(
                    digits(hour, 1, 2)?,
                    digits(minute, 1, 2)?,
                    digits(second, 1, 2)?,
                )?,
                _ => return None,
            }
        }
    };

    Some(date.and_time(time).and_utc().timestamp_millis())
}

fn digits(value: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if value.len() < min_len || value.len() > max_len {
        return None;
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        // 2023-06-01T00:00:00Z
        assert_eq!(
            parse_fecha_to_timestamp(Some("2023-06-01")),
            Some(1_685_577_600_000)
        );
    }

    #[test]
    fn test_day_first_matches_iso() {
        assert_eq!(
            parse_fecha_to_timestamp(Some("1/6/2023")),
            parse_fecha_to_timestamp(Some("2023-06-01"))
        );
    }

    #[test]
    fn test_day_first_with_time() {
        let with_minutes = parse_fecha_to_timestamp(Some("1/6/2023 10:30")).unwrap();
        let with_seconds = parse_fecha_to_timestamp(Some("01/06/2023 10:30:15")).unwrap();
        let midnight = parse_fecha_to_timestamp(Some("1/6/2023")).unwrap();
        assert_eq!(with_minutes - midnight, (10 * 3600 + 30 * 60) * 1000);
        assert_eq!(with_seconds - with_minutes, 15_000);
    }

    #[test]
    fn test_rfc3339_with_offset() {
        assert_eq!(
            parse_fecha_to_timestamp(Some("2023-06-01T03:00:00-03:00")),
            parse_fecha_to_timestamp(Some("2023-06-01T06:00:00Z"))
        );
    }

    #[test]
    fn test_missing_and_invalid_sort_last() {
        assert_eq!(parse_fecha_to_timestamp(None), None);
        assert_eq!(parse_fecha_to_timestamp(Some("")), None);
        assert_eq!(parse_fecha_to_timestamp(Some("   ")), None);
        assert_eq!(parse_fecha_to_timestamp(Some("not-a-date")), None);
        assert_eq!(parse_fecha_to_timestamp(Some("32/1/2023")), None);
        assert_eq!(parse_fecha_to_timestamp(Some("1/6/23")), None);

        let dated = parse_fecha_to_timestamp(Some("2023-06-01"));
        assert!(dated > parse_fecha_to_timestamp(Some("not-a-date")));
    }
}
