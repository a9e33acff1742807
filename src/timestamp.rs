//! Timestamp extraction from glog-style lines.
//!
//! YugabyteDB log lines open with a level letter glued to the date, then the
//! wall clock time: `I0101 10:00:23.123456 12345 tablet.cc:87] ...`. Two
//! different timestamps are pulled out of that prefix:
//!
//! - the *filter* timestamp, minute precision, used for time-window checks;
//! - the *display* timestamp, full precision, shown in the report.
//!
//! Log lines carry no year, so filter timestamps are parsed against a fixed
//! reference year. Comparisons are only meaningful within one run and never
//! across a year boundary.

use crate::error::{Result, TriageError};
use chrono::NaiveDateTime;

const REFERENCE_YEAR: &str = "1900";
const FILTER_FORMAT: &str = "%Y %m%d %H:%M";

/// Minute-precision timestamp used for time-window inclusion.
///
/// Built from field 1 minus its leading level letter and the first five
/// characters of field 2, i.e. `"MMDD HH:MM"`.
pub fn filter_timestamp(line: &str) -> Result<NaiveDateTime> {
    let malformed = || TriageError::MalformedTimestamp {
        found: line.chars().take(32).collect(),
    };

    let mut fields = line.split_whitespace();
    let date_field = fields.next().ok_or_else(malformed)?;
    let time_field = fields.next().ok_or_else(malformed)?;

    let date = date_field.get(1..).ok_or_else(malformed)?;
    let minute = time_field.get(..5).ok_or_else(malformed)?;

    NaiveDateTime::parse_from_str(
        &format!("{REFERENCE_YEAR} {date} {minute}"),
        FILTER_FORMAT,
    )
    .map_err(|_| malformed())
}

/// Full-precision timestamp string shown in the report, e.g.
/// `"0101 10:00:23.123456"`. Pure string slicing; `None` when the line has
/// fewer than two whitespace-delimited fields.
pub fn display_timestamp(line: &str) -> Option<String> {
    let mut fields = line.split_whitespace();
    let date_field = fields.next()?;
    let time_field = fields.next()?;
    let date = date_field.get(1..)?;
    Some(format!("{date} {time_field}"))
}

/// Parse a CLI window bound given as `"MMDD HH:MM"`.
pub fn parse_bound(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{REFERENCE_YEAR} {value}"), FILTER_FORMAT).map_err(
        |_| TriageError::InvalidTimeBound {
            value: value.to_string(),
        },
    )
}

/// Inclusive time window applied to filter timestamps. Unset bounds pass
/// everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeWindow {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl TimeWindow {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self {
            start: start.map(parse_bound).transpose()?,
            end: end.map(parse_bound).transpose()?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| ts >= start) && self.end.is_none_or(|end| ts <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "I0101 10:00:23.123456 12345 tablet.cc:87] something happened";

    #[test]
    fn test_filter_timestamp_minute_precision() {
        let ts = filter_timestamp(LINE).unwrap();
        assert_eq!(ts.format("%m%d %H:%M").to_string(), "0101 10:00");
    }

    #[test]
    fn test_filter_timestamp_strips_level_letter() {
        let warning = "W0315 23:59:59.000001 99 raft_consensus.cc:1] stepping down";
        let ts = filter_timestamp(warning).unwrap();
        assert_eq!(ts.format("%m%d %H:%M").to_string(), "0315 23:59");
    }

    #[test]
    fn test_filter_timestamp_single_field_is_malformed() {
        let err = filter_timestamp("onlyonefield").unwrap_err();
        assert!(matches!(err, TriageError::MalformedTimestamp { .. }));
    }

    #[test]
    fn test_filter_timestamp_empty_line_is_malformed() {
        assert!(filter_timestamp("").is_err());
    }

    #[test]
    fn test_filter_timestamp_non_numeric_is_malformed() {
        let err = filter_timestamp("stack trace follows:").unwrap_err();
        assert!(matches!(err, TriageError::MalformedTimestamp { .. }));
    }

    #[test]
    fn test_filter_timestamp_short_time_field_is_malformed() {
        assert!(filter_timestamp("I0101 10:0").is_err());
    }

    #[test]
    fn test_display_timestamp_keeps_subseconds() {
        assert_eq!(
            display_timestamp(LINE).as_deref(),
            Some("0101 10:00:23.123456")
        );
    }

    #[test]
    fn test_display_timestamp_missing_fields() {
        assert_eq!(display_timestamp(""), None);
        assert_eq!(display_timestamp("I0101"), None);
    }

    #[test]
    fn test_display_timestamp_is_lexicographically_ordered() {
        let earlier = display_timestamp("I0101 09:59:59.999999 x").unwrap();
        let later = display_timestamp("I0101 10:00:00.000000 x").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_parse_bound_valid() {
        let ts = parse_bound("0101 10:05").unwrap();
        assert_eq!(ts.format("%m%d %H:%M").to_string(), "0101 10:05");
    }

    #[test]
    fn test_parse_bound_invalid() {
        let err = parse_bound("not a time").unwrap_err();
        assert!(matches!(err, TriageError::InvalidTimeBound { .. }));
    }

    #[test]
    fn test_window_unbounded_contains_everything() {
        let window = TimeWindow::unbounded();
        assert!(window.is_unbounded());
        assert!(window.contains(parse_bound("0101 00:00").unwrap()));
        assert!(window.contains(parse_bound("1231 23:59").unwrap()));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = TimeWindow::from_bounds(Some("0101 10:01"), Some("0101 10:11")).unwrap();
        assert!(!window.is_unbounded());
        assert!(!window.contains(parse_bound("0101 10:00").unwrap()));
        assert!(window.contains(parse_bound("0101 10:01").unwrap()));
        assert!(window.contains(parse_bound("0101 10:11").unwrap()));
        assert!(!window.contains(parse_bound("0101 10:12").unwrap()));
    }

    #[test]
    fn test_window_half_open_start_only() {
        let window = TimeWindow::from_bounds(Some("0601 00:00"), None).unwrap();
        assert!(!window.contains(parse_bound("0531 23:59").unwrap()));
        assert!(window.contains(parse_bound("0601 00:00").unwrap()));
    }

    #[test]
    fn test_window_from_bounds_propagates_parse_error() {
        assert!(TimeWindow::from_bounds(Some("bogus"), None).is_err());
    }
}
