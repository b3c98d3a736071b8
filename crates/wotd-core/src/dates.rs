//! `YYYYMMDD` date strings and calendar arithmetic.

use std::sync::LazyLock;

use camino::Utf8Path;
use chrono::{Days, Local, NaiveDate};
use regex::Regex;

/// Storage date format.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Eight digits immediately before `.json` at the end of a file name.
static FILENAME_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{8})\.json$").expect("valid regex"));

/// Parse a `YYYYMMDD` string into a calendar date.
///
/// Returns `None` for anything that is not exactly eight digits naming a real day.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Format a calendar date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The day before `date`, or `None` at the start of the calendar.
pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}

/// Whether two date strings are exactly one calendar day apart, in either order.
///
/// Unparseable input is never consecutive.
pub fn are_consecutive_days(a: &str, b: &str) -> bool {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => (a - b).num_days().abs() == 1,
        _ => false,
    }
}

/// Extract the date from a record file name such as `2024/20240131.json`.
pub fn date_from_path(path: &Utf8Path) -> Option<String> {
    let file_name = path.file_name()?;
    FILENAME_DATE
        .captures(file_name)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_dates_only() {
        assert_eq!(parse_date("20240229"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(parse_date("20230229").is_none());
        assert!(parse_date("2024-01-01").is_none());
        assert!(parse_date("2024011").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn consecutive_across_boundaries() {
        assert!(are_consecutive_days("20231231", "20240101"));
        assert!(are_consecutive_days("20240101", "20231231"));
        assert!(are_consecutive_days("20240228", "20240229"));
        assert!(are_consecutive_days("20240229", "20240301"));
        assert!(are_consecutive_days("20230228", "20230301"));
        assert!(are_consecutive_days("20240131", "20240201"));
    }

    #[test]
    fn non_consecutive_gaps() {
        assert!(!are_consecutive_days("20240101", "20240101"));
        assert!(!are_consecutive_days("20240101", "20240103"));
        // String difference of one but not a calendar day apart.
        assert!(!are_consecutive_days("20240131", "20240132"));
        assert!(!are_consecutive_days("20240130", "20240201"));
        assert!(!are_consecutive_days("garbage", "20240101"));
    }

    #[test]
    fn date_from_file_name() {
        assert_eq!(
            date_from_path(Utf8Path::new("data/words/2024/20240131.json")).as_deref(),
            Some("20240131")
        );
        assert_eq!(
            date_from_path(Utf8Path::new("word-20240131.json")).as_deref(),
            Some("20240131")
        );
        assert!(date_from_path(Utf8Path::new("data/words/2024/notes.json")).is_none());
        assert!(date_from_path(Utf8Path::new("data/words/2024/20240131.json.bak")).is_none());
        assert!(date_from_path(Utf8Path::new("data/20240131/word.json")).is_none());
    }

    #[test]
    fn formats_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
        assert_eq!(format_date(date), "20250104");
        assert_eq!(
            previous_day(date).map(format_date).as_deref(),
            Some("20250103")
        );
    }
}
