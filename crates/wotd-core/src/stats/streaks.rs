//! Daily posting streaks.
//!
//! Both functions expect records newest first, as the store returns them.
//! Adjacency is one calendar day, so month, year and leap-day boundaries are
//! handled by `chrono` rather than by string arithmetic.

use chrono::NaiveDate;

use crate::dates::{are_consecutive_days, format_date, previous_day};
use crate::record::WordRecord;

use super::reports::{StreakReport, refs};

/// The run of consecutive days ending at the newest record.
///
/// Empty unless the newest record is dated `today` or the day before.
pub fn current_streak(records: &[WordRecord], today: NaiveDate) -> Vec<&WordRecord> {
    let Some(newest) = records.first() else {
        return Vec::new();
    };

    let anchor_today = format_date(today);
    let anchor_yesterday = previous_day(today).map(format_date);
    if newest.date != anchor_today && anchor_yesterday.as_deref() != Some(newest.date.as_str()) {
        return Vec::new();
    }

    let mut streak = vec![newest];
    for pair in records.windows(2) {
        if !are_consecutive_days(&pair[0].date, &pair[1].date) {
            break;
        }
        streak.push(&pair[1]);
    }
    streak
}

/// The longest run of consecutive days anywhere in the archive.
///
/// Single left-to-right pass; on a tie the run found first (the newest) wins.
pub fn longest_streak(records: &[WordRecord]) -> Vec<&WordRecord> {
    let mut best: Vec<&WordRecord> = Vec::new();
    let mut run: Vec<&WordRecord> = Vec::new();

    for record in records {
        let extends = run
            .last()
            .is_some_and(|prev| are_consecutive_days(&prev.date, &record.date));
        if !extends {
            run.clear();
        }
        run.push(record);
        if run.len() > best.len() {
            best.clone_from(&run);
        }
    }
    best
}

pub(crate) fn streak_report(records: &[WordRecord], today: NaiveDate) -> StreakReport {
    let current = current_streak(records, today);
    StreakReport {
        active: !current.is_empty(),
        current: refs(current),
        longest: refs(longest_streak(records)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::records;

    fn day(s: &str) -> NaiveDate {
        crate::dates::parse_date(s).unwrap()
    }

    fn dates<'a>(recs: &[&'a WordRecord]) -> Vec<&'a str> {
        recs.iter().map(|r| r.date.as_str()).collect()
    }

    #[test]
    fn gap_breaks_the_current_streak() {
        let recs = records(&[("c", "20250104"), ("b", "20250102"), ("a", "20250101")]);

        assert_eq!(dates(&current_streak(&recs, day("20250104"))), vec!["20250104"]);
        assert_eq!(dates(&longest_streak(&recs)), vec!["20250102", "20250101"]);
    }

    #[test]
    fn streak_may_end_yesterday() {
        let recs = records(&[("b", "20250103"), ("a", "20250102")]);
        let streak = current_streak(&recs, day("20250104"));
        assert_eq!(dates(&streak), vec!["20250103", "20250102"]);
    }

    #[test]
    fn stale_archive_has_no_current_streak() {
        let recs = records(&[("b", "20250101"), ("a", "20241231")]);
        assert!(current_streak(&recs, day("20250104")).is_empty());
        assert!(current_streak(&[], day("20250104")).is_empty());
    }

    #[test]
    fn crosses_year_and_leap_day() {
        let recs = records(&[
            ("e", "20240301"),
            ("d", "20240229"),
            ("c", "20240228"),
            ("b", "20240101"),
            ("a", "20231231"),
        ]);
        assert_eq!(
            dates(&current_streak(&recs, day("20240301"))),
            vec!["20240301", "20240229", "20240228"]
        );
        assert_eq!(longest_streak(&recs).len(), 3);

        let no_leap = records(&[("b", "20230301"), ("a", "20230228")]);
        assert_eq!(longest_streak(&no_leap).len(), 2);
    }

    #[test]
    fn first_found_maximum_wins() {
        let recs = records(&[
            ("d", "20250110"),
            ("c", "20250109"),
            ("b", "20250102"),
            ("a", "20250101"),
        ]);
        assert_eq!(dates(&longest_streak(&recs)), vec!["20250110", "20250109"]);
    }

    #[test]
    fn longest_of_empty_is_empty() {
        assert!(longest_streak(&[]).is_empty());
    }

    #[test]
    fn report_marks_activity() {
        let recs = records(&[("a", "20250104")]);
        let active = streak_report(&recs, day("20250104"));
        assert!(active.active);
        assert_eq!(active.longest.len(), 1);

        let inactive = streak_report(&recs, day("20250110"));
        assert!(!inactive.active);
        assert!(inactive.current.is_empty());
        assert_eq!(inactive.longest.len(), 1);
    }
}
