//! Derived statistics over the word archive.
//!
//! Each view is a pure function over the date-descending record list the
//! store returns, orchestrated by [`compute_stats`]. Callers can also invoke
//! views individually.

pub mod letters;
pub mod measures;
pub mod milestones;
pub mod parts_of_speech;
pub mod patterns;
pub mod reports;
pub mod streaks;

use chrono::NaiveDate;

pub use letters::{first_letter_groups, letter_frequency, letter_report};
pub use measures::{length_report, syllable_report};
pub use milestones::{milestone_positions, milestones};
pub use parts_of_speech::part_of_speech_report;
pub use patterns::{ending_groups, pattern_groups, words_matching};
pub use reports::WordStatsReport;
pub use streaks::{current_streak, longest_streak};

use crate::record::WordRecord;

/// Compute every statistics view.
///
/// `records` must be newest first; `today` anchors the current streak.
#[tracing::instrument(skip_all, fields(records = records.len(), %today))]
pub fn compute_stats(records: &[WordRecord], today: NaiveDate) -> WordStatsReport {
    let report = WordStatsReport {
        total_words: records.len(),
        letters: letter_report(records),
        patterns: pattern_groups(records),
        endings: ending_groups(records),
        milestones: milestones::milestone_report(records),
        streaks: streaks::streak_report(records, today),
        lengths: length_report(records),
        syllables: syllable_report(records),
        first_letters: first_letter_groups(records),
        parts_of_speech: part_of_speech_report(records),
    };
    tracing::debug!(
        current_streak = report.streaks.current.len(),
        longest_streak = report.streaks.longest.len(),
        "statistics computed"
    );
    report
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Days, NaiveDate};

    use crate::dates::format_date;
    use crate::record::WordRecord;

    /// Records from `(word, date)` pairs, kept in the given order.
    pub fn records(pairs: &[(&str, &str)]) -> Vec<WordRecord> {
        pairs
            .iter()
            .map(|(word, date)| WordRecord {
                word: (*word).to_string(),
                date: (*date).to_string(),
                adapter_name: "wordnik".to_string(),
                definitions: Vec::new(),
                raw_response: None,
            })
            .collect()
    }

    /// `n` records on consecutive days from 2020-01-01, newest first.
    /// `word1` is the oldest.
    pub fn dated_records(n: usize) -> Vec<WordRecord> {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let mut out: Vec<WordRecord> = (1..=n)
            .map(|i| WordRecord {
                word: format!("word{i}"),
                date: format_date(start.checked_add_days(Days::new(i as u64 - 1)).unwrap()),
                adapter_name: "wordnik".to_string(),
                definitions: Vec::new(),
                raw_response: None,
            })
            .collect();
        out.reverse();
        out
    }
}
