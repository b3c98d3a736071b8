//! Word length and syllable extremes.

use crate::record::WordRecord;
use crate::text;

use super::reports::{MeasureReport, refs};

/// Extremes and mean of `metric` over every headword. `None` for an empty archive.
pub fn measure(records: &[WordRecord], metric: impl Fn(&str) -> usize) -> Option<MeasureReport> {
    let values: Vec<(usize, &WordRecord)> = records.iter().map(|r| (metric(&r.word), r)).collect();
    let min = values.iter().map(|(v, _)| *v).min()?;
    let max = values.iter().map(|(v, _)| *v).max()?;
    let total: usize = values.iter().map(|(v, _)| v).sum();
    let average = total as f64 / values.len() as f64;

    let at = |target: usize| {
        refs(
            values
                .iter()
                .filter(|(v, _)| *v == target)
                .map(|(_, r)| *r),
        )
    };

    Some(MeasureReport {
        min,
        max,
        average: round1(average),
        min_words: at(min),
        max_words: at(max),
    })
}

/// Headword length in letters.
pub fn length_report(records: &[WordRecord]) -> Option<MeasureReport> {
    measure(records, text::letter_count)
}

/// Estimated syllables per headword.
pub fn syllable_report(records: &[WordRecord]) -> Option<MeasureReport> {
    measure(records, text::count_syllables)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
