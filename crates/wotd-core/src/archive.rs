//! Archive navigation: year and month groupings, lookups, previous/next.
//!
//! Views borrow from the record list the store returns and keep its newest
//! first order inside every group.

use std::collections::BTreeMap;

use crate::record::WordRecord;

/// The words either side of a date.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdjacentWords<'a> {
    /// The closest older record.
    pub previous: Option<&'a WordRecord>,
    /// The closest newer record.
    pub next: Option<&'a WordRecord>,
}

/// Years with at least one word, newest first.
pub fn available_years(records: &[WordRecord]) -> Vec<&str> {
    let mut years: Vec<&str> = records
        .iter()
        .map(WordRecord::year)
        .filter(|y| !y.is_empty())
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Records grouped by year.
pub fn words_by_year(records: &[WordRecord]) -> BTreeMap<&str, Vec<&WordRecord>> {
    let mut groups: BTreeMap<&str, Vec<&WordRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.year()).or_default().push(record);
    }
    groups
}

/// Records from one year grouped by two-digit month.
pub fn words_by_month<'a>(
    records: &'a [WordRecord],
    year: &str,
) -> BTreeMap<&'a str, Vec<&'a WordRecord>> {
    let mut groups: BTreeMap<&str, Vec<&WordRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.year() == year) {
        groups.entry(record.month()).or_default().push(record);
    }
    groups
}

/// The record featured on `date`.
pub fn find_by_date<'a>(records: &'a [WordRecord], date: &str) -> Option<&'a WordRecord> {
    records.iter().find(|r| r.date == date)
}

/// The newest record for `word`, ignoring case and surrounding whitespace.
pub fn find_by_word<'a>(records: &'a [WordRecord], word: &str) -> Option<&'a WordRecord> {
    let wanted = word.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    records
        .iter()
        .filter(|r| r.word.trim().to_lowercase() == wanted)
        .max_by(|a, b| a.date.cmp(&b.date))
}

/// The closest older and newer records around `date`.
///
/// `date` need not be in the archive, and input order does not matter.
pub fn adjacent_words<'a>(records: &'a [WordRecord], date: &str) -> AdjacentWords<'a> {
    AdjacentWords {
        previous: records
            .iter()
            .filter(|r| r.date.as_str() < date)
            .max_by(|a, b| a.date.cmp(&b.date)),
        next: records
            .iter()
            .filter(|r| r.date.as_str() > date)
            .min_by(|a, b| a.date.cmp(&b.date)),
    }
}
