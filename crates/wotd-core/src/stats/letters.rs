//! Letter frequency and first-letter groupings.

use std::collections::BTreeMap;

use crate::record::WordRecord;

use super::reports::{LetterCount, LetterFrequencyReport, LetterGroup, refs};

/// Count `a`-`z` across all headwords, case-folded.
///
/// Ordered by count descending, ties broken alphabetically. Letters that never
/// occur are left out.
pub fn letter_frequency(records: &[WordRecord]) -> Vec<LetterCount> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for record in records {
        for ch in record.word.to_lowercase().chars() {
            if ch.is_ascii_lowercase() {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
    }

    let mut frequencies: Vec<LetterCount> = counts
        .into_iter()
        .map(|(letter, count)| LetterCount { letter, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then(a.letter.cmp(&b.letter)));
    frequencies
}

/// Letter frequency with its most and least common entries.
pub fn letter_report(records: &[WordRecord]) -> LetterFrequencyReport {
    let frequencies = letter_frequency(records);
    LetterFrequencyReport {
        most_common: frequencies.first().copied(),
        least_common: frequencies.last().copied(),
        frequencies,
    }
}

/// Group words by their first letter, alphabetically.
///
/// Words that start with anything other than an ASCII letter are skipped.
pub fn first_letter_groups(records: &[WordRecord]) -> Vec<LetterGroup> {
    let mut groups: BTreeMap<char, Vec<&WordRecord>> = BTreeMap::new();
    for record in records {
        let first = record
            .word
            .trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase());
        if let Some(letter) = first.filter(char::is_ascii_lowercase) {
            groups.entry(letter).or_default().push(record);
        }
    }

    groups
        .into_iter()
        .map(|(letter, words)| LetterGroup {
            letter,
            words: refs(words),
        })
        .collect()
}
