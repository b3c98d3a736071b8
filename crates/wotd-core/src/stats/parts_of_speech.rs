//! Part-of-speech label survey.
//!
//! Providers label definitions inconsistently ("noun", "noun.", "verb-transitive",
//! "idiom"). This view counts the labels actually stored and flags the ones a
//! page generator would want to normalize.

use std::collections::HashMap;

use crate::record::WordRecord;
use crate::word_lists::{SPECIALIZED_POS_MARKERS, STANDARD_PARTS_OF_SPEECH};

use super::reports::{PartOfSpeechCount, PartOfSpeechReport};

/// Example words kept per label.
pub const MAX_EXAMPLES: usize = 5;

/// Whether a label carries stray punctuation or doubled spaces.
pub fn has_formatting_issue(label: &str) -> bool {
    label.ends_with('.') || label.ends_with(',') || label.contains("  ")
}

/// Whether a label names a finer grammatical category.
pub fn is_specialized(label: &str) -> bool {
    let lower = label.to_lowercase();
    SPECIALIZED_POS_MARKERS.iter().any(|m| lower.contains(m))
}

/// Whether a label is one of the eight traditional parts of speech.
pub fn is_standard(label: &str) -> bool {
    STANDARD_PARTS_OF_SPEECH.contains(label.to_lowercase().as_str())
}

/// Count every trimmed, non-blank label across all definitions.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn part_of_speech_report(records: &[WordRecord]) -> PartOfSpeechReport {
    let mut by_label: HashMap<&str, PartOfSpeechCount> = HashMap::new();
    let mut total_definitions = 0;

    for record in records {
        for definition in &record.definitions {
            let Some(label) = definition.part_of_speech.as_deref().map(str::trim) else {
                continue;
            };
            if label.is_empty() {
                continue;
            }
            total_definitions += 1;

            let entry = by_label.entry(label).or_insert_with(|| PartOfSpeechCount {
                label: label.to_string(),
                count: 0,
                examples: Vec::new(),
            });
            entry.count += 1;
            if entry.examples.len() < MAX_EXAMPLES && !entry.examples.contains(&record.word) {
                entry.examples.push(record.word.clone());
            }
        }
    }

    let mut labels: Vec<PartOfSpeechCount> = by_label.into_values().collect();
    labels.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    let mut names: Vec<&str> = labels.iter().map(|l| l.label.as_str()).collect();
    names.sort_unstable();
    let pick = |f: fn(&str) -> bool| -> Vec<String> {
        names.iter().copied().filter(|n| f(n)).map(str::to_string).collect()
    };

    let formatting_issues = pick(has_formatting_issue);
    let specialized = pick(is_specialized);
    let nonstandard = pick(|n| !is_standard(n));

    PartOfSpeechReport {
        total_definitions,
        most_common: labels.first().map(|l| l.label.clone()),
        labels,
        formatting_issues,
        specialized,
        nonstandard,
    }
}
