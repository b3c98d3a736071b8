//! Spelling pattern and suffix groupings.

use crate::record::WordRecord;
use crate::text;
use crate::word_lists::COMMON_ENDINGS;

use super::reports::{EndingGroup, PatternReport, refs};

/// Records whose headword satisfies `predicate`, in input order.
pub fn words_matching<'a>(
    records: &'a [WordRecord],
    predicate: impl Fn(&str) -> bool,
) -> Vec<&'a WordRecord> {
    records.iter().filter(|r| predicate(&r.word)).collect()
}

/// Build every pattern bucket. A word may appear in several.
pub fn pattern_groups(records: &[WordRecord]) -> PatternReport {
    let bucket = |predicate: fn(&str) -> bool| refs(words_matching(records, predicate));
    PatternReport {
        palindromes: bucket(text::is_palindrome),
        same_start_end: bucket(text::starts_and_ends_with_same_letter),
        double_letters: bucket(text::has_double_letters),
        triple_letters: bucket(text::has_triple_letters),
        alphabetical_runs: bucket(text::has_alphabetical_run),
        all_vowels: bucket(text::is_all_vowels),
        all_consonants: bucket(text::is_all_consonants),
    }
}

/// One group per tracked ending, in display order, empty groups included.
pub fn ending_groups(records: &[WordRecord]) -> Vec<EndingGroup> {
    COMMON_ENDINGS
        .iter()
        .map(|&ending| EndingGroup {
            ending: ending.to_string(),
            words: refs(words_matching(records, |word| {
                text::matching_endings(word).contains(&ending)
            })),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::reports::WordRef;
    use crate::stats::test_support::records;

    fn words(found: &[WordRef]) -> Vec<&str> {
        found.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn buckets_are_not_exclusive() {
        let recs = records(&[
            ("level", "20240105"),
            ("brrr", "20240104"),
            ("first", "20240103"),
            ("eau", "20240102"),
            ("tryst", "20240101"),
        ]);
        let report = pattern_groups(&recs);

        assert_eq!(words(&report.palindromes), vec!["level"]);
        assert_eq!(words(&report.same_start_end), vec!["level", "tryst"]);
        assert_eq!(words(&report.double_letters), vec!["brrr"]);
        assert_eq!(words(&report.triple_letters), vec!["brrr"]);
        assert_eq!(words(&report.alphabetical_runs), vec!["first"]);
        assert_eq!(words(&report.all_vowels), vec!["eau"]);
        assert_eq!(words(&report.all_consonants), vec!["brrr", "tryst"]);
    }

    #[test]
    fn every_ending_has_a_group() {
        let recs = records(&[("walking", "20240102"), ("hopeful", "20240101")]);
        let groups = ending_groups(&recs);

        assert_eq!(groups.len(), COMMON_ENDINGS.len());
        assert_eq!(groups[0].ending, "ing");
        assert_eq!(words(&groups[0].words), vec!["walking"]);
        let ful = groups.iter().find(|g| g.ending == "ful").unwrap();
        assert_eq!(words(&ful.words), vec!["hopeful"]);
        let ed = groups.iter().find(|g| g.ending == "ed").unwrap();
        assert!(ed.words.is_empty());
    }

    #[test]
    fn custom_predicate() {
        let recs = records(&[("ox", "20240102"), ("aardvark", "20240101")]);
        let long = words_matching(&recs, |w| w.len() > 3);
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].word, "aardvark");
    }
}
