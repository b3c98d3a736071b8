//! Syllable overrides for irregular headwords.
//!
//! The vowel-group estimate is right for most words; the table below pins
//! the ones it gets wrong (hiatus vowels, pronounced final `e`, and the like).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Known syllable counts that the estimate cannot derive.
pub static SYLLABLE_OVERRIDES: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Vowel pairs split across syllables
    map.extend([
        ("area", 3),
        ("idea", 3),
        ("poem", 2),
        ("quiet", 2),
        ("lion", 2),
        ("chaos", 2),
        ("naive", 2),
        ("create", 2),
        ("science", 2),
    ]);

    // Pronounced final e
    map.extend([
        ("acme", 2),
        ("recipe", 3),
        ("simile", 3),
        ("sesame", 3),
        ("cliche", 2),
        ("epitome", 4),
        ("anemone", 4),
        ("ukulele", 4),
        ("karaoke", 4),
        ("hyperbole", 4),
        ("apostrophe", 4),
        ("catastrophe", 4),
    ]);

    map.insert("ululated", 4);

    map
});

/// Terminal `e` after a non-vowel, silent in most English words.
static SILENT_E: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^aeiou]e$").expect("valid regex"));

/// Maximal vowel groups, `y` included.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]+").expect("valid regex"));

/// Look up a word in the override table.
pub fn lookup_syllables(word: &str) -> Option<usize> {
    SYLLABLE_OVERRIDES.get(word).copied()
}

/// Estimate syllables from vowel groups.
///
/// A silent final `e` is dropped before counting, and a word ending in
/// consonant + `e` loses one more group. Expects lowercase, trimmed input.
/// Never returns less than 1.
pub fn estimate_syllables(word: &str) -> usize {
    let silent_e = SILENT_E.is_match(word);
    let stem = if silent_e { &word[..word.len() - 1] } else { word };

    let groups = VOWEL_GROUP.find_iter(stem).count();
    groups.saturating_sub(usize::from(silent_e)).max(1)
}

/// Count syllables: override lookup with estimation fallback.
///
/// Empty or whitespace-only input has zero syllables; anything else has at least one.
pub fn count_syllables(word: &str) -> usize {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return 0;
    }
    lookup_syllables(&word).unwrap_or_else(|| estimate_syllables(&word))
}
