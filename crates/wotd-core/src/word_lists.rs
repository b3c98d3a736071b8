//! Curated word lists for headword analysis.
//!
//! Suffixes tracked on the endings page, letter classes, and the part-of-speech
//! vocabulary used to spot provider labelling quirks.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Suffixes tracked by the endings statistics, in display order.
pub const COMMON_ENDINGS: &[&str] = &["ing", "ed", "ly", "ness", "ful", "less"];

/// Vowels for counting and classification. `y` is a consonant here.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Consonants for counting and classification.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// The eight traditional parts of speech.
pub static STANDARD_PARTS_OF_SPEECH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "noun",
        "verb",
        "adjective",
        "adverb",
        "preposition",
        "pronoun",
        "conjunction",
        "interjection",
    ]
    .into_iter()
    .collect()
});

/// Qualifiers that mark a finer-grained grammatical category
/// ("verb-transitive", "definite-article", ...).
pub const SPECIALIZED_POS_MARKERS: &[&str] = &[
    "transitive",
    "intransitive",
    "auxiliary",
    "modal",
    "phrasal",
    "definite",
    "indefinite",
];
