//! Report structs for the statistics pages.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so page
//! generators can consume them as plain JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::WordRecord;

/// Every statistics view over the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordStatsReport {
    /// Number of records analyzed.
    pub total_words: usize,
    /// Letter frequency across all headwords.
    pub letters: LetterFrequencyReport,
    /// Spelling pattern groupings.
    pub patterns: PatternReport,
    /// Common suffix groupings, one per tracked ending.
    pub endings: Vec<EndingGroup>,
    /// Chronological milestones, oldest first.
    pub milestones: Vec<Milestone>,
    /// Current and longest daily streaks.
    pub streaks: StreakReport,
    /// Headword length in letters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lengths: Option<MeasureReport>,
    /// Estimated syllables per headword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllables: Option<MeasureReport>,
    /// Words grouped by their first letter.
    pub first_letters: Vec<LetterGroup>,
    /// Part-of-speech labels used by the stored definitions.
    pub parts_of_speech: PartOfSpeechReport,
}

/// A record reference small enough to embed in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordRef {
    /// The headword.
    pub word: String,
    /// `YYYYMMDD` date it was featured.
    pub date: String,
}

impl From<&WordRecord> for WordRef {
    fn from(record: &WordRecord) -> Self {
        Self {
            word: record.word.clone(),
            date: record.date.clone(),
        }
    }
}

/// Convert borrowed records into report references, keeping order.
pub(crate) fn refs<'a>(records: impl IntoIterator<Item = &'a WordRecord>) -> Vec<WordRef> {
    records.into_iter().map(WordRef::from).collect()
}

// -- Letters ----------------------------------------------------------------

/// Occurrences of one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LetterCount {
    /// Lowercase ASCII letter.
    pub letter: char,
    /// Occurrences across all headwords.
    pub count: usize,
}

/// Letter frequency, ordered by count descending then letter ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct LetterFrequencyReport {
    /// Letters that occur at least once.
    pub frequencies: Vec<LetterCount>,
    /// First entry of `frequencies`.
    pub most_common: Option<LetterCount>,
    /// Last entry of `frequencies`.
    pub least_common: Option<LetterCount>,
}

// -- Patterns ---------------------------------------------------------------

/// Non-exclusive spelling pattern buckets, each in archive order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PatternReport {
    /// Words that read the same reversed.
    pub palindromes: Vec<WordRef>,
    /// Words starting and ending with the same letter.
    pub same_start_end: Vec<WordRef>,
    /// Words with a doubled character.
    pub double_letters: Vec<WordRef>,
    /// Words with a character repeated three times in a row.
    pub triple_letters: Vec<WordRef>,
    /// Words containing three consecutive alphabet letters.
    pub alphabetical_runs: Vec<WordRef>,
    /// Words made only of vowels.
    pub all_vowels: Vec<WordRef>,
    /// Words made only of consonants.
    pub all_consonants: Vec<WordRef>,
}

/// Words ending in one tracked suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EndingGroup {
    /// The suffix.
    pub ending: String,
    /// Matching words, in archive order.
    pub words: Vec<WordRef>,
}

// -- Chronology -------------------------------------------------------------

/// The word at a notable 1-indexed position in the archive's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Milestone {
    /// 1-indexed position, oldest first.
    pub position: usize,
    /// The record at that position.
    pub word: WordRef,
}

/// Daily posting streaks. Words are newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StreakReport {
    /// Whether the newest record is from today or yesterday.
    pub active: bool,
    /// The streak ending at the newest record, empty when inactive.
    pub current: Vec<WordRef>,
    /// The longest run of consecutive days in the archive.
    pub longest: Vec<WordRef>,
}

// -- Measures ---------------------------------------------------------------

/// Extremes and mean of a per-word measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MeasureReport {
    /// Smallest value.
    pub min: usize,
    /// Largest value.
    pub max: usize,
    /// Mean, rounded to one decimal.
    pub average: f64,
    /// Words at the minimum, in archive order.
    pub min_words: Vec<WordRef>,
    /// Words at the maximum, in archive order.
    pub max_words: Vec<WordRef>,
}

/// Words sharing a first letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LetterGroup {
    /// Lowercase first letter.
    pub letter: char,
    /// Words in archive order.
    pub words: Vec<WordRef>,
}

// -- Parts of speech --------------------------------------------------------

/// Usage of one part-of-speech label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PartOfSpeechCount {
    /// Label as stored, trimmed.
    pub label: String,
    /// Definitions carrying the label.
    pub count: usize,
    /// Up to five distinct words using the label, in archive order.
    pub examples: Vec<String>,
}

/// Part-of-speech labelling across all stored definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PartOfSpeechReport {
    /// Definitions with a non-blank label.
    pub total_definitions: usize,
    /// Labels by count descending, then label ascending.
    pub labels: Vec<PartOfSpeechCount>,
    /// The most used label.
    pub most_common: Option<String>,
    /// Labels with stray punctuation or doubled spaces.
    pub formatting_issues: Vec<String>,
    /// Labels naming a finer grammatical category (transitive, modal, ...).
    pub specialized: Vec<String>,
    /// Labels outside the eight traditional parts of speech.
    pub nonstandard: Vec<String>,
}
