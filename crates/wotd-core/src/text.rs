//! Headword predicates.
//!
//! Every function here is pure, case-insensitive and total. Empty input is the
//! "absent" case: counts are 0 and predicates are `false`.

use crate::word_lists::{COMMON_ENDINGS, CONSONANTS, VOWELS};

pub use crate::dictionaries::syllable_dict::count_syllables;

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch.to_ascii_lowercase())
}

fn is_consonant(ch: char) -> bool {
    CONSONANTS.contains(&ch.to_ascii_lowercase())
}

fn lowercase_chars(word: &str) -> Vec<char> {
    word.to_lowercase().chars().collect()
}

/// Number of `a e i o u` characters.
pub fn vowel_count(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

/// Number of ASCII consonants, `y` included.
pub fn consonant_count(word: &str) -> usize {
    word.chars().filter(|&c| is_consonant(c)).count()
}

/// Number of alphabetic characters.
pub fn letter_count(word: &str) -> usize {
    word.chars().filter(|c| c.is_alphabetic()).count()
}

/// Whether the lowercased word reads the same reversed.
///
/// The empty string is deliberately *not* a palindrome; the statistics pages
/// have always been built on that rule.
pub fn is_palindrome(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let chars = lowercase_chars(word);
    chars.iter().eq(chars.iter().rev())
}

/// Suffixes from [`COMMON_ENDINGS`] that the word ends with, in list order.
pub fn matching_endings(word: &str) -> Vec<&'static str> {
    let lower = word.to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }
    COMMON_ENDINGS
        .iter()
        .copied()
        .filter(|ending| lower.ends_with(ending))
        .collect()
}

/// Whether any character is immediately followed by itself.
pub fn has_double_letters(word: &str) -> bool {
    lowercase_chars(word).windows(2).any(|w| w[0] == w[1])
}

/// Whether any character repeats three or more times in a row.
pub fn has_triple_letters(word: &str) -> bool {
    lowercase_chars(word)
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Whether the word contains three or more letters in strict alphabetical
/// sequence, such as "abc" in "dabcy" or "rst" in "first".
pub fn has_alphabetical_run(word: &str) -> bool {
    let chars = lowercase_chars(word);
    let mut run = 1;
    for pair in chars.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev.is_ascii_lowercase()
            && next.is_ascii_lowercase()
            && next as u32 == prev as u32 + 1
        {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// Whether a word of two or more characters begins and ends with the same letter.
pub fn starts_and_ends_with_same_letter(word: &str) -> bool {
    let chars = lowercase_chars(word);
    match (chars.first(), chars.last()) {
        (Some(first), Some(last)) if chars.len() >= 2 => first.is_alphabetic() && first == last,
        _ => false,
    }
}

/// Whether every letter is a vowel. Non-letters are ignored.
pub fn is_all_vowels(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(is_vowel)
}

/// Whether every letter is a consonant. Non-letters are ignored.
pub fn is_all_consonants(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(is_consonant)
}
