//! Dictionaries for headword analysis.
//!
//! Curated lookup tables used by the text predicates.

pub mod syllable_dict;
