//! Dictionary adapters.
//!
//! An adapter turns one provider's API into the common
//! [`DictionaryDefinition`] shape. Only Wordnik is implemented; the trait is
//! the seam where another provider would plug in.

mod wordnik;

use std::future::Future;

use serde_json::Value;

use crate::error::DictionaryResult;
use crate::record::{DictionaryDefinition, WordRecord};

pub use wordnik::WordnikAdapter;

/// Per-call lookup options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Maximum definitions to request. Falls back to the configured limit.
    pub limit: Option<u32>,
}

/// A normalized provider answer for one word.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryResponse {
    /// The word as the caller asked for it.
    pub word: String,
    /// The form the provider matched (the lowercased word after a fallback).
    pub matched: String,
    /// Normalized definitions in provider order.
    pub definitions: Vec<DictionaryDefinition>,
    /// The provider's payload, untouched.
    pub raw: Value,
}

/// A dictionary provider.
pub trait DictionaryAdapter {
    /// Name recorded in each [`WordRecord`] this adapter produces.
    fn name(&self) -> &'static str;

    /// Look a word up, retrying once in lowercase when the original case is not found.
    fn fetch_word_data(
        &self,
        word: &str,
        options: &FetchOptions,
    ) -> impl Future<Output = DictionaryResult<DictionaryResponse>> + Send;

    /// Build the record stored for `date`.
    fn transform_to_record(&self, response: &DictionaryResponse, date: &str) -> WordRecord {
        WordRecord {
            word: response.word.clone(),
            date: date.to_string(),
            adapter_name: self.name().to_string(),
            definitions: response.definitions.clone(),
            raw_response: Some(response.raw.clone()),
        }
    }

    /// Whether a raw payload is worth normalizing.
    fn is_valid_response(&self, raw: &Value) -> bool {
        is_valid_response(raw)
    }
}

/// A payload is valid when it is a non-empty array or any truthy non-array.
///
/// Truthiness follows the JSON-in-JavaScript rules the stored data was
/// produced under: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_valid_response(raw: &Value) -> bool {
    match raw {
        Value::Array(items) => !items.is_empty(),
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Object(_) => true,
    }
}
