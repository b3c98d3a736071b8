//! Word records and dictionary definitions.
//!
//! A [`WordRecord`] is the on-disk unit of the site: one headword, one day,
//! the definitions the provider returned and the provider's raw payload.
//!
//! Stored bodies come in two shapes, a bare record object or an array whose
//! first element is the record. [`decode_record_body`] makes that choice
//! explicit instead of guessing from field access.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RecordError, RecordResult};

/// One sense or entry returned by a dictionary provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryDefinition {
    /// Provider-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Part of speech label, as the provider spells it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// Definition text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Attribution line required by the provider's license.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_text: Option<String>,
    /// Dictionary the sense came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dictionary: Option<String>,
    /// Link back to the provider's entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Usage examples.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Synonyms.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    /// Antonyms. Some providers never supply these.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

impl DictionaryDefinition {
    /// A definition is usable when it carries non-blank text or part of speech.
    pub fn is_usable(&self) -> bool {
        let non_blank =
            |field: &Option<String>| field.as_deref().is_some_and(|s| !s.trim().is_empty());
        non_blank(&self.text) || non_blank(&self.part_of_speech)
    }
}

/// One day's word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordRecord {
    /// The headword as originally cased.
    pub word: String,
    /// `YYYYMMDD`.
    pub date: String,
    /// Name of the adapter that produced the record.
    #[serde(rename = "adapter", default)]
    pub adapter_name: String,
    /// Definitions in provider order.
    #[serde(rename = "data", default)]
    pub definitions: Vec<DictionaryDefinition>,
    /// Raw provider payload, kept for diagnostics only.
    #[serde(rename = "rawData", default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<Value>,
}

impl WordRecord {
    /// Whether any definition is usable (see [`DictionaryDefinition::is_usable`]).
    pub fn is_valid(&self) -> bool {
        !self.word.trim().is_empty() && self.definitions.iter().any(DictionaryDefinition::is_usable)
    }

    /// First definition with non-blank text, the one a word page leads with.
    pub fn primary_definition(&self) -> Option<&DictionaryDefinition> {
        self.definitions
            .iter()
            .find(|d| d.text.as_deref().is_some_and(|t| !t.trim().is_empty()))
    }

    /// The four-digit year prefix of the date.
    pub fn year(&self) -> &str {
        self.date.get(..4).unwrap_or_default()
    }

    /// The two-digit month of the date.
    pub fn month(&self) -> &str {
        self.date.get(4..6).unwrap_or_default()
    }
}

/// A record as it sits on disk, before its date has been reconciled.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredRecord {
    pub word: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "adapter", default)]
    pub adapter_name: String,
    #[serde(rename = "data", default)]
    pub definitions: Vec<DictionaryDefinition>,
    #[serde(rename = "rawData", default)]
    pub raw_response: Option<Value>,
}

impl StoredRecord {
    /// Attach the resolved date, discarding whatever the body claimed.
    pub fn with_date(self, date: String) -> WordRecord {
        if let Some(embedded) = self.date.as_deref()
            && embedded != date
        {
            tracing::debug!(
                word = %self.word,
                embedded,
                resolved = %date,
                "embedded date overridden by file name"
            );
        }
        WordRecord {
            word: self.word,
            date,
            adapter_name: self.adapter_name,
            definitions: self.definitions,
            raw_response: self.raw_response,
        }
    }
}

/// Decode a stored file body.
///
/// Arrays contribute their first element; objects are taken as-is; anything
/// else is rejected, as is a blank headword.
pub(crate) fn decode_record_body(raw: &str) -> RecordResult<StoredRecord> {
    let value: Value = serde_json::from_str(raw)?;
    let body = match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or(RecordError::UnexpectedShape { found: "empty array" })?,
        object @ Value::Object(_) => object,
        other => {
            return Err(RecordError::UnexpectedShape {
                found: json_kind(&other),
            });
        }
    };
    let stored: StoredRecord = serde_json::from_value(body)?;
    if stored.word.trim().is_empty() {
        return Err(RecordError::BlankWord);
    }
    Ok(stored)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
