//! String lookup with strict `{{placeholder}}` substitution.
//!
//! Templates live in a nested JSON mapping addressed by dot-separated keys
//! (`stats.days`). Lookups never fall back: a missing key, or a placeholder
//! with no usable value, is an error.

use std::sync::LazyLock;

use camino::Utf8Path;
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{TranslationError, TranslationResult};

/// Bundled English strings.
const ENGLISH: &str = include_str!("../locales/en.json");

/// `{{name}}`, inner whitespace allowed.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.]+)\s*\}\}").expect("valid regex"));

/// Variables passed to [`Translator::t`].
pub type Vars = Map<String, Value>;

/// A loaded translation table.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    messages: Map<String, Value>,
}

impl Translator {
    /// Parse a translation table. The root must be a JSON object.
    pub fn from_json_str(json: &str) -> TranslationResult<Self> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(messages)) => Ok(Self { messages }),
            Ok(_) => Err(TranslationError::Resource(
                "translation root must be an object".to_string(),
            )),
            Err(e) => Err(TranslationError::Resource(e.to_string())),
        }
    }

    /// Load a translation table from disk.
    #[instrument(skip_all, fields(path = %path))]
    pub fn from_file(path: &Utf8Path) -> TranslationResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::Resource(format!("{path}: {e}")))?;
        let translator = Self::from_json_str(&json)?;
        debug!("translations loaded");
        Ok(translator)
    }

    /// The bundled English table.
    pub fn english() -> TranslationResult<Self> {
        Self::from_json_str(ENGLISH)
    }

    /// The configured table, or the bundled English one.
    pub fn from_config(config: &Config) -> TranslationResult<Self> {
        match &config.translations {
            Some(path) => Self::from_file(path),
            None => Self::english(),
        }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = self.messages.get(segments.next()?)?;
        segments.try_fold(first, |node, segment| node.as_object()?.get(segment))
    }

    fn template(&self, key: &str) -> TranslationResult<&str> {
        self.lookup(key)
            .and_then(Value::as_str)
            .ok_or_else(|| TranslationError::MissingTranslation {
                key: key.to_string(),
            })
    }

    /// Translate `key`, substituting every `{{name}}` from `vars`.
    ///
    /// Zero and the empty string are valid values; `null` is not.
    pub fn t(&self, key: &str, vars: Option<&Vars>) -> TranslationResult<String> {
        let template = self.template(key)?;
        interpolate(key, template, vars)
    }

    /// Translate a plural form of `key`, injecting `count` into the variables.
    ///
    /// Picks `key.zero` when the count is 0 and that form exists, `key.one`
    /// for 1, and `key.other` otherwise.
    pub fn tp(&self, key: &str, count: i64, vars: Option<&Vars>) -> TranslationResult<String> {
        let form = match count {
            0 if self.lookup(&format!("{key}.zero")).is_some() => "zero",
            1 => "one",
            _ => "other",
        };
        let form_key = format!("{key}.{form}");

        let mut merged = vars.cloned().unwrap_or_default();
        merged.insert("count".to_string(), Value::from(count));
        self.t(&form_key, Some(&merged))
    }
}

fn interpolate(key: &str, template: &str, vars: Option<&Vars>) -> TranslationResult<String> {
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        match vars.and_then(|v| v.get(name)) {
            None => {
                return Err(TranslationError::MissingVariable {
                    key: key.to_string(),
                    variable: name.to_string(),
                });
            }
            Some(Value::Null) => {
                return Err(TranslationError::InvalidVariable {
                    key: key.to_string(),
                    variable: name.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    let Some(vars) = vars else {
        return Ok(template.to_string());
    };
    Ok(PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).map(render).unwrap_or_default()
        })
        .into_owned())
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
