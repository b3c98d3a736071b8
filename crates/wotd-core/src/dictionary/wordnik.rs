//! Wordnik definitions adapter.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{DictionaryAdapter, DictionaryResponse, FetchOptions, is_valid_response};
use crate::config::DictionaryConfig;
use crate::error::{DictionaryError, DictionaryResult};
use crate::record::DictionaryDefinition;

/// Markup Wordnik embeds in definition text (`<xref>`, `<em>`, ...).
static INLINE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordnikDefinition {
    id: Option<Value>,
    part_of_speech: Option<String>,
    text: Option<String>,
    attribution_text: Option<String>,
    attribution_url: Option<String>,
    source_dictionary: Option<String>,
    wordnik_url: Option<String>,
    #[serde(default)]
    example_uses: Vec<ExampleUse>,
    #[serde(default)]
    related_words: Vec<RelatedWords>,
}

#[derive(Debug, Deserialize)]
struct ExampleUse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelatedWords {
    relationship_type: Option<String>,
    #[serde(default)]
    words: Vec<String>,
}

impl WordnikDefinition {
    fn related(&self, relationship: &str) -> Vec<String> {
        self.related_words
            .iter()
            .filter(|r| r.relationship_type.as_deref() == Some(relationship))
            .flat_map(|r| r.words.iter().cloned())
            .collect()
    }

    fn into_definition(self) -> DictionaryDefinition {
        let synonyms = self.related("synonym");
        let antonyms = self.related("antonym");
        let id = self.id.and_then(|id| match id {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => Some(other.to_string()),
        });
        DictionaryDefinition {
            id,
            part_of_speech: self.part_of_speech,
            text: self.text.map(|t| clean_text(&t)),
            attribution_text: self.attribution_text,
            source_dictionary: self.source_dictionary,
            source_url: self.wordnik_url.or(self.attribution_url),
            examples: self
                .example_uses
                .into_iter()
                .filter_map(|e| e.text)
                .map(|t| clean_text(&t))
                .filter(|t| !t.is_empty())
                .collect(),
            synonyms,
            antonyms,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn clean_text(text: &str) -> String {
    INLINE_TAG.replace_all(text, "").trim().to_string()
}

/// Normalize a Wordnik definitions payload.
///
/// Entries that fail to decode or carry neither text nor part of speech are dropped.
fn normalize(raw: &Value) -> Vec<DictionaryDefinition> {
    let entries: &[Value] = match raw {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    };

    entries
        .iter()
        .filter_map(|entry| match WordnikDefinition::deserialize(entry) {
            Ok(def) => Some(def.into_definition()),
            Err(error) => {
                warn!(%error, "dropping undecodable Wordnik entry");
                None
            }
        })
        .filter(DictionaryDefinition::is_usable)
        .collect()
}

/// Adapter for the Wordnik `word.json/{word}/definitions` endpoint.
#[derive(Debug, Clone)]
pub struct WordnikAdapter {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
    limit: u32,
}

impl WordnikAdapter {
    /// Build the adapter and its HTTP client from configuration.
    ///
    /// Missing credentials are reported on the first fetch, not here.
    pub fn new(config: &DictionaryConfig) -> DictionaryResult<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("wotd/{}", env!("CARGO_PKG_VERSION")));
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            limit: config.limit,
        })
    }

    fn credentials(&self) -> DictionaryResult<(&str, &str)> {
        let base_url = present(&self.base_url).ok_or_else(|| {
            DictionaryError::Configuration("dictionary base URL is not set".to_string())
        })?;
        let api_key = present(&self.api_key).ok_or_else(|| {
            DictionaryError::Configuration("dictionary API key is not set".to_string())
        })?;
        Ok((base_url, api_key))
    }

    fn definitions_url(base_url: &str, word: &str) -> DictionaryResult<Url> {
        let mut url = Url::parse(base_url).map_err(|e| {
            DictionaryError::Configuration(format!("invalid dictionary base URL {base_url:?}: {e}"))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                DictionaryError::Configuration(format!(
                    "dictionary base URL {base_url:?} cannot take a path"
                ))
            })?
            .pop_if_empty()
            .extend(["word.json", word, "definitions"]);
        Ok(url)
    }

    /// One GET. `Ok(None)` means "no entry for this spelling".
    #[instrument(skip(self, base_url, api_key), fields(status))]
    async fn lookup(
        &self,
        base_url: &str,
        api_key: &str,
        word: &str,
        limit: u32,
    ) -> DictionaryResult<Option<Value>> {
        let url = Self::definitions_url(base_url, word)?;
        let limit = limit.to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("limit", limit.as_str()),
                ("includeRelated", "true"),
                ("useCanonical", "false"),
                ("includeTags", "false"),
                ("api_key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        if status == StatusCode::NOT_FOUND {
            debug!("no entry for this spelling");
            return Ok(None);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            warn!(?retry_after, "rate limited by Wordnik");
            return Err(DictionaryError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    warn!(%error, "could not read Wordnik error body");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), "Wordnik request failed");
            return Err(DictionaryError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let raw: Value = serde_json::from_slice(&bytes)?;
        if !is_valid_response(&raw) {
            debug!("empty payload treated as not found");
            return Ok(None);
        }
        Ok(Some(raw))
    }
}

impl DictionaryAdapter for WordnikAdapter {
    fn name(&self) -> &'static str {
        "wordnik"
    }

    #[instrument(skip(self, options), fields(adapter = "wordnik"))]
    async fn fetch_word_data(
        &self,
        word: &str,
        options: &FetchOptions,
    ) -> DictionaryResult<DictionaryResponse> {
        let (base_url, api_key) = self.credentials()?;
        let limit = options.limit.unwrap_or(self.limit);

        let mut candidates = vec![word.to_string()];
        let lower = word.to_lowercase();
        if lower != word {
            candidates.push(lower);
        }

        for candidate in candidates {
            if let Some(raw) = self.lookup(base_url, api_key, &candidate, limit).await? {
                let definitions = normalize(&raw);
                debug!(
                    matched = %candidate,
                    definitions = definitions.len(),
                    "definitions fetched"
                );
                return Ok(DictionaryResponse {
                    word: word.to_string(),
                    matched: candidate,
                    definitions,
                    raw,
                });
            }
        }

        Err(DictionaryError::NotFound {
            word: word.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(base_url: Option<&str>, api_key: Option<&str>) -> DictionaryConfig {
        DictionaryConfig {
            base_url: base_url.map(str::to_string),
            api_key: api_key.map(str::to_string),
            ..DictionaryConfig::default()
        }
    }

    #[test]
    fn normalizes_wordnik_entries() {
        let raw = json!([
            {
                "id": "S5123400-1",
                "partOfSpeech": "noun",
                "text": "The faculty of making <em>fortunate</em> discoveries by accident.",
                "attributionText": "from The American Heritage Dictionary",
                "sourceDictionary": "ahd-5",
                "wordnikUrl": "https://www.wordnik.com/words/serendipity",
                "exampleUses": [{"text": "Pure serendipity."}, {"text": ""}],
                "relatedWords": [
                    {"relationshipType": "synonym", "words": ["chance", "luck"]},
                    {"relationshipType": "antonym", "words": ["misfortune"]}
                ]
            },
            {"id": 7, "attributionUrl": "https://example.org", "text": "Second sense."},
            {"id": "blank", "text": "  "}
        ]);

        let defs = normalize(&raw);
        assert_eq!(defs.len(), 2);

        let first = &defs[0];
        assert_eq!(first.id.as_deref(), Some("S5123400-1"));
        assert_eq!(first.part_of_speech.as_deref(), Some("noun"));
        assert_eq!(
            first.text.as_deref(),
            Some("The faculty of making fortunate discoveries by accident.")
        );
        assert_eq!(
            first.source_url.as_deref(),
            Some("https://www.wordnik.com/words/serendipity")
        );
        assert_eq!(first.examples, vec!["Pure serendipity."]);
        assert_eq!(first.synonyms, vec!["chance", "luck"]);
        assert_eq!(first.antonyms, vec!["misfortune"]);

        let second = &defs[1];
        assert_eq!(second.id.as_deref(), Some("7"));
        assert_eq!(second.source_url.as_deref(), Some("https://example.org"));
        assert!(second.antonyms.is_empty());
    }

    #[test]
    fn builds_encoded_definitions_url() {
        let url =
            WordnikAdapter::definitions_url("https://api.wordnik.com/v4/", "déjà vu").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.wordnik.com/v4/word.json/d%C3%A9j%C3%A0%20vu/definitions"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            WordnikAdapter::definitions_url("not a url", "word"),
            Err(DictionaryError::Configuration(_))
        ));
        assert!(matches!(
            WordnikAdapter::definitions_url("mailto:someone@example.org", "word"),
            Err(DictionaryError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_is_a_configuration_error() {
        let adapter =
            WordnikAdapter::new(&config(Some("https://api.wordnik.com/v4"), None)).unwrap();
        let result = adapter
            .fetch_word_data("word", &FetchOptions::default())
            .await;
        assert!(matches!(result, Err(DictionaryError::Configuration(_))));
    }

    #[tokio::test]
    async fn blank_base_url_is_a_configuration_error() {
        let adapter = WordnikAdapter::new(&config(Some("  "), Some("key"))).unwrap();
        let result = adapter
            .fetch_word_data("word", &FetchOptions::default())
            .await;
        assert!(matches!(result, Err(DictionaryError::Configuration(_))));
    }

    #[test]
    fn adapter_name() {
        let adapter = WordnikAdapter::new(&DictionaryConfig::default()).unwrap();
        assert_eq!(adapter.name(), "wordnik");
    }
}
