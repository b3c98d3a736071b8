//! Error types for wotd-core.

use std::time::Duration;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a dictionary adapter.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// A required credential or endpoint is missing or malformed.
    #[error("dictionary adapter is not configured: {0}")]
    Configuration(String),

    /// The provider has no entry for the word (original or lowercased).
    #[error("no dictionary entry found for \"{word}\"")]
    NotFound {
        /// The word as requested by the caller.
        word: String,
    },

    /// The provider throttled the request (HTTP 429).
    #[error("dictionary provider rate limited the request (retry after {retry_after:?})")]
    RateLimited {
        /// Value of the `Retry-After` header, when the provider sent one.
        retry_after: Option<Duration>,
    },

    /// Any other non-success HTTP status.
    #[error("dictionary provider returned HTTP {status}")]
    Upstream {
        /// The HTTP status code.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("dictionary request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a body that is not the expected JSON.
    #[error("failed to decode dictionary response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias using [`DictionaryError`].
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Per-record decode failures.
///
/// The store logs these and skips the offending file; they never abort a load.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The file body is not valid JSON, or not a word record.
    #[error("malformed word record: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is neither an object nor a non-empty array.
    #[error("word record must be an object or a non-empty array, found {found}")]
    UnexpectedShape {
        /// Short description of the JSON value that was found.
        found: &'static str,
    },

    /// The record's headword is empty or whitespace.
    #[error("word record has a blank headword")]
    BlankWord,

    /// No date could be resolved from the loader or the file name.
    #[error("no date could be resolved for {path}")]
    MissingDate {
        /// The path of the record.
        path: Utf8PathBuf,
    },
}

/// Result type alias using [`RecordError`].
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised by the word record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the data directory failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path being accessed.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A record already exists for this date; records are never overwritten.
    #[error("a word record already exists at {path}")]
    AlreadyExists {
        /// The existing record's path.
        path: Utf8PathBuf,
    },

    /// The record's date is not a valid `YYYYMMDD` calendar date.
    #[error("invalid record date: {date:?}")]
    InvalidDate {
        /// The offending date string.
        date: String,
    },

    /// The record could not be serialized.
    #[error("failed to serialize word record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by translation lookups.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranslationError {
    /// The key is absent, or resolves to something other than a string.
    #[error("missing translation for key \"{key}\"")]
    MissingTranslation {
        /// The requested key.
        key: String,
    },

    /// A placeholder in the template has no matching variable.
    #[error("translation \"{key}\" requires variable \"{variable}\"")]
    MissingVariable {
        /// The requested key.
        key: String,
        /// The placeholder name.
        variable: String,
    },

    /// A variable was supplied but is null.
    #[error("translation \"{key}\" received a null value for variable \"{variable}\"")]
    InvalidVariable {
        /// The requested key.
        key: String,
        /// The placeholder name.
        variable: String,
    },

    /// The translation resource could not be read or parsed.
    #[error("failed to load translations: {0}")]
    Resource(String),
}

/// Result type alias using [`TranslationError`].
pub type TranslationResult<T> = Result<T, TranslationError>;
