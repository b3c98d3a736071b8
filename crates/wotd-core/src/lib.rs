//! Data core for a word-of-the-day vocabulary site.
//!
//! Fetches definitions from a dictionary provider, stores one JSON record per
//! day, and derives the read-only views the site's pages are built from.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`dictionary`] - Dictionary provider adapters (Wordnik)
//! - [`store`] - Loading, caching and saving word records
//! - [`text`] - Pure predicates over a single headword
//! - [`stats`] - Aggregate statistics over the archive
//! - [`archive`] - Year/month groupings and previous/next navigation
//! - [`i18n`] - Translation lookup with strict placeholder substitution
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use wotd_core::{ConfigLoader, WordStore, compute_stats};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//!
//! let mut store = WordStore::from_config(&config);
//! let words = store.words().expect("Failed to load words");
//! let stats = compute_stats(&words, wotd_core::dates::today());
//!
//! println!("{} words, longest streak {}", stats.total_words, stats.streaks.longest.len());
//! ```
#![deny(unsafe_code)]

pub mod archive;
pub mod config;
pub mod dates;
pub mod dictionaries;
pub mod dictionary;
pub mod error;
pub mod i18n;
pub mod record;
pub mod stats;
pub mod store;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, DictionaryConfig, LogLevel};
pub use dictionary::{DictionaryAdapter, DictionaryResponse, FetchOptions, WordnikAdapter};
pub use error::{
    ConfigError, ConfigResult, DictionaryError, DictionaryResult, RecordError, RecordResult,
    StoreError, StoreResult, TranslationError, TranslationResult,
};
pub use i18n::Translator;
pub use record::{DictionaryDefinition, WordRecord};
pub use stats::{WordStatsReport, compute_stats};
pub use store::{
    FileLoader, FsLoader, MemoryCache, NoopCache, RecordCache, WordStore, load_all, save_record,
};
