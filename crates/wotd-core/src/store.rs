//! Word record store.
//!
//! Records live one per file under `<root>/<YYYY>/<YYYYMMDD>.json`. Loading is
//! split in two: a [`FileLoader`] produces raw `(path, date, content)` triples
//! from whatever backend holds them, and [`load_all`] turns those into a
//! deduplicated, date-descending `Vec<WordRecord>`.
//!
//! A corrupt file never fails the load. It is logged and skipped.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{ErrorKind, Write};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::dates::{date_from_path, parse_date};
use crate::error::{RecordError, RecordResult, StoreError, StoreResult};
use crate::record::{WordRecord, decode_record_body};

/// Cache key under which the full collection is stored.
pub const WORDS_CACHE_KEY: &str = "all-words";

/// One raw file handed to the store by a [`FileLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// Where the content came from. Its file name is the fallback date source.
    pub path: Utf8PathBuf,
    /// Date supplied by the loader, preferred over the file name.
    pub date: Option<String>,
    /// Raw JSON body.
    pub content: String,
}

/// Source of raw record files.
pub trait FileLoader {
    /// Return every record file, in a stable order.
    fn load_files(&self) -> StoreResult<Vec<LoadedFile>>;
}

/// Cache for the loaded collection.
///
/// There is no expiry: an entry lives until [`RecordCache::invalidate`] is called.
pub trait RecordCache {
    /// Cached records for `key`, if any.
    fn get(&self, key: &str) -> Option<&[WordRecord]>;
    /// Store records under `key`.
    fn set(&mut self, key: &str, records: Vec<WordRecord>);
    /// Whether `key` holds an entry.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
    /// Drop the entry for `key`.
    fn invalidate(&mut self, key: &str);
}

/// In-process [`RecordCache`].
#[derive(Debug, Default, Clone)]
pub struct MemoryCache {
    entries: HashMap<String, Vec<WordRecord>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordCache for MemoryCache {
    fn get(&self, key: &str) -> Option<&[WordRecord]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    fn set(&mut self, key: &str, records: Vec<WordRecord>) {
        self.entries.insert(key.to_string(), records);
    }

    fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// A [`RecordCache`] that never holds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

impl RecordCache for NoopCache {
    fn get(&self, _key: &str) -> Option<&[WordRecord]> {
        None
    }

    fn set(&mut self, _key: &str, _records: Vec<WordRecord>) {}

    fn invalidate(&mut self, _key: &str) {}
}

/// Reads `<root>/<YYYY>/*.json` from the local filesystem.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: Utf8PathBuf,
}

impl FsLoader {
    /// Create a loader rooted at `root`.
    pub fn new<P: AsRef<Utf8Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create a loader rooted at the configured data directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_dir)
    }

    /// The data directory this loader reads.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Sorted entries of `dir`. Entries that fail to read are logged and skipped.
    fn sorted_entries(dir: &Utf8Path) -> std::io::Result<Vec<Utf8PathBuf>> {
        let mut paths: Vec<Utf8PathBuf> = dir
            .read_dir_utf8()?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(error) => {
                    warn!(%dir, %error, "unreadable directory entry, skipping");
                    None
                }
            })
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Record files in one year directory. An unreadable directory yields none.
    fn year_files(year_dir: &Utf8Path) -> Vec<Utf8PathBuf> {
        match Self::sorted_entries(year_dir) {
            Ok(paths) => paths
                .into_iter()
                .filter(|path| path.extension() == Some("json") && path.is_file())
                .collect(),
            Err(error) => {
                warn!(%year_dir, %error, "unreadable year directory, skipping");
                Vec::new()
            }
        }
    }
}

impl FileLoader for FsLoader {
    #[instrument(skip(self), fields(root = %self.root))]
    fn load_files(&self) -> StoreResult<Vec<LoadedFile>> {
        if !self.root.is_dir() {
            warn!("word directory does not exist, no records loaded");
            return Ok(Vec::new());
        }

        let year_dirs = Self::sorted_entries(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut files = Vec::new();
        let mut seen_names = HashSet::new();

        for year_dir in year_dirs {
            let is_year = year_dir
                .file_name()
                .is_some_and(|name| name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit()));
            if !is_year || !year_dir.is_dir() {
                continue;
            }

            for path in Self::year_files(&year_dir) {
                let Some(name) = path.file_name().map(str::to_string) else {
                    continue;
                };
                if !seen_names.insert(name) {
                    warn!(%path, "duplicate record file name, skipping");
                    continue;
                }
                match fs::read_to_string(&path) {
                    Ok(content) => files.push(LoadedFile {
                        date: date_from_path(&path),
                        path,
                        content,
                    }),
                    Err(error) => warn!(%path, %error, "unreadable record file, skipping"),
                }
            }
        }

        debug!(count = files.len(), "record files read");
        Ok(files)
    }
}

/// Load every record, newest first.
///
/// With a cache holding [`WORDS_CACHE_KEY`], the loader is never called.
/// Otherwise each file is decoded, dated and deduplicated; failures are logged
/// and skipped. The result is stored back into the cache when one is given.
#[instrument(skip_all)]
pub fn load_all(
    loader: &dyn FileLoader,
    mut cache: Option<&mut dyn RecordCache>,
) -> StoreResult<Vec<WordRecord>> {
    if let Some(hit) = cache.as_deref().and_then(|c| c.get(WORDS_CACHE_KEY)) {
        debug!(count = hit.len(), "serving records from cache");
        return Ok(hit.to_vec());
    }

    let files = loader.load_files()?;
    let total = files.len();
    let mut seen_dates = HashSet::new();
    let mut records = Vec::with_capacity(total);

    for file in files {
        let path = file.path.clone();
        match resolve_file(file) {
            Ok(record) => {
                if seen_dates.insert(record.date.clone()) {
                    records.push(record);
                } else {
                    warn!(%path, date = %record.date, "second record for the same date, skipping");
                }
            }
            Err(error) => warn!(%path, %error, "skipping unreadable word record"),
        }
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    info!(loaded = records.len(), skipped = total - records.len(), "word records loaded");

    if let Some(cache) = cache.as_deref_mut() {
        cache.set(WORDS_CACHE_KEY, records.clone());
    }
    Ok(records)
}

/// A loader-supplied date wins when it is a real `YYYYMMDD` date; otherwise
/// the file name decides.
fn resolve_file(file: LoadedFile) -> RecordResult<WordRecord> {
    let stored = decode_record_body(&file.content)?;
    let supplied = file.date.map(|d| d.trim().to_string()).filter(|d| {
        let valid = parse_date(d).is_some();
        if !valid && !d.is_empty() {
            warn!(path = %file.path, date = %d, "ignoring malformed loader date");
        }
        valid
    });
    let date = supplied
        .or_else(|| date_from_path(&file.path))
        .ok_or(RecordError::MissingDate { path: file.path })?;
    Ok(stored.with_date(date))
}

/// Where a record for `date` lives under `root`.
pub fn record_path(root: &Utf8Path, date: &str) -> Utf8PathBuf {
    let year = date.get(..4).unwrap_or(date);
    root.join(year).join(format!("{date}.json"))
}

/// Write a new record to `<root>/<YYYY>/<YYYYMMDD>.json`.
///
/// Records are immutable once written: an existing file is never replaced.
#[instrument(skip(record), fields(word = %record.word, date = %record.date))]
pub fn save_record(root: &Utf8Path, record: &WordRecord) -> StoreResult<Utf8PathBuf> {
    if parse_date(&record.date).is_none() {
        return Err(StoreError::InvalidDate {
            date: record.date.clone(),
        });
    }

    let path = record_path(root, &record.date);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut body = serde_json::to_string_pretty(record)?;
    body.push('\n');

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| {
            if source.kind() == ErrorKind::AlreadyExists {
                StoreError::AlreadyExists { path: path.clone() }
            } else {
                StoreError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
    file.write_all(body.as_bytes())
        .map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

    info!(%path, "word record saved");
    Ok(path)
}

/// A loader paired with an optional cache.
pub struct WordStore<L> {
    loader: L,
    cache: Option<Box<dyn RecordCache>>,
}

impl<L: FileLoader> WordStore<L> {
    /// A store that re-reads the loader on every call.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            cache: None,
        }
    }

    /// Reuse loaded records until [`WordStore::invalidate`] is called.
    pub fn with_cache<C: RecordCache + 'static>(mut self, cache: C) -> Self {
        self.cache = Some(Box::new(cache));
        self
    }

    /// All records, newest first.
    pub fn words(&mut self) -> StoreResult<Vec<WordRecord>> {
        let cache = self
            .cache
            .as_mut()
            .map(|c| -> &mut dyn RecordCache { c.as_mut() });
        load_all(&self.loader, cache)
    }

    /// Forget cached records so the next call re-reads the loader.
    pub fn invalidate(&mut self) {
        if let Some(cache) = self.cache.as_deref_mut() {
            cache.invalidate(WORDS_CACHE_KEY);
        }
    }

    /// The underlying loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl WordStore<FsLoader> {
    /// A filesystem-backed store over the configured data directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(FsLoader::from_config(config))
    }
}
