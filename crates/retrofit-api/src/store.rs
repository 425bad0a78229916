//! # Record Store
//!
//! Raw record lookup by key. Keys are `/`-separated segments of ASCII
//! letters, digits, `_` and `-`, e.g. `home/906205784`. A key that does
//! not fit that shape can never name a record and is reported as not
//! found.

use std::collections::BTreeMap;
use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;

use retrofit_core::{RetrofitError, RetrofitResult};

lazy_static! {
    static ref KEY: Regex = Regex::new(r"^[A-Za-z0-9_-]+(/[A-Za-z0-9_-]+)*$")
        .expect("BUG: store key pattern failed to compile");
}

/// Whether `key` is a well-formed store key.
pub fn is_valid_key(key: &str) -> bool {
    KEY.is_match(key)
}

/// Source of raw record bytes.
pub trait RecordStore: Send + Sync {
    /// Fetch the raw bytes stored under `key`.
    ///
    /// Returns [`RetrofitError::NotFound`] when no record exists.
    fn fetch_by_key(&self, key: &str) -> RetrofitResult<Vec<u8>>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn fetch_by_key(&self, key: &str) -> RetrofitResult<Vec<u8>> {
        (**self).fetch_by_key(key)
    }
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: BTreeMap<String, Vec<u8>>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` under `key`, replacing any previous record.
    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.records.insert(key.into(), bytes.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(key, bytes);
        self
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for InMemoryStore {
    fn fetch_by_key(&self, key: &str) -> RetrofitResult<Vec<u8>> {
        self.records
            .get(key)
            .cloned()
            .ok_or_else(|| RetrofitError::NotFound {
                key: key.to_string(),
            })
    }
}

/// Records stored as `<root>/<key>.json` files.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// A store rooted at `root`. The directory is not required to exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store root.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// File path for `key`, or `None` when the key is malformed.
    pub fn path_for(&self, key: &str) -> Option<PathBuf> {
        is_valid_key(key).then(|| self.root.join(format!("{key}.json")))
    }
}

impl RecordStore for DirectoryStore {
    fn fetch_by_key(&self, key: &str) -> RetrofitResult<Vec<u8>> {
        let not_found = || RetrofitError::NotFound {
            key: key.to_string(),
        };
        let Some(path) = self.path_for(key) else {
            tracing::warn!(key, "rejected malformed store key");
            return Err(not_found());
        };
        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(key, path = %path.display(), bytes = bytes.len(), "record read");
                Ok(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(RetrofitError::Io(e)),
        }
    }
}
