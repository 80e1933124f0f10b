//! Best-score persistence.
//!
//! The engine never touches storage. A front-end injects a `ScoreStore` into
//! its `GameSession`; the session reads the best score once and writes it
//! whenever the current score beats it.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::Score;
use crate::error::StoreError;

/// Key-value store for per-game best scores.
pub trait ScoreStore {
    /// Read the value under `key`, `None` if never written.
    fn load(&self, key: &str) -> Result<Option<Score>, StoreError>;

    /// Write `value` under `key`.
    fn save(&mut self, key: &str, value: Score) -> Result<(), StoreError>;
}

/// Process-local store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Score>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Score>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: Score) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON object on disk mapping keys to scores.
///
/// A missing file reads as empty. Every save rewrites the whole file, which
/// keeps other keys intact. A file that does not parse is replaced on the
/// next save. Writes go to a sibling `.tmp` file that is then renamed over
/// the target, so a crash mid-write leaves the old contents.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<BTreeMap<String, Score>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Score>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn save(&mut self, key: &str, value: Score) -> Result<(), StoreError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(e @ StoreError::Malformed { .. }) => {
                warn!(error = %e, "replacing unreadable score file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value);
        let text = serde_json::to_string_pretty(&values).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.tmp_path();
        fs::write(&tmp, text).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}
