//! JSON-file-backed store (one JSON object per file).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::{StorageError, StorageResult};
use super::repository::{OrderedMap, Repository};

/// Stores `V` records in a single JSON object keyed by record key.
///
/// The whole file is loaded on open and rewritten on [`flush`](Repository::flush).
/// Writes go to a temp file in the same directory and are renamed into place, so a
/// crash mid-write leaves the previous contents intact.
///
/// Records that cannot be read as `V` are not visible through [`Repository`], but
/// they are kept and written back on flush until a record with the same key
/// replaces them.
#[derive(Debug)]
pub struct JsonFileStore<V> {
    path: PathBuf,
    entries: OrderedMap<V>,
    unreadable: Vec<(String, Value)>,
}

type Loaded<V> = (OrderedMap<V>, Vec<(String, Value)>);

/// Readable records in order, then the unreadable ones as they were loaded.
struct Snapshot<'a, V> {
    entries: &'a OrderedMap<V>,
    unreadable: &'a [(String, Value)],
}

impl<V: Serialize> Serialize for Snapshot<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + self.unreadable.len();
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in self.entries.iter() {
            map.serialize_entry(key, value)?;
        }
        for (key, raw) in self.unreadable {
            map.serialize_entry(key, raw)?;
        }
        map.end()
    }
}

impl<V> JsonFileStore<V>
where
    V: Serialize + DeserializeOwned + Send,
{
    /// Opens the store at `path`, loading existing records if the file exists.
    ///
    /// Records that cannot be read as `V` are set aside with a warning.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let (entries, unreadable) = if path.exists() {
            Self::load(&path)?
        } else {
            (OrderedMap::new(), Vec::new())
        };

        debug!(
            path = %path.display(),
            records = entries.len(),
            unreadable = unreadable.len(),
            "Opened store"
        );

        Ok(Self {
            path,
            entries,
            unreadable,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records kept from disk that could not be read as `V`.
    pub fn unreadable_count(&self) -> usize {
        self.unreadable.len()
    }

    fn load(path: &Path) -> StorageResult<Loaded<V>> {
        let text = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = OrderedMap::new();
        let mut unreadable = Vec::new();
        if text.trim().is_empty() {
            return Ok((entries, unreadable));
        }

        let raw: Map<String, Value> =
            serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;

        for (key, value) in raw {
            match V::deserialize(&value) {
                Ok(record) => entries.insert(&key, record),
                Err(e) => {
                    warn!(key = %key, error = %e, "Keeping unreadable record as-is");
                    unreadable.push((key, value));
                }
            }
        }

        Ok((entries, unreadable))
    }

    fn write_atomically(&self) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;

        let bytes = serde_json::to_vec_pretty(&Snapshot {
            entries: &self.entries,
            unreadable: &self.unreadable,
        })?;

        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = NamedTempFile::new_in(&dir).map_err(io_err)?;
        file.write_all(&bytes).map_err(io_err)?;
        file.as_file().sync_all().map_err(io_err)?;

        file.persist(&self.path).map_err(|e| StorageError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;

        Ok(())
    }
}

impl<V> Repository<V> for JsonFileStore<V>
where
    V: Serialize + DeserializeOwned + Send,
{
    fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: V) {
        self.unreadable.retain(|(k, _)| k != key);
        self.entries.insert(key, value);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        Box::new(self.entries.iter())
    }

    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = (&str, &mut V)> + '_> {
        Box::new(self.entries.iter_mut())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn flush(&mut self) -> StorageResult<()> {
        self.write_atomically()?;
        debug!(path = %self.path.display(), records = self.entries.len(), "Flushed store");
        Ok(())
    }
}
