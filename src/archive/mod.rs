//! Process-wide archive of previously seen tracks and playlists.
//!
//! [`MediaArchive`] is a cheap-to-clone handle. Every read-modify-write runs under one
//! [`parking_lot::Mutex`]; no method holds the lock across an `.await`.


use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::constants::{ARCHIVE_FILENAME, PLAYLISTS_FILENAME};
use crate::media::{PlaylistEntry, ResultEntry};
use crate::storage::{JsonFileStore, Repository, StorageResult};
#[cfg(any(test, feature = "mock"))]
use crate::storage::MemoryStore;

/// The two backing stores: tracks keyed by URI, playlists keyed by title.
pub struct ArchiveStores {
    pub tracks: Box<dyn Repository<ResultEntry>>,
    pub playlists: Box<dyn Repository<PlaylistEntry>>,
}

impl std::fmt::Debug for ArchiveStores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveStores")
            .field("tracks", &self.tracks.len())
            .field("playlists", &self.playlists.len())
            .finish()
    }
}

/// Shared handle to the track and playlist archives.
#[derive(Clone)]
pub struct MediaArchive {
    inner: Arc<Mutex<ArchiveStores>>,
}

impl MediaArchive {
    /// Wraps two stores.
    pub fn new<T, P>(tracks: T, playlists: P) -> Self
    where
        T: Repository<ResultEntry> + 'static,
        P: Repository<PlaylistEntry> + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(ArchiveStores {
                tracks: Box::new(tracks),
                playlists: Box::new(playlists),
            })),
        }
    }

    /// Opens (or prepares) the JSON stores under `dir`.
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref();
        let tracks = JsonFileStore::open(dir.join(ARCHIVE_FILENAME))?;
        let playlists = JsonFileStore::open(dir.join(PLAYLISTS_FILENAME))?;

        debug!(
            dir = %dir.display(),
            tracks = tracks.len(),
            playlists = playlists.len(),
            "Opened media archive"
        );

        Ok(Self::new(tracks, playlists))
    }

    /// Empty archive backed by [`MemoryStore`]s.
    #[cfg(any(test, feature = "mock"))]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), MemoryStore::new())
    }

    /// Stores a track under its URI.
    pub fn insert_track(&self, entry: ResultEntry) {
        let mut stores = self.inner.lock();
        let key = entry.uri.clone();
        stores.tracks.set(&key, entry);
    }

    /// Stores a playlist under its title, and each of its children under their URI.
    pub fn insert_playlist(&self, entry: PlaylistEntry) {
        let mut stores = self.inner.lock();
        for child in &entry.playlist {
            stores.tracks.set(&child.uri, child.clone());
        }
        let key = entry.title.clone();
        stores.playlists.set(&key, entry);
    }

    pub fn get_track(&self, uri: &str) -> Option<ResultEntry> {
        self.inner.lock().tracks.get(uri).cloned()
    }

    pub fn get_playlist(&self, title: &str) -> Option<PlaylistEntry> {
        self.inner.lock().playlists.get(title).cloned()
    }

    /// Snapshot of every track in iteration order.
    pub fn tracks(&self) -> Vec<ResultEntry> {
        self.inner
            .lock()
            .tracks
            .iter()
            .map(|(_, entry)| entry.clone())
            .collect()
    }

    /// Snapshot of playlist titles in iteration order.
    pub fn playlist_titles(&self) -> Vec<String> {
        self.inner
            .lock()
            .playlists
            .iter()
            .map(|(title, _)| title.to_string())
            .collect()
    }

    pub fn track_count(&self) -> usize {
        self.inner.lock().tracks.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.inner.lock().playlists.len()
    }

    /// Persists both stores.
    pub fn flush(&self) -> StorageResult<()> {
        let mut stores = self.inner.lock();
        stores.tracks.flush()?;
        stores.playlists.flush()?;
        debug!(
            tracks = stores.tracks.len(),
            playlists = stores.playlists.len(),
            "Flushed media archive"
        );
        Ok(())
    }

    /// Runs `f` with exclusive access to both stores.
    pub fn with_stores<R>(&self, f: impl FnOnce(&mut ArchiveStores) -> R) -> R {
        let mut stores = self.inner.lock();
        f(&mut stores)
    }
}

impl std::fmt::Debug for MediaArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("MediaArchive");
        match self.inner.try_lock() {
            Some(stores) => s.field("stores", &*stores),
            None => s.field("stores", &"<locked>"),
        };
        s.field("strong_count", &Arc::strong_count(&self.inner))
            .finish()
    }
}
