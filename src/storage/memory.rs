use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::{StorageError, StorageResult};
use super::repository::{OrderedMap, Repository};

/// In-memory [`Repository`] that counts flushes; for tests.
///
/// The flush counter is shared, so it stays observable after the store is boxed into
/// a [`MediaArchive`](crate::archive::MediaArchive).
#[derive(Debug)]
pub struct MemoryStore<V> {
    entries: OrderedMap<V>,
    flushes: Arc<AtomicUsize>,
    fail_flush: bool,
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self {
            entries: OrderedMap::new(),
            flushes: Arc::new(AtomicUsize::new(0)),
            fail_flush: false,
        }
    }
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `flush` always fails.
    pub fn failing() -> Self {
        Self {
            fail_flush: true,
            ..Self::default()
        }
    }

    /// Number of successful flushes so far.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// Shared handle to the flush counter.
    pub fn flush_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.flushes)
    }
}

impl<V: Send> Repository<V> for MemoryStore<V> {
    fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: V) {
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
        if self.fail_flush {
            return Err(StorageError::WriteFailed("flush disabled".to_string()));
        }
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
