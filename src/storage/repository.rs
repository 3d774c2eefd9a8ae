use std::collections::HashMap;

use super::error::StorageResult;

/// Durable string-keyed store.
///
/// Iteration follows first-insertion order; overwriting a key keeps its position.
pub trait Repository<V>: Send {
    fn get(&self, key: &str) -> Option<&V>;

    /// Inserts or replaces the value under `key`.
    fn set(&mut self, key: &str, value: V);

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_>;

    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = (&str, &mut V)> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the current contents to durable storage.
    fn flush(&mut self) -> StorageResult<()>;
}

/// Insertion-ordered map backing the store implementations.
#[derive(Debug, Clone)]
pub(crate) struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn insert(&mut self, key: &str, value: V) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 = value;
            return;
        }
        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> + '_ {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
