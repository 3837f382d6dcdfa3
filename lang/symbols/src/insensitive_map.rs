use std::collections::hash_map::Entry;

use opal_lang_ast::HashMap;
use thiserror::Error;

/// No entry matches the key, compared case-insensitively.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No entry named {key}")]
pub struct NotFound {
    pub key: String,
}

/// A map from identifiers to values in which keys compare case-insensitively.
///
/// Entries are stored under the case-folded key. The spelling used when the
/// entry was inserted is kept next to the value for diagnostics.
/// Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct InsensitiveMap<V> {
    entries: HashMap<String, Slot<V>>,
}

#[derive(Debug, Clone)]
struct Slot<V> {
    spelling: String,
    value: V,
}

fn fold(key: &str) -> String {
    key.to_lowercase()
}

impl<V> Default for InsensitiveMap<V> {
    fn default() -> Self {
        InsensitiveMap { entries: HashMap::default() }
    }
}

impl<V> InsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&fold(key))
    }

    pub fn get(&self, key: &str) -> Result<&V, NotFound> {
        self.entries
            .get(&fold(key))
            .map(|slot| &slot.value)
            .ok_or_else(|| NotFound { key: key.to_owned() })
    }

    /// Insert `value` under `key`.
    ///
    /// An existing entry with the same folded key is replaced, spelling included.
    /// Use [`InsensitiveMap::insert_if_absent`] when the first entry must win.
    pub fn put(&mut self, key: &str, value: V) {
        self.entries.insert(fold(key), Slot { spelling: key.to_owned(), value });
    }

    /// Insert `value` under `key` unless the key is already taken.
    ///
    /// Returns the freshly inserted value, or the value already stored under the
    /// key. In the latter case `value` is dropped and the map is unchanged.
    pub fn insert_if_absent(&mut self, key: &str, value: V) -> Result<&mut V, &V> {
        match self.entries.entry(fold(key)) {
            Entry::Occupied(entry) => Err(&entry.into_mut().value),
            Entry::Vacant(entry) => {
                Ok(&mut entry.insert(Slot { spelling: key.to_owned(), value }).value)
            }
        }
    }

    /// The spelling under which the entry matching `key` was inserted.
    pub fn spelling(&self, key: &str) -> Option<&str> {
        self.entries.get(&fold(key)).map(|slot| slot.spelling.as_str())
    }

    /// Iterate over `(spelling, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.values().map(|slot| (slot.spelling.as_str(), &slot.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
