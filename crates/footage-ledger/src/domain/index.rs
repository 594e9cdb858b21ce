//! # Asset Index
//!
//! The authoritative enumeration of all footage keys.
//!
//! The underlying store has no range scans, so "list all assets" depends
//! on this one record: an ordered set of footage keys persisted under a
//! single reserved key and fully read / fully rewritten on each mutation.

use serde::{Deserialize, Serialize};

/// Ordered set of footage keys.
///
/// Serialized transparently, so the stored form is a bare JSON array of
/// strings. Insertion order is preserved; duplicates are rejected at
/// insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetIndex {
    keys: Vec<String>,
}

impl AssetIndex {
    /// Create a new empty index (the initialized-but-empty state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, keeping insertion order.
    ///
    /// Returns `false` and leaves the index unchanged when the key is
    /// already present, so repeated issuance of the same footage id can
    /// never produce a duplicate entry.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Check whether a key is indexed.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Iterate the indexed keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of indexed keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
