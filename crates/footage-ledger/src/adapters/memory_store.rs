//! # In-Memory Store Adapter
//!
//! `LedgerStore` over a plain HashMap, for unit tests and light use.

use std::collections::HashMap;

use crate::domain::errors::StoreError;
use crate::ports::outbound::LedgerStore;

/// In-memory ledger store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedgerStore {
    data: HashMap<String, Vec<u8>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
