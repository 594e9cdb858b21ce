//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the ledger requires the host application to provide.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::{CodecError, StoreError};

/// Abstract interface over the host's key-value ledger store.
///
/// Production: the host's storage engine.
/// Testing: `InMemoryLedgerStore` (adapters).
///
/// Keys are flat strings. The store offers no transactions, no range
/// queries and no deletes; every consistency property above this line is
/// the service's responsibility.
pub trait LedgerStore: Send + Sync {
    /// Get a value by key. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Put a single key-value pair, overwriting any previous value.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// Abstract interface for record serialization.
///
/// Pure transform: no side effects, no access to the store.
pub trait RecordCodec: Send + Sync {
    /// Serialize a record to its stored form.
    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, CodecError>;

    /// Decode a record payload.
    ///
    /// Zero-length input fails with `CodecError::EmptyPayload`, which
    /// callers may treat as absence; any other parse failure is
    /// `CodecError::Malformed` and must be surfaced, not masked.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}
