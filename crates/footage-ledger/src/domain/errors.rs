//! # Domain Errors
//!
//! Error types for the ledger.
//!
//! ## Design Principles
//!
//! - One variant per failure mode, carrying the context a caller needs
//! - Absence and malformed payloads are distinct outcomes, never merged
//! - No retries and no partial results anywhere in the core

use thiserror::Error;

/// Errors surfaced by ledger operations.
///
/// Every public operation returns either a success value or exactly one
/// of these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No account record under this id.
    #[error("account not found: {id}")]
    AccountNotFound { id: String },

    /// No footage record under this id.
    #[error("footage not found: {id}")]
    AssetNotFound { id: String },

    /// An account already exists under this id (idempotence guard).
    #[error("account already exists: {id}")]
    AccountExists { id: String },

    /// Referential check failed before any write.
    #[error("owner account not found: {id}")]
    OwnerNotFound { id: String },

    /// Stored bytes under `key` do not parse as the expected record.
    ///
    /// Never conflated with absence.
    #[error("malformed record at {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    /// The index names a key with no readable record.
    #[error("index entry {key} has no backing record")]
    DanglingIndexEntry { key: String },

    /// A footage record is already at the configured frame limit.
    #[error("footage {id} is at the frame limit ({limit})")]
    FrameLimitExceeded { id: String, limit: usize },

    /// A record could not be encoded for storage.
    #[error("record encoding failed: {message}")]
    Serialization { message: String },

    /// Operation name outside the closed mutating set.
    #[error("unknown operation: {operation}")]
    UnknownOperation { operation: String },

    /// Arguments did not parse for a known operation.
    #[error("malformed request: {reason}")]
    MalformedRequest { reason: String },

    /// Underlying store Get/Put failed. Surfaced as-is, never retried.
    #[error("store fault: {message}")]
    StoreFault { message: String },
}

/// Errors from the `LedgerStore` port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// I/O failure during get/put.
    #[error("store I/O error: {message}")]
    Io { message: String },

    /// The backend rejected the call for reasons opaque to the core.
    #[error("store backend fault: {message}")]
    Backend { message: String },
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        LedgerError::StoreFault {
            message: err.to_string(),
        }
    }
}

/// Errors from the `RecordCodec` port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Zero-length input: the absent-equivalent payload, not corruption.
    #[error("empty payload")]
    EmptyPayload,

    /// Non-empty input that does not parse as the expected record.
    #[error("malformed payload: {message}")]
    Malformed { message: String },
}
