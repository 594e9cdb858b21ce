//! # Configuration
//!
//! Immutable configuration for the ledger service.
//!
//! ## Key Namespace
//!
//! The store exposes flat string keys. Account records live under their
//! bare account id, footage records under their bare footage id, and the
//! asset index under the one reserved key configured here.

/// Reserved store key for the asset index.
pub const DEFAULT_INDEX_KEY: &str = "FootageKeys";

/// Configuration for the ledger service.
///
/// All values have production-sane defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Store key under which the asset index is persisted.
    pub index_key: String,

    /// Upper bound on frames accumulated in a single footage record.
    ///
    /// Aggregation fails with `FrameLimitExceeded` before any write once
    /// a record holds this many frames.
    pub max_frames_per_asset: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            index_key: DEFAULT_INDEX_KEY.to_string(),
            max_frames_per_asset: 100_000,
        }
    }
}

impl LedgerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved index key.
    pub fn with_index_key(mut self, key: impl Into<String>) -> Self {
        self.index_key = key.into();
        self
    }

    /// Set the per-record frame limit.
    pub fn with_max_frames_per_asset(mut self, limit: usize) -> Self {
        self.max_frames_per_asset = limit;
        self
    }
}
