//! # Domain Layer
//!
//! Pure ledger logic: entities, the asset index, configuration and the
//! error taxonomy. Nothing in here touches the store.

pub mod config;
pub mod entities;
pub mod errors;
pub mod index;

pub use config::{LedgerConfig, DEFAULT_INDEX_KEY};
pub use entities::{Account, Footage, IssueRequest, VideoFrame};
pub use errors::{CodecError, LedgerError, StoreError};
pub use index::AssetIndex;
