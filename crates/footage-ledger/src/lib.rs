//! # footage-ledger
//!
//! A small ledger of accounts and video-footage assets over a flat
//! key-value store.
//!
//! ## Role in System
//!
//! - **State transitions**: idempotent account creation, footage
//!   issuance and frame aggregation
//! - **Secondary index**: one reserved key enumerates every footage
//!   record, maintained without native range scans
//! - **Single-key store**: every consistency property is built from
//!   plain get/put; the store offers no transactions
//!
//! ## Control Flow
//!
//! ```text
//! host ──invoke/query──→ [LedgerDispatcher]
//!                              │
//!                              ↓
//!                       [LedgerService] ──→ [RecordCodec] ──→ [LedgerStore]
//!                              │
//!                              └──→ [AssetIndex] (read-modify-write, written last)
//! ```
//!
//! ## Domain Invariants
//!
//! | # | Invariant | Description |
//! |---|-----------|-------------|
//! | 1 | Account idempotence | An account is created at most once; re-creation fails |
//! | 2 | Owner linkage | An `assetIds` entry exists iff the footage record exists |
//! | 3 | Index integrity | The index names every footage record exactly once |
//! | 4 | Index-last ordering | The index entry lands only after both record writes |
//! | 5 | Fault honesty | Malformed stored bytes are never reported as absence |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, asset index, configuration, error taxonomy
//! - `ports/` - Port traits (inbound API, outbound store/codec)
//! - `adapters/` - JSON codec, in-memory and file-backed stores
//! - `service.rs` - Application service implementing the inbound ports
//! - `dispatch.rs` - Closed-enum operation routing
//!
//! ## Usage
//!
//! ```ignore
//! use footage_ledger::{
//!     AccountApi, FootageApi, IssueRequest, LedgerConfig, LedgerService, VideoFrame,
//! };
//!
//! let mut service = LedgerService::new_in_memory(LedgerConfig::default());
//! service.create_account("u1", "Alice")?;
//! service.issue(IssueRequest {
//!     id: "a1".into(),
//!     owner: "u1".into(),
//!     frame: VideoFrame::new("h1", "t1"),
//! })?;
//! let all = service.all_footage()?;
//! ```

pub mod adapters;
pub mod dispatch;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::codec::JsonRecordCodec;
pub use adapters::file_store::FileLedgerStore;
pub use adapters::memory_store::InMemoryLedgerStore;
pub use dispatch::{LedgerDispatcher, LedgerInvocation, LedgerQuery};
pub use domain::config::{LedgerConfig, DEFAULT_INDEX_KEY};
pub use domain::entities::{Account, Footage, IssueRequest, VideoFrame};
pub use domain::errors::{CodecError, LedgerError, StoreError};
pub use domain::index::AssetIndex;
pub use ports::inbound::{AccountApi, FootageApi};
pub use ports::outbound::{LedgerStore, RecordCodec};
pub use service::LedgerService;
