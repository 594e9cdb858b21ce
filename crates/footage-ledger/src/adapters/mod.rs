//! # Adapters
//!
//! Reference implementations of the outbound ports. Production hosts
//! plug their own store behind `LedgerStore`; the JSON codec is the
//! default record encoding.

pub mod codec;
pub mod file_store;
pub mod memory_store;

pub use codec::JsonRecordCodec;
pub use file_store::FileLedgerStore;
pub use memory_store::InMemoryLedgerStore;
