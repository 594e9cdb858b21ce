//! # Ports
//!
//! Port traits: inbound (driving) APIs and outbound (driven) SPIs.

pub mod inbound;
pub mod outbound;

pub use inbound::{AccountApi, FootageApi};
pub use outbound::{LedgerStore, RecordCodec};
