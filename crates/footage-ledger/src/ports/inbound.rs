//! # Inbound Ports (Driving Ports)
//!
//! The public API the ledger exposes to its host, one trait per service.

use crate::domain::entities::{Account, Footage, IssueRequest};
use crate::domain::errors::LedgerError;

/// Account operations.
pub trait AccountApi {
    /// Create an account exactly once.
    ///
    /// A key that was never written, or holds an empty payload, counts
    /// as absent. The write is the last step; nothing is persisted on
    /// any error path.
    ///
    /// ## Errors
    ///
    /// - `AccountExists`: a well-formed record already exists under `id`
    /// - `MalformedRecord`: the pre-check read returned non-empty bytes
    ///   that do not parse as an account
    /// - `StoreFault`: the underlying store failed
    fn create_account(&mut self, id: &str, name: &str) -> Result<(), LedgerError>;

    /// Fetch an account by id.
    ///
    /// ## Errors
    ///
    /// - `AccountNotFound`: key absent or empty payload
    /// - `MalformedRecord`: stored bytes do not parse
    fn get_account(&self, id: &str) -> Result<Account, LedgerError>;
}

/// Footage issuance and lookup operations.
pub trait FootageApi {
    /// Issue a new footage record or aggregate a frame into an existing
    /// one.
    ///
    /// First issuance commits, in order: the footage record, the owner
    /// account with the new key linked, the asset index. Later issuances
    /// for the same id append the frame to the stored record only; the
    /// index and owner list are already consistent.
    ///
    /// ## Errors
    ///
    /// - `OwnerNotFound`: owner missing on first issuance, before any write
    /// - `MalformedRecord`: presence-check read returned unparsable bytes
    /// - `FrameLimitExceeded`: aggregation beyond the configured limit
    /// - `StoreFault`: the underlying store failed
    fn issue(&mut self, request: IssueRequest) -> Result<(), LedgerError>;

    /// Fetch a footage record by id.
    ///
    /// ## Errors
    ///
    /// - `AssetNotFound`: key absent or empty payload
    /// - `MalformedRecord`: stored bytes do not parse
    fn get_footage(&self, id: &str) -> Result<Footage, LedgerError>;

    /// Enumerate every footage record named by the index.
    ///
    /// All-or-nothing: a single unreadable or undecodable entry aborts
    /// the whole enumeration rather than returning a silently incomplete
    /// list.
    ///
    /// ## Errors
    ///
    /// - `DanglingIndexEntry`: an indexed key has no backing record
    /// - `MalformedRecord`: an indexed record (or the index itself) does
    ///   not parse
    fn all_footage(&self) -> Result<Vec<Footage>, LedgerError>;
}
