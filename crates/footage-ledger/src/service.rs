//! # Ledger Service
//!
//! The application service implementing the account and footage APIs.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `AccountApi` and `FootageApi`
//! 2. Owns the asset-index read-modify-write cycle
//! 3. Uses dependency injection for the store and the record codec
//!
//! ## Write Ordering
//!
//! First issuance commits in a fixed, non-reversible order: the footage
//! record, then the owner account, then the asset index. There is no
//! rollback: a failure mid-sequence leaves earlier writes in place and
//! surfaces the error. The index is written last so that an index entry
//! always names a readable record.
//!
//! ## Concurrency
//!
//! Each call is a single, non-reentrant unit of work. Mutation requires
//! `&mut self`, so in-process aliasing is impossible. Two host processes
//! racing `issue` for different new ids against the same store can still
//! lose an index entry — the host environment must serialize invocations
//! against the same store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::codec::JsonRecordCodec;
use crate::adapters::memory_store::InMemoryLedgerStore;
use crate::domain::config::LedgerConfig;
use crate::domain::entities::{Account, Footage, IssueRequest};
use crate::domain::errors::{CodecError, LedgerError};
use crate::domain::index::AssetIndex;
use crate::ports::inbound::{AccountApi, FootageApi};
use crate::ports::outbound::{LedgerStore, RecordCodec};

/// Outcome of a presence-check read.
///
/// Absent covers both a never-written key and an empty payload; a
/// non-empty payload that does not parse is an error, never `Absent`.
enum RecordState<T> {
    Absent,
    Present(T),
}

/// The ledger service.
///
/// Implements both `AccountApi` and `FootageApi` over an injected store
/// and codec.
pub struct LedgerService<S, C>
where
    S: LedgerStore,
    C: RecordCodec,
{
    store: S,
    codec: C,
    config: LedgerConfig,
}

impl LedgerService<InMemoryLedgerStore, JsonRecordCodec> {
    /// Create a service over the in-memory reference adapters.
    pub fn new_in_memory(config: LedgerConfig) -> Self {
        Self::new(InMemoryLedgerStore::new(), JsonRecordCodec, config)
    }
}

impl<S, C> LedgerService<S, C>
where
    S: LedgerStore,
    C: RecordCodec,
{
    /// Create a new ledger service with the given dependencies.
    pub fn new(store: S, codec: C, config: LedgerConfig) -> Self {
        Self {
            store,
            codec,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Seed the reserved index key with an empty index.
    ///
    /// No-op when the index key already holds data, so a re-deploy
    /// cannot wipe a live index. All read paths also tolerate a wholly
    /// absent index; calling this is a host convenience, not a
    /// correctness requirement.
    pub fn bootstrap(&mut self) -> Result<(), LedgerError> {
        match self.store.get(&self.config.index_key)? {
            Some(bytes) if !bytes.is_empty() => Ok(()),
            _ => {
                let bytes = self.encode(&AssetIndex::new())?;
                self.store.put(&self.config.index_key, &bytes)?;
                tracing::info!("[ledger] seeded empty index at {}", self.config.index_key);
                Ok(())
            }
        }
    }

    /// Raw key read for the dispatcher's diagnostics fallback.
    ///
    /// Returns the stored bytes unprocessed; an absent key yields an
    /// empty payload.
    pub fn read_raw(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        Ok(self.store.get(key)?.unwrap_or_default())
    }

    /// Load the asset index.
    ///
    /// An absent key or empty payload is the initialized-but-empty
    /// state. A non-empty payload that does not parse is fatal to the
    /// enclosing operation: the index is never partially trusted.
    pub fn load_index(&self) -> Result<AssetIndex, LedgerError> {
        let key = self.config.index_key.as_str();
        match self.store.get(key)? {
            None => Ok(AssetIndex::new()),
            Some(bytes) => match self.codec.decode(&bytes) {
                Ok(index) => Ok(index),
                Err(CodecError::EmptyPayload) => Ok(AssetIndex::new()),
                Err(CodecError::Malformed { message }) => Err(LedgerError::MalformedRecord {
                    key: key.to_string(),
                    reason: message,
                }),
            },
        }
    }

    /// Add a key to the index: load, insert, persist only when changed.
    fn index_add(&mut self, asset_id: &str) -> Result<(), LedgerError> {
        let mut index = self.load_index()?;
        if !index.insert(asset_id) {
            return Ok(());
        }
        let bytes = self.encode(&index)?;
        self.store.put(&self.config.index_key, &bytes)?;
        Ok(())
    }

    /// Read and classify the record at `key`.
    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<RecordState<T>, LedgerError> {
        match self.store.get(key)? {
            None => Ok(RecordState::Absent),
            Some(bytes) => match self.codec.decode(&bytes) {
                Ok(record) => Ok(RecordState::Present(record)),
                Err(CodecError::EmptyPayload) => Ok(RecordState::Absent),
                Err(CodecError::Malformed { message }) => Err(LedgerError::MalformedRecord {
                    key: key.to_string(),
                    reason: message,
                }),
            },
        }
    }

    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, LedgerError> {
        self.codec
            .encode(record)
            .map_err(|e| LedgerError::Serialization {
                message: e.to_string(),
            })
    }
}

impl<S, C> AccountApi for LedgerService<S, C>
where
    S: LedgerStore,
    C: RecordCodec,
{
    fn create_account(&mut self, id: &str, name: &str) -> Result<(), LedgerError> {
        tracing::debug!("[ledger] creating account {}", id);

        match self.read_record::<Account>(id)? {
            RecordState::Present(_) => Err(LedgerError::AccountExists { id: id.to_string() }),
            RecordState::Absent => {
                let account = Account::new(id, name);
                let bytes = self.encode(&account)?;
                self.store.put(id, &bytes)?;
                tracing::info!("[ledger] created account {}", id);
                Ok(())
            }
        }
    }

    fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        match self.read_record::<Account>(id)? {
            RecordState::Present(account) => Ok(account),
            RecordState::Absent => Err(LedgerError::AccountNotFound { id: id.to_string() }),
        }
    }
}

impl<S, C> FootageApi for LedgerService<S, C>
where
    S: LedgerStore,
    C: RecordCodec,
{
    fn issue(&mut self, request: IssueRequest) -> Result<(), LedgerError> {
        let IssueRequest { id, owner, frame } = request;
        tracing::debug!("[ledger] issuing footage {} for {}", id, owner);

        match self.read_record::<Footage>(&id)? {
            RecordState::Present(mut footage) => {
                // Aggregation: the stored record's owner is authoritative.
                if footage.frame_count() >= self.config.max_frames_per_asset {
                    return Err(LedgerError::FrameLimitExceeded {
                        id,
                        limit: self.config.max_frames_per_asset,
                    });
                }
                footage.append_frame(frame);
                let bytes = self.encode(&footage)?;
                self.store.put(&id, &bytes)?;
                tracing::info!(
                    "[ledger] aggregated footage {} ({} frames)",
                    id,
                    footage.frame_count()
                );
                Ok(())
            }
            RecordState::Absent => {
                // Referential check, before any write.
                let mut account = match self.read_record::<Account>(&owner)? {
                    RecordState::Present(account) => account,
                    RecordState::Absent => {
                        return Err(LedgerError::OwnerNotFound { id: owner });
                    }
                };

                // Fixed write order: footage, owner account, index.
                let footage = Footage::new(id.clone(), owner.clone(), frame);
                let bytes = self.encode(&footage)?;
                self.store.put(&id, &bytes)?;

                account.link_asset(id.clone());
                let account_bytes = self.encode(&account)?;
                self.store.put(&owner, &account_bytes)?;

                self.index_add(&id)?;
                tracing::info!("[ledger] issued footage {} to {}", id, owner);
                Ok(())
            }
        }
    }

    fn get_footage(&self, id: &str) -> Result<Footage, LedgerError> {
        match self.read_record::<Footage>(id)? {
            RecordState::Present(footage) => Ok(footage),
            RecordState::Absent => Err(LedgerError::AssetNotFound { id: id.to_string() }),
        }
    }

    fn all_footage(&self) -> Result<Vec<Footage>, LedgerError> {
        let index = self.load_index()?;
        let mut all = Vec::with_capacity(index.len());

        for key in index.iter() {
            match self.read_record::<Footage>(key)? {
                RecordState::Present(footage) => all.push(footage),
                RecordState::Absent => {
                    return Err(LedgerError::DanglingIndexEntry {
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(all)
    }
}
