//! # Domain Entities
//!
//! The two record kinds of the ledger and the frame descriptor.
//!
//! ## Stored Form
//!
//! Every record is serialized by the record codec as field-tagged JSON.
//! `Account::asset_ids` keeps its historical wire name `assetIds`; the
//! remaining fields serialize under their Rust names.

use serde::{Deserialize, Serialize};

/// An account holder in the ledger.
///
/// Stored under its bare `id`. `asset_ids` lists the footage keys issued
/// to this account in issuance order; an entry exists exactly when the
/// corresponding footage record exists (there is no delete operation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Globally unique account id (primary key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Keys of footage records owned by this account, in issuance order.
    #[serde(rename = "assetIds")]
    pub asset_ids: Vec<String>,
}

impl Account {
    /// Create a fresh account with no assets.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset_ids: Vec::new(),
        }
    }

    /// Record ownership of a newly issued footage key.
    pub fn link_asset(&mut self, asset_id: impl Into<String>) {
        self.asset_ids.push(asset_id.into());
    }
}

/// A single captured frame within a footage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFrame {
    /// Content hash of the frame, supplied by the caller.
    pub hash: String,
    /// Timecode of the frame, supplied by the caller.
    pub timecode: String,
}

impl VideoFrame {
    pub fn new(hash: impl Into<String>, timecode: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            timecode: timecode.into(),
        }
    }
}

/// A footage ("asset") record.
///
/// `owner` is a lookup key into the account namespace, not an owning
/// reference. Frames accumulate in issuance order; repeated identical
/// frames are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footage {
    /// Unique footage key, supplied by the issuing request.
    pub id: String,
    /// Id of the owning account.
    pub owner: String,
    /// Frame descriptors in issuance order.
    pub frames: Vec<VideoFrame>,
}

impl Footage {
    /// Create a footage record holding its first frame.
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        first_frame: VideoFrame,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            frames: vec![first_frame],
        }
    }

    /// Append a frame. No deduplication: identical frames accumulate.
    pub fn append_frame(&mut self, frame: VideoFrame) {
        self.frames.push(frame);
    }

    /// Number of frames recorded so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Issuance request as received from the host.
///
/// Carries the caller-supplied footage key, the owning account id and
/// the frame to record. The core never generates footage ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRequest {
    /// Footage key to issue or aggregate into.
    pub id: String,
    /// Id of the owning account.
    pub owner: String,
    /// The frame carried by this issuance.
    pub frame: VideoFrame,
}
