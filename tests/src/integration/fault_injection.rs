//! # Fault Injection
//!
//! Corruption and divergence scenarios: stored bytes that do not parse,
//! and an index that disagrees with the record set. The ledger must
//! surface these as consistency faults, never as absence or partial
//! results.

#[cfg(test)]
mod tests {
    use footage_ledger::{
        AccountApi, FootageApi, InMemoryLedgerStore, IssueRequest, JsonRecordCodec, LedgerConfig,
        LedgerError, LedgerService, LedgerStore, VideoFrame, DEFAULT_INDEX_KEY,
    };

    fn request(id: &str, owner: &str) -> IssueRequest {
        IssueRequest {
            id: id.to_string(),
            owner: owner.to_string(),
            frame: VideoFrame::new("h1", "t1"),
        }
    }

    /// A store seeded with raw bytes before the service wraps it.
    fn service_over(
        seed: &[(&str, &[u8])],
    ) -> LedgerService<InMemoryLedgerStore, JsonRecordCodec> {
        let mut store = InMemoryLedgerStore::new();
        for (key, bytes) in seed {
            store.put(key, bytes).unwrap();
        }
        LedgerService::new(store, JsonRecordCodec, LedgerConfig::default())
    }

    #[test]
    fn test_corrupt_footage_read_is_fault_not_absence() {
        let svc = service_over(&[("a1", b"\x00\x01 not json")]);

        let err = svc.get_footage("a1").unwrap_err();
        assert!(
            matches!(err, LedgerError::MalformedRecord { ref key, .. } if key == "a1"),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_corrupt_account_read_is_fault_not_absence() {
        let svc = service_over(&[("u1", b"{\"id\": 42}")]);

        let err = svc.get_account("u1").unwrap_err();
        assert!(matches!(err, LedgerError::MalformedRecord { ref key, .. } if key == "u1"));
    }

    #[test]
    fn test_corrupt_record_poisons_enumeration() {
        // A two-asset ledger with one record corrupted out-of-band.
        let index_json = serde_json::to_vec(&["a1", "a2"]).unwrap();
        let good = serde_json::to_vec(&footage_ledger::Footage::new(
            "a1",
            "u1",
            VideoFrame::new("h1", "t1"),
        ))
        .unwrap();
        let svc = service_over(&[
            ("a1", good.as_slice()),
            ("a2", b"** scribbled **"),
            (DEFAULT_INDEX_KEY, index_json.as_slice()),
        ]);

        let err = svc.all_footage().unwrap_err();
        assert!(matches!(err, LedgerError::MalformedRecord { ref key, .. } if key == "a2"));
    }

    #[test]
    fn test_index_entry_without_record_poisons_enumeration() {
        let index_json = serde_json::to_vec(&["phantom"]).unwrap();
        let svc = service_over(&[(DEFAULT_INDEX_KEY, index_json.as_slice())]);

        let err = svc.all_footage().unwrap_err();
        assert_eq!(
            err,
            LedgerError::DanglingIndexEntry {
                key: "phantom".to_string()
            }
        );
    }

    #[test]
    fn test_unparsable_index_blocks_issuance() {
        let mut svc = service_over(&[(DEFAULT_INDEX_KEY, b"{\"keys\": \"oops\"}")]);
        svc.create_account("u1", "Alice").unwrap();

        let err = svc.issue(request("a1", "u1")).unwrap_err();
        assert!(
            matches!(err, LedgerError::MalformedRecord { ref key, .. } if key == DEFAULT_INDEX_KEY)
        );
    }

    #[test]
    fn test_corrupt_owner_blocks_first_issuance_before_any_write() {
        let mut svc = service_over(&[("u1", b"<html>")]);

        let err = svc.issue(request("a1", "u1")).unwrap_err();
        assert!(matches!(err, LedgerError::MalformedRecord { ref key, .. } if key == "u1"));

        // The aborted issuance must not have written the footage record.
        assert_eq!(
            svc.get_footage("a1").unwrap_err(),
            LedgerError::AssetNotFound {
                id: "a1".to_string()
            }
        );
    }
}
