//! # Integration Test Flows
//!
//! End-to-end scenarios driven through the dispatcher, the same surface
//! a host runtime would use.

#[cfg(test)]
mod tests {
    use footage_ledger::{
        Account, Footage, LedgerConfig, LedgerDispatcher, LedgerError, LedgerService, VideoFrame,
    };

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn issue_body(id: &str, owner: &str, hash: &str, timecode: &str) -> String {
        format!(
            r#"{{"id":"{}","owner":"{}","frame":{{"hash":"{}","timecode":"{}"}}}}"#,
            id, owner, hash, timecode
        )
    }

    fn fresh_dispatcher() -> LedgerDispatcher<
        footage_ledger::InMemoryLedgerStore,
        footage_ledger::JsonRecordCodec,
    > {
        let mut service = LedgerService::new_in_memory(LedgerConfig::default());
        service.bootstrap().unwrap();
        LedgerDispatcher::new(service)
    }

    /// The full ledger scenario: create, re-create, issue, aggregate,
    /// enumerate, and check owner linkage at every step.
    #[test]
    fn test_end_to_end_ledger_scenario() {
        let mut dispatcher = fresh_dispatcher();

        // Account creation succeeds once and only once.
        dispatcher
            .invoke("createAccount", &args(&["u1", "Alice"]))
            .unwrap();
        let err = dispatcher
            .invoke("createAccount", &args(&["u1", "Alice"]))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::AccountExists {
                id: "u1".to_string()
            }
        );

        // First issuance creates the record.
        dispatcher
            .invoke("issueFootage", &args(&[&issue_body("a1", "u1", "h1", "t1")]))
            .unwrap();

        let bytes = dispatcher.query("getFootage", &args(&["a1"])).unwrap();
        let footage: Footage = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(footage.owner, "u1");
        assert_eq!(footage.frames, vec![VideoFrame::new("h1", "t1")]);

        // Second issuance aggregates in call order.
        dispatcher
            .invoke("issueFootage", &args(&[&issue_body("a1", "u1", "h2", "t2")]))
            .unwrap();

        let bytes = dispatcher.query("getFootage", &args(&["a1"])).unwrap();
        let footage: Footage = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            footage.frames,
            vec![VideoFrame::new("h1", "t1"), VideoFrame::new("h2", "t2")]
        );

        // Enumeration returns exactly the one asset.
        let bytes = dispatcher.query("getAllFootage", &args(&[])).unwrap();
        let all: Vec<Footage> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], footage);

        // Owner linkage: exactly one entry despite two issuances.
        let bytes = dispatcher.query("getAccount", &args(&["u1"])).unwrap();
        let account: Account = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(account.asset_ids, vec!["a1"]);
    }

    /// Index integrity across an arbitrary mix of new ids and repeats.
    #[test]
    fn test_index_equals_set_of_ever_issued_ids() {
        let mut dispatcher = fresh_dispatcher();
        dispatcher
            .invoke("createAccount", &args(&["u1", "Alice"]))
            .unwrap();
        dispatcher
            .invoke("createAccount", &args(&["u2", "Bob"]))
            .unwrap();

        let sequence = [
            ("a1", "u1"),
            ("a2", "u2"),
            ("a1", "u1"),
            ("a3", "u1"),
            ("a2", "u2"),
            ("a1", "u1"),
        ];
        for (i, (id, owner)) in sequence.iter().enumerate() {
            dispatcher
                .invoke(
                    "issueFootage",
                    &args(&[&issue_body(id, owner, "h", &format!("t{}", i))]),
                )
                .unwrap();
        }

        let bytes = dispatcher.query("getAllFootage", &args(&[])).unwrap();
        let all: Vec<Footage> = serde_json::from_slice(&bytes).unwrap();
        let mut ids: Vec<&str> = all.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);

        // Each enumerated record matches its individually fetched copy.
        for footage in &all {
            let bytes = dispatcher.query("getFootage", &args(&[&footage.id])).unwrap();
            let single: Footage = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(&single, footage);
        }
    }

    /// Issuance against a missing owner must abort before any write.
    #[test]
    fn test_issue_for_unknown_owner_leaves_no_trace() {
        let mut dispatcher = fresh_dispatcher();

        let err = dispatcher
            .invoke("issueFootage", &args(&[&issue_body("a1", "ghost", "h1", "t1")]))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::OwnerNotFound {
                id: "ghost".to_string()
            }
        );

        let err = dispatcher.query("getFootage", &args(&["a1"])).unwrap_err();
        assert_eq!(
            err,
            LedgerError::AssetNotFound {
                id: "a1".to_string()
            }
        );

        let bytes = dispatcher.query("getAllFootage", &args(&[])).unwrap();
        let all: Vec<Footage> = serde_json::from_slice(&bytes).unwrap();
        assert!(all.is_empty());
    }

    /// Two accounts never see each other's asset lists.
    #[test]
    fn test_owner_linkage_is_per_account() {
        let mut dispatcher = fresh_dispatcher();
        dispatcher
            .invoke("createAccount", &args(&["u1", "Alice"]))
            .unwrap();
        dispatcher
            .invoke("createAccount", &args(&["u2", "Bob"]))
            .unwrap();
        dispatcher
            .invoke("issueFootage", &args(&[&issue_body("a1", "u1", "h1", "t1")]))
            .unwrap();
        dispatcher
            .invoke("issueFootage", &args(&[&issue_body("a2", "u2", "h2", "t2")]))
            .unwrap();

        let bytes = dispatcher.query("getAccount", &args(&["u1"])).unwrap();
        let alice: Account = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(alice.asset_ids, vec!["a1"]);

        let bytes = dispatcher.query("getAccount", &args(&["u2"])).unwrap();
        let bob: Account = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(bob.asset_ids, vec!["a2"]);
    }
}
