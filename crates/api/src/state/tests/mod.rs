// Path: crates/api/src/state/tests/mod.rs
mod overlay_tests {
    use crate::state::{MemoryState, StateAccess, StateOverlay};

    fn seeded() -> MemoryState {
        [
            (b"account::a".to_vec(), b"1".to_vec()),
            (b"account::c".to_vec(), b"3".to_vec()),
            (b"ledger::status".to_vec(), b"s".to_vec()),
        ]
        .into_iter()
        .collect()
    }

    fn scan_keys(state: &dyn StateAccess, prefix: &[u8]) -> Vec<Vec<u8>> {
        state
            .prefix_scan(prefix)
            .unwrap()
            .map(|r| r.unwrap().0.to_vec())
            .collect()
    }

    #[test]
    fn overlay_writes_do_not_touch_base() {
        let base = seeded();
        let mut overlay = StateOverlay::new(&base);
        overlay.insert(b"account::b", b"2").unwrap();
        overlay.delete(b"account::a").unwrap();

        assert_eq!(overlay.get(b"account::b").unwrap(), Some(b"2".to_vec()));
        assert_eq!(overlay.get(b"account::a").unwrap(), None);
        assert_eq!(base.get(b"account::a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(base.get(b"account::b").unwrap(), None);
    }

    #[test]
    fn dropped_overlay_leaves_no_trace() {
        let base = seeded();
        let before = base.clone();
        {
            let mut overlay = StateOverlay::new(&base);
            overlay.insert(b"account::z", b"26").unwrap();
            assert_eq!(overlay.get(b"account::z").unwrap(), Some(b"26".to_vec()));
        }
        assert_eq!(base, before);
    }

    #[test]
    fn prefix_scan_merges_overlay_and_base_in_order() {
        let base = seeded();
        let mut overlay = StateOverlay::new(&base);
        overlay.insert(b"account::b", b"2").unwrap();
        overlay.insert(b"account::c", b"33").unwrap();
        overlay.delete(b"account::a").unwrap();

        assert_eq!(
            scan_keys(&overlay, b"account::"),
            vec![b"account::b".to_vec(), b"account::c".to_vec()]
        );
        let shadowed = overlay.get(b"account::c").unwrap();
        assert_eq!(shadowed, Some(b"33".to_vec()));
    }

    #[test]
    fn ordered_batch_commits_atomically() {
        let mut base = seeded();
        let (inserts, deletes) = {
            let mut overlay = StateOverlay::new(&base);
            overlay.insert(b"account::d", b"4").unwrap();
            overlay.insert(b"account::b", b"2").unwrap();
            overlay.delete(b"account::c").unwrap();
            overlay.into_ordered_batch()
        };
        assert_eq!(
            inserts,
            vec![
                (b"account::b".to_vec(), b"2".to_vec()),
                (b"account::d".to_vec(), b"4".to_vec())
            ]
        );
        assert_eq!(deletes, vec![b"account::c".to_vec()]);

        base.batch_apply(&inserts, &deletes).unwrap();
        assert_eq!(
            scan_keys(&base, b"account::"),
            vec![
                b"account::a".to_vec(),
                b"account::b".to_vec(),
                b"account::d".to_vec()
            ]
        );
    }

    #[test]
    fn memory_prefix_scan_respects_bounds() {
        assert!(MemoryState::new().is_empty());
        let mut state = seeded();
        state.insert(&[0xFF, 0xFF], b"edge").unwrap();
        assert_eq!(state.len(), 4);
        assert_eq!(scan_keys(&state, b"ledger::").len(), 1);
        assert_eq!(scan_keys(&state, &[0xFF]).len(), 1);
        assert_eq!(scan_keys(&state, b"").len(), 4);
        assert_eq!(state.get(b"account::a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(state.get(b"missing").unwrap(), None);
    }
}
