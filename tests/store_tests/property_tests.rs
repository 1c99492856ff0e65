//! Property Tests for RestrictedStore
//!
//! Properties verified for arbitrary keys and values:
//! - A held master vetoes its slave
//! - Unrestricted assignments are never vetoed
//! - restrict is idempotent
//! - restrict followed by unrestrict leaves veto state unchanged
//! - unrestrict of an unknown pair fails without mutating anything
//! - multi_restrict applies every valid pair around an invalid one

use proptest::prelude::*;
use restrictkv::{NullSink, RestrictError, RestrictedStore};

// =============================================================================
// Strategies
// =============================================================================

/// Non-empty text without '='
fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ .-]{1,12}"
}

fn store() -> RestrictedStore {
    RestrictedStore::new(16).unwrap().with_sink(NullSink)
}

proptest! {
    #[test]
    fn prop_held_master_vetoes_slave(
        k in token(), v in token(), mk in token(), mv in token()
    ) {
        prop_assume!(k != mk);
        let mut store = store();

        store.restrict(&format!("{}={}", k, v), &format!("{}={}", mk, mv)).unwrap();
        store.set(&mk, &mv).unwrap();

        let vetoed = matches!(store.set(&k, &v), Err(RestrictError::Vetoed { .. }));
        prop_assert!(vetoed);
    }

    #[test]
    fn prop_unrestricted_set_never_vetoed(k in token(), v in token()) {
        let mut store = store();
        prop_assert!(store.set(&k, &v).is_ok());
        prop_assert_eq!(store.get(&k), Some(v.as_str()));
    }

    #[test]
    fn prop_restrict_is_idempotent(
        k in token(), v in token(), mk in token(), mv in token()
    ) {
        let mut store = store();
        let slave = format!("{}={}", k, v);
        let master = format!("{}={}", mk, mv);

        store.restrict(&slave, &master).unwrap();
        store.restrict(&slave, &master).unwrap();

        prop_assert_eq!(store.slave_count(), 1);
        prop_assert_eq!(store.restriction_count(), 1);
    }

    #[test]
    fn prop_restrict_then_unrestrict_is_neutral(
        k in token(), v in token(), mk in token(), mv in token(), held in any::<bool>()
    ) {
        prop_assume!(k != mk);
        let mut store = store();
        if held {
            store.set(&mk, &mv).unwrap();
        }
        let before = store.is_vetoed(&k, &v);

        let slave = format!("{}={}", k, v);
        let master = format!("{}={}", mk, mv);
        store.restrict(&slave, &master).unwrap();
        store.unrestrict(&slave, &master).unwrap();

        prop_assert_eq!(store.is_vetoed(&k, &v), before);
        prop_assert_eq!(store.slave_count(), 0);
    }

    #[test]
    fn prop_unrestrict_unknown_is_not_found(
        k in token(), v in token(), mk in token(), mv in token()
    ) {
        let mut store = store();
        store.restrict("employee=Andy", "company=Google").unwrap();

        let slave = format!("{}={}", k, v);
        let master = format!("{}={}", mk, mv);
        prop_assume!(!(k == "employee" && v == "Andy" && mk == "company" && mv == "Google"));

        let err = store.unrestrict(&slave, &master).unwrap_err();
        prop_assert!(err.is_not_found());
        prop_assert_eq!(store.restriction_count(), 1);
    }

    #[test]
    fn prop_multi_restrict_applies_valid_pairs(
        k in token(),
        v in token(),
        masters in prop::collection::btree_map(token(), token(), 1..6),
        bad_at in any::<prop::sample::Index>(),
    ) {
        let mut store = store();
        let mut texts: Vec<String> = masters
            .iter()
            .map(|(mk, mv)| format!("{}={}", mk, mv))
            .collect();
        let bad = bad_at.index(texts.len() + 1);
        texts.insert(bad, "no-separator".to_string());

        let result = store.multi_restrict(&format!("{}={}", k, v), &texts);
        let partial = matches!(
            &result,
            Err(RestrictError::PartialRestrict { applied, failed })
                if *applied == masters.len() && failed.len() == 1 && failed[0].0 == bad
        );
        prop_assert!(partial);
        prop_assert_eq!(store.restriction_count(), masters.len());
    }
}
