//! Property-based tests for the stash index.
//!
//! Any interleaving of saves and removals must leave the index free of
//! duplicates, in one-to-one correspondence with the stored records, and
//! ordered newest first.

use std::collections::HashSet;

use chrono::Utc;
use proptest::prelude::*;
use tabstash::managers::stash_manager::{stash_key, StashManager, StashManagerTrait, STASHES_KEY};
use tabstash::storage::{KeyValueStore, MemoryStore};
use tabstash::types::stash::Stash;

#[derive(Debug, Clone)]
enum Op {
    Save(u8),
    Remove(u8),
}

/// Small ID space so saves and removals collide often.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..8).prop_map(Op::Save),
        1 => (0u8..8).prop_map(Op::Remove),
    ]
}

fn empty_stash(n: u8) -> Stash {
    Stash {
        id: format!("st{}", n),
        tabs: Vec::new(),
        created_at: Utc::now(),
    }
}

/// Reference model: newest-first list, new IDs prepended, re-saves keep position.
fn model(ops: &[Op]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for op in ops {
        match op {
            Op::Save(n) => {
                let id = format!("st{}", n);
                if !ids.contains(&id) {
                    ids.insert(0, id);
                }
            }
            Op::Remove(n) => {
                let id = format!("st{}", n);
                ids.retain(|i| *i != id);
            }
        }
    }
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn index_matches_records_after_any_ops(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let store = MemoryStore::new();
        let mgr = StashManager::new(&store);

        for op in &ops {
            match op {
                Op::Save(n) => mgr.save_stash(&empty_stash(*n)).unwrap(),
                Op::Remove(n) => mgr.remove_stash(&format!("st{}", n)).unwrap(),
            }
        }

        let ids = mgr.get_all_stash_ids().unwrap();

        let unique: HashSet<&String> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len(), "index has duplicates: {:?}", ids);

        let record_keys: HashSet<String> = store
            .keys()
            .unwrap()
            .into_iter()
            .filter(|k| k != STASHES_KEY)
            .collect();
        let indexed_keys: HashSet<String> = ids.iter().map(|id| stash_key(id)).collect();
        prop_assert_eq!(record_keys, indexed_keys);

        prop_assert_eq!(ids, model(&ops));
    }

    #[test]
    fn new_stash_lands_at_front(existing in proptest::collection::vec(0u8..50, 0..10), fresh in 50u8..100) {
        let store = MemoryStore::new();
        let mgr = StashManager::new(&store);
        for n in &existing {
            mgr.save_stash(&empty_stash(*n)).unwrap();
        }
        let before = mgr.get_all_stash_ids().unwrap();

        mgr.save_stash(&empty_stash(fresh)).unwrap();
        let after = mgr.get_all_stash_ids().unwrap();

        prop_assert_eq!(&after[0], &format!("st{}", fresh));
        prop_assert_eq!(&after[1..], &before[..]);
    }
}
