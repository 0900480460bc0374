use super::AvlTree;

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u32),
    Delete(String),
    Search(String),
}

// A small alphabet keeps collisions (overwrites, deletes of present keys) frequent.
fn key_strategy() -> impl Strategy<Value = String> + Clone {
    "[a-e]{0,4}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Delete),
        20 => key.prop_map(Op::Search),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: AvlTree<u32> = AvlTree::new();
        let mut m: BTreeMap<String, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let old_t = t.insert(key.as_str(), value);
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Delete(key) => {
                    let old_t = t.delete(&key);
                    let old_m = m.remove(&key);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Search(key) => {
                    prop_assert_eq!(t.search(&key), m.get(&key));
                }
            }

            prop_assert_eq!(t.len(), m.len());
            t.check_consistency();
        }

        let expected: Vec<&str> = m.keys().map(String::as_str).collect();
        prop_assert_eq!(t.keys(), expected);
    }

    #[test]
    fn prop_insert_then_search(keys in prop::collection::vec("\\PC{0,8}", 1..200), probe in "\\PC{0,8}") {
        let mut t = AvlTree::new();
        for (value, key) in keys.iter().enumerate() {
            t.insert(key.as_str(), value);
        }
        t.insert(probe.as_str(), usize::MAX);
        prop_assert_eq!(t.search(&probe), Some(&usize::MAX));
        t.check_consistency();
    }

    #[test]
    fn prop_delete_keeps_others(keys in prop::collection::btree_set("[a-z]{1,6}", 1..200), index in any::<prop::sample::Index>()) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut t = AvlTree::new();
        for key in &keys {
            t.insert(key.as_str(), key.len());
        }

        let victim = &keys[index.index(keys.len())];
        prop_assert_eq!(t.delete(victim), Some(victim.len()));
        prop_assert!(t.search(victim).is_none());
        t.check_consistency();
        for key in keys.iter().filter(|key| *key != victim) {
            prop_assert_eq!(t.search(key), Some(&key.len()));
        }
    }
}
