#![cfg(test)]

// Property tests for OpenAddressingMap kept inside the crate so they can
// check slot-level invariants that the public API does not expose.

use crate::hashing::HashFn;
use crate::open_addressing::OpenAddressingMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations: indices shrink to earlier keys, the pool
// shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Resize(usize),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            3 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => (0usize..64).prop_map(OpI::Resize),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Narrow hashes force long probe paths and many tombstones on them.
fn low_bits(key: &str) -> usize {
    key.bytes().map(usize::from).sum::<usize>() % 3
}

fn run(hasher: HashFn, capacity: usize, pool: &[String], ops: &[OpI]) -> Result<(), TestCaseError> {
    let mut sut: OpenAddressingMap<i32> = OpenAddressingMap::new(capacity, hasher);
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[*i];
                let prev = sut.put(k, *v);
                prop_assert_eq!(prev, model.insert(k.clone(), *v));
                prop_assert!(sut.table_load() < 1.0);
            }
            OpI::Remove(i) => {
                let k = &pool[*i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert!(!sut.contains_key(k));
            }
            OpI::Get(i) => {
                let k = &pool[*i];
                prop_assert_eq!(sut.get(k), model.get(k));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
            }
            OpI::Resize(c) => {
                let before = sut.capacity();
                sut.resize_table(*c);
                if *c < model.len() {
                    prop_assert_eq!(sut.capacity(), before);
                } else {
                    prop_assert_eq!(sut.tombstones(), 0);
                    prop_assert!(sut.capacity() >= *c);
                }
            }
            OpI::Clear => {
                let before = sut.capacity();
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), before);
                prop_assert_eq!(sut.empty_buckets(), before);
            }
        }
        sut.assert_invariants();
        prop_assert_eq!(sut.len(), model.len());
    }

    let mut live: Vec<(String, i32)> = sut
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
    let mut expected: Vec<(String, i32)> = model.into_iter().collect();
    live.sort();
    expected.sort();
    prop_assert_eq!(live, expected);
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` returns the previous live value; `remove` returns the removed one.
// - `get`/`contains_key` parity with the model, including after tombstoning.
// - Every key sits in at most one slot and is reachable along its probe path.
// - `len` counts occupied slots; capacity stays prime and above `len`.
// - Valid resizes drop all tombstones; rejected ones change nothing.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_spread_hash((pool, ops) in arb_scenario(), capacity in 0usize..20) {
        run(crate::hashing::hash_function_2, capacity, &pool, &ops)?;
    }

    #[test]
    fn prop_state_machine_clustered_hash((pool, ops) in arb_scenario(), capacity in 0usize..20) {
        run(low_bits, capacity, &pool, &ops)?;
    }
}
