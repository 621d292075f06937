use prime_hashmap::{find_mode, find_mode_with, BuildHasherKey, ChainedMap};
use std::collections::BTreeSet;

fn as_set<'a>(v: &[&'a str]) -> BTreeSet<&'a str> {
    v.iter().copied().collect()
}

#[test]
fn bimodal_fruit() {
    let (modes, freq) = find_mode(["apple", "apple", "grape", "melon", "melon", "peach"]);
    assert_eq!(freq, 2);
    assert_eq!(as_set(&modes), as_set(&["apple", "melon"]));
}

// Test: result order.
// Assumes: find_mode counts in a default ChainedMap hashed by hash_function_1.
// Verifies: tied values come back in that map's traversal order, not input
// order.
#[test]
fn modes_follow_traversal_order() {
    let input = ["apple", "apple", "grape", "melon", "melon", "peach"];
    let mut counts: ChainedMap<usize> = ChainedMap::default();
    for word in input {
        match counts.get_node(word) {
            Some(node) => *node.value_mut() += 1,
            None => {
                counts.put(word, 1);
            }
        }
    }
    let top = counts.iter().map(|(_, &c)| c).max().unwrap_or(0);
    let traversal: Vec<&str> = counts
        .iter()
        .filter(|&(_, &c)| c == top)
        .map(|(k, _)| k)
        .collect();

    let (modes, freq) = find_mode(input);
    assert_eq!(freq, top);
    assert_eq!(modes, traversal);
    assert_eq!((modes, freq), (vec!["melon", "apple"], 2));
}

#[test]
fn all_distinct_values_tie() {
    let input = ["one", "two", "three", "four", "five"];
    let (modes, freq) = find_mode(input);
    assert_eq!(freq, 1);
    assert_eq!(modes.len(), 5);
    assert_eq!(as_set(&modes), as_set(&input));
}

#[test]
fn owned_strings_come_back_owned() {
    let input: Vec<String> = "the cat and the hat and the bat"
        .split(' ')
        .map(String::from)
        .collect();
    let (modes, freq) = find_mode(input);
    assert_eq!(freq, 3);
    assert_eq!(modes, vec!["the".to_string()]);
}

#[test]
fn random_state_hasher() {
    let (modes, freq) = find_mode_with(
        ["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"],
        BuildHasherKey::<std::collections::hash_map::RandomState>::default(),
    );
    assert_eq!(freq, 3);
    assert_eq!(as_set(&modes), as_set(&["Mint", "Ubuntu"]));
}
