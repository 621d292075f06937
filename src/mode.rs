//! Mode finding with `ChainedMap` as the frequency counter.

use crate::chained::{ChainedMap, DEFAULT_CAPACITY};
use crate::hashing::{hash_function_1, KeyHasher};
use core::fmt::Display;

/// First occurrence of a value and how many times its string form was seen.
struct Tally<T> {
    value: T,
    count: usize,
}

/// Returns every value tied for the highest frequency, and that frequency.
///
/// Values are grouped by their `Display` form. Each group is represented by
/// its first occurrence. Result order follows the counting map's traversal,
/// not input order. Empty input yields `(vec![], 0)`.
pub fn find_mode<T, I>(items: I) -> (Vec<T>, usize)
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    find_mode_with(items, hash_function_1)
}

/// [`find_mode`] with an injected key hasher.
pub fn find_mode_with<T, I, H>(items: I, hasher: H) -> (Vec<T>, usize)
where
    I: IntoIterator<Item = T>,
    T: Display,
    H: KeyHasher,
{
    let mut counts: ChainedMap<Tally<T>, H> = ChainedMap::new(DEFAULT_CAPACITY, hasher);
    for item in items {
        let key = item.to_string();
        match counts.get_node(&key) {
            Some(node) => node.value_mut().count += 1,
            None => {
                counts.put(
                    &key,
                    Tally {
                        value: item,
                        count: 1,
                    },
                );
            }
        }
    }

    let mut frequency = 0;
    let mut modes: Vec<&str> = Vec::new();
    for (key, tally) in counts.iter() {
        if tally.count > frequency {
            frequency = tally.count;
            modes.clear();
        }
        if tally.count == frequency {
            modes.push(key);
        }
    }

    let modes: Vec<String> = modes.into_iter().map(str::to_owned).collect();
    let values = modes
        .iter()
        .filter_map(|key| counts.remove(key))
        .map(|tally| tally.value)
        .collect();
    (values, frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::{hash_function_2, HashFn};
    use std::collections::BTreeSet;

    fn set<T: Ord>(v: Vec<T>) -> BTreeSet<T> {
        v.into_iter().collect()
    }

    #[test]
    fn bimodal() {
        let (modes, freq) = find_mode(["apple", "apple", "grape", "melon", "melon", "peach"]);
        assert_eq!(freq, 2);
        assert_eq!(set(modes), set(vec!["apple", "melon"]));
    }

    #[test]
    fn uniform_input_is_fully_tied() {
        let input = ["one", "two", "three", "four", "five"];
        let (modes, freq) = find_mode(input);
        assert_eq!(freq, 1);
        assert_eq!(set(modes), set(input.to_vec()));
    }

    #[test]
    fn single_winner() {
        let (modes, freq) = find_mode(vec![
            "2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2",
        ]);
        assert_eq!(freq, 3);
        assert_eq!(set(modes), set(vec!["2", "3", "4"]));

        let (modes, freq) = find_mode([
            "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
        ]);
        assert_eq!(freq, 3);
        assert_eq!(set(modes), set(vec!["Mint", "Ubuntu"]));

        let (modes, freq) = find_mode(["one", "two", "two", "three"]);
        assert_eq!((modes, freq), (vec!["two"], 2));
    }

    #[test]
    fn empty_input() {
        let (modes, freq) = find_mode(Vec::<String>::new());
        assert!(modes.is_empty());
        assert_eq!(freq, 0);
    }

    /// Invariant: values are grouped by their string form and the first
    /// occurrence represents the group.
    #[test]
    fn non_string_values() {
        let (modes, freq) = find_mode(vec![3, 1, 3, 2, 3, 1]);
        assert_eq!((modes, freq), (vec![3], 3));
    }

    /// Invariant: the grouping does not depend on the hasher, even when every
    /// key collides.
    #[test]
    fn hasher_does_not_change_result() {
        let input = ["x", "y", "y", "z", "z", "z", "w"];
        let hashers: [HashFn; 3] = [hash_function_1, hash_function_2, |_| 0];
        for hasher in hashers {
            let (modes, freq) = find_mode_with(input, hasher);
            assert_eq!((modes, freq), (vec!["z"], 3));
        }
    }
}
