//! Key hashing strategies injected into the maps at construction.

use core::hash::BuildHasher;
use std::collections::hash_map::RandomState;

/// Maps a string key to a non-negative bucket hash.
///
/// Implemented for every `Fn(&str) -> usize`, so plain functions such as
/// [`hash_function_1`] and closures can be handed to a map directly.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> usize;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> usize,
{
    #[inline]
    fn hash_key(&self, key: &str) -> usize {
        self(key)
    }
}

/// Function-pointer hasher; the default hasher type of both maps.
pub type HashFn = fn(&str) -> usize;

/// Sum of the key's code points.
pub fn hash_function_1(key: &str) -> usize {
    key.chars()
        .fold(0usize, |acc, c| acc.wrapping_add(c as usize))
}

/// Sum of each code point weighted by its 1-based position.
///
/// Unlike [`hash_function_1`], anagrams hash differently.
pub fn hash_function_2(key: &str) -> usize {
    key.chars().enumerate().fold(0usize, |acc, (i, c)| {
        acc.wrapping_add((i + 1).wrapping_mul(c as usize))
    })
}

/// Adapts a [`BuildHasher`] (SipHash via `RandomState` by default) to
/// [`KeyHasher`].
#[derive(Clone, Debug, Default)]
pub struct BuildHasherKey<S = RandomState>(S);

impl<S: BuildHasher> BuildHasherKey<S> {
    pub fn new(build: S) -> Self {
        BuildHasherKey(build)
    }
}

impl<S: BuildHasher> KeyHasher for BuildHasherKey<S> {
    #[inline]
    fn hash_key(&self, key: &str) -> usize {
        self.0.hash_one(key) as usize
    }
}
