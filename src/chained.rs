//! ChainedMap: separate chaining over a prime-sized array of singly-linked
//! buckets. Growth is caller-driven through `resize_table`.

use crate::chain::{self, Chain, Node};
use crate::error::ResizeError;
use crate::hashing::{hash_function_1, HashFn, KeyHasher};
use crate::prime::{next_prime, prime_at_least};
use core::fmt;
use core::mem;

/// Requested capacity used by `Default` and by mode finding.
pub const DEFAULT_CAPACITY: usize = 11;

pub struct ChainedMap<V, H = HashFn> {
    buckets: Vec<Chain<V>>,
    len: usize,
    hasher: H,
}

impl<V> ChainedMap<V> {
    /// Map hashing with [`hash_function_1`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, hash_function_1)
    }
}

impl<V> Default for ChainedMap<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Iterator over entries, bucket by bucket.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Chain<V>>,
    chain: Option<chain::Iter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.as_mut().and_then(|c| c.next()) {
                return Some((node.key(), node.value()));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}

impl<V, H> ChainedMap<V, H>
where
    H: KeyHasher,
{
    /// Creates a map with `next_prime(capacity)` empty chains.
    pub fn new(capacity: usize, hasher: H) -> Self {
        Self {
            buckets: empty_chains(next_prime(capacity)),
            len: 0,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn table_load(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|c| c.len() == 0).count()
    }

    fn bucket_index(&self, key: &str) -> usize {
        self.hasher.hash_key(key) % self.capacity()
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        let i = self.bucket_index(key);
        if let Some(node) = self.buckets[i].find_mut(key) {
            return Some(mem::replace(node.value_mut(), value));
        }
        self.buckets[i].insert(key.to_owned(), value);
        self.len += 1;
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .find(key)
            .map(Node::value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.get_node(key).map(Node::value_mut)
    }

    /// Borrows the chain node holding `key`. Writes through
    /// [`Node::value_mut`] are visible in the map immediately.
    pub fn get_node(&mut self, key: &str) -> Option<&mut Node<V>> {
        let i = self.bucket_index(key);
        self.buckets[i].find_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        if self.len == 0 {
            return false;
        }
        self.buckets[self.bucket_index(key)].find(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let i = self.bucket_index(key);
        let value = self.buckets[i].remove(key)?;
        self.len -= 1;
        Some(value)
    }

    /// Rehashes into at least `new_capacity` chains; ignored when
    /// `new_capacity` is zero.
    pub fn resize_table(&mut self, new_capacity: usize) {
        let _ = self.try_resize_table(new_capacity);
    }

    /// Moves every node into a fresh array of `prime_at_least(new_capacity)`
    /// chains. Nodes are relinked, not reallocated.
    pub fn try_resize_table(&mut self, new_capacity: usize) -> Result<(), ResizeError> {
        if new_capacity < 1 {
            return Err(ResizeError::ZeroCapacity);
        }
        let capacity = prime_at_least(new_capacity);
        let mut buckets = empty_chains(capacity);
        for mut chain in mem::take(&mut self.buckets) {
            while let Some(node) = chain.pop_front() {
                let i = self.hasher.hash_key(node.key()) % capacity;
                buckets[i].push_node(node);
            }
        }
        self.buckets = buckets;
        debug_assert_eq!(
            self.buckets.iter().map(Chain::len).sum::<usize>(),
            self.len
        );
        Ok(())
    }

    /// Empties every chain; capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|c| *c = Chain::new());
        self.len = 0;
    }

    /// All key/value pairs, bucket by bucket.
    pub fn get_keys_and_values(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }
}

fn empty_chains<V>(capacity: usize) -> Vec<Chain<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Chain::new);
    buckets
}

impl<'a, V, H: KeyHasher> IntoIterator for &'a ChainedMap<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug, H: KeyHasher> fmt::Debug for ChainedMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per bucket: `index: key -> value, key -> value`.
impl<V: fmt::Display, H> fmt::Display for ChainedMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "{i}:")?;
            for (n, node) in chain.iter().enumerate() {
                let sep = if n == 0 { " " } else { ", " };
                write!(f, "{sep}{} -> {}", node.key(), node.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
