//! OpenAddressingMap: quadratic probing over a prime-sized slot array, with
//! tombstones for deletion.

use crate::error::ResizeError;
use crate::hashing::{hash_function_1, HashFn, KeyHasher};
use crate::prime::{next_prime, prime_at_least};
use core::fmt;
use core::mem;

/// Load factor at which `put` grows the table before inserting.
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// Requested capacity used by `Default`.
pub const DEFAULT_CAPACITY: usize = 11;

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

/// A tombstone keeps its key: probing must continue past it, and a later
/// `put` of the same key revives the slot instead of claiming a second one.
#[derive(Debug)]
enum Slot<V> {
    Empty,
    Occupied(Entry<V>),
    Tombstone(String),
}

impl<V> Slot<V> {
    fn key(&self) -> Option<&str> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(e) => Some(&e.key),
            Slot::Tombstone(k) => Some(k),
        }
    }
}

/// Slot indices `(home + j^2) mod capacity` for `j` in `0..capacity`.
///
/// With a prime capacity the first `(capacity + 1) / 2` indices are distinct;
/// later ones only revisit them, so the walk stops after `capacity` steps.
struct Probe {
    index: usize,
    step: usize,
    remaining: usize,
    capacity: usize,
}

impl Probe {
    fn new(home: usize, capacity: usize) -> Self {
        Self {
            index: home,
            step: 0,
            remaining: capacity,
            capacity,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        // (j+1)^2 - j^2 = 2j + 1
        let delta = (2 * self.step + 1) % self.capacity;
        self.index = (self.index + delta) % self.capacity;
        self.step += 1;
        Some(current)
    }
}

/// Where a `put` of an absent key lands after probing.
enum Placement {
    /// A tombstone left by the same key.
    Revive(usize),
    /// A new entry: the first tombstone on the path, else the empty slot.
    Vacant(usize),
    /// The bounded probe saw no empty slot and no tombstone.
    Exhausted,
}

pub struct OpenAddressingMap<V, H = HashFn> {
    slots: Vec<Slot<V>>,
    len: usize,
    hasher: H,
}

impl<V> OpenAddressingMap<V> {
    /// Map hashing with [`hash_function_1`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, hash_function_1)
    }
}

impl<V> Default for OpenAddressingMap<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Iterator over live entries in slot order.
pub struct Iter<'a, V> {
    it: core::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find_map(|slot| match slot {
            Slot::Occupied(e) => Some((e.key.as_str(), &e.value)),
            _ => None,
        })
    }
}

impl<V, H> OpenAddressingMap<V, H>
where
    H: KeyHasher,
{
    /// Creates a map with `next_prime(capacity)` empty slots.
    pub fn new(capacity: usize, hasher: H) -> Self {
        Self {
            slots: empty_slots(next_prime(capacity)),
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
        self.slots.len()
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn table_load(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Slots that have never held an entry since the last resize or clear.
    /// Tombstones are not empty.
    pub fn empty_buckets(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Empty))
            .count()
    }

    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Tombstone(_)))
            .count()
    }

    fn probe(&self, key: &str) -> Probe {
        let home = self.hasher.hash_key(key) % self.capacity();
        Probe::new(home, self.capacity())
    }

    /// Index of the slot holding `key`, live or tombstoned, if it lies on the
    /// probe path before the first empty slot.
    fn find_slot(&self, key: &str) -> Option<usize> {
        for i in self.probe(key) {
            match self.slots[i].key() {
                None => return None,
                Some(k) if k == key => return Some(i),
                Some(_) => {}
            }
        }
        None
    }

    fn placement(&self, key: &str) -> Placement {
        let mut first_tombstone: Option<usize> = None;
        for i in self.probe(key) {
            match &self.slots[i] {
                Slot::Tombstone(k) if k == key => return Placement::Revive(i),
                Slot::Tombstone(_) => {
                    first_tombstone.get_or_insert(i);
                }
                Slot::Occupied(_) => {}
                Slot::Empty => return Placement::Vacant(first_tombstone.unwrap_or(i)),
            }
        }
        match first_tombstone {
            Some(i) => Placement::Vacant(i),
            None => Placement::Exhausted,
        }
    }

    /// Inserts or overwrites `key`, returning the previous live value.
    ///
    /// Grows to `2 * capacity` (rounded up to a prime) first when the load
    /// factor has reached [`MAX_LOAD_FACTOR`].
    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        self.put_key(key, value)
    }

    fn put_key<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str> + Into<String>,
    {
        if self.table_load() >= MAX_LOAD_FACTOR {
            self.resize_table(self.capacity() * 2);
        }
        if let Some(old) = self.get_mut(key.as_ref()) {
            return Some(mem::replace(old, value));
        }
        loop {
            match self.placement(key.as_ref()) {
                Placement::Revive(i) | Placement::Vacant(i) => {
                    self.slots[i] = Slot::Occupied(Entry {
                        key: key.into(),
                        value,
                    });
                    self.len += 1;
                    debug_assert!(self.len < self.capacity());
                    return None;
                }
                Placement::Exhausted => {
                    self.resize_table(self.capacity() * 2);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        match &self.slots[self.find_slot(key)?] {
            Slot::Occupied(e) => Some(&e.value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = self.find_slot(key)?;
        match &mut self.slots[i] {
            Slot::Occupied(e) => Some(&mut e.value),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        if self.len == 0 {
            return false;
        }
        self.get(key).is_some()
    }

    /// Tombstones the live entry for `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let i = self.find_slot(key)?;
        let slot = &mut self.slots[i];
        match mem::replace(slot, Slot::Empty) {
            Slot::Occupied(Entry { key, value }) => {
                *slot = Slot::Tombstone(key);
                self.len -= 1;
                Some(value)
            }
            tombstone => {
                *slot = tombstone;
                None
            }
        }
    }

    /// Rebuilds the table with at least `new_capacity` slots; ignored when
    /// `new_capacity` is smaller than the number of live entries.
    pub fn resize_table(&mut self, new_capacity: usize) {
        let _ = self.try_resize_table(new_capacity);
    }

    /// Rebuilds the table with `prime_at_least(new_capacity)` slots and
    /// reinserts every live entry with `put` semantics, dropping tombstones.
    ///
    /// Reinsertion can grow the new table further when it reaches
    /// [`MAX_LOAD_FACTOR`].
    pub fn try_resize_table(&mut self, new_capacity: usize) -> Result<(), ResizeError> {
        if new_capacity < self.len {
            return Err(ResizeError::TooSmall {
                requested: new_capacity,
                len: self.len,
            });
        }
        let old = mem::replace(&mut self.slots, empty_slots(prime_at_least(new_capacity)));
        self.len = 0;
        for slot in old {
            if let Slot::Occupied(Entry { key, value }) = slot {
                self.put_key(key, value);
            }
        }
        debug_assert_eq!(self.tombstones(), 0);
        Ok(())
    }

    /// Resets every slot to empty; capacity is kept.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = Slot::Empty);
        self.len = 0;
    }

    /// Live key/value pairs in slot order.
    pub fn get_keys_and_values(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    /// Structural checks used by the property tests.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(crate::prime::is_prime(self.capacity()));
        let occupied = self
            .slots
            .iter()
            .filter(|s| matches!(s, Slot::Occupied(_)))
            .count();
        assert_eq!(occupied, self.len, "len must count live slots");
        assert!(self.len < self.capacity());

        let mut keys: Vec<&str> = self.slots.iter().filter_map(Slot::key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total, "a key may occupy at most one slot");

        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(k) = slot.key() {
                assert_eq!(self.find_slot(k), Some(i), "slot {i} unreachable by probing");
            }
        }
    }
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

impl<'a, V, H: KeyHasher> IntoIterator for &'a OpenAddressingMap<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug, H: KeyHasher> fmt::Debug for OpenAddressingMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per slot, in the form `index: key -> value`.
impl<V: fmt::Display, H> fmt::Display for OpenAddressingMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{i}: <empty>")?,
                Slot::Occupied(e) => writeln!(f, "{i}: {} -> {}", e.key, e.value)?,
                Slot::Tombstone(k) => writeln!(f, "{i}: <tombstone {k}>")?,
            }
        }
        Ok(())
    }
}
