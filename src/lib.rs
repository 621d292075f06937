//! prime-hashmap: string-keyed hash maps built from scratch on prime-sized
//! tables, with two collision-resolution strategies behind one contract.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep collision resolution, load management and deletion
//!   semantics small and explicit, with no built-in map underneath.
//! - Layers:
//!   - `prime`: `is_prime`, `next_prime` and `prime_at_least` size every
//!     table, both at construction and at resize.
//!   - `hashing`: the `KeyHasher` seam. Any `Fn(&str) -> usize` is a hasher;
//!     `BuildHasherKey` adapts `std::hash::BuildHasher`.
//!   - `OpenAddressingMap<V, H>`: one slot per entry, quadratic probing,
//!     tombstones on removal, grows to `2 * capacity` when the load factor
//!     reaches 0.5 before an insert.
//!   - `ChainedMap<V, H>`: one singly-linked `Chain` per bucket, direct
//!     unlinking on removal, grows only when asked.
//!   - `find_mode`: frequency counting on top of `ChainedMap::get_node`.
//!
//! Constraints
//! - Single-threaded, no interior mutability, no locking.
//! - Capacity is always prime and at least 2.
//! - Keys are `String`s, looked up by `&str`; values are generic.
//! - The hasher is stored per map at construction; there is no global state.
//! - All operations are total: absent keys yield `None`/`false`, invalid
//!   resize requests are ignored (or reported by `try_resize_table`).
//!
//! Slot state machine (open addressing)
//! - `Empty -> Occupied` on insert.
//! - `Occupied -> Tombstone` on remove. The tombstone keeps the key so that
//!   probing walks past it and a later `put` of the same key revives it.
//! - `Tombstone -> Occupied` on revival, or when a new key claims the first
//!   tombstone on its probe path.
//! - Resize and clear reset every slot to `Empty`; resize reinserts live
//!   entries through the same placement logic as `put`.
//!
//! Probe bound
//! - Quadratic offsets `j^2 mod p` repeat after `(p + 1) / 2` distinct
//!   values, so probes stop after `capacity` steps. With the load kept below
//!   0.5 a probe always finds an empty slot or a tombstone before that.
//!
//! Notes and non-goals
//! - No automatic shrinking for either variant.
//! - No thread-safety or persistence.
//! - `ChainedMap::get_node` hands out `&mut Node`: values are mutable through
//!   it, keys are not.

pub mod chain;
pub mod chained;
pub mod error;
pub mod hashing;
pub mod mode;
pub mod open_addressing;
mod open_addressing_proptest;
pub mod prime;

// Public surface
pub use chained::ChainedMap;
pub use error::ResizeError;
pub use hashing::{hash_function_1, hash_function_2, BuildHasherKey, HashFn, KeyHasher};
pub use mode::{find_mode, find_mode_with};
pub use open_addressing::OpenAddressingMap;
pub use prime::{is_prime, next_prime, prime_at_least};
