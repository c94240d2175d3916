//! Fixed-capacity cache with least-recently-used eviction
//!
//! Every access that hits an entry is a "touch" and updates its recency.
//! Eviction piggybacks on the touch: when the touched entry ends up at
//! the front while the cache holds more than `capacity` entries, the
//! single least-recently-used entry is removed. Inserts always land at
//! the front, so an insert that grows the cache past capacity evicts
//! exactly one entry and restores the bound. This trigger condition is
//! load-bearing for eviction timing; do not replace it with a generic
//! "evict whenever over capacity" sweep.
//!
//! The cache is not internally synchronized; callers needing concurrent
//! access wrap it in their own lock.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

#[derive(Debug)]
pub struct BoundedLruCache<K, V> {
    capacity: usize,
    /// Recency order, most-recently-touched at the front
    order: VecDeque<K>,
    values: HashMap<K, V>,
}

impl<K, V> BoundedLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity + 1),
            values: HashMap::with_capacity(capacity + 1),
        }
    }

    /// Look up a key, promoting it on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let pos = self.position(key)?;
        self.touch(pos);
        self.values.get(key)
    }

    /// Insert or update a key, touching it either way. An update counts
    /// as a touch even when the value is unchanged.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(pos) = self.position(&key) {
            self.values.insert(key, value);
            self.touch(pos);
        } else {
            self.order.push_front(key.clone());
            self.values.insert(key, value);
            // the new entry is at the front; this enforces the bound
            self.touch(0);
        }
    }

    /// Pure observer; does not touch the entry.
    pub fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// Read without touching.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot iteration in most-recent-to-least-recent order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(move |key| self.values.get(key).map(|value| (key, value)))
    }

    fn position(&self, key: &K) -> Option<usize> {
        if !self.values.contains_key(key) {
            return None;
        }
        self.order.iter().position(|k| k == key)
    }

    /// Recency update for the entry at `pos`. An entry already at the
    /// front while the cache is over capacity evicts the back entry;
    /// any other position is promoted to the front.
    fn touch(&mut self, pos: usize) {
        if pos == 0 && self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_back() {
                self.values.remove(&evicted);
            }
        } else if let Some(key) = self.order.remove(pos) {
            self.order.push_front(key);
        }
        debug_assert_eq!(self.order.len(), self.values.len());
    }
}
