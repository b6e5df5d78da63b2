//! LRU Cache Module
//!
//! Fixed-capacity least-recently-used cache. Entries live in a slot arena and
//! are threaded into a doubly linked recency list by index, between two
//! sentinel slots. A hash index maps each key to its slot, so `get` and `put`
//! never walk the list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::cache::slot::{Slot, HEAD, TAIL};
use crate::cache::CacheStats;
use crate::error::{LruError, Result};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const PREALLOCATE_LIMIT: usize = 4096;

// == LRU Cache ==
/// A fixed-capacity key-value store that evicts the least recently used entry.
///
/// The cache does no internal locking. Callers that share it across threads
/// must serialize access themselves, for example through
/// [`SharedLruCache`](crate::cache::SharedLruCache).
pub struct LruCache<K, V> {
    /// Key -> slot index
    index: HashMap<K, usize, RandomState>,
    /// Slot arena; slots 0 and 1 are the head and tail sentinels
    slots: Vec<Slot<K, V>>,
    /// Recycled slot indices
    free: Vec<usize>,
    /// Maximum number of resident entries
    capacity: usize,
    /// Activity counters
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`LruError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(LruError::InvalidCapacity(0));
        }

        let reserve = capacity.min(PREALLOCATE_LIMIT);
        let mut slots = Vec::with_capacity(reserve + 2);
        slots.push(Slot::sentinel(HEAD, TAIL));
        slots.push(Slot::sentinel(HEAD, TAIL));

        debug!(capacity, "LRU cache created");

        Ok(Self {
            index: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            slots,
            free: Vec::new(),
            capacity,
            stats: CacheStats::new(),
        })
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// Returns `None` when the key is not resident.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key).copied() {
            Some(idx) => {
                self.stats.record_hit();
                self.move_to_head(idx);
                self.slots[idx].value()
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// A resident key is overwritten in place. A new key evicts the least
    /// recently used entry first when the cache is full.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(entry) = self.slots[idx].entry.as_mut() {
                entry.value = value;
            }
            self.move_to_head(idx);
            self.stats.record_update();
            return;
        }

        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let idx = self.alloc(key.clone(), value);
        self.attach_front(idx);
        self.index.insert(key, idx);
        self.stats.record_insert();
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency or stats.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&idx| self.slots[idx].value())
    }

    // == Contains ==
    /// Checks whether `key` is resident, without touching recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Eviction ==
    /// Drops the entry at the tail of the recency list, if any.
    fn evict_lru(&mut self) {
        let idx = self.slots[TAIL].prev;
        if self.slots[idx].is_vacant() {
            return;
        }

        self.detach(idx);
        if let Some(entry) = self.slots[idx].entry.take() {
            self.index.remove(&entry.key);
        }
        self.free.push(idx);
        self.stats.record_eviction();
        trace!(slot = idx, "evicted least recently used entry");
    }

    // == Slot Allocation ==
    fn alloc(&mut self, key: K, value: V) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Slot::occupied(key, value);
                idx
            }
            None => {
                self.slots.push(Slot::occupied(key, value));
                self.slots.len() - 1
            }
        }
    }
}

impl<K, V> LruCache<K, V> {
    // == Link Maintenance ==
    /// Unlinks slot `idx` from its neighbors.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Links slot `idx` directly after the head sentinel.
    fn attach_front(&mut self, idx: usize) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    fn move_to_head(&mut self, idx: usize) {
        if self.slots[HEAD].next == idx {
            return;
        }
        self.detach(idx);
        self.attach_front(idx);
    }

    // == Recency Queries ==
    /// Returns the entry that the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.entry_at(self.slots[TAIL].prev)
    }

    /// Returns the most recently used entry.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.entry_at(self.slots[HEAD].next)
    }

    fn entry_at(&self, idx: usize) -> Option<(&K, &V)> {
        let slot = &self.slots[idx];
        slot.key().zip(slot.value())
    }

    /// Iterates resident entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            cursor: self.slots[HEAD].next,
            remaining: self.index.len(),
        }
    }

    // == Size ==
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.index.len());
        stats
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .field("slots", &self.slots.len())
            .finish()
    }
}

// == Iterator ==
/// Iterator over resident entries in recency order, see [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    slots: &'a [Slot<K, V>],
    cursor: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let slots: &'a [Slot<K, V>] = self.slots;
        let slot = &slots[self.cursor];
        self.cursor = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.entry.as_ref().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Walks the whole arena and asserts the structural invariants.
    pub(crate) fn assert_consistent(&self) {
        assert!(self.index.len() <= self.capacity, "over capacity");
        assert!(self.slots.len() <= self.capacity.saturating_add(2), "arena grew past capacity");
        assert!(self.slots[HEAD].is_vacant() && self.slots[TAIL].is_vacant());

        let mut walked = 0;
        let mut prev = HEAD;
        let mut cursor = self.slots[HEAD].next;
        while cursor != TAIL {
            let slot = &self.slots[cursor];
            assert_eq!(slot.prev, prev, "broken back link at slot {cursor}");
            let key = slot.key().expect("linked slot must hold an entry");
            assert_eq!(self.index.get(key), Some(&cursor), "index out of sync for {key:?}");
            walked += 1;
            prev = cursor;
            cursor = slot.next;
        }
        assert_eq!(self.slots[TAIL].prev, prev, "tail sentinel out of sync");
        assert_eq!(walked, self.index.len(), "list and index disagree on size");

        for &idx in &self.free {
            assert!(self.slots[idx].is_vacant(), "free slot {idx} still occupied");
        }
    }
}
