//! Slot Module
//!
//! Arena slots that hold cache entries and thread the recency list.

// == Sentinel Indices ==
/// Slot index of the head sentinel (most recently used side).
pub(crate) const HEAD: usize = 0;

/// Slot index of the tail sentinel (least recently used side).
pub(crate) const TAIL: usize = 1;

// == Entry ==
/// A resident key-value pair.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

// == Slot ==
/// One element of the arena.
///
/// Sentinels and recycled slots carry no entry. Links are arena indices,
/// `prev` pointing toward the head and `next` toward the tail.
#[derive(Debug, Clone)]
pub(crate) struct Slot<K, V> {
    pub entry: Option<Entry<K, V>>,
    pub prev: usize,
    pub next: usize,
}

impl<K, V> Slot<K, V> {
    // == Constructors ==
    /// Creates an empty sentinel slot with the given links.
    pub fn sentinel(prev: usize, next: usize) -> Self {
        Self {
            entry: None,
            prev,
            next,
        }
    }

    /// Creates a slot holding an entry. Links are set when it is attached.
    pub fn occupied(key: K, value: V) -> Self {
        Self {
            entry: Some(Entry { key, value }),
            prev: HEAD,
            next: TAIL,
        }
    }

    // == Accessors ==
    pub fn key(&self) -> Option<&K> {
        self.entry.as_ref().map(|e| &e.key)
    }

    pub fn value(&self) -> Option<&V> {
        self.entry.as_ref().map(|e| &e.value)
    }

    pub fn is_vacant(&self) -> bool {
        self.entry.is_none()
    }
}
