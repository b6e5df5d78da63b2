//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a simple reference model.

use proptest::prelude::*;
use std::collections::VecDeque;

use crate::cache::{CacheStats, LruCache};

// == Reference Model ==
/// What a model `put` did to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PutEffect {
    Updated,
    Inserted { evicted: bool },
}

/// Naive LRU: front = most recently used. O(n) per operation.
struct ModelLru {
    capacity: usize,
    order: VecDeque<(u8, i32)>,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
        }
    }

    fn get(&mut self, key: u8) -> Option<i32> {
        let pos = self.order.iter().position(|(k, _)| *k == key)?;
        let entry = self.order.remove(pos)?;
        self.order.push_front(entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u8, value: i32) -> PutEffect {
        if let Some(pos) = self.order.iter().position(|(k, _)| *k == key) {
            self.order.remove(pos);
            self.order.push_front((key, value));
            return PutEffect::Updated;
        }
        let evicted = self.order.len() >= self.capacity;
        if evicted {
            self.order.pop_back();
        }
        self.order.push_front((key, value));
        PutEffect::Inserted { evicted }
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn keys(&self) -> Vec<u8> {
        self.order.iter().map(|(k, _)| *k).collect()
    }
}

// == Strategies ==
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: i32 },
    Get { key: u8 },
}

/// Small key space so that hits, overwrites and evictions all happen often.
fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (0u8..16, any::<i32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        (0u8..16).prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any operation sequence, every get result, the recency order and
    // every statistics counter match the reference model.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = LruCache::new(capacity).unwrap();
        let mut model = ModelLru::new(capacity);
        let mut expected = CacheStats::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(key, value);
                    match model.put(key, value) {
                        PutEffect::Updated => expected.record_update(),
                        PutEffect::Inserted { evicted } => {
                            expected.record_insert();
                            if evicted {
                                expected.record_eviction();
                            }
                        }
                    }
                }
                CacheOp::Get { key } => {
                    let modelled = model.get(key);
                    match modelled {
                        Some(_) => expected.record_hit(),
                        None => expected.record_miss(),
                    }
                    prop_assert_eq!(cache.get(&key).copied(), modelled);
                }
            }
            let keys: Vec<u8> = cache.iter().map(|(k, _)| *k).collect();
            prop_assert_eq!(keys, model.keys());
        }

        expected.set_total_entries(model.len());
        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected.hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected.misses, "Misses mismatch");
        prop_assert_eq!(stats.inserts, expected.inserts, "Inserts mismatch");
        prop_assert_eq!(stats.updates, expected.updates, "Updates mismatch");
        prop_assert_eq!(stats.evictions, expected.evictions, "Evictions mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
        prop_assert_eq!(stats, expected);
        cache.assert_consistent();
    }

    // The cache never holds more than `capacity` keys.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..32,
        keys in prop::collection::vec(any::<u16>(), 1..300)
    ) {
        let mut cache = LruCache::new(capacity).unwrap();
        for key in keys {
            cache.put(key, ());
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
        cache.assert_consistent();
    }

    // A put is immediately visible to get.
    #[test]
    fn prop_put_then_get(
        prefill in prop::collection::vec((any::<u8>(), any::<i32>()), 0..50),
        key in any::<u8>(),
        value in any::<i32>()
    ) {
        let mut cache = LruCache::new(8).unwrap();
        for (k, v) in prefill {
            cache.put(k, v);
        }
        cache.put(key, value);
        prop_assert_eq!(cache.get(&key), Some(&value));
    }

    // Inserting capacity + n distinct keys evicts exactly the first n.
    #[test]
    fn prop_lru_eviction_order(capacity in 1usize..10, overflow in 1usize..10) {
        let mut cache = LruCache::new(capacity).unwrap();
        let total = capacity + overflow;
        for key in 0..total {
            cache.put(key, key);
        }

        for key in 0..overflow {
            prop_assert!(cache.get(&key).is_none(), "key {} should be evicted", key);
        }
        for key in overflow..total {
            prop_assert_eq!(cache.get(&key), Some(&key));
        }
    }

    // A key touched by get is not the next eviction candidate.
    #[test]
    fn prop_lru_access_tracking(capacity in 2usize..10, touch in 0usize..100) {
        let mut cache = LruCache::new(capacity).unwrap();
        for key in 0..capacity {
            cache.put(key, key);
        }

        let touched = touch % capacity;
        cache.get(&touched);
        cache.put(capacity, capacity);

        prop_assert!(cache.contains(&touched), "touched key {} was evicted", touched);
        let expected_victim = if touched == 0 { 1 } else { 0 };
        prop_assert!(!cache.contains(&expected_victim));
    }
}
