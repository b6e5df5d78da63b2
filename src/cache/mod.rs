//! Cache Module
//!
//! Fixed-capacity LRU cache backed by a slot arena, plus its statistics and
//! an optional mutex-guarded handle for shared use.

mod lru;
mod shared;
mod slot;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use lru::{Iter, LruCache};
pub use shared::SharedLruCache;
pub use stats::CacheStats;
