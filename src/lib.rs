//! LRU Cache - a fixed-capacity least-recently-used cache
//!
//! Provides an arena-backed LRU cache with O(1) `get` and `put`, and a replay
//! harness that drives it from puzzle-style operation scripts.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod replay;

pub use cache::{CacheStats, LruCache, SharedLruCache};
pub use config::Config;
pub use error::{LruError, Result};
pub use replay::replay;
