//! Configuration Module
//!
//! Handles loading replay settings from environment variables.

use std::env;

/// Replay configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest capacity a script may request
    pub max_capacity: usize,
    /// Pretty-print the JSON report
    pub pretty_output: bool,
    /// Include cache statistics in the report
    pub include_stats: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_MAX_CAPACITY` - Maximum scripted capacity (default: 1000000)
    /// - `REPLAY_PRETTY` - Pretty-print the report (default: false)
    /// - `REPLAY_INCLUDE_STATS` - Include stats in the report (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_capacity: env::var("LRU_MAX_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_capacity),
            pretty_output: env::var("REPLAY_PRETTY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.pretty_output),
            include_stats: env::var("REPLAY_INCLUDE_STATS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.include_stats),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_capacity: 1_000_000,
            pretty_output: false,
            include_stats: true,
        }
    }
}

/// Accepts the usual spellings of a boolean switch.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
