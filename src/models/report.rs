//! Replay report DTOs
//!
//! Defines the JSON document printed after a script has been replayed.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::error::Result;

/// Outcome of one replayed operation.
///
/// A `get` miss serializes as `"value": null`, never as a sentinel number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepOutcome {
    Construct { capacity: usize },
    Put { key: i64, value: i64 },
    Get { key: i64, value: Option<i64> },
}

/// Cache statistics as reported after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub updates: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<&CacheStats> for StatsSummary {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            inserts: stats.inserts,
            updates: stats.updates,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Full replay report.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsSummary>,
}

impl ReplayReport {
    /// Results of every `get`, in script order.
    pub fn get_results(&self) -> Vec<Option<i64>> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                StepOutcome::Get { value, .. } => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Serializes the report, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}
