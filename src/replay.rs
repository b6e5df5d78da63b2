//! Script Replay
//!
//! Executes a parsed [`ReplayScript`] against a fresh [`LruCache`] and records
//! the outcome of every step.

use tracing::{debug, info};

use crate::cache::LruCache;
use crate::config::Config;
use crate::error::{LruError, Result};
use crate::models::{Command, ReplayReport, ReplayScript, StatsSummary, StepOutcome};

/// Replays `script` and returns the per-step report.
///
/// # Errors
/// Fails before touching any cache when the script is malformed, or when the
/// requested capacity is below 1 or above `config.max_capacity`.
pub fn replay(script: &ReplayScript, config: &Config) -> Result<ReplayReport> {
    let parsed = script.parse()?;

    let capacity = checked_capacity(parsed.capacity, config.max_capacity)?;
    let mut cache: LruCache<i64, i64> = LruCache::new(capacity)?;
    info!(capacity, steps = parsed.commands.len() + 1, "Replaying script");

    let mut steps = Vec::with_capacity(parsed.commands.len() + 1);
    steps.push(StepOutcome::Construct { capacity });

    for command in parsed.commands {
        let outcome = match command {
            Command::Put { key, value } => {
                cache.put(key, value);
                StepOutcome::Put { key, value }
            }
            Command::Get { key } => {
                let value = cache.get(&key).copied();
                StepOutcome::Get { key, value }
            }
        };
        debug!(?outcome, "step replayed");
        steps.push(outcome);
    }

    let stats = cache.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        "Replay finished"
    );

    Ok(ReplayReport {
        steps,
        stats: config.include_stats.then(|| StatsSummary::from(&stats)),
    })
}

/// Converts a scripted capacity into a usable one.
fn checked_capacity(requested: i64, max: usize) -> Result<usize> {
    if requested < 1 {
        return Err(LruError::InvalidCapacity(requested));
    }
    match usize::try_from(requested) {
        Ok(capacity) if capacity <= max => Ok(capacity),
        _ => Err(LruError::CapacityTooLarge { requested, max }),
    }
}
