//! Script and report models for the replay harness
//!
//! This module defines the DTOs read from and written to JSON by `lru_replay`.

pub mod report;
pub mod script;

// Re-export commonly used types
pub use report::{ReplayReport, StatsSummary, StepOutcome};
pub use script::{Command, ParsedScript, ReplayScript};
