//! Replay script DTOs
//!
//! A script is the pair of parallel lists used by puzzle judges to drive a
//! class-based solution: operation names and their argument lists.
//!
//! ```json
//! { "operations": ["LRUCache", "put", "get"], "arguments": [[2], [1, 1], [1]] }
//! ```

use serde::Deserialize;

use crate::error::{LruError, Result};

/// Operation name that constructs the cache.
pub const CONSTRUCT_OP: &str = "LRUCache";
/// Operation name for `put(key, value)`.
pub const PUT_OP: &str = "put";
/// Operation name for `get(key)`.
pub const GET_OP: &str = "get";

/// Deserialized replay script.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    /// Operation names, in order
    #[serde(alias = "ops")]
    pub operations: Vec<String>,
    /// One argument list per operation
    #[serde(alias = "args")]
    pub arguments: Vec<Vec<i64>>,
}

/// A single typed cache operation parsed from a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Put { key: i64, value: i64 },
    Get { key: i64 },
}

/// A validated script: the constructor's capacity and the operations after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScript {
    /// Capacity requested by the leading constructor, not yet range-checked
    pub capacity: i64,
    pub commands: Vec<Command>,
}

impl ReplayScript {
    /// Parses a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Checks the overall shape of the script.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.operations.is_empty() {
            return Some("Script has no operations".to_string());
        }
        if self.operations.len() != self.arguments.len() {
            return Some(format!(
                "Script has {} operations but {} argument lists",
                self.operations.len(),
                self.arguments.len()
            ));
        }
        if self.operations[0] != CONSTRUCT_OP {
            return Some(format!(
                "First operation must be {}, found '{}'",
                CONSTRUCT_OP, self.operations[0]
            ));
        }
        None
    }

    /// Validates the script and converts it into typed commands.
    pub fn parse(&self) -> Result<ParsedScript> {
        if let Some(msg) = self.validate() {
            return Err(LruError::InvalidScript(msg));
        }

        let capacity = match self.arguments[0].as_slice() {
            &[capacity] => capacity,
            args => {
                return Err(LruError::InvalidScript(format!(
                    "Step 0: '{}' called with {} argument(s)",
                    CONSTRUCT_OP,
                    args.len()
                )))
            }
        };

        let commands = self
            .operations
            .iter()
            .zip(&self.arguments)
            .enumerate()
            .skip(1)
            .map(|(step, (op, args))| parse_command(step, op, args))
            .collect::<Result<Vec<_>>>()?;

        Ok(ParsedScript { capacity, commands })
    }
}

fn parse_command(step: usize, op: &str, args: &[i64]) -> Result<Command> {
    let command = match (op, args) {
        (PUT_OP, &[key, value]) => Command::Put { key, value },
        (GET_OP, &[key]) => Command::Get { key },
        (CONSTRUCT_OP, _) => {
            return Err(LruError::InvalidScript(format!(
                "Step {}: {} may only appear as the first operation",
                step, CONSTRUCT_OP
            )))
        }
        (PUT_OP, _) | (GET_OP, _) => {
            return Err(LruError::InvalidScript(format!(
                "Step {}: '{}' called with {} argument(s)",
                step,
                op,
                args.len()
            )))
        }
        _ => {
            return Err(LruError::InvalidScript(format!(
                "Step {}: unknown operation '{}'",
                step, op
            )))
        }
    };
    Ok(command)
}
