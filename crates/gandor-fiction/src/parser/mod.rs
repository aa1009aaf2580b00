//! Command parsing and item name suggestions.

/// Command grammar: verbs, directions, and the input parser.
pub mod command;
/// Fuzzy name suggestions for failed lookups.
pub mod resolver;

pub use command::{Command, Direction, parse_command};
pub use resolver::suggest_name;
