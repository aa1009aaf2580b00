//! Interactive fiction engine for Gandor.
//!
//! Provides the command surface a presentation layer (CLI, GUI, or test
//! harness) drives: verb/argument parsing, player state, and the
//! [`GameSession`] command processor that reads and mutates the world graph
//! one synchronous turn at a time. Player-level failures ("you can't go that
//! way") are narrative outcome strings, never errors; errors are reserved
//! for world integrity violations.

/// Error types for the game engine.
pub mod error;
/// Command parsing and item name suggestions.
pub mod parser;
/// Player state management.
pub mod player;
/// The game session command processor.
pub mod session;

pub use error::{GameError, GameResult};
pub use parser::{Command, Direction, parse_command};
pub use player::PlayerState;
pub use session::GameSession;
