//! Error types for the game engine.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game session.
///
/// These are integrity failures, not gameplay outcomes: a blocked door or a
/// missing item produces a narrative `Ok` string, while a reference to a
/// room that does not exist in the graph is a `GameError`.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input could not be parsed into a known verb.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The world graph is inconsistent (missing room, dangling exit).
    #[error(transparent)]
    World(#[from] gandor_core::WorldError),
}
