use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when manipulating a world graph.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested room ID does not exist in the graph.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// An exit points at a room ID that does not exist in the graph.
    #[error("dangling exit: {from} \"{direction}\" leads to missing {target}")]
    DanglingExit {
        /// The room the exit was declared on.
        from: RoomId,
        /// The exit's direction label.
        direction: String,
        /// The missing target room.
        target: RoomId,
    },

    /// A key gate references a room or destination that does not exist.
    #[error("gate at {room} \"{direction}\" references missing {target}")]
    DanglingGate {
        /// The room the gate is attached to.
        room: RoomId,
        /// The gated direction label.
        direction: String,
        /// The missing room (gate anchor or destination).
        target: RoomId,
    },
}
