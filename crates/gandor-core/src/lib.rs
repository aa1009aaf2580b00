//! Core types for the Gandor world engine: items, enemies, riddles, rooms,
//! and the world graph.
//!
//! This crate defines the data model and the deterministic world builder.
//! It knows nothing about command parsing or presentation — you can construct
//! a [`WorldGraph`] programmatically or build the canonical Gandor world with
//! [`builder::build_world`].

/// Deterministic construction of the canonical Gandor world.
pub mod builder;
/// Enemies that occupy combat-capable rooms.
pub mod enemy;
/// Error types used throughout the crate.
pub mod error;
/// Items, equipment, and consumables.
pub mod item;
/// Riddles guarding puzzle-gated rooms.
pub mod riddle;
/// Rooms and their optional capabilities.
pub mod room;
/// The world graph that owns all rooms and gating rules.
pub mod world;

/// Re-export enemy types.
pub use enemy::Enemy;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item types.
pub use item::{Item, ItemKind};
/// Re-export riddle types.
pub use riddle::Riddle;
/// Re-export room types.
pub use room::{ClimbRequirement, RiddleState, Room, RoomId};
/// Re-export world graph types.
pub use world::{ConsumeRule, KeyGate, WorldGraph};
