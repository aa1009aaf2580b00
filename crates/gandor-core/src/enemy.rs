use serde::{Deserialize, Serialize};

/// A hostile creature occupying a combat-capable room.
///
/// An enemy is owned exclusively by the room that spawned it and is removed
/// from the room when its health reaches 0. Dead enemies never respawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    /// Remaining health. Never negative.
    health: i32,
    /// Fixed damage dealt when retaliating.
    pub damage: i32,
}

impl Enemy {
    /// Create a new enemy.
    pub fn new(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            health: health.max(0),
            damage,
        }
    }

    /// Remaining health, floored at 0.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Apply damage, clamping health at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// An enemy is alive exactly while its health is above 0.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
