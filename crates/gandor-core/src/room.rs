use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enemy::Enemy;
use crate::item::Item;
use crate::riddle::Riddle;

/// Identifier for a room in the world graph.
///
/// IDs are small and deterministic: the overworld uses 1..=60 and the inner
/// sanctum its own range above 100.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.0)
    }
}

/// Gear required to move into a climb-gated room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbRequirement {
    /// Whether climbing footwear is required.
    pub needs_footwear: bool,
    /// Whether a grappling hook is required.
    pub needs_hook: bool,
}

impl ClimbRequirement {
    /// True if the given gear satisfies this requirement.
    pub fn satisfied_by(&self, has_footwear: bool, has_hook: bool) -> bool {
        (!self.needs_footwear || has_footwear) && (!self.needs_hook || has_hook)
    }
}

/// A riddle plus its per-session solved flag. Once solved, a riddle stays
/// solved; there is no re-locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiddleState {
    /// The riddle itself.
    pub riddle: Riddle,
    /// Whether the riddle has been solved this session.
    pub solved: bool,
}

impl RiddleState {
    /// Wrap an unsolved riddle.
    pub fn new(riddle: Riddle) -> Self {
        Self {
            riddle,
            solved: false,
        }
    }

    /// Check an attempt, marking the riddle solved on success. Returns
    /// whether this attempt was correct.
    pub fn attempt(&mut self, answer: &str) -> bool {
        let correct = self.riddle.check(answer);
        if correct {
            self.solved = true;
        }
        correct
    }
}

/// A node in the world graph.
///
/// Every room has a description, labeled exits, and an item list. Optional
/// capability fields replace a subclass hierarchy: a room may additionally
/// hold a live enemy, a riddle, or a climb requirement. The capability shape
/// is fixed at construction; only its state changes (an enemy dies, a riddle
/// is solved, items are taken).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// This room's ID.
    pub id: RoomId,
    /// Narrative description shown on entry and on `look`.
    pub description: String,
    exits: HashMap<String, RoomId>,
    items: Vec<Item>,
    enemy: Option<Enemy>,
    riddle: Option<RiddleState>,
    climb: Option<ClimbRequirement>,
}

impl Room {
    /// Create a plain room with no capabilities.
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            exits: HashMap::new(),
            items: Vec::new(),
            enemy: None,
            riddle: None,
            climb: None,
        }
    }

    /// Attach a live enemy (combat capability).
    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemy = Some(enemy);
        self
    }

    /// Attach a riddle (puzzle capability).
    pub fn with_riddle(mut self, riddle: Riddle) -> Self {
        self.riddle = Some(RiddleState::new(riddle));
        self
    }

    /// Attach a climb requirement (terrain capability).
    pub fn with_climb(mut self, needs_footwear: bool, needs_hook: bool) -> Self {
        self.climb = Some(ClimbRequirement {
            needs_footwear,
            needs_hook,
        });
        self
    }

    /// Register an exit. Labels are stored lower-cased; registering the same
    /// label twice silently overwrites (last write wins). A self-referential
    /// exit is a deliberate "no real exit" placeholder, not an error.
    pub fn set_exit(&mut self, direction: impl Into<String>, target: RoomId) {
        self.exits.insert(direction.into().to_lowercase(), target);
    }

    /// Look up an exit by label, case-insensitively.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(&direction.trim().to_lowercase()).copied()
    }

    /// All exits as (label, target) pairs.
    pub fn exits(&self) -> impl Iterator<Item = (&str, RoomId)> {
        self.exits.iter().map(|(d, &t)| (d.as_str(), t))
    }

    /// Exit labels in alphabetical order, for stable rendering.
    pub fn exit_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.exits.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Place an item in the room.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Items present, in discovery order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by case-insensitive name without removing it.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.matches(name))
    }

    /// Remove and return an item by case-insensitive name. This is the
    /// pickup half of the atomic room-to-inventory move.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.matches(name))?;
        Some(self.items.remove(index))
    }

    /// The room's enemy, if one is present (alive or not yet detached).
    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// Mutable access to the room's enemy.
    pub fn enemy_mut(&mut self) -> Option<&mut Enemy> {
        self.enemy.as_mut()
    }

    /// Detach the enemy from the room. Called when it dies; the room
    /// permanently loses its combat target.
    pub fn remove_enemy(&mut self) -> Option<Enemy> {
        self.enemy.take()
    }

    /// The room's riddle state, if it carries one.
    pub fn riddle(&self) -> Option<&RiddleState> {
        self.riddle.as_ref()
    }

    /// Mutable access to the room's riddle state.
    pub fn riddle_mut(&mut self) -> Option<&mut RiddleState> {
        self.riddle.as_mut()
    }

    /// The room's climb requirement, if it carries one.
    pub fn climb(&self) -> Option<ClimbRequirement> {
        self.climb
    }
}
