use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::room::{Room, RoomId};

/// A movement precondition attached to one exit: passing through requires a
/// named key item in inventory, and success relocates the mover to a fixed
/// destination (typically the inner sanctum's entry) instead of the normally
/// wired target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyGate {
    /// The room the gate is anchored to.
    pub room: RoomId,
    /// The gated direction label (lower case).
    pub direction: String,
    /// Exact name of the required key item.
    pub key: String,
    /// Where a successful pass relocates the mover.
    pub destination: RoomId,
    /// Narrative refusal when the key is missing. No damage, no relocation.
    pub refusal: String,
    /// Narrative line shown when the gate opens.
    pub success: String,
}

/// A declarative one-shot consumption rule: using a specific item in a
/// specific room destroys the item permanently. Data, not a hard-coded
/// branch, so new room/item interactions are a table row away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumeRule {
    /// The room where the rule applies.
    pub room: RoomId,
    /// The item name the rule applies to (matched case-insensitively).
    pub item: String,
    /// Narrative outcome of the interaction.
    pub message: String,
}

/// The world graph: every room, the distinguished start room, and the
/// declarative gating rule tables.
///
/// A graph is built once per session and owned by it; sessions never share
/// rooms, since room and enemy mutation is destructive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldGraph {
    rooms: BTreeMap<RoomId, Room>,
    start: RoomId,
    key_gates: Vec<KeyGate>,
    consume_rules: Vec<ConsumeRule>,
}

impl WorldGraph {
    /// Create an empty graph with the given start room ID.
    pub fn new(start: RoomId) -> Self {
        Self {
            rooms: BTreeMap::new(),
            start,
            key_gates: Vec::new(),
            consume_rules: Vec::new(),
        }
    }

    /// The distinguished start room.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Insert a room. Inserting the same ID twice replaces the earlier room
    /// (the builder declares each room exactly once; [`Self::validate`] is
    /// the integrity check, not insertion).
    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    /// Look up a room by ID.
    pub fn room(&self, id: RoomId) -> WorldResult<&Room> {
        self.rooms.get(&id).ok_or(WorldError::RoomNotFound(id))
    }

    /// Look up a room mutably by ID.
    pub fn room_mut(&mut self, id: RoomId) -> WorldResult<&mut Room> {
        self.rooms.get_mut(&id).ok_or(WorldError::RoomNotFound(id))
    }

    /// Iterate all rooms in ID order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms in the graph.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// True if the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Register a key gate.
    pub fn add_key_gate(&mut self, gate: KeyGate) {
        self.key_gates.push(gate);
    }

    /// Register a one-shot consumption rule.
    pub fn add_consume_rule(&mut self, rule: ConsumeRule) {
        self.consume_rules.push(rule);
    }

    /// The key gate anchored to `room` in `direction`, if any.
    pub fn key_gate(&self, room: RoomId, direction: &str) -> Option<&KeyGate> {
        self.key_gates
            .iter()
            .find(|g| g.room == room && g.direction.eq_ignore_ascii_case(direction.trim()))
    }

    /// The consumption rule for using `item` in `room`, if any.
    pub fn consume_rule(&self, room: RoomId, item: &str) -> Option<&ConsumeRule> {
        self.consume_rules
            .iter()
            .find(|r| r.room == room && r.item.eq_ignore_ascii_case(item.trim()))
    }

    /// Check graph integrity: the start room exists, every exit target
    /// exists, and every gate references existing rooms. Self-loop exits are
    /// accepted as deliberate placeholders.
    pub fn validate(&self) -> WorldResult<()> {
        if !self.rooms.contains_key(&self.start) {
            return Err(WorldError::RoomNotFound(self.start));
        }
        for room in self.rooms.values() {
            for (direction, target) in room.exits() {
                if !self.rooms.contains_key(&target) {
                    return Err(WorldError::DanglingExit {
                        from: room.id,
                        direction: direction.to_string(),
                        target,
                    });
                }
            }
        }
        for gate in &self.key_gates {
            for id in [gate.room, gate.destination] {
                if !self.rooms.contains_key(&id) {
                    return Err(WorldError::DanglingGate {
                        room: gate.room,
                        direction: gate.direction.clone(),
                        target: id,
                    });
                }
            }
        }
        Ok(())
    }

    /// Total number of items currently placed in rooms.
    pub fn item_count(&self) -> usize {
        self.rooms.values().map(|r| r.items().len()).sum()
    }

    /// Total number of declared exits.
    pub fn exit_count(&self) -> usize {
        self.rooms.values().map(|r| r.exits().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_graph() -> WorldGraph {
        let mut graph = WorldGraph::new(RoomId(1));
        let mut a = Room::new(RoomId(1), "Room one.");
        a.set_exit("north", RoomId(2));
        let mut b = Room::new(RoomId(2), "Room two.");
        b.set_exit("south", RoomId(1));
        graph.insert_room(a);
        graph.insert_room(b);
        graph
    }

    #[test]
    fn validate_accepts_wired_graph() {
        assert!(two_room_graph().validate().is_ok());
    }

    #[test]
    fn validate_rejects_dangling_exit() {
        let mut graph = two_room_graph();
        graph
            .room_mut(RoomId(2))
            .unwrap()
            .set_exit("east", RoomId(99));
        let err = graph.validate().unwrap_err();
        assert!(matches!(
            err,
            WorldError::DanglingExit {
                target: RoomId(99),
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_missing_start() {
        let graph = WorldGraph::new(RoomId(1));
        assert!(matches!(
            graph.validate(),
            Err(WorldError::RoomNotFound(RoomId(1)))
        ));
    }

    #[test]
    fn validate_accepts_self_loop() {
        let mut graph = two_room_graph();
        graph
            .room_mut(RoomId(1))
            .unwrap()
            .set_exit("west", RoomId(1));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn validate_rejects_dangling_gate() {
        let mut graph = two_room_graph();
        graph.add_key_gate(KeyGate {
            room: RoomId(1),
            direction: "west".into(),
            key: "Emerald Key".into(),
            destination: RoomId(42),
            refusal: "Locked.".into(),
            success: "It opens.".into(),
        });
        assert!(matches!(
            graph.validate(),
            Err(WorldError::DanglingGate { .. })
        ));
    }

    #[test]
    fn serializes_to_json_with_numeric_room_keys() {
        let graph = two_room_graph();
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["start"], 1);
        assert!(json["rooms"]["1"]["description"].is_string());
        assert_eq!(json["rooms"]["1"]["exits"]["north"], 2);
    }

    #[test]
    fn gate_and_rule_lookup() {
        let mut graph = two_room_graph();
        graph.add_key_gate(KeyGate {
            room: RoomId(1),
            direction: "west".into(),
            key: "Emerald Key".into(),
            destination: RoomId(2),
            refusal: "Locked.".into(),
            success: "It opens.".into(),
        });
        graph.add_consume_rule(ConsumeRule {
            room: RoomId(1),
            item: "Rusty Dagger".into(),
            message: "The blade snaps.".into(),
        });

        assert!(graph.key_gate(RoomId(1), "WEST").is_some());
        assert!(graph.key_gate(RoomId(1), "east").is_none());
        assert!(graph.key_gate(RoomId(2), "west").is_none());
        assert!(graph.consume_rule(RoomId(1), "rusty dagger").is_some());
        assert!(graph.consume_rule(RoomId(2), "rusty dagger").is_none());
    }
}
