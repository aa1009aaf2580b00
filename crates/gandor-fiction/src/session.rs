//! The game session command processor.

use gandor_core::{ItemKind, WorldGraph, builder};

use crate::error::{GameError, GameResult};
use crate::parser::{Command, Direction, parse_command, suggest_name};
use crate::player::PlayerState;

/// Health lost when attempting a climb without the required gear. The failed
/// climb is the one failure with a side effect; the player stays put.
pub const FALL_DAMAGE: i32 = 20;

/// A single-player game session: one owned world graph plus the player.
///
/// Every verb runs to completion synchronously, reading and mutating the
/// world and player before returning a narrative string. The caller decides
/// what to do when health reaches 0; the session never force-terminates.
pub struct GameSession {
    world: WorldGraph,
    player: PlayerState,
}

impl GameSession {
    /// Start a session on the canonical Gandor world.
    pub fn new() -> GameResult<Self> {
        Self::with_world(builder::build_world())
    }

    /// Start a session on a caller-supplied world. The graph is validated
    /// first; the player begins at its start room.
    pub fn with_world(world: WorldGraph) -> GameResult<Self> {
        world.validate()?;
        let player = PlayerState::new(world.start());
        Ok(Self { world, player })
    }

    /// The session's world.
    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable access to the player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Current player health. Presentation layers should check this after
    /// each mutating call to decide whether the game is over.
    pub fn health(&self) -> i32 {
        self.player.health()
    }

    /// Process a raw input line and return a response.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        match command {
            Command::Move { direction } => self.do_move(direction),
            Command::Look => self.look(),
            Command::Take { item } => self.do_take(&item),
            Command::Use { item } => self.do_use(&item),
            Command::Unequip { item } => self.do_unequip(&item),
            Command::Gear => self.do_gear(),
            Command::Attack => self.do_attack(),
            Command::Solve { answer } => self.do_solve(&answer),
            Command::Inventory => self.do_inventory(),
            Command::Health => Ok(format!("Health: {}/100", self.player.health())),
            Command::Help => Ok(self.do_help()),
            Command::Quit => Ok("Farewell, wanderer.".to_string()),
            Command::Unknown { input } => Err(GameError::UnknownCommand(input)),
        }
    }

    /// Describe the current room: description, item names, exit labels.
    pub fn look(&self) -> GameResult<String> {
        let room = self.world.room(self.player.room)?;
        let mut output = room.description.clone();

        if !room.items().is_empty() {
            let names: Vec<&str> = room.items().iter().map(|i| i.name.as_str()).collect();
            output.push_str(&format!("\n\nItems here: {}", names.join(", ")));
        }

        let exits = room.exit_labels();
        if !exits.is_empty() {
            output.push_str(&format!("\n\nExits: {}", exits.join(", ")));
        }

        Ok(output)
    }

    fn do_move(&mut self, direction: Direction) -> GameResult<String> {
        let here = self.player.room;

        // A key gate intercepts its edge before the normal wiring applies.
        if let Some(gate) = self.world.key_gate(here, direction.name()) {
            if !self.player.has_item(&gate.key) {
                return Ok(gate.refusal.clone());
            }
            let destination = gate.destination;
            let opening = gate.success.clone();
            self.player.room = destination;
            return Ok(format!("{opening}\n\n{}", self.look()?));
        }

        let Some(target) = self.world.room(here)?.exit(direction.name()) else {
            return Ok("You can't go that way.".to_string());
        };

        // Terrain gate: an unmet climb requirement hurts and blocks the move.
        if let Some(requirement) = self.world.room(target)?.climb() {
            let equipped_ok = requirement
                .satisfied_by(self.player.has_climb_footwear(), self.player.has_grappling_hook());
            if !equipped_ok {
                self.player.take_damage(FALL_DAMAGE);
                return Ok(format!(
                    "You try to climb but lack the proper gear. You slip and take \
                     {FALL_DAMAGE} damage. (HP: {})",
                    self.player.health()
                ));
            }
        }

        self.player.room = target;
        self.look()
    }

    fn do_take(&mut self, name: &str) -> GameResult<String> {
        let room = self.world.room_mut(self.player.room)?;
        match room.take_item(name) {
            Some(item) => {
                let item_name = item.name.clone();
                self.player.add_item(item);
                Ok(format!("You pick up the {item_name}."))
            }
            None => {
                let hint = suggest_name(name, room.items().iter().map(|i| i.name.as_str()))
                    .map(|s| format!(" Did you mean '{s}'?"))
                    .unwrap_or_default();
                Ok(format!("There is no '{name}' here.{hint}"))
            }
        }
    }

    fn do_use(&mut self, name: &str) -> GameResult<String> {
        let Some(item) = self.player.find_item(name) else {
            let hint = suggest_name(name, self.player.inventory().iter().map(|i| i.name.as_str()))
                .map(|s| format!(" Did you mean '{s}'?"))
                .unwrap_or_default();
            return Ok(format!("You don't have '{name}'.{hint}"));
        };
        let item_name = item.name.clone();
        let kind = item.kind;

        // Room-specific one-shot interactions destroy the item outright.
        if let Some(rule) = self.world.consume_rule(self.player.room, &item_name) {
            let message = rule.message.clone();
            self.player.remove_item(&item_name);
            self.player.unequip(&item_name);
            return Ok(message);
        }

        match kind {
            ItemKind::Potion { heal } => {
                self.player.remove_item(&item_name);
                self.player.heal(heal);
                Ok(format!(
                    "You drink the {item_name} and feel restored. (HP: {})",
                    self.player.health()
                ))
            }
            ItemKind::Weapon { .. } => {
                self.player.equip_weapon(item_name.clone());
                Ok(format!("{item_name} equipped."))
            }
            ItemKind::Armor { .. } => {
                self.player.equip_armor(item_name.clone());
                Ok(format!("{item_name} equipped."))
            }
            ItemKind::Trinket => {
                self.player.equip_name(item_name.clone());
                Ok(format!("{item_name} equipped."))
            }
        }
    }

    fn do_unequip(&mut self, name: &str) -> GameResult<String> {
        if self.player.unequip(name) {
            Ok(format!("You unequip {}.", name.trim()))
        } else {
            Ok(format!("You are not wearing or wielding '{}'.", name.trim()))
        }
    }

    fn do_gear(&self) -> GameResult<String> {
        let names: Vec<&str> = self.player.equipped_names().collect();
        if names.is_empty() {
            return Ok("You are not wearing or wielding anything.".to_string());
        }
        let mut output = "You are wearing/wielding:".to_string();
        for name in names {
            output.push_str(&format!("\n- {name}"));
        }
        Ok(output)
    }

    fn do_attack(&mut self) -> GameResult<String> {
        let strike = self.player.attack_damage();
        let room = self.world.room_mut(self.player.room)?;

        let Some(enemy) = room.enemy_mut().filter(|e| e.is_alive()) else {
            return Ok("There is nothing here to attack.".to_string());
        };

        enemy.take_damage(strike);
        let enemy_name = enemy.name.clone();
        let retaliation = enemy.damage;

        if !enemy.is_alive() {
            // A dead enemy is gone for good; the room keeps its drops.
            room.remove_enemy();
            return Ok(format!("You strike for {strike} and defeat the {enemy_name}!"));
        }

        self.player.take_damage(retaliation);
        let mut output = format!(
            "You strike for {strike}. The {enemy_name} hits back for {retaliation}. (HP: {})",
            self.player.health()
        );
        if !self.player.is_alive() {
            output.push_str("\nYou collapse. Your journey ends here.");
        }
        Ok(output)
    }

    fn do_solve(&mut self, answer: &str) -> GameResult<String> {
        let room = self.world.room_mut(self.player.room)?;
        let Some(state) = room.riddle_mut() else {
            return Ok("There is no puzzle to solve here.".to_string());
        };

        if state.attempt(answer) {
            let question = state.riddle.question().to_string();
            Ok(format!(
                "You solve the riddle: {question}\nA mechanism clicks somewhere."
            ))
        } else {
            Ok("That doesn't seem right.".to_string())
        }
    }

    fn do_inventory(&self) -> GameResult<String> {
        if self.player.inventory().is_empty() {
            return Ok("You are carrying nothing.".to_string());
        }
        let mut output = "You are carrying:".to_string();
        for item in self.player.inventory() {
            output.push_str(&format!("\n  - {} ({})", item.name, item.kind));
        }
        Ok(output)
    }

    fn do_help(&self) -> String {
        "Commands:\n\
         Movement: north, south, east, west (or n, s, e, w)\n\
         look - describe your surroundings\n\
         take <item> - pick up an item\n\
         use <item> - equip gear or drink a potion\n\
         unequip <item> - stop wearing or wielding an item\n\
         gear - show worn and wielded items\n\
         attack - fight the enemy in this room\n\
         answer <text> - answer a riddle\n\
         inventory (or i) - list what you are carrying\n\
         health - show your health\n\
         quit - end the session"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gandor_core::builder::{CASTLE_ENTRY, CASTLE_GATE, CASTLE_KEY};
    use gandor_core::{Enemy, Item, Riddle, Room, RoomId};

    fn session() -> GameSession {
        GameSession::new().unwrap()
    }

    /// A small bespoke world: a clearing with a goblin den north, a climb
    /// east, and a riddle wall south.
    fn test_world() -> WorldGraph {
        let mut world = WorldGraph::new(RoomId(1));

        let mut clearing = Room::new(RoomId(1), "A test clearing.");
        clearing.set_exit("north", RoomId(2));
        clearing.set_exit("east", RoomId(3));
        clearing.set_exit("south", RoomId(4));
        clearing.add_item(Item::potion("Healing Draught", "Cloudy.", 30));

        let mut den =
            Room::new(RoomId(2), "A goblin den.").with_enemy(Enemy::new("Goblin", 12, 3));
        den.set_exit("south", RoomId(1));

        let mut cliff = Room::new(RoomId(3), "A sheer cliff.").with_climb(true, true);
        cliff.set_exit("west", RoomId(1));

        let mut wall = Room::new(RoomId(4), "A rock wall.")
            .with_riddle(Riddle::new("What has an eye but cannot see?", "needle"));
        wall.set_exit("north", RoomId(1));

        world.insert_room(clearing);
        world.insert_room(den);
        world.insert_room(cliff);
        world.insert_room(wall);
        world
    }

    fn test_session() -> GameSession {
        GameSession::with_world(test_world()).unwrap()
    }

    #[test]
    fn look_shows_description_items_and_exits() {
        let s = test_session();
        let output = s.look().unwrap();
        assert!(output.contains("A test clearing."));
        assert!(output.contains("Items here: Healing Draught"));
        assert!(output.contains("Exits: east, north, south"));
    }

    #[test]
    fn move_north_twice_on_canonical_world() {
        let mut s = session();
        s.process("north").unwrap();
        assert_eq!(s.player().room, RoomId(2));
        // Room 3 is climb-gated, but the starting shoes satisfy it.
        let output = s.process("north").unwrap();
        assert_eq!(s.player().room, RoomId(3));
        assert!(output.contains("muddy cliff"));
        assert_eq!(s.health(), 100);
    }

    #[test]
    fn invalid_direction_does_not_move() {
        let mut s = test_session();
        let output = s.process("west").unwrap();
        assert_eq!(output, "You can't go that way.");
        assert_eq!(s.player().room, RoomId(1));
    }

    #[test]
    fn climb_without_gear_costs_twenty_and_blocks() {
        let mut s = test_session();
        // The cliff needs climbing footwear AND a hook; basic shoes are not
        // enough for the hook half.
        let output = s.process("east").unwrap();
        assert!(output.contains("20 damage"));
        assert_eq!(s.health(), 80);
        assert_eq!(s.player().room, RoomId(1));

        // Repeat attempts keep costing exactly 20, clamped at 0.
        for _ in 0..6 {
            s.process("east").unwrap();
        }
        assert_eq!(s.health(), 0);
        assert_eq!(s.player().room, RoomId(1));
    }

    #[test]
    fn climb_with_gear_moves_without_damage() {
        let mut s = test_session();
        s.player_mut().add_item(Item::new("Grappling Hook", "Iron."));
        s.process("use grappling hook").unwrap();
        let output = s.process("east").unwrap();
        assert!(output.contains("sheer cliff"));
        assert_eq!(s.player().room, RoomId(3));
        assert_eq!(s.health(), 100);
    }

    #[test]
    fn goblin_falls_in_four_baseline_strikes() {
        let mut s = test_session();
        s.process("north").unwrap();

        for _ in 0..3 {
            let output = s.process("attack").unwrap();
            assert!(output.contains("hits back for 3"));
        }
        // Three non-lethal hits retaliated for 3 each.
        assert_eq!(s.health(), 91);

        let output = s.process("attack").unwrap();
        assert!(output.contains("defeat the Goblin"));
        assert_eq!(s.health(), 91);
    }

    #[test]
    fn attack_with_no_target_is_a_no_op() {
        let mut s = test_session();
        let output = s.process("attack").unwrap();
        assert_eq!(output, "There is nothing here to attack.");

        // A defeated enemy never respawns.
        s.process("north").unwrap();
        for _ in 0..4 {
            s.process("attack").unwrap();
        }
        let output = s.process("attack").unwrap();
        assert_eq!(output, "There is nothing here to attack.");
    }

    #[test]
    fn equipped_weapon_raises_strike_damage() {
        let mut s = test_session();
        s.player_mut().add_item(Item::weapon("Rusty Dagger", "Pitted.", 6));
        s.process("use rusty dagger").unwrap();
        s.process("north").unwrap();
        let output = s.process("attack").unwrap();
        assert!(output.contains("strike for 6"));
    }

    #[test]
    fn pickup_is_an_atomic_move() {
        let mut s = test_session();
        let output = s.process("take healing draught").unwrap();
        assert!(output.contains("pick up the Healing Draught"));
        assert!(s.player().has_item("healing draught"));
        assert!(
            s.world()
                .room(RoomId(1))
                .unwrap()
                .find_item("healing draught")
                .is_none()
        );

        let output = s.process("take healing draught").unwrap();
        assert!(output.contains("There is no 'healing draught' here."));
    }

    #[test]
    fn failed_pickup_suggests_close_names() {
        let mut s = test_session();
        let output = s.process("take healing draugt").unwrap();
        assert!(output.contains("Did you mean 'Healing Draught'?"));
    }

    #[test]
    fn potion_heals_with_clamp_and_is_consumed() {
        let mut s = test_session();
        s.process("take healing draught").unwrap();
        s.player_mut().take_damage(20);
        let output = s.process("use healing draught").unwrap();
        assert!(output.contains("(HP: 100)"));
        assert_eq!(s.health(), 100);
        assert!(!s.player().has_item("healing draught"));
    }

    #[test]
    fn riddle_retries_never_lock() {
        let mut s = test_session();
        s.process("south").unwrap();

        assert_eq!(s.process("answer thread").unwrap(), "That doesn't seem right.");
        assert_eq!(s.process("answer rope").unwrap(), "That doesn't seem right.");
        let output = s.process("answer NEEDLE").unwrap();
        assert!(output.contains("You solve the riddle"));
        assert!(
            s.world()
                .room(RoomId(4))
                .unwrap()
                .riddle()
                .unwrap()
                .solved
        );
    }

    #[test]
    fn solve_without_a_puzzle() {
        let mut s = test_session();
        let output = s.process("answer needle").unwrap();
        assert_eq!(output, "There is no puzzle to solve here.");
    }

    #[test]
    fn castle_gate_refuses_without_key_then_opens() {
        let mut s = session();
        s.player_mut().room = CASTLE_GATE;

        let output = s.process("west").unwrap();
        assert!(output.contains("Emerald Key"));
        assert_eq!(s.player().room, CASTLE_GATE);
        assert_eq!(s.health(), 100);

        s.player_mut().add_item(Item::new(CASTLE_KEY, "Green."));
        let output = s.process("west").unwrap();
        assert_eq!(s.player().room, CASTLE_ENTRY);
        assert!(output.contains("Black Castle"));
    }

    #[test]
    fn dagger_breaks_on_the_room_six_door() {
        let mut s = session();
        s.player_mut()
            .add_item(Item::weapon("Rusty Dagger", "Pitted.", 6));
        let output = s.process("use rusty dagger").unwrap();
        assert!(output.contains("equipped"));

        s.player_mut().room = RoomId(6);
        let output = s.process("use rusty dagger").unwrap();
        assert!(output.contains("snaps in two"));
        assert!(!s.player().has_item("rusty dagger"));
        assert!(!s.player().is_equipped("rusty dagger"));
    }

    #[test]
    fn gear_and_unequip_round_trip() {
        let mut s = test_session();
        let output = s.process("gear").unwrap();
        assert!(output.contains("- Shoes"));

        let output = s.process("unequip shoes").unwrap();
        assert!(output.contains("You unequip shoes."));
        let output = s.process("gear").unwrap();
        assert!(output.contains("not wearing or wielding anything"));

        let output = s.process("unequip shoes").unwrap();
        assert!(output.contains("not wearing or wielding 'shoes'"));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut s = test_session();
        let err = s.process("dance wildly").unwrap_err();
        assert!(matches!(err, GameError::UnknownCommand(_)));
        // Errors never mutate state.
        assert_eq!(s.player().room, RoomId(1));
        assert_eq!(s.health(), 100);
    }

    #[test]
    fn canonical_world_session_starts_at_the_clearing() {
        let s = session();
        let output = s.look().unwrap();
        assert!(output.contains("quiet forest clearing"));
        assert!(output.contains("Exits: north"));
    }
}
