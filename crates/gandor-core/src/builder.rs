//! Deterministic construction of the canonical Gandor world.
//!
//! The overworld is 60 rooms (IDs 1..=60) wired edge by edge; wiring is not
//! guaranteed symmetric, and some edges are intentionally one-way (the
//! crevice squeeze 48 -> 49, the climb-down rope at the campsite). The Black
//! Castle is a separate four-room sub-graph (IDs 101..=104) reachable only
//! through the key gate on room 29's western door, with a return exit from
//! its entry hall back to room 29.
//!
//! Every call builds an independent graph; a session builds exactly once and
//! owns the result.

use crate::enemy::Enemy;
use crate::item::Item;
use crate::riddle::Riddle;
use crate::room::{Room, RoomId};
use crate::world::{ConsumeRule, KeyGate, WorldGraph};

/// The forest clearing where every session starts.
pub const START: RoomId = RoomId(1);
/// The golem-guarded door room where the castle gate stands.
pub const CASTLE_GATE: RoomId = RoomId(29);
/// Entry hall of the Black Castle, the inner sanctum.
pub const CASTLE_ENTRY: RoomId = RoomId(101);
/// The key item the castle gate demands, by exact name.
pub const CASTLE_KEY: &str = "Emerald Key";

/// Build the complete world graph: overworld, castle, gates, and rules.
pub fn build_world() -> WorldGraph {
    let mut graph = WorldGraph::new(START);
    overworld_rooms(&mut graph);
    castle_rooms(&mut graph);
    place_items(&mut graph);
    wire_overworld(&mut graph);
    wire_castle(&mut graph);

    graph.add_key_gate(KeyGate {
        room: CASTLE_GATE,
        direction: "west".into(),
        key: CASTLE_KEY.into(),
        destination: CASTLE_ENTRY,
        refusal: "A massive black-iron door bars your path. An emerald-shaped \
                  slot glows faintly. You need the Emerald Key."
            .into(),
        success: "The emerald key hums in your hand. The door unlocks and \
                  swings open. You step into the Black Castle..."
            .into(),
    });

    // The heavy metal door in room 6 ruins any blade used to pry it.
    graph.add_consume_rule(ConsumeRule {
        room: RoomId(6),
        item: "Rusty Dagger".into(),
        message: "You strike the heavy metal door with your Rusty Dagger.\n\
                  The blade snaps in two. It is useless now."
            .into(),
    });

    graph
}

fn add(graph: &mut WorldGraph, room: Room) {
    graph.insert_room(room);
}

fn room(id: u32, description: &str) -> Room {
    Room::new(RoomId(id), description)
}

fn overworld_rooms(g: &mut WorldGraph) {
    add(g, room(1, "You stand in a quiet forest clearing. The way behind is blocked by dense trees. A single path leads north."));
    add(g, room(2, "You step north into a mossy forest. Sunlight filters through thick branches. The air smells damp. The path splits, leading north and west."));
    add(g, room(3, "The northern path ends at a muddy cliff. You can attempt to climb, but without shoes a fall is deadly.").with_climb(true, false));
    add(g, room(4, "Atop the cliff you find a small campsite with some still usable items scattered about. The clearing offers a distant view of an ominous castle. The only path leads back the way you came; you can climb down using the rope at the campsite."));
    add(g, room(5, "Heading west, the vegetation thickens. The wind rustles in the leaves, but nothing is visible. The trail continues west."));
    add(g, room(6, "You close in on a clearing and see a big metal and wood door with a rusty keyhole. The door leads north, and a path runs west. Even if you tried, the door does not look movable."));
    add(g, room(7, "A stone wall features a mural depicting a great battle. Something small glimmers within. Paths lead north and east.").with_riddle(Riddle::new("What do you use to pry the glimmering square?", "rusty dagger")));
    add(g, room(8, "A small clearing opens up, and you find a pile of burnt clothes with something shimmering atop it."));
    add(g, room(9, "Brush and barbed wire fill the area. A single apple hangs in the brush, tangled in the wire."));
    add(g, room(10, "Past the unlocked door is a long corridor. At the end a clearing opens up, the path continuing north. To the east you see a climbable hill, steeper than anything you have faced before."));
    add(g, room(11, "A goblin is here. You hide in a bush to decide what to do. The path west is blocked by the goblin; another path leads north.").with_enemy(Enemy::new("Goblin", 12, 3)));
    add(g, room(12, "A clearing with butterflies drifting lazily. It is quite beautiful. The path continues north."));
    add(g, room(13, "A rock wall blocks the way. There is an inscription: 'What has an eye but cannot see?'").with_riddle(Riddle::new("What has an eye but cannot see?", "needle")));
    add(g, room(14, "After climbing the treacherous hill you make it to the top. The castle stands much clearer than before. Paths continue north and west."));
    add(g, room(15, "A GOBLIN JUMPS OUT FROM THE SHADOWS! If you hesitate too long, you will give him the upper hand. There is no way out other than the way you came.").with_enemy(Enemy::new("Goblin", 16, 4)));
    add(g, room(16, "Dense forest under light rain. Paths lead south, east, north, and west."));
    add(g, room(17, "There is a small clearing. A mural among the flowers gives you chills."));
    add(g, room(18, "A harmless slime crawls toward you. You think he looks friendly enough."));
    add(g, room(19, "More dense forest. Paths lead west, south, and east."));
    add(g, room(20, "A long-dead campfire. A skeleton rests beside a small sack."));
    add(g, room(21, "A goblin spots you with wide eyes and darts east. Paths continue east and north."));
    add(g, room(22, "A path stretches long with murky waters on either side, swamp-like and dreary. Watch where you plant your feet. The path continues north."));
    add(g, room(23, "A large battle-hardened goblin stands before you. You need to defeat him to pass. He seems slow, as long as you finish it quickly.").with_enemy(Enemy::new("Hardened Goblin", 20, 5)));
    add(g, room(24, "Swampy ground underfoot. Paths lead east, west, and south."));
    add(g, room(25, "A small chest is hidden in the brush."));
    add(g, room(26, "A crooked hut in the swamp. Eerie music and cackling seep through the window. An old lady stirs a pot inside."));
    add(g, room(27, "A clearing. To the south sprawls a goblin camp; the goblin you chased earlier sprints toward its gate. Only a path south."));
    add(g, room(28, "GOBLIN CAMP. Small but fortified, its entrance guarded by three goblins."));
    add(g, room(29, "Two golems flank a massive western door. Solve their riddle and present the proper key to pass. Fighting is pointless.").with_riddle(Riddle::new("One of us tells the truth and the other lies. Which of us lies?", "nord")));
    add(g, room(30, "A clearing with a path south."));
    add(g, room(31, "A steep, climbable hill. From the top you spot the menacing castle to the west and a secret northwest path.").with_climb(true, false));
    add(g, room(32, "Dense forest. A path heads north, and a narrow track slips east."));
    add(g, room(33, "An intersection of forest trails. Paths branch east and west."));
    add(g, room(34, "A quiet lane. A path runs south."));
    add(g, room(35, "A stone formation resembling a jigsaw with one piece missing. Completing it would reveal a mural.").with_riddle(Riddle::new("What completes the puzzle?", "piece")));
    add(g, room(36, "A narrow trail with a path north."));
    add(g, room(37, "A secret path opens into a small clearing. You hear rustling to the south. Paths lead east, north, and south."));
    add(g, room(38, "A goblin holds prisoners with his back turned. Act fast to save them!"));
    add(g, room(39, "The path ends at rock. A glimmer hides a tiny chest."));
    add(g, room(40, "A cliff edge with a rusted knight's remains. Only a steel helmet survived."));
    add(g, room(41, "A goblin patrols here. With a black robe you could sneak by. A path continues north."));
    add(g, room(42, "A broad clearing. Paths lead east and west."));
    add(g, room(43, "A goblin guards this area. Fight for a ruby, or sneak by with the black robe. A path continues north."));
    add(g, room(44, "A chest bears a riddle: 'I am born in fear, raised in truth, and come to my own in deed.'").with_riddle(Riddle::new("I am born in fear, raised in truth, and come to my own in deed. What am I?", "courage")));
    add(g, room(45, "A climbable southern face. It needs climbing shoes and a grappling hook. A path also leads north.").with_climb(true, true));
    add(g, room(46, "Atop the rise. You cannot go back the way you came. Paths lead north and west."));
    add(g, room(47, "A small rock holds a platinum sword embedded within. It stirs only for the worthy."));
    add(g, room(48, "Thick brush conceals a tight crevice to the east. Between two rocks lies a pair of steel gauntlets."));
    add(g, room(49, "A northern track continues. Behind you, the crevice you squeezed through is far too narrow to go back."));
    add(g, room(50, "Paths lead north and east."));
    add(g, room(51, "A peaceful flower garden. If you sit for a while, you might notice something hidden."));
    add(g, room(52, "A crossroads: west leads toward a barren canyon; paths also run north and east."));
    add(g, room(53, "A skittish goblin is here. He might befriend you, or drop a ruby if slain."));
    add(g, room(54, "A mural with a recess sized for a ruby."));
    add(g, room(55, "The Dragon's Den: a vast scorched crater. A black-and-red dragon sleeps amid the embers.").with_enemy(Enemy::new("Leif, the Dragon", 200, 20)));
    add(g, room(56, "A lone staff rests here. Perhaps someone wise could reveal its power."));
    add(g, room(57, "Southward ascent, section one. Any climbing shoes will do here.").with_climb(true, false));
    add(g, room(58, "Section two of the climb. A path runs west to a cliff; further south requires shoes and a grappling hook.").with_climb(true, true));
    add(g, room(59, "A high cliff. The castle looms to the south. A pair of binoculars lies nearby."));
    add(g, room(60, "The mountain top overlooks the crater to the north and the castle to the south. With binoculars you could spot a staircase into the castle."));
}

fn castle_rooms(g: &mut WorldGraph) {
    add(g, room(101, "BLACK CASTLE, Level 1: You step through the emerald door into a vast candlelit hall. A chandelier glows above a grand table overflowing with fruit and bread, yet it feels wrong. A massive stone golem blocks the staircase to the north.").with_riddle(Riddle::new("What must you keep when you give it away?", "your word")));
    add(g, room(102, "The Stone Golem towers before the staircase, its eyes gleaming faintly with runes. You sense you can either answer riddles... or fight.").with_enemy(Enemy::new("Stone Golem", 120, 15)));
    add(g, room(103, "BLACK CASTLE, Level 2: A high walkway encircles the dining hall below. Vines creep along the walls. As you turn toward the next level, roots writhe and merge into a giant living tree!").with_enemy(Enemy::new("Twisted Tree Guardian", 180, 22)));
    add(g, room(104, "BLACK CASTLE, Level 3: A grand altar rests in the center of the final chamber, engraved with the sigil of Gandor. A colossal shadow gathers above it: the Spectral Titan!").with_enemy(Enemy::new("Spectral Titan", 250, 30)));
}

fn place(g: &mut WorldGraph, id: u32, item: Item) {
    g.room_mut(RoomId(id))
        .expect("room declared before item placement")
        .add_item(item);
}

fn place_items(g: &mut WorldGraph) {
    place(g, 4, Item::weapon("Rusty Dagger", "A small, pitted dagger. Might pry things loose.", 6));
    place(g, 4, Item::armor("Leather Armour", "Thin leather armor.", 2));
    place(g, 4, Item::armor("Fur Gauntlets", "Warm, fuzzy gauntlets.", 1));
    place(g, 8, Item::new("Rusty Key", "An old key with a corroded bit."));
    place(g, 9, Item::new("Apple", "A crisp red apple."));
    place(g, 15, Item::new("Needle", "A small needle. Seems important."));
    place(g, 15, Item::new("Red Ruby", "A bright red gemstone."));
    place(g, 20, Item::new("Climbing Shoes", "Shoes suitable for climbing."));
    place(g, 20, Item::potion("Healing Draught", "A cloudy bottle from the skeleton's sack.", 30));
    place(g, 23, Item::new("Arrows x5", "A small bundle of arrows."));
    place(g, 23, Item::new("Broken Bow", "A bow with a snapped limb."));
    place(g, 25, Item::new("Glowing Red Orb", "It pulses faintly with inner light."));
    place(g, 25, Item::new("Bone Key", "A key carved from bone."));
    place(g, 25, Item::new("Ruby", "A small red gem."));
    place(g, 25, Item::new("Ruby", "A small red gem."));
    place(g, 28, Item::new("World Map", "Records your explored paths."));
    place(g, 28, Item::new("Fireproof Underpants", "Remarkably heat resistant."));
    for _ in 0..5 {
        place(g, 28, Item::new("Ruby", "A small red gem."));
    }
    place(g, 28, Item::new("Stone Key", "A heavy key carved of stone."));
    place(g, 40, Item::armor("Steel Helmet", "Sturdy and polished despite its age.", 4));
    place(g, 43, Item::new("Ruby", "A small red gem."));
    place(g, 44, Item::new("Jigsaw Piece", "A stone puzzle piece. Seems important."));
    place(g, 48, Item::armor("Steel Gauntlets", "Heavy gauntlets of steel.", 5));
    place(g, 51, Item::new("Climbing Shoes", "Another pair, hidden among flowers."));
    place(g, 55, Item::new(CASTLE_KEY, "A gleaming green key."));
    place(g, 55, Item::armor("Royal Cape", "A regal cape that billows dramatically.", 1));
    place(g, 55, Item::new("Dragon Horn", "A horn to summon the dragon. One use."));
    place(g, 56, Item::weapon("Fire Staff", "A staff that spits fire. Rumored one-time use.", 999));
    place(g, 59, Item::new("Binoculars", "You can see very far with these."));

    // Castle rewards.
    place(g, 101, Item::new("Note", "The golem rumbles: 'What must you keep when you give it away?'"));
    place(g, 102, Item::new("Goblet of Gandor", "A relic that radiates ancient power."));
    place(g, 102, Item::new("Poisonous Darts", "Small, deadly darts coated with venom."));
    place(g, 103, Item::new("Silver Necklace", "A cursed trinket best left untouched."));
    place(g, 103, Item::potion("Healing Draught", "Left behind by a braver soul.", 30));
    place(g, 104, Item::armor("Steel Armour", "Heavy armor fit for a champion.", 8));
    place(g, 104, Item::armor("Royal Cape", "A flowing cape of nobility.", 2));
    place(g, 104, Item::new(CASTLE_KEY, "A symbol of triumph. Opens the castle door from within."));
}

fn exit(g: &mut WorldGraph, from: u32, direction: &str, to: u32) {
    g.room_mut(RoomId(from))
        .expect("room declared before exit wiring")
        .set_exit(direction, RoomId(to));
}

fn wire_overworld(g: &mut WorldGraph) {
    // Early region (1-10).
    exit(g, 1, "north", 2);
    exit(g, 2, "south", 1);
    exit(g, 2, "north", 3);
    exit(g, 2, "west", 5);
    exit(g, 3, "south", 2);
    exit(g, 3, "north", 4);
    exit(g, 4, "south", 3); // the campsite rope, climb-down only
    exit(g, 5, "east", 2);
    exit(g, 5, "west", 6);
    exit(g, 6, "east", 5);
    exit(g, 6, "west", 7);
    exit(g, 6, "north", 10); // behind the rusty-keyed door
    exit(g, 29, "west", 101); // castle door; the key gate intercepts this edge
    exit(g, 7, "east", 6);
    exit(g, 7, "north", 8);
    exit(g, 7, "west", 7); // mural wall; placeholder self-loop, no real exit
    exit(g, 8, "south", 7);
    exit(g, 8, "north", 9);
    exit(g, 9, "south", 8);
    exit(g, 10, "south", 6);
    exit(g, 10, "north", 11);
    exit(g, 10, "east", 14); // the climb up to the hilltop
    exit(g, 14, "west", 10);

    // Mid forest (11-21).
    exit(g, 11, "south", 10);
    exit(g, 11, "north", 12);
    exit(g, 12, "south", 11);
    exit(g, 12, "north", 13);
    exit(g, 13, "south", 12);
    exit(g, 14, "west", 11); // overwrites the earlier west -> 10; last write wins
    exit(g, 11, "east", 14);
    exit(g, 14, "north", 15);
    exit(g, 15, "south", 14);
    exit(g, 11, "east", 16); // overwrites east -> 14; last write wins
    exit(g, 16, "west", 11);
    exit(g, 16, "south", 17);
    exit(g, 16, "east", 19);
    exit(g, 16, "north", 18);
    exit(g, 17, "north", 16);
    exit(g, 18, "south", 16);
    exit(g, 19, "west", 16);
    exit(g, 19, "south", 20);
    exit(g, 19, "east", 21);
    exit(g, 20, "north", 19);
    exit(g, 21, "west", 19);
    exit(g, 21, "east", 27);
    exit(g, 21, "north", 22);

    // Swamp strip (22-26).
    exit(g, 22, "south", 21);
    exit(g, 22, "north", 23);
    exit(g, 23, "south", 22);
    exit(g, 23, "east", 24);
    exit(g, 24, "west", 23);
    exit(g, 24, "south", 26);
    exit(g, 24, "east", 25);
    exit(g, 25, "west", 24);
    exit(g, 26, "north", 24);

    // Goblin camp branch (27-31).
    exit(g, 27, "south", 28);
    exit(g, 27, "west", 21);
    exit(g, 28, "north", 27);
    exit(g, 29, "south", 13);
    exit(g, 29, "east", 30);
    exit(g, 30, "west", 29);
    exit(g, 30, "south", 31);
    exit(g, 31, "north", 30);

    // Secret path area (32-40).
    exit(g, 29, "north", 32);
    exit(g, 32, "south", 29);
    exit(g, 32, "north", 33);
    exit(g, 32, "east", 37);
    exit(g, 33, "south", 32);
    exit(g, 33, "east", 36);
    exit(g, 33, "west", 34);
    exit(g, 34, "north", 33);
    exit(g, 34, "south", 35);
    exit(g, 35, "north", 34);
    exit(g, 36, "north", 41);
    exit(g, 36, "south", 33);
    exit(g, 37, "east", 39);
    exit(g, 37, "north", 40);
    exit(g, 37, "south", 38);
    exit(g, 37, "west", 32);
    exit(g, 38, "north", 37);
    exit(g, 39, "west", 37);
    exit(g, 40, "south", 37);

    // Robe and sneak arc (41-48).
    exit(g, 41, "south", 36);
    exit(g, 41, "north", 42);
    exit(g, 42, "west", 45);
    exit(g, 42, "east", 43);
    exit(g, 42, "south", 41);
    exit(g, 43, "west", 42);
    exit(g, 43, "north", 44);
    exit(g, 44, "south", 43);
    exit(g, 45, "north", 42);
    exit(g, 45, "south", 46);
    exit(g, 46, "north", 45);
    exit(g, 46, "west", 47);
    exit(g, 46, "east", 48);
    exit(g, 47, "east", 46);
    exit(g, 48, "west", 46);
    exit(g, 48, "east", 49); // one-way squeeze; 49 has no west edge back

    // Cliff and garden arc (49-60).
    exit(g, 49, "north", 50);
    exit(g, 50, "south", 49);
    exit(g, 50, "east", 51);
    exit(g, 50, "north", 52);
    exit(g, 51, "west", 50);
    exit(g, 52, "south", 50);
    exit(g, 52, "east", 54);
    exit(g, 52, "north", 53);
    exit(g, 52, "west", 55);
    exit(g, 53, "south", 52);
    exit(g, 54, "west", 52);
    exit(g, 55, "east", 52);
    exit(g, 55, "west", 56);
    exit(g, 55, "south", 57); // downward climb sequence
    exit(g, 56, "east", 55);
    exit(g, 57, "north", 55);
    exit(g, 57, "south", 58);
    exit(g, 58, "north", 57);
    exit(g, 58, "west", 59);
    exit(g, 58, "south", 60);
    exit(g, 59, "east", 58);
    exit(g, 60, "north", 58);
}

fn wire_castle(g: &mut WorldGraph) {
    exit(g, 101, "north", 102);
    exit(g, 101, "south", 29); // the return door back to the golem gate
    exit(g, 102, "south", 101);
    exit(g, 102, "north", 103);
    exit(g, 103, "south", 102);
    exit(g, 103, "north", 104);
    exit(g, 104, "south", 103);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_world_validates() {
        let world = build_world();
        assert!(world.validate().is_ok());
    }

    #[test]
    fn room_counts() {
        let world = build_world();
        assert_eq!(world.len(), 64);
        assert_eq!(world.start(), START);
        assert!(world.room(CASTLE_ENTRY).is_ok());
    }

    #[test]
    fn duplicate_exit_registrations_resolve_to_last_write() {
        let world = build_world();
        let hilltop = world.room(RoomId(14)).unwrap();
        assert_eq!(hilltop.exit("west"), Some(RoomId(11)));
        let goblin_path = world.room(RoomId(11)).unwrap();
        assert_eq!(goblin_path.exit("east"), Some(RoomId(16)));
    }

    #[test]
    fn squeeze_passage_is_one_way() {
        let world = build_world();
        assert_eq!(world.room(RoomId(48)).unwrap().exit("east"), Some(RoomId(49)));
        assert_eq!(world.room(RoomId(49)).unwrap().exit("west"), None);
    }

    #[test]
    fn mural_wall_self_loop_is_preserved() {
        let world = build_world();
        assert_eq!(world.room(RoomId(7)).unwrap().exit("west"), Some(RoomId(7)));
    }

    #[test]
    fn castle_gate_requires_emerald_key() {
        let world = build_world();
        let gate = world.key_gate(CASTLE_GATE, "west").unwrap();
        assert_eq!(gate.key, CASTLE_KEY);
        assert_eq!(gate.destination, CASTLE_ENTRY);
    }

    #[test]
    fn castle_returns_to_gate_room() {
        let world = build_world();
        let entry = world.room(CASTLE_ENTRY).unwrap();
        assert_eq!(entry.exit("south"), Some(CASTLE_GATE));
        assert_eq!(entry.exit("north"), Some(RoomId(102)));
    }

    #[test]
    fn dagger_breaks_on_room_six_door() {
        let world = build_world();
        let rule = world.consume_rule(RoomId(6), "rusty dagger").unwrap();
        assert!(rule.message.contains("snaps"));
    }

    #[test]
    fn capability_placement_matches_design() {
        let world = build_world();

        let goblin = world.room(RoomId(11)).unwrap().enemy().unwrap();
        assert_eq!((goblin.health(), goblin.damage), (12, 3));

        let dragon = world.room(RoomId(55)).unwrap().enemy().unwrap();
        assert_eq!(dragon.name, "Leif, the Dragon");

        let wall = world.room(RoomId(13)).unwrap().riddle().unwrap();
        assert!(wall.riddle.check("Needle"));

        let cliff = world.room(RoomId(3)).unwrap().climb().unwrap();
        assert!(cliff.needs_footwear);
        assert!(!cliff.needs_hook);

        let face = world.room(RoomId(45)).unwrap().climb().unwrap();
        assert!(face.needs_footwear && face.needs_hook);
    }

    #[test]
    fn two_independent_graphs() {
        let mut first = build_world();
        let second = build_world();
        first.room_mut(RoomId(9)).unwrap().take_item("Apple").unwrap();
        assert!(second.room(RoomId(9)).unwrap().find_item("Apple").is_some());
    }

    #[test]
    fn every_exit_label_is_cardinal() {
        let world = build_world();
        for room in world.rooms() {
            for label in room.exit_labels() {
                assert!(matches!(label, "north" | "south" | "east" | "west"));
            }
        }
    }
}
