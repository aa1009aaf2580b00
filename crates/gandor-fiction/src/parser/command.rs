//! Command parsing for player input.

/// Direction for movement commands. The world wires exits on the four
/// cardinal labels only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Parse a direction from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move in a cardinal direction.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Look at the current room.
    Look,
    /// Pick up an item from the current room.
    Take {
        /// The item name.
        item: String,
    },
    /// Use an item from inventory (equips gear, drinks potions).
    Use {
        /// The item name.
        item: String,
    },
    /// Stop wearing or wielding an item.
    Unequip {
        /// The item name.
        item: String,
    },
    /// Show currently worn and wielded gear.
    Gear,
    /// Attack the enemy in the current room.
    Attack,
    /// Answer the current room's riddle.
    Solve {
        /// The submitted answer.
        answer: String,
    },
    /// List inventory.
    Inventory,
    /// Report current health.
    Health,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "walk", "head", "climb", "travel"];
const LOOK_VERBS: &[&str] = &["look", "l", "examine", "x", "describe"];
const TAKE_VERBS: &[&str] = &["take", "get", "pick", "grab"];
const USE_VERBS: &[&str] = &["use", "equip", "wear", "wield", "drink", "apply"];
const UNEQUIP_VERBS: &[&str] = &["unequip", "remove", "doff"];
const GEAR_VERBS: &[&str] = &["gear", "equipment", "worn"];
const ATTACK_VERBS: &[&str] = &["attack", "fight", "hit", "strike", "kill"];
const SOLVE_VERBS: &[&str] = &["solve", "answer", "guess", "say"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i", "items"];
const HEALTH_VERBS: &[&str] = &["health", "hp", "status"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit", "bye"];

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    // Bare direction shorthand.
    if let Some(dir) = Direction::parse(&verb) {
        return Command::Move { direction: dir };
    }

    if MOVE_VERBS.contains(&verb.as_str()) {
        return parse_move(input, rest);
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return Command::Look;
    }
    if TAKE_VERBS.contains(&verb.as_str()) {
        return parse_take(rest);
    }
    if USE_VERBS.contains(&verb.as_str()) {
        return parse_arg(rest, "use what?", |item| Command::Use { item });
    }
    if UNEQUIP_VERBS.contains(&verb.as_str()) {
        return parse_arg(rest, "unequip what?", |item| Command::Unequip { item });
    }
    if GEAR_VERBS.contains(&verb.as_str()) {
        return Command::Gear;
    }
    if ATTACK_VERBS.contains(&verb.as_str()) {
        return Command::Attack;
    }
    if SOLVE_VERBS.contains(&verb.as_str()) {
        return parse_arg(rest, "answer what?", |answer| Command::Solve { answer });
    }
    if INVENTORY_VERBS.contains(&verb.as_str()) {
        return Command::Inventory;
    }
    if HEALTH_VERBS.contains(&verb.as_str()) {
        return Command::Health;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_move(input: &str, rest: &[&str]) -> Command {
    match rest.first().and_then(|w| Direction::parse(w)) {
        Some(dir) => Command::Move { direction: dir },
        None => Command::Unknown {
            input: input.to_string(),
        },
    }
}

fn parse_take(rest: &[&str]) -> Command {
    // Skip "up" if present (pick up).
    let item_words = match rest.first() {
        Some(w) if w.eq_ignore_ascii_case("up") => &rest[1..],
        _ => rest,
    };

    parse_arg(item_words, "take what?", |item| Command::Take { item })
}

fn parse_arg(rest: &[&str], empty_hint: &str, make: impl FnOnce(String) -> Command) -> Command {
    if rest.is_empty() {
        Command::Unknown {
            input: empty_hint.to_string(),
        }
    } else {
        make(rest.join(" "))
    }
}
