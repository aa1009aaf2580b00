use std::fmt;

use serde::{Deserialize, Serialize};

/// What an item does when used. Stat-bearing kinds carry their stat inline;
/// plain gear (keys, shoes, hooks) is [`ItemKind::Trinket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// An item with no intrinsic stats. Keys, tools, and wearable gear that
    /// gates movement (shoes, grappling hooks) are trinkets; using one marks
    /// it equipped by name.
    Trinket,
    /// A weapon. Equipping it sets the wielder's attack value.
    Weapon {
        /// Damage dealt per strike.
        damage: i32,
    },
    /// A piece of armor. The defense value is carried on the item but is not
    /// subtracted from incoming damage in combat.
    Armor {
        /// Nominal defense value.
        defense: i32,
    },
    /// A potion, consumed on use.
    Potion {
        /// Health restored when drunk.
        heal: i32,
    },
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trinket => write!(f, "item"),
            Self::Weapon { .. } => write!(f, "weapon"),
            Self::Armor { .. } => write!(f, "armor"),
            Self::Potion { .. } => write!(f, "potion"),
        }
    }
}

/// A world object that can sit in a room or in the player's inventory.
///
/// Items have no lifecycle beyond creation and transfer between containers;
/// a pickup moves the item, it never copies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name. Lookups match it case-insensitively.
    pub name: String,
    /// Flavor text shown when examined.
    pub description: String,
    /// What the item does when used.
    pub kind: ItemKind,
}

impl Item {
    /// Create a plain item with no stats.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Trinket,
        }
    }

    /// Create a weapon with the given damage.
    pub fn weapon(name: impl Into<String>, description: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Weapon { damage },
        }
    }

    /// Create armor with the given defense value.
    pub fn armor(name: impl Into<String>, description: impl Into<String>, defense: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Armor { defense },
        }
    }

    /// Create a potion that heals the given amount when used.
    pub fn potion(name: impl Into<String>, description: impl Into<String>, heal: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Potion { heal },
        }
    }

    /// Case-insensitive name match.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Returns the weapon damage if this item is a weapon.
    pub fn weapon_damage(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Weapon { damage } => Some(damage),
            _ => None,
        }
    }

    /// Returns the armor defense if this item is armor.
    pub fn armor_defense(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Armor { defense } => Some(defense),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_is_case_insensitive() {
        let item = Item::new("Rusty Key", "An old key with a corroded bit.");
        assert!(item.matches("rusty key"));
        assert!(item.matches("RUSTY KEY"));
        assert!(item.matches("  Rusty Key  "));
        assert!(!item.matches("rusty"));
    }

    #[test]
    fn kind_accessors() {
        let dagger = Item::weapon("Rusty Dagger", "A small, pitted dagger.", 6);
        assert_eq!(dagger.weapon_damage(), Some(6));
        assert_eq!(dagger.armor_defense(), None);

        let helmet = Item::armor("Steel Helmet", "Sturdy and polished.", 4);
        assert_eq!(helmet.armor_defense(), Some(4));
        assert_eq!(helmet.weapon_damage(), None);

        let apple = Item::new("Apple", "A crisp red apple.");
        assert_eq!(apple.kind, ItemKind::Trinket);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ItemKind::Trinket.to_string(), "item");
        assert_eq!(ItemKind::Weapon { damage: 1 }.to_string(), "weapon");
        assert_eq!(ItemKind::Armor { defense: 1 }.to_string(), "armor");
        assert_eq!(ItemKind::Potion { heal: 1 }.to_string(), "potion");
    }
}
