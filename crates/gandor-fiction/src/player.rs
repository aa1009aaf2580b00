//! Player state management.

use std::collections::BTreeSet;

use gandor_core::{Item, RoomId};

/// Maximum (and starting) player health. Health is clamped to [0, MAX].
pub const MAX_HEALTH: i32 = 100;
/// Damage dealt with bare hands, when no weapon is wielded.
pub const BASE_ATTACK: i32 = 3;

/// The player's state: health, position, inventory, and equipped gear.
///
/// Equipment is tracked two ways, deliberately: a set of equipped item
/// *names* (which generalizes to stat-less gear like shoes and hooks that
/// gate movement), plus single active weapon/armor slots used for combat
/// numbers.
#[derive(Debug, Clone)]
pub struct PlayerState {
    health: i32,
    /// The room the player currently occupies.
    pub room: RoomId,
    inventory: Vec<Item>,
    equipped: BTreeSet<String>,
    weapon: Option<String>,
    armor: Option<String>,
}

impl PlayerState {
    /// Create a player at the given room, with the starting basic shoes
    /// already owned and worn.
    pub fn new(room: RoomId) -> Self {
        let shoes = Item::new("Shoes", "Basic leather shoes, your starting gear.");
        let mut equipped = BTreeSet::new();
        equipped.insert(shoes.name.clone());
        Self {
            health: MAX_HEALTH,
            room,
            inventory: vec![shoes],
            equipped,
            weapon: None,
            armor: None,
        }
    }

    /// Current health, always within [0, [`MAX_HEALTH`]].
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Restore health, clamped at [`MAX_HEALTH`].
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount.max(0)).min(MAX_HEALTH);
    }

    /// Apply damage, clamped at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// The player is alive exactly while health is above 0.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Items owned, in acquisition order. Duplicate names are allowed.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Find an owned item by case-insensitive name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.matches(name))
    }

    /// True if an item with this name is owned.
    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    /// Remove and return one owned item by case-insensitive name.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|i| i.matches(name))?;
        Some(self.inventory.remove(index))
    }

    /// Mark an item name as worn/wielded, without touching the slots.
    pub fn equip_name(&mut self, name: impl Into<String>) {
        self.equipped.insert(name.into());
    }

    /// Wield a weapon: marks it equipped and makes it the active weapon.
    /// Re-equipping replaces the prior active weapon.
    pub fn equip_weapon(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.weapon = Some(name.clone());
        self.equipped.insert(name);
    }

    /// Wear armor: marks it equipped and makes it the active armor.
    pub fn equip_armor(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.armor = Some(name.clone());
        self.equipped.insert(name);
    }

    /// True if an item with this name is currently worn/wielded.
    pub fn is_equipped(&self, name: &str) -> bool {
        let name = name.trim();
        self.equipped.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Stop wearing/wielding by name. Clears the active weapon or armor slot
    /// if it held this item. Returns whether anything was equipped.
    pub fn unequip(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.equipped.len();
        self.equipped.retain(|n| !n.eq_ignore_ascii_case(name));
        if self.weapon.as_deref().is_some_and(|w| w.eq_ignore_ascii_case(name)) {
            self.weapon = None;
        }
        if self.armor.as_deref().is_some_and(|a| a.eq_ignore_ascii_case(name)) {
            self.armor = None;
        }
        self.equipped.len() != before
    }

    /// Names currently worn/wielded, in alphabetical order.
    pub fn equipped_names(&self) -> impl Iterator<Item = &str> {
        self.equipped.iter().map(String::as_str)
    }

    /// The active weapon's name, if one is wielded.
    pub fn active_weapon(&self) -> Option<&str> {
        self.weapon.as_deref()
    }

    /// The active armor's name, if one is worn.
    pub fn active_armor(&self) -> Option<&str> {
        self.armor.as_deref()
    }

    /// Damage dealt per strike: the active weapon's damage, or
    /// [`BASE_ATTACK`] unarmed.
    pub fn attack_damage(&self) -> i32 {
        self.weapon
            .as_deref()
            .and_then(|name| self.find_item(name))
            .and_then(|item| item.weapon_damage())
            .unwrap_or(BASE_ATTACK)
    }

    /// The active armor's defense value, or 0. Carried for display; combat
    /// does not subtract it from incoming damage.
    pub fn armor_defense(&self) -> i32 {
        self.armor
            .as_deref()
            .and_then(|name| self.find_item(name))
            .and_then(|item| item.armor_defense())
            .unwrap_or(0)
    }

    /// True if the equipped set satisfies a footwear climb requirement:
    /// either the starting basic shoes or any climbing-marked footwear.
    pub fn has_climb_footwear(&self) -> bool {
        self.equipped.iter().any(|n| {
            let lower = n.to_lowercase();
            lower == "shoes" || lower.contains("climbing")
        })
    }

    /// True if a grappling hook is equipped.
    pub fn has_grappling_hook(&self) -> bool {
        self.equipped
            .iter()
            .any(|n| n.to_lowercase().contains("grappling hook"))
    }
}
