//! Unit and weapon model: armory, roster, and the per-unit capability queries.

mod queries;

pub use queries::{attack_speed, primary_weapon, usable_weapons};
use serde::Deserialize;
use std::collections::BTreeSet;

/// A weapon definition from the armory file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub name: String,
    /// Base power.
    pub might: i32,
    /// Subtracted from the wielder's speed to get attack speed.
    pub weight: i32,
    /// Base accuracy.
    pub hit: i32,
    /// Unit types that take tripled might from this weapon.
    #[serde(default)]
    pub effective_against: BTreeSet<String>,
    /// Magic weapons hit resistance and are evaded with luck.
    #[serde(default)]
    pub magic: bool,
}

impl Weapon {
    /// True when `unit_type` is set and listed in this weapon's effectiveness tags.
    pub fn is_effective_against(&self, unit_type: Option<&str>) -> bool {
        unit_type
            .map(|t| self.effective_against.contains(t))
            .unwrap_or(false)
    }

    pub fn stats(&self) -> [(&'static str, i32); 3] {
        [
            ("might", self.might),
            ("weight", self.weight),
            ("hit", self.hit),
        ]
    }
}

/// Weapon catalog. Order is declaration order; names are expected to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Armory {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

impl Armory {
    /// First weapon with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }
}

/// A unit definition from the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUnit {
    pub name: String,
    pub hp: i32,
    pub strength: i32,
    pub skill: i32,
    pub speed: i32,
    pub luck: i32,
    pub defense: i32,
    pub resistance: i32,
    /// Carried through from the data file; not used by the combat math.
    pub weapon_level: i32,
    /// Tag such as "cavalry" or "flier", matched against weapon effectiveness.
    #[serde(default)]
    pub unit_type: Option<String>,
    /// Weapon names, resolved against the armory on demand. May name unknown weapons.
    #[serde(default)]
    pub weapons: Vec<String>,
}

impl GameUnit {
    /// All integer stats with their on-disk names, for bounds checks.
    pub fn stats(&self) -> [(&'static str, i32); 8] {
        [
            ("hp", self.hp),
            ("strength", self.strength),
            ("skill", self.skill),
            ("speed", self.speed),
            ("luck", self.luck),
            ("defense", self.defense),
            ("resistance", self.resistance),
            ("weaponLevel", self.weapon_level),
        ]
    }
}

/// The unit roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameUnits {
    #[serde(default)]
    pub units: Vec<GameUnit>,
}

impl GameUnits {
    /// First unit with exactly this name (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&GameUnit> {
        self.units.iter().find(|u| u.name == name)
    }
}

/// Names that occur more than once, each reported once, in first-seen order.
pub fn duplicate_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut dups = Vec::new();
    for n in names {
        if !seen.insert(n) && !dups.iter().any(|d: &String| d == n) {
            dups.push(n.to_string());
        }
    }
    dups
}
