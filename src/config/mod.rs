//! Configuration: defaults, input bounds, and the per-run calculator config.

use std::path::PathBuf;

/// Maximum size in bytes for a single units or weapons data file.
pub const MAX_DATA_FILE_BYTES: usize = 2 * 1024 * 1024;

/// Largest absolute value accepted for any unit or weapon stat (keeps the i32 math far from overflow).
pub const MAX_STAT_MAGNITUDE: i32 = 10_000;

/// Might multiplier applied when the defender's unit type is in the weapon's effectiveness list.
pub const EFFECTIVE_MIGHT_MULTIPLIER: i32 = 3;

/// Largest absolute terrain bonus accepted for either side.
pub const MAX_TERRAIN_BONUS: i32 = MAX_STAT_MAGNITUDE;

pub const DEFAULT_UNITS_FILE: &str = "units.toml";
pub const DEFAULT_WEAPONS_FILE: &str = "weapons.toml";

/// What to do when a defender has no weapon that resolves in the armory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefenderWeaponPolicy {
    /// Stop at the first unarmed defender; later defenders are not computed.
    #[default]
    Abort,
    /// Report the unarmed defender and keep going with the rest.
    Skip,
}

#[derive(Debug, Clone)]
pub struct CalcConfig {
    /// Roster file (TOML, JSON or YAML).
    pub units_file: PathBuf,
    /// Armory file (TOML, JSON or YAML).
    pub weapons_file: PathBuf,
    /// Evasion bonus of the tile the attacker stands on (applies to the defenders' return accuracy).
    pub attacker_terrain_bonus: i32,
    /// Evasion bonus of the tile the defenders stand on (applies to the attacker's accuracy).
    pub defender_terrain_bonus: i32,
    pub defender_weapon_policy: DefenderWeaponPolicy,
}

impl CalcConfig {
    pub fn new(units_file: PathBuf, weapons_file: PathBuf) -> Self {
        Self {
            units_file,
            weapons_file,
            attacker_terrain_bonus: 0,
            defender_terrain_bonus: 0,
            defender_weapon_policy: DefenderWeaponPolicy::Abort,
        }
    }

    /// Both terrain bonuses within `MAX_TERRAIN_BONUS`.
    pub fn check_terrain_bonuses(&self) -> Result<(), String> {
        for (side, bonus) in [
            ("attacker", self.attacker_terrain_bonus),
            ("defender", self.defender_terrain_bonus),
        ] {
            if bonus.unsigned_abs() > MAX_TERRAIN_BONUS.unsigned_abs() {
                return Err(format!(
                    "{} terrain bonus {} is out of range (max magnitude {})",
                    side, bonus, MAX_TERRAIN_BONUS
                ));
            }
        }
        Ok(())
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_UNITS_FILE),
            PathBuf::from(DEFAULT_WEAPONS_FILE),
        )
    }
}
