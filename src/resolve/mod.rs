//! Resolution driver: pick attacker and defenders from the roster and compute every
//! (attacker weapon × defender) pairing.

use crate::combat::{accuracy, damage, repeated_attack_status, RepeatedAttack};
use crate::config::{CalcConfig, DefenderWeaponPolicy};
use crate::error::{CalcError, ResolutionDump, Result};
use crate::model::{primary_weapon, usable_weapons, Armory, GameUnit, GameUnits};
use serde::Serialize;

/// Forecast for one attacker weapon against one defender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub weapon: String,
    pub attacker_accuracy: i32,
    pub attacker_damage: i32,
    pub repeated_attack: RepeatedAttack,
    /// Damage the defender deals back with its primary weapon.
    pub defender_damage: i32,
    /// Defender's hit chance against the attacker holding `weapon`.
    pub defender_accuracy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefenderReport {
    pub defender: String,
    pub defender_weapon: String,
    pub pairings: Vec<Pairing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DefenderOutcome {
    Engaged(DefenderReport),
    Unarmed { defender: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleReport {
    pub attacker: String,
    pub attacker_weapons: Vec<String>,
    pub outcomes: Vec<DefenderOutcome>,
}

impl BattleReport {
    /// First defender whose weapon list resolved to nothing.
    pub fn first_unarmed(&self) -> Option<&str> {
        self.outcomes.iter().find_map(|o| match o {
            DefenderOutcome::Unarmed { defender } => Some(defender.as_str()),
            DefenderOutcome::Engaged(_) => None,
        })
    }

    /// Turn an unarmed defender into the run's terminal error.
    pub fn into_result(self) -> Result<BattleReport> {
        match self.first_unarmed() {
            Some(defender) => Err(CalcError::UnresolvedWeapon {
                defender: defender.to_string(),
            }),
            None => Ok(self),
        }
    }
}

/// Split CLI unit names into attacker and defenders. Needs at least two names.
pub fn split_names(names: &[String]) -> Result<(&str, &[String])> {
    match names.split_first() {
        Some((attacker, defenders)) if !defenders.is_empty() => Ok((attacker.as_str(), defenders)),
        _ => Err(CalcError::InvalidArguments(format!(
            "expected an attacker and at least one defender, got {} unit name(s)",
            names.len()
        ))),
    }
}

/// Resolve `attacker_name` and `defender_names` against the roster and compute every pairing.
///
/// Fails with `UnresolvedEntity` before any combat math if a name is missing or the attacker
/// has no usable weapon. Unarmed defenders are recorded in the report; with
/// `DefenderWeaponPolicy::Abort` nothing after the first one is computed.
pub fn resolve_battle(
    roster: &GameUnits,
    armory: &Armory,
    attacker_name: &str,
    defender_names: &[String],
    cfg: &CalcConfig,
) -> Result<BattleReport> {
    if defender_names.is_empty() {
        return Err(CalcError::InvalidArguments(
            "at least one defender is required".to_string(),
        ));
    }
    cfg.check_terrain_bonuses().map_err(CalcError::InvalidArguments)?;

    let attacker = roster.find(attacker_name);
    let mut defenders: Vec<&GameUnit> = Vec::with_capacity(defender_names.len());
    let mut missing = Vec::new();
    if attacker.is_none() {
        missing.push(attacker_name.to_string());
    }
    for name in defender_names {
        match roster.find(name) {
            Some(u) => defenders.push(u),
            None => missing.push(name.clone()),
        }
    }
    let attacker_weapons = attacker
        .map(|a| usable_weapons(a, armory))
        .unwrap_or_default();

    let attacker = match attacker {
        Some(a) if missing.is_empty() && !attacker_weapons.is_empty() => a,
        _ => {
            return Err(CalcError::UnresolvedEntity(ResolutionDump {
                attacker: attacker.map(|a| a.name.clone()),
                attacker_weapons: attacker_weapons.iter().map(|w| w.name.clone()).collect(),
                defenders: defenders.iter().map(|d| d.name.clone()).collect(),
                missing,
            }));
        }
    };
    tracing::debug!(
        "attacker {} with {} usable weapon(s) vs {} defender(s)",
        attacker.name,
        attacker_weapons.len(),
        defenders.len()
    );

    let mut outcomes = Vec::with_capacity(defenders.len());
    for defender in defenders {
        let Some(defender_weapon) = primary_weapon(defender, armory) else {
            tracing::warn!("no weapon in the armory for defender {}", defender.name);
            outcomes.push(DefenderOutcome::Unarmed {
                defender: defender.name.clone(),
            });
            match cfg.defender_weapon_policy {
                DefenderWeaponPolicy::Abort => break,
                DefenderWeaponPolicy::Skip => continue,
            }
        };
        let pairings = attacker_weapons
            .iter()
            .map(|w| Pairing {
                weapon: w.name.clone(),
                attacker_accuracy: accuracy(
                    attacker,
                    w,
                    defender,
                    defender_weapon,
                    cfg.defender_terrain_bonus,
                ),
                attacker_damage: damage(attacker, w, defender),
                repeated_attack: repeated_attack_status(attacker, w, defender, defender_weapon),
                defender_damage: damage(defender, defender_weapon, attacker),
                defender_accuracy: accuracy(
                    defender,
                    defender_weapon,
                    attacker,
                    w,
                    cfg.attacker_terrain_bonus,
                ),
            })
            .collect();
        outcomes.push(DefenderOutcome::Engaged(DefenderReport {
            defender: defender.name.clone(),
            defender_weapon: defender_weapon.name.clone(),
            pairings,
        }));
    }

    Ok(BattleReport {
        attacker: attacker.name.clone(),
        attacker_weapons: attacker_weapons.iter().map(|w| w.name.clone()).collect(),
        outcomes,
    })
}
