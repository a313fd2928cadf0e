//! Combat formulas: damage, accuracy, and double-attack determination.
//!
//! All functions are pure. Results are not clamped; a negative damage or an
//! accuracy over 100 is passed through for the caller to interpret.

use crate::config::EFFECTIVE_MIGHT_MULTIPLIER;
use crate::model::{attack_speed, GameUnit, Weapon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether either side gets a second strike in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepeatedAttack {
    WillDoubleAttack,
    WillBeDoubleAttacked,
    NoDoubleAttack,
}

impl fmt::Display for RepeatedAttack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RepeatedAttack::WillDoubleAttack => "Will double attack",
            RepeatedAttack::WillBeDoubleAttacked => "Will be double attacked",
            RepeatedAttack::NoDoubleAttack => "No double attack",
        };
        f.write_str(s)
    }
}

/// Compare attack speeds. The attacker only doubles with a positive attack speed of its own;
/// being doubled depends on the difference alone. Equal speeds never double.
pub fn repeated_attack_status(
    attacker: &GameUnit,
    attacker_weapon: &Weapon,
    defender: &GameUnit,
    defender_weapon: &Weapon,
) -> RepeatedAttack {
    let own = attack_speed(attacker, attacker_weapon);
    let diff = own - attack_speed(defender, defender_weapon);
    if diff > 0 && own > 0 {
        RepeatedAttack::WillDoubleAttack
    } else if diff < 0 {
        RepeatedAttack::WillBeDoubleAttacked
    } else {
        RepeatedAttack::NoDoubleAttack
    }
}

/// Might multiplier of `weapon` against `defender`.
pub fn might_multiplier(weapon: &Weapon, defender: &GameUnit) -> i32 {
    if weapon.is_effective_against(defender.unit_type.as_deref()) {
        EFFECTIVE_MIGHT_MULTIPLIER
    } else {
        1
    }
}

/// Damage per hit. Magic ignores strength and is reduced by resistance; physical by defense.
pub fn damage(attacker: &GameUnit, weapon: &Weapon, defender: &GameUnit) -> i32 {
    let might = weapon.might * might_multiplier(weapon, defender);
    if weapon.magic {
        might - defender.resistance
    } else {
        attacker.strength + might - defender.defense
    }
}

/// Hit chance before display clamping. `defender_terrain_bonus` is the evasion bonus of the
/// tile the unit being attacked stands on; magic evasion uses luck and ignores terrain.
pub fn accuracy(
    attacker: &GameUnit,
    attacker_weapon: &Weapon,
    defender: &GameUnit,
    defender_weapon: &Weapon,
    defender_terrain_bonus: i32,
) -> i32 {
    let (hit_rate, evade_rate) = if attacker_weapon.magic {
        (attacker_weapon.hit, defender.luck)
    } else {
        (
            attacker.skill + attacker_weapon.hit,
            attack_speed(defender, defender_weapon) + defender_terrain_bonus,
        )
    };
    hit_rate - evade_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{unit, weapon};

    #[test]
    fn equal_speeds_never_double() {
        let mut a = unit("A");
        a.speed = 2;
        let mut d = unit("D");
        d.speed = 2;
        let heavy = weapon("Axe", 8, 5, 70);
        assert_eq!(attack_speed(&a, &heavy), -3);
        assert_eq!(
            repeated_attack_status(&a, &heavy, &d, &heavy),
            RepeatedAttack::NoDoubleAttack
        );
        a.speed = 9;
        d.speed = 9;
        assert_eq!(
            repeated_attack_status(&a, &heavy, &d, &heavy),
            RepeatedAttack::NoDoubleAttack
        );
    }

    #[test]
    fn faster_attacker_doubles() {
        let mut a = unit("A");
        a.speed = 10;
        let mut d = unit("D");
        d.speed = 4;
        let sword = weapon("Sword", 5, 2, 90);
        assert_eq!(
            repeated_attack_status(&a, &sword, &d, &sword),
            RepeatedAttack::WillDoubleAttack
        );
        assert_eq!(
            repeated_attack_status(&d, &sword, &a, &sword),
            RepeatedAttack::WillBeDoubleAttacked
        );
    }

    #[test]
    fn faster_but_nonpositive_attacker_does_not_double() {
        let mut a = unit("A");
        a.speed = 3;
        let mut d = unit("D");
        d.speed = 1;
        let heavy = weapon("Hammer", 10, 8, 60);
        // -5 vs -7: attacker is faster but its own attack speed is negative
        assert_eq!(
            repeated_attack_status(&a, &heavy, &d, &heavy),
            RepeatedAttack::NoDoubleAttack
        );
        a.speed = 8;
        // 0 vs -7
        assert_eq!(
            repeated_attack_status(&a, &heavy, &d, &heavy),
            RepeatedAttack::NoDoubleAttack
        );
    }

    #[test]
    fn slower_attacker_is_doubled_even_with_negative_speed() {
        let mut a = unit("A");
        a.speed = 1;
        let mut d = unit("D");
        d.speed = 3;
        let heavy = weapon("Hammer", 10, 8, 60);
        assert_eq!(
            repeated_attack_status(&a, &heavy, &d, &heavy),
            RepeatedAttack::WillBeDoubleAttacked
        );
    }

    #[test]
    fn physical_damage() {
        let mut a = unit("A");
        a.strength = 10;
        let mut d = unit("D");
        d.defense = 3;
        d.unit_type = Some("armor".to_string());
        let mut w = weapon("Lance", 5, 3, 80);
        w.effective_against.insert("cavalry".to_string());
        assert_eq!(damage(&a, &w, &d), 12);
    }

    #[test]
    fn effective_damage_triples_might() {
        let mut a = unit("A");
        a.strength = 10;
        let mut d = unit("D");
        d.defense = 3;
        d.unit_type = Some("cavalry".to_string());
        let mut w = weapon("Horseslayer", 5, 3, 80);
        w.effective_against.insert("cavalry".to_string());
        assert_eq!(damage(&a, &w, &d), 22);
    }

    #[test]
    fn untyped_defender_takes_normal_damage() {
        let mut a = unit("A");
        a.strength = 10;
        let mut d = unit("D");
        d.defense = 3;
        let mut w = weapon("Bow", 5, 1, 90);
        w.effective_against.insert("flier".to_string());
        assert_eq!(might_multiplier(&w, &d), 1);
        assert_eq!(damage(&a, &w, &d), 12);
    }

    #[test]
    fn magic_damage_uses_resistance_only() {
        let mut a = unit("A");
        a.strength = 50;
        let mut d = unit("D");
        d.defense = 0;
        d.resistance = 4;
        d.unit_type = Some("dragon".to_string());
        let mut w = weapon("Excalibur", 10, 1, 90);
        w.magic = true;
        assert_eq!(damage(&a, &w, &d), 6);
        w.effective_against.insert("dragon".to_string());
        assert_eq!(damage(&a, &w, &d), 26);
    }

    #[test]
    fn damage_is_not_clamped() {
        let mut a = unit("A");
        a.strength = 1;
        let mut d = unit("D");
        d.defense = 15;
        assert_eq!(damage(&a, &weapon("Iron Sword", 5, 2, 100), &d), -9);
    }

    #[test]
    fn physical_accuracy_with_terrain() {
        let mut a = unit("A");
        a.skill = 5;
        let mut d = unit("D");
        d.speed = 8;
        let aw = weapon("Sword", 5, 2, 10);
        let dw = weapon("Lance", 7, 2, 80);
        assert_eq!(accuracy(&a, &aw, &d, &dw, 4), 5);
    }

    #[test]
    fn magic_accuracy_ignores_skill_and_terrain() {
        let mut a = unit("A");
        a.skill = 20;
        let mut d = unit("D");
        d.luck = 12;
        d.speed = 30;
        let mut tome = weapon("Thunder", 6, 3, 80);
        tome.magic = true;
        let dw = weapon("Lance", 7, 2, 80);
        assert_eq!(accuracy(&a, &tome, &d, &dw, 30), 68);
    }

    #[test]
    fn accuracy_is_not_clamped() {
        let mut a = unit("A");
        a.skill = 20;
        let mut d = unit("D");
        d.speed = 0;
        let aw = weapon("Sword", 5, 2, 100);
        let dw = weapon("Axe", 8, 5, 70);
        // 120 - (0 - 5) - 0
        assert_eq!(accuracy(&a, &aw, &d, &dw, 0), 125);
        assert_eq!(accuracy(&a, &aw, &d, &dw, 200), -75);
    }

    #[test]
    fn status_text() {
        assert_eq!(RepeatedAttack::WillDoubleAttack.to_string(), "Will double attack");
        assert_eq!(
            RepeatedAttack::WillBeDoubleAttacked.to_string(),
            "Will be double attacked"
        );
        assert_eq!(RepeatedAttack::NoDoubleAttack.to_string(), "No double attack");
    }
}
