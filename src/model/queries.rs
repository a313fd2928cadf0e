//! Capability queries: which armory weapons a unit can use, and how fast it attacks with one.

use super::{Armory, GameUnit, Weapon};

/// Armory weapons named in the unit's weapon list, in armory order.
/// Names that don't resolve are dropped.
pub fn usable_weapons<'a>(unit: &GameUnit, armory: &'a Armory) -> Vec<&'a Weapon> {
    let usable: Vec<&Weapon> = armory
        .weapons
        .iter()
        .filter(|w| unit.weapons.contains(&w.name))
        .collect();
    if usable.len() < unit.weapons.len() {
        let unresolved: Vec<&str> = unit
            .weapons
            .iter()
            .filter(|n| armory.find(n).is_none())
            .map(String::as_str)
            .collect();
        if !unresolved.is_empty() {
            tracing::debug!(
                "unit {} lists unknown weapon(s): {}",
                unit.name,
                unresolved.join(", ")
            );
        }
    }
    usable
}

/// First weapon in the unit's own list order that exists in the armory.
pub fn primary_weapon<'a>(unit: &GameUnit, armory: &'a Armory) -> Option<&'a Weapon> {
    unit.weapons.iter().find_map(|name| armory.find(name))
}

/// Speed minus weapon weight. Not floored; heavy weapons on slow units go negative.
pub fn attack_speed(unit: &GameUnit, weapon: &Weapon) -> i32 {
    unit.speed - weapon.weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{unit, weapon};

    fn armory() -> Armory {
        Armory {
            weapons: vec![
                weapon("Iron Sword", 5, 2, 100),
                weapon("Javelin", 6, 11, 65),
                weapon("Steel Lance", 10, 13, 70),
            ],
        }
    }

    #[test]
    fn usable_weapons_follow_armory_order() {
        let mut u = unit("Cain");
        u.weapons = vec![
            "Steel Lance".to_string(),
            "Ragnell".to_string(),
            "Iron Sword".to_string(),
        ];
        let a = armory();
        let names: Vec<&str> = usable_weapons(&u, &a)
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(names, vec!["Iron Sword", "Steel Lance"]);
    }

    #[test]
    fn usable_weapons_empty_when_nothing_resolves() {
        let mut u = unit("Jagen");
        u.weapons = vec!["Ragnell".to_string()];
        assert!(usable_weapons(&u, &armory()).is_empty());
        assert!(usable_weapons(&unit("Nobody"), &armory()).is_empty());
    }

    #[test]
    fn primary_weapon_follows_unit_order() {
        let mut u = unit("Abel");
        u.weapons = vec![
            "Ragnell".to_string(),
            "Steel Lance".to_string(),
            "Iron Sword".to_string(),
        ];
        let a = armory();
        assert_eq!(
            primary_weapon(&u, &a).map(|w| w.name.as_str()),
            Some("Steel Lance")
        );
        u.weapons = vec!["Ragnell".to_string()];
        assert!(primary_weapon(&u, &a).is_none());
    }

    #[test]
    fn attack_speed_can_go_negative() {
        let mut u = unit("Draug");
        u.speed = 2;
        assert_eq!(attack_speed(&u, &weapon("Silver Lance", 14, 5, 80)), -3);
        u.speed = 12;
        assert_eq!(attack_speed(&u, &weapon("Iron Sword", 5, 2, 100)), 10);
        assert_eq!(attack_speed(&u, &weapon("Feather", 1, 0, 100)), 12);
    }
}
