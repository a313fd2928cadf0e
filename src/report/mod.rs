//! Text and JSON rendering of battle reports and resolution diagnostics.

use crate::error::ResolutionDump;
use crate::resolve::{BattleReport, DefenderOutcome, Pairing};
use crate::util::join_names;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &BattleReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &BattleReport) -> Result<String, String> {
    serde_json::to_string_pretty(report).map_err(|e| e.to_string())
}

/// One header per defender, then one line per attacker weapon.
pub fn render_text(report: &BattleReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        match outcome {
            DefenderOutcome::Engaged(d) => {
                out.push_str(&format!("Defender: {} ({})\n", d.defender, d.defender_weapon));
                for p in &d.pairings {
                    out.push_str(&pairing_line(p));
                    out.push('\n');
                }
            }
            DefenderOutcome::Unarmed { defender } => {
                out.push_str(&format!("Weapon not found for defender: {}\n", defender));
            }
        }
    }
    out
}

fn pairing_line(p: &Pairing) -> String {
    format!(
        "Weapon: {}, Accuracy: {}, Attack Damage: {}, {}, Damage Received: {}, Accuracy: {}",
        p.weapon,
        p.attacker_accuracy,
        p.attacker_damage,
        p.repeated_attack,
        p.defender_damage,
        p.defender_accuracy
    )
}

/// Diagnostic listing of what did and did not resolve.
pub fn render_dump(dump: &ResolutionDump) -> String {
    format!(
        "Attacker: {}\nAttacker weapons: {}\nDefenders: {}\nNot found: {}\n",
        dump.attacker.as_deref().unwrap_or("none"),
        join_names(&dump.attacker_weapons),
        join_names(&dump.defenders),
        join_names(&dump.missing)
    )
}
