//! Tactics Combat Calculator — CLI.

use clap::{CommandFactory, Parser};
use fe_combat_calc::config::{
    CalcConfig, DefenderWeaponPolicy, DEFAULT_UNITS_FILE, DEFAULT_WEAPONS_FILE, MAX_TERRAIN_BONUS,
};
use fe_combat_calc::error::CalcError;
use fe_combat_calc::gamedata::{load_armory, load_roster};
use fe_combat_calc::report::{render, render_dump, OutputFormat};
use fe_combat_calc::resolve::{resolve_battle, split_names};
use fe_combat_calc::util::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fe-combat-calc", version)]
#[command(about = "Forecast damage, accuracy and double attacks between one attacker and its targets")]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Roster file (.toml, .json or .yaml).
    #[arg(short = 'u', long, value_name = "PATH", default_value = DEFAULT_UNITS_FILE)]
    units_file: PathBuf,

    /// Armory file (.toml, .json or .yaml).
    #[arg(short = 'w', long, value_name = "PATH", default_value = DEFAULT_WEAPONS_FILE)]
    weapons_file: PathBuf,

    /// Evasion bonus of the attacker's tile.
    #[arg(
        short = 'a',
        long,
        value_name = "INT",
        default_value_t = 0,
        value_parser = terrain_bonus_parser()
    )]
    attacker_terrain: i32,

    /// Evasion bonus of the defenders' tiles.
    #[arg(
        short = 'd',
        long,
        value_name = "INT",
        default_value_t = 0,
        value_parser = terrain_bonus_parser()
    )]
    defender_terrain: i32,

    /// Keep going past defenders whose weapons are not in the armory.
    #[arg(long)]
    skip_unarmed: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Attacker name followed by one or more defender names.
    #[arg(value_name = "UNITS")]
    units: Vec<String>,
}

fn terrain_bonus_parser() -> clap::builder::RangedI64ValueParser<i32> {
    let max = i64::from(MAX_TERRAIN_BONUS);
    clap::value_parser!(i32).range(-max..=max)
}

impl Cli {
    fn config(&self) -> CalcConfig {
        CalcConfig {
            units_file: self.units_file.clone(),
            weapons_file: self.weapons_file.clone(),
            attacker_terrain_bonus: self.attacker_terrain,
            defender_terrain_bonus: self.defender_terrain,
            defender_weapon_policy: if self.skip_unarmed {
                DefenderWeaponPolicy::Skip
            } else {
                DefenderWeaponPolicy::Abort
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CalcError> {
    let cfg = cli.config();
    let (attacker, defenders) = split_names(&cli.units)?;
    let roster = load_roster(&cfg.units_file)?;
    let armory = load_armory(&cfg.weapons_file)?;

    let report = resolve_battle(&roster, &armory, attacker, defenders, &cfg)?;
    let rendered = render(&report, cli.format).map_err(CalcError::Output)?;
    print!("{}", rendered);
    report.into_result().map(|_| ())
}

fn report_error(e: &CalcError) {
    eprintln!("error: {}", e);
    match e {
        CalcError::InvalidArguments(_) => {
            eprintln!("{}", Cli::command().render_usage());
        }
        CalcError::UnresolvedEntity(dump) => {
            eprint!("{}", render_dump(dump));
        }
        CalcError::UnresolvedWeapon { .. } | CalcError::Load { .. } | CalcError::Output(_) => {}
    }
}
