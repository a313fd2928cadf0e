//! Load the armory and roster from TOML, JSON or YAML data files.

use crate::config::{MAX_DATA_FILE_BYTES, MAX_STAT_MAGNITUDE};
use crate::error::{CalcError, Result};
use crate::model::{duplicate_names, Armory, GameUnits};
use crate::util::check_file_bounds;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Supported data file formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Toml,
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)?;
        match ext.as_str() {
            "toml" => Some(DataFormat::Toml),
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

/// Parse `content` as `format`. Unknown fields are ignored; optional fields take their defaults.
pub fn parse_data<T: DeserializeOwned>(
    content: &str,
    format: DataFormat,
) -> std::result::Result<T, String> {
    match format {
        DataFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        DataFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DataFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DataFormat::from_path(path).ok_or_else(|| {
        CalcError::load(path, "unsupported data format (expected .toml, .json, .yaml or .yml)")
    })?;
    let size =
        check_file_bounds(path, MAX_DATA_FILE_BYTES).map_err(|e| CalcError::load(path, e))?;
    tracing::debug!("reading {} ({} bytes, {:?})", path.display(), size, format);
    let content = fs::read_to_string(path).map_err(|e| CalcError::load(path, e))?;
    parse_data(&content, format).map_err(|e| CalcError::load(path, e))
}

fn check_stat(path: &Path, owner: &str, stat: &str, value: i32) -> Result<()> {
    if value.unsigned_abs() > MAX_STAT_MAGNITUDE.unsigned_abs() {
        return Err(CalcError::load(
            path,
            format!(
                "{}: {} = {} is out of range (max magnitude {})",
                owner, stat, value, MAX_STAT_MAGNITUDE
            ),
        ));
    }
    Ok(())
}

/// Load the weapon catalog. Duplicate names are kept (first wins on lookup) and logged.
pub fn load_armory(path: &Path) -> Result<Armory> {
    let armory: Armory = load_file(path)?;
    for w in &armory.weapons {
        for (stat, value) in w.stats() {
            check_stat(path, &w.name, stat, value)?;
        }
    }
    for dup in duplicate_names(armory.weapons.iter().map(|w| w.name.as_str())) {
        tracing::warn!("duplicate weapon {:?} in {}; first entry wins", dup, path.display());
    }
    tracing::info!("loaded {} weapon(s) from {}", armory.weapons.len(), path.display());
    Ok(armory)
}

/// Load the unit roster. Duplicate names are kept (first wins on lookup) and logged.
pub fn load_roster(path: &Path) -> Result<GameUnits> {
    let roster: GameUnits = load_file(path)?;
    for u in &roster.units {
        for (stat, value) in u.stats() {
            check_stat(path, &u.name, stat, value)?;
        }
    }
    for dup in duplicate_names(roster.units.iter().map(|u| u.name.as_str())) {
        tracing::warn!("duplicate unit {:?} in {}; first entry wins", dup, path.display());
    }
    tracing::info!("loaded {} unit(s) from {}", roster.units.len(), path.display());
    Ok(roster)
}
