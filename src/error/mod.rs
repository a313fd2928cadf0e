//! Error kinds surfaced to the CLI and their exit codes.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// What the driver managed to resolve before giving up on the roster lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionDump {
    pub attacker: Option<String>,
    pub attacker_weapons: Vec<String>,
    pub defenders: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("one of the requested units or the attacker's weapons was not found")]
    UnresolvedEntity(ResolutionDump),

    #[error("weapon not found for defender: {defender}")]
    UnresolvedWeapon { defender: String },

    #[error("failed to load {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    #[error("failed to render report: {0}")]
    Output(String),
}

impl CalcError {
    pub fn load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        CalcError::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            CalcError::Load { .. } | CalcError::Output(_) => 1,
            CalcError::InvalidArguments(_) => 2,
            CalcError::UnresolvedEntity(_) => 3,
            CalcError::UnresolvedWeapon { .. } => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
