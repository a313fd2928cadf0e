//! Tactics Combat Calculator — library entry point.
//!
//! Exposes config, model, gamedata, combat, resolve, and report
//! for use by the CLI and tests.

pub mod combat;
pub mod config;
pub mod error;
pub mod gamedata;
pub mod model;
pub mod report;
pub mod resolve;
pub mod util;
