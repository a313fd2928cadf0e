//! Shared utilities: logging, file bounds.

use std::path::Path;
use tracing::Level;

/// Initialize tracing with env filter. Safe to call once at startup.
/// Logs go to stderr; stdout is reserved for the battle report.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Check the file exists, is a regular file, and is within the size limit.
pub fn check_file_bounds(path: &Path, max_bytes: usize) -> Result<u64, String> {
    let meta = std::fs::metadata(path).map_err(|e| e.to_string())?;
    if !meta.is_file() {
        return Err("not a regular file".to_string());
    }
    let size = meta.len();
    if size > max_bytes as u64 {
        return Err(format!(
            "file too large: {} bytes (max {})",
            size, max_bytes
        ));
    }
    Ok(size)
}

/// Join names for diagnostics, or "none" when empty.
pub fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
