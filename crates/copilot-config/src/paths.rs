//! Data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.cache/copilot-session/`
//! - macOS: `~/Library/Caches/copilot-session/`
//! - Windows: `%LOCALAPPDATA%\copilot-session\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "copilot-session";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the directory log files are written to
pub fn log_dir() -> Result<PathBuf> {
    let dir = cache_dir()?.join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_log_dir_is_inside_cache_dir() {
        let dir = log_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.starts_with(cache_dir().unwrap()));
    }
}
