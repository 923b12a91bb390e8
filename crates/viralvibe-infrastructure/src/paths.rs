//! Unified path management for ViralVibe configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/viralvibe/         # Config directory
//! ├── config.toml              # Application configuration (optional)
//! ├── secret.json              # API keys
//! └── history.json             # Persisted history log
//! ```

use std::path::{Path, PathBuf};

use viralvibe_core::error::{Result, ViralVibeError};

const APP_DIR: &str = "viralvibe";

/// Path resolution for ViralVibe.
///
/// `new(None)` resolves under the platform config directory; tests pass an
/// explicit base directory instead.
#[derive(Debug, Clone)]
pub struct ViralVibePaths {
    base_dir: Option<PathBuf>,
}

impl ViralVibePaths {
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the configuration directory, without creating it.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ViralVibeError::config("Cannot find config directory"))
    }

    /// Path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path to `secret.json`.
    pub fn secret_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("secret.json"))
    }

    /// Path to `history.json`.
    pub fn history_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("history.json"))
    }
}

impl Default for ViralVibePaths {
    fn default() -> Self {
        Self::new(None)
    }
}
