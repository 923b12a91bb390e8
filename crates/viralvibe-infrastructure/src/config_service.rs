//! Application configuration loading.
//!
//! Reads `config.toml` from the config directory. The file is optional;
//! an absent or empty file yields the defaults.

use std::path::Path;

use tokio::fs;

use viralvibe_core::config::AppConfig;
use viralvibe_core::error::{Result, ViralVibeError};

use crate::paths::ViralVibePaths;

/// Loads the application configuration from `config.toml`.
pub async fn load_config(base_dir: Option<&Path>) -> Result<AppConfig> {
    let path = ViralVibePaths::new(base_dir).config_file()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| ViralVibeError::io(format!("Failed to read config file: {}", e)))?;

    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_config_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(Some(temp_dir.path())).await.unwrap();
        assert!(config.gemini.model.is_none());
    }

    #[tokio::test]
    async fn test_reads_model_override() {
        let temp_dir = TempDir::new().unwrap();
        tokio::fs::write(
            temp_dir.path().join("config.toml"),
            "[gemini]\nmodel = \"gemini-2.5-pro\"\n",
        )
        .await
        .unwrap();

        let config = load_config(Some(temp_dir.path())).await.unwrap();
        assert_eq!(config.gemini.model.as_deref(), Some("gemini-2.5-pro"));
    }
}
