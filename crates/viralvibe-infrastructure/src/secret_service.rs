//! Secret service implementation.
//!
//! Reads API keys from `secret.json`, with the `GEMINI_API_KEY` environment
//! variable as a fallback for packaged/CI environments.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use viralvibe_core::config::{GeminiSecret, SecretConfig};
use viralvibe_core::error::{Result, ViralVibeError};
use viralvibe_core::secret::SecretService;

use crate::paths::ViralVibePaths;

const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// File-backed secret service.
pub struct FileSecretService {
    path: PathBuf,
}

impl FileSecretService {
    /// Creates a service reading the default `secret.json` location.
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = ViralVibePaths::new(base_dir).secret_file()?;
        Ok(Self { path })
    }

    /// Creates a service reading an explicit file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Writes a blank secret template if the file does not exist yet.
    ///
    /// On Unix the file is created with mode 600.
    pub async fn ensure_secret_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ViralVibeError::io(format!("Failed to create directory: {}", e)))?;
        }

        let template = SecretConfig {
            gemini: Some(GeminiSecret {
                api_key: String::new(),
            }),
        };
        let serialized = serde_json::to_string_pretty(&template)?;
        fs::write(&self.path, serialized)
            .await
            .map_err(|e| ViralVibeError::io(format!("Failed to write secret template: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, perms)
                .await
                .map_err(|e| ViralVibeError::io(format!("Failed to set permissions: {}", e)))?;
        }

        Ok(())
    }

    async fn load_from_file(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Ok(SecretConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ViralVibeError::io(format!("Failed to read secret file: {}", e)))?;

        if content.trim().is_empty() {
            return Ok(SecretConfig::default());
        }

        // The error string must never include file contents
        let config: SecretConfig = serde_json::from_str(&content)
            .map_err(|_| ViralVibeError::config("secret.json is not valid JSON"))?;
        Ok(config)
    }

    fn env_fallback() -> Option<SecretConfig> {
        let api_key = std::env::var(API_KEY_ENV).ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(SecretConfig {
            gemini: Some(GeminiSecret { api_key }),
        })
    }

    fn has_api_key(config: &SecretConfig) -> bool {
        config
            .gemini
            .as_ref()
            .is_some_and(|g| !g.api_key.trim().is_empty())
    }
}

#[async_trait]
impl SecretService for FileSecretService {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        let from_file = self.load_from_file().await?;
        if Self::has_api_key(&from_file) {
            return Ok(from_file);
        }

        if let Some(from_env) = Self::env_fallback() {
            tracing::debug!("using {} from environment", API_KEY_ENV);
            return Ok(from_env);
        }

        Ok(from_file)
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists() || Self::env_fallback().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let service = FileSecretService::with_path(temp_dir.path().join("secret.json"));
        let secrets = service.load_from_file().await.unwrap();
        assert!(secrets.gemini.is_none());
    }

    #[tokio::test]
    async fn test_reads_api_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        tokio::fs::write(&path, r#"{"gemini": {"api_key": "test-key"}}"#)
            .await
            .unwrap();

        let service = FileSecretService::with_path(path);
        let secrets = service.load_secrets().await.unwrap();
        assert_eq!(secrets.gemini.unwrap().api_key, "test-key");
    }

    #[tokio::test]
    async fn test_invalid_json_error_hides_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        tokio::fs::write(&path, "{ secret-looking-garbage").await.unwrap();

        let service = FileSecretService::with_path(path);
        let err = service.load_from_file().await.unwrap_err();
        assert!(!err.to_string().contains("garbage"));
    }

    #[tokio::test]
    async fn test_ensure_secret_file_writes_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        let service = FileSecretService::with_path(path.clone());

        service.ensure_secret_file().await.unwrap();
        assert!(path.exists());

        let secrets = service.load_from_file().await.unwrap();
        assert_eq!(secrets.gemini.unwrap().api_key, "");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }
}
