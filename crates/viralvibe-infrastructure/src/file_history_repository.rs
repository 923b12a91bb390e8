//! File-based history repository.
//!
//! Persists the whole history log as one pretty-printed JSON array in
//! `history.json`. The log never exceeds 50 small records, so every write
//! rewrites the document wholesale.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use viralvibe_core::error::{Result, ViralVibeError};
use viralvibe_core::history::{HistoryRecord, HistoryRepository};

use crate::paths::ViralVibePaths;

/// Whole-document JSON file repository for the history log.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    /// Creates a repository at the default location
    /// (`~/.config/viralvibe/history.json`).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = ViralVibePaths::new(base_dir).history_file()?;
        Ok(Self { path })
    }

    /// Creates a repository at an explicit file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    async fn get_all(&self) -> Result<Vec<HistoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ViralVibeError::io(format!("Failed to read history log: {}", e)))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<HistoryRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    async fn save_all(&self, records: &[HistoryRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ViralVibeError::io(format!("Failed to create directory: {}", e)))?;
        }

        let serialized = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, serialized)
            .await
            .map_err(|e| ViralVibeError::io(format!("Failed to write history log: {}", e)))?;

        Ok(())
    }
}
