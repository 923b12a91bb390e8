//! Application and secret configuration models.

use serde::{Deserialize, Serialize};

/// Root of `config.toml`. Every field is optional; an absent file yields
/// the defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AppConfig {
    /// Gemini backend settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Community ids preselected when the user does not pick any
    #[serde(default)]
    pub default_communities: Vec<String>,
}

/// Gemini backend settings.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GeminiConfig {
    /// Model identifier override (defaults to the client's built-in model)
    pub model: Option<String>,
}

/// Root of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    /// Gemini credentials
    pub gemini: Option<GeminiSecret>,
}

/// Gemini API credentials.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeminiSecret {
    pub api_key: String,
}

impl AppConfig {
    /// Returns the configured preselection, falling back to the built-in
    /// defaults when none is configured.
    pub fn default_communities_or_builtin(&self) -> Vec<String> {
        if self.default_communities.is_empty() {
            ["dcinside", "fmkorea", "clien", "instagram"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.default_communities.clone()
        }
    }
}
