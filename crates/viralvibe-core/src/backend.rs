//! Content backend trait.
//!
//! Defines the single-method interface to the generative backend so the
//! provider is swappable (a fake returning canned JSON in tests, the Gemini
//! REST client in production).

use crate::error::Result;

/// An abstract generative-text backend.
///
/// Implementations perform exactly one request per call and return the raw
/// response text. No retries are performed at this layer.
#[async_trait::async_trait]
pub trait ContentBackend: Send + Sync {
    /// Sends the composed prompt and returns the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
