//! Gemini backend client for ViralVibe.

mod gemini_api_client;

pub use gemini_api_client::GeminiApiClient;
