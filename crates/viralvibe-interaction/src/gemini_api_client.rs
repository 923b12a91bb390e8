//! GeminiApiClient - direct REST API client for Gemini.
//!
//! Performs the single schema-constrained `generateContent` call the
//! generation flow needs. Exactly one request per invocation; no retries.

use std::collections::BTreeMap;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use viralvibe_core::backend::ContentBackend;
use viralvibe_core::config::SecretConfig;
use viralvibe_core::error::{Result, ViralVibeError};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Sampling temperature, slightly high for more natural/varied output
/// across communities.
const GENERATION_TEMPERATURE: f32 = 0.85;

/// Client that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiClient {
    /// Creates a new client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Builds a client from loaded secret configuration.
    ///
    /// The model defaults to `gemini-2.5-flash`; override with
    /// [`with_model`](Self::with_model).
    pub fn from_secrets(secrets: &SecretConfig) -> Result<Self> {
        let gemini = secrets.gemini.as_ref().ok_or_else(|| {
            ViralVibeError::config("Gemini API key not configured (secret.json)")
        })?;
        if gemini.api_key.trim().is_empty() {
            return Err(ViralVibeError::config(
                "Gemini API key not configured (secret.json)",
            ));
        }
        Ok(Self::new(gemini.api_key.clone(), DEFAULT_GEMINI_MODEL))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        tracing::debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                // reqwest errors can embed the URL, which carries the key
                ViralVibeError::generation(format!(
                    "Gemini API request failed: {}",
                    err.without_url()
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ViralVibeError::generation(format!(
                "Failed to parse Gemini response: {}",
                err.without_url()
            ))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait::async_trait]
impl ContentBackend for GeminiApiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: post_array_schema(),
                temperature: GENERATION_TEMPERATURE,
            },
        };
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Schema,
    temperature: f32,
}

/// Subset of the Gemini response-schema grammar needed for the post array.
#[derive(Serialize)]
struct Schema {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<&'static str, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<&'static str>>,
}

impl Schema {
    fn string() -> Self {
        Self {
            kind: "STRING",
            items: None,
            properties: None,
            required: None,
        }
    }

    fn array(items: Schema) -> Self {
        Self {
            kind: "ARRAY",
            items: Some(Box::new(items)),
            properties: None,
            required: None,
        }
    }

    fn object(properties: BTreeMap<&'static str, Schema>, required: Vec<&'static str>) -> Self {
        Self {
            kind: "OBJECT",
            items: None,
            properties: Some(properties),
            required: Some(required),
        }
    }
}

/// The response-shape contract: a JSON array where each element has exactly
/// the post fields, all required.
fn post_array_schema() -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert("communityId", Schema::string());
    properties.insert("title", Schema::string());
    properties.insert("content", Schema::string());
    properties.insert("hashtags", Schema::array(Schema::string()));
    properties.insert("comment", Schema::string());

    Schema::array(Schema::object(
        properties,
        vec!["communityId", "title", "content", "hashtags", "comment"],
    ))
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            ViralVibeError::generation("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String) -> ViralVibeError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    ViralVibeError::generation(format!("Gemini API error ({}): {}", status.as_u16(), message))
}
