//! Content generation service.
//!
//! Orchestrates one generation: resolve the selected communities, compose
//! the prompt, perform the single backend call, then validate and filter
//! the structured response. Stateless between calls; history persistence is
//! the caller's responsibility.

use std::collections::HashSet;
use std::sync::Arc;

use viralvibe_core::backend::ContentBackend;
use viralvibe_core::community::CommunityCatalog;
use viralvibe_core::error::{Result, ViralVibeError};
use viralvibe_core::generation::{GeneratedPost, GenerationRequest};

use crate::prompt;

/// The single user-facing failure message for any backend/parse problem.
const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate content. Please check your inputs and try again.";

fn generation_failed() -> ViralVibeError {
    ViralVibeError::generation(GENERATION_FAILED_MESSAGE)
}

/// Service producing community-tailored post drafts.
pub struct GenerationService {
    catalog: CommunityCatalog,
    backend: Arc<dyn ContentBackend>,
}

impl GenerationService {
    pub fn new(catalog: CommunityCatalog, backend: Arc<dyn ContentBackend>) -> Self {
        Self { catalog, backend }
    }

    /// Generates one post draft per resolved community.
    ///
    /// Unknown selected ids are silently dropped; if none resolve, returns
    /// an empty list without calling the backend. Any backend error, blank
    /// response, or parse failure collapses into a single generation
    /// failure with no partial result.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<GeneratedPost>> {
        request.validate()?;

        let targets = self.catalog.resolve(&request.selected_ids);
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = prompt::compose_prompt(request, &targets)?;

        let text = self.backend.generate(&prompt).await.map_err(|err| {
            tracing::error!("backend call failed: {}", err);
            generation_failed()
        })?;

        if text.trim().is_empty() {
            tracing::error!("backend returned empty response text");
            return Err(generation_failed());
        }

        let parsed: Vec<GeneratedPost> = serde_json::from_str(text.trim()).map_err(|err| {
            tracing::error!("failed to parse backend response as JSON: {}", err);
            generation_failed()
        })?;

        // The model may hallucinate extra/foreign ids; keep only what was
        // requested, in response order.
        let requested: HashSet<&str> = request.selected_ids.iter().map(String::as_str).collect();
        let (posts, dropped): (Vec<GeneratedPost>, Vec<GeneratedPost>) = parsed
            .into_iter()
            .partition(|post| requested.contains(post.community_id.as_str()));

        if !dropped.is_empty() {
            let ids: Vec<&str> = dropped.iter().map(|p| p.community_id.as_str()).collect();
            tracing::debug!(?ids, "dropped posts for unrequested community ids");
        }

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend fake returning canned text and counting invocations.
    struct FakeBackend {
        response: Result<String>,
        calls: AtomicUsize,
    }

    impl FakeBackend {
        fn returning(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(ViralVibeError::generation("boom")),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl ContentBackend for FakeBackend {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn request(ids: &[&str]) -> GenerationRequest {
        GenerationRequest {
            topic: "갤럭시 S24 사용기".to_string(),
            target_url: None,
            extra_context: None,
            selected_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn post_json(community_id: &str) -> String {
        format!(
            r#"{{"communityId": "{}", "title": "t", "content": "c", "hashtags": ["h"], "comment": "m"}}"#,
            community_id
        )
    }

    fn service(backend: Arc<FakeBackend>) -> GenerationService {
        GenerationService::new(CommunityCatalog::with_defaults(), backend)
    }

    #[tokio::test]
    async fn test_unknown_only_ids_skip_backend() {
        let backend = Arc::new(FakeBackend::returning("[]"));
        let service = service(backend.clone());

        let posts = service.generate(&request(&["ghost", "phantom"])).await.unwrap();
        assert!(posts.is_empty());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_filters_foreign_ids_preserving_order() {
        let response = format!(
            "[{}, {}, {}]",
            post_json("dcinside"),
            post_json("instagram"),
            post_json("clien")
        );
        let backend = Arc::new(FakeBackend::returning(&response));
        let service = service(backend.clone());

        let posts = service
            .generate(&request(&["dcinside", "clien"]))
            .await
            .unwrap();

        let ids: Vec<&str> = posts.iter().map(|p| p.community_id.as_str()).collect();
        assert_eq!(ids, vec!["dcinside", "clien"]);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_generation_failure() {
        let backend = Arc::new(FakeBackend::returning("this is not json"));
        let service = service(backend);

        let err = service.generate(&request(&["dcinside"])).await.unwrap_err();
        assert!(err.is_generation());
        assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_response_is_generation_failure() {
        let backend = Arc::new(FakeBackend::returning("   "));
        let service = service(backend);

        let err = service.generate(&request(&["dcinside"])).await.unwrap_err();
        assert!(err.is_generation());
    }

    #[tokio::test]
    async fn test_backend_error_is_collapsed() {
        let backend = Arc::new(FakeBackend::failing());
        let service = service(backend.clone());

        let err = service.generate(&request(&["dcinside"])).await.unwrap_err();
        assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_validation_rejects_before_backend() {
        let backend = Arc::new(FakeBackend::returning("[]"));
        let service = service(backend.clone());

        let mut bad_topic = request(&["dcinside"]);
        bad_topic.topic = " ".to_string();
        assert!(service.generate(&bad_topic).await.unwrap_err().is_validation());

        let no_selection = request(&[]);
        assert!(service
            .generate(&no_selection)
            .await
            .unwrap_err()
            .is_validation());

        assert_eq!(backend.call_count(), 0);
    }
}
