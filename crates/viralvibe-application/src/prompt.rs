//! Generation prompt composition.
//!
//! Builds the single natural-language instruction block sent to the model:
//! the click-through goal, the hook-and-gap content strategy, the
//! per-archetype viral-comment strategy, and one persona block per resolved
//! community with its tone instruction verbatim.

use minijinja::{context, Environment};

use viralvibe_core::community::Community;
use viralvibe_core::error::{Result, ViralVibeError};
use viralvibe_core::generation::GenerationRequest;

const GENERATION_TEMPLATE: &str = r#"You are a high-level viral marketing expert specializing in 'External Inflow' (driving traffic to a specific blog/site) for Korean communities.

GOAL: Create posts that maximize the Click-Through Rate (CTR) to the Target URL.

INPUTS:
- Topic/Keyword: "{{ topic }}"
- Target URL: "{{ target_url }}"
- Context: "{{ extra_context }}"

STRATEGY - "The Hook & The Gap":
1. Title: Must be provocative or highly relevant to grab attention immediately.
2. Content: Provide 70% of the value (summary, shocking fact, intro) but keep the crucial 30% (detailed stats, conclusion, full photos) behind the link.
3. Call-To-Action (CTA): The link must feel like a necessary step for the reader, not spam.
   - Bad: "Please visit my blog." (Too needy)
   - Good (DC/FMKorea): "Source: [Link]", "Found the full stats here: [Link]", "Is this true? [Link]"
   - Good (Clien/82Cook): "I summarized the details in my blog: [Link]", "For those who need the full guide: [Link]"
   - Good (SNS): "Link in bio", "Read more: [Link]"

4. Comment Strategy (CRITICAL): Generate a "Viral Comment" optimized for the specific community type.
   - Use Case: This text will be used to reply to OTHER people's questions about "{{ topic }}" or as a self-reply to bump the post.
   - Naver Cafe / 82Cook / Mom Cafes: Must be EMPATHETIC and helpful. "I was looking for this too, and this helped me a lot: [Link]", "Have you checked this review? [Link]"
   - DC / Femco / Inven: Short and dry. "Link found: [Link]", "Full version here: [Link]"
   - KnowledgeIn / Q&A: Expert tone. "I organized the answer to your question here: [Link]"

TARGET COMMUNITIES & PERSONAS:
{% for community in communities %}
[ID: {{ community.id }} | Name: {{ community.name }}]
- Tone/Persona: {{ community.tone_prompt }}
- Link Strategy: Adapt the link placement to fit this persona naturally.
{% endfor %}

OUTPUT FORMAT:
Return a raw JSON array.
Each item must contain: 'communityId', 'title', 'content', 'hashtags', 'comment'.

IMPORTANT:
- If a URL is provided, it MUST be included in the 'content' OR the 'comment' (or both, depending on what's natural).
- If no URL is provided in the input, use "[링크]" as a placeholder.
- Korean language only (Native level, strictly following community slang)."#;

/// Composes the generation prompt for the resolved communities.
pub fn compose_prompt(request: &GenerationRequest, communities: &[&Community]) -> Result<String> {
    let target_url = request
        .target_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or("(Link will be inserted by user)");
    let extra_context = request
        .extra_context
        .as_deref()
        .filter(|ctx| !ctx.trim().is_empty())
        .unwrap_or("Promote this naturally");

    let env = Environment::new();
    env.render_str(
        GENERATION_TEMPLATE,
        context! {
            topic => request.topic,
            target_url => target_url,
            extra_context => extra_context,
            communities => communities,
        },
    )
    .map_err(|e| ViralVibeError::internal(format!("Failed to render prompt template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use viralvibe_core::community::CommunityCatalog;

    fn request(topic: &str, url: Option<&str>, ids: &[&str]) -> GenerationRequest {
        GenerationRequest {
            topic: topic.to_string(),
            target_url: url.map(str::to_string),
            extra_context: None,
            selected_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_prompt_without_url_uses_placeholder() {
        let catalog = CommunityCatalog::with_defaults();
        let request = request("갤럭시 S24 사용기", None, &["dcinside"]);
        let communities = catalog.resolve(&request.selected_ids);

        let prompt = compose_prompt(&request, &communities).unwrap();
        assert!(prompt.contains("[링크]"));
        assert!(prompt.contains("(Link will be inserted by user)"));
        assert!(prompt.contains("갤럭시 S24 사용기"));

        // The persona block embeds the tone instruction verbatim
        let dcinside = catalog.find_by_id("dcinside").unwrap();
        assert!(prompt.contains(&dcinside.tone_prompt));
        assert!(prompt.contains("[ID: dcinside | Name: 디시인사이드]"));
    }

    #[test]
    fn test_prompt_with_url_embeds_it() {
        let catalog = CommunityCatalog::with_defaults();
        let request = request(
            "가성비 오마카세 추천",
            Some("https://blog.naver.com/me/1"),
            &["clien", "instagram"],
        );
        let communities = catalog.resolve(&request.selected_ids);

        let prompt = compose_prompt(&request, &communities).unwrap();
        assert!(prompt.contains("https://blog.naver.com/me/1"));
        assert!(!prompt.contains("(Link will be inserted by user)"));
        assert!(prompt.contains("[ID: clien | Name: 클리앙]"));
        assert!(prompt.contains("[ID: instagram | Name: 인스타그램]"));
    }

    #[test]
    fn test_prompt_defaults_blank_context() {
        let catalog = CommunityCatalog::with_defaults();
        let mut req = request("topic", None, &["clien"]);
        req.extra_context = Some("   ".to_string());
        let communities = catalog.resolve(&req.selected_ids);

        let prompt = compose_prompt(&req, &communities).unwrap();
        assert!(prompt.contains("Promote this naturally"));
    }
}
