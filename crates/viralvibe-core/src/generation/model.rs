//! Generation request/response models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Result, ViralVibeError};

/// Inputs for one content generation call.
///
/// Constructed fresh per user action and not persisted beyond the call;
/// the history log stores its own snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Topic or keyword to promote (required, non-empty)
    pub topic: String,
    /// URL the posts should drive traffic to
    pub target_url: Option<String>,
    /// Free-text emphasis supplied by the user
    pub extra_context: Option<String>,
    /// Selected community identifiers (non-empty)
    pub selected_ids: Vec<String>,
}

impl GenerationRequest {
    /// Validates the user-provided inputs.
    ///
    /// These checks are surfaced inline before any backend call is
    /// attempted.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(ViralVibeError::validation("주제나 키워드를 입력해주세요."));
        }
        if self.selected_ids.is_empty() {
            return Err(ViralVibeError::validation(
                "최소 한 개의 커뮤니티를 선택해주세요.",
            ));
        }
        Ok(())
    }
}

/// One generated post draft, as returned by the model.
///
/// Field names follow the wire contract of the schema-constrained response
/// (`communityId`, `title`, `content`, `hashtags`, `comment`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    /// Identifier of the community this draft targets
    pub community_id: String,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Hashtags, in model order
    pub hashtags: Vec<String>,
    /// Short viral comment for replying to others' posts or self-bumping
    pub comment: String,
}

/// Copyable fragment of a generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PostField {
    Title,
    Body,
    Comment,
}

impl GeneratedPost {
    /// Returns the plain-text fragment for clipboard copy.
    ///
    /// `Body` concatenates the content with the space-joined hashtags so a
    /// single paste carries both.
    pub fn fragment(&self, field: PostField) -> String {
        match field {
            PostField::Title => self.title.clone(),
            PostField::Body => {
                if self.hashtags.is_empty() {
                    self.content.clone()
                } else {
                    format!("{}\n\n{}", self.content, self.hashtags.join(" "))
                }
            }
            PostField::Comment => self.comment.clone(),
        }
    }
}
