//! Community domain model.
//!
//! Represents the online communities a promotional post can be tailored to.
//! Each community carries display metadata and a tone instruction used to
//! condition the generated text.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Category a community belongs to.
///
/// Serialized with the wire names (`COMMUNITY`, `SOCIAL`, ...) and displayed
/// with the Korean labels the selector UI used.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunityCategory {
    /// 커뮤니티 (종합/유머)
    #[strum(serialize = "커뮤니티 (종합/유머)")]
    Community,
    /// 소셜 미디어 (SNS)
    #[strum(serialize = "소셜 미디어 (SNS)")]
    Social,
    /// 블로그/지식공유
    #[strum(serialize = "블로그/지식공유")]
    Blog,
    /// 게임 커뮤니티
    #[strum(serialize = "게임 커뮤니티")]
    Game,
    /// 쇼핑/핫딜/재테크
    #[strum(serialize = "쇼핑/핫딜/재테크")]
    Shopping,
    /// 취미/전문 분야
    #[strum(serialize = "취미/전문 분야")]
    Special,
}

/// A community profile carrying tone/style instructions for generation.
///
/// Entries are immutable and defined at process start; the catalog never
/// mutates them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Community {
    /// Unique identifier (e.g. "dcinside")
    pub id: String,
    /// Display name of the community
    pub name: String,
    /// Single emoji shown next to the name
    pub emoji: String,
    /// URL of the writing page or main page
    pub url: String,
    /// Category used for grouping in selectors
    pub category: CommunityCategory,
    /// Instructions on how to write for this specific community
    pub tone_prompt: String,
}
