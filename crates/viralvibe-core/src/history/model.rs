//! History domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generation::GenerationRequest;

/// A snapshot of a past request's inputs (not its outputs).
///
/// Records are appended most-recent-first and the log is capped at 50
/// entries; see `HistoryService`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
    /// Topic or keyword that was promoted
    pub topic: String,
    /// Target URL, empty string if none was supplied
    pub target_url: String,
    /// Extra context, empty string if none was supplied
    pub extra_context: String,
    /// Community identifiers selected for the request
    pub selected_ids: Vec<String>,
}

impl HistoryRecord {
    /// Creates a record snapshotting the given request's inputs.
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            topic: request.topic.clone(),
            target_url: request.target_url.clone().unwrap_or_default(),
            extra_context: request.extra_context.clone().unwrap_or_default(),
            selected_ids: request.selected_ids.clone(),
        }
    }
}
