//! History repository trait.
//!
//! Defines the interface for history persistence, decoupling the history
//! service from the storage mechanism. The log is small (≤50 records) and
//! is always read and rewritten wholesale.

use super::model::HistoryRecord;
use crate::error::Result;

/// An abstract repository for the persisted history log.
#[async_trait::async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Retrieves the full log, most-recent-first.
    ///
    /// A missing or empty store yields an empty log, not an error.
    async fn get_all(&self) -> Result<Vec<HistoryRecord>>;

    /// Replaces the full log with the given records.
    async fn save_all(&self, records: &[HistoryRecord]) -> Result<()>;
}
