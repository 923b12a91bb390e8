//! History log service.
//!
//! Append-only log of past request inputs, most-recent-first, hard-capped
//! at 50 records. The caller records a snapshot only after a generation
//! succeeds.

use std::sync::Arc;

use viralvibe_core::error::Result;
use viralvibe_core::generation::GenerationRequest;
use viralvibe_core::history::{HistoryRecord, HistoryRepository};

/// Hard cap on the number of persisted records; the oldest is evicted on
/// overflow.
pub const HISTORY_LIMIT: usize = 50;

/// Service managing the persisted history log.
pub struct HistoryService {
    repository: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self { repository }
    }

    /// Returns the full log, most-recent-first.
    pub async fn list(&self) -> Result<Vec<HistoryRecord>> {
        self.repository.get_all().await
    }

    /// Snapshots the request inputs at the head of the log, evicting the
    /// oldest record past the cap.
    pub async fn record(&self, request: &GenerationRequest) -> Result<HistoryRecord> {
        let record = HistoryRecord::from_request(request);

        let mut records = self.repository.get_all().await?;
        records.insert(0, record.clone());
        records.truncate(HISTORY_LIMIT);
        self.repository.save_all(&records).await?;

        Ok(record)
    }

    /// Deletes the record with the given id.
    ///
    /// A missing id is a silent no-op; remaining records keep their
    /// relative order.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.repository.get_all().await?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            tracing::debug!(id, "history record not found, nothing deleted");
            return Ok(());
        }

        self.repository.save_all(&records).await
    }

    /// Clears the entire log.
    pub async fn clear(&self) -> Result<()> {
        self.repository.save_all(&[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory repository double.
    #[derive(Default)]
    struct MemoryHistoryRepository {
        records: Mutex<Vec<HistoryRecord>>,
    }

    #[async_trait::async_trait]
    impl HistoryRepository for MemoryHistoryRepository {
        async fn get_all(&self) -> Result<Vec<HistoryRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn save_all(&self, records: &[HistoryRecord]) -> Result<()> {
            *self.records.lock().unwrap() = records.to_vec();
            Ok(())
        }
    }

    fn request(topic: &str) -> GenerationRequest {
        GenerationRequest {
            topic: topic.to_string(),
            target_url: None,
            extra_context: None,
            selected_ids: vec!["dcinside".to_string()],
        }
    }

    fn service() -> HistoryService {
        HistoryService::new(Arc::new(MemoryHistoryRepository::default()))
    }

    #[tokio::test]
    async fn test_record_prepends_newest_first() {
        let service = service();
        service.record(&request("first")).await.unwrap();
        service.record(&request("second")).await.unwrap();

        let records = service.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].topic, "second");
        assert_eq!(records[1].topic, "first");
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest() {
        let service = service();

        let oldest = service.record(&request("topic-0")).await.unwrap();
        for i in 1..=HISTORY_LIMIT {
            service.record(&request(&format!("topic-{}", i))).await.unwrap();
        }

        let records = service.list().await.unwrap();
        assert_eq!(records.len(), HISTORY_LIMIT);
        assert!(records.iter().all(|r| r.id != oldest.id));
        assert_eq!(records[0].topic, format!("topic-{}", HISTORY_LIMIT));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_record() {
        let service = service();
        service.record(&request("a")).await.unwrap();
        let target = service.record(&request("b")).await.unwrap();
        service.record(&request("c")).await.unwrap();

        service.delete(&target.id).await.unwrap();

        let records = service.list().await.unwrap();
        let topics: Vec<&str> = records.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(topics, vec!["c", "a"]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let service = service();
        service.record(&request("a")).await.unwrap();

        service.delete("no-such-id").await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_empties_log() {
        let service = service();
        service.record(&request("a")).await.unwrap();
        service.record(&request("b")).await.unwrap();

        service.clear().await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }
}
