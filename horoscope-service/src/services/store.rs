use crate::models::{Reading, ReadingFilter, StoredReading};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Logical collection every reading lives in.
pub const READINGS_COLLECTION: &str = "horoscopereading";

/// Persistence for generated readings.
///
/// Implementations must assign a fresh identifier on every insert (no
/// deduplication) and return query results in their natural order.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    async fn insert(&self, reading: &Reading) -> Result<String, AppError>;

    /// Readings matching `filter`, at most `limit` of them.
    async fn query(&self, filter: &ReadingFilter, limit: i64)
        -> Result<Vec<StoredReading>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;

    fn database_name(&self) -> String;

    async fn collection_names(&self) -> Result<Vec<String>, AppError>;
}

struct MemoryRecord {
    id: String,
    reading: Reading,
    created_at: DateTime<Utc>,
}

/// Process-local store that keeps readings in insertion order.
#[derive(Default)]
pub struct MemoryReadingStore {
    records: RwLock<Vec<MemoryRecord>>,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ReadingStore for MemoryReadingStore {
    async fn insert(&self, reading: &Reading) -> Result<String, AppError> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.records.write().await.push(MemoryRecord {
            id: id.clone(),
            reading: reading.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn query(
        &self,
        filter: &ReadingFilter,
        limit: i64,
    ) -> Result<Vec<StoredReading>, AppError> {
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let records = self.records.read().await;

        Ok(records
            .iter()
            .filter(|record| filter.matches(&record.reading))
            .take(limit)
            .map(|record| StoredReading {
                id: record.id.clone(),
                reading: record.reading.clone(),
                created_at: record.created_at.to_rfc3339(),
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn database_name(&self) -> String {
        "memory".to_string()
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        if self.is_empty().await {
            Ok(Vec::new())
        } else {
            Ok(vec![READINGS_COLLECTION.to_string()])
        }
    }
}
