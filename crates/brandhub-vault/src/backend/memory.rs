//! In-process backend

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::{Partition, StoreBackend, StoredRecord};
use crate::error::{StoreError, StoreResult};

/// Backend holding every partition in memory
///
/// Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    partitions: Mutex<HashMap<Partition, BTreeMap<String, Value>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in a partition
    #[must_use]
    pub fn len(&self, partition: Partition) -> usize {
        self.partitions.lock().get(&partition).map_or(0, BTreeMap::len)
    }

    #[must_use]
    pub fn is_empty(&self, partition: Partition) -> bool {
        self.len(partition) == 0
    }
}

#[async_trait]
impl StoreBackend for MemoryBackend {
    async fn open(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get_all(&self, partition: Partition) -> StoreResult<Vec<StoredRecord>> {
        let partitions = self.partitions.lock();
        Ok(partitions
            .get(&partition)
            .map(|records| {
                records
                    .iter()
                    .map(|(id, value)| StoredRecord::new(id.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, partition: Partition, id: &str) -> StoreResult<Option<StoredRecord>> {
        let partitions = self.partitions.lock();
        Ok(partitions
            .get(&partition)
            .and_then(|records| records.get(id))
            .map(|value| StoredRecord::new(id, value.clone())))
    }

    async fn replace_all(&self, partition: Partition, records: Vec<StoredRecord>) -> StoreResult<()> {
        let replacement = records.into_iter().map(|r| (r.id, r.value)).collect();
        self.partitions.lock().insert(partition, replacement);
        Ok(())
    }

    async fn insert(&self, partition: Partition, record: StoredRecord) -> StoreResult<()> {
        let mut partitions = self.partitions.lock();
        let records = partitions.entry(partition).or_default();
        if records.contains_key(&record.id) {
            return Err(StoreError::DuplicateKey {
                partition,
                id: record.id,
            });
        }
        records.insert(record.id, record.value);
        Ok(())
    }

    async fn delete(&self, partition: Partition, id: &str) -> StoreResult<bool> {
        Ok(self
            .partitions
            .lock()
            .get_mut(&partition)
            .is_some_and(|records| records.remove(id).is_some()))
    }

    async fn clear(&self, partition: Partition) -> StoreResult<()> {
        self.partitions.lock().remove(&partition);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_rejects_duplicates() {
        let backend = MemoryBackend::new();
        backend
            .insert(Partition::Brands, StoredRecord::new("a", json!({ "id": "a" })))
            .await
            .unwrap();

        let err = backend
            .insert(Partition::Brands, StoredRecord::new("a", json!({ "id": "a" })))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey { .. }));
    }

    #[tokio::test]
    async fn partitions_are_isolated() {
        let backend = MemoryBackend::new();
        backend
            .replace_all(
                Partition::Brands,
                vec![StoredRecord::new("b", json!(1)), StoredRecord::new("a", json!(2))],
            )
            .await
            .unwrap();

        assert_eq!(backend.len(Partition::Brands), 2);
        assert!(backend.is_empty(Partition::RestorePoints));

        let ids: Vec<_> = backend
            .get_all(Partition::Brands)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let backend = MemoryBackend::new();
        backend
            .insert(Partition::RestorePoints, StoredRecord::new("bp", json!({})))
            .await
            .unwrap();

        assert!(backend.delete(Partition::RestorePoints, "bp").await.unwrap());
        assert!(!backend.delete(Partition::RestorePoints, "bp").await.unwrap());
        assert!(backend.get(Partition::RestorePoints, "bp").await.unwrap().is_none());
    }
}
