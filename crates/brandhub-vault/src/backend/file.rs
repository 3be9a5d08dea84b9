//! JSON-file backend
//!
//! Each partition is one file, `<dir>/<partition>.json`, holding an object
//! keyed by record id. Writes go to a temporary file that is then renamed
//! over the original.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::debug;

use super::{Partition, StoreBackend, StoredRecord};
use crate::error::{StoreError, StoreResult};

/// Backend persisting partitions as JSON files in a directory
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBackend {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding a partition
    #[must_use]
    pub fn partition_path(&self, partition: Partition) -> PathBuf {
        self.dir.join(format!("{}.json", partition.as_str()))
    }

    async fn read(&self, partition: Partition) -> StoreResult<Map<String, Value>> {
        let path = self.partition_path(partition);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(StoreError::io(path, err)),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(records)) => Ok(records),
            Ok(_) => Err(StoreError::Corrupt {
                partition,
                message: "expected an object keyed by id".to_string(),
            }),
            Err(err) => Err(StoreError::Corrupt {
                partition,
                message: err.to_string(),
            }),
        }
    }

    async fn write(&self, partition: Partition, records: &Map<String, Value>) -> StoreResult<()> {
        let path = self.partition_path(partition);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(records)?;

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|err| StoreError::io(&tmp, err))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|err| StoreError::io(&path, err))?;

        debug!(path = %path.display(), records = records.len(), "wrote partition");
        Ok(())
    }
}

#[async_trait]
impl StoreBackend for FileBackend {
    async fn open(&self) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| StoreError::io(&self.dir, err))
    }

    async fn get_all(&self, partition: Partition) -> StoreResult<Vec<StoredRecord>> {
        Ok(self
            .read(partition)
            .await?
            .into_iter()
            .map(|(id, value)| StoredRecord::new(id, value))
            .collect())
    }

    async fn get(&self, partition: Partition, id: &str) -> StoreResult<Option<StoredRecord>> {
        let mut records = self.read(partition).await?;
        Ok(records.remove(id).map(|value| StoredRecord::new(id, value)))
    }

    async fn replace_all(&self, partition: Partition, records: Vec<StoredRecord>) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let records: Map<String, Value> = records.into_iter().map(|r| (r.id, r.value)).collect();
        self.write(partition, &records).await
    }

    async fn insert(&self, partition: Partition, record: StoredRecord) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read(partition).await?;
        if records.contains_key(&record.id) {
            return Err(StoreError::DuplicateKey {
                partition,
                id: record.id,
            });
        }
        records.insert(record.id, record.value);
        self.write(partition, &records).await
    }

    async fn delete(&self, partition: Partition, id: &str) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read(partition).await?;
        if records.remove(id).is_none() {
            return Ok(false);
        }
        self.write(partition, &records).await?;
        Ok(true)
    }

    async fn clear(&self, partition: Partition) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write(partition, &Map::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("vault"));
        backend.open().await.unwrap();

        assert!(backend.get_all(Partition::Brands).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let first = FileBackend::new(dir.path());
        first.open().await.unwrap();
        first
            .insert(Partition::Brands, StoredRecord::new("acme", json!({ "id": "acme" })))
            .await
            .unwrap();

        let second = FileBackend::new(dir.path());
        let record = second.get(Partition::Brands, "acme").await.unwrap().unwrap();
        assert_eq!(record.value, json!({ "id": "acme" }));
        assert!(second.partition_path(Partition::Brands).ends_with("brands.json"));
        assert!(!dir.path().join("brands.json.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_partition_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        tokio::fs::write(backend.partition_path(Partition::RestorePoints), "[1, 2")
            .await
            .unwrap();

        let err = backend.get_all(Partition::RestorePoints).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { partition: Partition::RestorePoints, .. }));
    }
}
