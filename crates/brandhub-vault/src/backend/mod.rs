//! Storage backends
//!
//! A backend is a keyed record store with two partitions. It knows nothing
//! about brands: records are opaque JSON keyed by id.

mod file;
mod memory;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreResult;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Named record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Partition {
    /// Brand records
    #[serde(rename = "brands")]
    Brands,
    /// Restore points
    #[serde(rename = "backups")]
    RestorePoints,
}

impl Partition {
    pub const ALL: [Partition; 2] = [Partition::Brands, Partition::RestorePoints];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Partition::Brands => "brands",
            Partition::RestorePoints => "backups",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored record
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: String,
    pub value: Value,
}

impl StoredRecord {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// Keyed record store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Prepare the store; called once before any other operation
    async fn open(&self) -> StoreResult<()>;

    /// Every record of a partition, ordered by id
    async fn get_all(&self, partition: Partition) -> StoreResult<Vec<StoredRecord>>;

    async fn get(&self, partition: Partition, id: &str) -> StoreResult<Option<StoredRecord>>;

    /// Replace the partition's contents in one step
    async fn replace_all(&self, partition: Partition, records: Vec<StoredRecord>) -> StoreResult<()>;

    /// Add a record; fails with `DuplicateKey` if the id exists
    async fn insert(&self, partition: Partition, record: StoredRecord) -> StoreResult<()>;

    /// Remove a record, returning whether it existed
    async fn delete(&self, partition: Partition, id: &str) -> StoreResult<bool>;

    async fn clear(&self, partition: Partition) -> StoreResult<()>;
}
