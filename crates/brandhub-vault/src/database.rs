//! Shared handle over a backend
//!
//! Opens the backend lazily on first use, exactly once. Writes hold the
//! write half of a lock so they never interleave with each other or with
//! reads; reads share the read half.

use std::sync::Arc;

use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, info};

use crate::backend::{Partition, StoreBackend, StoredRecord};
use crate::error::{StoreError, StoreResult};

pub struct Database {
    backend: Arc<dyn StoreBackend>,
    ready: OnceCell<()>,
    lock: RwLock<()>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("opened", &self.ready.initialized())
            .finish_non_exhaustive()
    }
}

impl Database {
    #[must_use]
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        Self {
            backend,
            ready: OnceCell::new(),
            lock: RwLock::new(()),
        }
    }

    /// Open the backend if no call has done so yet
    ///
    /// A failed open is not cached; the next call tries again.
    pub async fn ensure_open(&self) -> StoreResult<()> {
        self.ready
            .get_or_try_init(|| async {
                self.backend.open().await?;
                info!("store opened");
                Ok::<(), StoreError>(())
            })
            .await
            .map(|_| ())
    }

    pub async fn get_all(&self, partition: Partition) -> StoreResult<Vec<StoredRecord>> {
        self.ensure_open().await?;
        let _read = self.lock.read().await;
        self.backend.get_all(partition).await
    }

    pub async fn get(&self, partition: Partition, id: &str) -> StoreResult<Option<StoredRecord>> {
        self.ensure_open().await?;
        let _read = self.lock.read().await;
        self.backend.get(partition, id).await
    }

    pub async fn replace_all(&self, partition: Partition, records: Vec<StoredRecord>) -> StoreResult<()> {
        self.ensure_open().await?;
        let _write = self.lock.write().await;
        debug!(%partition, records = records.len(), "replacing partition");
        self.backend.replace_all(partition, records).await
    }

    pub async fn insert(&self, partition: Partition, record: StoredRecord) -> StoreResult<()> {
        self.ensure_open().await?;
        let _write = self.lock.write().await;
        self.backend.insert(partition, record).await
    }

    pub async fn delete(&self, partition: Partition, id: &str) -> StoreResult<bool> {
        self.ensure_open().await?;
        let _write = self.lock.write().await;
        self.backend.delete(partition, id).await
    }

    pub async fn clear(&self, partition: Partition) -> StoreResult<()> {
        self.ensure_open().await?;
        let _write = self.lock.write().await;
        self.backend.clear(partition).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockStoreBackend;

    #[tokio::test]
    async fn opens_once() {
        let mut backend = MockStoreBackend::new();
        backend.expect_open().times(1).returning(|| Ok(()));
        backend.expect_get_all().times(2).returning(|_| Ok(Vec::new()));

        let db = Database::new(Arc::new(backend));
        db.get_all(Partition::Brands).await.unwrap();
        db.get_all(Partition::RestorePoints).await.unwrap();
    }

    #[tokio::test]
    async fn failed_open_is_retried() {
        let mut backend = MockStoreBackend::new();
        let mut seq = mockall::Sequence::new();
        backend
            .expect_open()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(StoreError::Unavailable("locked".into())));
        backend.expect_open().times(1).in_sequence(&mut seq).returning(|| Ok(()));
        backend.expect_clear().times(1).returning(|_| Ok(()));

        let db = Database::new(Arc::new(backend));
        assert!(db.clear(Partition::Brands).await.is_err());
        db.clear(Partition::Brands).await.unwrap();
    }
}
