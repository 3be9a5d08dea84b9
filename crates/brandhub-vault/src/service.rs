//! Brand service facade
//!
//! Ties the engine to storage: everything read from storage, an import or a
//! restore point is repaired before callers see it, and everything written
//! passes the write gate in [`BrandVault::save_all`].

use std::sync::Arc;

use brandhub_model::{sample_brands, Brand};
use brandhub_reconcile::{Reconciler, SyncDirection};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::backend::StoreBackend;
use crate::config::VaultConfig;
use crate::database::Database;
use crate::error::{StoreError, VaultError, VaultResult};
use crate::restore::{RestorePoint, RestorePointManager};
use crate::vault::{BrandVault, SaveReport, SkippedRecord};

/// Outcome of an import or restore
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// Repaired brands offered to the store
    pub brands: Vec<Brand>,
    pub report: SaveReport,
}

#[derive(Debug, Clone)]
pub struct BrandService {
    vault: BrandVault,
    restore_points: RestorePointManager,
    reconciler: Reconciler,
    seed_samples: bool,
}

impl BrandService {
    /// Service over `backend`, seeding an empty store with samples
    #[must_use]
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        let db = Arc::new(Database::new(backend));
        Self {
            vault: BrandVault::new(db.clone()),
            restore_points: RestorePointManager::new(db),
            reconciler: Reconciler::new(),
            seed_samples: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &VaultConfig) -> Self {
        Self::new(config.build_backend()).with_seed_samples(config.seed_samples)
    }

    #[inline]
    #[must_use]
    pub fn with_reconciler(mut self, reconciler: Reconciler) -> Self {
        self.reconciler = reconciler;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_seed_samples(mut self, seed: bool) -> Self {
        self.seed_samples = seed;
        self
    }

    #[must_use]
    pub fn vault(&self) -> &BrandVault {
        &self.vault
    }

    #[must_use]
    pub fn restore_points(&self) -> &RestorePointManager {
        &self.restore_points
    }

    /// Every stored brand, repaired
    ///
    /// An empty store reads as the sample brands when seeding is on. Nothing
    /// is written; the samples reach storage only through a later save.
    pub async fn fetch_brands(&self) -> VaultResult<Vec<Brand>> {
        let stored = self.vault.load_all().await?;
        if stored.is_empty() && self.seed_samples {
            debug!("store is empty, serving sample brands");
            return self.repaired_samples();
        }

        let (brands, dropped) = self.repair_all(&stored);
        for skipped in &dropped {
            warn!(id = %skipped.id, reason = %skipped.reason, "dropping unrepairable record");
        }
        Ok(brands)
    }

    /// Remove one brand, returning whether it existed
    pub async fn delete_brand(&self, id: &str) -> VaultResult<bool> {
        let removed = self.vault.delete(id).await?;
        if removed {
            info!(%id, "brand deleted");
        }
        Ok(removed)
    }

    /// Replace the stored set with `brands`
    pub async fn sync_database(&self, brands: &[Brand]) -> VaultResult<SaveReport> {
        self.vault.save_all(brands).await
    }

    /// Drop every brand and start over from the sample set
    ///
    /// A single partition replace; readers never see an empty store.
    pub async fn factory_reset(&self) -> VaultResult<Vec<Brand>> {
        let samples = self.repaired_samples()?;
        self.vault.save_all(&samples).await?;
        info!(brands = samples.len(), "factory reset complete");
        Ok(samples)
    }

    /// Import a JSON array of brands, replacing the stored set
    ///
    /// The document must parse and must be an array; anything past that is
    /// repaired. Elements that are not objects are skipped.
    pub async fn import_json(&self, text: &str) -> VaultResult<ImportReport> {
        let document: Value = serde_json::from_str(text).map_err(VaultError::ImportParse)?;
        let Value::Array(items) = document else {
            return Err(VaultError::ImportShape {
                found: json_kind(&document),
            });
        };
        self.import_values(&items).await
    }

    /// Pretty-printed JSON array of the stored brands
    ///
    /// Read-only. An empty store exports the samples when seeding is on.
    pub async fn export_json(&self) -> VaultResult<String> {
        let brands = self.fetch_brands().await?;
        Ok(serde_json::to_string_pretty(&brands).map_err(StoreError::from)?)
    }

    /// Snapshot the stored brands
    ///
    /// Writes only the restore point. An empty store snapshots the samples
    /// when seeding is on.
    pub async fn create_restore_point(&self, label: &str) -> VaultResult<RestorePoint> {
        let brands = self.fetch_brands().await?;
        self.restore_points.create(label, &brands).await
    }

    pub async fn list_restore_points(&self) -> VaultResult<Vec<RestorePoint>> {
        self.restore_points.list().await
    }

    pub async fn delete_restore_point(&self, id: &str) -> VaultResult<bool> {
        self.restore_points.delete(id).await
    }

    /// Replace the stored set with a restore point's contents
    pub async fn restore(&self, id: &str) -> VaultResult<ImportReport> {
        let point = self.restore_points.get(id).await?;
        if !point.verify() {
            warn!(%id, "restore point failed checksum verification");
            return Err(VaultError::ChecksumMismatch { id: id.to_string() });
        }
        let report = self.import_values(&point.data).await?;
        info!(%id, restored = report.report.saved, "restore point applied");
        Ok(report)
    }

    async fn import_values(&self, items: &[Value]) -> VaultResult<ImportReport> {
        let (brands, mut skipped) = self.repair_all(items);
        let mut report = self.vault.save_all(&brands).await?;
        skipped.append(&mut report.skipped);
        report.skipped = skipped;
        Ok(ImportReport { brands, report })
    }

    fn repair_all(&self, items: &[Value]) -> (Vec<Brand>, Vec<SkippedRecord>) {
        let mut brands = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.reconciler.repair(item, SyncDirection::TopLevel) {
                Ok(brand) => brands.push(brand),
                Err(err) => skipped.push(SkippedRecord {
                    id: item
                        .get("id")
                        .and_then(Value::as_str)
                        .map_or_else(|| format!("#{index}"), str::to_string),
                    reason: err.to_string(),
                }),
            }
        }
        (brands, skipped)
    }

    fn repaired_samples(&self) -> VaultResult<Vec<Brand>> {
        sample_brands()
            .iter()
            .map(|brand| {
                self.reconciler
                    .repair_brand(brand, SyncDirection::TopLevel)
                    .map_err(VaultError::from)
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryBackend, MockStoreBackend, Partition, StoredRecord};
    use serde_json::json;

    fn service() -> BrandService {
        BrandService::new(Arc::new(MemoryBackend::new()))
    }

    #[tokio::test]
    async fn empty_store_reads_as_samples_without_writing() {
        let service = service();

        let first = service.fetch_brands().await.unwrap();
        assert_eq!(first.len(), 2);
        assert!(service.vault().load_all().await.unwrap().is_empty());
        assert_eq!(service.fetch_brands().await.unwrap(), first);

        service.sync_database(&first[1..]).await.unwrap();
        assert_eq!(service.fetch_brands().await.unwrap(), first[1..]);
    }

    #[tokio::test]
    async fn export_and_snapshot_leave_brands_untouched() {
        let backend = Arc::new(MemoryBackend::new());
        let service = BrandService::new(backend.clone());

        let exported: Vec<Value> = serde_json::from_str(&service.export_json().await.unwrap()).unwrap();
        let point = service.create_restore_point("samples").await.unwrap();

        assert_eq!(exported.len(), 2);
        assert_eq!(point.brand_count, 2);
        assert!(backend.is_empty(Partition::Brands));
        assert_eq!(backend.len(Partition::RestorePoints), 1);
    }

    #[tokio::test]
    async fn factory_reset_is_a_single_replace() {
        let mut backend = MockStoreBackend::new();
        backend.expect_open().returning(|| Ok(()));
        backend.expect_clear().never();
        backend
            .expect_replace_all()
            .times(1)
            .withf(|partition, records| *partition == Partition::Brands && records.len() == 2)
            .returning(|_, _| Ok(()));
        let service = BrandService::new(Arc::new(backend));

        assert_eq!(service.factory_reset().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn seeding_can_be_disabled() {
        let service = service().with_seed_samples(false);
        assert!(service.fetch_brands().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn import_rejects_bad_documents_before_repair() {
        let service = service();

        let err = service.import_json("[{").await.unwrap_err();
        assert!(matches!(err, VaultError::ImportParse(_)));

        let err = service.import_json(r#"{"id": "x"}"#).await.unwrap_err();
        assert!(matches!(err, VaultError::ImportShape { found: "an object" }));
    }

    #[tokio::test]
    async fn import_skips_non_objects() {
        let service = service();
        let text = json!([{ "id": "kept", "name": "Kept" }, 42]).to_string();

        let imported = service.import_json(&text).await.unwrap();

        assert_eq!(imported.brands.len(), 1);
        assert_eq!(imported.report.saved, 1);
        assert_eq!(imported.report.skipped_ids().collect::<Vec<_>>(), ["#1"]);
    }

    #[tokio::test]
    async fn restore_rejects_tampered_points() {
        let backend = Arc::new(MemoryBackend::new());
        let service = BrandService::new(backend.clone());
        let point = service.create_restore_point("base").await.unwrap();

        let mut tampered = point.clone();
        tampered.data.pop();
        backend
            .replace_all(
                Partition::RestorePoints,
                vec![StoredRecord::new(point.id.clone(), serde_json::to_value(&tampered).unwrap())],
            )
            .await
            .unwrap();

        let err = service.restore(&point.id).await.unwrap_err();
        assert!(matches!(err, VaultError::ChecksumMismatch { id } if id == point.id));
    }

    #[tokio::test]
    async fn unavailable_store_surfaces() {
        let mut backend = MockStoreBackend::new();
        backend.expect_open().returning(|| Ok(()));
        backend
            .expect_get_all()
            .returning(|_| Err(StoreError::Unavailable("blocked".into())));
        let service = BrandService::new(Arc::new(backend));

        let err = service.export_json().await.unwrap_err();
        assert!(err.is_retryable());
    }
}
