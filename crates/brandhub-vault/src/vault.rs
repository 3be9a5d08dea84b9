//! Brand persistence with a per-record write gate

use std::collections::HashSet;
use std::sync::Arc;

use brandhub_model::Brand;
use brandhub_schema::validate_brand;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::backend::{Partition, StoredRecord};
use crate::database::Database;
use crate::error::{StoreError, VaultResult};

/// Record left out of a save
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: String,
}

/// Outcome of [`BrandVault::save_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub saved: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl SaveReport {
    /// Ids of the records that were not written
    pub fn skipped_ids(&self) -> impl Iterator<Item = &str> {
        self.skipped.iter().map(|s| s.id.as_str())
    }
}

/// The `brands` partition
#[derive(Debug, Clone)]
pub struct BrandVault {
    db: Arc<Database>,
}

impl BrandVault {
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Every stored record, as stored
    pub async fn load_all(&self) -> VaultResult<Vec<Value>> {
        Ok(self
            .db
            .get_all(Partition::Brands)
            .await?
            .into_iter()
            .map(|record| record.value)
            .collect())
    }

    /// Replace the stored set with `brands`
    ///
    /// Each record passes the write gate on its own. A record that fails, or
    /// repeats an id already accepted, is skipped and reported; the others
    /// are written in one replace.
    pub async fn save_all(&self, brands: &[Brand]) -> VaultResult<SaveReport> {
        let mut report = SaveReport::default();
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(brands.len());

        for brand in brands {
            if let Err(err) = validate_brand(brand) {
                warn!(id = %brand.id, error = %err, "skipping invalid brand");
                report.skipped.push(SkippedRecord {
                    id: brand.id.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
            if !seen.insert(brand.id.as_str()) {
                warn!(id = %brand.id, "skipping duplicate brand id");
                report.skipped.push(SkippedRecord {
                    id: brand.id.clone(),
                    reason: "duplicate id".to_string(),
                });
                continue;
            }
            let value = serde_json::to_value(brand).map_err(StoreError::from)?;
            records.push(StoredRecord::new(brand.id.clone(), value));
        }

        report.saved = records.len();
        self.db.replace_all(Partition::Brands, records).await?;
        info!(saved = report.saved, skipped = report.skipped.len(), "brands saved");
        Ok(report)
    }

    /// Remove one brand, returning whether it existed
    pub async fn delete(&self, id: &str) -> VaultResult<bool> {
        Ok(self.db.delete(Partition::Brands, id).await?)
    }

    /// Remove every brand
    pub async fn clear(&self) -> VaultResult<()> {
        self.db.clear(Partition::Brands).await?;
        info!("brands cleared");
        Ok(())
    }
}
