//! Restore points
//!
//! A restore point is a labelled deep copy of the brand set, stored in the
//! `backups` partition with a content checksum so a damaged snapshot is
//! caught before it replaces live data.

use std::sync::Arc;

use brandhub_model::{now_millis, Brand};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::backend::{Partition, StoredRecord};
use crate::database::Database;
use crate::error::{StoreError, VaultError, VaultResult};

const DEFAULT_LABEL: &str = "Snapshot";

/// Snapshot of the brand set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestorePoint {
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub label: String,
    pub brand_count: usize,
    pub data: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl RestorePoint {
    /// Capture `brands` under `label`
    pub fn capture(label: &str, brands: &[Brand]) -> Result<Self, serde_json::Error> {
        let timestamp = now_millis();
        let data = brands
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        let label = match label.trim() {
            "" => DEFAULT_LABEL.to_string(),
            trimmed => trimmed.to_string(),
        };
        let suffix = uuid::Uuid::new_v4().simple().to_string();

        let mut point = Self {
            id: format!("bp-{timestamp}-{}", &suffix[..8]),
            timestamp,
            label,
            brand_count: data.len(),
            data,
            checksum: None,
        };
        point.checksum = Some(point.compute_checksum()?);
        Ok(point)
    }

    /// `blake3:<hex>` digest of the captured data
    pub fn compute_checksum(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(&self.data)?;
        Ok(format!("blake3:{}", blake3::hash(&bytes).to_hex()))
    }

    /// Whether the data matches the stored checksum
    ///
    /// Points written without a checksum always verify.
    #[must_use]
    pub fn verify(&self) -> bool {
        match &self.checksum {
            None => true,
            Some(expected) => self
                .compute_checksum()
                .is_ok_and(|actual| &actual == expected),
        }
    }
}

/// The `backups` partition
#[derive(Debug, Clone)]
pub struct RestorePointManager {
    db: Arc<Database>,
}

impl RestorePointManager {
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Every restore point, newest first
    ///
    /// Records that no longer decode are skipped.
    pub async fn list(&self) -> VaultResult<Vec<RestorePoint>> {
        let mut points: Vec<RestorePoint> = self
            .db
            .get_all(Partition::RestorePoints)
            .await?
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record.value) {
                Ok(point) => Some(point),
                Err(err) => {
                    warn!(id = %record.id, error = %err, "skipping unreadable restore point");
                    None
                }
            })
            .collect();
        points.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));
        Ok(points)
    }

    /// Snapshot `brands` and store the result
    pub async fn create(&self, label: &str, brands: &[Brand]) -> VaultResult<RestorePoint> {
        let point = RestorePoint::capture(label, brands).map_err(StoreError::from)?;
        let value = serde_json::to_value(&point).map_err(StoreError::from)?;
        self.db
            .insert(Partition::RestorePoints, StoredRecord::new(point.id.clone(), value))
            .await?;
        info!(id = %point.id, brands = point.brand_count, label = %point.label, "restore point created");
        Ok(point)
    }

    pub async fn get(&self, id: &str) -> VaultResult<RestorePoint> {
        let record = self
            .db
            .get(Partition::RestorePoints, id)
            .await?
            .ok_or_else(|| VaultError::RestorePointNotFound(id.to_string()))?;
        serde_json::from_value(record.value).map_err(|err| {
            VaultError::Store(StoreError::Corrupt {
                partition: Partition::RestorePoints,
                message: format!("{id}: {err}"),
            })
        })
    }

    /// Remove a restore point, returning whether it existed
    pub async fn delete(&self, id: &str) -> VaultResult<bool> {
        Ok(self.db.delete(Partition::RestorePoints, id).await?)
    }
}
