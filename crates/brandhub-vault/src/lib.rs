//! BrandHub Vault
//!
//! Local persistence for brand records, restore points, and the
//! [`BrandService`] facade that keeps everything flowing through the
//! reconciliation engine.
//!
//! # Core Concepts
//!
//! - [`StoreBackend`]: keyed record store with a `brands` and a `backups`
//!   partition. [`MemoryBackend`] and [`FileBackend`] ship with the crate
//! - [`Database`]: lazy one-time open, single writer, concurrent readers
//! - [`BrandVault`]: the write gate. Every record is validated on save;
//!   failures are skipped and listed in the [`SaveReport`]
//! - [`RestorePointManager`]: checksummed snapshots of the brand set
//! - [`VaultConfig`]: backend choice, data directory and sample seeding,
//!   loadable from TOML
//!
//! # Example
//!
//! ```rust,ignore
//! use brandhub_vault::{BrandService, VaultConfig, BackendKind};
//!
//! let service = BrandService::from_config(&VaultConfig::new().with_backend(BackendKind::Memory));
//! let brands = service.fetch_brands().await?;
//! let point = service.create_restore_point("before rebrand").await?;
//! service.restore(&point.id).await?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod backend;
pub mod config;
pub mod database;
pub mod error;
pub mod restore;
pub mod service;
pub mod vault;

pub use backend::{FileBackend, MemoryBackend, Partition, StoreBackend, StoredRecord};
pub use config::{BackendKind, VaultConfig};
pub use database::Database;
pub use error::{StoreError, StoreResult, VaultError, VaultResult};
pub use restore::{RestorePoint, RestorePointManager};
pub use service::{BrandService, ImportReport};
pub use vault::{BrandVault, SaveReport, SkippedRecord};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn export_then_import_is_stable() {
        let service = BrandService::new(Arc::new(MemoryBackend::new()));
        let exported = service.export_json().await.unwrap();

        let imported = service.import_json(&exported).await.unwrap();

        assert!(imported.report.skipped.is_empty());
        assert_eq!(service.export_json().await.unwrap(), exported);
    }

    #[tokio::test]
    async fn factory_reset_restores_samples() {
        let service = BrandService::new(Arc::new(MemoryBackend::new())).with_seed_samples(false);
        service
            .import_json(r#"[{ "id": "temp", "name": "Temporary" }]"#)
            .await
            .unwrap();

        let samples = service.factory_reset().await.unwrap();

        let ids: Vec<_> = service.fetch_brands().await.unwrap().into_iter().map(|b| b.id).collect();
        assert!(!ids.contains(&"temp".to_string()));
        assert_eq!(ids.len(), samples.len());
    }
}
