//! Error types for the vault
//!
//! Storage failures propagate; per-record validation failures never reach
//! here (they are reported in a [`SaveReport`](crate::SaveReport)).

use std::path::PathBuf;

use brandhub_reconcile::RepairError;

use crate::backend::Partition;

/// Failure of the underlying store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored partition could not be decoded
    #[error("partition '{partition}' is corrupt: {message}")]
    Corrupt { partition: Partition, message: String },

    /// Record could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Insert of an id that already exists
    #[error("duplicate key '{id}' in partition '{partition}'")]
    DuplicateKey { partition: Partition, id: String },

    /// Store refused the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors surfaced by the vault and the brand service
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    /// Storage failure
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Import document is not valid JSON
    #[error("import is not valid json: {0}")]
    ImportParse(#[source] serde_json::Error),

    /// Import document is valid JSON but not an array of brands
    #[error("import must be a json array of brands, got {found}")]
    ImportShape { found: &'static str },

    /// Record could not be repaired
    #[error("repair failed: {0}")]
    Repair(#[from] RepairError),

    /// No restore point with this id
    #[error("restore point not found: {0}")]
    RestorePointNotFound(String),

    /// Restore point data does not match its checksum
    #[error("restore point '{id}' failed checksum verification")]
    ChecksumMismatch { id: String },

    /// Configuration file unreadable
    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file malformed
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl VaultError {
    /// Whether retrying the same operation may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Store(StoreError::Io { .. } | StoreError::Unavailable(_))
        )
    }
}

/// Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(VaultError::from(StoreError::Unavailable("locked".into())).is_retryable());
        assert!(!VaultError::RestorePointNotFound("bp-1".into()).is_retryable());
        assert!(!VaultError::ImportShape { found: "an object" }.is_retryable());
    }

    #[test]
    fn messages_are_lowercase() {
        let err = StoreError::DuplicateKey {
            partition: Partition::Brands,
            id: "acme".into(),
        };
        assert_eq!(err.to_string(), "duplicate key 'acme' in partition 'brands'");
    }
}
