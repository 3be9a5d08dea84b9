//! Vault configuration

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::{FileBackend, MemoryBackend, StoreBackend};
use crate::error::{VaultError, VaultResult};

/// Which backend holds the data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Process-local, lost on exit
    Memory,
    /// JSON files under `data_dir`
    #[default]
    File,
}

/// Vault configuration
///
/// ```toml
/// backend = "file"
/// data_dir = ".brandhub"
/// seed_samples = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub backend: BackendKind,
    /// Directory for the file backend
    pub data_dir: PathBuf,
    /// Populate an empty store with the sample brands on first fetch
    pub seed_samples: bool,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            data_dir: PathBuf::from(".brandhub"),
            seed_samples: true,
        }
    }
}

impl VaultConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_seed_samples(mut self, seed: bool) -> Self {
        self.seed_samples = seed;
        self
    }

    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml_str(text: &str) -> VaultResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> VaultResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| VaultError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded vault config");
        Self::from_toml_str(&text)
    }

    /// Instantiate the configured backend
    #[must_use]
    pub fn build_backend(&self) -> Arc<dyn StoreBackend> {
        match self.backend {
            BackendKind::Memory => Arc::new(MemoryBackend::new()),
            BackendKind::File => Arc::new(FileBackend::new(&self.data_dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = VaultConfig::from_toml_str(r#"backend = "memory""#).unwrap();

        assert_eq!(
            config,
            VaultConfig::default().with_backend(BackendKind::Memory)
        );
    }

    #[test]
    fn full_toml() {
        let config = VaultConfig::from_toml_str(
            r#"
            backend = "file"
            data_dir = "/var/lib/brandhub"
            seed_samples = false
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/brandhub"));
        assert!(!config.seed_samples);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = VaultConfig::from_toml_str(r#"backend = "s3""#).unwrap_err();
        assert!(matches!(err, VaultError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = VaultConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, VaultError::ConfigIo { .. }));
    }
}
