//! Testing utilities for the BrandHub workspace
//!
//! Shared fixtures: partial documents as they arrive from old exports,
//! brands that trip the write gate, and services over in-memory storage.

#![allow(missing_docs)]

use std::sync::Arc;

use brandhub_model::{clone_blueprint, Brand, Color, ColorUsage};
use brandhub_vault::{BrandService, MemoryBackend};
use serde_json::{json, Value};

/// Fixed clock for deterministic repairs
pub const FIXED_MILLIS: i64 = 1_700_000_000_000;

pub fn fixed_clock() -> i64 {
    FIXED_MILLIS
}

/// Shared Dropbox link and its direct form
pub const DROPBOX_SHARE: &str = "https://www.dropbox.com/s/abc/logo.png?dl=0";
pub const DROPBOX_DIRECT: &str = "https://dl.dropboxusercontent.com/s/abc/logo.png?raw=1";

/// Old export carrying only a name and one color
pub fn acme_partial() -> Value {
    json!({
        "id": "acme",
        "name": "Acme",
        "colors": [{ "name": "Red", "hex": "#ff0000", "usage": "primary" }]
    })
}

/// Complete brand that passes the write gate
pub fn valid_brand(id: &str, name: &str) -> Brand {
    let mut brand = clone_blueprint();
    brand.id = id.to_string();
    brand.name = name.to_string();
    brand.updated_at = FIXED_MILLIS;
    brand
}

/// Brand the write gate rejects: one color has a three-character hex
pub fn brand_with_bad_hex(id: &str) -> Brand {
    let mut brand = valid_brand(id, "Broken Palette");
    brand.colors.push(Color::new("Truncated", "#12", ColorUsage::Accent));
    brand
}

/// Service over fresh memory storage, without sample seeding
pub fn memory_service() -> BrandService {
    BrandService::new(Arc::new(MemoryBackend::new())).with_seed_samples(false)
}

/// Service and the backend behind it, for tests that inspect storage
pub fn memory_service_with_backend() -> (BrandService, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let service = BrandService::new(backend.clone()).with_seed_samples(false);
    (service, backend)
}
