//! BrandHub Reconciliation Engine
//!
//! Turns any brand-shaped JSON (old exports, partial edits, records written
//! by earlier versions) into a complete [`Brand`](brandhub_model::Brand)
//! whose root fields and typed sections agree.
//!
//! # Core Concepts
//!
//! - [`SyncDirection`]: which side wins. `top-level` re-derives sections from
//!   the root; `sections` first lifts section payloads into the root
//! - [`Reconciler`]: the pipeline, with an injectable clock
//! - Root merge: blueprint ← input, field by field, with one merge function
//!   per nested record
//! - Coercions: invalid hex codes, URLs and blank names fall back so every
//!   repaired record passes [`brandhub_schema::validate`]
//!
//! Repair is idempotent in either direction: repairing a repaired record
//! returns it unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use brandhub_reconcile::{repair, SyncDirection};
//! use serde_json::json;
//!
//! let brand = repair(&json!({ "id": "acme", "name": "Acme" }), SyncDirection::TopLevel)?;
//! assert_eq!(brand.sections.len(), 20);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod direction;
pub mod engine;
pub mod error;
mod lift;
mod merge;

pub use direction::{ParseDirectionError, SyncDirection};
pub use engine::{commit_edit, create_brand, repair, repair_brand, Clock, Reconciler};
pub use error::{RepairError, RepairResult};
pub use merge::{coerce_color, FALLBACK_HEX};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use brandhub_model::{SectionData, SectionKind};
    use serde_json::json;

    #[test]
    fn repaired_records_pass_the_gate() {
        let brand = repair(
            &json!({
                "id": "messy",
                "name": "   ",
                "logoUrl": "logo.png",
                "colors": [{ "name": "Bad", "hex": "blue" }, { "name": "Bare", "hex": "00ff00" }],
                "logos": { "mono": "relative/mono.svg", "white": "https://cdn.example.com/w.svg" }
            }),
            SyncDirection::TopLevel,
        )
        .unwrap();

        let value = serde_json::to_value(&brand).unwrap();
        assert!(brandhub_schema::validate(&value).is_ok());
        assert_eq!(brand.colors[0].hex, FALLBACK_HEX);
        assert_eq!(brand.colors[1].hex, "#00ff00");
        assert_eq!(brand.logos.get("mono"), None);
    }

    #[test]
    fn sanitize_runs_before_merge() {
        let brand = repair(
            &json!({ "id": "x", "logos": { "color": "https://www.dropbox.com/s/abc/logo.png?dl=0" } }),
            SyncDirection::TopLevel,
        )
        .unwrap();

        assert_eq!(brand.logos.color, "https://dl.dropboxusercontent.com/s/abc/logo.png?raw=1");
        let Some(SectionData::Logos(logos)) = brand.section(SectionKind::Logos).map(|s| s.data.clone()) else {
            panic!("logos section missing");
        };
        assert_eq!(logos.variants.color, brand.logos.color);
    }
}
