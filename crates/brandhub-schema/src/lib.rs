//! BrandHub Schema
//!
//! The write gate every record passes before it reaches storage.
//!
//! # Core Concepts
//!
//! - [`validate`]: decode a raw record into a [`Brand`](brandhub_model::Brand)
//!   and check the field rules
//! - [`validate_brand`]: the same rules on a typed record
//! - [`validate_many`]: batch audit with a [`ValidationSummary`]
//! - [`rules`]: hex, URL and presence checks, reused by the repair path
//!
//! # Example
//!
//! ```rust,ignore
//! use brandhub_schema::validate;
//! use serde_json::json;
//!
//! let brand = validate(&json!({ "id": "acme", "name": "Acme" }))?;
//! assert_eq!(brand.industry, "Technology");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod rules;
pub mod validate;

pub use error::{ValidationError, ValidationResult};
pub use rules::{is_hex_color, is_present, is_url_or_empty};
pub use validate::{validate, validate_brand, validate_many, ValidationFailure, ValidationSummary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
