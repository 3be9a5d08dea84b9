//! BrandHub Data Model
//!
//! The Brand aggregate, its typed guideline sections and the default
//! blueprint every repair falls back to.
//!
//! # Core Concepts
//!
//! - [`Brand`]: aggregate root holding every guideline field by value
//! - [`BrandSection`]: typed, orderable view over a subset of the root fields
//! - [`SectionData`]: one payload variant per [`SectionKind`];
//!   [`SectionData::project`] computes it from the root fields
//! - [`clone_blueprint`]: deep copy of the canonical default Brand
//!
//! # Example
//!
//! ```rust,ignore
//! use brandhub_model::{clone_blueprint, SectionData, SectionKind};
//!
//! let brand = clone_blueprint();
//! let colors = SectionData::project(SectionKind::Colors, &brand);
//! assert_eq!(colors.kind(), SectionKind::Colors);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod blueprint;
pub mod brand;
pub mod listing;
pub mod logos;
pub mod section;

// Re-exports
pub use blueprint::{
    clone_blueprint, generate_brand_id, now_millis, sample_brands, SectionDescriptor,
    CANONICAL_SECTIONS, SCHEMA_VERSION,
};
pub use brand::{
    is_gradient_css, Appearance, Asset, AssetType, BackgroundSettings, BackgroundStyle, Brand,
    BrandIcon, BrandStatus, BrandValue, Color, ColorUsage, CustomBlock, CustomImage, CustomLink,
    DigitalBanner, EmailBanner, EmailSignature, EntityType, Gradient, HeroAlignment,
    HeroBackground, Icon, IconSet, IconSetStyle, LogoGuidelines, LogoHeroSettings,
    LogoUsageDont, MisuseType, NeuralRegistry, Pattern, QrSettings, SocialBanner, SocialExample,
    SocialIconProtocol, SocialIcons, SocialLink, SocialPlatform, TextAlignment, TextCase,
    TextStyle, TextTag, Typography, TypographyRole, UsageImage, UsageImageType,
    FALLBACK_GRADIENT,
};
pub use listing::{filter_entities, public_view, search, sort_recent};
pub use logos::LogoSet;
pub use section::{
    is_empty_payload, sort_sections, BrandSection, IconographyData, IdentityData, ImageryData, LogosData,
    ProductsData, SectionData, SectionKind, SignaturesData, SocialData, UnknownSectionKind,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn blueprint_sections_mirror_root() {
        let brand = clone_blueprint();

        for section in &brand.sections {
            assert_eq!(section.data, SectionData::project(section.kind, &brand));
        }
    }

    #[test]
    fn brand_json_roundtrip_preserves_sections() {
        let brand = clone_blueprint();
        let json = serde_json::to_value(&brand).unwrap();
        let back: Brand = serde_json::from_value(json).unwrap();

        assert_eq!(back, brand);
    }
}
