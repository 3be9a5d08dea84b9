//! Default blueprint and canonical section layout
//!
//! The blueprint is built once and never handed out by reference: callers
//! get a deep copy through [`clone_blueprint`], stamped with a fresh id.

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::brand::{
    BackgroundSettings, BackgroundStyle, Brand, BrandIcon, BrandValue, Color, ColorUsage,
    DigitalBanner, EmailBanner, EntityType, Gradient, LogoGuidelines, LogoHeroSettings,
    NeuralRegistry, Pattern, QrSettings, SocialBanner, SocialIconProtocol, SocialIcons,
    SocialPlatform, TextStyle, TextTag, Typography, TypographyRole,
};
use crate::logos::LogoSet;
use crate::section::{BrandSection, SectionData, SectionKind};

/// Version stamped on every repaired record
pub const SCHEMA_VERSION: &str = "2.5.6";

/// Canonical id, title, position and visibility of one section type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub kind: SectionKind,
    pub title: &'static str,
    pub description: &'static str,
    pub order: i64,
    pub is_visible: bool,
}

impl SectionDescriptor {
    /// Section with this descriptor's defaults and data projected from `brand`
    #[must_use]
    pub fn to_section(&self, brand: &Brand) -> BrandSection {
        BrandSection {
            id: self.id.to_string(),
            kind: self.kind,
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            is_visible: self.is_visible,
            order: self.order,
            data: SectionData::project(self.kind, brand),
        }
    }
}

const fn descriptor(
    id: &'static str,
    kind: SectionKind,
    title: &'static str,
    description: &'static str,
    order: i64,
) -> SectionDescriptor {
    SectionDescriptor {
        id,
        kind,
        title,
        description,
        order,
        is_visible: true,
    }
}

/// One descriptor per section type, in default display order
pub const CANONICAL_SECTIONS: [SectionDescriptor; 20] = [
    descriptor("sec-identity", SectionKind::Identity, "Brand Identity", "Mission, values and voice.", 0),
    descriptor("sec-logos", SectionKind::Logos, "Logo Variants", "Approved versions of the master logo.", 1),
    descriptor("sec-brandIcon", SectionKind::BrandIcon, "Brand Mark", "Compact symbol for favicons and small UI.", 2),
    descriptor("sec-misuse", SectionKind::Misuse, "Logo Misuse", "Treatments the logo must never receive.", 3),
    descriptor("sec-colors", SectionKind::Colors, "Color Palette", "Primary and supporting colors.", 4),
    descriptor("sec-gradients", SectionKind::Gradients, "Gradients", "Approved color transitions.", 5),
    descriptor("sec-patterns", SectionKind::Patterns, "Patterns", "Tiled textures for backgrounds.", 6),
    descriptor("sec-typography", SectionKind::Typography, "Typography", "Typefaces and their roles.", 7),
    descriptor("sec-textStyles", SectionKind::TextStyles, "Text Styles", "Semantic text hierarchy for digital use.", 8),
    descriptor("sec-iconography", SectionKind::Iconography, "Iconography", "Icon library and generated sets.", 9),
    descriptor("sec-socialIcons", SectionKind::SocialIcons, "Social Tags", "Platform handles and colors.", 10),
    descriptor("sec-imagery", SectionKind::Imagery, "Imagery", "Photography direction and examples.", 11),
    descriptor("sec-social", SectionKind::Social, "Social & Digital", "Channels and banner formats.", 12),
    descriptor("sec-signatures", SectionKind::Signatures, "Email Signatures", "Signature templates and banners.", 13),
    descriptor("sec-qr", SectionKind::Qr, "QR Codes", "Branded quick response codes.", 14),
    descriptor("sec-ai", SectionKind::Ai, "Voice Registry", "Constraints for generated content.", 15),
    descriptor("sec-assets", SectionKind::Assets, "Assets", "Master files for download.", 16),
    descriptor("sec-products", SectionKind::Products, "Portfolio", "Products and related brands.", 17),
    descriptor("sec-hero", SectionKind::Hero, "Logo Hero", "How the logo is staged at the top of the page.", 18),
    SectionDescriptor {
        id: "sec-custom",
        kind: SectionKind::Custom,
        title: "Custom Block",
        description: "Free-form content.",
        order: 19,
        is_visible: false,
    },
];

const PLACEHOLDER_LOGO: &str = "https://assets.brandhub.dev/placeholder/logo.svg";
const PLACEHOLDER_COVER: &str = "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1200&q=80";
const PLACEHOLDER_ICON: &str = "https://assets.brandhub.dev/placeholder/icon.png";

static BLUEPRINT: Lazy<Brand> = Lazy::new(build_blueprint);

fn build_blueprint() -> Brand {
    let mut brand = Brand {
        id: String::new(),
        version: SCHEMA_VERSION.to_string(),
        name: "New Brand".to_string(),
        entity_type: EntityType::Brand,
        is_visible: true,
        category: "Other".to_string(),
        logo_url: PLACEHOLDER_LOGO.to_string(),
        cover_image: PLACEHOLDER_COVER.to_string(),
        website_url: Some(String::new()),
        description: "Central reference for the visual and verbal identity.".to_string(),
        industry: "Technology".to_string(),
        tagline: Some("Clear by default.".to_string()),
        tone_of_voice: vec!["Professional".to_string(), "Direct".to_string()],
        mission_statement: Some("Make every touchpoint recognizably ours.".to_string()),
        values: vec![BrandValue {
            text: "Integrity".to_string(),
            icon: "ShieldCheck".to_string(),
        }],
        colors: vec![
            Color::new("Ink", "#0f172a", ColorUsage::Primary),
            Color::new("Signal", "#2563eb", ColorUsage::Secondary),
            Color::new("Spark", "#f59e0b", ColorUsage::Accent),
            Color::new("Paper", "#f8fafc", ColorUsage::Neutral),
        ],
        gradients: vec![Gradient::new(
            "Horizon",
            "linear-gradient(135deg, #0f172a 0%, #2563eb 100%)",
        )],
        patterns: vec![Pattern {
            name: "Grid".to_string(),
            url: "https://assets.brandhub.dev/placeholder/grid.svg".to_string(),
        }],
        typography: vec![
            Typography {
                name: "Inter".to_string(),
                role: TypographyRole::Heading,
                font_family: "Inter, sans-serif".to_string(),
                sample_text: "The quick brown fox".to_string(),
                weights: vec!["600".to_string(), "800".to_string()],
                ..Typography::default()
            },
            Typography {
                name: "Inter".to_string(),
                role: TypographyRole::Body,
                font_family: "Inter, sans-serif".to_string(),
                sample_text: "Jumps over the lazy dog".to_string(),
                weights: vec!["400".to_string()],
                ..Typography::default()
            },
        ],
        text_styles: vec![
            TextStyle {
                id: "ts-h1".to_string(),
                name: "Display Heading".to_string(),
                tag: TextTag::H1,
                font_family: "Inter, sans-serif".to_string(),
                font_size: "48px".to_string(),
                font_weight: "800".to_string(),
                line_height: "1.1".to_string(),
                letter_spacing: "-0.02em".to_string(),
                ..TextStyle::default()
            },
            TextStyle {
                id: "ts-body".to_string(),
                name: "Body".to_string(),
                tag: TextTag::P,
                font_family: "Inter, sans-serif".to_string(),
                font_size: "16px".to_string(),
                font_weight: "400".to_string(),
                line_height: "1.6".to_string(),
                letter_spacing: "0".to_string(),
                ..TextStyle::default()
            },
        ],
        imagery_guidelines: Some("Natural light, real people, uncluttered frames.".to_string()),
        logo_guidelines: LogoGuidelines {
            clear_space: "20% of width".to_string(),
            min_size_digital: "32px".to_string(),
            min_size_print: "15mm".to_string(),
            use_cases: "Primary communications".to_string(),
        },
        logos: LogoSet {
            color: PLACEHOLDER_LOGO.to_string(),
            white: PLACEHOLDER_LOGO.to_string(),
            black: PLACEHOLDER_LOGO.to_string(),
            stacked: PLACEHOLDER_LOGO.to_string(),
            wordmark: PLACEHOLDER_LOGO.to_string(),
            ..LogoSet::default()
        },
        brand_icon: BrandIcon {
            url: PLACEHOLDER_ICON.to_string(),
            usage_rights: "Reserved corporate asset".to_string(),
            settings: "1:1 ratio".to_string(),
            ..BrandIcon::default()
        },
        logo_hero: LogoHeroSettings {
            scaling: 1.1,
            ..LogoHeroSettings::default()
        },
        social_icons: SocialIcons {
            icons: vec![
                SocialIconProtocol {
                    platform: "LinkedIn".to_string(),
                    handle: "@brand".to_string(),
                    color: "#0077B5".to_string(),
                    ..SocialIconProtocol::default()
                },
                SocialIconProtocol {
                    platform: "X".to_string(),
                    handle: "@brand".to_string(),
                    color: "#000000".to_string(),
                    ..SocialIconProtocol::default()
                },
            ],
            guidelines: "Use the official handle on every channel.".to_string(),
            examples: Vec::new(),
        },
        social_banners: vec![SocialBanner {
            id: "sb-linkedin".to_string(),
            platform: SocialPlatform::LinkedIn,
            url: "https://assets.brandhub.dev/placeholder/linkedin-banner.png".to_string(),
            dimensions: "1584 x 396".to_string(),
        }],
        digital_banners: vec![DigitalBanner {
            id: "db-leaderboard".to_string(),
            format_name: "Leaderboard".to_string(),
            url: "https://assets.brandhub.dev/placeholder/leaderboard.png".to_string(),
            width: 728,
            height: 90,
        }],
        email_banners: vec![EmailBanner {
            id: "eb-1".to_string(),
            name: "Campaign Banner".to_string(),
            url: "https://assets.brandhub.dev/placeholder/email-banner.png".to_string(),
            width: 600,
            height: 120,
            directive: "Keep calls to action away from the edges".to_string(),
        }],
        qr_settings: QrSettings {
            default_url: "https://brandhub.dev".to_string(),
            prefer_logo: true,
            use_custom_colors: true,
            fg_color: "#0f172a".to_string(),
            bg_color: "#ffffff".to_string(),
        },
        background_settings: BackgroundSettings {
            style: BackgroundStyle::Orion,
            primary_color: Some("#0f172a".to_string()),
            secondary_color: Some("#2563eb".to_string()),
            opacity: Some(0.4),
            blur: Some(0.0),
            animate: Some(true),
        },
        brain_registry: NeuralRegistry {
            archetype: "The Guide".to_string(),
            narrative: "Calm expertise that makes complex things simple.".to_string(),
            visual_constraints: "Generous whitespace and high contrast.".to_string(),
            cultural_nuance: "Plain language, locally adapted.".to_string(),
            technical_guardrails: "Accessible contrast and vector-first assets.".to_string(),
        },
        ..Brand::default()
    };

    brand.sections = CANONICAL_SECTIONS
        .iter()
        .map(|descriptor| descriptor.to_section(&brand))
        .collect();
    brand
}

/// Fresh brand identifier
#[must_use]
pub fn generate_brand_id() -> String {
    format!("brand-{}", Uuid::new_v4())
}

/// Current time in milliseconds since the Unix epoch
#[inline]
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Deep copy of the blueprint with a new id and timestamp
#[must_use]
pub fn clone_blueprint() -> Brand {
    let mut brand = BLUEPRINT.clone();
    brand.id = generate_brand_id();
    brand.updated_at = now_millis();
    brand
}

/// Sample portfolio for seeding an empty store
///
/// Ids and timestamps are fixed so repeated seeding is stable.
#[must_use]
pub fn sample_brands() -> Vec<Brand> {
    let mut northwind = BLUEPRINT.clone();
    northwind.id = "northwind".to_string();
    northwind.name = "Northwind".to_string();
    northwind.industry = "Logistics".to_string();
    northwind.category = "Enterprise".to_string();
    northwind.tagline = Some("Freight, simplified.".to_string());
    northwind.updated_at = 1_735_689_600_000;
    northwind.products = vec!["Northwind Pulse".to_string()];
    northwind.linked_brand_ids = vec!["northwind-pulse".to_string()];

    let mut pulse = BLUEPRINT.clone();
    pulse.id = "northwind-pulse".to_string();
    pulse.name = "Northwind Pulse".to_string();
    pulse.entity_type = EntityType::Product;
    pulse.industry = "Logistics".to_string();
    pulse.category = "Software".to_string();
    pulse.tagline = Some("Every shipment, live.".to_string());
    pulse.updated_at = 1_735_776_000_000;
    pulse.colors = vec![
        Color::new("Pulse", "#10b981", ColorUsage::Primary),
        Color::new("Ink", "#0f172a", ColorUsage::Neutral),
    ];
    pulse.linked_brand_ids = vec!["northwind".to_string()];

    [northwind, pulse]
        .into_iter()
        .map(|mut brand| {
            brand.sections = CANONICAL_SECTIONS
                .iter()
                .map(|descriptor| descriptor.to_section(&brand))
                .collect();
            brand
        })
        .collect()
}
