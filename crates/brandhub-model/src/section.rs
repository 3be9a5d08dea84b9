//! Typed guideline sections
//!
//! A section is a titled, orderable view over part of the root record. Its
//! payload is one [`SectionData`] variant per [`SectionKind`]; the payload
//! shape is fixed by the kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::brand::{
    Asset, Brand, BrandIcon, BrandValue, Color, CustomBlock, DigitalBanner, EmailBanner,
    EmailSignature, Gradient, Icon, IconSet, LogoGuidelines, LogoHeroSettings, LogoUsageDont,
    NeuralRegistry, Pattern, QrSettings, SocialBanner, SocialIcons, SocialLink, TextStyle,
    Typography, UsageImage,
};
use crate::logos::LogoSet;

/// Closed set of section types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Identity,
    Logos,
    BrandIcon,
    Colors,
    Gradients,
    Patterns,
    Typography,
    TextStyles,
    Iconography,
    SocialIcons,
    Imagery,
    Social,
    Signatures,
    Qr,
    Ai,
    Assets,
    Misuse,
    Products,
    Custom,
    Hero,
}

impl SectionKind {
    pub const ALL: [SectionKind; 20] = [
        SectionKind::Identity,
        SectionKind::Logos,
        SectionKind::BrandIcon,
        SectionKind::Colors,
        SectionKind::Gradients,
        SectionKind::Patterns,
        SectionKind::Typography,
        SectionKind::TextStyles,
        SectionKind::Iconography,
        SectionKind::SocialIcons,
        SectionKind::Imagery,
        SectionKind::Social,
        SectionKind::Signatures,
        SectionKind::Qr,
        SectionKind::Ai,
        SectionKind::Assets,
        SectionKind::Misuse,
        SectionKind::Products,
        SectionKind::Custom,
        SectionKind::Hero,
    ];

    /// Wire name, as stored in a section's `type` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKind::Identity => "identity",
            SectionKind::Logos => "logos",
            SectionKind::BrandIcon => "brandIcon",
            SectionKind::Colors => "colors",
            SectionKind::Gradients => "gradients",
            SectionKind::Patterns => "patterns",
            SectionKind::Typography => "typography",
            SectionKind::TextStyles => "textStyles",
            SectionKind::Iconography => "iconography",
            SectionKind::SocialIcons => "socialIcons",
            SectionKind::Imagery => "imagery",
            SectionKind::Social => "social",
            SectionKind::Signatures => "signatures",
            SectionKind::Qr => "qr",
            SectionKind::Ai => "ai",
            SectionKind::Assets => "assets",
            SectionKind::Misuse => "misuse",
            SectionKind::Products => "products",
            SectionKind::Custom => "custom",
            SectionKind::Hero => "hero",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section type string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section type: {0}")]
pub struct UnknownSectionKind(pub String);

impl FromStr for SectionKind {
    type Err = UnknownSectionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSectionKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_statement: Option<String>,
    pub values: Vec<BrandValue>,
    pub tone_of_voice: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

/// Logo variants spread at the top level, beside two reserved keys
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogosData {
    #[serde(flatten)]
    pub variants: LogoSet,
    pub guidelines: LogoGuidelines,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_logo_variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconographyData {
    pub icons: Vec<Icon>,
    pub ai_sets: Vec<IconSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageryData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<String>,
    pub images: Vec<UsageImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialData {
    pub socials: Vec<SocialLink>,
    pub banners: Vec<SocialBanner>,
    pub digital: Vec<DigitalBanner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignaturesData {
    pub signatures: Vec<EmailSignature>,
    pub banners: Vec<EmailBanner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductsData {
    pub products: Vec<String>,
    pub linked_brand_ids: Vec<String>,
}

/// Section payload, one variant per [`SectionKind`]
///
/// Serialized without a tag: the owning section's `type` says which variant
/// the payload is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    Identity(IdentityData),
    Logos(LogosData),
    BrandIcon(BrandIcon),
    Colors(Vec<Color>),
    Gradients(Vec<Gradient>),
    Patterns(Vec<Pattern>),
    Typography(Vec<Typography>),
    TextStyles(Vec<TextStyle>),
    Iconography(IconographyData),
    SocialIcons(SocialIcons),
    Imagery(ImageryData),
    Social(SocialData),
    Signatures(SignaturesData),
    Qr(QrSettings),
    Ai(NeuralRegistry),
    Assets(Vec<Asset>),
    Misuse(Vec<LogoUsageDont>),
    Products(ProductsData),
    Custom(CustomBlock),
    Hero(LogoHeroSettings),
}

/// Whether a raw payload carries nothing (`null` or `{}`)
///
/// An empty array is not empty in this sense: it is a deliberate clear.
#[inline]
#[must_use]
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl SectionData {
    /// Kind this payload belongs to
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        match self {
            SectionData::Identity(_) => SectionKind::Identity,
            SectionData::Logos(_) => SectionKind::Logos,
            SectionData::BrandIcon(_) => SectionKind::BrandIcon,
            SectionData::Colors(_) => SectionKind::Colors,
            SectionData::Gradients(_) => SectionKind::Gradients,
            SectionData::Patterns(_) => SectionKind::Patterns,
            SectionData::Typography(_) => SectionKind::Typography,
            SectionData::TextStyles(_) => SectionKind::TextStyles,
            SectionData::Iconography(_) => SectionKind::Iconography,
            SectionData::SocialIcons(_) => SectionKind::SocialIcons,
            SectionData::Imagery(_) => SectionKind::Imagery,
            SectionData::Social(_) => SectionKind::Social,
            SectionData::Signatures(_) => SectionKind::Signatures,
            SectionData::Qr(_) => SectionKind::Qr,
            SectionData::Ai(_) => SectionKind::Ai,
            SectionData::Assets(_) => SectionKind::Assets,
            SectionData::Misuse(_) => SectionKind::Misuse,
            SectionData::Products(_) => SectionKind::Products,
            SectionData::Custom(_) => SectionKind::Custom,
            SectionData::Hero(_) => SectionKind::Hero,
        }
    }

    /// Empty payload of the given kind
    #[must_use]
    pub fn empty(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Identity => SectionData::Identity(IdentityData::default()),
            SectionKind::Logos => SectionData::Logos(LogosData::default()),
            SectionKind::BrandIcon => SectionData::BrandIcon(BrandIcon::default()),
            SectionKind::Colors => SectionData::Colors(Vec::new()),
            SectionKind::Gradients => SectionData::Gradients(Vec::new()),
            SectionKind::Patterns => SectionData::Patterns(Vec::new()),
            SectionKind::Typography => SectionData::Typography(Vec::new()),
            SectionKind::TextStyles => SectionData::TextStyles(Vec::new()),
            SectionKind::Iconography => SectionData::Iconography(IconographyData::default()),
            SectionKind::SocialIcons => SectionData::SocialIcons(SocialIcons::default()),
            SectionKind::Imagery => SectionData::Imagery(ImageryData::default()),
            SectionKind::Social => SectionData::Social(SocialData::default()),
            SectionKind::Signatures => SectionData::Signatures(SignaturesData::default()),
            SectionKind::Qr => SectionData::Qr(QrSettings::default()),
            SectionKind::Ai => SectionData::Ai(NeuralRegistry::default()),
            SectionKind::Assets => SectionData::Assets(Vec::new()),
            SectionKind::Misuse => SectionData::Misuse(Vec::new()),
            SectionKind::Products => SectionData::Products(ProductsData::default()),
            SectionKind::Custom => SectionData::Custom(CustomBlock::default()),
            SectionKind::Hero => SectionData::Hero(LogoHeroSettings::default()),
        }
    }

    /// Decode a raw payload for `kind`
    ///
    /// `null` and `{}` decode to [`SectionData::empty`]. Anything else must
    /// match the variant's shape.
    pub fn from_value(kind: SectionKind, value: Value) -> Result<Self, serde_json::Error> {
        if is_empty_payload(&value) {
            return Ok(Self::empty(kind));
        }

        Ok(match kind {
            SectionKind::Identity => SectionData::Identity(serde_json::from_value(value)?),
            SectionKind::Logos => SectionData::Logos(serde_json::from_value(value)?),
            SectionKind::BrandIcon => SectionData::BrandIcon(serde_json::from_value(value)?),
            SectionKind::Colors => SectionData::Colors(serde_json::from_value(value)?),
            SectionKind::Gradients => SectionData::Gradients(serde_json::from_value(value)?),
            SectionKind::Patterns => SectionData::Patterns(serde_json::from_value(value)?),
            SectionKind::Typography => SectionData::Typography(serde_json::from_value(value)?),
            SectionKind::TextStyles => SectionData::TextStyles(serde_json::from_value(value)?),
            SectionKind::Iconography => SectionData::Iconography(serde_json::from_value(value)?),
            SectionKind::SocialIcons => SectionData::SocialIcons(serde_json::from_value(value)?),
            SectionKind::Imagery => SectionData::Imagery(serde_json::from_value(value)?),
            SectionKind::Social => SectionData::Social(serde_json::from_value(value)?),
            SectionKind::Signatures => SectionData::Signatures(serde_json::from_value(value)?),
            SectionKind::Qr => SectionData::Qr(serde_json::from_value(value)?),
            SectionKind::Ai => SectionData::Ai(serde_json::from_value(value)?),
            SectionKind::Assets => SectionData::Assets(serde_json::from_value(value)?),
            SectionKind::Misuse => SectionData::Misuse(serde_json::from_value(value)?),
            SectionKind::Products => SectionData::Products(serde_json::from_value(value)?),
            SectionKind::Custom => SectionData::Custom(serde_json::from_value(value)?),
            SectionKind::Hero => SectionData::Hero(serde_json::from_value(value)?),
        })
    }

    /// Payload for `kind` computed from the root fields of `brand`
    #[must_use]
    pub fn project(kind: SectionKind, brand: &Brand) -> Self {
        match kind {
            SectionKind::Identity => SectionData::Identity(IdentityData {
                mission_statement: brand.mission_statement.clone(),
                values: brand.values.clone(),
                tone_of_voice: brand.tone_of_voice.clone(),
                website_url: brand.website_url.clone(),
                intro_video_url: brand.intro_video_url.clone(),
                tagline: brand.tagline.clone(),
                archetype: brand.archetype.clone(),
            }),
            SectionKind::Logos => SectionData::Logos(LogosData {
                variants: brand.logos.clone(),
                guidelines: brand.logo_guidelines.clone(),
                header_logo_variant: brand.header_logo_variant.clone(),
            }),
            SectionKind::BrandIcon => SectionData::BrandIcon(brand.brand_icon.clone()),
            SectionKind::Colors => SectionData::Colors(brand.colors.clone()),
            SectionKind::Gradients => SectionData::Gradients(brand.gradients.clone()),
            SectionKind::Patterns => SectionData::Patterns(brand.patterns.clone()),
            SectionKind::Typography => SectionData::Typography(brand.typography.clone()),
            SectionKind::TextStyles => SectionData::TextStyles(brand.text_styles.clone()),
            SectionKind::Iconography => SectionData::Iconography(IconographyData {
                icons: brand.icons.clone(),
                ai_sets: brand.ai_icon_sets.clone(),
            }),
            SectionKind::SocialIcons => SectionData::SocialIcons(brand.social_icons.clone()),
            SectionKind::Imagery => SectionData::Imagery(ImageryData {
                guidelines: brand.imagery_guidelines.clone(),
                images: brand.imagery.clone(),
            }),
            SectionKind::Social => SectionData::Social(SocialData {
                socials: brand.socials.clone(),
                banners: brand.social_banners.clone(),
                digital: brand.digital_banners.clone(),
            }),
            SectionKind::Signatures => SectionData::Signatures(SignaturesData {
                signatures: brand.signatures.clone(),
                banners: brand.email_banners.clone(),
            }),
            SectionKind::Qr => SectionData::Qr(brand.qr_settings.clone()),
            SectionKind::Ai => SectionData::Ai(brand.brain_registry.clone()),
            SectionKind::Assets => SectionData::Assets(brand.assets.clone()),
            SectionKind::Misuse => SectionData::Misuse(brand.logo_usage_donts.clone()),
            SectionKind::Products => SectionData::Products(ProductsData {
                products: brand.products.clone(),
                linked_brand_ids: brand.linked_brand_ids.clone(),
            }),
            SectionKind::Custom => SectionData::Custom(brand.custom_block.clone()),
            SectionKind::Hero => SectionData::Hero(brand.logo_hero.clone()),
        }
    }
}

/// Titled, orderable view over part of a brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSection")]
pub struct BrandSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_visible: bool,
    pub order: i64,
    pub data: SectionData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    kind: SectionKind,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default = "default_visible")]
    is_visible: bool,
    #[serde(default)]
    order: i64,
    #[serde(default)]
    data: Value,
}

fn default_visible() -> bool {
    true
}

impl TryFrom<RawSection> for BrandSection {
    type Error = serde_json::Error;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        Ok(Self {
            data: SectionData::from_value(raw.kind, raw.data)?,
            id: raw.id,
            kind: raw.kind,
            title: raw.title,
            description: raw.description,
            is_visible: raw.is_visible,
            order: raw.order,
        })
    }
}

/// Sort sections by `order`, keeping the original position for ties
pub fn sort_sections(sections: &mut [BrandSection]) {
    sections.sort_by(|a, b| a.order.cmp(&b.order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn section(kind: SectionKind, order: i64) -> BrandSection {
        BrandSection {
            id: format!("sec-{kind}"),
            kind,
            title: kind.to_string(),
            description: None,
            is_visible: true,
            order,
            data: SectionData::empty(kind),
        }
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>().unwrap(), kind);
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
        assert!("sidebar".parse::<SectionKind>().is_err());
    }

    #[test]
    fn empty_payload_decodes_to_default() {
        assert_eq!(
            SectionData::from_value(SectionKind::Colors, json!({})).unwrap(),
            SectionData::Colors(Vec::new())
        );
        assert_eq!(
            SectionData::from_value(SectionKind::Qr, Value::Null).unwrap(),
            SectionData::Qr(QrSettings::default())
        );
    }

    #[test]
    fn payload_shape_follows_kind() {
        assert!(SectionData::from_value(SectionKind::Colors, json!({ "hex": "#fff" })).is_err());
        assert!(SectionData::from_value(SectionKind::Identity, json!([1, 2])).is_err());
    }

    #[test]
    fn section_defaults_on_decode() {
        let section: BrandSection = serde_json::from_value(json!({
            "id": "sec-colors",
            "type": "colors",
            "title": "Palette"
        }))
        .unwrap();

        assert!(section.is_visible);
        assert_eq!(section.order, 0);
        assert_eq!(section.data, SectionData::Colors(Vec::new()));
    }

    #[test]
    fn logos_payload_keeps_reserved_keys_apart() {
        let data = SectionData::from_value(
            SectionKind::Logos,
            json!({
                "color": "https://cdn.example.com/c.svg",
                "mono": "https://cdn.example.com/m.svg",
                "headerLogoVariant": "mono",
                "guidelines": { "clearSpace": "1x" }
            }),
        )
        .unwrap();

        let SectionData::Logos(logos) = data else {
            panic!("expected logos payload");
        };
        assert_eq!(logos.variants.get("mono"), Some("https://cdn.example.com/m.svg"));
        assert_eq!(logos.header_logo_variant.as_deref(), Some("mono"));
        assert_eq!(logos.guidelines.clear_space, "1x");
        assert!(!logos.variants.additional.contains_key("guidelines"));
    }

    #[test]
    fn sort_uses_order_and_keeps_ties_stable() {
        let mut sections = vec![
            section(SectionKind::Assets, 2),
            section(SectionKind::Colors, 0),
            section(SectionKind::Qr, 1),
            section(SectionKind::Ai, 0),
        ];

        sort_sections(&mut sections);

        let kinds: Vec<_> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Colors, SectionKind::Ai, SectionKind::Qr, SectionKind::Assets]
        );
    }
}
