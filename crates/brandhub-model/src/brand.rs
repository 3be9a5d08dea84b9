//! Brand aggregate and its nested records
//!
//! Every record uses container-level `#[serde(default)]`: absent fields take
//! the schema default, present fields must have the right type. This is the
//! same contract the write-gate validator enforces. Enum fields inside list
//! entries are the exception: an unknown value decodes as the default so the
//! entry itself survives.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::logos::LogoSet;
use crate::section::{BrandSection, SectionData, SectionKind};

/// Gradient used when a stored gradient has no usable CSS
pub const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #000, #fff)";

/// Whether the entity is a company brand or one of its products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    #[default]
    Brand,
    Product,
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    #[default]
    Active,
    Maintenance,
    Deprecated,
}

/// Role of a palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorUsage {
    #[default]
    Primary,
    Secondary,
    Accent,
    Neutral,
}

/// Role of a typeface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypographyRole {
    #[default]
    Heading,
    Body,
    Display,
    #[serde(rename = "Web Safe")]
    WebSafe,
}

/// HTML tag a text style targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    #[default]
    P,
    Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Logo,
    Icon,
    #[default]
    Image,
    Presentation,
    Archive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSetStyle {
    #[default]
    Outlined,
    Filled,
    Minimalist,
}

/// Whether an imagery example is a model or a counter-example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageImageType {
    #[default]
    Approved,
    Avoid,
}

/// Category of logo misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MisuseType {
    #[default]
    Distort,
    Recolor,
    Rotate,
    Effect,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SocialPlatform {
    LinkedIn,
    #[serde(rename = "X (Twitter)")]
    X,
    Instagram,
    Facebook,
    YouTube,
    #[default]
    Other,
}

/// Decorative background rendered behind the guideline site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    #[default]
    None,
    Mesh,
    Dots,
    Orion,
    Flow,
    Circuit,
    Aurora,
    Spectral,
    Solid,
    Ribbons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroAlignment {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroBackground {
    None,
    #[default]
    Glass,
    Solid,
}

/// Light or dark presentation, used for logo selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// Palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Color {
    pub name: String,
    /// `#RGB` or `#RRGGBB`
    pub hex: String,
    #[serde(deserialize_with = "or_default")]
    pub usage: ColorUsage,
}

impl Color {
    /// Create a color entry
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>, usage: ColorUsage) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            usage,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("Unnamed Color", "#000000", ColorUsage::Primary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gradient {
    pub name: String,
    #[serde(deserialize_with = "gradient_css")]
    pub css: String,
}

impl Gradient {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css: css.into(),
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new("Unnamed Gradient", FALLBACK_GRADIENT)
    }
}

/// Check that a string looks like a CSS gradient function
#[must_use]
pub fn is_gradient_css(css: &str) -> bool {
    let css = css.trim();
    css.contains("gradient(") && css.ends_with(')')
}

/// Decode a field, falling back to its default when the value is unknown
///
/// Keeps list entries whose enum fields hold values from newer or foreign
/// exports.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(<T as Deserialize>::deserialize(value).unwrap_or_default())
}

fn gradient_css<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(css) if is_gradient_css(&css) => css,
        _ => FALLBACK_GRADIENT.to_string(),
    })
}

/// Tiled background texture
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pattern {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub role: TypographyRole,
    pub font_family: String,
    pub sample_text: String,
    pub weights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// Semantic text style for digital implementation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub tag: TextTag,
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
    pub letter_spacing: String,
    #[serde(deserialize_with = "or_default")]
    pub text_case: TextCase,
    #[serde(deserialize_with = "or_default")]
    pub alignment: TextAlignment,
    pub safe_zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_text: Option<String>,
}

/// Downloadable master file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "or_default")]
    pub kind: AssetType,
    pub url: String,
    pub format: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Icon {
    pub id: String,
    pub name: String,
    pub svg_path: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Generated icon family
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconSet {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icons: Vec<Icon>,
    #[serde(deserialize_with = "or_default")]
    pub style: IconSetStyle,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandValue {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageImage {
    pub id: String,
    pub url: String,
    pub caption: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "or_default")]
    pub kind: UsageImageType,
}

/// Prohibited logo treatment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoUsageDont {
    pub id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "or_default")]
    pub kind: MisuseType,
    pub label: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailSignature {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image_url: Option<String>,
    pub preview_url: String,
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailBanner {
    pub id: String,
    pub name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Placement guidance for the banner
    pub directive: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialExample {
    pub id: String,
    pub platform: String,
    pub image_url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialBanner {
    pub id: String,
    #[serde(deserialize_with = "or_default")]
    pub platform: SocialPlatform,
    pub url: String,
    pub dimensions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitalBanner {
    pub id: String,
    pub format_name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialIconProtocol {
    pub platform: String,
    pub handle: String,
    pub svg_path: String,
    pub color: String,
}

/// Platform handles and chromatic tags
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialIcons {
    pub icons: Vec<SocialIconProtocol>,
    pub guidelines: String,
    pub examples: Vec<UsageImage>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundSettings {
    pub style: BackgroundStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
}

/// Display settings for the logo hero on the guideline page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoHeroSettings {
    /// Logo variant key shown in the hero
    pub variant: String,
    pub alignment: HeroAlignment,
    pub scaling: f64,
    pub background: HeroBackground,
    pub show_in_detail: bool,
    pub padding: f64,
}

impl Default for LogoHeroSettings {
    fn default() -> Self {
        Self {
            variant: "color".to_string(),
            alignment: HeroAlignment::Left,
            scaling: 1.0,
            background: HeroBackground::Glass,
            show_in_detail: true,
            padding: 8.0,
        }
    }
}

/// Brand-voice constraints handed to generative services
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NeuralRegistry {
    pub archetype: String,
    pub narrative: String,
    pub visual_constraints: String,
    pub cultural_nuance: String,
    pub technical_guardrails: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrSettings {
    pub default_url: String,
    pub prefer_logo: bool,
    pub use_custom_colors: bool,
    pub fg_color: String,
    pub bg_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoGuidelines {
    pub clear_space: String,
    pub min_size_digital: String,
    pub min_size_print: String,
    pub use_cases: String,
}

/// Shorthand brand mark (favicon, avatars)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandIcon {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_url: Option<String>,
    pub usage_rights: String,
    pub settings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomImage {
    pub id: String,
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomLink {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Free-form content block backing the `custom` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomBlock {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub images: Vec<CustomImage>,
    pub links: Vec<CustomLink>,
}

/// Aggregate root: one organization's or product's guidelines
///
/// Root fields are canonical. `sections` holds one typed view per
/// [`SectionKind`] whose data is derived from the root on every repair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub id: String,
    pub version: String,
    pub name: String,
    pub entity_type: EntityType,
    pub is_visible: bool,
    pub category: String,
    pub logo_url: String,
    pub cover_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_video_url: Option<String>,
    pub description: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    /// Milliseconds since the Unix epoch
    pub updated_at: i64,
    pub status: BrandStatus,
    pub sections: Vec<BrandSection>,

    pub tone_of_voice: Vec<String>,
    pub colors: Vec<Color>,
    pub gradients: Vec<Gradient>,
    pub patterns: Vec<Pattern>,
    pub typography: Vec<Typography>,
    pub text_styles: Vec<TextStyle>,
    pub assets: Vec<Asset>,
    pub icons: Vec<Icon>,
    pub ai_icon_sets: Vec<IconSet>,
    pub imagery: Vec<UsageImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagery_guidelines: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iconography_rights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iconography_settings: Option<String>,
    pub logo_usage_donts: Vec<LogoUsageDont>,
    pub logo_guidelines: LogoGuidelines,
    pub signatures: Vec<EmailSignature>,
    pub email_banners: Vec<EmailBanner>,
    pub values: Vec<BrandValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_statement: Option<String>,
    pub logos: LogoSet,
    pub hidden_logos: Vec<String>,
    pub hide_main_logo: bool,
    pub hide_brand_icon: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_logo_variant: Option<String>,
    pub brand_icon: BrandIcon,
    pub logo_hero: LogoHeroSettings,
    pub socials: Vec<SocialLink>,
    pub social_icons: SocialIcons,
    pub social_banners: Vec<SocialBanner>,
    pub social_examples: Vec<SocialExample>,
    pub digital_banners: Vec<DigitalBanner>,
    pub products: Vec<String>,
    /// Related brands in the portfolio, by id
    pub linked_brand_ids: Vec<String>,
    pub sub_brands: Vec<Value>,
    #[serde(rename = "hideAIAssistant")]
    pub hide_ai_assistant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligence_brain: Option<String>,
    pub brain_registry: NeuralRegistry,
    pub background_settings: BackgroundSettings,
    pub qr_settings: QrSettings,
    pub custom_block: CustomBlock,
}

impl Default for Brand {
    /// Schema defaults for an otherwise empty record
    ///
    /// This is not the blueprint: it carries no palette, logos or sections.
    /// See [`crate::clone_blueprint`] for the populated template.
    fn default() -> Self {
        Self {
            id: String::new(),
            version: "2.0.0".to_string(),
            name: "New Protocol".to_string(),
            entity_type: EntityType::Brand,
            is_visible: true,
            category: "Other".to_string(),
            logo_url: String::new(),
            cover_image: String::new(),
            website_url: None,
            intro_video_url: None,
            description: String::new(),
            industry: "Technology".to_string(),
            tagline: None,
            archetype: None,
            updated_at: 0,
            status: BrandStatus::Active,
            sections: Vec::new(),
            tone_of_voice: Vec::new(),
            colors: Vec::new(),
            gradients: Vec::new(),
            patterns: Vec::new(),
            typography: Vec::new(),
            text_styles: Vec::new(),
            assets: Vec::new(),
            icons: Vec::new(),
            ai_icon_sets: Vec::new(),
            imagery: Vec::new(),
            imagery_guidelines: None,
            iconography_rights: None,
            iconography_settings: None,
            logo_usage_donts: Vec::new(),
            logo_guidelines: LogoGuidelines::default(),
            signatures: Vec::new(),
            email_banners: Vec::new(),
            values: Vec::new(),
            mission_statement: None,
            logos: LogoSet::default(),
            hidden_logos: Vec::new(),
            hide_main_logo: false,
            hide_brand_icon: false,
            header_logo_variant: None,
            brand_icon: BrandIcon::default(),
            logo_hero: LogoHeroSettings::default(),
            socials: Vec::new(),
            social_icons: SocialIcons::default(),
            social_banners: Vec::new(),
            social_examples: Vec::new(),
            digital_banners: Vec::new(),
            products: Vec::new(),
            linked_brand_ids: Vec::new(),
            sub_brands: Vec::new(),
            hide_ai_assistant: false,
            intelligence_brain: None,
            brain_registry: NeuralRegistry::default(),
            background_settings: BackgroundSettings::default(),
            qr_settings: QrSettings::default(),
            custom_block: CustomBlock::default(),
        }
    }
}

impl Brand {
    /// Section of the given kind, if present
    #[inline]
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&BrandSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Mutable section of the given kind, if present
    #[inline]
    pub fn section_mut(&mut self, kind: SectionKind) -> Option<&mut BrandSection> {
        self.sections.iter_mut().find(|s| s.kind == kind)
    }

    /// Replace the payload of the matching section
    ///
    /// Only the section changes. The root catches up on the next repair in
    /// the `sections` direction. Returns `false` when no section of that
    /// kind exists.
    pub fn set_section_data(&mut self, data: SectionData) -> bool {
        match self.section_mut(data.kind()) {
            Some(section) => {
                section.data = data;
                true
            }
            None => false,
        }
    }

    /// Sections flagged visible, in display order
    pub fn visible_sections(&self) -> impl Iterator<Item = &BrandSection> {
        self.sections.iter().filter(|s| s.is_visible)
    }

    /// Logo to show in the page hero for the given appearance
    #[must_use]
    pub fn hero_logo_url(&self, appearance: Appearance) -> Option<&str> {
        let candidates: [Option<&str>; 3] = match appearance {
            Appearance::Dark => [self.logos.get("white"), self.logos.get("light"), None],
            Appearance::Light => [
                self.logos.get("black"),
                self.logos.get("dark"),
                self.logos.get("color"),
            ],
        };

        candidates
            .into_iter()
            .flatten()
            .find(|url| is_usable_url(url))
            .or_else(|| Some(self.logo_url.as_str()).filter(|url| is_usable_url(url)))
    }

    /// Logo for the sticky page header
    #[must_use]
    pub fn header_logo_url(&self, appearance: Appearance) -> &str {
        if let Some(url) = self
            .header_logo_variant
            .as_deref()
            .and_then(|variant| self.logos.get(variant))
            .filter(|url| is_usable_url(url))
        {
            return url;
        }
        if let Some(url) = self.hero_logo_url(appearance) {
            return url;
        }
        if is_usable_url(&self.brand_icon.url) {
            return &self.brand_icon.url;
        }
        if is_usable_url(&self.logo_url) {
            return &self.logo_url;
        }
        ""
    }
}

fn is_usable_url(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && url != "#"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_fields_take_schema_defaults() {
        let brand: Brand = serde_json::from_value(json!({ "id": "b-1" })).unwrap();

        assert_eq!(brand.id, "b-1");
        assert_eq!(brand.name, "New Protocol");
        assert_eq!(brand.industry, "Technology");
        assert!(brand.is_visible);
        assert_eq!(brand.logo_hero, LogoHeroSettings::default());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let result: Result<Brand, _> = serde_json::from_value(json!({ "id": 42 }));
        assert!(result.is_err());

        let result: Result<Brand, _> =
            serde_json::from_value(json!({ "id": "b", "colors": [{ "name": 7 }] }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_list_enums_fall_back_to_defaults() {
        let brand: Brand = serde_json::from_value(json!({
            "id": "b",
            "colors": [{ "name": "Brand Red", "hex": "#ff0000", "usage": "highlight" }],
            "typography": [{ "name": "Brand Serif", "role": "Script", "fontFamily": "Georgia" }],
            "socialBanners": [{ "id": "tt", "platform": "TikTok", "dimensions": "1080x1920" }],
            "assets": [{ "id": "a1", "type": 3 }]
        }))
        .unwrap();

        assert_eq!(brand.colors[0].usage, ColorUsage::Primary);
        assert_eq!(brand.colors[0].name, "Brand Red");
        assert_eq!(brand.typography[0].role, TypographyRole::default());
        assert_eq!(brand.typography[0].font_family, "Georgia");
        assert_eq!(brand.social_banners[0].platform, SocialPlatform::Other);
        assert_eq!(brand.assets[0].kind, AssetType::default());
    }

    #[test]
    fn gradient_css_is_coerced() {
        let gradients: Vec<Gradient> = serde_json::from_value(json!([
            { "name": "Ok", "css": "linear-gradient(90deg, #111 0%, #222 100%)" },
            { "name": "Broken", "css": "red" },
            { "name": "Missing" },
            { "name": "Typed", "css": 7 }
        ]))
        .unwrap();

        assert_eq!(gradients[0].css, "linear-gradient(90deg, #111 0%, #222 100%)");
        assert_eq!(gradients[1].css, FALLBACK_GRADIENT);
        assert_eq!(gradients[2].css, FALLBACK_GRADIENT);
        assert_eq!(gradients[3].css, FALLBACK_GRADIENT);
    }

    #[test]
    fn camel_case_wire_names() {
        let mut brand = Brand::default();
        brand.hide_ai_assistant = true;
        let value = serde_json::to_value(&brand).unwrap();

        assert_eq!(value["hideAIAssistant"], json!(true));
        assert_eq!(value["logoUsageDonts"], json!([]));
        assert!(value.get("tagline").is_none());
    }

    #[test]
    fn enum_wire_names() {
        assert_eq!(serde_json::to_value(TypographyRole::WebSafe).unwrap(), json!("Web Safe"));
        assert_eq!(serde_json::to_value(SocialPlatform::X).unwrap(), json!("X (Twitter)"));
        assert_eq!(serde_json::to_value(BackgroundStyle::Orion).unwrap(), json!("orion"));
    }

    #[test]
    fn hero_logo_prefers_appearance_variant() {
        let mut brand = Brand::default();
        brand.logo_url = "https://cdn.example.com/main.svg".to_string();
        brand.logos.white = "https://cdn.example.com/white.svg".to_string();
        brand.logos.color = "https://cdn.example.com/color.svg".to_string();

        assert_eq!(
            brand.hero_logo_url(Appearance::Dark),
            Some("https://cdn.example.com/white.svg")
        );
        assert_eq!(
            brand.hero_logo_url(Appearance::Light),
            Some("https://cdn.example.com/color.svg")
        );
    }

    #[test]
    fn header_logo_falls_back_through_chain() {
        let mut brand = Brand::default();
        assert_eq!(brand.header_logo_url(Appearance::Light), "");

        brand.brand_icon.url = "https://cdn.example.com/icon.png".to_string();
        assert_eq!(brand.header_logo_url(Appearance::Light), "https://cdn.example.com/icon.png");

        brand.logos.set("mono", "https://cdn.example.com/mono.svg");
        brand.header_logo_variant = Some("mono".to_string());
        assert_eq!(brand.header_logo_url(Appearance::Light), "https://cdn.example.com/mono.svg");
    }

    #[test]
    fn placeholder_hash_is_not_usable() {
        let mut brand = Brand::default();
        brand.logo_url = "#".to_string();
        assert_eq!(brand.hero_logo_url(Appearance::Light), None);
    }
}
