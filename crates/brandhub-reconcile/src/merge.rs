//! Root merge: blueprint ← input, field by field
//!
//! Each field is taken from the input only when it is present, non-null and
//! of the right type. Coercions keep the result inside the write-gate rules.

use brandhub_model::{
    BackgroundSettings, Brand, BrandIcon, Color, LogoGuidelines, LogoHeroSettings, LogoSet,
    NeuralRegistry, QrSettings,
};
use brandhub_schema::{is_hex_color, is_present, is_url_or_empty};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Hex used when a color can't be salvaged
pub const FALLBACK_HEX: &str = "#000000";

/// Typed field value, or `None` when absent, null or malformed
pub(crate) fn take<T: DeserializeOwned>(input: &Map<String, Value>, key: &str) -> Option<T> {
    match input.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => match <T as Deserialize>::deserialize(value) {
            Ok(typed) => Some(typed),
            Err(err) => {
                debug!(field = key, error = %err, "ignoring malformed field");
                None
            }
        },
    }
}

/// List field with malformed entries dropped
///
/// Returns `None` when the field is absent, null or not an array.
pub(crate) fn take_list<T: DeserializeOwned>(input: &Map<String, Value>, key: &str) -> Option<Vec<T>> {
    let items = input.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match <T as Deserialize>::deserialize(item) {
                Ok(typed) => Some(typed),
                Err(err) => {
                    debug!(field = key, index, error = %err, "dropping malformed entry");
                    None
                }
            })
            .collect(),
    )
}

macro_rules! overlay {
    ($brand:ident, $input:ident, $take:ident { $($field:ident: $key:literal),* $(,)? }) => {
        $(
            if let Some(value) = $take($input, $key) {
                $brand.$field = value;
            }
        )*
    };
}

macro_rules! overlay_optional {
    ($brand:ident, $input:ident { $($field:ident: $key:literal),* $(,)? }) => {
        $(
            if let Some(value) = take::<String>($input, $key) {
                $brand.$field = Some(value);
            }
        )*
    };
}

/// Overlay `input` onto `brand`, which holds the blueprint on entry
///
/// `id`, `version`, `updatedAt` and `sections` are left to the caller.
pub(crate) fn merge_root(brand: &mut Brand, input: &Map<String, Value>) {
    overlay!(brand, input, take {
        entity_type: "entityType",
        is_visible: "isVisible",
        category: "category",
        description: "description",
        industry: "industry",
        status: "status",
        hide_main_logo: "hideMainLogo",
        hide_brand_icon: "hideBrandIcon",
        hide_ai_assistant: "hideAIAssistant",
        social_icons: "socialIcons",
        custom_block: "customBlock",
    });

    overlay_optional!(brand, input {
        website_url: "websiteUrl",
        tagline: "tagline",
        archetype: "archetype",
        mission_statement: "missionStatement",
        imagery_guidelines: "imageryGuidelines",
        iconography_rights: "iconographyRights",
        iconography_settings: "iconographySettings",
        header_logo_variant: "headerLogoVariant",
        intelligence_brain: "intelligenceBrain",
    });

    overlay!(brand, input, take_list {
        tone_of_voice: "toneOfVoice",
        gradients: "gradients",
        patterns: "patterns",
        typography: "typography",
        text_styles: "textStyles",
        assets: "assets",
        icons: "icons",
        ai_icon_sets: "aiIconSets",
        imagery: "imagery",
        logo_usage_donts: "logoUsageDonts",
        signatures: "signatures",
        email_banners: "emailBanners",
        values: "values",
        hidden_logos: "hiddenLogos",
        socials: "socials",
        social_banners: "socialBanners",
        social_examples: "socialExamples",
        digital_banners: "digitalBanners",
        products: "products",
        linked_brand_ids: "linkedBrandIds",
        sub_brands: "subBrands",
    });

    if let Some(name) = take::<String>(input, "name").filter(|name| is_present(name)) {
        brand.name = name;
    }
    if let Some(colors) = take_list::<Color>(input, "colors") {
        brand.colors = colors.into_iter().map(coerce_color).collect();
    }
    merge_urls(brand, input);

    merge_logos(&mut brand.logos, input.get("logos"));
    brand.brand_icon = merge_brand_icon(&brand.brand_icon, input.get("brandIcon"));
    brand.qr_settings = merge_qr_settings(&brand.qr_settings, input.get("qrSettings"));
    brand.brain_registry = merge_brain_registry(&brand.brain_registry, input.get("brainRegistry"));
    brand.logo_hero = merge_logo_hero(&brand.logo_hero, input.get("logoHero"));
    brand.background_settings =
        merge_background(&brand.background_settings, input.get("backgroundSettings"));
    brand.logo_guidelines = merge_logo_guidelines(&brand.logo_guidelines, input.get("logoGuidelines"));
}

/// URL fields keep the blueprint value when the input isn't a usable URL
fn merge_urls(brand: &mut Brand, input: &Map<String, Value>) {
    if let Some(url) = take::<String>(input, "logoUrl") {
        if is_url_or_empty(&url) {
            brand.logo_url = url;
        } else {
            debug!(value = %url, "replacing invalid logoUrl");
        }
    }
    if let Some(url) = take::<String>(input, "coverImage") {
        if is_url_or_empty(&url) {
            brand.cover_image = url;
        } else {
            debug!(value = %url, "replacing invalid coverImage");
        }
    }
    if let Some(url) = take::<String>(input, "introVideoUrl") {
        if is_url_or_empty(&url) {
            brand.intro_video_url = Some(url);
        } else {
            debug!(value = %url, "replacing invalid introVideoUrl");
        }
    }
}

/// Color with its hex repaired
///
/// A missing leading `#` is added back; anything else unsalvageable becomes
/// [`FALLBACK_HEX`].
#[must_use]
pub fn coerce_color(mut color: Color) -> Color {
    if !is_hex_color(&color.hex) {
        let prefixed = format!("#{}", color.hex.trim().trim_start_matches('#'));
        color.hex = if is_hex_color(&prefixed) {
            prefixed
        } else {
            debug!(name = %color.name, hex = %color.hex, "replacing invalid hex");
            FALLBACK_HEX.to_string()
        };
    }
    color
}

/// Overlay logo variants key by key
///
/// Non-string values, reserved names and invalid URLs are skipped, so a
/// well-known variant keeps its blueprint URL.
pub(crate) fn merge_logos(logos: &mut LogoSet, patch: Option<&Value>) {
    let Some(Value::Object(patch)) = patch else {
        return;
    };
    for (name, value) in patch {
        let Some(url) = value.as_str() else {
            continue;
        };
        if !is_url_or_empty(url) {
            debug!(variant = %name, value = %url, "skipping invalid logo url");
            continue;
        }
        if !logos.set(name, url) {
            debug!(variant = %name, "skipping reserved logo variant name");
        }
    }
}

pub(crate) fn merge_brand_icon(base: &BrandIcon, patch: Option<&Value>) -> BrandIcon {
    merge_record(base, patch, "brandIcon")
}

pub(crate) fn merge_qr_settings(base: &QrSettings, patch: Option<&Value>) -> QrSettings {
    merge_record(base, patch, "qrSettings")
}

pub(crate) fn merge_brain_registry(base: &NeuralRegistry, patch: Option<&Value>) -> NeuralRegistry {
    merge_record(base, patch, "brainRegistry")
}

pub(crate) fn merge_logo_hero(base: &LogoHeroSettings, patch: Option<&Value>) -> LogoHeroSettings {
    merge_record(base, patch, "logoHero")
}

pub(crate) fn merge_background(base: &BackgroundSettings, patch: Option<&Value>) -> BackgroundSettings {
    merge_record(base, patch, "backgroundSettings")
}

pub(crate) fn merge_logo_guidelines(base: &LogoGuidelines, patch: Option<&Value>) -> LogoGuidelines {
    merge_record(base, patch, "logoGuidelines")
}

/// Field-level overlay of `patch` onto `base`
///
/// Each patch key is checked on its own; a key whose value has the wrong
/// type is skipped and the base value kept.
fn merge_record<T>(base: &T, patch: Option<&Value>, field: &str) -> T
where
    T: Clone + Serialize + DeserializeOwned,
{
    let Some(Value::Object(patch)) = patch else {
        return base.clone();
    };
    let Ok(Value::Object(mut merged)) = serde_json::to_value(base) else {
        return base.clone();
    };

    for (key, value) in patch.iter().filter(|(_, v)| !v.is_null()) {
        let mut probe = Map::new();
        probe.insert(key.clone(), value.clone());
        if serde_json::from_value::<T>(Value::Object(probe)).is_ok() {
            merged.insert(key.clone(), value.clone());
        } else {
            debug!(field, key = %key, "skipping malformed record field");
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or_else(|err| {
        debug!(field, error = %err, "record merge failed, keeping base");
        base.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandhub_model::ColorUsage;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn take_ignores_null_and_wrong_types() {
        let input = object(json!({ "a": null, "b": 3, "c": "ok" }));
        assert_eq!(take::<String>(&input, "a"), None);
        assert_eq!(take::<String>(&input, "b"), None);
        assert_eq!(take::<String>(&input, "c").as_deref(), Some("ok"));
        assert_eq!(take::<String>(&input, "missing"), None);
    }

    #[test]
    fn take_list_drops_bad_entries() {
        let input = object(json!({
            "colors": [{ "name": "Ok", "hex": "#fff" }, { "usage": "shouting" }, 7, { "name": [] }],
            "notAList": { "x": 1 }
        }));
        let colors: Vec<Color> = take_list(&input, "colors").unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].usage, ColorUsage::Primary);
        assert_eq!(take_list::<Color>(&input, "notAList"), None);
    }

    #[test]
    fn hex_coercion() {
        let fixed = coerce_color(Color::new("a", "ff0000", ColorUsage::Primary));
        assert_eq!(fixed.hex, "#ff0000");
        let fallback = coerce_color(Color::new("b", "red", ColorUsage::Primary));
        assert_eq!(fallback.hex, FALLBACK_HEX);
        let kept = coerce_color(Color::new("c", "#abc", ColorUsage::Primary));
        assert_eq!(kept.hex, "#abc");
    }

    #[test]
    fn record_merge_is_field_level() {
        let base = QrSettings {
            default_url: "https://base.example".into(),
            fg_color: "#000000".into(),
            bg_color: "#ffffff".into(),
            ..QrSettings::default()
        };
        let merged = merge_qr_settings(
            &base,
            Some(&json!({ "fgColor": "#112233", "preferLogo": "yes", "bgColor": null })),
        );

        assert_eq!(merged.fg_color, "#112233");
        assert_eq!(merged.bg_color, "#ffffff");
        assert!(!merged.prefer_logo);
        assert_eq!(merged.default_url, "https://base.example");
    }

    #[test]
    fn logo_merge_skips_invalid() {
        let mut logos = LogoSet {
            color: "https://base.example/c.svg".into(),
            ..LogoSet::default()
        };
        merge_logos(
            &mut logos,
            Some(&json!({
                "color": "not a url",
                "white": "https://new.example/w.svg",
                "mono": "https://new.example/m.svg",
                "guidelines": "https://new.example/g.svg",
                "stacked": 4
            })),
        );

        assert_eq!(logos.color, "https://base.example/c.svg");
        assert_eq!(logos.white, "https://new.example/w.svg");
        assert_eq!(logos.get("mono"), Some("https://new.example/m.svg"));
        assert_eq!(logos.get("guidelines"), None);
        assert_eq!(logos.stacked, "");
    }
}
