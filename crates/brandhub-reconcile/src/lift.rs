//! Section → root lifting
//!
//! Works on the raw JSON object before any typed merge, so a partial payload
//! only touches the keys it actually carries.

use std::collections::HashSet;

use brandhub_model::{is_empty_payload, SectionKind};
use serde_json::{Map, Value};
use tracing::debug;

/// Lift the payload of each input section into the root object
///
/// Only the first section of each kind is considered. Sections with an
/// unknown type or an empty payload are skipped.
pub(crate) fn lift_sections(root: &mut Map<String, Value>) {
    let Some(Value::Array(sections)) = root.get("sections").cloned() else {
        return;
    };

    let mut seen = HashSet::new();
    for section in &sections {
        let Some(kind) = section
            .get("type")
            .and_then(Value::as_str)
            .and_then(|name| name.parse::<SectionKind>().ok())
        else {
            continue;
        };
        if !seen.insert(kind) {
            continue;
        }
        let Some(data) = section.get("data").filter(|data| !is_empty_payload(data)) else {
            continue;
        };

        debug!(section = %kind, "lifting section payload");
        lift(kind, data, root);
    }
}

fn lift(kind: SectionKind, data: &Value, root: &mut Map<String, Value>) {
    match kind {
        SectionKind::Identity => copy_keys(
            data,
            root,
            &[
                ("missionStatement", "missionStatement"),
                ("toneOfVoice", "toneOfVoice"),
                ("values", "values"),
                ("websiteUrl", "websiteUrl"),
                ("introVideoUrl", "introVideoUrl"),
                ("tagline", "tagline"),
                ("archetype", "archetype"),
            ],
        ),
        SectionKind::Logos => lift_logos(data, root),
        SectionKind::BrandIcon => spread_into(data, root, "brandIcon"),
        SectionKind::Colors => replace_list(data, root, "colors"),
        SectionKind::Gradients => replace_list(data, root, "gradients"),
        SectionKind::Patterns => replace_list(data, root, "patterns"),
        SectionKind::Typography => replace_list(data, root, "typography"),
        SectionKind::TextStyles => replace_list(data, root, "textStyles"),
        SectionKind::Assets => replace_list(data, root, "assets"),
        SectionKind::Misuse => replace_list(data, root, "logoUsageDonts"),
        SectionKind::SocialIcons => replace_record(data, root, "socialIcons"),
        SectionKind::Qr => replace_record(data, root, "qrSettings"),
        SectionKind::Ai => replace_record(data, root, "brainRegistry"),
        SectionKind::Hero => replace_record(data, root, "logoHero"),
        SectionKind::Custom => replace_record(data, root, "customBlock"),
        SectionKind::Iconography => {
            copy_keys(data, root, &[("icons", "icons"), ("aiSets", "aiIconSets")]);
        }
        SectionKind::Imagery => copy_keys(
            data,
            root,
            &[("guidelines", "imageryGuidelines"), ("images", "imagery")],
        ),
        SectionKind::Social => copy_keys(
            data,
            root,
            &[
                ("socials", "socials"),
                ("banners", "socialBanners"),
                ("digital", "digitalBanners"),
            ],
        ),
        SectionKind::Signatures => copy_keys(
            data,
            root,
            &[("signatures", "signatures"), ("banners", "emailBanners")],
        ),
        SectionKind::Products => copy_keys(
            data,
            root,
            &[("products", "products"), ("linkedBrandIds", "linkedBrandIds")],
        ),
    }
}

/// Copy `(from, to)` pairs that are present and non-null in `data`
fn copy_keys(data: &Value, root: &mut Map<String, Value>, pairs: &[(&str, &str)]) {
    let Some(data) = data.as_object() else {
        return;
    };
    for (from, to) in pairs {
        if let Some(value) = data.get(*from).filter(|v| !v.is_null()) {
            root.insert((*to).to_string(), value.clone());
        }
    }
}

fn replace_list(data: &Value, root: &mut Map<String, Value>, key: &str) {
    if data.is_array() {
        root.insert(key.to_string(), data.clone());
    }
}

fn replace_record(data: &Value, root: &mut Map<String, Value>, key: &str) {
    if data.is_object() {
        root.insert(key.to_string(), data.clone());
    }
}

/// Shallow-merge the keys of `data` into the object at `root[key]`
fn spread_into(data: &Value, root: &mut Map<String, Value>, key: &str) {
    let Some(data) = data.as_object() else {
        return;
    };
    with_object_at(root, key, |target| {
        for (field, value) in data {
            if !value.is_null() {
                target.insert(field.clone(), value.clone());
            }
        }
    });
}

fn lift_logos(data: &Value, root: &mut Map<String, Value>) {
    let Some(data) = data.as_object() else {
        return;
    };

    let mut variants = Map::new();
    for (field, value) in data.iter().filter(|(_, v)| !v.is_null()) {
        match field.as_str() {
            "guidelines" => {
                root.insert("logoGuidelines".to_string(), value.clone());
            }
            "headerLogoVariant" => {
                root.insert("headerLogoVariant".to_string(), value.clone());
            }
            _ => {
                variants.insert(field.clone(), value.clone());
            }
        }
    }

    let variants = Value::Object(variants);
    spread_into(&variants, root, "logos");
}

/// Run `f` on the object at `root[key]`, replacing anything that isn't one
fn with_object_at(root: &mut Map<String, Value>, key: &str, f: impl FnOnce(&mut Map<String, Value>)) {
    if !matches!(root.get(key), Some(Value::Object(_))) {
        root.insert(key.to_string(), Value::Object(Map::new()));
    }
    if let Some(Value::Object(target)) = root.get_mut(key) {
        f(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn lifted(input: Value) -> Value {
        let Value::Object(mut root) = input else {
            panic!("test input must be an object");
        };
        lift_sections(&mut root);
        root.remove("sections");
        Value::Object(root)
    }

    #[test]
    fn identity_copies_only_present_keys() {
        let out = lifted(json!({
            "missionStatement": "old",
            "values": [{ "text": "Keep", "icon": "Star" }],
            "sections": [{ "type": "identity", "data": { "missionStatement": "new" } }]
        }));

        assert_eq!(out["missionStatement"], json!("new"));
        assert_eq!(out["values"], json!([{ "text": "Keep", "icon": "Star" }]));
    }

    #[test]
    fn logos_split_reserved_keys() {
        let out = lifted(json!({
            "logos": { "color": "https://a.example/c.svg", "white": "https://a.example/w.svg" },
            "sections": [{
                "type": "logos",
                "data": {
                    "color": "https://b.example/c.svg",
                    "mono": "https://b.example/m.svg",
                    "guidelines": { "clearSpace": "2x" },
                    "headerLogoVariant": "mono"
                }
            }]
        }));

        assert_eq!(
            out["logos"],
            json!({
                "color": "https://b.example/c.svg",
                "white": "https://a.example/w.svg",
                "mono": "https://b.example/m.svg"
            })
        );
        assert_eq!(out["logoGuidelines"], json!({ "clearSpace": "2x" }));
        assert_eq!(out["headerLogoVariant"], json!("mono"));
    }

    #[test]
    fn empty_array_clears_but_empty_object_is_skipped() {
        let out = lifted(json!({
            "colors": [{ "name": "Red", "hex": "#ff0000" }],
            "assets": [{ "id": "a1" }],
            "sections": [
                { "type": "colors", "data": [] },
                { "type": "assets", "data": {} }
            ]
        }));

        assert_eq!(out["colors"], json!([]));
        assert_eq!(out["assets"], json!([{ "id": "a1" }]));
    }

    #[test]
    fn only_first_section_of_a_kind_counts() {
        let out = lifted(json!({
            "sections": [
                { "type": "qr", "data": { "defaultUrl": "https://first.example" } },
                { "type": "qr", "data": { "defaultUrl": "https://second.example" } },
                { "type": "sidebar", "data": { "x": 1 } }
            ]
        }));

        assert_eq!(out["qrSettings"], json!({ "defaultUrl": "https://first.example" }));
        assert!(out.get("x").is_none());
    }

    #[test]
    fn brand_icon_spreads_over_existing() {
        let out = lifted(json!({
            "brandIcon": { "url": "https://a.example/i.png", "settings": "1:1" },
            "sections": [{ "type": "brandIcon", "data": { "settings": "square" } }]
        }));

        assert_eq!(out["brandIcon"], json!({ "url": "https://a.example/i.png", "settings": "square" }));
    }

    #[test]
    fn mismatched_list_payload_is_ignored() {
        let out = lifted(json!({
            "colors": [{ "name": "Red", "hex": "#ff0000" }],
            "sections": [{ "type": "colors", "data": { "oops": true } }]
        }));

        assert_eq!(out["colors"], json!([{ "name": "Red", "hex": "#ff0000" }]));
    }
}
