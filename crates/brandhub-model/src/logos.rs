//! Logo variant map: five well-known variants plus named extras

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Logo variants of a brand
///
/// The well-known variants are always present (possibly empty). Additional
/// variants live in an explicit map and serialize alongside them as sibling
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoSet {
    pub color: String,
    pub white: String,
    pub black: String,
    pub stacked: String,
    pub wordmark: String,
    #[serde(flatten)]
    pub additional: BTreeMap<String, String>,
}

impl LogoSet {
    /// Names of the variants every set carries
    pub const WELL_KNOWN: [&'static str; 5] = ["color", "white", "black", "stacked", "wordmark"];

    /// Keys that share the logos section payload and can't name a variant
    pub const RESERVED: [&'static str; 2] = ["guidelines", "headerLogoVariant"];

    /// Whether `name` may be used for a custom variant
    #[inline]
    #[must_use]
    pub fn is_valid_variant_name(name: &str) -> bool {
        !name.trim().is_empty() && !Self::RESERVED.contains(&name)
    }

    /// URL of a variant, well-known or additional
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "color" => Some(&self.color),
            "white" => Some(&self.white),
            "black" => Some(&self.black),
            "stacked" => Some(&self.stacked),
            "wordmark" => Some(&self.wordmark),
            other => self.additional.get(other).map(String::as_str),
        }
    }

    /// Set a variant, returning `false` for reserved names
    pub fn set(&mut self, name: &str, url: impl Into<String>) -> bool {
        let url = url.into();
        match name {
            "color" => self.color = url,
            "white" => self.white = url,
            "black" => self.black = url,
            "stacked" => self.stacked = url,
            "wordmark" => self.wordmark = url,
            other if Self::is_valid_variant_name(other) => {
                self.additional.insert(other.to_string(), url);
            }
            _ => return false,
        }
        true
    }

    /// Remove an additional variant; well-known variants are blanked instead
    pub fn remove(&mut self, name: &str) -> Option<String> {
        if Self::WELL_KNOWN.contains(&name) {
            let old = self.get(name).map(str::to_string);
            self.set(name, String::new());
            return old;
        }
        self.additional.remove(name)
    }

    /// Every variant in a stable order: well-known first, then extras by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let known = [
            ("color", self.color.as_str()),
            ("white", self.white.as_str()),
            ("black", self.black.as_str()),
            ("stacked", self.stacked.as_str()),
            ("wordmark", self.wordmark.as_str()),
        ];
        known
            .into_iter()
            .chain(self.additional.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Overlay `other` onto `self`, key by key
    pub fn extend(&mut self, other: LogoSet) {
        for (name, url) in other.into_pairs() {
            self.set(&name, url);
        }
    }

    fn into_pairs(self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("color".to_string(), self.color),
            ("white".to_string(), self.white),
            ("black".to_string(), self.black),
            ("stacked".to_string(), self.stacked),
            ("wordmark".to_string(), self.wordmark),
        ];
        pairs.extend(self.additional);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn extras_serialize_as_siblings() {
        let mut logos = LogoSet::default();
        logos.set("color", "https://cdn.example.com/c.svg");
        logos.set("mono", "https://cdn.example.com/m.svg");

        let value = serde_json::to_value(&logos).unwrap();
        assert_eq!(value["color"], json!("https://cdn.example.com/c.svg"));
        assert_eq!(value["mono"], json!("https://cdn.example.com/m.svg"));

        let back: LogoSet = serde_json::from_value(value).unwrap();
        assert_eq!(back, logos);
    }

    #[test]
    fn reserved_names_are_refused() {
        let mut logos = LogoSet::default();
        assert!(!logos.set("guidelines", "x"));
        assert!(!logos.set("headerLogoVariant", "x"));
        assert!(!logos.set("  ", "x"));
        assert!(logos.additional.is_empty());
    }

    #[test]
    fn non_string_extra_is_rejected() {
        let result: Result<LogoSet, _> = serde_json::from_value(json!({ "mono": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn extend_overlays_keys() {
        let mut base = LogoSet {
            color: "a".into(),
            white: "b".into(),
            ..LogoSet::default()
        };
        let mut top = LogoSet {
            color: "z".into(),
            ..LogoSet::default()
        };
        top.additional.insert("mono".into(), "m".into());

        base.extend(top);
        assert_eq!(base.color, "z");
        assert_eq!(base.white, "");
        assert_eq!(base.get("mono"), Some("m"));
    }

    #[test]
    fn remove_blanks_well_known() {
        let mut logos = LogoSet {
            black: "k".into(),
            ..LogoSet::default()
        };
        logos.set("mono", "m");

        assert_eq!(logos.remove("black").as_deref(), Some("k"));
        assert_eq!(logos.black, "");
        assert_eq!(logos.remove("mono").as_deref(), Some("m"));
        assert_eq!(logos.iter().count(), 5);
    }
}
