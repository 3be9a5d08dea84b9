//! Recursive link sanitation over JSON trees

use serde_json::Value;

use crate::normalize::normalize_url;

/// Host fragments that identify a sharing link
pub const SHARING_HOSTS: [&str; 4] = ["dropbox.com", "drive.google.com", "1drv.ms", "box.com"];

/// Check whether a string contains a known sharing host
#[inline]
#[must_use]
pub fn is_sharing_link(value: &str) -> bool {
    SHARING_HOSTS.iter().any(|host| value.contains(host))
}

/// Rewrite every sharing-link string in a JSON tree
///
/// Arrays and objects are walked recursively, other scalars are returned as
/// they are. A `Value` owns its children, so the walk always terminates.
#[must_use]
pub fn deep_sanitize(value: Value) -> Value {
    match value {
        Value::String(text) if is_sharing_link(&text) => Value::String(normalize_url(Some(&text))),
        Value::Array(items) => Value::Array(items.into_iter().map(deep_sanitize).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| (key, deep_sanitize(child)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn rewrites_nested_strings() {
        let input = json!({
            "name": "Acme",
            "logos": { "color": "https://www.dropbox.com/s/a/logo.png?dl=0" },
            "imagery": [
                { "url": "https://drive.google.com/file/d/IMG1/view" },
                { "url": "https://cdn.example.com/keep.png" }
            ]
        });

        let out = deep_sanitize(input);

        assert_eq!(
            out["logos"]["color"],
            json!("https://dl.dropboxusercontent.com/s/a/logo.png?raw=1")
        );
        assert_eq!(
            out["imagery"][0]["url"],
            json!("https://drive.google.com/uc?export=download&id=IMG1")
        );
        assert_eq!(out["imagery"][1]["url"], json!("https://cdn.example.com/keep.png"));
        assert_eq!(out["name"], json!("Acme"));
    }

    #[test]
    fn scalars_are_untouched() {
        let input = json!({ "order": 3, "isVisible": false, "missing": null });
        assert_eq!(deep_sanitize(input.clone()), input);
    }

    #[test]
    fn sanitize_is_idempotent() {
        let input = json!(["https://1drv.ms/i/s!X", "https://app.box.com/s/zz"]);
        let once = deep_sanitize(input);
        assert_eq!(deep_sanitize(once.clone()), once);
    }

    #[test]
    fn box_host_detection() {
        assert!(is_sharing_link("https://app.box.com/s/zz"));
        assert!(!is_sharing_link("https://dl.boxcloud.com/direct/zz"));
        assert!(!is_sharing_link("https://dl.dropboxusercontent.com/s/a?raw=1"));
    }
}
