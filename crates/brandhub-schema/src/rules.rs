//! Field-level rules shared by the validator and the repair path

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex pattern is valid")
});

/// `#RGB` or `#RRGGBB`
#[inline]
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Empty, or an absolute URL
#[must_use]
pub fn is_url_or_empty(value: &str) -> bool {
    value.is_empty() || Url::parse(value).is_ok()
}

/// Non-empty after trimming
#[inline]
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A1b2C3"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color(" #ffffff"));
    }

    #[test]
    fn url_forms() {
        assert!(is_url_or_empty(""));
        assert!(is_url_or_empty("https://cdn.example.com/a.svg"));
        assert!(is_url_or_empty("data:image/png;base64,AAAA"));
        assert!(!is_url_or_empty("logo.svg"));
        assert!(!is_url_or_empty("#"));
        assert!(!is_url_or_empty("www.example.com/logo.svg"));
    }
}
