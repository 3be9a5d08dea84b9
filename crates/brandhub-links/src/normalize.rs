//! Direct-download rewriting for sharing links
//!
//! Each provider has its own rewrite; the function never fails. Malformed
//! Dropbox links that cannot be parsed as URLs go through a string-based
//! fallback that produces the same host swap and `raw=1` flag.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Host that serves Dropbox files as raw bytes
const DROPBOX_DIRECT_HOST: &str = "dl.dropboxusercontent.com";

/// Google Drive direct download prefix (file id is appended)
const DRIVE_DOWNLOAD_PREFIX: &str = "https://drive.google.com/uc?export=download&id=";

/// Box direct-download path replacing the `/s/` share path
const BOX_DIRECT_PATH: &str = "dl.boxcloud.com/direct/";

/// Box share prefixes, most specific first
const BOX_SHARE_PREFIXES: [&str; 3] = ["app.box.com/s/", "www.box.com/s/", "box.com/s/"];

/// Image CDN that accepts resizing parameters
const RESIZABLE_CDN_HOST: &str = "images.unsplash.com";

/// Width used for previews when the caller has no layout hint
pub const DEFAULT_PREVIEW_WIDTH: u32 = 800;

static DRIVE_FILE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/file/d/([^/?]+)").expect("drive file pattern is valid"));

static DRIVE_QUERY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]id=([^&]+)").expect("drive query pattern is valid"));

/// Normalize a sharing link to a directly fetchable URL
///
/// - `None`, empty or blank input yields an empty string
/// - `data:` and `blob:` URIs pass through
/// - unknown hosts are returned trimmed but otherwise unchanged
///
/// Applying the function twice gives the same result as applying it once.
#[must_use]
pub fn normalize_url(url: Option<&str>) -> String {
    let Some(raw) = url else {
        return String::new();
    };
    let clean = raw.trim();

    if clean.is_empty() {
        return String::new();
    }
    if clean.starts_with("data:") || clean.starts_with("blob:") {
        return clean.to_string();
    }

    if clean.contains("dropbox.com") {
        return dropbox_direct(clean);
    }

    if clean.contains("drive.google.com") {
        if let Some(id) = drive_file_id(clean) {
            return format!("{DRIVE_DOWNLOAD_PREFIX}{id}");
        }
    }

    if clean.contains("1drv.ms") {
        return onedrive_direct(clean);
    }

    if clean.contains("box.com/s/") {
        return box_direct(clean);
    }

    clean.to_string()
}

/// Normalize and attach resizing hints for known image CDNs
///
/// The CDN query is replaced with width, quality and crop parameters. Other
/// hosts get the plain normalized URL.
#[must_use]
pub fn optimize_for_width(url: Option<&str>, width: u32) -> String {
    let direct = normalize_url(url);

    if direct.contains(RESIZABLE_CDN_HOST) {
        let base = direct.split('?').next().unwrap_or(&direct);
        return format!("{base}?w={width}&q=80&auto=format&fit=crop");
    }

    direct
}

fn dropbox_direct(clean: &str) -> String {
    let Ok(mut parsed) = Url::parse(clean) else {
        return dropbox_fallback(clean);
    };

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !matches!(key.as_ref(), "dl" | "preview" | "raw"))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut query = parsed.query_pairs_mut();
        query.clear();
        for (key, value) in &kept {
            query.append_pair(key, value);
        }
        query.append_pair("raw", "1");
    }

    if matches!(parsed.host_str(), Some("www.dropbox.com" | "dropbox.com"))
        && parsed.set_host(Some(DROPBOX_DIRECT_HOST)).is_err()
    {
        return dropbox_fallback(clean);
    }

    parsed.into()
}

/// String-level Dropbox rewrite for inputs the URL parser rejects
fn dropbox_fallback(clean: &str) -> String {
    let swapped = if clean.contains("www.dropbox.com") {
        clean.replacen("www.dropbox.com", DROPBOX_DIRECT_HOST, 1)
    } else {
        clean.replacen("dropbox.com", DROPBOX_DIRECT_HOST, 1)
    };

    let (base, query) = match swapped.split_once('?') {
        Some((base, query)) => (base, query),
        None => (swapped.as_str(), ""),
    };

    let mut params: Vec<&str> = query
        .split('&')
        .filter(|param| {
            let name = param.split('=').next().unwrap_or_default();
            !param.is_empty() && !matches!(name, "dl" | "preview" | "raw")
        })
        .collect();
    params.push("raw=1");

    format!("{base}?{}", params.join("&"))
}

fn drive_file_id(clean: &str) -> Option<&str> {
    DRIVE_FILE_ID
        .captures(clean)
        .or_else(|| DRIVE_QUERY_ID.captures(clean))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn onedrive_direct(clean: &str) -> String {
    if clean.contains("1drv.ms/download") {
        return clean.to_string();
    }
    clean.replacen("1drv.ms", "1drv.ms/download", 1)
}

fn box_direct(clean: &str) -> String {
    BOX_SHARE_PREFIXES
        .iter()
        .find(|prefix| clean.contains(*prefix))
        .map_or_else(
            || clean.to_string(),
            |prefix| clean.replacen(prefix, BOX_DIRECT_PATH, 1),
        )
}
