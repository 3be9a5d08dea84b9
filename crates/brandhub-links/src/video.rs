//! Intro-video link classification

use serde::{Deserialize, Serialize};

/// How an intro video can be played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// Plain media file playable by a video element
    Direct,
    /// YouTube watch or short link
    #[serde(rename = "youtube")]
    YouTube,
    /// Vimeo page link
    Vimeo,
    /// Nothing we know how to play
    Unsupported,
}

const DIRECT_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".ogg"];

/// Classify a video URL
#[must_use]
pub fn video_kind(url: Option<&str>) -> VideoKind {
    let Some(url) = url.filter(|u| !u.trim().is_empty()) else {
        return VideoKind::Unsupported;
    };
    let lower = url.to_lowercase();

    if lower.contains("youtube.com") || lower.contains("youtu.be") {
        VideoKind::YouTube
    } else if lower.contains("vimeo.com") {
        VideoKind::Vimeo
    } else if DIRECT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
        || lower.contains("?raw=1")
        || lower.contains("dropbox.com")
    {
        VideoKind::Direct
    } else {
        VideoKind::Unsupported
    }
}

/// Build an autoplaying, muted, looping embed URL
///
/// Non-embeddable links are returned unchanged.
#[must_use]
pub fn embed_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    match video_kind(Some(url)) {
        VideoKind::YouTube => {
            let id = youtube_id(url);
            format!("https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}")
        }
        VideoKind::Vimeo => {
            let id = last_segment(url);
            format!("https://player.vimeo.com/video/{id}?autoplay=1&loop=1&muted=1")
        }
        VideoKind::Direct | VideoKind::Unsupported => url.to_string(),
    }
}

fn youtube_id(url: &str) -> &str {
    url.split_once("v=")
        .map(|(_, rest)| rest.split('&').next().unwrap_or(rest))
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| last_segment(url))
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
