//! BrandHub Link Normalizer
//!
//! Rewrites cloud-storage sharing links into URLs that can be fetched directly.
//!
//! # Core Concepts
//!
//! - [`normalize_url`]: Dropbox, Google Drive, OneDrive and Box share links to
//!   direct-download form; everything else passes through
//! - [`deep_sanitize`]: applies [`normalize_url`] to every sharing-link string
//!   inside an arbitrary JSON tree
//! - [`optimize_for_width`]: CDN resizing hints for image previews
//! - [`video_kind`] / [`embed_url`]: classification of intro-video links
//!
//! # Example
//!
//! ```rust,ignore
//! use brandhub_links::normalize_url;
//!
//! let direct = normalize_url(Some("https://www.dropbox.com/s/abc/logo.png?dl=0"));
//! assert_eq!(direct, "https://dl.dropboxusercontent.com/s/abc/logo.png?raw=1");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod normalize;
mod sanitize;
mod video;

pub use normalize::{normalize_url, optimize_for_width, DEFAULT_PREVIEW_WIDTH};
pub use sanitize::{deep_sanitize, is_sharing_link, SHARING_HOSTS};
pub use video::{embed_url, video_kind, VideoKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
