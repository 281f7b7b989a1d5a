// SPDX-License-Identifier: MPL-2.0
//! Media model shared by the carousel and the host application.
//!
//! A carousel displays an ordered, immutable sequence of [`MediaItem`]s.
//! The sequence is caller-supplied; the carousel never reorders or mutates it.

pub mod cache;
pub mod gallery;
pub mod loader;

pub use cache::MediaCache;
pub use gallery::Gallery;
pub use loader::{load_media, ImageData};

use serde::{Deserialize, Serialize};

/// Discriminator for the kind of asset an item points at.
///
/// `Video` items are accepted in the model but currently rendered through
/// the image pipeline without playback, matching upstream behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// One displayable entry in a carousel sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique identifier within the containing sequence.
    pub id: String,
    /// Source location of the full-resolution asset: an http(s) URL or a
    /// local filesystem path.
    pub url: String,
    /// Kind of asset; defaults to `Image`.
    #[serde(default)]
    pub kind: MediaKind,
    /// Lower-resolution preview location. Accepted but not consumed by the
    /// current rendering logic.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Caption text rendered as an overlay.
    #[serde(default)]
    pub caption: Option<String>,
    /// Accessible description; also seeds the download filename.
    #[serde(default)]
    pub alt: Option<String>,
}

impl MediaItem {
    /// Creates an image item with just an id and a source location.
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            kind: MediaKind::Image,
            thumbnail_url: None,
            caption: None,
            alt: None,
        }
    }

    /// Filename suggested when saving this item to disk.
    ///
    /// Derived from `alt` when present (lowercased, whitespace replaced),
    /// otherwise generated from the item id and the current date.
    #[must_use]
    pub fn download_filename(&self) -> String {
        let extension = self.url_extension().unwrap_or("jpg");
        match &self.alt {
            Some(alt) if !alt.trim().is_empty() => {
                let slug: String = alt
                    .trim()
                    .to_lowercase()
                    .chars()
                    .map(|c| if c.is_alphanumeric() { c } else { '-' })
                    .collect();
                format!("{}.{}", slug.trim_matches('-'), extension)
            }
            _ => {
                let date = chrono::Local::now().format("%Y%m%d");
                format!("neatrip-{}-{}.{}", self.id, date, extension)
            }
        }
    }

    /// Extension of the source URL, when it has a recognizable one.
    fn url_extension(&self) -> Option<&str> {
        let path = self.url.split(['?', '#']).next().unwrap_or(&self.url);
        let ext = path.rsplit('.').next()?;
        if ext.len() <= 4 && !ext.contains('/') && ext != path {
            Some(ext)
        } else {
            None
        }
    }

    /// Whether the source is an http(s) URL rather than a local path.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_filename_uses_alt_text() {
        let item = MediaItem {
            alt: Some("Sunset over Santorini".to_string()),
            ..MediaItem::new("a1", "https://example.com/photos/sunset.png")
        };
        assert_eq!(item.download_filename(), "sunset-over-santorini.png");
    }

    #[test]
    fn download_filename_falls_back_to_generated_name() {
        let item = MediaItem::new("a1", "https://example.com/photos/sunset.png");
        let name = item.download_filename();
        assert!(name.starts_with("neatrip-a1-"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn download_filename_defaults_extension_without_one() {
        let item = MediaItem::new("a1", "https://example.com/photos/raw");
        assert!(item.download_filename().ends_with(".jpg"));
    }

    #[test]
    fn url_extension_ignores_query_string() {
        let item = MediaItem::new("a1", "https://example.com/p.webp?size=large");
        assert_eq!(item.url_extension(), Some("webp"));
    }

    #[test]
    fn is_remote_detects_scheme() {
        assert!(MediaItem::new("a", "https://example.com/a.jpg").is_remote());
        assert!(!MediaItem::new("b", "/tmp/photos/b.jpg").is_remote());
    }

    #[test]
    fn media_kind_defaults_to_image() {
        assert_eq!(MediaKind::default(), MediaKind::Image);
    }
}
