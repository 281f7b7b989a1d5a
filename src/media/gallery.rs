// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest: the TOML file the host application loads its item
//! sequence from.
//!
//! ```toml
//! title = "Santorini trip"
//!
//! [[items]]
//! id = "a1"
//! url = "https://example.com/photos/sunset.jpg"
//! caption = "Sunset from Oia"
//! alt = "Sunset over the caldera"
//! ```

use crate::error::Result;
use crate::media::MediaItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named, ordered sequence of media items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gallery {
    /// Display title for the gallery.
    #[serde(default)]
    pub title: Option<String>,
    /// Ordered items; the order here is the navigation and indicator order.
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

impl Gallery {
    /// Loads a gallery manifest from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the gallery manifest to a TOML file.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
title = "Santorini trip"

[[items]]
id = "a1"
url = "https://example.com/photos/sunset.jpg"
caption = "Sunset from Oia"

[[items]]
id = "a2"
url = "/tmp/photos/harbor.png"
kind = "video"
alt = "Harbor at dusk"
"#;

    #[test]
    fn parses_items_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gallery.toml");
        fs::write(&path, SAMPLE).expect("failed to write manifest");

        let gallery = Gallery::load_from_path(&path).expect("load failed");
        assert_eq!(gallery.title.as_deref(), Some("Santorini trip"));
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.items[0].id, "a1");
        assert_eq!(gallery.items[1].kind, MediaKind::Video);
        assert_eq!(gallery.items[1].alt.as_deref(), Some("Harbor at dusk"));
    }

    #[test]
    fn load_fails_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = Gallery::load_from_path(&temp_dir.path().join("missing.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_fails_on_invalid_manifest() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gallery.toml");
        fs::write(&path, "items = 3").expect("failed to write manifest");
        assert!(Gallery::load_from_path(&path).is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("out").join("gallery.toml");
        let gallery = Gallery {
            title: Some("Trip".to_string()),
            items: vec![MediaItem::new("a1", "https://example.com/a.jpg")],
        };

        gallery.save_to_path(&path).expect("save failed");
        let loaded = Gallery::load_from_path(&path).expect("load failed");
        assert_eq!(loaded.items, gallery.items);
    }
}
