// SPDX-License-Identifier: MPL-2.0
//! Asynchronous media loading and decoding.
//!
//! Items are fetched (over HTTP or from the filesystem) and decoded off the
//! UI thread; the update loop receives a `Result` so a broken asset can be
//! hidden instead of rendered as a broken-image placeholder.

use crate::error::{Error, Result};
use crate::media::MediaItem;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// A decoded, display-ready media asset.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates an `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Fetches and decodes one item.
///
/// Remote items are fetched with an HTTP GET; local items are read from
/// disk. Either way the bytes go through the image decoder, so a truncated
/// or non-image response surfaces as `Error::Decode` rather than a broken
/// texture.
pub async fn load_media(item: &MediaItem) -> Result<ImageData> {
    let bytes = fetch_bytes(item).await?;
    decode_bytes(&bytes)
}

/// Fetches the raw bytes of an item without decoding them.
///
/// Used by the download action, which wants the original encoded asset.
pub async fn fetch_bytes(item: &MediaItem) -> Result<Vec<u8>> {
    if item.is_remote() {
        let response = reqwest::get(&item.url).await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        Ok(tokio::fs::read(Path::new(&item.url)).await?)
    }
}

/// Decodes encoded image bytes into display-ready RGBA.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has zero dimensions".to_string()));
    }
    Ok(ImageData::from_rgba(
        width,
        height,
        decoded.into_rgba8().into_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaItem;

    fn png_bytes() -> Vec<u8> {
        let img = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image_rs::ImageFormat::Png,
        )
        .expect("failed to encode test png");
        bytes
    }

    #[test]
    fn decode_bytes_yields_dimensions() {
        let data = decode_bytes(&png_bytes()).expect("decode failed");
        assert_eq!((data.width, data.height), (2, 2));
    }

    #[test]
    fn decode_bytes_rejects_garbage() {
        let result = decode_bytes(b"definitely not an image");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn load_media_reads_local_file() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("tile.png");
        std::fs::write(&path, png_bytes()).expect("failed to write test image");

        let item = MediaItem::new("t1", path.to_string_lossy().to_string());
        let data = load_media(&item).await.expect("load failed");
        assert_eq!((data.width, data.height), (2, 2));
    }

    #[tokio::test]
    async fn load_media_fails_on_missing_local_file() {
        let item = MediaItem::new("t1", "/nonexistent/path/tile.png");
        assert!(load_media(&item).await.is_err());
    }
}
