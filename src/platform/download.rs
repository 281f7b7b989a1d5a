// SPDX-License-Identifier: MPL-2.0
//! Save-as download of the current item.
//!
//! Mirrors the browser flow: fetch the asset bytes first, then offer a
//! save dialog seeded with a filename derived from the item. A fetch
//! failure is an error the caller surfaces to the user; dismissing the
//! dialog is a silent no-op.

use crate::error::Result;
use crate::media::{loader, MediaItem};
use std::path::PathBuf;

/// Fetches the item's bytes and writes them to a user-chosen destination.
///
/// Returns `Ok(None)` when the user dismisses the save dialog.
pub async fn save_item(item: MediaItem) -> Result<Option<PathBuf>> {
    let bytes = loader::fetch_bytes(&item).await?;

    let mut dialog = rfd::AsyncFileDialog::new().set_file_name(item.download_filename());
    if let Some(downloads) = dirs::download_dir() {
        dialog = dialog.set_directory(downloads);
    }

    let Some(target) = dialog.save_file().await else {
        return Ok(None);
    };

    let path = target.path().to_path_buf();
    tokio::fs::write(&path, &bytes).await?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The dialog itself needs a display server; the fetch half of the flow
    // is covered here and in `media::loader`.
    #[tokio::test]
    async fn fetch_failure_surfaces_before_any_dialog() {
        let item = MediaItem::new("a1", "/nonexistent/photo.jpg");
        let result = loader::fetch_bytes(&item).await;
        assert!(result.is_err());
    }
}
