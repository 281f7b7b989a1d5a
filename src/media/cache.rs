// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of decoded media, keyed by item id.
//!
//! Navigating back and forth through a sequence should not re-fetch or
//! re-decode assets, so decoded entries are kept in a small LRU cache.

use crate::config::DEFAULT_MEDIA_CACHE_ENTRIES;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// LRU cache of decoded media entries.
#[derive(Debug)]
pub struct MediaCache {
    entries: LruCache<String, ImageData>,
}

impl MediaCache {
    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEDIA_CACHE_ENTRIES)
    }

    /// Creates a cache holding at most `capacity` decoded entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Stores a decoded entry, evicting the least recently used if full.
    pub fn insert(&mut self, id: impl Into<String>, data: ImageData) {
        self.entries.put(id.into(), data);
    }

    /// Looks up a decoded entry, marking it as recently used.
    pub fn get(&mut self, id: &str) -> Option<&ImageData> {
        self.entries.get(id)
    }

    /// Looks up a decoded entry without affecting recency. Used from view
    /// code, which only has shared access.
    #[must_use]
    pub fn peek(&self, id: &str) -> Option<&ImageData> {
        self.entries.peek(id)
    }

    /// Checks for an entry without affecting recency.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MediaCache {
    fn default() -> Self {
        Self::new()
    }
}
