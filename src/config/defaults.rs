// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for defaults used across the application.

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default interval between automatic slide advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Minimum allowed autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

/// Maximum allowed autoplay interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal displacement (in logical pixels) a swipe must exceed to
/// trigger navigation. Smaller movements are treated as taps or jitter.
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Number of decoded media entries kept in the in-memory cache.
pub const DEFAULT_MEDIA_CACHE_ENTRIES: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_within_bounds() {
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    }
}
