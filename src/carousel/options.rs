// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied carousel configuration.
//!
//! All presentation and behavior flags live in one struct with documented
//! defaults, so the contract stays auditable instead of being scattered
//! across view conditionals.

use crate::config::DEFAULT_AUTOPLAY_INTERVAL_MS;
use std::time::Duration;

/// Fixed width:height box the media is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// 1:1.
    #[default]
    Square,
    /// 16:9.
    Video,
    /// 3:4.
    Portrait,
    /// 4:3.
    Landscape,
}

impl AspectRatio {
    /// Width divided by height.
    #[must_use]
    pub fn ratio(self) -> f32 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Video => 16.0 / 9.0,
            AspectRatio::Portrait => 3.0 / 4.0,
            AspectRatio::Landscape => 4.0 / 3.0,
        }
    }

    /// Box height for a given width.
    #[must_use]
    pub fn height_for_width(self, width: f32) -> f32 {
        width / self.ratio()
    }
}

/// What a press on the media itself does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickBehavior {
    /// Open the fullscreen viewer (when `enable_fullscreen` allows it).
    #[default]
    OpenFullscreen,
    /// Emit `Effect::ImageClicked` and let the host decide; the default
    /// fullscreen-open is suppressed.
    Delegate,
}

/// Recognized carousel options and their effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Shape of the media box. Default `Square`.
    pub aspect_ratio: AspectRatio,
    /// Render prev/next buttons (only meaningful with more than one item).
    pub show_controls: bool,
    /// Render the indicator dot row (only meaningful with more than one
    /// item); pressing a dot jumps directly to that index.
    pub show_indicators: bool,
    /// Start with the autoplay timer running and render its toggle button.
    pub auto_play: bool,
    /// Delay between automatic advances. Default 5000 ms.
    pub auto_play_interval: Duration,
    /// Allow the fullscreen viewer (expand button and media press).
    pub enable_fullscreen: bool,
    /// Render the download action.
    pub enable_download: bool,
    /// Render the share action.
    pub enable_share: bool,
    /// Render the like action; presses surface as `Effect::Liked`. The
    /// carousel itself tracks no like state.
    pub enable_like: bool,
    /// What a press on the media does.
    pub click_behavior: ClickBehavior,
    /// Starting index; clamped into range at construction.
    pub initial_index: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::Square,
            show_controls: true,
            show_indicators: true,
            auto_play: false,
            auto_play_interval: Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS),
            enable_fullscreen: true,
            enable_download: false,
            enable_share: false,
            enable_like: false,
            click_behavior: ClickBehavior::OpenFullscreen,
            initial_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = Options::default();
        assert_eq!(options.aspect_ratio, AspectRatio::Square);
        assert!(options.show_controls);
        assert!(options.show_indicators);
        assert!(!options.auto_play);
        assert_eq!(options.auto_play_interval, Duration::from_millis(5000));
        assert!(options.enable_fullscreen);
        assert!(!options.enable_download);
        assert!(!options.enable_share);
        assert!(!options.enable_like);
        assert_eq!(options.click_behavior, ClickBehavior::OpenFullscreen);
        assert_eq!(options.initial_index, 0);
    }

    #[test]
    fn aspect_ratios_have_expected_proportions() {
        assert_eq!(AspectRatio::Square.height_for_width(300.0), 300.0);
        assert!((AspectRatio::Video.height_for_width(320.0) - 180.0).abs() < 0.01);
        assert_eq!(AspectRatio::Portrait.height_for_width(300.0), 400.0);
        assert_eq!(AspectRatio::Landscape.height_for_width(400.0), 300.0);
    }
}
