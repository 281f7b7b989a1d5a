// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface the media box sits on: a neutral dark frame so letterboxed
/// images do not flash the window background.
pub fn media_box(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Backdrop of the fullscreen viewer.
pub fn fullscreen_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
