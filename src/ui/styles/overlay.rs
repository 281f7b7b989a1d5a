// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for counters, badges, captions, and overlay icons.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Generic style for overlay indicators like the position counter and the
/// video badge.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Style for the caption strip along the bottom edge of the media.
#[must_use]
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Stroke color applied to overlay SVG icons.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
