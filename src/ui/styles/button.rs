// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Overlay buttons floating above the media (navigation, play, expand).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Borderless button used for indicator dots and inline dismiss controls.
pub fn bare(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_hover_is_more_opaque_than_rest() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.3, 0.8);
        let rest = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(c)) => c.a,
            _ => panic!("expected a color background"),
        };
        assert!(alpha(&hover) > alpha(&rest));
    }
}
