// SPDX-License-Identifier: MPL-2.0
//! Overlay chrome shared by the inline and fullscreen presentations:
//! navigation buttons, the position counter, indicator dots, badges,
//! captions, and the action row.

use crate::carousel::component::{Message, State};
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::tooltip::{self, Tooltip};
use iced::widget::{button, container, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Wraps a control in a tooltip carrying its accessible label.
pub(super) fn labeled<'a>(
    content: impl Into<Element<'a, Message>>,
    label: String,
) -> Element<'a, Message> {
    Tooltip::new(
        content,
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .style(styles::overlay::indicator(radius::SM))
    .padding(spacing::XXS)
    .into()
}

/// Round floating button holding a single icon.
pub(super) fn overlay_button<'a>(
    icon: Svg<'static>,
    icon_size: f32,
    message: Message,
) -> Element<'a, Message> {
    button(
        icons::sized(icon, icon_size).style(styles::overlay::icon(palette::WHITE)),
    )
    .padding(spacing::XS)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message)
    .into()
}

/// Previous/next chevrons pinned to the vertical center of each edge.
pub fn nav_row<'a>(i18n: &I18n) -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XS)
        .push(labeled(
            overlay_button(icons::chevron_left(), sizing::ICON_MD, Message::Previous),
            i18n.tr("control-previous"),
        ))
        .push(Space::new().width(Length::Fill))
        .push(labeled(
            overlay_button(icons::chevron_right(), sizing::ICON_MD, Message::Next),
            i18n.tr("control-next"),
        ))
        .into()
}

/// "current / total" counter badge, one-based, pinned top-right.
pub fn counter<'a>(current: usize, len: usize) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(format!("{} / {}", current + 1, len)).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::overlay::indicator(radius::FULL));

    Container::new(badge)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Right)
        .into()
}

/// Badge marking a video item, pinned top-left.
pub fn video_badge<'a>(i18n: &I18n) -> Element<'a, Message> {
    let badge = Container::new(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(
                icons::sized(icons::film(), sizing::ICON_SM)
                    .style(styles::overlay::icon(palette::WHITE)),
            )
            .push(Text::new(i18n.tr("media-badge-video")).size(typography::CAPTION)),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::overlay::indicator(radius::SM));

    Container::new(badge).padding(spacing::XS).into()
}

/// Caption strip along the bottom edge.
pub fn caption_strip<'a>(caption: &str) -> Element<'a, Message> {
    let strip = Container::new(Text::new(caption.to_owned()).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::overlay::caption);

    Container::new(strip)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

/// One indicator dot per item; the active one is slightly larger and
/// carries the brand color. Pressing a dot jumps straight to its index.
pub fn dots<'a>(len: usize, current: usize) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for index in 0..len {
        let active = index == current;
        let size = if active {
            sizing::DOT_ACTIVE
        } else {
            sizing::DOT
        };
        let fill = if active {
            palette::PRIMARY_400
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_200
            }
        };
        let dot = Container::new(Space::new().width(size).height(size)).style(move |_theme: &Theme| {
            container::Style {
                background: Some(Background::Color(fill)),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        });
        row = row.push(
            button(dot)
                .padding(spacing::XXS)
                .style(styles::button::bare)
                .on_press(Message::JumpTo(index)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Enabled item actions (like, download, share) plus the expand button,
/// pinned bottom-right above the caption.
pub fn action_row<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let options = state.options();
    let mut row = Row::new().spacing(spacing::XS);

    if options.enable_like {
        let icon =
            icons::sized(icons::heart(), sizing::ICON_SM).style(styles::overlay::icon(palette::LIKE_500));
        let like = button(icon)
            .padding(spacing::XS)
            .style(styles::button::overlay(
                palette::LIKE_500,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(Message::LikePressed);
        row = row.push(labeled(like, i18n.tr("action-like")));
    }
    if options.enable_download {
        row = row.push(labeled(
            overlay_button(icons::download(), sizing::ICON_SM, Message::DownloadPressed),
            i18n.tr("action-download"),
        ));
    }
    if options.enable_share {
        row = row.push(labeled(
            overlay_button(icons::share(), sizing::ICON_SM, Message::SharePressed),
            i18n.tr("action-share"),
        ));
    }
    if options.enable_fullscreen {
        row = row.push(labeled(
            overlay_button(icons::expand(), sizing::ICON_SM, Message::OpenFullscreen),
            i18n.tr("control-expand"),
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}

/// Play/pause toggle for the autoplay timer, pinned bottom-left.
pub fn autoplay_toggle<'a>(playing: bool, i18n: &I18n) -> Element<'a, Message> {
    let (icon, label) = if playing {
        (icons::pause(), i18n.tr("control-pause"))
    } else {
        (icons::play(), i18n.tr("control-play"))
    };

    let toggle = labeled(
        overlay_button(icon, sizing::ICON_SM, Message::ToggleAutoPlay),
        label,
    );

    Container::new(toggle)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}
