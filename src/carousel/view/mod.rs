// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering, split by presentation: the inline media box and
//! the fullscreen viewer, with shared overlay chrome.
//!
//! Rendering follows the item count: an empty sequence shows a
//! placeholder, a single item shows the media without navigation chrome,
//! and multiple items add navigation, the counter, and indicator dots.

mod chrome;
mod fullscreen;

use crate::carousel::component::{Message, State};
use crate::i18n::I18n;
use crate::media::{MediaItem, MediaKind};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{mouse_area, Column, Container, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the carousel in whichever presentation its state calls for.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    if state.is_fullscreen() {
        fullscreen::view(state, i18n)
    } else {
        inline(state, i18n)
    }
}

fn inline<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let width = sizing::CAROUSEL_WIDTH;
    let height = state.options().aspect_ratio.height_for_width(width);

    if state.items().is_empty() {
        return empty_placeholder(i18n, width, height);
    }

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(media_box(state, i18n, width, height));

    let len = state.items().len();
    if len > 1 && state.options().show_indicators {
        column = column.push(chrome::dots(len, state.current_index()));
    }

    column.into()
}

/// The stacked media surface: the media itself at the bottom, overlay
/// chrome layered above it.
fn media_box<'a>(state: &'a State, i18n: &'a I18n, width: f32, height: f32) -> Element<'a, Message> {
    let options = state.options();
    let len = state.items().len();
    // Non-empty by the time this is called.
    let item = &state.items()[state.current_index()];

    let mut layers = Stack::new()
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .push(
            Container::new(media_element(state, item))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::media_box),
        );

    if item.kind == MediaKind::Video {
        layers = layers.push(chrome::video_badge(i18n));
    }
    if len > 1 {
        layers = layers.push(chrome::counter(state.current_index(), len));
    }
    if let Some(caption) = item.caption.as_deref() {
        layers = layers.push(chrome::caption_strip(caption));
    }
    if len > 1 && options.show_controls {
        layers = layers.push(chrome::nav_row(i18n));
    }
    if options.auto_play && len > 1 {
        layers = layers.push(chrome::autoplay_toggle(state.is_playing(), i18n));
    }
    if state.is_hovered() {
        layers = layers.push(chrome::action_row(state, i18n));
    }

    // Only the release is claimed here: presses and moves pass through
    // uncaptured so the component's event subscription can track the
    // gesture, and the release decides tap versus swipe.
    mouse_area(layers)
        .on_release(Message::MediaReleased)
        .on_enter(Message::HoverEntered)
        .on_exit(Message::HoverExited)
        .into()
}

/// The media itself. A loaded item renders its decoded image; a failed
/// item renders nothing, leaving the neutral box; anything else is still
/// loading and also renders the neutral box.
pub(super) fn media_element<'a>(state: &'a State, item: &'a MediaItem) -> Element<'a, Message> {
    if state.is_failed(&item.id) {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    }

    match state.media_for(&item.id) {
        Some(data) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    }
}

/// Placeholder shown when the sequence has no items at all.
fn empty_placeholder<'a>(i18n: &I18n, width: f32, height: f32) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            icons::sized(icons::image(), sizing::ICON_XL)
                .style(styles::overlay::icon(palette::GRAY_200)),
        )
        .push(
            Text::new(i18n.tr("carousel-empty-title"))
                .size(typography::BODY)
                .color(palette::GRAY_200),
        )
        .push(
            Text::new(i18n.tr("carousel-empty-subtitle"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::media_box)
        .into()
}
