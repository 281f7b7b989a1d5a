// SPDX-License-Identifier: MPL-2.0
//! Fullscreen viewer: the current item over a dimmed backdrop, with the
//! same overlay chrome as the inline box plus a close control. While
//! this presentation is active the keyboard subscription routes arrow,
//! escape, and space keys into navigation.

use super::chrome;
use crate::carousel::component::{Message, State};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{Column, Container, Stack};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let len = state.items().len();
    // Fullscreen cannot be entered with an empty sequence.
    let item = &state.items()[state.current_index()];

    // Contain instead of Cover: fullscreen shows the whole asset.
    let media: Element<'a, Message> = match state.media_for(&item.id) {
        Some(data) if !state.is_failed(&item.id) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => super::media_element(state, item),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(media)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL),
        );

    if len > 1 {
        layers = layers.push(chrome::counter(state.current_index(), len));
    }
    if let Some(caption) = item.caption.as_deref() {
        layers = layers.push(bottom_chrome(state, caption));
    }
    if len > 1 && state.options().show_controls {
        layers = layers.push(chrome::nav_row(i18n));
    }
    layers = layers.push(close_button(i18n));

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::fullscreen_backdrop)
        .into()
}

/// Caption and indicator dots stacked along the bottom edge.
fn bottom_chrome<'a>(state: &State, caption: &str) -> Element<'a, Message> {
    let len = state.items().len();
    let mut column = Column::new().spacing(spacing::XS).width(Length::Fill);

    if len > 1 && state.options().show_indicators {
        column = column.push(chrome::dots(len, state.current_index()));
    }
    column = column.push(chrome::caption_strip(caption));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn close_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let close = chrome::labeled(
        chrome::overlay_button(icons::cross(), sizing::ICON_MD, Message::CloseFullscreen),
        i18n.tr("control-close"),
    );

    Container::new(close)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::MD)
        .into()
}
