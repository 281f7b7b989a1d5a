// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: the carousel centered in the window, the gallery
//! title above it, and the toast overlay stacked on top.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Toast;
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let carousel = app.carousel().view(&app.i18n).map(Message::Carousel);

    let content: Element<'_, Message> = if app.carousel().is_fullscreen() {
        // The fullscreen presentation fills the window on its own.
        carousel
    } else {
        let mut column = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center);

        if let Some(title) = app.gallery_title.as_deref() {
            column = column.push(Text::new(title.to_owned()).size(typography::TITLE_LG));
        }
        column = column.push(carousel);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XL)
            .into()
    };

    let toasts = Toast::view_overlay(app.notifications(), &app.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(toasts)
        .into()
}
