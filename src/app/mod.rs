// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the carousel component to configuration,
//! localization, and toast notifications, and translates component
//! effects into host behavior.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::carousel::{self, Effect, Options};
use crate::config;
use crate::i18n::I18n;
use crate::media::Gallery;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashSet;
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    carousel: carousel::State,
    gallery_title: Option<String>,
    /// Indices the user has liked. Like state belongs to the host, not
    /// the carousel.
    liked: HashSet<usize>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_title", &self.gallery_title)
            .field("carousel", &self.carousel)
            .finish()
    }
}

impl App {
    /// Builds the application from resolved flags: loads the config and
    /// gallery manifest, then hands the item sequence to the carousel.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let mut notifications = notifications::Manager::new();
        let gallery = match &flags.gallery_path {
            Some(path) => match Gallery::load_from_path(path) {
                Ok(gallery) => gallery,
                Err(_) => {
                    notifications.push(Notification::error("notification-gallery-load-failed"));
                    Gallery::default()
                }
            },
            None => Gallery::default(),
        };

        let options = Options {
            auto_play: config.autoplay.unwrap_or(false),
            auto_play_interval: config.autoplay_interval(),
            enable_download: true,
            enable_share: true,
            enable_like: true,
            ..Options::default()
        };

        let (carousel, task) = carousel::State::new(gallery.items, options);

        (
            Self {
                i18n,
                carousel,
                gallery_title: gallery.title,
                liked: HashSet::new(),
                notifications,
            },
            task.map(Message::Carousel),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(inner) => {
                let (effect, task) = self.carousel.update(inner);
                self.apply_effect(effect);
                task.map(Message::Carousel)
            }
            Message::Notification(inner) => {
                self.notifications.handle_message(&inner);
                Task::none()
            }
            Message::Tick => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            // The demo host keeps the default open-fullscreen behavior,
            // so delegated clicks are not expected here.
            Effect::ImageClicked { .. } => {}
            Effect::Liked { index } => {
                if self.liked.insert(index) {
                    self.notifications
                        .push(Notification::success("notification-like-registered"));
                } else {
                    self.liked.remove(&index);
                }
            }
            Effect::Notify(notification) => self.notifications.push(notification),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn title(&self) -> String {
        match &self.gallery_title {
            Some(title) => format!("{} - {}", title, self.i18n.tr("app-title")),
            None => self.i18n.tr("app-title"),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot, so the one-shot flags go through a
    // RefCell<Option<_>>.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
