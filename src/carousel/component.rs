// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state, update logic, and subscriptions.
//!
//! The component owns its view-state and returns an [`Effect`] from every
//! update so the host decides what user feedback or delegation happens;
//! asynchronous work (media loading, downloads) comes back through
//! [`Task`]s that resolve into further messages.

use crate::carousel::options::{ClickBehavior, Options};
use crate::carousel::state::{Mode, NavState};
use crate::carousel::swipe::{SwipeAction, SwipeTracker};
use crate::carousel::view;
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::{loader, ImageData, MediaCache, MediaItem};
use crate::platform::{self, ShareBackend, ShareOutcome, SystemShare};
use crate::ui::notifications::Notification;
use iced::{event, keyboard, mouse, time, touch, window, Element, Point, Subscription, Task};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Messages consumed by the carousel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance to the next item (wraps).
    Next,
    /// Step back to the previous item (wraps).
    Previous,
    /// Jump directly to an indicator dot's index.
    JumpTo(usize),
    /// Flip the autoplay flag.
    ToggleAutoPlay,
    /// The pointer was released over the media surface, ending either a
    /// tap or a swipe. Which one it was is decided here, at release.
    MediaReleased,
    /// The expand button was pressed.
    OpenFullscreen,
    /// The close control was pressed.
    CloseFullscreen,
    /// The like action was pressed.
    LikePressed,
    /// The download action was pressed.
    DownloadPressed,
    /// The share action was pressed.
    SharePressed,
    /// Autoplay timer fired.
    AutoPlayTick,
    /// Pointer button or finger went down; a gesture may be starting.
    PointerPressed(Option<Point>),
    /// Pointer or finger moved.
    PointerMoved(Point),
    /// Pointer button or finger was released outside the media surface,
    /// completing any gesture.
    PointerReleased,
    /// The gesture was interrupted (finger lost); no navigation.
    PointerCancelled,
    /// The pointer entered the media area.
    HoverEntered,
    /// The pointer left the media area.
    HoverExited,
    /// Key pressed while the fullscreen subscription is active.
    KeyPressed(keyboard::Key),
    /// An asynchronous media load finished.
    MediaLoaded {
        id: String,
        result: Result<ImageData, Error>,
    },
    /// The download flow finished. `Ok(None)` means the user dismissed the
    /// save dialog.
    DownloadFinished(Result<Option<PathBuf>, Error>),
}

/// Side effects the host should perform after an update.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// The media was pressed and `ClickBehavior::Delegate` is set; the
    /// host decides what the press means.
    ImageClicked { index: usize },
    /// The like action was pressed; the host owns like state.
    Liked { index: usize },
    /// Show a toast to the user.
    Notify(Notification),
}

/// Carousel component state.
pub struct State {
    items: Vec<MediaItem>,
    options: Options,
    nav: NavState,
    swipe: SwipeTracker,
    cache: MediaCache,
    failed: HashSet<String>,
    pending: HashSet<String>,
    hovered: bool,
    cursor_x: Option<f32>,
    share_backend: Box<dyn ShareBackend>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("len", &self.items.len())
            .field("nav", &self.nav)
            .finish()
    }
}

impl State {
    /// Creates a carousel over `items` and starts loading the initial
    /// window of media.
    pub fn new(items: Vec<MediaItem>, options: Options) -> (Self, Task<Message>) {
        Self::with_share_backend(items, options, Box::new(SystemShare))
    }

    /// Creates a carousel with an injected share backend. Tests use this
    /// to exercise every share outcome.
    pub fn with_share_backend(
        items: Vec<MediaItem>,
        options: Options,
        share_backend: Box<dyn ShareBackend>,
    ) -> (Self, Task<Message>) {
        let nav = NavState::new(items.len(), options.initial_index, options.auto_play);
        let mut state = Self {
            items,
            options,
            nav,
            swipe: SwipeTracker::default(),
            cache: MediaCache::new(),
            failed: HashSet::new(),
            pending: HashSet::new(),
            hovered: false,
            cursor_x: None,
            share_backend,
        };
        let task = state.load_around();
        (state, task)
    }

    /// The immutable item sequence.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.nav.current_index()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.nav.is_fullscreen()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.nav.is_playing()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.nav.mode()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The item at the current index, when the sequence is non-empty.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.items.get(self.nav.current_index())
    }

    /// Decoded media for an item, when its load has completed.
    #[must_use]
    pub fn media_for(&self, id: &str) -> Option<&ImageData> {
        self.cache.peek(id)
    }

    /// Whether an item's load failed; failed items render as a hidden
    /// element rather than a broken-image placeholder.
    #[must_use]
    pub fn is_failed(&self, id: &str) -> bool {
        self.failed.contains(id)
    }

    /// Handles a message, returning the host-visible effect and any
    /// follow-up task.
    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Next => {
                self.nav.next();
                (Effect::None, self.load_around())
            }
            Message::Previous => {
                self.nav.previous();
                (Effect::None, self.load_around())
            }
            Message::JumpTo(index) => {
                self.nav.jump_to(index);
                (Effect::None, self.load_around())
            }
            Message::ToggleAutoPlay => {
                self.nav.toggle_playing();
                (Effect::None, Task::none())
            }
            Message::MediaReleased => self.handle_media_released(),
            Message::OpenFullscreen => {
                if self.options.enable_fullscreen && !self.nav.is_empty() {
                    self.nav.enter_fullscreen();
                }
                (Effect::None, Task::none())
            }
            Message::CloseFullscreen => {
                self.nav.exit_fullscreen();
                (Effect::None, Task::none())
            }
            Message::LikePressed => (
                Effect::Liked {
                    index: self.nav.current_index(),
                },
                Task::none(),
            ),
            Message::DownloadPressed => self.handle_download_pressed(),
            Message::SharePressed => self.handle_share_pressed(),
            Message::AutoPlayTick => {
                if self.nav.autoplay_active() {
                    self.nav.next();
                    (Effect::None, self.load_around())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::PointerPressed(position) => {
                let x = position.map(|p| p.x).or(self.cursor_x);
                if let Some(x) = x {
                    self.swipe.begin(x);
                }
                (Effect::None, Task::none())
            }
            Message::PointerMoved(position) => {
                self.cursor_x = Some(position.x);
                self.swipe.update(position.x);
                (Effect::None, Task::none())
            }
            Message::PointerReleased => match self.swipe.finish() {
                Some(action) => {
                    self.apply_swipe(action);
                    (Effect::None, self.load_around())
                }
                None => (Effect::None, Task::none()),
            },
            Message::PointerCancelled => {
                self.swipe.cancel();
                (Effect::None, Task::none())
            }
            Message::HoverEntered => {
                self.hovered = true;
                (Effect::None, Task::none())
            }
            Message::HoverExited => {
                self.hovered = false;
                (Effect::None, Task::none())
            }
            Message::KeyPressed(key) => self.handle_key(key),
            Message::MediaLoaded { id, result } => {
                self.pending.remove(&id);
                match result {
                    Ok(data) => {
                        self.failed.remove(&id);
                        self.cache.insert(id, data);
                    }
                    Err(_) => {
                        // Hidden element, no toast, no retry.
                        self.failed.insert(id);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::DownloadFinished(result) => match result {
                Ok(Some(path)) => {
                    let filename = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    (
                        Effect::Notify(
                            Notification::success("notification-download-complete")
                                .with_arg("filename", filename),
                        ),
                        Task::none(),
                    )
                }
                // Save dialog dismissed.
                Ok(None) => (Effect::None, Task::none()),
                Err(_) => (
                    Effect::Notify(Notification::error("notification-download-failed")),
                    Task::none(),
                ),
            },
        }
    }

    /// Subscriptions derived from the current mode: the autoplay timer
    /// only exists while playing, the keyboard listener only while
    /// fullscreen, and pointer routing only while a gesture can matter.
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.nav.autoplay_active() {
            subscriptions
                .push(time::every(self.options.auto_play_interval).map(|_| Message::AutoPlayTick));
        }

        if self.nav.is_fullscreen() {
            subscriptions.push(event::listen_with(fullscreen_key_event));
        }

        if self.nav.len() > 1 {
            subscriptions.push(event::listen_with(pointer_event));
        }

        Subscription::batch(subscriptions)
    }

    /// Renders the carousel.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(self, i18n)
    }

    /// A release over the media ends the in-flight gesture. When the
    /// gesture crossed the swipe threshold it navigates; otherwise it was
    /// a tap and the click behavior applies. The two are mutually
    /// exclusive, so one gesture never both navigates and opens
    /// fullscreen.
    fn handle_media_released(&mut self) -> (Effect, Task<Message>) {
        if let Some(action) = self.swipe.finish() {
            self.apply_swipe(action);
            return (Effect::None, self.load_around());
        }

        match self.options.click_behavior {
            ClickBehavior::Delegate => (
                Effect::ImageClicked {
                    index: self.nav.current_index(),
                },
                Task::none(),
            ),
            ClickBehavior::OpenFullscreen => {
                if self.options.enable_fullscreen && !self.nav.is_empty() {
                    self.nav.enter_fullscreen();
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn apply_swipe(&mut self, action: SwipeAction) {
        match action {
            SwipeAction::Next => self.nav.next(),
            SwipeAction::Previous => self.nav.previous(),
        }
    }

    fn handle_download_pressed(&mut self) -> (Effect, Task<Message>) {
        let Some(item) = self.current_item().cloned() else {
            return (Effect::None, Task::none());
        };
        (
            Effect::None,
            Task::perform(platform::save_item(item), Message::DownloadFinished),
        )
    }

    fn handle_share_pressed(&mut self) -> (Effect, Task<Message>) {
        let Some(item) = self.current_item() else {
            return (Effect::None, Task::none());
        };
        let title = item.caption.clone().unwrap_or_default();
        let url = item.url.clone();

        match self.share_backend.share(&title, &url) {
            ShareOutcome::Shared => (
                Effect::Notify(Notification::success("notification-share-complete")),
                Task::none(),
            ),
            // User backed out; not an error.
            ShareOutcome::Cancelled => (Effect::None, Task::none()),
            ShareOutcome::Unsupported => (
                Effect::Notify(Notification::success("notification-share-copied")),
                iced::clipboard::write(url),
            ),
        }
    }

    fn handle_key(&mut self, key: keyboard::Key) -> (Effect, Task<Message>) {
        use keyboard::key::Named;

        // The subscription only exists while fullscreen, but a queued key
        // message could arrive just after closing; drop it.
        if !self.nav.is_fullscreen() {
            return (Effect::None, Task::none());
        }

        match key {
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.nav.previous();
                (Effect::None, self.load_around())
            }
            keyboard::Key::Named(Named::ArrowRight) => {
                self.nav.next();
                (Effect::None, self.load_around())
            }
            keyboard::Key::Named(Named::Escape) => {
                self.nav.exit_fullscreen();
                (Effect::None, Task::none())
            }
            keyboard::Key::Named(Named::Space) => {
                self.nav.toggle_playing();
                (Effect::None, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    /// Starts loads for the current item and its neighbors, skipping
    /// anything cached, failed, or already in flight.
    fn load_around(&mut self) -> Task<Message> {
        if self.items.is_empty() {
            return Task::none();
        }

        let len = self.items.len();
        let current = self.nav.current_index();
        let mut wanted = vec![current];
        if len > 1 {
            wanted.push((current + 1) % len);
            wanted.push((current + len - 1) % len);
        }

        let mut tasks = Vec::new();
        for index in wanted {
            let Some(item) = self.items.get(index) else {
                continue;
            };
            let id = item.id.clone();
            if self.cache.contains(&id) || self.failed.contains(&id) || self.pending.contains(&id) {
                continue;
            }
            self.pending.insert(id.clone());
            let item = item.clone();
            tasks.push(Task::perform(
                async move {
                    let result = loader::load_media(&item).await;
                    (item.id, result)
                },
                |(id, result)| Message::MediaLoaded { id, result },
            ));
        }

        Task::batch(tasks)
    }
}

/// Keyboard routing while the fullscreen viewer is open.
fn fullscreen_key_event(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    use keyboard::key::Named;

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            keyboard::Key::Named(
                Named::ArrowLeft | Named::ArrowRight | Named::Escape | Named::Space,
            ) => Some(Message::KeyPressed(key)),
            _ => None,
        },
        _ => None,
    }
}

/// Routes raw pointer events into swipe-gesture messages.
///
/// Events captured by widgets are left alone: button presses stay button
/// presses, and a release over the media surface reaches the component as
/// `MediaReleased` through the view's mouse area instead. Presses and
/// moves over the media are not captured by anything, so they arrive here
/// and feed the tracker.
fn pointer_event(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    match event {
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed(None))
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerPressed(Some(position)))
        }
        event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::PointerReleased),
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::PointerCancelled),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::options::AspectRatio;

    #[derive(Debug)]
    struct FakeShare(ShareOutcome);

    impl ShareBackend for FakeShare {
        fn share(&self, _title: &str, _url: &str) -> ShareOutcome {
            self.0
        }
    }

    fn items(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem::new(format!("item-{i}"), format!("/tmp/missing-{i}.jpg")))
            .collect()
    }

    fn carousel(n: usize) -> State {
        State::new(items(n), Options::default()).0
    }

    fn carousel_with(n: usize, options: Options) -> State {
        State::new(items(n), options).0
    }

    #[test]
    fn next_messages_cycle_back_to_start() {
        let mut state = carousel(3);
        for _ in 0..3 {
            let _ = state.update(Message::Next);
        }
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut state = carousel(4);
        let _ = state.update(Message::Previous);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn jump_to_sets_index_directly() {
        let mut state = carousel(5);
        let _ = state.update(Message::JumpTo(3));
        assert_eq!(state.current_index(), 3);
        let _ = state.update(Message::JumpTo(1));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn swipe_left_past_threshold_advances_once() {
        let mut state = carousel(3);
        let _ = state.update(Message::PointerPressed(Some(Point::new(300.0, 100.0))));
        let _ = state.update(Message::PointerMoved(Point::new(200.0, 100.0)));
        let _ = state.update(Message::PointerReleased);
        assert_eq!(state.current_index(), 1);

        // The release completed the gesture; another release is inert.
        let _ = state.update(Message::PointerReleased);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn swipe_right_past_threshold_steps_back() {
        let mut state = carousel(3);
        let _ = state.update(Message::PointerPressed(Some(Point::new(100.0, 100.0))));
        let _ = state.update(Message::PointerMoved(Point::new(200.0, 100.0)));
        let _ = state.update(Message::PointerReleased);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn swipe_inside_dead_zone_does_not_navigate() {
        let mut state = carousel(3);
        let _ = state.update(Message::PointerPressed(Some(Point::new(200.0, 100.0))));
        let _ = state.update(Message::PointerMoved(Point::new(170.0, 100.0)));
        let _ = state.update(Message::PointerReleased);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn mouse_gesture_uses_last_cursor_position() {
        let mut state = carousel(3);
        let _ = state.update(Message::PointerMoved(Point::new(300.0, 100.0)));
        let _ = state.update(Message::PointerPressed(None));
        let _ = state.update(Message::PointerMoved(Point::new(180.0, 100.0)));
        let _ = state.update(Message::PointerReleased);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn tap_on_media_opens_fullscreen_by_default() {
        let mut state = carousel(3);
        let _ = state.update(Message::PointerPressed(Some(Point::new(200.0, 100.0))));
        let _ = state.update(Message::MediaReleased);
        assert!(state.is_fullscreen());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn tap_is_delegated_when_configured() {
        let mut state = carousel_with(
            3,
            Options {
                click_behavior: ClickBehavior::Delegate,
                ..Options::default()
            },
        );
        let _ = state.update(Message::PointerPressed(Some(Point::new(200.0, 100.0))));
        let (effect, _) = state.update(Message::MediaReleased);
        assert!(matches!(effect, Effect::ImageClicked { index: 0 }));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn drag_released_on_media_navigates_without_opening_fullscreen() {
        let mut state = carousel(3);
        let _ = state.update(Message::PointerPressed(Some(Point::new(300.0, 100.0))));
        let _ = state.update(Message::PointerMoved(Point::new(100.0, 100.0)));
        let _ = state.update(Message::MediaReleased);
        assert_eq!(state.current_index(), 1);
        assert!(!state.is_fullscreen());

        // The gesture is consumed; a plain tap afterwards is a click again.
        let _ = state.update(Message::PointerPressed(Some(Point::new(300.0, 100.0))));
        let _ = state.update(Message::MediaReleased);
        assert_eq!(state.current_index(), 1);
        assert!(state.is_fullscreen());
    }

    #[test]
    fn lost_finger_cancels_gesture_without_navigation() {
        let mut state = carousel(3);
        let _ = state.update(Message::PointerPressed(Some(Point::new(300.0, 100.0))));
        let _ = state.update(Message::PointerMoved(Point::new(100.0, 100.0)));
        let _ = state.update(Message::PointerCancelled);
        let _ = state.update(Message::PointerReleased);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn fullscreen_disabled_ignores_media_tap() {
        let mut state = carousel_with(
            3,
            Options {
                enable_fullscreen: false,
                ..Options::default()
            },
        );
        let _ = state.update(Message::MediaReleased);
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn uncaptured_pointer_events_feed_the_tracker() {
        let window = window::Id::unique();
        let press = event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        assert!(matches!(
            pointer_event(press.clone(), event::Status::Ignored, window),
            Some(Message::PointerPressed(None))
        ));
        // Captured means a widget owns the event (a button, or the media
        // area's own release handler); the tracker must not see it.
        assert!(pointer_event(press, event::Status::Captured, window).is_none());
    }

    #[test]
    fn keyboard_only_acts_in_fullscreen() {
        use keyboard::key::Named;

        let mut state = carousel(3);
        let _ = state.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)));
        assert_eq!(state.current_index(), 0);

        let _ = state.update(Message::OpenFullscreen);
        let _ = state.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)));
        assert_eq!(state.current_index(), 1);

        let _ = state.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        assert_eq!(state.current_index(), 0);

        let _ = state.update(Message::KeyPressed(keyboard::Key::Named(Named::Escape)));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn space_toggles_playing_in_fullscreen() {
        use keyboard::key::Named;

        let mut state = carousel(3);
        let _ = state.update(Message::OpenFullscreen);
        assert_eq!(state.mode(), Mode::Fullscreen);

        let _ = state.update(Message::KeyPressed(keyboard::Key::Named(Named::Space)));
        assert_eq!(state.mode(), Mode::FullscreenPlaying);

        let _ = state.update(Message::KeyPressed(keyboard::Key::Named(Named::Escape)));
        assert_eq!(state.mode(), Mode::Playing);
    }

    #[test]
    fn autoplay_tick_advances_only_while_playing() {
        let mut state = carousel_with(
            3,
            Options {
                auto_play: true,
                ..Options::default()
            },
        );
        assert!(state.is_playing());

        let _ = state.update(Message::AutoPlayTick);
        assert_eq!(state.current_index(), 1);

        let _ = state.update(Message::ToggleAutoPlay);
        let _ = state.update(Message::AutoPlayTick);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn like_press_surfaces_index_to_host() {
        let mut state = carousel(3);
        let _ = state.update(Message::JumpTo(2));
        let (effect, _) = state.update(Message::LikePressed);
        assert!(matches!(effect, Effect::Liked { index: 2 }));
    }

    #[test]
    fn failed_load_marks_item_hidden_without_effect() {
        let mut state = carousel(2);
        let (effect, _) = state.update(Message::MediaLoaded {
            id: "item-0".to_string(),
            result: Err(Error::Decode("broken".to_string())),
        });
        assert!(matches!(effect, Effect::None));
        assert!(state.is_failed("item-0"));
    }

    #[test]
    fn successful_load_populates_cache() {
        let mut state = carousel(2);
        let _ = state.update(Message::MediaLoaded {
            id: "item-0".to_string(),
            result: Ok(ImageData::from_rgba(1, 1, vec![255; 4])),
        });
        assert!(state.media_for("item-0").is_some());
        assert!(!state.is_failed("item-0"));
    }

    #[test]
    fn download_failure_notifies_and_preserves_state() {
        let mut state = carousel(3);
        let _ = state.update(Message::JumpTo(1));
        let before_index = state.current_index();
        let before_fullscreen = state.is_fullscreen();

        let (effect, _) =
            state.update(Message::DownloadFinished(Err(Error::Http("503".into()))));

        match effect {
            Effect::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-download-failed");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert_eq!(state.current_index(), before_index);
        assert_eq!(state.is_fullscreen(), before_fullscreen);
    }

    #[test]
    fn dismissed_save_dialog_is_silent() {
        let mut state = carousel(3);
        let (effect, _) = state.update(Message::DownloadFinished(Ok(None)));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn share_unsupported_falls_back_to_clipboard_toast() {
        let (mut state, _) = State::with_share_backend(
            items(3),
            Options {
                enable_share: true,
                ..Options::default()
            },
            Box::new(FakeShare(ShareOutcome::Unsupported)),
        );
        let (effect, _) = state.update(Message::SharePressed);
        match effect {
            Effect::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-share-copied");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn share_cancellation_is_silent() {
        let (mut state, _) = State::with_share_backend(
            items(3),
            Options::default(),
            Box::new(FakeShare(ShareOutcome::Cancelled)),
        );
        let (effect, _) = state.update(Message::SharePressed);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn share_success_confirms() {
        let (mut state, _) = State::with_share_backend(
            items(3),
            Options::default(),
            Box::new(FakeShare(ShareOutcome::Shared)),
        );
        let (effect, _) = state.update(Message::SharePressed);
        match effect {
            Effect::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-share-complete");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut state = carousel(0);
        let _ = state.update(Message::Next);
        let _ = state.update(Message::MediaReleased);
        let (effect, _) = state.update(Message::SharePressed);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_fullscreen());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn initial_index_is_respected() {
        let state = carousel_with(
            4,
            Options {
                initial_index: 2,
                aspect_ratio: AspectRatio::Landscape,
                ..Options::default()
            },
        );
        assert_eq!(state.current_index(), 2);
    }
}
