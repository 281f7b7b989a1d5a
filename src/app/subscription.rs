// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The carousel derives its own subscriptions from its mode (autoplay
//! timer, fullscreen keyboard, pointer routing); the host only adds a
//! coarse tick while toasts are on screen so auto-dismiss timers fire.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Interval for checking toast auto-dismiss deadlines.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![app.carousel().subscription().map(Message::Carousel)];

    if app.notifications().has_notifications() {
        subscriptions.push(time::every(NOTIFICATION_TICK).map(|_| Message::Tick));
    }

    Subscription::batch(subscriptions)
}
