// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel;
use crate::ui::notifications;
use std::path::PathBuf;

/// Command-line flags resolved by `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override (`--lang fr`).
    pub lang: Option<String>,
    /// Path to a gallery manifest to open.
    pub gallery_path: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick,
}
