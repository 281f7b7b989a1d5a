// SPDX-License-Identifier: MPL-2.0
//! Share capability.
//!
//! A share request first asks the platform backend. When the platform has
//! no share surface (the usual case on desktop), the component falls back
//! to copying the item URL to the clipboard. A user cancelling a share is
//! not an error and produces no feedback.

/// Result of asking the platform to share a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform presented its share surface and the user completed it.
    Shared,
    /// The user dismissed the platform share surface.
    Cancelled,
    /// The platform has no share surface; the caller should fall back to
    /// the clipboard.
    Unsupported,
}

/// Platform share capability, injectable so tests can exercise every
/// outcome without a real platform surface.
pub trait ShareBackend: std::fmt::Debug {
    fn share(&self, title: &str, url: &str) -> ShareOutcome;
}

/// The real desktop backend. No desktop target currently exposes a native
/// share sheet to us, so this always reports `Unsupported` and the
/// clipboard fallback becomes the normal path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShare;

impl ShareBackend for SystemShare {
    fn share(&self, _title: &str, _url: &str) -> ShareOutcome {
        ShareOutcome::Unsupported
    }
}
