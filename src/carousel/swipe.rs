// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture tracking.
//!
//! Tracks the horizontal coordinate of one press-move-release gesture and
//! interprets it as a navigation command when the displacement exceeds the
//! dead-zone threshold. Taps and small jitters produce no navigation.

use crate::config::SWIPE_THRESHOLD;

/// Navigation command produced by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    /// Finger moved left: advance to the next item.
    Next,
    /// Finger moved right: step back to the previous item.
    Previous,
}

/// Transient horizontal coordinates of a single in-flight gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    latest_x: Option<f32>,
}

impl SwipeTracker {
    /// Records the press that begins a gesture.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.latest_x = Some(x);
    }

    /// Records the latest horizontal coordinate while the gesture is held.
    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.latest_x = Some(x);
        }
    }

    /// Completes the gesture, returning the navigation command it encodes.
    ///
    /// `distance = start - end`: beyond `SWIPE_THRESHOLD` to the left yields
    /// `Next`, beyond it to the right yields `Previous`, and anything inside
    /// the dead zone yields `None`. The tracker is reset either way.
    pub fn finish(&mut self) -> Option<SwipeAction> {
        let start = self.start_x.take()?;
        let end = self.latest_x.take()?;
        let distance = start - end;

        if distance > SWIPE_THRESHOLD {
            Some(SwipeAction::Next)
        } else if distance < -SWIPE_THRESHOLD {
            Some(SwipeAction::Previous)
        } else {
            None
        }
    }

    /// Abandons any in-flight gesture without producing a command. Used
    /// when the platform loses the touch point mid-gesture.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.latest_x = None;
    }
}
