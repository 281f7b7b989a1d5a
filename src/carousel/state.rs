// SPDX-License-Identifier: MPL-2.0
//! Core carousel view-state: current index, fullscreen flag, autoplay flag.
//!
//! This is the single source of truth for where the carousel is in its
//! sequence. Navigation wraps in both directions; there is no end state
//! that disables a control.

/// Distinct modes the carousel can be in. Navigation is legal in every
/// mode; there is no terminal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Playing,
    Fullscreen,
    FullscreenPlaying,
}

/// Ephemeral, component-local navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    len: usize,
    current_index: usize,
    is_fullscreen: bool,
    is_playing: bool,
}

impl NavState {
    /// Creates state for a sequence of `len` items starting at
    /// `initial_index` (clamped into range) with autoplay set to
    /// `auto_play`.
    #[must_use]
    pub fn new(len: usize, initial_index: usize, auto_play: bool) -> Self {
        let current_index = if len == 0 {
            0
        } else {
            initial_index.min(len - 1)
        };
        Self {
            len,
            current_index,
            is_fullscreen: false,
            is_playing: auto_play && len > 1,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current mode of the state machine.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match (self.is_fullscreen, self.is_playing) {
            (false, false) => Mode::Idle,
            (false, true) => Mode::Playing,
            (true, false) => Mode::Fullscreen,
            (true, true) => Mode::FullscreenPlaying,
        }
    }

    /// Advances to the next index, wrapping past the end.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current_index = (self.current_index + 1) % self.len;
        }
    }

    /// Steps back to the previous index, wrapping past the start.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current_index = (self.current_index + self.len - 1) % self.len;
        }
    }

    /// Jumps directly to `index`. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.current_index = index;
        }
    }

    /// Opens the fullscreen viewer at the current index. The playing flag
    /// carries over, so `Playing` becomes `FullscreenPlaying`.
    pub fn enter_fullscreen(&mut self) {
        self.is_fullscreen = true;
    }

    /// Closes the fullscreen viewer, returning to the corresponding
    /// non-fullscreen mode.
    pub fn exit_fullscreen(&mut self) {
        self.is_fullscreen = false;
    }

    /// Flips the autoplay flag. Has no effect on sequences too short to
    /// navigate.
    pub fn toggle_playing(&mut self) {
        if self.len > 1 {
            self.is_playing = !self.is_playing;
        }
    }

    /// Whether the autoplay timer should currently be running.
    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.is_playing && self.len > 1
    }
}
