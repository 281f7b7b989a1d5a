// SPDX-License-Identifier: MPL-2.0
//! The image carousel component: navigation state, gesture tracking,
//! caller options, update logic, and rendering.

pub mod component;
pub mod options;
pub mod state;
pub mod swipe;
pub mod view;

pub use component::{Effect, Message, State};
pub use options::{AspectRatio, ClickBehavior, Options};
pub use state::{Mode, NavState};
pub use swipe::{SwipeAction, SwipeTracker};
