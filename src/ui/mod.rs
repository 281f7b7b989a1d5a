// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks: design tokens, icons, styles, notifications.

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
