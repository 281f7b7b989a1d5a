// SPDX-License-Identifier: MPL-2.0
//! Media carousel for the NeaTrip travel app, built with Iced.
//!
//! The crate is organized around one reusable component and a thin host:
//! - [`carousel`]: navigation state, gestures, options, and rendering
//! - [`media`]: item model, gallery manifests, loading, and caching
//! - [`platform`]: download and share integration
//! - [`app`]: the hosting application wiring it all together

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod platform;
pub mod ui;

pub use error::{Error, Result};
