// SPDX-License-Identifier: MPL-2.0
//! Platform capabilities the carousel needs from its environment.
//!
//! Ambient facilities (sharing, save dialogs, the network) are reached
//! through this module rather than called ad hoc inside view or update
//! code, so the component can be exercised with fakes in tests.

pub mod download;
pub mod share;

pub use download::save_item;
pub use share::{ShareBackend, ShareOutcome, SystemShare};
