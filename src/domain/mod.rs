// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback types with no I/O and no runtime.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `thiserror` derives it depends on `std` only, which keeps it
//! testable without a media primitive or an async runtime.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`LogCapacity`](diagnostics::LogCapacity))
//! - [`error`]: Playback error taxonomy ([`PlaybackError`](error::PlaybackError))
//! - [`playback`]: Playback types ([`PlaybackStatus`](playback::PlaybackStatus),
//!   [`Volume`](playback::Volume), [`PlaybackRate`](playback::PlaybackRate))
//! - [`timeline`]: Timeline types ([`EventTag`](timeline::EventTag),
//!   [`HighlightWindow`](timeline::HighlightWindow))

pub mod diagnostics;
pub mod error;
pub mod playback;
pub mod timeline;
