// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that platform adapters implement.
//! These traits use only domain types, ensuring the playback engine remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media`]: The platform media primitive and its raw callbacks
//! - [`resolver`]: URL classification into playable / embed-only / invalid
//! - [`viewport`]: Fullscreen control
//!
//! # Design Notes
//!
//! - Commands never block; asynchronous results come back as callbacks
//! - No `async fn`: the controller is a synchronous state machine and the
//!   session task decides how callbacks are scheduled

pub mod media;
pub mod resolver;
pub mod viewport;

pub use media::{MediaElement, NativeEvent, OpTicket, SourceId};
pub use resolver::{DirectUrlResolver, Resolution, SourceResolver};
pub use viewport::{FullscreenPort, ViewportError};
