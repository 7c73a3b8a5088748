// SPDX-License-Identifier: MPL-2.0
//! `scout_lens` is the playback and timeline synchronization engine behind a
//! match-footage review player.
//!
//! It drives a platform media element through play, pause, seek, volume and
//! rate changes while user input, keyboard shortcuts and asynchronous media
//! callbacks arrive in any order, and keeps the set of tagged match events
//! (goals, tackles, passes, ...) that overlap the playback position.
//!
//! # Layout
//!
//! - [`domain`]: pure value types (status, newtypes, tags, errors)
//! - [`application`]: ports implemented by the embedding platform
//! - [`playback`]: controller state machine, media adapter and Tokio session
//! - [`timeline`]: active-event computation
//! - [`input`]: keyboard shortcut dispatch
//! - [`viewport`]: fullscreen management
//! - [`diagnostics`]: bounded activity log with JSON export
//! - [`config`]: persisted player settings
//! - [`infrastructure`]: tag snapshot reader
//! - [`testing`]: in-memory platform fakes

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod input;
pub mod playback;
pub mod testing;
pub mod timeline;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
