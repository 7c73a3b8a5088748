// SPDX-License-Identifier: MPL-2.0
//! Viewport management.
//!
//! Fullscreen is independent of playback: toggling it never touches the
//! controller and a controller failure never leaves fullscreen.

mod fullscreen;

pub use fullscreen::FullscreenManager;
