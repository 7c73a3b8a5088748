// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! This module contains playback value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod newtypes;
pub mod status;

// Re-export commonly used types
pub use newtypes::{
    rate_bounds, skip_step_bounds, volume_bounds, PlaybackRate, SkipStep, Volume,
};
pub use status::{PendingOperation, PlaybackStatus};
