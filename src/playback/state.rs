// SPDX-License-Identifier: MPL-2.0
//! Canonical playback state.

use crate::domain::error::PlaybackError;
use crate::domain::playback::{PendingOperation, PlaybackRate, PlaybackStatus, Volume};

/// Snapshot of the player as the controller sees it.
///
/// Only the controller mutates this; everyone else reads a reference or a
/// clone of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    /// Position in seconds. Mid-seek this is the seek target.
    pub current_time: f64,
    /// Duration in seconds, 0 until metadata arrives.
    pub duration: f64,
    pub volume: Volume,
    pub muted: bool,
    pub playback_rate: PlaybackRate,
    pub pending: PendingOperation,
    pub last_error: Option<PlaybackError>,
}

impl PlaybackState {
    /// Clamps a seek target to the known media range.
    ///
    /// Returns `None` for `NaN`.
    #[must_use]
    pub fn clamp_position(&self, target_secs: f64) -> Option<f64> {
        if target_secs.is_nan() {
            return None;
        }
        Some(target_secs.clamp(0.0, self.duration.max(0.0)))
    }
}
