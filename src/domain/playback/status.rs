// SPDX-License-Identifier: MPL-2.0
//! Playback status and pending-operation types.

/// Lifecycle status of the current source.
///
/// Variants are declared in lifecycle order; [`PlaybackStatus::is_ready`]
/// is the `status >= Ready` check used by the controller guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No source loaded.
    #[default]
    Idle,
    /// A source is loading; metadata and can-play have not both arrived.
    Loading,
    /// Metadata is known and the media can play; playback never started.
    Ready,
    /// Media is playing.
    Playing,
    /// Media is paused.
    Paused,
    /// A seek is in flight or waiting behind an unresolved play.
    Seeking,
    /// The source failed. Terminal until the next load or retry.
    Errored,
}

impl PlaybackStatus {
    /// Returns true once the source reached Ready and has not failed.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(
            self,
            Self::Ready | Self::Playing | Self::Paused | Self::Seeking
        )
    }

    /// Returns true if the media is playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if a source is loading.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the source failed.
    #[must_use]
    pub fn is_errored(self) -> bool {
        matches!(self, Self::Errored)
    }

    /// Short lowercase name used in logs and diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Seeking => "seeking",
            Self::Errored => "errored",
        }
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single user intent the controller is waiting on.
///
/// At most one operation is pending at a time. `Pause` means a play-start is
/// still unresolved and a pause must follow it; `Seek` carries the newest
/// requested target (last write wins).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PendingOperation {
    /// Nothing pending.
    #[default]
    None,
    /// A play-start was issued and has not resolved.
    Play,
    /// A pause waits for the unresolved play-start.
    Pause,
    /// A seek to `target_secs` is in flight or queued.
    Seek {
        /// Clamped target position in seconds.
        target_secs: f64,
    },
}

impl PendingOperation {
    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the seek target if a seek is pending.
    #[must_use]
    pub fn seek_target(self) -> Option<f64> {
        match self {
            Self::Seek { target_secs } => Some(target_secs),
            _ => None,
        }
    }
}
