// SPDX-License-Identifier: MPL-2.0
//! Media primitive port definition.
//!
//! This module defines the [`MediaElement`] trait: the platform playback
//! primitive (an HTML media element, a native player, a test fake) that the
//! playback controller drives. It is the engine's only environment
//! dependency.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget; their outcome comes back as a
//!   [`NativeEvent`] delivered to the adapter's callback entry point
//! - `play` and `seek` carry an [`OpTicket`] the primitive must echo in the
//!   matching resolution event
//! - Lifecycle callbacks carry the [`SourceId`] they were registered for, so
//!   a late callback from a torn-down source is recognizable

use crate::domain::error::NativeErrorCause;
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifies one loaded source (its "generation").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SourceId(u64);

impl SourceId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier of the following generation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "src#{}", self.0)
    }
}

/// Identifies one native play or seek request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpTicket {
    /// Source the request was issued against.
    pub source: SourceId,
    /// Per-adapter sequence number.
    pub seq: u64,
}

impl fmt::Display for OpTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/op#{}", self.source, self.seq)
    }
}

// =============================================================================
// MediaElement Trait
// =============================================================================

/// Port for the platform media primitive.
///
/// # Ownership
///
/// Exactly one playback controller owns the primitive. No other component
/// calls it directly.
///
/// # Lifecycle
///
/// 1. `load()` a source; the primitive reports `LoadStart`, `LoadedMetadata`
///    and `CanPlay` (or `Error`)
/// 2. `play()` starts asynchronously; the primitive reports `PlayResolved`
///    or `PlayRejected` for the same ticket
/// 3. `seek()` reports `Seeked` for the same ticket
/// 4. `pause()` and the attribute setters take effect immediately
pub trait MediaElement {
    /// Starts loading `url` as generation `source`, replacing any current source.
    fn load(&mut self, source: SourceId, url: &str);

    /// Tears down the current source.
    fn unload(&mut self);

    /// Starts playback asynchronously.
    fn play(&mut self, ticket: OpTicket);

    /// Pauses playback immediately.
    fn pause(&mut self);

    /// Seeks asynchronously to `position_secs`.
    fn seek(&mut self, ticket: OpTicket, position_secs: f64);

    /// Sets the output volume (0.0 to 1.0).
    fn set_volume(&mut self, volume: f32);

    /// Mutes or unmutes output.
    fn set_muted(&mut self, muted: bool);

    /// Sets the playback rate.
    fn set_playback_rate(&mut self, rate: f64);
}

// =============================================================================
// NativeEvent
// =============================================================================

/// A raw callback from the platform media primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeEvent {
    /// The primitive started (or restarted) fetching the source.
    LoadStart { source: SourceId },
    /// Duration and dimensions are known.
    LoadedMetadata { source: SourceId, duration_secs: f64 },
    /// Enough data is buffered to start playing.
    CanPlay { source: SourceId },
    /// Playback position changed.
    TimeUpdate { source: SourceId, position_secs: f64 },
    /// The primitive started playing (for any reason).
    Played { source: SourceId },
    /// The primitive paused (for any reason).
    Paused { source: SourceId },
    /// Playback reached the end of the media.
    Ended { source: SourceId },
    /// The source failed.
    Error {
        source: SourceId,
        cause: NativeErrorCause,
    },
    /// A play request started successfully.
    PlayResolved { ticket: OpTicket },
    /// A play request failed or was aborted.
    PlayRejected {
        ticket: OpTicket,
        cause: NativeErrorCause,
    },
    /// A seek request completed.
    Seeked { ticket: OpTicket },
}

impl NativeEvent {
    /// Returns the source generation the callback belongs to.
    #[must_use]
    pub fn source(&self) -> SourceId {
        match self {
            Self::LoadStart { source }
            | Self::LoadedMetadata { source, .. }
            | Self::CanPlay { source }
            | Self::TimeUpdate { source, .. }
            | Self::Played { source }
            | Self::Paused { source }
            | Self::Ended { source }
            | Self::Error { source, .. } => *source,
            Self::PlayResolved { ticket }
            | Self::PlayRejected { ticket, .. }
            | Self::Seeked { ticket } => ticket.source,
        }
    }
}
