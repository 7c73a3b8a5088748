// SPDX-License-Identifier: MPL-2.0
//! Media element adapter.
//!
//! Owns the platform [`MediaElement`] and turns its raw callbacks into a
//! uniform [`MediaEvent`] feed:
//!
//! - every load gets a fresh [`SourceId`]; callbacks for any other source are
//!   dropped
//! - every native play/seek gets an [`OpTicket`]; resolutions for a ticket
//!   that is no longer outstanding are dropped
//! - `Ready` is emitted once, when both metadata and can-play arrived
//! - time updates repeating the last reported position are dropped

use crate::application::port::{MediaElement, NativeEvent, OpTicket, SourceId};
use crate::config::TIME_UPDATE_EPSILON_SECS;
use crate::domain::error::NativeErrorCause;

/// A normalized lifecycle event for the current source.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The primitive (re)started fetching; transient flags were reset.
    LoadStarted,
    /// Metadata and can-play both arrived.
    Ready { duration_secs: f64 },
    /// Playback position moved.
    TimeUpdate { position_secs: f64 },
    /// The primitive started playing on its own (media keys, autoplay).
    Played,
    /// The primitive paused on its own.
    Paused,
    /// End of media.
    Ended,
    /// The source failed.
    Failed(NativeErrorCause),
    /// The outstanding play request started.
    PlayResolved,
    /// The outstanding play request failed or was aborted.
    PlayRejected(NativeErrorCause),
    /// The outstanding seek completed.
    Seeked,
}

/// Wraps a [`MediaElement`] with generation and ticket bookkeeping.
#[derive(Debug)]
pub struct MediaAdapter<E> {
    element: E,
    /// Last generation handed out.
    generation: SourceId,
    /// Generation currently loaded, if any.
    current: Option<SourceId>,
    next_seq: u64,
    play_ticket: Option<OpTicket>,
    seek_ticket: Option<OpTicket>,
    has_metadata: bool,
    can_play: bool,
    ready_emitted: bool,
    duration_secs: f64,
    last_time: Option<f64>,
}

impl<E: MediaElement> MediaAdapter<E> {
    #[must_use]
    pub fn new(element: E) -> Self {
        Self {
            element,
            generation: SourceId::default(),
            current: None,
            next_seq: 0,
            play_ticket: None,
            seek_ticket: None,
            has_metadata: false,
            can_play: false,
            ready_emitted: false,
            duration_secs: 0.0,
            last_time: None,
        }
    }

    /// Tears down the current source and starts loading `url` under a new
    /// generation.
    pub fn load(&mut self, url: &str) -> SourceId {
        if self.current.is_some() {
            self.element.unload();
        }
        self.generation = self.generation.next();
        self.current = Some(self.generation);
        self.play_ticket = None;
        self.seek_ticket = None;
        self.reset_transient();
        self.element.load(self.generation, url);
        tracing::debug!(source = %self.generation, url, "loading source");
        self.generation
    }

    /// Tears down the current source. Later callbacks for it are dropped.
    pub fn unload(&mut self) {
        if let Some(source) = self.current.take() {
            self.element.unload();
            self.play_ticket = None;
            self.seek_ticket = None;
            self.reset_transient();
            tracing::debug!(%source, "source unloaded");
        }
    }

    /// Issues a native play and returns its ticket.
    pub fn play(&mut self) -> Option<OpTicket> {
        let ticket = self.ticket()?;
        self.play_ticket = Some(ticket);
        self.element.play(ticket);
        Some(ticket)
    }

    pub fn pause(&mut self) {
        if self.current.is_some() {
            self.element.pause();
        }
    }

    /// Issues a native seek and returns its ticket.
    ///
    /// The target becomes the reference for time-update deduplication.
    pub fn seek(&mut self, position_secs: f64) -> Option<OpTicket> {
        let ticket = self.ticket()?;
        self.seek_ticket = Some(ticket);
        self.last_time = Some(position_secs);
        self.element.seek(ticket, position_secs);
        Some(ticket)
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(volume);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        self.element.set_playback_rate(rate);
    }

    /// Generation currently loaded.
    #[must_use]
    pub fn source(&self) -> Option<SourceId> {
        self.current
    }

    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Normalizes one raw callback.
    ///
    /// Returns `None` when the callback is stale, duplicated or only
    /// contributes to a later event.
    pub fn accept(&mut self, event: NativeEvent) -> Option<MediaEvent> {
        let source = event.source();
        if self.current != Some(source) {
            tracing::debug!(%source, current = ?self.current, ?event, "dropping stale callback");
            return None;
        }

        match event {
            NativeEvent::LoadStart { .. } => {
                self.reset_transient();
                Some(MediaEvent::LoadStarted)
            }
            NativeEvent::LoadedMetadata { duration_secs, .. } => {
                self.has_metadata = true;
                self.duration_secs = if duration_secs.is_finite() {
                    duration_secs.max(0.0)
                } else {
                    0.0
                };
                self.ready_event()
            }
            NativeEvent::CanPlay { .. } => {
                self.can_play = true;
                self.ready_event()
            }
            NativeEvent::TimeUpdate { position_secs, .. } => {
                if !position_secs.is_finite() {
                    return None;
                }
                if let Some(last) = self.last_time {
                    if (last - position_secs).abs() < TIME_UPDATE_EPSILON_SECS {
                        return None;
                    }
                }
                self.last_time = Some(position_secs);
                Some(MediaEvent::TimeUpdate { position_secs })
            }
            NativeEvent::Played { .. } => Some(MediaEvent::Played),
            NativeEvent::Paused { .. } => Some(MediaEvent::Paused),
            NativeEvent::Ended { .. } => Some(MediaEvent::Ended),
            NativeEvent::Error { cause, .. } => {
                // A benign abort leaves outstanding requests to resolve normally.
                if cause.classify().is_fatal() {
                    self.play_ticket = None;
                    self.seek_ticket = None;
                }
                Some(MediaEvent::Failed(cause))
            }
            NativeEvent::PlayResolved { ticket } => {
                self.settle_play(ticket).then_some(MediaEvent::PlayResolved)
            }
            NativeEvent::PlayRejected { ticket, cause } => self
                .settle_play(ticket)
                .then_some(MediaEvent::PlayRejected(cause)),
            NativeEvent::Seeked { ticket } => {
                if self.seek_ticket == Some(ticket) {
                    self.seek_ticket = None;
                    Some(MediaEvent::Seeked)
                } else {
                    tracing::debug!(%ticket, "dropping stale seek resolution");
                    None
                }
            }
        }
    }

    fn settle_play(&mut self, ticket: OpTicket) -> bool {
        if self.play_ticket == Some(ticket) {
            self.play_ticket = None;
            true
        } else {
            tracing::debug!(%ticket, "dropping stale play resolution");
            false
        }
    }

    fn ready_event(&mut self) -> Option<MediaEvent> {
        if self.has_metadata && self.can_play && !self.ready_emitted {
            self.ready_emitted = true;
            Some(MediaEvent::Ready {
                duration_secs: self.duration_secs,
            })
        } else {
            None
        }
    }

    fn reset_transient(&mut self) {
        self.has_metadata = false;
        self.can_play = false;
        self.ready_emitted = false;
        self.duration_secs = 0.0;
        self.last_time = None;
    }

    fn ticket(&mut self) -> Option<OpTicket> {
        let source = self.current?;
        self.next_seq += 1;
        Some(OpTicket {
            source,
            seq: self.next_seq,
        })
    }
}
