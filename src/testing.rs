// SPDX-License-Identifier: MPL-2.0
//! In-memory platform fakes for tests and demos.
//!
//! [`FakeMediaElement`] records every native call and flags ordering
//! violations (a pause or seek issued while a play-start is unresolved, a
//! second play/seek while one is in flight). Its [`FakeMediaProbe`] is a
//! shared handle that stays with the test after the element moved into a
//! controller or session, and builds the callbacks the platform would send.

use crate::application::port::{
    FullscreenPort, MediaElement, NativeEvent, OpTicket, SourceId, ViewportError,
};
use crate::domain::error::NativeErrorCause;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One call made on the fake media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCall {
    Load { source: SourceId, url: String },
    Unload,
    Play(OpTicket),
    Pause,
    Seek { ticket: OpTicket, position_secs: f64 },
    SetVolume(f32),
    SetMuted(bool),
    SetPlaybackRate(f64),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<MediaCall>,
    source: Option<SourceId>,
    open_play: Option<OpTicket>,
    open_seek: Option<OpTicket>,
    violations: Vec<String>,
}

fn lock(shared: &Mutex<Recorder>) -> MutexGuard<'_, Recorder> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A [`MediaElement`] that records calls instead of playing anything.
#[derive(Debug, Clone, Default)]
pub struct FakeMediaElement {
    shared: Arc<Mutex<Recorder>>,
}

impl FakeMediaElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle observing this element.
    #[must_use]
    pub fn probe(&self) -> FakeMediaProbe {
        FakeMediaProbe {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<MediaCall> {
        lock(&self.shared).calls.clone()
    }
}

impl MediaElement for FakeMediaElement {
    fn load(&mut self, source: SourceId, url: &str) {
        let mut rec = lock(&self.shared);
        rec.calls.push(MediaCall::Load {
            source,
            url: url.to_string(),
        });
        rec.source = Some(source);
        rec.open_play = None;
        rec.open_seek = None;
    }

    fn unload(&mut self) {
        let mut rec = lock(&self.shared);
        rec.calls.push(MediaCall::Unload);
        rec.source = None;
        rec.open_play = None;
        rec.open_seek = None;
    }

    fn play(&mut self, ticket: OpTicket) {
        let mut rec = lock(&self.shared);
        rec.calls.push(MediaCall::Play(ticket));
        if rec.open_play.is_some() || rec.open_seek.is_some() {
            rec.violations
                .push(format!("play {ticket} issued while another operation is in flight"));
        }
        rec.open_play = Some(ticket);
    }

    fn pause(&mut self) {
        let mut rec = lock(&self.shared);
        rec.calls.push(MediaCall::Pause);
        if let Some(ticket) = rec.open_play {
            rec.violations
                .push(format!("pause issued while play {ticket} is unresolved"));
        }
    }

    fn seek(&mut self, ticket: OpTicket, position_secs: f64) {
        let mut rec = lock(&self.shared);
        rec.calls.push(MediaCall::Seek {
            ticket,
            position_secs,
        });
        if let Some(open) = rec.open_play {
            rec.violations
                .push(format!("seek {ticket} issued while play {open} is unresolved"));
        }
        if let Some(open) = rec.open_seek {
            rec.violations
                .push(format!("seek {ticket} issued while seek {open} is in flight"));
        }
        rec.open_seek = Some(ticket);
    }

    fn set_volume(&mut self, volume: f32) {
        lock(&self.shared).calls.push(MediaCall::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        lock(&self.shared).calls.push(MediaCall::SetMuted(muted));
    }

    fn set_playback_rate(&mut self, rate: f64) {
        lock(&self.shared)
            .calls
            .push(MediaCall::SetPlaybackRate(rate));
    }
}

/// Shared view of a [`FakeMediaElement`].
#[derive(Debug, Clone)]
pub struct FakeMediaProbe {
    shared: Arc<Mutex<Recorder>>,
}

impl FakeMediaProbe {
    #[must_use]
    pub fn calls(&self) -> Vec<MediaCall> {
        lock(&self.shared).calls.clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.shared).calls.clear();
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&MediaCall) -> bool) -> usize {
        lock(&self.shared).calls.iter().filter(|c| pred(c)).count()
    }

    /// Ordering violations observed so far.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        lock(&self.shared).violations.clone()
    }

    /// Source currently loaded in the element.
    #[must_use]
    pub fn source(&self) -> Option<SourceId> {
        lock(&self.shared).source
    }

    /// Unresolved play request, if any.
    #[must_use]
    pub fn open_play(&self) -> Option<OpTicket> {
        lock(&self.shared).open_play
    }

    /// Seek request in flight, if any.
    #[must_use]
    pub fn open_seek(&self) -> Option<OpTicket> {
        lock(&self.shared).open_seek
    }

    /// Metadata and can-play callbacks for the loaded source.
    #[must_use]
    pub fn ready(&self, duration_secs: f64) -> Vec<NativeEvent> {
        self.source()
            .map(|source| {
                vec![
                    NativeEvent::LoadedMetadata {
                        source,
                        duration_secs,
                    },
                    NativeEvent::CanPlay { source },
                ]
            })
            .unwrap_or_default()
    }

    /// Resolves the unresolved play request.
    #[must_use]
    pub fn resolve_play(&self) -> Option<NativeEvent> {
        let ticket = lock(&self.shared).open_play.take()?;
        Some(NativeEvent::PlayResolved { ticket })
    }

    /// Rejects the unresolved play request with `cause`.
    #[must_use]
    pub fn reject_play(&self, cause: NativeErrorCause) -> Option<NativeEvent> {
        let ticket = lock(&self.shared).open_play.take()?;
        Some(NativeEvent::PlayRejected { ticket, cause })
    }

    /// Completes the seek in flight.
    #[must_use]
    pub fn complete_seek(&self) -> Option<NativeEvent> {
        let ticket = lock(&self.shared).open_seek.take()?;
        Some(NativeEvent::Seeked { ticket })
    }

    #[must_use]
    pub fn time_update(&self, position_secs: f64) -> Option<NativeEvent> {
        let source = self.source()?;
        Some(NativeEvent::TimeUpdate {
            source,
            position_secs,
        })
    }

    #[must_use]
    pub fn error(&self, cause: NativeErrorCause) -> Option<NativeEvent> {
        let source = self.source()?;
        Some(NativeEvent::Error { source, cause })
    }

    #[must_use]
    pub fn paused(&self) -> Option<NativeEvent> {
        self.source().map(|source| NativeEvent::Paused { source })
    }

    #[must_use]
    pub fn played(&self) -> Option<NativeEvent> {
        self.source().map(|source| NativeEvent::Played { source })
    }

    #[must_use]
    pub fn ended(&self) -> Option<NativeEvent> {
        self.source().map(|source| NativeEvent::Ended { source })
    }
}

/// A [`FullscreenPort`] that records requests and can be told to refuse.
#[derive(Debug, Clone, Default)]
pub struct FakeFullscreen {
    /// When set, every request fails with this error.
    pub refuse_with: Option<ViewportError>,
    pub requests: usize,
    pub exits: usize,
}

impl FakeFullscreen {
    /// A port whose requests are always denied.
    #[must_use]
    pub fn refusing(err: ViewportError) -> Self {
        Self {
            refuse_with: Some(err),
            ..Self::default()
        }
    }
}

impl FullscreenPort for FakeFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), ViewportError> {
        self.requests += 1;
        match &self.refuse_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn exit_fullscreen(&mut self) -> Result<(), ViewportError> {
        self.exits += 1;
        match &self.refuse_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_during_unresolved_play_is_a_violation() {
        let mut element = FakeMediaElement::new();
        let probe = element.probe();
        let source = SourceId::new(1);
        element.load(source, "a.mp4");
        element.play(OpTicket { source, seq: 1 });
        element.pause();
        assert_eq!(probe.violations().len(), 1);

        assert!(probe.resolve_play().is_some());
        element.pause();
        assert_eq!(probe.violations().len(), 1);
    }

    #[test]
    fn helpers_need_a_loaded_source() {
        let probe = FakeMediaElement::new().probe();
        assert!(probe.ready(10.0).is_empty());
        assert!(probe.time_update(1.0).is_none());
        assert!(probe.resolve_play().is_none());
    }
}
