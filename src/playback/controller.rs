// SPDX-License-Identifier: MPL-2.0
//! Playback controller state machine.
//!
//! The controller is the single owner of [`PlaybackState`]. User operations
//! and normalized media callbacks are applied one at a time, so the state is
//! never observed half-updated.
//!
//! Ordering rules towards the media element:
//! - a native pause or seek is never issued while a native play-start is
//!   unresolved; the request is deferred and replayed on resolution
//! - at most one native play or seek is in flight; newer requests coalesce,
//!   supersede the queued one or are rejected as `Busy`
//! - loading a source invalidates everything in flight; late callbacks for
//!   the previous source are dropped by the adapter
//!
//! Lifecycle:
//!
//! ```text
//! Idle -> Loading -> Ready -> Playing <-> Paused
//!            |         \________ Seeking ______/
//!            v
//!         Errored  (until load_source / retry)
//! ```

use std::time::Duration;

use tokio::time::Instant;

use crate::application::port::{
    DirectUrlResolver, MediaElement, NativeEvent, Resolution, SourceResolver,
};
use crate::config::PlayerConfig;
use crate::diagnostics::{ActivityLog, ActivityReport, DiagnosticEventKind, UserAction};
use crate::domain::error::{NativeErrorCause, PlaybackError};
use crate::domain::playback::{PendingOperation, PlaybackRate, PlaybackStatus, SkipStep, Volume};
use crate::domain::timeline::{EventTag, HighlightWindow};
use crate::timeline::TimelineSynchronizer;

use super::adapter::{MediaAdapter, MediaEvent};
use super::listeners::{Listeners, SubscriptionId};
use super::outcome::{IgnoreReason, Outcome};
use super::state::PlaybackState;

/// Native request currently awaiting its resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
enum InFlight {
    Play,
    Seek { target_secs: f64 },
}

/// Progress of a load, for "still loading" feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadHint {
    /// No load in progress.
    NotLoading,
    /// Loading within the expected time.
    Loading,
    /// Loading longer than usual; Ready may still arrive.
    Slow,
    /// The load timed out.
    TimedOut,
}

/// Drives a [`MediaElement`] and keeps the canonical [`PlaybackState`].
pub struct PlaybackController<E> {
    adapter: MediaAdapter<E>,
    resolver: Box<dyn SourceResolver + Send>,
    state: PlaybackState,
    in_flight: Option<InFlight>,
    /// A pause must follow the unresolved play.
    pause_after_play: bool,
    /// Seek target waiting behind the in-flight operation.
    queued_seek: Option<f64>,
    /// Status to settle in once the current seek completes.
    restore: PlaybackStatus,
    /// Status before the in-flight play, restored on a benign abort.
    play_origin: PlaybackStatus,
    last_url: Option<String>,
    load_started: Option<Instant>,
    load_timeout: Duration,
    slow_load_hint: Duration,
    skip_step: SkipStep,
    timeline: TimelineSynchronizer,
    listeners: Listeners,
    activity: ActivityLog,
}

impl<E> std::fmt::Debug for PlaybackController<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .field("queued_seek", &self.queued_seek)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl<E: MediaElement> PlaybackController<E> {
    /// Creates a controller with default settings.
    #[must_use]
    pub fn new(element: E) -> Self {
        Self::with_config(element, &PlayerConfig::default())
    }

    /// Creates a controller using timeouts, initial audio settings and
    /// highlight window from `config`.
    #[must_use]
    pub fn with_config(element: E, config: &PlayerConfig) -> Self {
        let mut adapter = MediaAdapter::new(element);
        let state = PlaybackState {
            volume: config.initial_volume(),
            muted: config.muted,
            playback_rate: config.initial_rate(),
            ..PlaybackState::default()
        };
        adapter.set_volume(state.volume.value());
        adapter.set_muted(state.muted);
        adapter.set_playback_rate(state.playback_rate.value());

        Self {
            adapter,
            resolver: Box::new(DirectUrlResolver),
            state,
            in_flight: None,
            pause_after_play: false,
            queued_seek: None,
            restore: PlaybackStatus::Ready,
            play_origin: PlaybackStatus::Ready,
            last_url: None,
            load_started: None,
            load_timeout: config.load_timeout(),
            slow_load_hint: config.slow_load_hint(),
            skip_step: config.skip_step(),
            timeline: TimelineSynchronizer::new(config.highlight_window()),
            listeners: Listeners::default(),
            activity: ActivityLog::new(config.activity_log_capacity()),
        }
    }

    /// Replaces the URL resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl SourceResolver + Send + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.state.current_time
    }

    /// Tags whose window contains the current position.
    #[must_use]
    pub fn active_events(&self) -> &[EventTag] {
        self.timeline.active()
    }

    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        self.skip_step
    }

    #[must_use]
    pub fn media(&self) -> &E {
        self.adapter.element()
    }

    /// Returns true if playback is running or will be once the pending
    /// operation completes.
    #[must_use]
    pub fn wants_playing(&self) -> bool {
        match self.in_flight {
            Some(InFlight::Play) => !self.pause_after_play,
            _ => match self.state.status {
                PlaybackStatus::Playing => true,
                PlaybackStatus::Seeking => self.restore == PlaybackStatus::Playing,
                _ => false,
            },
        }
    }

    /// Bounded log of recent operations, transitions and errors.
    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Snapshot of the activity log, ready for JSON export.
    #[must_use]
    pub fn activity_report(&self) -> ActivityReport {
        self.activity.report()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Called with the new position whenever `current_time` changes.
    pub fn on_timestamp_change(&mut self, f: impl FnMut(f64) + Send + 'static) -> SubscriptionId {
        self.listeners.add_timestamp(Box::new(f))
    }

    /// Called with the new active set whenever its membership changes.
    pub fn on_active_events_change(
        &mut self,
        f: impl FnMut(&[EventTag]) + Send + 'static,
    ) -> SubscriptionId {
        self.listeners.add_active(Box::new(f))
    }

    /// Called once per fatal error of the current source.
    pub fn on_error(
        &mut self,
        f: impl FnMut(&PlaybackError) + Send + 'static,
    ) -> SubscriptionId {
        self.listeners.add_error(Box::new(f))
    }

    pub fn on_status_change(
        &mut self,
        f: impl FnMut(PlaybackStatus) + Send + 'static,
    ) -> SubscriptionId {
        self.listeners.add_status(Box::new(f))
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    // =========================================================================
    // Source Operations
    // =========================================================================

    /// Loads `url`, replacing the current source.
    pub fn load_source(&mut self, url: &str) -> Outcome {
        self.load_source_at(url, Instant::now())
    }

    /// Loads `url` with the load timeout measured from `now`.
    pub fn load_source_at(&mut self, url: &str, now: Instant) -> Outcome {
        let outcome = self.load_inner(url, now);
        self.record(
            UserAction::LoadSource {
                url: url.to_string(),
            },
            &outcome,
        );
        outcome
    }

    /// Reloads the last source after a failure.
    pub fn retry(&mut self) -> Outcome {
        self.retry_at(Instant::now())
    }

    pub fn retry_at(&mut self, now: Instant) -> Outcome {
        let outcome = if !self.state.status.is_errored() {
            Outcome::Ignored(IgnoreReason::NotErrored)
        } else if let Some(url) = self.last_url.clone() {
            self.load_inner(&url, now)
        } else {
            Outcome::Ignored(IgnoreReason::NoSource)
        };
        self.record(UserAction::Retry, &outcome);
        outcome
    }

    fn load_inner(&mut self, url: &str, now: Instant) -> Outcome {
        let playable = match self.resolver.resolve(url) {
            Resolution::DirectPlayable(playable) => playable,
            Resolution::EmbedOnly { platform } => {
                tracing::info!(url, %platform, "source needs an embedded player");
                return Outcome::Rejected(PlaybackError::EmbedOnly { platform });
            }
            Resolution::Invalid => {
                tracing::warn!(url, "rejecting invalid source url");
                return Outcome::Rejected(PlaybackError::InvalidSource);
            }
        };

        self.in_flight = None;
        self.pause_after_play = false;
        self.queued_seek = None;
        self.load_started = None;
        self.state.last_error = None;
        self.state.duration = 0.0;
        self.set_status(PlaybackStatus::Idle);
        self.set_current_time(0.0);

        let source = self.adapter.load(&playable);
        self.adapter.set_volume(self.state.volume.value());
        self.adapter.set_muted(self.state.muted);
        self.adapter.set_playback_rate(self.state.playback_rate.value());

        self.last_url = Some(url.to_string());
        self.load_started = Some(now);
        self.set_status(PlaybackStatus::Loading);
        self.sync_pending();
        tracing::info!(%source, url = %playable, "source loading");
        Outcome::Applied
    }

    // =========================================================================
    // Load Timeout
    // =========================================================================

    /// Instant at which the current load times out, if loading.
    #[must_use]
    pub fn load_deadline(&self) -> Option<Instant> {
        if self.state.status.is_loading() {
            self.load_started.map(|started| started + self.load_timeout)
        } else {
            None
        }
    }

    /// Fails the load if its deadline passed. Returns true if it did.
    pub fn check_timeout(&mut self, now: Instant) -> bool {
        match self.load_deadline() {
            Some(deadline) if now >= deadline => {
                tracing::warn!(timeout = ?self.load_timeout, "source did not become ready in time");
                self.adapter.unload();
                self.fail(PlaybackError::LoadTimeout);
                true
            }
            _ => false,
        }
    }

    /// Classifies how the current load is progressing.
    #[must_use]
    pub fn load_hint(&self, now: Instant) -> LoadHint {
        if self.state.last_error == Some(PlaybackError::LoadTimeout) {
            return LoadHint::TimedOut;
        }
        let Some(started) = self.load_started.filter(|_| self.state.status.is_loading()) else {
            return LoadHint::NotLoading;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.load_timeout {
            LoadHint::TimedOut
        } else if elapsed >= self.slow_load_hint {
            LoadHint::Slow
        } else {
            LoadHint::Loading
        }
    }

    // =========================================================================
    // Playback Operations
    // =========================================================================

    /// Starts playback. Completes when the native play-start resolves.
    pub fn play(&mut self) -> Outcome {
        let outcome = self.play_inner();
        self.record(UserAction::Play, &outcome);
        outcome
    }

    fn play_inner(&mut self) -> Outcome {
        if !self.state.status.is_ready() {
            return Outcome::Rejected(PlaybackError::NotReady);
        }
        if self.state.pending.seek_target().is_some() {
            return Outcome::Rejected(PlaybackError::Busy);
        }
        if self.in_flight == Some(InFlight::Play) {
            // A deferred pause is cancelled: the caller wants playback again.
            self.pause_after_play = false;
            self.sync_pending();
            return Outcome::Coalesced;
        }
        if self.state.status.is_playing() {
            return Outcome::Ignored(IgnoreReason::AlreadyPlaying);
        }

        self.play_origin = self.state.status;
        if let Some(ticket) = self.adapter.play() {
            tracing::debug!(%ticket, "play requested");
            self.in_flight = Some(InFlight::Play);
            self.sync_pending();
            Outcome::Pending
        } else {
            Outcome::Rejected(PlaybackError::NotReady)
        }
    }

    /// Pauses playback. A pause during an unresolved play-start is deferred
    /// until it resolves.
    pub fn pause(&mut self) -> Outcome {
        let outcome = self.pause_inner();
        self.record(UserAction::Pause, &outcome);
        outcome
    }

    fn pause_inner(&mut self) -> Outcome {
        if !self.state.status.is_ready() {
            return Outcome::Rejected(PlaybackError::NotReady);
        }
        if self.in_flight == Some(InFlight::Play) {
            if self.pause_after_play {
                return Outcome::Coalesced;
            }
            self.pause_after_play = true;
            self.sync_pending();
            tracing::debug!("pause deferred until play resolves");
            return Outcome::Pending;
        }

        match self.state.status {
            PlaybackStatus::Playing => {
                self.adapter.pause();
                self.set_status(PlaybackStatus::Paused);
                Outcome::Applied
            }
            PlaybackStatus::Seeking if self.restore == PlaybackStatus::Playing => {
                self.adapter.pause();
                self.restore = PlaybackStatus::Paused;
                Outcome::Applied
            }
            _ => Outcome::Ignored(IgnoreReason::AlreadyPaused),
        }
    }

    /// Plays if paused, pauses if playing (or about to).
    pub fn toggle_playback(&mut self) -> Outcome {
        if self.wants_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Seeks to `target_secs`, clamped to `[0, duration]`.
    ///
    /// The new position is published immediately; the native seek runs once
    /// nothing else is in flight.
    pub fn seek(&mut self, target_secs: f64) -> Outcome {
        let outcome = self.seek_inner(target_secs);
        self.record(UserAction::Seek { target_secs }, &outcome);
        outcome
    }

    /// Seeks relative to the current position.
    pub fn skip(&mut self, delta_secs: f64) -> Outcome {
        let outcome = if delta_secs.is_finite() {
            self.seek_inner(self.state.current_time + delta_secs)
        } else {
            Outcome::Ignored(IgnoreReason::InvalidTarget)
        };
        self.record(UserAction::Skip { delta_secs }, &outcome);
        outcome
    }

    /// Skips forward by the configured step.
    pub fn skip_forward(&mut self) -> Outcome {
        self.skip(self.skip_step.value())
    }

    /// Skips backward by the configured step.
    pub fn skip_backward(&mut self) -> Outcome {
        self.skip(-self.skip_step.value())
    }

    fn seek_inner(&mut self, target_secs: f64) -> Outcome {
        match self.state.status {
            PlaybackStatus::Idle | PlaybackStatus::Errored => {
                return Outcome::Rejected(PlaybackError::NotReady);
            }
            _ => {}
        }
        let Some(clamped) = self.state.clamp_position(target_secs) else {
            return Outcome::Ignored(IgnoreReason::InvalidTarget);
        };
        if clamped != target_secs {
            tracing::debug!(
                target_secs,
                clamped,
                err = %PlaybackError::SeekOutOfRange,
                "seek target clamped"
            );
        }

        self.set_current_time(clamped);

        if self.state.status.is_loading() {
            // Nothing to seek yet; the position is pinned until metadata.
            return Outcome::Applied;
        }

        match self.in_flight {
            Some(InFlight::Play) => {
                let superseded = self.queued_seek.replace(clamped).is_some();
                self.set_status(PlaybackStatus::Seeking);
                self.sync_pending();
                if superseded {
                    Outcome::Superseded
                } else {
                    Outcome::Pending
                }
            }
            Some(InFlight::Seek { .. }) => {
                self.queued_seek = Some(clamped);
                self.sync_pending();
                Outcome::Superseded
            }
            None => {
                self.restore = self.state.status;
                self.start_seek(clamped);
                Outcome::Pending
            }
        }
    }

    fn start_seek(&mut self, target_secs: f64) {
        if let Some(ticket) = self.adapter.seek(target_secs) {
            tracing::debug!(%ticket, target_secs, "seek issued");
            self.in_flight = Some(InFlight::Seek { target_secs });
            self.set_status(PlaybackStatus::Seeking);
        }
        self.sync_pending();
    }

    // =========================================================================
    // Audio and Rate
    // =========================================================================

    pub fn set_volume(&mut self, volume: f32) -> Outcome {
        let volume_value = Volume::new(volume);
        let outcome = if volume_value == self.state.volume {
            Outcome::Ignored(IgnoreReason::Unchanged)
        } else {
            self.state.volume = volume_value;
            self.adapter.set_volume(volume_value.value());
            Outcome::Applied
        };
        self.record(UserAction::SetVolume { volume }, &outcome);
        outcome
    }

    pub fn toggle_mute(&mut self) -> Outcome {
        self.state.muted = !self.state.muted;
        self.adapter.set_muted(self.state.muted);
        let outcome = Outcome::Applied;
        self.record(UserAction::ToggleMute, &outcome);
        outcome
    }

    /// Sets the playback rate, snapped to the nearest supported value.
    pub fn set_playback_rate(&mut self, rate: f64) -> Outcome {
        let snapped = PlaybackRate::new(rate);
        let outcome = if snapped == self.state.playback_rate {
            Outcome::Ignored(IgnoreReason::Unchanged)
        } else {
            self.state.playback_rate = snapped;
            self.adapter.set_playback_rate(snapped.value());
            Outcome::Applied
        };
        self.record(UserAction::SetPlaybackRate { rate }, &outcome);
        outcome
    }

    // =========================================================================
    // Timeline
    // =========================================================================

    /// Replaces the event tag snapshot.
    pub fn set_tags(&mut self, tags: Vec<EventTag>) {
        tracing::debug!(count = tags.len(), "tag snapshot replaced");
        if let Some(active) = self.timeline.set_tags(tags) {
            self.listeners.emit_active(active);
        }
    }

    pub fn set_highlight_window(&mut self, window: HighlightWindow) {
        if let Some(active) = self.timeline.set_window(window) {
            self.listeners.emit_active(active);
        }
    }

    // =========================================================================
    // Media Callbacks
    // =========================================================================

    /// Feeds one raw callback from the media element.
    pub fn handle_native(&mut self, event: NativeEvent) {
        if let Some(event) = self.adapter.accept(event) {
            self.handle_event(event);
        }
    }

    /// Applies one normalized lifecycle event.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadStarted => {
                tracing::trace!("load started");
            }
            MediaEvent::Ready { duration_secs } => self.on_ready(duration_secs),
            MediaEvent::TimeUpdate { position_secs } => self.on_time_update(position_secs),
            MediaEvent::Played => self.on_external_play(),
            MediaEvent::Paused => self.on_external_pause(),
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::Failed(cause) => self.on_failure(cause),
            MediaEvent::PlayResolved => self.on_play_resolved(),
            MediaEvent::PlayRejected(cause) => self.on_play_rejected(cause),
            MediaEvent::Seeked => self.on_seeked(),
        }
    }

    fn on_ready(&mut self, duration_secs: f64) {
        if !self.state.status.is_loading() {
            self.warn(format!(
                "ready signal ignored in {} state",
                self.state.status
            ));
            return;
        }
        self.state.duration = duration_secs;
        self.load_started = None;
        self.set_status(PlaybackStatus::Ready);
    }

    fn on_time_update(&mut self, position_secs: f64) {
        match self.state.status {
            PlaybackStatus::Ready | PlaybackStatus::Playing | PlaybackStatus::Paused => {
                self.set_current_time(position_secs);
            }
            // Mid-seek the published position is the target.
            _ => {}
        }
    }

    fn on_external_play(&mut self) {
        if self.in_flight == Some(InFlight::Play) {
            return;
        }
        match self.state.status {
            PlaybackStatus::Ready | PlaybackStatus::Paused => {
                self.set_status(PlaybackStatus::Playing);
            }
            PlaybackStatus::Seeking => self.restore = PlaybackStatus::Playing,
            _ => {}
        }
    }

    fn on_external_pause(&mut self) {
        if self.in_flight == Some(InFlight::Play) {
            return;
        }
        match self.state.status {
            PlaybackStatus::Playing => self.set_status(PlaybackStatus::Paused),
            PlaybackStatus::Seeking if self.restore == PlaybackStatus::Playing => {
                self.restore = PlaybackStatus::Paused;
            }
            _ => {}
        }
    }

    fn on_ended(&mut self) {
        if self.state.status.is_playing() {
            self.set_current_time(self.state.duration);
            self.set_status(PlaybackStatus::Paused);
        }
    }

    fn on_failure(&mut self, cause: NativeErrorCause) {
        let err = PlaybackError::from(cause);
        if err.is_fatal() {
            self.fail(err);
        } else {
            tracing::debug!(%err, "non-fatal media error ignored");
        }
    }

    fn on_play_resolved(&mut self) {
        if self.in_flight != Some(InFlight::Play) {
            self.warn("play resolution without a pending play".to_string());
            return;
        }
        self.in_flight = None;

        let settled = if std::mem::take(&mut self.pause_after_play) {
            self.adapter.pause();
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Playing
        };
        self.resume_after_play(settled);
    }

    fn on_play_rejected(&mut self, cause: NativeErrorCause) {
        if self.in_flight != Some(InFlight::Play) {
            self.warn("play rejection without a pending play".to_string());
            return;
        }
        self.in_flight = None;
        let pause_requested = std::mem::take(&mut self.pause_after_play);

        let err = PlaybackError::from(cause);
        if err.is_fatal() {
            self.fail(err);
            return;
        }
        // The element never started, so a deferred pause needs no native call.
        let settled = if pause_requested {
            PlaybackStatus::Paused
        } else {
            self.play_origin
        };
        tracing::debug!(%err, %settled, "play aborted");
        self.resume_after_play(settled);
    }

    /// Settles after the play-start finished, replaying a queued seek.
    fn resume_after_play(&mut self, settled: PlaybackStatus) {
        if let Some(target_secs) = self.queued_seek.take() {
            self.restore = settled;
            self.start_seek(target_secs);
        } else {
            self.set_status(settled);
            self.sync_pending();
        }
    }

    fn on_seeked(&mut self) {
        let Some(InFlight::Seek { target_secs }) = self.in_flight else {
            self.warn("seek completion without a pending seek".to_string());
            return;
        };
        self.in_flight = None;

        match self.queued_seek.take() {
            Some(next) if next != target_secs => {
                tracing::debug!(outdated = target_secs, next, "replaying newest seek");
                self.start_seek(next);
            }
            _ => {
                self.set_status(self.restore);
                self.sync_pending();
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn fail(&mut self, err: PlaybackError) {
        if self.state.status.is_errored() {
            return;
        }
        self.in_flight = None;
        self.pause_after_play = false;
        self.queued_seek = None;
        self.load_started = None;
        tracing::error!(%err, key = err.i18n_key(), "playback failed");
        self.state.last_error = Some(err.clone());
        self.set_status(PlaybackStatus::Errored);
        self.sync_pending();
        self.log(DiagnosticEventKind::Error {
            key: err.i18n_key().to_string(),
            message: err.to_string(),
        });
        self.listeners.emit_error(&err);
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        let from = self.state.status;
        if from == status {
            return;
        }
        self.state.status = status;
        tracing::debug!(%from, to = %status, "status changed");
        self.log(DiagnosticEventKind::StateTransition {
            from: from.to_string(),
            to: status.to_string(),
        });
        self.listeners.emit_status(status);
    }

    fn set_current_time(&mut self, t: f64) {
        if self.state.current_time != t {
            self.state.current_time = t;
            self.listeners.emit_timestamp(t);
        }
        if let Some(active) = self.timeline.update(t) {
            self.listeners.emit_active(active);
        }
    }

    fn sync_pending(&mut self) {
        self.state.pending = match (self.queued_seek, self.in_flight) {
            (Some(target_secs), _) | (None, Some(InFlight::Seek { target_secs })) => {
                PendingOperation::Seek { target_secs }
            }
            (None, Some(InFlight::Play)) if self.pause_after_play => PendingOperation::Pause,
            (None, Some(InFlight::Play)) => PendingOperation::Play,
            (None, None) => PendingOperation::None,
        };
    }

    fn record(&mut self, action: UserAction, outcome: &Outcome) {
        if let Outcome::Rejected(err) = outcome {
            tracing::debug!(?action, %err, "operation rejected");
        }
        self.log(DiagnosticEventKind::UserAction {
            action,
            outcome: outcome.as_str().to_string(),
        });
    }

    fn warn(&mut self, message: String) {
        tracing::warn!(status = %self.state.status, "{message}");
        self.log(DiagnosticEventKind::Warning { message });
    }

    fn log(&mut self, kind: DiagnosticEventKind) {
        self.activity.record(kind);
    }
}
