// SPDX-License-Identifier: MPL-2.0
//! Playback session: a controller running inside one Tokio task.
//!
//! The task is the only place the controller is touched. It selects over
//! three sources, one at a time:
//!
//! - commands from [`SessionHandle`]s, each answered with its [`Outcome`]
//! - raw media callbacks pushed by the platform glue
//! - the load deadline, armed while `Loading` and dropped once the status
//!   moves on (re-armed on every load)
//!
//! Controller notifications are forwarded as [`Notification`]s on an
//! unbounded channel returned by [`spawn`].

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;

use crate::application::port::{MediaElement, NativeEvent};
use crate::diagnostics::ActivityReport;
use crate::domain::error::PlaybackError;
use crate::domain::playback::PlaybackStatus;
use crate::domain::timeline::EventTag;

use super::controller::PlaybackController;
use super::outcome::Outcome;
use super::state::PlaybackState;

/// Something the controller reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Timestamp(f64),
    ActiveEvents(Vec<EventTag>),
    Error(PlaybackError),
    Status(PlaybackStatus),
}

/// The session task has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("playback session closed")]
pub struct SessionClosed;

#[derive(Debug)]
enum Operation {
    LoadSource(String),
    Retry,
    Play,
    Pause,
    TogglePlayback,
    Seek(f64),
    Skip(f64),
    SetVolume(f32),
    ToggleMute,
    SetPlaybackRate(f64),
}

#[derive(Debug)]
enum Command {
    Operate(Operation, oneshot::Sender<Outcome>),
    SetTags(Vec<EventTag>),
    State(oneshot::Sender<PlaybackState>),
    Report(oneshot::Sender<ActivityReport>),
}

/// Cloneable handle to a running session.
///
/// Dropping every handle stops the session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    native: mpsc::UnboundedSender<NativeEvent>,
}

impl SessionHandle {
    async fn operate(&self, op: Operation) -> Result<Outcome, SessionClosed> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(Command::Operate(op, tx))
            .map_err(|_| SessionClosed)?;
        rx.await.map_err(|_| SessionClosed)
    }

    pub async fn load_source(&self, url: impl Into<String>) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::LoadSource(url.into())).await
    }

    pub async fn retry(&self) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::Retry).await
    }

    pub async fn play(&self) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::Play).await
    }

    pub async fn pause(&self) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::Pause).await
    }

    pub async fn toggle_playback(&self) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::TogglePlayback).await
    }

    pub async fn seek(&self, target_secs: f64) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::Seek(target_secs)).await
    }

    pub async fn skip(&self, delta_secs: f64) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::Skip(delta_secs)).await
    }

    pub async fn set_volume(&self, volume: f32) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::SetVolume(volume)).await
    }

    pub async fn toggle_mute(&self) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::ToggleMute).await
    }

    pub async fn set_playback_rate(&self, rate: f64) -> Result<Outcome, SessionClosed> {
        self.operate(Operation::SetPlaybackRate(rate)).await
    }

    /// Replaces the event tag snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the session stopped.
    pub fn set_tags(&self, tags: Vec<EventTag>) -> Result<(), SessionClosed> {
        self.commands
            .send(Command::SetTags(tags))
            .map_err(|_| SessionClosed)
    }

    /// Current controller state.
    pub async fn state(&self) -> Result<PlaybackState, SessionClosed> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(Command::State(tx))
            .map_err(|_| SessionClosed)?;
        rx.await.map_err(|_| SessionClosed)
    }

    /// Snapshot of the activity log.
    pub async fn activity_report(&self) -> Result<ActivityReport, SessionClosed> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(Command::Report(tx))
            .map_err(|_| SessionClosed)?;
        rx.await.map_err(|_| SessionClosed)
    }

    /// Delivers a raw media callback. Platform glue calls this from its
    /// event handlers; it never blocks.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the session stopped.
    pub fn deliver(&self, event: NativeEvent) -> Result<(), SessionClosed> {
        self.native.send(event).map_err(|_| SessionClosed)
    }
}

/// Spawns `controller` on the current Tokio runtime.
///
/// Returns a handle for commands and the notification stream.
pub fn spawn<E>(
    mut controller: PlaybackController<E>,
) -> (SessionHandle, mpsc::UnboundedReceiver<Notification>)
where
    E: MediaElement + Send + 'static,
{
    let (notify_tx, notify_rx) = mpsc::unbounded_channel();
    forward_notifications(&mut controller, &notify_tx);

    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (native_tx, native_rx) = mpsc::unbounded_channel();
    tokio::spawn(run(controller, commands_rx, native_rx));

    (
        SessionHandle {
            commands: commands_tx,
            native: native_tx,
        },
        notify_rx,
    )
}

fn forward_notifications<E: MediaElement>(
    controller: &mut PlaybackController<E>,
    tx: &mpsc::UnboundedSender<Notification>,
) {
    // A closed receiver only means nobody listens anymore.
    let sink = tx.clone();
    controller.on_timestamp_change(move |t| {
        let _ = sink.send(Notification::Timestamp(t));
    });
    let sink = tx.clone();
    controller.on_active_events_change(move |tags| {
        let _ = sink.send(Notification::ActiveEvents(tags.to_vec()));
    });
    let sink = tx.clone();
    controller.on_error(move |err| {
        let _ = sink.send(Notification::Error(err.clone()));
    });
    let sink = tx.clone();
    controller.on_status_change(move |status| {
        let _ = sink.send(Notification::Status(status));
    });
}

async fn run<E: MediaElement>(
    mut controller: PlaybackController<E>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut native: mpsc::UnboundedReceiver<NativeEvent>,
) {
    tracing::debug!("playback session started");
    loop {
        let deadline = controller.load_deadline();
        tokio::select! {
            cmd = commands.recv() => {
                let Some(cmd) = cmd else { break };
                apply(&mut controller, cmd);
            }
            Some(event) = native.recv() => {
                controller.handle_native(event);
            }
            () = wait_until(deadline) => {
                controller.check_timeout(Instant::now());
            }
        }
    }
    tracing::debug!("playback session stopped");
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn apply<E: MediaElement>(controller: &mut PlaybackController<E>, cmd: Command) {
    match cmd {
        Command::Operate(op, reply) => {
            let outcome = match op {
                Operation::LoadSource(url) => controller.load_source(&url),
                Operation::Retry => controller.retry(),
                Operation::Play => controller.play(),
                Operation::Pause => controller.pause(),
                Operation::TogglePlayback => controller.toggle_playback(),
                Operation::Seek(target) => controller.seek(target),
                Operation::Skip(delta) => controller.skip(delta),
                Operation::SetVolume(volume) => controller.set_volume(volume),
                Operation::ToggleMute => controller.toggle_mute(),
                Operation::SetPlaybackRate(rate) => controller.set_playback_rate(rate),
            };
            // The caller may have given up waiting.
            let _ = reply.send(outcome);
        }
        Command::SetTags(tags) => controller.set_tags(tags),
        Command::State(reply) => {
            let _ = reply.send(controller.state().clone());
        }
        Command::Report(reply) => {
            let _ = reply.send(controller.activity_report());
        }
    }
}
