// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the playback session task: command round trips,
//! native callback delivery and the load timeout under paused Tokio time.

use scout_lens::domain::error::PlaybackError;
use scout_lens::domain::playback::PlaybackStatus;
use scout_lens::domain::timeline::EventTag;
use scout_lens::playback::{session, Notification, Outcome, PlaybackController};
use scout_lens::testing::FakeMediaElement;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

fn drain(notifications: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut seen = Vec::new();
    while let Ok(n) = notifications.try_recv() {
        seen.push(n);
    }
    seen
}

/// Lets the session task drain both channels. Commands and callbacks travel
/// on separate channels, so their relative order is otherwise unspecified.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_load_times_out_and_late_ready_is_ignored() {
    let element = FakeMediaElement::new();
    let probe = element.probe();
    let (handle, mut notifications) = session::spawn(PlaybackController::new(element));

    assert_eq!(handle.load_source("match.mp4").await, Ok(Outcome::Applied));
    let late_ready = probe.ready(5400.0);

    tokio::time::sleep(Duration::from_secs(29)).await;
    assert_eq!(handle.state().await.unwrap().status, PlaybackStatus::Loading);

    tokio::time::sleep(Duration::from_secs(2)).await;
    let state = handle.state().await.unwrap();
    assert_eq!(state.status, PlaybackStatus::Errored);
    assert_eq!(state.last_error, Some(PlaybackError::LoadTimeout));

    // Ready at 31 s is ignored
    for event in late_ready {
        handle.deliver(event).unwrap();
    }
    assert_eq!(handle.state().await.unwrap().status, PlaybackStatus::Errored);

    let errors: Vec<_> = drain(&mut notifications)
        .into_iter()
        .filter(|n| matches!(n, Notification::Error(_)))
        .collect();
    assert_eq!(errors, vec![Notification::Error(PlaybackError::LoadTimeout)]);
}

#[tokio::test(start_paused = true)]
async fn test_ready_before_deadline_disarms_timeout() {
    let element = FakeMediaElement::new();
    let probe = element.probe();
    let (handle, _notifications) = session::spawn(PlaybackController::new(element));

    handle.load_source("match.mp4").await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;
    for event in probe.ready(5400.0) {
        handle.deliver(event).unwrap();
    }
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(handle.state().await.unwrap().status, PlaybackStatus::Ready);
}

#[tokio::test(start_paused = true)]
async fn test_retry_rearms_timeout() {
    let element = FakeMediaElement::new();
    let (handle, _notifications) = session::spawn(PlaybackController::new(element));

    handle.load_source("match.mp4").await.unwrap();
    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(handle.retry().await, Ok(Outcome::Applied));
    assert_eq!(handle.state().await.unwrap().status, PlaybackStatus::Loading);

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(handle.state().await.unwrap().status, PlaybackStatus::Errored);
}

#[tokio::test(start_paused = true)]
async fn test_notifications_stream_timeline_changes() {
    let element = FakeMediaElement::new();
    let probe = element.probe();
    let (handle, mut notifications) = session::spawn(PlaybackController::new(element));

    handle.load_source("match.mp4").await.unwrap();
    for event in probe.ready(5400.0) {
        handle.deliver(event).unwrap();
    }
    settle().await;
    handle
        .set_tags(vec![EventTag::new(1u64, 10.0, "Goal").with_end(15.0)])
        .unwrap();
    assert_eq!(handle.seek(12.0).await, Ok(Outcome::Pending));

    let seen = drain(&mut notifications);
    assert!(seen.contains(&Notification::Status(PlaybackStatus::Ready)));
    assert!(seen.contains(&Notification::Timestamp(12.0)));
    assert!(seen.iter().any(|n| matches!(
        n,
        Notification::ActiveEvents(tags) if tags.len() == 1 && tags[0].label == "Goal"
    )));

    handle.deliver(probe.complete_seek().unwrap()).unwrap();
    settle().await;
    assert_eq!(handle.state().await.unwrap().status, PlaybackStatus::Ready);
}

#[tokio::test]
async fn test_dropping_handles_stops_session() {
    let (handle, mut notifications) =
        session::spawn(PlaybackController::new(FakeMediaElement::new()));
    let clone = handle.clone();
    drop(handle);
    assert!(clone.play().await.is_ok());
    drop(clone);

    // The controller (and its notification senders) is dropped with the task.
    assert_eq!(notifications.recv().await, None);
}
