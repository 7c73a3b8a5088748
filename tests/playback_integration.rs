// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the playback controller against the fake media
//! element: ordering guarantees under every interleaving of user operations
//! and native resolutions, source switching, and timeline synchronization.

use scout_lens::domain::error::{NativeErrorCause, PlaybackError};
use scout_lens::domain::playback::{PendingOperation, PlaybackStatus};
use scout_lens::domain::timeline::EventTag;
use scout_lens::playback::{Outcome, PlaybackController};
use scout_lens::testing::{FakeMediaElement, FakeMediaProbe, MediaCall};
use std::sync::{Arc, Mutex};

const DURATION: f64 = 120.0;

fn ready_controller() -> (PlaybackController<FakeMediaElement>, FakeMediaProbe) {
    let element = FakeMediaElement::new();
    let probe = element.probe();
    let mut controller = PlaybackController::new(element);
    assert_eq!(controller.load_source("https://cdn.example.org/match.mp4"), Outcome::Applied);
    for event in probe.ready(DURATION) {
        controller.handle_native(event);
    }
    assert_eq!(controller.status(), PlaybackStatus::Ready);
    (controller, probe)
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Play,
    Pause,
    Seek,
    ResolvePlay,
    AbortPlay,
    CompleteSeek,
    AbortError,
}

const STEPS: [Step; 7] = [
    Step::Play,
    Step::Pause,
    Step::Seek,
    Step::ResolvePlay,
    Step::AbortPlay,
    Step::CompleteSeek,
    Step::AbortError,
];

fn apply(
    controller: &mut PlaybackController<FakeMediaElement>,
    probe: &FakeMediaProbe,
    step: Step,
    index: usize,
) {
    match step {
        Step::Play => {
            controller.play();
        }
        Step::Pause => {
            controller.pause();
        }
        Step::Seek => {
            controller.seek(15.0 * (index as f64 + 1.0));
        }
        Step::ResolvePlay => {
            if let Some(event) = probe.resolve_play() {
                controller.handle_native(event);
            }
        }
        Step::AbortPlay => {
            if let Some(event) = probe.reject_play(NativeErrorCause::Aborted) {
                controller.handle_native(event);
            }
        }
        Step::CompleteSeek => {
            if let Some(event) = probe.complete_seek() {
                controller.handle_native(event);
            }
        }
        Step::AbortError => {
            if let Some(event) = probe.error(NativeErrorCause::Aborted) {
                controller.handle_native(event);
            }
        }
    }
}

/// Resolves whatever is still in flight until the controller settles.
fn drain(controller: &mut PlaybackController<FakeMediaElement>, probe: &FakeMediaProbe) {
    for _ in 0..16 {
        if let Some(event) = probe.resolve_play() {
            controller.handle_native(event);
        } else if let Some(event) = probe.complete_seek() {
            controller.handle_native(event);
        } else {
            return;
        }
    }
    panic!("controller kept issuing native operations");
}

#[test]
fn test_no_pause_or_seek_while_play_unresolved_for_all_interleavings() {
    const LEN: u32 = 6;
    let total = STEPS.len().pow(LEN);

    for mut code in 0..total {
        let mut sequence = Vec::with_capacity(LEN as usize);
        for _ in 0..LEN {
            sequence.push(STEPS[code % STEPS.len()]);
            code /= STEPS.len();
        }

        let (mut controller, probe) = ready_controller();
        for (index, &step) in sequence.iter().enumerate() {
            apply(&mut controller, &probe, step, index);
        }
        drain(&mut controller, &probe);

        assert!(
            probe.violations().is_empty(),
            "{sequence:?}: {:?}",
            probe.violations()
        );
        assert_eq!(
            controller.state().pending,
            PendingOperation::None,
            "{sequence:?}"
        );
        assert!(
            matches!(
                controller.status(),
                PlaybackStatus::Ready | PlaybackStatus::Playing | PlaybackStatus::Paused
            ),
            "{sequence:?}: settled in {}",
            controller.status()
        );
        assert!(controller.state().last_error.is_none(), "{sequence:?}");
    }
}

#[test]
fn test_play_then_pause_before_resolution_ends_paused() {
    let (mut controller, probe) = ready_controller();
    assert_eq!(controller.play(), Outcome::Pending);
    assert_eq!(controller.pause(), Outcome::Pending);
    assert_eq!(probe.count(|c| matches!(c, MediaCall::Pause)), 0);

    controller.handle_native(probe.resolve_play().unwrap());
    assert_eq!(controller.status(), PlaybackStatus::Paused);
    assert!(probe.violations().is_empty());
}

#[test]
fn test_play_then_pause_then_abort_ends_paused() {
    let (mut controller, media) = ready_controller();
    controller.play();
    controller.pause();
    controller.handle_native(media.reject_play(NativeErrorCause::Aborted).unwrap());
    assert_eq!(controller.status(), PlaybackStatus::Paused);
    assert_eq!(controller.state().pending, PendingOperation::None);
}

#[test]
fn test_double_pause_equals_single_pause() {
    let (mut controller, probe) = ready_controller();
    controller.play();
    controller.handle_native(probe.resolve_play().unwrap());

    controller.pause();
    let after_one = controller.state().clone();
    let calls_after_one = probe.calls().len();
    controller.pause();

    assert_eq!(controller.state(), &after_one);
    assert_eq!(probe.calls().len(), calls_after_one);
}

#[test]
fn test_seek_publishes_clamped_time_before_echo() {
    let (mut controller, _probe) = ready_controller();
    for (target, expected) in [(30.0, 30.0), (-10.0, 0.0), (500.0, DURATION)] {
        controller.seek(target);
        assert_eq!(controller.current_time(), expected);
    }
}

#[test]
fn test_source_switch_discards_late_play_resolution() {
    let (mut controller, probe) = ready_controller();
    let errors = Arc::new(Mutex::new(Vec::<PlaybackError>::new()));
    let sink = Arc::clone(&errors);
    controller.on_error(move |err| sink.lock().unwrap().push(err.clone()));

    controller.play();
    let late = probe.resolve_play().unwrap();
    assert_eq!(controller.load_source("https://cdn.example.org/second-half.mp4"), Outcome::Applied);

    controller.handle_native(late);
    assert_eq!(controller.status(), PlaybackStatus::Loading);
    assert!(errors.lock().unwrap().is_empty());

    // Late errors from the first source are dropped too
    controller.handle_native(scout_lens::application::port::NativeEvent::Error {
        source: scout_lens::application::port::SourceId::new(1),
        cause: NativeErrorCause::Network,
    });
    assert_eq!(controller.status(), PlaybackStatus::Loading);
    assert!(errors.lock().unwrap().is_empty());
}

#[test]
fn test_active_events_follow_playback() {
    let (mut controller, probe) = ready_controller();
    controller.set_tags(vec![
        EventTag::new(1u64, 10.0, "Goal").with_end(15.0),
        EventTag::new(2u64, 12.0, "Tackle"),
    ]);
    controller.play();
    controller.handle_native(probe.resolve_play().unwrap());

    let ids = |c: &PlaybackController<FakeMediaElement>| -> Vec<String> {
        c.active_events().iter().map(|t| t.id.to_string()).collect()
    };

    controller.handle_native(probe.time_update(13.0).unwrap());
    assert_eq!(ids(&controller), vec!["1", "2"]);
    controller.handle_native(probe.time_update(16.0).unwrap());
    assert_eq!(ids(&controller), vec!["2"]);

    // A seek updates the active set before the element confirms it
    controller.seek(10.5);
    assert_eq!(ids(&controller), vec!["1"]);
}

#[test]
fn test_tag_without_end_expires_after_window() {
    let (mut controller, _probe) = ready_controller();
    controller.set_tags(vec![EventTag::new(9u64, 40.0, "Shot")]);

    controller.seek(44.9);
    assert_eq!(controller.active_events().len(), 1);
    controller.seek(45.0);
    assert!(controller.active_events().is_empty());
}

#[test]
fn test_activity_report_exports_json() {
    let (mut controller, probe) = ready_controller();
    controller.play();
    controller.handle_native(probe.error(NativeErrorCause::Decode).unwrap());

    let json = controller.activity_report().to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["event_counts"]["error"], 1);
    assert!(parsed["events"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["type"] == "state_transition" && e["to"] == "errored"));
}
