// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the player.
//!
//! | Key        | Action                   |
//! |------------|--------------------------|
//! | Space      | Toggle play/pause        |
//! | ArrowLeft  | Skip back one step       |
//! | ArrowRight | Skip forward one step    |
//! | M          | Toggle mute              |
//! | F          | Toggle fullscreen        |
//!
//! Shortcuts are ignored while focus is in a text field and when Ctrl, Alt
//! or Meta is held. The dispatcher keeps no state: every shortcut goes
//! through a controller or viewport operation.

use crate::application::port::{FullscreenPort, MediaElement, ViewportError};
use crate::playback::{Outcome, PlaybackController};
use crate::viewport::FullscreenManager;

/// A physical key, as far as the player cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    Escape,
    Character(char),
    Other,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        meta: false,
        shift: false,
    };

    /// Returns true if a command chord modifier (Ctrl, Alt or Meta) is held.
    #[must_use]
    pub fn is_chord(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Where keyboard focus was when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The player or the page around it.
    #[default]
    Player,
    /// A text input, text area or editable element.
    TextInput,
}

/// One key press as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    pub focus: FocusTarget,
}

impl KeyPress {
    /// A bare key press with focus on the player.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            focus: FocusTarget::Player,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn in_text_input(mut self) -> Self {
        self.focus = FocusTarget::TextInput;
        self
    }
}

/// Player actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    SkipBackward,
    SkipForward,
    ToggleMute,
    ToggleFullscreen,
}

/// Maps a key press to its shortcut, if any.
#[must_use]
pub fn shortcut_for(press: &KeyPress) -> Option<Shortcut> {
    if press.focus == FocusTarget::TextInput || press.modifiers.is_chord() {
        return None;
    }
    match press.key {
        Key::Space => Some(Shortcut::TogglePlayback),
        Key::ArrowLeft => Some(Shortcut::SkipBackward),
        Key::ArrowRight => Some(Shortcut::SkipForward),
        Key::Character(c) => match c.to_ascii_lowercase() {
            'm' => Some(Shortcut::ToggleMute),
            'f' => Some(Shortcut::ToggleFullscreen),
            _ => None,
        },
        Key::Escape | Key::Other => None,
    }
}

/// What dispatching a key press did.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Focus was in a text field; the key belongs to it.
    Suppressed,
    /// Not a player shortcut.
    Unmapped,
    /// A playback operation ran.
    Playback(Shortcut, Outcome),
    /// Fullscreen was toggled; carries the new mode or the port's error.
    Viewport(Result<bool, ViewportError>),
}

/// Routes key presses to controller and viewport operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDispatcher;

impl InputDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn dispatch<E, P>(
        &self,
        press: &KeyPress,
        controller: &mut PlaybackController<E>,
        viewport: &mut FullscreenManager<P>,
    ) -> Dispatch
    where
        E: MediaElement,
        P: FullscreenPort,
    {
        if press.focus == FocusTarget::TextInput {
            return Dispatch::Suppressed;
        }
        let Some(shortcut) = shortcut_for(press) else {
            return Dispatch::Unmapped;
        };
        tracing::trace!(?shortcut, "keyboard shortcut");

        let outcome = match shortcut {
            Shortcut::TogglePlayback => controller.toggle_playback(),
            Shortcut::SkipBackward => controller.skip_backward(),
            Shortcut::SkipForward => controller.skip_forward(),
            Shortcut::ToggleMute => controller.toggle_mute(),
            Shortcut::ToggleFullscreen => return Dispatch::Viewport(viewport.toggle()),
        };
        Dispatch::Playback(shortcut, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::domain::playback::PlaybackStatus;
    use crate::testing::{FakeFullscreen, FakeMediaElement};
    use crate::test_utils::assert_abs_diff_eq;

    fn setup() -> (
        PlaybackController<FakeMediaElement>,
        FullscreenManager<FakeFullscreen>,
    ) {
        let element = FakeMediaElement::new();
        let probe = element.probe();
        let mut controller = PlaybackController::new(element);
        controller.load_source("match.mp4");
        for event in probe.ready(120.0) {
            controller.handle_native(event);
        }
        (controller, FullscreenManager::new(FakeFullscreen::default()))
    }

    #[test]
    fn fixed_mapping() {
        let press = |key| shortcut_for(&KeyPress::new(key));
        assert_eq!(press(Key::Space), Some(Shortcut::TogglePlayback));
        assert_eq!(press(Key::ArrowLeft), Some(Shortcut::SkipBackward));
        assert_eq!(press(Key::ArrowRight), Some(Shortcut::SkipForward));
        assert_eq!(press(Key::Character('m')), Some(Shortcut::ToggleMute));
        assert_eq!(press(Key::Character('M')), Some(Shortcut::ToggleMute));
        assert_eq!(press(Key::Character('f')), Some(Shortcut::ToggleFullscreen));
        assert_eq!(press(Key::Character('x')), None);
        assert_eq!(press(Key::Escape), None);
    }

    #[test]
    fn chords_are_not_shortcuts() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        let press = KeyPress::new(Key::Character('f'));
        assert_eq!(shortcut_for(&press.with_modifiers(ctrl)), None);
        assert_eq!(
            shortcut_for(&press.with_modifiers(shift)),
            Some(Shortcut::ToggleFullscreen)
        );
    }

    #[test]
    fn text_input_suppresses_everything() {
        let (mut controller, mut viewport) = setup();
        let dispatcher = InputDispatcher::new();
        let press = KeyPress::new(Key::Space).in_text_input();
        assert_eq!(
            dispatcher.dispatch(&press, &mut controller, &mut viewport),
            Dispatch::Suppressed
        );
        assert!(controller.state().pending.is_none());
    }

    #[test]
    fn arrows_skip_by_step() {
        let (mut controller, mut viewport) = setup();
        let dispatcher = InputDispatcher::new();
        controller.seek(30.0);
        let outcome =
            dispatcher.dispatch(&KeyPress::new(Key::ArrowRight), &mut controller, &mut viewport);
        assert!(matches!(
            outcome,
            Dispatch::Playback(Shortcut::SkipForward, _)
        ));
        assert_abs_diff_eq!(controller.current_time(), 40.0);

        dispatcher.dispatch(&KeyPress::new(Key::ArrowLeft), &mut controller, &mut viewport);
        assert_abs_diff_eq!(controller.current_time(), 30.0);
    }

    #[test]
    fn arrows_follow_configured_step() {
        let config = PlayerConfig {
            skip_step_secs: 5.0,
            ..PlayerConfig::default()
        };
        let element = FakeMediaElement::new();
        let media = element.probe();
        let mut controller = PlaybackController::with_config(element, &config);
        controller.load_source("match.mp4");
        for event in media.ready(120.0) {
            controller.handle_native(event);
        }
        let mut viewport = FullscreenManager::new(FakeFullscreen::default());
        let dispatcher = InputDispatcher::new();

        controller.seek(30.0);
        dispatcher.dispatch(&KeyPress::new(Key::ArrowRight), &mut controller, &mut viewport);
        assert_abs_diff_eq!(controller.current_time(), 35.0);
    }

    #[test]
    fn space_toggles_playback() {
        let (mut controller, mut viewport) = setup();
        let dispatcher = InputDispatcher::new();
        let outcome = dispatcher.dispatch(&KeyPress::new(Key::Space), &mut controller, &mut viewport);
        assert_eq!(
            outcome,
            Dispatch::Playback(Shortcut::TogglePlayback, Outcome::Pending)
        );
        // Second press before the play resolves defers a pause
        dispatcher.dispatch(&KeyPress::new(Key::Space), &mut controller, &mut viewport);
        assert!(!controller.wants_playing());
        assert_eq!(controller.status(), PlaybackStatus::Ready);
    }

    #[test]
    fn f_toggles_fullscreen_without_touching_playback() {
        let (mut controller, mut viewport) = setup();
        let dispatcher = InputDispatcher::new();
        let before = controller.state().clone();
        assert_eq!(
            dispatcher.dispatch(&KeyPress::new(Key::Character('f')), &mut controller, &mut viewport),
            Dispatch::Viewport(Ok(true))
        );
        assert_eq!(controller.state(), &before);
    }
}
