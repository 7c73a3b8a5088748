// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for playback activity tracking.
//!
//! This module defines the events the playback controller records in its
//! activity log: user operations with their outcome, status transitions,
//! discarded callbacks and surfaced errors.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated operations that can be captured for diagnostics.
///
/// These actions represent meaningful user interactions that help
/// understand what the scout was doing when an issue occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Source Actions
    // ==========================================================================
    /// Load a new source.
    LoadSource {
        /// The URL as given by the caller.
        url: String,
    },

    /// Reload the last source after a failure.
    Retry,

    // ==========================================================================
    // Playback Actions
    // ==========================================================================
    /// Start playback.
    Play,

    /// Pause playback.
    Pause,

    /// Seek to a position.
    Seek {
        /// Requested position in seconds (before clamping).
        target_secs: f64,
    },

    /// Skip relative to the current position.
    Skip {
        /// Signed offset in seconds.
        delta_secs: f64,
    },

    /// Change playback rate.
    SetPlaybackRate {
        /// Requested rate multiplier (before snapping).
        rate: f64,
    },

    // ==========================================================================
    // Audio Actions
    // ==========================================================================
    /// Change volume level.
    SetVolume {
        /// Volume level (0.0 to 1.0).
        volume: f32,
    },

    /// Toggle mute state.
    ToggleMute,
}

/// A diagnostic event with timestamp.
///
/// # Variants
///
/// - `UserAction`: An operation requested through the controller
/// - `StateTransition`: The playback status changed
/// - `Warning`: A discarded or ignored signal
/// - `Error`: A failure surfaced to listeners
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated operation and what the controller did with it.
    UserAction {
        /// The specific action performed.
        action: UserAction,
        /// Outcome reported to the caller (e.g. `applied`, `pending`).
        outcome: String,
    },

    /// Playback status change.
    StateTransition {
        /// Status before the change.
        from: String,
        /// Status after the change.
        to: String,
    },

    /// Non-critical warning.
    Warning {
        /// Brief description of the warning
        message: String,
    },

    /// Error surfaced to listeners.
    Error {
        /// Message key of the classified error
        key: String,
        /// Brief description of the error
        message: String,
    },
}

impl DiagnosticEventKind {
    /// Snake-case name of the variant, as used in JSON exports.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UserAction { .. } => "user_action",
            Self::StateTransition { .. } => "state_transition",
            Self::Warning { .. } => "warning",
            Self::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "late callback".to_string(),
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn diagnostic_event_with_timestamp_uses_provided_timestamp() {
        let timestamp = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::UserAction {
                action: UserAction::Play,
                outcome: "pending".to_string(),
            },
            timestamp,
        );

        assert_eq!(event.timestamp, timestamp);
    }

    #[test]
    fn user_action_serializes_with_tag() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::Seek { target_secs: 42.5 },
            outcome: "applied".to_string(),
        };

        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"seek\""));
        assert!(json.contains("\"target_secs\":42.5"));
    }

    #[test]
    fn state_transition_deserializes_from_json() {
        let json = r#"{"type":"state_transition","from":"loading","to":"ready"}"#;
        let event: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(
            event,
            DiagnosticEventKind::StateTransition {
                from: "loading".to_string(),
                to: "ready".to_string(),
            }
        );
        assert_eq!(event.type_name(), "state_transition");
    }
}
