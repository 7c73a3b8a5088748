// SPDX-License-Identifier: MPL-2.0
//! Activity report generation and JSON export.
//!
//! This module provides structures for building activity reports from the
//! controller's log that can be exported as JSON for debugging and analysis.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{ActivityLog, DiagnosticEventKind};

// =============================================================================
// Report Metadata
// =============================================================================

/// Metadata about an activity report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// Version of `scout_lens` that generated the report
    pub scout_lens_version: String,
    /// Milliseconds between the first and the last event
    pub span_ms: u64,
    /// Total number of events in the report
    pub event_count: usize,
    /// Events dropped from the log before the report was taken
    pub evicted_count: u64,
}

// =============================================================================
// Serializable Event
// =============================================================================

/// A diagnostic event that can be serialized to JSON.
///
/// This wrapper converts `DiagnosticEvent` timestamps (which use `Instant`)
/// to relative milliseconds since the first logged event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since the first event in the report
    pub timestamp_ms: u64,
    /// The event data
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    /// Creates a serializable event relative to `origin`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event_timestamp: Instant, origin: Instant, kind: DiagnosticEventKind) -> Self {
        let timestamp_ms = event_timestamp.saturating_duration_since(origin).as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

// =============================================================================
// Activity Report
// =============================================================================

/// A complete activity report ready for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Count of events by type (e.g., `"user_action": 15`)
    pub event_counts: BTreeMap<String, usize>,
    /// Logged events, oldest first
    pub events: Vec<SerializableEvent>,
}

impl ActivityReport {
    /// Builds a report from the retained events of `log`.
    #[must_use]
    pub fn from_log(log: &ActivityLog) -> Self {
        let origin = log.iter().next().map(|event| event.timestamp);
        let events: Vec<SerializableEvent> = origin
            .map(|origin| {
                log.iter()
                    .map(|event| {
                        SerializableEvent::new(event.timestamp, origin, event.kind.clone())
                    })
                    .collect()
            })
            .unwrap_or_default();
        let event_counts = log
            .counts()
            .iter()
            .map(|(name, count)| ((*name).to_string(), *count))
            .collect();

        Self {
            metadata: ReportMetadata {
                scout_lens_version: env!("CARGO_PKG_VERSION").to_string(),
                span_ms: events.last().map_or(0, |e| e.timestamp_ms),
                event_count: events.len(),
                evicted_count: log.evicted(),
            },
            event_counts,
            events,
        }
    }

    /// Exports the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
