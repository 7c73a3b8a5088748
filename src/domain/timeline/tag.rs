// SPDX-License-Identifier: MPL-2.0
//! Event tags placed on the match timeline.

use std::collections::BTreeMap;
use std::fmt;

use super::HighlightWindow;

/// Identifier of an event tag, as assigned by the tag store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(String);

impl TagId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for TagId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TagId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A timestamped, labeled marker on the video (goal, tackle, pass, ...).
///
/// Tags are read-only snapshots supplied from outside; the playback engine
/// never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTag {
    /// Identifier assigned by the tag store.
    pub id: TagId,
    /// Start of the event in seconds from the beginning of the video.
    pub start_secs: f64,
    /// Explicit end of the event, if the tagger recorded one.
    pub end_secs: Option<f64>,
    /// Human-readable label ("Goal", "Tackle", ...).
    pub label: String,
    /// Free-form attributes (player, team, outcome, ...).
    pub metadata: BTreeMap<String, String>,
}

impl EventTag {
    /// Creates a tag without an explicit end and without metadata.
    #[must_use]
    pub fn new(id: impl Into<TagId>, start_secs: f64, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start_secs,
            end_secs: None,
            label: label.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Sets an explicit end time.
    #[must_use]
    pub fn with_end(mut self, end_secs: f64) -> Self {
        self.end_secs = Some(end_secs);
        self
    }

    /// Adds one metadata attribute.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// End of the highlight: the explicit end, or `start + window`.
    #[must_use]
    pub fn effective_end(&self, window: HighlightWindow) -> f64 {
        self.end_secs
            .unwrap_or(self.start_secs + window.value())
    }

    /// Returns true if the tag window `[start, effective_end)` contains `time_secs`.
    ///
    /// This is the reference definition the sweep index must agree with.
    #[must_use]
    pub fn is_active_at(&self, time_secs: f64, window: HighlightWindow) -> bool {
        self.start_secs <= time_secs && time_secs < self.effective_end(window)
    }
}
