// SPDX-License-Identifier: MPL-2.0
//! Bounded activity log of the playback controller.
//!
//! The log keeps the most recent [`DiagnosticEvent`]s up to its
//! [`LogCapacity`] and maintains per-type counts of the retained events, so a
//! report can be built without rescanning. Events pushed out by newer ones
//! are counted separately.

use std::collections::{BTreeMap, VecDeque};

use crate::domain::diagnostics::LogCapacity;

use super::{ActivityReport, DiagnosticEvent, DiagnosticEventKind};

/// Most recent controller activity, oldest first.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    events: VecDeque<DiagnosticEvent>,
    capacity: LogCapacity,
    counts: BTreeMap<&'static str, usize>,
    evicted: u64,
}

impl ActivityLog {
    #[must_use]
    pub fn new(capacity: LogCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity,
            counts: BTreeMap::new(),
            evicted: 0,
        }
    }

    /// Records `kind` with the current timestamp.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.push(DiagnosticEvent::new(kind));
    }

    /// Appends an event, evicting the oldest one when the log is full.
    pub fn push(&mut self, event: DiagnosticEvent) {
        if self.events.len() >= self.capacity.value() {
            if let Some(oldest) = self.events.pop_front() {
                self.uncount(oldest.kind.type_name());
                self.evicted += 1;
            }
        }
        *self.counts.entry(event.kind.type_name()).or_insert(0) += 1;
        self.events.push_back(event);
    }

    fn uncount(&mut self, type_name: &'static str) {
        if let Some(count) = self.counts.get_mut(type_name) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(type_name);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> LogCapacity {
        self.capacity
    }

    /// Retained events per type name (`user_action`, `error`, ...).
    #[must_use]
    pub fn counts(&self) -> &BTreeMap<&'static str, usize> {
        &self.counts
    }

    /// Number of retained events of one type.
    #[must_use]
    pub fn count(&self, type_name: &str) -> usize {
        self.counts.get(type_name).copied().unwrap_or(0)
    }

    /// Events dropped to make room since the log was created.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Snapshot of the log for JSON export.
    #[must_use]
    pub fn report(&self) -> ActivityReport {
        ActivityReport::from_log(self)
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(LogCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ACTIVITY_LOG_CAPACITY;
    use crate::diagnostics::UserAction;
    use crate::domain::diagnostics::log_capacity_bounds;

    fn warning(n: usize) -> DiagnosticEventKind {
        DiagnosticEventKind::Warning {
            message: format!("stale callback {n}"),
        }
    }

    fn play() -> DiagnosticEventKind {
        DiagnosticEventKind::UserAction {
            action: UserAction::Play,
            outcome: "pending".to_string(),
        }
    }

    #[test]
    fn default_capacity_matches_config() {
        assert_eq!(
            ActivityLog::default().capacity().value(),
            DEFAULT_ACTIVITY_LOG_CAPACITY
        );
    }

    #[test]
    fn counts_follow_recorded_types() {
        let mut log = ActivityLog::default();
        log.record(play());
        log.record(warning(0));
        log.record(play());

        assert_eq!(log.len(), 3);
        assert_eq!(log.count("user_action"), 2);
        assert_eq!(log.count("warning"), 1);
        assert_eq!(log.count("error"), 0);
    }

    #[test]
    fn full_log_evicts_oldest_and_its_count() {
        let capacity = log_capacity_bounds::MIN;
        let mut log = ActivityLog::new(LogCapacity::new(capacity));
        log.record(play());
        for n in 0..capacity {
            log.record(warning(n));
        }

        assert_eq!(log.len(), capacity);
        assert_eq!(log.evicted(), 1);
        assert_eq!(log.count("user_action"), 0);
        assert!(!log.counts().contains_key("user_action"));
        assert_eq!(log.count("warning"), capacity);

        let first = log.iter().next().map(|e| e.kind.clone());
        assert_eq!(first, Some(warning(0)));
    }

    #[test]
    fn new_log_is_empty() {
        let log = ActivityLog::new(LogCapacity::new(64));
        assert!(log.is_empty());
        assert!(log.counts().is_empty());
        assert_eq!(log.evicted(), 0);
    }
}
