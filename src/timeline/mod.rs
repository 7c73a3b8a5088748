// SPDX-License-Identifier: MPL-2.0
//! Timeline synchronization.
//!
//! Maps the playback position against the externally supplied tag snapshot
//! and keeps the set of active tags. Change notifications are produced only
//! when membership differs from the previous computation, not on every tick.

mod sweep;

pub use sweep::SweepIndex;

use crate::domain::timeline::{EventTag, HighlightWindow, TagId};

/// Tracks which event tags contain the current playback position.
#[derive(Debug, Clone)]
pub struct TimelineSynchronizer {
    window: HighlightWindow,
    tags: Vec<EventTag>,
    /// Tag slots ordered by start time, ties in insertion order.
    order: Vec<usize>,
    index: SweepIndex,
    position: f64,
    active_ids: Vec<TagId>,
    active: Vec<EventTag>,
}

impl TimelineSynchronizer {
    /// Creates a synchronizer with no tags at position 0.
    #[must_use]
    pub fn new(window: HighlightWindow) -> Self {
        Self {
            window,
            tags: Vec::new(),
            order: Vec::new(),
            index: SweepIndex::default(),
            position: 0.0,
            active_ids: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Replaces the tag snapshot and recomputes the active set at the
    /// current position.
    ///
    /// Returns the new active set if its membership changed.
    pub fn set_tags(&mut self, tags: Vec<EventTag>) -> Option<&[EventTag]> {
        self.tags = tags;
        self.rebuild_index();
        self.refresh()
    }

    /// Changes the highlight window used for tags without an explicit end.
    pub fn set_window(&mut self, window: HighlightWindow) -> Option<&[EventTag]> {
        self.window = window;
        self.rebuild_index();
        self.refresh()
    }

    /// Moves to `position_secs`.
    ///
    /// Returns the new active set if its membership changed.
    pub fn update(&mut self, position_secs: f64) -> Option<&[EventTag]> {
        if position_secs.is_nan() {
            return None;
        }
        self.position = position_secs;
        if !self.index.seek_to(position_secs) {
            return None;
        }
        self.refresh()
    }

    /// Active tags, ordered by start time (ties in insertion order).
    #[must_use]
    pub fn active(&self) -> &[EventTag] {
        &self.active
    }

    /// The current tag snapshot, in the order it was supplied.
    #[must_use]
    pub fn tags(&self) -> &[EventTag] {
        &self.tags
    }

    fn rebuild_index(&mut self) {
        let intervals: Vec<(f64, f64)> = self
            .tags
            .iter()
            .map(|tag| (tag.start_secs, tag.effective_end(self.window)))
            .collect();
        self.index = SweepIndex::new(&intervals);
        self.index.seek_to(self.position);

        let mut order: Vec<usize> = (0..self.tags.len()).collect();
        // Stable sort keeps insertion order among identical starts.
        order.sort_by(|&a, &b| self.tags[a].start_secs.total_cmp(&self.tags[b].start_secs));
        self.order = order;
    }

    /// Rebuilds the active set from the current snapshot. Membership is
    /// compared by id: edited tags are picked up without a notification.
    fn refresh(&mut self) -> Option<&[EventTag]> {
        self.active = self
            .order
            .iter()
            .filter(|&&slot| self.index.is_active(slot))
            .map(|&slot| self.tags[slot].clone())
            .collect();
        let ids: Vec<TagId> = self.active.iter().map(|tag| tag.id.clone()).collect();
        if ids == self.active_ids {
            return None;
        }
        self.active_ids = ids;
        Some(&self.active)
    }
}

impl Default for TimelineSynchronizer {
    fn default() -> Self {
        Self::new(HighlightWindow::default())
    }
}

/// Reference computation of the active set by a full scan.
///
/// Used to cross-check the sweep index; the synchronizer never calls it.
#[must_use]
pub fn scan_active(tags: &[EventTag], position_secs: f64, window: HighlightWindow) -> Vec<&EventTag> {
    let mut active: Vec<&EventTag> = tags
        .iter()
        .filter(|tag| tag.is_active_at(position_secs, window))
        .collect();
    active.sort_by(|a, b| a.start_secs.total_cmp(&b.start_secs));
    active
}
