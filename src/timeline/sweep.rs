// SPDX-License-Identifier: MPL-2.0
//! Interval-sweep index over tag boundaries.
//!
//! Every tag contributes a start and an end boundary. Boundaries are sorted
//! by time and a cursor marks how many of them lie at or before the current
//! position. Moving the position only touches the boundaries crossed, so a
//! sub-second time tick costs O(crossed) instead of O(tags).
//!
//! After `seek_to(t)`, a tag is active iff its start boundary was applied and
//! its end boundary was not, i.e. `start <= t < end`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Edge {
    Start,
    End,
}

#[derive(Debug, Clone, Copy)]
struct Boundary {
    time: f64,
    edge: Edge,
    slot: usize,
}

/// Sweep index over `[start, end)` intervals identified by slot number.
#[derive(Debug, Clone, Default)]
pub struct SweepIndex {
    boundaries: Vec<Boundary>,
    /// Number of boundaries with `time <= position`.
    cursor: usize,
    active: Vec<bool>,
    position: Option<f64>,
}

impl SweepIndex {
    /// Builds an index over `intervals`, one `(start, end)` pair per slot.
    ///
    /// Intervals with a `NaN` bound or with `end <= start` can never contain
    /// a position and are left out of the index. Infinite bounds are kept.
    #[must_use]
    pub fn new(intervals: &[(f64, f64)]) -> Self {
        let mut boundaries = Vec::with_capacity(intervals.len() * 2);
        for (slot, &(start, end)) in intervals.iter().enumerate() {
            if start.is_nan() || end.is_nan() || end <= start {
                continue;
            }
            boundaries.push(Boundary {
                time: start,
                edge: Edge::Start,
                slot,
            });
            boundaries.push(Boundary {
                time: end,
                edge: Edge::End,
                slot,
            });
        }
        boundaries.sort_by(|a, b| {
            a.time
                .total_cmp(&b.time)
                .then(a.edge.cmp(&b.edge))
                .then(a.slot.cmp(&b.slot))
        });

        Self {
            boundaries,
            cursor: 0,
            active: vec![false; intervals.len()],
            position: None,
        }
    }

    /// Moves the sweep to `position`. Returns true if any slot flipped.
    ///
    /// `NaN` positions are ignored.
    pub fn seek_to(&mut self, position: f64) -> bool {
        if position.is_nan() {
            return false;
        }
        self.position = Some(position);

        let mut flipped = false;
        while self.cursor < self.boundaries.len() && self.boundaries[self.cursor].time <= position
        {
            let boundary = self.boundaries[self.cursor];
            self.active[boundary.slot] = boundary.edge == Edge::Start;
            self.cursor += 1;
            flipped = true;
        }
        while self.cursor > 0 && self.boundaries[self.cursor - 1].time > position {
            self.cursor -= 1;
            let boundary = self.boundaries[self.cursor];
            self.active[boundary.slot] = boundary.edge == Edge::End;
            flipped = true;
        }
        flipped
    }

    /// Returns true if `slot` contains the current position.
    #[must_use]
    pub fn is_active(&self, slot: usize) -> bool {
        self.active.get(slot).copied().unwrap_or(false)
    }

    /// Last position the sweep moved to.
    #[must_use]
    pub fn position(&self) -> Option<f64> {
        self.position
    }

    /// Number of slots the index was built over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_slots(index: &SweepIndex) -> Vec<usize> {
        (0..index.len()).filter(|&s| index.is_active(s)).collect()
    }

    #[test]
    fn forward_sweep_activates_and_expires() {
        let mut index = SweepIndex::new(&[(10.0, 15.0), (12.0, 17.0)]);
        index.seek_to(11.0);
        assert_eq!(active_slots(&index), vec![0]);
        index.seek_to(13.0);
        assert_eq!(active_slots(&index), vec![0, 1]);
        index.seek_to(15.0);
        assert_eq!(active_slots(&index), vec![1]);
        index.seek_to(17.0);
        assert!(active_slots(&index).is_empty());
    }

    #[test]
    fn backward_sweep_restores_state() {
        let mut index = SweepIndex::new(&[(10.0, 15.0), (12.0, 17.0)]);
        index.seek_to(16.0);
        assert_eq!(active_slots(&index), vec![1]);
        index.seek_to(10.0);
        assert_eq!(active_slots(&index), vec![0]);
        index.seek_to(0.0);
        assert!(active_slots(&index).is_empty());
    }

    #[test]
    fn degenerate_intervals_never_activate() {
        let mut index = SweepIndex::new(&[(5.0, 5.0), (8.0, 3.0), (f64::NAN, 9.0)]);
        for t in [0.0, 3.0, 5.0, 6.0, 8.0, 9.0, 100.0] {
            index.seek_to(t);
            assert!(active_slots(&index).is_empty(), "t = {t}");
        }
    }

    #[test]
    fn open_ended_interval_stays_active() {
        let mut index = SweepIndex::new(&[(4.0, f64::INFINITY)]);
        index.seek_to(1.0e9);
        assert!(index.is_active(0));
        index.seek_to(3.0);
        assert!(!index.is_active(0));
    }

    #[test]
    fn crossing_a_whole_interval_in_one_jump_leaves_it_inactive() {
        let mut index = SweepIndex::new(&[(1.0, 2.0)]);
        assert!(index.seek_to(50.0));
        assert!(!index.is_active(0));
    }

    #[test]
    fn staying_between_boundaries_reports_no_flip() {
        let mut index = SweepIndex::new(&[(1.0, 20.0)]);
        assert!(index.seek_to(2.0));
        assert!(!index.seek_to(3.0));
        assert!(!index.seek_to(f64::NAN));
        assert_eq!(index.position(), Some(3.0));
    }
}
