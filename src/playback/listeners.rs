// SPDX-License-Identifier: MPL-2.0
//! Listener registries for controller notifications.

use crate::domain::error::PlaybackError;
use crate::domain::playback::PlaybackStatus;
use crate::domain::timeline::EventTag;

/// Handle returned by a subscription; pass it to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type TimestampFn = Box<dyn FnMut(f64) + Send>;
type ActiveFn = Box<dyn FnMut(&[EventTag]) + Send>;
type ErrorFn = Box<dyn FnMut(&PlaybackError) + Send>;
type StatusFn = Box<dyn FnMut(PlaybackStatus) + Send>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    timestamp: Vec<(SubscriptionId, TimestampFn)>,
    active: Vec<(SubscriptionId, ActiveFn)>,
    error: Vec<(SubscriptionId, ErrorFn)>,
    status: Vec<(SubscriptionId, StatusFn)>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("timestamp", &self.timestamp.len())
            .field("active", &self.active.len())
            .field("error", &self.error.len())
            .field("status", &self.status.len())
            .finish()
    }
}

impl Listeners {
    fn next_id(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId(self.next_id)
    }

    pub fn add_timestamp(&mut self, f: TimestampFn) -> SubscriptionId {
        let id = self.next_id();
        self.timestamp.push((id, f));
        id
    }

    pub fn add_active(&mut self, f: ActiveFn) -> SubscriptionId {
        let id = self.next_id();
        self.active.push((id, f));
        id
    }

    pub fn add_error(&mut self, f: ErrorFn) -> SubscriptionId {
        let id = self.next_id();
        self.error.push((id, f));
        id
    }

    pub fn add_status(&mut self, f: StatusFn) -> SubscriptionId {
        let id = self.next_id();
        self.status.push((id, f));
        id
    }

    /// Removes a listener. Returns false if the id was unknown.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.len();
        self.timestamp.retain(|(sid, _)| *sid != id);
        self.active.retain(|(sid, _)| *sid != id);
        self.error.retain(|(sid, _)| *sid != id);
        self.status.retain(|(sid, _)| *sid != id);
        self.len() != before
    }

    fn len(&self) -> usize {
        self.timestamp.len() + self.active.len() + self.error.len() + self.status.len()
    }

    pub fn emit_timestamp(&mut self, t: f64) {
        for (_, f) in &mut self.timestamp {
            f(t);
        }
    }

    pub fn emit_active(&mut self, tags: &[EventTag]) {
        for (_, f) in &mut self.active {
            f(tags);
        }
    }

    pub fn emit_error(&mut self, err: &PlaybackError) {
        for (_, f) in &mut self.error {
            f(err);
        }
    }

    pub fn emit_status(&mut self, status: PlaybackStatus) {
        for (_, f) in &mut self.status {
            f(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::default();
        let sink = Arc::clone(&seen);
        let id = listeners.add_timestamp(Box::new(move |t| sink.lock().unwrap().push(t)));

        listeners.emit_timestamp(1.0);
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.emit_timestamp(2.0);

        assert_eq!(*seen.lock().unwrap(), vec![1.0]);
    }
}
