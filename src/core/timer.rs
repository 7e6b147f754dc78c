//! Virtual-time timer queue with cancelable handles.
//!
//! Timers never fire on their own. The owner pops due entries while
//! advancing its clock, which keeps delayed callbacks deterministic and
//! lets tests fast-forward without sleeping.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled timer. Cancelling an already fired or cancelled
/// timer is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    deadline: Duration,
    id: u64,
}

impl TimerHandle {
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

/// Pending timers keyed by deadline; ties fire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: BTreeMap<(Duration, u64), K>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, deadline: Duration, kind: K) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert((deadline, id), kind);
        TimerHandle { deadline, id }
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.entries.remove(&(handle.deadline, handle.id)).is_some()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(&(handle.deadline, handle.id))
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, K)> {
        let key = *self.entries.keys().next()?;
        if key.0 > now {
            return None;
        }
        self.entries.remove(&key).map(|kind| (key.0, kind))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
