//! Delayed tasks over virtual time.
//!
//! [`TimerQueue`] replaces `setTimeout`: tasks are plain values scheduled at
//! `now + delay`, and the owner pops them as it advances the clock. Nothing
//! here sleeps; the owner decides whether "now" follows a real clock (see
//! [`crate::runtime`]) or is stepped by a test.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task, usable with [`TimerQueue::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A queue of tasks keyed by deadline.
///
/// Tasks with equal deadlines fire in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<(Duration, u64), T>,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time, measured from queue creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((self.now.saturating_add(delay), seq), task);
        TimerId(seq)
    }

    /// Cancel a pending task. Returns the task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let key = self.pending.keys().find(|(_, seq)| *seq == id.0).copied()?;
        self.pending.remove(&key)
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove and return the earliest task due at or before `until`, moving
    /// the clock to its deadline.
    ///
    /// Call repeatedly until `None`, then [`advance_to`](Self::advance_to)
    /// `until`. Tasks scheduled while draining are picked up if they fall due
    /// before `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (&(deadline, seq), _) = self.pending.iter().next()?;
        if deadline > until {
            return None;
        }
        let task = self.pending.remove(&(deadline, seq))?;
        self.now = self.now.max(deadline);
        Some(task)
    }

    /// Move the clock forward to `until`. Never moves backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
