// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! Each armed timer is a [`TimerHandle`] stored both in the queue and next to
//! the notification it belongs to. Cancelling removes the handle from the
//! queue immediately, so a removed notification leaves nothing behind that
//! could fire later.

use super::notification::NotificationId;
use std::collections::BTreeSet;
use std::time::Instant;

/// Handle to one armed timer.
///
/// Handles order by deadline, then by arming order, so timers sharing a
/// deadline fire in the order they were armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle {
    deadline: Instant,
    seq: u64,
    id: NotificationId,
}

impl TimerHandle {
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns the notification this timer dismisses.
    #[must_use]
    pub fn notification(&self) -> NotificationId {
        self.id
    }
}

/// Deadline-ordered set of armed timers.
#[derive(Debug, Default)]
pub struct TimerQueue {
    armed: BTreeSet<TimerHandle>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer that fires for `id` at `deadline`.
    pub fn arm(&mut self, id: NotificationId, deadline: Instant) -> TimerHandle {
        let handle = TimerHandle {
            deadline,
            seq: self.next_seq,
            id,
        };
        self.next_seq += 1;
        self.armed.insert(handle);
        handle
    }

    /// Cancels a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.armed.remove(&handle)
    }

    /// Removes and returns the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerHandle> {
        let first = *self.armed.first()?;
        if first.deadline <= now {
            self.armed.remove(&first);
            Some(first)
        } else {
            None
        }
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.first().map(|handle| handle.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }

    /// Cancels every timer.
    pub fn clear(&mut self) {
        self.armed.clear();
    }
}
