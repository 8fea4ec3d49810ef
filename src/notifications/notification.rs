// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use super::kind::NotificationKind;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A toast to be displayed to the user.
///
/// Every field is fixed at creation. Two notifications are equal when they
/// share an id.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    /// Requested time-to-live in seconds, as resolved at creation.
    duration_secs: f64,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn new(
        message: impl Into<String>,
        kind: NotificationKind,
        duration_secs: f64,
        created_at: Instant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            kind,
            duration_secs,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> &NotificationKind {
        &self.kind
    }

    /// Returns the requested time-to-live in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification at `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Returns how long after creation this notification dismisses itself.
    ///
    /// `None` means it stays until dismissed explicitly: zero, negative,
    /// NaN and unrepresentably large durations are all sticky.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        if self.duration_secs > 0.0 {
            Duration::try_from_secs_f64(self.duration_secs).ok()
        } else {
            None
        }
    }

    /// Returns whether this notification stays until dismissed explicitly.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.auto_dismiss_after().is_none()
    }
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Notification {}
