// SPDX-License-Identifier: MPL-2.0
//! Change events and their subscribers.
//!
//! The manager emits exactly one [`Change`] per mutating operation, after
//! the operation is complete, synchronously and in call order.

use super::notification::{Notification, NotificationId};
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;

/// Why notifications left the visible collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Closed by id, usually by the user's close gesture.
    Dismissed,
    /// Its auto-dismiss timer fired.
    Expired,
    /// Pushed out by the visible-count limit.
    Evicted,
    /// Removed by a dismiss-all.
    Cleared,
    /// Removed by a dismiss-by-kind.
    KindMatched,
}

/// What happened to the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeCause {
    /// A notification was appended; `evicted` lists the oldest entries the
    /// visible-count limit removed to make room.
    Shown {
        id: NotificationId,
        evicted: Vec<NotificationId>,
    },
    /// Notifications were removed; `animation` is the removal animation hint.
    Removed {
        ids: Vec<NotificationId>,
        reason: DismissReason,
        animation: Duration,
    },
}

/// A collection-changed event.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub cause: ChangeCause,
    /// The visible collection after the change, oldest first.
    pub visible: Vec<Notification>,
}

impl Change {
    /// Returns the ids removed by this change, including evictions.
    #[must_use]
    pub fn removed(&self) -> &[NotificationId] {
        match &self.cause {
            ChangeCause::Shown { evicted, .. } => evicted,
            ChangeCause::Removed { ids, .. } => ids,
        }
    }
}

/// Identifies a callback registered with `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Change) + Send>;

/// Registered change subscribers.
#[derive(Default)]
pub(crate) struct Observers {
    callbacks: Vec<(SubscriptionId, Callback)>,
    channels: Vec<mpsc::UnboundedSender<Change>>,
    next_id: u64,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(registered, _)| *registered != id);
        self.callbacks.len() < before
    }

    pub(crate) fn watch(&mut self) -> mpsc::UnboundedReceiver<Change> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.channels.push(tx);
        rx
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len() + self.channels.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.callbacks.is_empty() && self.channels.is_empty()
    }

    /// Delivers `change` to every subscriber; channels whose receiver is gone are dropped.
    pub(crate) fn emit(&mut self, change: Change) {
        for (_, callback) in &mut self.callbacks {
            callback(&change);
        }
        self.channels.retain(|tx| tx.send(change.clone()).is_ok());
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("callbacks", &self.callbacks.len())
            .field("channels", &self.channels.len())
            .finish()
    }
}
