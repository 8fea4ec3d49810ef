// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered collection of visible toasts. It limits
//! how many are visible (evicting the oldest), arms one auto-dismiss timer
//! per toast, and removes toasts by id, by kind, or all at once. Every
//! mutation is followed by exactly one [`Change`] event.

use super::clock::{Clock, SystemClock};
use super::kind::NotificationKind;
use super::notification::{Notification, NotificationId};
use super::observer::{Change, ChangeCause, DismissReason, Observers, SubscriptionId};
use super::timer::{TimerHandle, TimerQueue};
use crate::config::{SharedConfig, MIN_MAX_TOASTS};
use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::mpsc;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick(Instant),
}

/// A visible notification and its pending timer.
#[derive(Debug)]
struct Entry {
    notification: Notification,
    timer: Option<TimerHandle>,
}

/// Manages the visible notifications.
#[derive(Debug)]
pub struct Manager<C = SystemClock> {
    /// Visible notifications, oldest first.
    active: VecDeque<Entry>,
    timers: TimerQueue,
    config: SharedConfig,
    clock: C,
    observers: Observers,
}

impl Manager<SystemClock> {
    /// Creates an empty manager reading settings from `config`.
    #[must_use]
    pub fn new(config: SharedConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new(SharedConfig::default())
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an empty manager driven by `clock`.
    #[must_use]
    pub fn with_clock(config: SharedConfig, clock: C) -> Self {
        Self {
            active: VecDeque::new(),
            timers: TimerQueue::new(),
            config,
            clock,
            observers: Observers::default(),
        }
    }

    /// Returns the configuration handle this manager reads.
    #[must_use]
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Shows a new notification and returns it.
    ///
    /// `duration_secs` overrides the configured default. A non-positive
    /// duration keeps the toast until it is dismissed explicitly. The
    /// visible-count limit is enforced before returning: the oldest toasts
    /// are evicted, the new one is always admitted.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_secs: Option<f64>,
    ) -> Notification {
        let config = self.config.current();
        let now = self.clock.now();
        let notification = Notification::new(
            message,
            kind,
            config.resolve_duration_secs(duration_secs),
            now,
        );
        let id = notification.id();

        let timer = notification
            .auto_dismiss_after()
            .and_then(|ttl| now.checked_add(ttl))
            .map(|deadline| self.timers.arm(id, deadline));

        tracing::debug!(
            %id,
            kind = notification.kind().glyph(),
            duration_secs = notification.duration_secs(),
            sticky = timer.is_none(),
            "showing toast"
        );

        self.active.push_back(Entry {
            notification: notification.clone(),
            timer,
        });
        let evicted = self.enforce_limit(config.max_toasts());

        self.emit(ChangeCause::Shown { id, evicted });
        notification
    }

    /// Shows a success notification with the configured duration.
    pub fn success(&mut self, message: impl Into<String>) -> Notification {
        self.show(message, NotificationKind::Success, None)
    }

    /// Shows an error notification with the configured duration.
    pub fn error(&mut self, message: impl Into<String>) -> Notification {
        self.show(message, NotificationKind::Error, None)
    }

    /// Shows a warning notification with the configured duration.
    pub fn warning(&mut self, message: impl Into<String>) -> Notification {
        self.show(message, NotificationKind::Warning, None)
    }

    /// Shows an info notification with the configured duration.
    pub fn info(&mut self, message: impl Into<String>) -> Notification {
        self.show(message, NotificationKind::Info, None)
    }

    /// Dismisses a notification.
    ///
    /// Returns `true` if it was visible. Dismissing a notification that is
    /// already gone changes nothing and emits no event.
    pub fn dismiss(&mut self, notification: &Notification) -> bool {
        self.dismiss_id(notification.id())
    }

    /// Dismisses a notification by its ID.
    pub fn dismiss_id(&mut self, id: NotificationId) -> bool {
        self.remove_with_reason(id, DismissReason::Dismissed)
    }

    /// Dismisses every notification and cancels every timer.
    ///
    /// Emits a single event, even when nothing was visible.
    pub fn dismiss_all(&mut self) {
        let ids: Vec<NotificationId> = self
            .active
            .drain(..)
            .map(|entry| entry.notification.id())
            .collect();
        self.timers.clear();

        tracing::debug!(count = ids.len(), "dismissing all toasts");
        self.emit_removed(ids, DismissReason::Cleared);
    }

    /// Dismisses every notification whose kind shares `kind`'s glyph.
    ///
    /// The remaining notifications keep their order. Returns how many were
    /// removed; a single event is emitted when at least one was.
    pub fn dismiss_by_kind(&mut self, kind: &NotificationKind) -> usize {
        let mut removed = Vec::new();
        let timers = &mut self.timers;
        self.active.retain(|entry| {
            if entry.notification.kind().matches_category(kind) {
                if let Some(handle) = entry.timer {
                    timers.cancel(handle);
                }
                removed.push(entry.notification.id());
                false
            } else {
                true
            }
        });

        let count = removed.len();
        if count > 0 {
            tracing::debug!(count, kind = kind.glyph(), "dismissing toasts by kind");
            self.emit_removed(removed, DismissReason::KindMatched);
        }
        count
    }

    /// Fires every timer that is due at the clock's current time.
    ///
    /// Timers fire in deadline order, each as its own removal event.
    /// Returns the ids that expired.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now();
        let mut expired = Vec::new();

        while let Some(handle) = self.timers.pop_due(now) {
            let id = handle.notification();
            if let Some(pos) = self.position(id) {
                self.active.remove(pos);
                tracing::debug!(%id, "toast expired");
                self.emit_removed(vec![id], DismissReason::Expired);
                expired.push(id);
            }
        }

        if !expired.is_empty() {
            tracing::trace!(count = expired.len(), remaining = self.active.len(), "tick");
        }
        expired
    }

    /// Handles an expiry delivered from outside the manager's own timers.
    ///
    /// No-op if the notification is no longer visible.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.remove_with_reason(id, DismissReason::Expired)
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss_id(*id);
            }
            Message::Tick(_instant) => {
                self.tick();
            }
        }
    }

    /// Returns the visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|entry| &entry.notification)
    }

    /// Returns an owned copy of the visible notifications, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.visible().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether any auto-dismiss timer is pending.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Returns the number of pending auto-dismiss timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns when the next auto-dismiss timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Registers a callback invoked after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Change) + Send + 'static,
    {
        self.observers.subscribe(Box::new(callback))
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Returns a channel receiving every subsequent change.
    ///
    /// The channel is dropped from the subscriber list once the receiver is gone.
    pub fn watch(&mut self) -> mpsc::UnboundedReceiver<Change> {
        self.observers.watch()
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.active
            .iter()
            .position(|entry| entry.notification.id() == id)
    }

    fn remove_with_reason(&mut self, id: NotificationId, reason: DismissReason) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        if let Some(entry) = self.active.remove(pos) {
            if let Some(handle) = entry.timer {
                self.timers.cancel(handle);
            }
        }
        tracing::debug!(%id, ?reason, "dismissing toast");
        self.emit_removed(vec![id], reason);
        true
    }

    /// Evicts from the head until at most `max` notifications remain.
    fn enforce_limit(&mut self, max: usize) -> Vec<NotificationId> {
        let max = max.max(MIN_MAX_TOASTS);
        let mut evicted = Vec::new();
        while self.active.len() > max {
            let Some(entry) = self.active.pop_front() else {
                break;
            };
            if let Some(handle) = entry.timer {
                self.timers.cancel(handle);
            }
            let id = entry.notification.id();
            tracing::debug!(%id, reason = ?DismissReason::Evicted, max, "evicting toast");
            evicted.push(id);
        }
        evicted
    }

    fn emit_removed(&mut self, ids: Vec<NotificationId>, reason: DismissReason) {
        let animation = self.config.current().animation_duration();
        self.emit(ChangeCause::Removed {
            ids,
            reason,
            animation,
        });
    }

    fn emit(&mut self, cause: ChangeCause) {
        if self.observers.is_empty() {
            return;
        }
        let change = Change {
            cause,
            visible: self.snapshot(),
        };
        self.observers.emit(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notifications::clock::ManualClock;
    use iced::Color;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn config_with(max: usize, default_secs: f64) -> SharedConfig {
        let mut config = Config::default();
        config.behavior.max_toasts = Some(max);
        config.behavior.default_duration_secs = Some(default_secs);
        SharedConfig::new(config)
    }

    fn manager(max: usize, default_secs: f64) -> (Manager<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let manager = Manager::with_clock(config_with(max, default_secs), clock.clone());
        (manager, clock)
    }

    fn messages<C: Clock>(manager: &Manager<C>) -> Vec<String> {
        manager.visible().map(|n| n.message().to_string()).collect()
    }

    fn record(manager: &mut Manager<ManualClock>) -> Arc<Mutex<Vec<Change>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        manager.subscribe(move |change| sink.lock().unwrap().push(change.clone()));
        log
    }

    #[test]
    fn new_manager_is_empty() {
        let manager: Manager = Manager::default();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn show_appends_in_insertion_order() {
        let (mut manager, _) = manager(5, 100.0);
        manager.info("a");
        manager.success("b");
        manager.error("c");

        assert_eq!(messages(&manager), ["a", "b", "c"]);
    }

    #[test]
    fn show_defaults_duration_from_config() {
        let (mut manager, _) = manager(5, 100.0);
        let explicit = manager.show("x", NotificationKind::Info, Some(2.0));
        let implicit = manager.show("y", NotificationKind::Info, None);

        assert_eq!(explicit.duration_secs(), 2.0);
        assert_eq!(implicit.duration_secs(), 100.0);
    }

    #[test]
    fn show_falls_back_to_builtin_duration() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(SharedConfig::new(Config::empty()), clock);
        assert_eq!(manager.info("x").duration_secs(), 3.0);
    }

    #[test]
    fn exceeding_the_limit_evicts_oldest_first() {
        let (mut manager, _) = manager(2, 100.0);
        manager.info("a");
        manager.info("b");
        manager.info("c");

        assert_eq!(messages(&manager), ["b", "c"]);
        assert_eq!(manager.pending_timers(), 2);
    }

    #[test]
    fn scenario_evict_then_dismiss_by_kind() {
        let (mut manager, _) = manager(2, 100.0);
        manager.show("a", NotificationKind::Info, None);
        manager.show("b", NotificationKind::Info, None);
        manager.show("c", NotificationKind::Info, None);
        assert_eq!(messages(&manager), ["b", "c"]);

        assert_eq!(manager.dismiss_by_kind(&NotificationKind::Info), 2);
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn zero_limit_still_admits_newest() {
        let (mut manager, _) = manager(0, 100.0);
        manager.info("a");
        let newest = manager.info("b");

        assert_eq!(manager.len(), 1);
        assert!(manager.contains(newest.id()));
    }

    #[test]
    fn limit_change_applies_on_next_show() {
        let (mut manager, _) = manager(5, 100.0);
        for name in ["a", "b", "c", "d"] {
            manager.info(name);
        }
        let mut smaller = Config::default();
        smaller.behavior.max_toasts = Some(2);
        manager.config().install(smaller);

        manager.info("e");
        assert_eq!(messages(&manager), ["d", "e"]);
    }

    #[test]
    fn dismiss_removes_and_cancels_timer() {
        let (mut manager, _) = manager(5, 100.0);
        let a = manager.info("a");
        manager.info("b");

        assert!(manager.dismiss(&a));
        assert_eq!(messages(&manager), ["b"]);
        assert_eq!(manager.pending_timers(), 1);
    }

    #[test]
    fn dismiss_absent_is_a_silent_no_op() {
        let (mut manager, _) = manager(5, 100.0);
        let a = manager.info("a");
        manager.info("b");
        assert!(manager.dismiss(&a));
        let log = record(&mut manager);

        assert!(!manager.dismiss(&a));
        assert_eq!(messages(&manager), ["b"]);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn dismiss_all_empties_and_emits_once() {
        let (mut manager, _) = manager(5, 100.0);
        manager.info("a");
        manager.warning("b");
        let log = record(&mut manager);

        manager.dismiss_all();
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());

        manager.dismiss_all();
        let log = log.lock().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].removed().len(), 2);
        assert!(log[1].removed().is_empty());
    }

    #[test]
    fn dismiss_by_kind_preserves_order_of_the_rest() {
        let (mut manager, _) = manager(10, 100.0);
        manager.info("i1");
        manager.error("e1");
        manager.info("i2");
        manager.warning("w1");
        manager.error("e2");

        assert_eq!(manager.dismiss_by_kind(&NotificationKind::Error), 2);
        assert_eq!(messages(&manager), ["i1", "i2", "w1"]);
        assert_eq!(manager.pending_timers(), 3);
    }

    #[test]
    fn dismiss_by_kind_matches_custom_kinds_by_glyph() {
        let (mut manager, _) = manager(10, 100.0);
        let star_red = NotificationKind::custom("\u{2605}", Color::from_rgb(1.0, 0.0, 0.0));
        let star_blue = NotificationKind::custom("\u{2605}", Color::from_rgb(0.0, 0.0, 1.0));
        manager.show("red", star_red.clone(), None);
        manager.show("blue", star_blue, None);
        manager.info("plain");

        assert_eq!(manager.dismiss_by_kind(&star_red), 2);
        assert_eq!(messages(&manager), ["plain"]);
    }

    #[test]
    fn dismiss_by_kind_without_match_emits_nothing() {
        let (mut manager, _) = manager(5, 100.0);
        manager.info("a");
        let log = record(&mut manager);

        assert_eq!(manager.dismiss_by_kind(&NotificationKind::Success), 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn tick_expires_due_notifications_in_deadline_order() {
        let (mut manager, clock) = manager(5, 100.0);
        let long = manager.show("long", NotificationKind::Info, Some(3.0));
        let short = manager.show("short", NotificationKind::Info, Some(1.0));
        manager.show("never", NotificationKind::Info, Some(10.0));

        clock.advance(Duration::from_millis(999));
        assert!(manager.tick().is_empty());

        clock.advance(Duration::from_secs(3));
        assert_eq!(manager.tick(), vec![short.id(), long.id()]);
        assert_eq!(messages(&manager), ["never"]);
    }

    #[test]
    fn zero_duration_never_auto_dismisses() {
        let (mut manager, clock) = manager(5, 100.0);
        let sticky = manager.show("x", NotificationKind::Info, Some(0.0));

        assert!(manager.tick().is_empty());
        assert!(manager.contains(sticky.id()));

        clock.advance(Duration::from_secs(3600));
        manager.tick();
        assert!(manager.contains(sticky.id()));
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn negative_duration_is_sticky() {
        let (mut manager, clock) = manager(5, 100.0);
        let sticky = manager.show("x", NotificationKind::Warning, Some(-1.0));
        clock.advance(Duration::from_secs(60));
        manager.tick();
        assert!(manager.contains(sticky.id()));
    }

    #[test]
    fn expiry_after_removal_changes_nothing() {
        let (mut manager, clock) = manager(1, 1.0);
        let first = manager.info("first");
        manager.info("second");
        let log = record(&mut manager);

        assert!(!manager.expire(first.id()));
        clock.advance(Duration::from_millis(500));
        assert!(manager.tick().is_empty());
        assert_eq!(messages(&manager), ["second"]);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn external_expire_removes_visible_notification() {
        let (mut manager, _) = manager(5, 100.0);
        let a = manager.info("a");

        assert!(manager.expire(a.id()));
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn next_deadline_follows_earliest_timer() {
        let (mut manager, clock) = manager(5, 100.0);
        let start = clock.now();
        manager.show("a", NotificationKind::Info, Some(5.0));
        let b = manager.show("b", NotificationKind::Info, Some(2.0));

        assert_eq!(manager.next_deadline(), Some(start + Duration::from_secs(2)));
        manager.dismiss(&b);
        assert_eq!(manager.next_deadline(), Some(start + Duration::from_secs(5)));
    }

    #[test]
    fn show_emits_one_event_covering_evictions() {
        let (mut manager, _) = manager(1, 100.0);
        let a = manager.info("a");
        let log = record(&mut manager);
        let b = manager.info("b");

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(
            log[0].cause,
            ChangeCause::Shown {
                id: b.id(),
                evicted: vec![a.id()],
            }
        );
        assert_eq!(log[0].visible, vec![b]);
    }

    #[test]
    fn removal_events_carry_animation_hint() {
        let (mut manager, _) = manager(5, 100.0);
        let a = manager.info("a");
        let log = record(&mut manager);
        manager.dismiss(&a);

        let log = log.lock().unwrap();
        match &log[0].cause {
            ChangeCause::Removed {
                ids,
                reason,
                animation,
            } => {
                assert_eq!(ids, &vec![a.id()]);
                assert_eq!(*reason, DismissReason::Dismissed);
                assert_eq!(*animation, Duration::from_millis(300));
            }
            ChangeCause::Shown { .. } => panic!("expected removal"),
        }
    }

    #[test]
    fn handle_message_dismiss() {
        let (mut manager, _) = manager(5, 100.0);
        let n = manager.info("test");

        manager.update(&Message::Dismiss(n.id()));
        assert!(manager.is_empty());
    }

    #[test]
    fn handle_message_tick_uses_manager_clock() {
        let (mut manager, clock) = manager(5, 1.0);
        manager.info("test");

        manager.update(&Message::Tick(Instant::now()));
        assert_eq!(manager.len(), 1);

        clock.advance(Duration::from_secs(1));
        manager.update(&Message::Tick(Instant::now()));
        assert!(manager.is_empty());
    }

    #[test]
    fn unsubscribe_stops_callbacks() {
        let (mut manager, _) = manager(5, 100.0);
        let log = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&log);
        let id = manager.subscribe(move |_| *sink.lock().unwrap() += 1);

        manager.info("a");
        assert!(manager.unsubscribe(id));
        manager.info("b");
        assert_eq!(*log.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn watch_channel_receives_changes_in_order() {
        let (mut manager, _) = manager(5, 100.0);
        let mut rx = manager.watch();

        let a = manager.info("a");
        manager.dismiss(&a);

        let shown = rx.recv().await.expect("shown event");
        assert!(matches!(shown.cause, ChangeCause::Shown { id, .. } if id == a.id()));
        let removed = rx.recv().await.expect("removed event");
        assert_eq!(removed.removed(), &[a.id()]);
        assert!(removed.visible.is_empty());
    }
}
