// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle scenarios against the public API.

use iced_toast::config::{Config, SharedConfig};
use iced_toast::notifications::{
    ChangeCause, Manager, ManualClock, NotificationId, NotificationKind,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn manager(max: usize, default_secs: f64) -> (Manager<ManualClock>, ManualClock) {
    let mut config = Config::default();
    config.behavior.max_toasts = Some(max);
    config.behavior.default_duration_secs = Some(default_secs);
    let clock = ManualClock::new();
    (
        Manager::with_clock(SharedConfig::new(config), clock.clone()),
        clock,
    )
}

fn ids(manager: &Manager<ManualClock>) -> Vec<NotificationId> {
    manager.visible().map(|n| n.id()).collect()
}

#[test]
fn size_never_exceeds_limit_and_survivors_keep_order() {
    for max in 1..=6 {
        let (mut manager, _) = manager(max, 100.0);
        let mut shown = Vec::new();

        for i in 0..20 {
            shown.push(manager.info(format!("toast-{i}")).id());
            assert!(manager.len() <= max);

            let expected_len = shown.len().min(max);
            let expected = &shown[shown.len() - expected_len..];
            assert_eq!(ids(&manager), expected);
        }
    }
}

#[test]
fn evicted_toasts_release_their_timers() {
    let (mut manager, clock) = manager(3, 5.0);
    for i in 0..10 {
        manager.info(format!("toast-{i}"));
    }
    assert_eq!(manager.pending_timers(), 3);

    clock.advance(Duration::from_secs(5));
    assert_eq!(manager.tick().len(), 3);
    assert!(manager.is_empty());
    assert!(!manager.has_pending_timers());
}

#[test]
fn scenario_max_two_then_dismiss_by_info() {
    let (mut manager, _) = manager(2, 100.0);
    let _a = manager.show("a", NotificationKind::Info, None);
    let b = manager.show("b", NotificationKind::Info, None);
    let c = manager.show("c", NotificationKind::Info, None);

    assert_eq!(ids(&manager), vec![b.id(), c.id()]);

    manager.dismiss_by_kind(&NotificationKind::Info);
    assert!(manager.is_empty());
}

#[test]
fn zero_duration_survives_zero_time_tick() {
    let (mut manager, _) = manager(5, 100.0);
    let x = manager.show("x", NotificationKind::Info, Some(0.0));

    manager.tick();
    assert!(manager.contains(x.id()));
    assert!(x.is_sticky());
}

#[test]
fn dismissal_paths_are_idempotent() {
    let (mut manager, clock) = manager(5, 1.0);
    let a = manager.info("a");
    let b = manager.error("b");
    manager.warning("c");

    assert!(manager.dismiss(&a));
    let before = ids(&manager);
    assert!(!manager.dismiss(&a));
    assert!(!manager.expire(a.id()));
    assert_eq!(ids(&manager), before);

    manager.dismiss_by_kind(&NotificationKind::Error);
    assert!(!manager.contains(b.id()));

    clock.advance(Duration::from_secs(1));
    assert_eq!(manager.tick().len(), 1);

    manager.dismiss_all();
    manager.dismiss_all();
    assert!(manager.is_empty());
}

#[test]
fn observers_see_operations_in_call_order() {
    let (mut manager, clock) = manager(2, 1.0);
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    manager.subscribe(move |change| {
        let label = match &change.cause {
            ChangeCause::Shown { evicted, .. } => format!("shown(-{})", evicted.len()),
            ChangeCause::Removed { ids, reason, .. } => format!("{reason:?}({})", ids.len()),
        };
        sink.lock().unwrap().push((label, change.visible.len()));
    });

    let a = manager.info("a");
    manager.info("b");
    manager.info("c");
    manager.dismiss(&a);
    clock.advance(Duration::from_secs(1));
    manager.tick();
    manager.dismiss_all();

    let log = log.lock().unwrap();
    let labels: Vec<(&str, usize)> = log.iter().map(|(l, n)| (l.as_str(), *n)).collect();
    assert_eq!(
        labels,
        vec![
            ("shown(-0)", 1),
            ("shown(-0)", 2),
            ("shown(-1)", 2),
            ("Expired(1)", 1),
            ("Expired(1)", 0),
            ("Cleared(0)", 0),
        ]
    );
    assert!(!log.iter().any(|(l, _)| l.starts_with("Dismissed")));
}

#[test]
fn reinstalled_config_affects_only_new_toasts() {
    let (mut manager, clock) = manager(5, 1.0);
    let early = manager.info("early");

    let mut longer = Config::default();
    longer.behavior.default_duration_secs = Some(10.0);
    manager.config().install(longer);
    let late = manager.info("late");

    clock.advance(Duration::from_secs(1));
    manager.tick();
    assert!(!manager.contains(early.id()));
    assert!(manager.contains(late.id()));
    assert_eq!(late.duration_secs(), 10.0);
}
