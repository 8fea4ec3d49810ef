// SPDX-License-Identifier: MPL-2.0
//! Periodic tick driving auto-dismiss timers.

use crate::config::TICK_INTERVAL_MS;
use crate::notifications::manager::{Manager, Message};
use crate::notifications::Clock;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription while any auto-dismiss timer is pending.
///
/// Sticky toasts alone do not keep the subscription alive.
pub fn tick<C: Clock>(manager: &Manager<C>) -> Subscription<Message> {
    if manager.has_pending_timers() {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
