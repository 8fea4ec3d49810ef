// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle: notifications, their kinds, timers and the manager.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and its process-unique `NotificationId`
//! - [`kind`] - `NotificationKind` with glyph/color lookup
//! - [`manager`] - `Manager` owning the visible collection
//! - [`timer`] - Cancellable auto-dismiss timers
//! - [`clock`] - Injectable time source
//! - [`observer`] - Change events delivered after each mutation
//!
//! # Usage
//!
//! ```
//! use iced_toast::config::SharedConfig;
//! use iced_toast::notifications::{Manager, NotificationKind};
//!
//! let mut manager = Manager::new(SharedConfig::default());
//! let saved = manager.show("Image saved", NotificationKind::Success, None);
//! manager.warning("Disk almost full");
//!
//! manager.dismiss(&saved);
//! assert_eq!(manager.len(), 1);
//! ```
//!
//! # Lifecycle
//!
//! A notification is active from `show` until the first of: its timer
//! firing, `dismiss`, `dismiss_all`, a matching `dismiss_by_kind`, or
//! eviction by the visible-count limit. Dismissal is terminal.

pub mod clock;
pub mod kind;
pub mod manager;
pub mod notification;
pub mod observer;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use kind::NotificationKind;
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId};
pub use observer::{Change, ChangeCause, DismissReason, SubscriptionId};
pub use timer::{TimerHandle, TimerQueue};
