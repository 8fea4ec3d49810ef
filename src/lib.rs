// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient notifications ("toasts") in Iced applications.
//!
//! It queues, limits, times out and dismisses short messages, and renders
//! them as an overlay positioned relative to the window.
//!
//! - [`notifications`] - The lifecycle manager and its data model
//! - [`config`] - Settings bundle, defaults and TOML persistence
//! - [`ui`] - Overlay widgets and the tick subscription
//!
//! # Example
//!
//! ```
//! use iced_toast::config::{Config, SharedConfig};
//! use iced_toast::notifications::{Manager, NotificationKind};
//!
//! let mut config = Config::default();
//! config.behavior.max_toasts = Some(2);
//! let shared = SharedConfig::new(config);
//!
//! let mut manager = Manager::new(shared.clone());
//! manager.info("a");
//! manager.info("b");
//! manager.show("c", NotificationKind::Success, Some(10.0));
//!
//! let messages: Vec<_> = manager.visible().map(|n| n.message()).collect();
//! assert_eq!(messages, ["b", "c"]);
//! ```

pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;
