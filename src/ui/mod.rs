// SPDX-License-Identifier: MPL-2.0
//! Iced presentation of the toast collection.
//!
//! Follows the Elm-style "state down, messages up" pattern: the overlay
//! reads the manager and emits [`Message`](crate::notifications::NotificationMessage)
//! values the host routes back to [`Manager::update`](crate::notifications::Manager::update).
//!
//! - [`toast`] - Toast card and overlay widgets
//! - [`subscription`] - Tick subscription for auto-dismiss
//! - [`design_tokens`] - Built-in visual constants

pub mod design_tokens;
pub mod subscription;
pub mod toast;

pub use toast::{Toast, ToastStyle};
