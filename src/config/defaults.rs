// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! These are the last tier of the fallback chain: a parameter not given at
//! the call site and not set in the installed [`Config`](super::Config)
//! resolves to the constant defined here.
//!
//! # Categories
//!
//! - **Lifecycle**: Toast duration, visible count, animation timing
//! - **Layout**: Spacing and paddings around the toast stack
//! - **Surface**: Corner radius and shadow of each toast card

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Time a toast stays visible when neither the caller nor the config says otherwise (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 3.0;

/// Maximum number of toasts visible at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Smallest visible count the manager enforces; the newest toast is always admitted.
pub const MIN_MAX_TOASTS: usize = 1;

/// Duration hint for insertion/removal animations (in seconds).
pub const DEFAULT_ANIMATION_DURATION_SECS: f64 = 0.3;

/// Interval at which the UI drives pending auto-dismiss timers (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical gap between stacked toasts.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Horizontal padding inside a toast and around the stack.
pub const DEFAULT_HORIZONTAL_PADDING: f32 = 16.0;

/// Vertical padding inside a toast.
pub const DEFAULT_VERTICAL_PADDING: f32 = 12.0;

// ==========================================================================
// Surface Defaults
// ==========================================================================

/// Corner radius of a toast card.
pub const DEFAULT_CORNER_RADIUS: f32 = 8.0;

/// Blur radius of a toast card's drop shadow.
pub const DEFAULT_SHADOW_RADIUS: f32 = 4.0;

/// Opacity of a toast card's drop shadow (0.0 to 1.0).
pub const DEFAULT_SHADOW_OPACITY: f32 = 0.1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_SECS > 0.0);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(MIN_MAX_TOASTS > 0);
    assert!(DEFAULT_ANIMATION_DURATION_SECS >= 0.0);
    assert!(TICK_INTERVAL_MS > 0);

    assert!(DEFAULT_SPACING >= 0.0);
    assert!(DEFAULT_HORIZONTAL_PADDING >= 0.0);
    assert!(DEFAULT_VERTICAL_PADDING >= 0.0);

    assert!(DEFAULT_CORNER_RADIUS >= 0.0);
    assert!(DEFAULT_SHADOW_RADIUS >= 0.0);
    assert!(DEFAULT_SHADOW_OPACITY >= 0.0 && DEFAULT_SHADOW_OPACITY <= 1.0);
};
