// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Built-in visual constants for toasts. Anything the user can configure
lives in [`crate::config`]; these are the values the configuration does
not cover.

## Organization

- **Palette**: Kind accent colors and grays
- **Opacity**: Standardized opacity levels
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale

## Examples

```
use iced_toast::ui::design_tokens::{opacity, palette};
use iced::Color;

let hover = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::GRAY_400
};
assert!(hover.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Gap between glyph, message and dismiss button.
    pub const TOAST_GAP: f32 = 12.0;

    /// Padding around the dismiss button.
    pub const DISMISS_PADDING: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Kind glyph
    pub const GLYPH: f32 = 16.0;

    /// Message text
    pub const BODY: f32 = 14.0;

    /// Dismiss cross
    pub const DISMISS: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Accent border around a toast
    pub const WIDTH_MD: f32 = 2.0;
}

/// Shadow y-offset below each toast card.
pub const SHADOW_OFFSET_Y: f32 = 2.0;

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < 1.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);

    assert!(sizing::TOAST_WIDTH > 0.0);

    assert!(typography::GLYPH > typography::BODY);
    assert!(typography::BODY > typography::DISMISS);

    assert!(border::WIDTH_MD > 0.0);
};
