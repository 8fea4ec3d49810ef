// SPDX-License-Identifier: MPL-2.0
//! Notification kinds and their display metadata.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Glyph shown for [`NotificationKind::Success`].
pub const SUCCESS_GLYPH: &str = "\u{2714}";
/// Glyph shown for [`NotificationKind::Error`].
pub const ERROR_GLYPH: &str = "\u{2716}";
/// Glyph shown for [`NotificationKind::Warning`].
pub const WARNING_GLYPH: &str = "\u{26A0}";
/// Glyph shown for [`NotificationKind::Info`].
pub const INFO_GLYPH: &str = "\u{2139}";

/// Semantic category of a notification.
///
/// Each kind resolves to a glyph and an accent color. [`Custom`] carries
/// its own pair instead of looking one up.
///
/// [`Custom`]: NotificationKind::Custom
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotificationKind {
    /// Operation completed successfully (green check).
    Success,
    /// Operation failed (red cross).
    Error,
    /// Something needs attention but nothing failed (orange triangle).
    Warning,
    /// Neutral information (blue circle).
    #[default]
    Info,
    /// Caller-provided glyph and color.
    Custom { glyph: String, color: Color },
}

impl NotificationKind {
    /// Creates a custom kind.
    pub fn custom(glyph: impl Into<String>, color: impl Into<Color>) -> Self {
        Self::Custom {
            glyph: glyph.into(),
            color: color.into(),
        }
    }

    /// Returns the glyph displayed next to the message.
    #[must_use]
    pub fn glyph(&self) -> &str {
        match self {
            Self::Success => SUCCESS_GLYPH,
            Self::Error => ERROR_GLYPH,
            Self::Warning => WARNING_GLYPH,
            Self::Info => INFO_GLYPH,
            Self::Custom { glyph, .. } => glyph,
        }
    }

    /// Returns the accent color.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Error => palette::ERROR_500,
            Self::Warning => palette::WARNING_500,
            Self::Info => palette::INFO_500,
            Self::Custom { color, .. } => *color,
        }
    }

    /// Returns whether two kinds belong to the same category for bulk dismissal.
    ///
    /// Categories are identified by glyph: custom kinds that share a glyph
    /// match each other regardless of color.
    #[must_use]
    pub fn matches_category(&self, other: &Self) -> bool {
        self.glyph() == other.glyph()
    }
}
