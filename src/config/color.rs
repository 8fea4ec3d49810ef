// SPDX-License-Identifier: MPL-2.0
//! Hex color values for the settings file.
//!
//! Colors are stored as `#RRGGBB` or `#RRGGBBAA` strings in TOML and kept
//! as raw bytes so that a value read back from the file compares equal to
//! the value that was written.

use iced::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An sRGB color with alpha, parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 4]);

/// Reasons a hex color string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexColorError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("color must have 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits in color: {0}")]
    InvalidDigit(String),
}

impl HexColor {
    /// Creates an opaque color from its red, green and blue bytes.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 0xFF])
    }

    /// Creates a color from its red, green, blue and alpha bytes.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Returns the raw `[r, g, b, a]` bytes.
    #[must_use]
    pub fn bytes(self) -> [u8; 4] {
        self.0
    }

    /// Converts to an iced color.
    #[must_use]
    pub fn to_color(self) -> Color {
        let [r, g, b, a] = self.0;
        Color::from_rgba8(r, g, b, f32::from(a) / 255.0)
    }
}

impl From<HexColor> for Color {
    fn from(value: HexColor) -> Self {
        value.to_color()
    }
}

impl FromStr for HexColor {
    type Err = ParseHexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or(ParseHexColorError::MissingHash)?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseHexColorError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseHexColorError::InvalidDigit(digits.to_string()));
        }

        let mut bytes = [0xFF_u8; 4];
        for (slot, i) in bytes.iter_mut().zip((0..digits.len()).step_by(2)) {
            *slot = u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ParseHexColorError::InvalidDigit(digits.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == 0xFF {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|err| D::Error::custom(format!("invalid color {raw:?}: {err}")))
    }
}
