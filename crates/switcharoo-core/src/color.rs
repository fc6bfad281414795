//! RGBA colors, parsed from and serialized as hex strings.

use serde::{Deserialize, Serialize};

/// RGBA color with components in the range [0.0, 1.0].
///
/// Serializes as `#rrggbbaa` so colors read naturally in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Black
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// White, the default knob color
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Pure green, the default "on" color
    pub const GREEN: Self = Self::opaque(0.0, 1.0, 0.0);
    /// Mid gray (`#808080`), the default "off" color
    pub const GRAY: Self = Self::opaque(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns an error if the string has the wrong length or contains
    /// non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Convert to `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            Self::to_byte(self.r),
            Self::to_byte(self.g),
            Self::to_byte(self.b)
        )
    }

    /// Convert to `#rrggbbaa`.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        format!("{}{:02x}", self.to_hex(), Self::to_byte(self.a))
    }

    fn to_byte(c: f32) -> u8 {
        (c * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_with_alpha()
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    /// Invalid string length
    #[error("invalid hex color length {0} (expected 6 or 8 digits)")]
    InvalidLength(usize),
}
