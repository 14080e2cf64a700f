//! Linear RGBA colors and conversions from 8-bit channels and HTML-style strings

use crate::foundation::logging::warn_with_trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex digits had a length other than 3, 4, 6 or 8
    #[error("Invalid hex length {len} in color code: {code}")]
    InvalidLength {
        /// Offending input
        code: String,
        /// Number of hex digits found
        len: usize,
    },

    /// A character outside `0-9a-fA-F`
    #[error("Invalid hex digit in color code: {0}")]
    InvalidDigit(String),

    /// Not a hex code and not a known color name
    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

/// RGBA color with channels in the 0-1 range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from 0-1 channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 0-255 channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (leading `#` optional) or
    /// a basic color name such as `"orange"`.
    pub fn from_hex(code: &str) -> Result<Self, ColorError> {
        let trimmed = code.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            return parse_hex_digits(code, digits);
        }
        if let Some(named) = named_color(trimmed) {
            return Ok(named);
        }
        if trimmed.chars().all(|c| c.is_ascii_hexdigit()) && !trimmed.is_empty() {
            return parse_hex_digits(code, trimmed);
        }
        Err(ColorError::UnknownName(code.to_string()))
    }

    /// Like [`Color::from_hex`], but logs a warning and returns white for
    /// unparseable input.
    pub fn from_hex_or_white(code: &str) -> Self {
        Self::from_hex(code).unwrap_or_else(|err| {
            warn_with_trace(&format!("Invalid hex color code: {err}"));
            Self::WHITE
        })
    }

    /// Channels as 0-255 bytes, rounded
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a)]
    }
}

fn parse_hex_digits(code: &str, digits: &str) -> Result<Color, ColorError> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(code.to_string()));
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    let invalid = |_| ColorError::InvalidDigit(code.to_string());

    let [r, g, b, a] = match digits.len() {
        3 => [nibble(0), nibble(1), nibble(2), Ok(255)],
        4 => [nibble(0), nibble(1), nibble(2), nibble(3)],
        6 => [byte(0), byte(2), byte(4), Ok(255)],
        8 => [byte(0), byte(2), byte(4), byte(6)],
        len => {
            return Err(ColorError::InvalidLength {
                code: code.to_string(),
                len,
            })
        }
    };

    Ok(Color::from_rgba8(
        r.map_err(invalid)?,
        g.map_err(invalid)?,
        b.map_err(invalid)?,
        a.map_err(invalid)?,
    ))
}

fn named_color(name: &str) -> Option<Color> {
    let rgb = |r, g, b| Some(Color::from_rgba8(r, g, b, 255));
    match name.to_ascii_lowercase().as_str() {
        "red" => rgb(255, 0, 0),
        "cyan" | "aqua" => rgb(0, 255, 255),
        "blue" => rgb(0, 0, 255),
        "darkblue" => rgb(0, 0, 160),
        "lightblue" => rgb(173, 216, 230),
        "purple" => rgb(128, 0, 128),
        "yellow" => rgb(255, 255, 0),
        "lime" => rgb(0, 255, 0),
        "fuchsia" | "magenta" => rgb(255, 0, 255),
        "white" => rgb(255, 255, 255),
        "silver" => rgb(192, 192, 192),
        "grey" | "gray" => rgb(128, 128, 128),
        "black" => rgb(0, 0, 0),
        "orange" => rgb(255, 165, 0),
        "brown" => rgb(165, 42, 42),
        "maroon" => rgb(128, 0, 0),
        "green" => rgb(0, 128, 0),
        "olive" => rgb(128, 128, 0),
        "navy" => rgb(0, 0, 128),
        "teal" => rgb(0, 128, 128),
        _ => None,
    }
}
