//! Foundational color types used throughout Gradient Studio.
//!
//! Color and ColorStop are the building blocks for every gradient
//! configuration in the system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// 24-bit RGB color.
///
/// Serialized everywhere (JSON, exports, `Display`) as a lowercase
/// `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 24-bit value, e.g. `0x3b82f6`.
    ///
    /// Bits above 24 are ignored.
    pub const fn from_rgb24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const fn to_rgb24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{input}': expected #rrggbb or #rgb")]
pub struct ParseColorError {
    pub input: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` and the shorthand `#rgb`; case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(err)?;
        match hex.len() {
            6 => {
                let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
                Ok(Self::from_rgb24(value))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let nibble = c.to_digit(16).ok_or_else(err)? as u8;
                    channels[i] = nibble << 4 | nibble;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(err()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Color stop for gradients.
///
/// Position is a percentage along the gradient axis. Positions need not
/// be unique across a stop list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorStop {
    pub color: Color,
    /// 0 to 100 (percent)
    pub position: u8,
}

impl ColorStop {
    /// Positions above 100 are clamped.
    pub fn new(color: Color, position: u8) -> Self {
        Self {
            color,
            position: position.min(100),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.position)
    }
}
