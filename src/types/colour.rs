//! Colour type and parsing.
//!
//! Colours are normalized floating point RGBA. Hex strings are the
//! serialized form used in `poster.yaml`.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{PosterError, Result};

/// An RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Fully transparent white (the start of every glow ramp).
    pub const CLEAR: Self = Self::new(1.0, 1.0, 1.0, 0.0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Build an opaque colour from hue, saturation and lightness.
    ///
    /// All three inputs are fractions; the hue wraps modulo 1.0.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.rem_euclid(1.0) as f32;
        let hsl: Hsl = Hsl::new(
            hue * 360.0,
            saturation.clamp(0.0, 1.0) as f32,
            lightness.clamp(0.0, 1.0) as f32,
        );
        let rgb: Srgb = hsl.into_color();
        Self::rgb(
            rgb.red.clamp(0.0, 1.0),
            rgb.green.clamp(0.0, 1.0),
            rgb.blue.clamp(0.0, 1.0),
        )
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation towards `other` (all four channels).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        Self::new(
            self.r * inv + other.r * t,
            self.g * inv + other.g * t,
            self.b * inv + other.b * t,
            self.a * inv + other.a * t,
        )
    }

    /// Quantize to 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RRGGBB` and `#RRGGBBAA`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let channels = match hex.len() {
            6 | 8 if hex.is_ascii() => (0..hex.len())
                .step_by(2)
                .map(|i| parse_hex_byte(&hex[i..i + 2]))
                .collect::<Result<Vec<u8>>>()?,
            _ => {
                return Err(PosterError::Parse {
                    message: format!("Invalid hex colour: {}", s),
                    help: Some("Use #RRGGBB or #RRGGBBAA format".to_string()),
                })
            }
        };

        let unit = |v: u8| v as f32 / 255.0;
        let a = channels.get(3).copied().map_or(1.0, unit);
        Ok(Self::new(
            unit(channels[0]),
            unit(channels[1]),
            unit(channels[2]),
            a,
        ))
    }
}

fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Colour {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = PosterError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| PosterError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
