//! Background fill: a solid colour or a vertical two-colour gradient.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Colour;

use super::Canvas;

/// How the canvas backdrop is painted.
///
/// Unrecognized names fall back to [`BackgroundMode::Gradient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackgroundMode {
    #[default]
    Gradient,
    Solid,
}

impl BackgroundMode {
    /// Strict lookup by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gradient" => Some(Self::Gradient),
            "solid" => Some(Self::Solid),
            _ => None,
        }
    }

    /// Lookup by name, falling back to the gradient for anything unknown.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(mode = name, "unknown background mode, using gradient");
            Self::default()
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Solid => "solid",
        }
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for BackgroundMode {
    fn from(name: String) -> Self {
        Self::from_name_or_default(&name)
    }
}

impl From<BackgroundMode> for String {
    fn from(mode: BackgroundMode) -> Self {
        mode.name().to_string()
    }
}

/// Background colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSpec {
    /// Gradient colour at the top edge.
    pub top: Colour,
    /// Gradient colour at the bottom edge.
    pub bottom: Colour,
    /// Fill for solid mode.
    pub solid: Colour,
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        Self {
            top: Colour::rgb(0.93, 0.96, 0.985),
            bottom: Colour::rgb(0.77, 0.86, 0.95),
            solid: Colour::rgb(0.95, 0.97, 0.985),
        }
    }
}

/// Paint the backdrop. Replaces whatever the canvas held.
pub fn draw_background(canvas: &mut Canvas, mode: BackgroundMode, spec: &BackgroundSpec) {
    tracing::debug!(%mode, "drawing background");
    match mode {
        BackgroundMode::Solid => canvas.fill(spec.solid.with_alpha(1.0)),
        BackgroundMode::Gradient => {
            let (top, bottom) = (spec.top, spec.bottom);
            canvas.fill_rows(|y| bottom.lerp(top, y as f32).with_alpha(1.0));
        }
    }
}
