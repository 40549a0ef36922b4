//! Core domain types for dreamstar.
//!
//! This module contains the value types shared by every layer:
//! - `Colour` - normalized RGBA colour values
//! - `Palette` - generated pastel colour collections
//! - `StarShape` - star polygon geometry
//! - `Affine` - 2D placement transforms

mod colour;
mod palette;
mod random;
mod shape;
mod transform;

pub use colour::Colour;
pub use palette::{Palette, PaletteSpec};
pub use random::{sample, sample_count};
pub use shape::{centroid, scale_about, Point, StarShape, DEFAULT_INNER_RATIO, DEFAULT_POINTS};
pub use transform::Affine;
