//! dreamstar - Dreamy blue star poster generator
//!
//! A library for composing generative posters: a soft backdrop, aurora glow,
//! stardust and a field of translucent pastel stars, exported as PNG.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::{parse_seed, PosterConfig, Style, CONFIG_FILENAME};
pub use error::{PosterError, Result};
pub use render::{
    render_poster, BackgroundMode, Canvas, Poster, PosterLayout, PosterPipeline, SizeTier, Stage,
    StarPlacement,
};
pub use types::{Affine, Colour, Palette, PaletteSpec, Point, StarShape};
