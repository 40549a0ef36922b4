//! Rendering module for dreamstar.
//!
//! Every layer draws onto a shared [`Canvas`] in a fixed order:
//! background, aurora, stardust, stars, title. [`poster`] runs the layers
//! and [`png`] writes the result.

mod aurora;
mod background;
mod canvas;
mod font;
mod png;
mod poster;
mod stardust;
mod stars;
mod title;

pub use aurora::{draw_aurora, AuroraSpec, Blob, Footprint};
pub use background::{draw_background, BackgroundMode, BackgroundSpec};
pub use canvas::{Canvas, POINTS_PER_INCH};
pub use png::{dpi_to_ppm, encode_png, export_image, write_png, ExportOptions};
pub use poster::{render_poster, Poster, PosterLayout, PosterPipeline, Stage};
pub use stardust::{draw_stardust, scatter, Speck, StardustSpec};
pub use stars::{
    draw_stars, tier_for, SizeTier, StarLayers, StarPlacement, StarSpec, TierRule, SIZE_TIERS,
};
pub use title::{draw_title, layout_line, TextLine, TitleSpec};
