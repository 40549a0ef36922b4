//! Poster pipeline.
//!
//! Runs the layers in a fixed order on one canvas with one owned random
//! stream:
//!
//! ```text
//! Unseeded -> Seeded -> BackgroundDrawn -> AtmosphereDrawn -> StarsDrawn
//!          -> [TitleDrawn] -> Finalized
//! ```
//!
//! With a seed the whole poster is a pure function of the configuration;
//! without one the stream is drawn from OS entropy.

use std::fmt;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::PosterConfig;
use crate::error::{PosterError, Result};
use crate::types::Palette;

use super::aurora::{draw_aurora, Blob};
use super::background::{draw_background, BackgroundMode};
use super::png::{export_image, write_png, ExportOptions};
use super::stardust::draw_stardust;
use super::stars::{draw_stars, StarPlacement};
use super::title::draw_title;
use super::Canvas;

/// Pipeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Unseeded,
    Seeded,
    BackgroundDrawn,
    AtmosphereDrawn,
    StarsDrawn,
    TitleDrawn,
    Finalized,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unseeded => "unseeded",
            Self::Seeded => "seeded",
            Self::BackgroundDrawn => "background drawn",
            Self::AtmosphereDrawn => "atmosphere drawn",
            Self::StarsDrawn => "stars drawn",
            Self::TitleDrawn => "title drawn",
            Self::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// What was sampled for a poster, in draw order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PosterLayout {
    pub seed: Option<u64>,
    pub canvas_pixels: u32,
    pub dpi: f64,
    pub background: BackgroundMode,
    pub aurora: Vec<Blob>,
    pub stardust: usize,
    pub palette: Palette,
    pub stars: Vec<StarPlacement>,
    pub title_lines: usize,
}

impl PosterLayout {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PosterError::Render {
            message: format!("Failed to serialize layout: {}", e),
            help: None,
        })
    }

    /// Write the layout as JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| PosterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write layout: {}", e),
        })
    }
}

/// A finished poster.
#[derive(Debug, Clone)]
pub struct Poster {
    canvas: Canvas,
    layout: PosterLayout,
    export: ExportOptions,
}

impl Poster {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn layout(&self) -> &PosterLayout {
        &self.layout
    }

    /// The padded image as it would be exported.
    pub fn to_image(&self) -> image::RgbaImage {
        export_image(&self.canvas, &self.export)
    }

    pub fn write_png(&self, path: &Path) -> Result<()> {
        write_png(&self.canvas, path, &self.export)
    }
}

/// Step-by-step poster construction.
pub struct PosterPipeline<'a> {
    config: &'a PosterConfig,
    stage: Stage,
    rng: Option<StdRng>,
    canvas: Canvas,
    layout: PosterLayout,
}

impl<'a> PosterPipeline<'a> {
    pub fn new(config: &'a PosterConfig) -> Self {
        let canvas = Canvas::square(config.canvas_inches(), config.dpi);
        let layout = PosterLayout {
            canvas_pixels: canvas.width(),
            dpi: config.dpi,
            background: config.background,
            ..PosterLayout::default()
        };
        Self {
            config,
            stage: Stage::Unseeded,
            rng: None,
            canvas,
            layout,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Create the random stream from the configured seed, or from entropy.
    pub fn seed(&mut self) -> Result<()> {
        self.advance(Stage::Unseeded, Stage::Seeded)?;
        let seed = self.config.seed_value();
        self.rng = Some(match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        });
        self.layout.seed = seed;
        tracing::debug!(?seed, "seeded random stream");
        Ok(())
    }

    pub fn draw_background(&mut self) -> Result<()> {
        self.advance(Stage::Seeded, Stage::BackgroundDrawn)?;
        draw_background(
            &mut self.canvas,
            self.config.background,
            &self.config.style.background,
        );
        Ok(())
    }

    /// Aurora glow, then stardust.
    pub fn draw_atmosphere(&mut self) -> Result<()> {
        self.advance(Stage::BackgroundDrawn, Stage::AtmosphereDrawn)?;
        let style = &self.config.style;
        let rng = self.rng.as_mut().ok_or_else(unseeded)?;
        self.layout.aurora = draw_aurora(&mut self.canvas, rng, &style.aurora);
        self.layout.stardust = draw_stardust(&mut self.canvas, rng, &style.stardust).len();
        Ok(())
    }

    /// Generate the palette, then place and draw every star.
    pub fn draw_stars(&mut self) -> Result<()> {
        self.advance(Stage::AtmosphereDrawn, Stage::StarsDrawn)?;
        let style = &self.config.style;
        let rng = self.rng.as_mut().ok_or_else(unseeded)?;
        let palette = style.palette.generate(rng);
        self.layout.stars = draw_stars(
            &mut self.canvas,
            rng,
            &palette,
            &style.stars,
            self.config.stars,
        );
        self.layout.palette = palette;
        Ok(())
    }

    pub fn draw_title(&mut self) -> Result<()> {
        self.advance(Stage::StarsDrawn, Stage::TitleDrawn)?;
        self.layout.title_lines = draw_title(&mut self.canvas, &self.config.style.title);
        Ok(())
    }

    /// Finish after the stars (and optionally the title) are drawn.
    pub fn finalize(mut self) -> Result<Poster> {
        let from = match self.stage {
            Stage::StarsDrawn | Stage::TitleDrawn => self.stage,
            _ => Stage::StarsDrawn,
        };
        self.advance(from, Stage::Finalized)?;
        Ok(Poster {
            canvas: self.canvas,
            layout: self.layout,
            export: ExportOptions {
                padding: self.config.padding,
                ..ExportOptions::default()
            },
        })
    }

    fn advance(&mut self, expected: Stage, next: Stage) -> Result<()> {
        if self.stage != expected {
            return Err(PosterError::Render {
                message: format!("cannot move to '{}' from '{}'", next, self.stage),
                help: Some(format!("expected the pipeline to be '{}'", expected)),
            });
        }
        self.stage = next;
        Ok(())
    }
}

fn unseeded() -> PosterError {
    PosterError::Render {
        message: "random stream used before seeding".to_string(),
        help: None,
    }
}

/// Render a full poster from a configuration.
pub fn render_poster(config: &PosterConfig) -> Result<Poster> {
    config.validate()?;

    let mut pipeline = PosterPipeline::new(config);
    pipeline.seed()?;
    pipeline.draw_background()?;
    pipeline.draw_atmosphere()?;
    pipeline.draw_stars()?;
    if config.title {
        pipeline.draw_title()?;
    }
    pipeline.finalize()
}
