//! Stardust: many faint pale dots scattered uniformly over the canvas.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{sample, sample_count, Colour, Point};

use super::Canvas;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StardustSpec {
    /// Number of specks, half-open.
    pub count: (usize, usize),
    /// Marker area in square points.
    pub area: (f64, f64),
    pub alpha: (f64, f64),
    pub colour: Colour,
}

impl Default for StardustSpec {
    fn default() -> Self {
        Self {
            count: (280, 480),
            area: (2.0, 9.0),
            alpha: (0.08, 0.35),
            colour: Colour::rgb(0.97, 0.98, 1.0),
        }
    }
}

/// A single dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speck {
    pub center: Point,
    pub area: f64,
    pub alpha: f64,
}

impl Speck {
    /// Marker diameter in points.
    pub fn diameter(&self) -> f64 {
        self.area.max(0.0).sqrt()
    }
}

/// Sample the speck field without drawing it.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, spec: &StardustSpec) -> Vec<Speck> {
    let count = sample_count(rng, spec.count);
    (0..count)
        .map(|_| {
            let center = Point::new(sample(rng, (0.0, 1.0)), sample(rng, (0.0, 1.0)));
            let area = sample(rng, spec.area);
            let alpha = sample(rng, spec.alpha);
            Speck {
                center,
                area,
                alpha,
            }
        })
        .collect()
}

/// Sample and draw the stardust layer, returning the specks drawn.
pub fn draw_stardust<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rng: &mut R,
    spec: &StardustSpec,
) -> Vec<Speck> {
    let specks = scatter(rng, spec);
    for speck in &specks {
        let radius = canvas.points_to_pixels(speck.diameter() / 2.0);
        canvas.fill_disc(speck.center, radius, spec.colour.with_alpha(speck.alpha as f32));
    }
    tracing::debug!(specks = specks.len(), "drew stardust");
    specks
}
