//! Aurora glow: soft, elongated Gaussian blobs in pale blue.
//!
//! Each blob is a min-max normalized anisotropic Gaussian on the local
//! square `[-1, 1]²`. It is placed on the canvas by scaling to `(rx, ry)`,
//! rotating by `theta` and translating to its centre, in that order. The
//! footprint intensity drives both the tint (from clear white to the blob
//! colour) and the opacity.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{sample, sample_count, Affine, Colour, Point};

use super::Canvas;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuroraSpec {
    /// Number of blobs, half-open.
    pub count: (usize, usize),
    pub hue_center: f64,
    pub hue_spread: f64,
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
    /// Half-extent along the local x axis, in canvas units.
    pub size_x: (f64, f64),
    /// Half-extent along the local y axis, in canvas units.
    pub size_y: (f64, f64),
    pub center_x: (f64, f64),
    pub center_y: (f64, f64),
    pub rotation: (f64, f64),
    pub alpha: (f64, f64),
    /// Gaussian standard deviations on the local square.
    pub sigma: (f64, f64),
}

impl Default for AuroraSpec {
    fn default() -> Self {
        Self {
            count: (3, 6),
            hue_center: 0.58,
            hue_spread: 0.10,
            saturation: (0.06, 0.16),
            lightness: (0.82, 0.92),
            size_x: (0.25, 0.55),
            size_y: (0.12, 0.35),
            center_x: (0.05, 0.95),
            center_y: (0.10, 0.90),
            rotation: (0.0, PI),
            alpha: (0.06, 0.14),
            sigma: (0.35, 0.9),
        }
    }
}

/// Where and how one blob was drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blob {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
    pub colour: Colour,
    pub alpha: f64,
}

impl Blob {
    /// Sample one blob. Draw order: hue, saturation, lightness, rx, ry,
    /// centre x, centre y, rotation, alpha.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, spec: &AuroraSpec) -> Self {
        let hue = spec.hue_center + sample(rng, (-spec.hue_spread, spec.hue_spread));
        let saturation = sample(rng, spec.saturation);
        let lightness = sample(rng, spec.lightness);
        let colour = Colour::from_hsl(hue, saturation, lightness);

        let rx = sample(rng, spec.size_x);
        let ry = sample(rng, spec.size_y);
        let center = Point::new(sample(rng, spec.center_x), sample(rng, spec.center_y));
        let rotation = sample(rng, spec.rotation);
        let alpha = sample(rng, spec.alpha);

        Self {
            center,
            rx,
            ry,
            rotation,
            colour,
            alpha,
        }
    }

    /// Local-to-canvas placement: scale, then rotate, then translate.
    pub fn placement(&self) -> Affine {
        Affine::scaling(self.rx, self.ry)
            .rotate(self.rotation)
            .translate(self.center.x, self.center.y)
    }
}

/// Normalized anisotropic Gaussian over the local square.
#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    inv_two_var_x: f64,
    inv_two_var_y: f64,
    floor: f64,
}

impl Footprint {
    pub fn new((sigma_x, sigma_y): (f64, f64)) -> Self {
        let inv_two_var_x = 1.0 / (2.0 * sigma_x * sigma_x);
        let inv_two_var_y = 1.0 / (2.0 * sigma_y * sigma_y);
        Self {
            inv_two_var_x,
            inv_two_var_y,
            // The minimum over [-1, 1]² sits at the corners.
            floor: (-(inv_two_var_x + inv_two_var_y)).exp(),
        }
    }

    /// Intensity in `[0, 1]`: 1 at the origin, 0 at the corners.
    pub fn intensity(&self, p: Point) -> f64 {
        let g = (-(p.x * p.x * self.inv_two_var_x + p.y * p.y * self.inv_two_var_y)).exp();
        ((g - self.floor) / (1.0 - self.floor + 1e-9)).clamp(0.0, 1.0)
    }
}

/// Sample and draw the aurora layer, returning the blobs drawn.
pub fn draw_aurora<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rng: &mut R,
    spec: &AuroraSpec,
) -> Vec<Blob> {
    let count = sample_count(rng, spec.count);
    let footprint = Footprint::new(spec.sigma);

    let blobs: Vec<Blob> = (0..count).map(|_| Blob::sample(rng, spec)).collect();
    for blob in &blobs {
        let tint = blob.colour;
        let alpha = blob.alpha as f32;
        canvas.composite_footprint(&blob.placement(), |local| {
            let a = footprint.intensity(local) as f32;
            let c = Colour::CLEAR.lerp(tint, a);
            c.with_alpha(c.a * alpha)
        });
    }

    tracing::debug!(blobs = blobs.len(), "drew aurora");
    blobs
}
