//! Pastel palettes.
//!
//! A palette is an ordered list of low-saturation, high-lightness colours
//! whose hues sit in a narrow band around a centre hue.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{sample, Colour};

/// Parameters for generating a pastel palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSpec {
    /// Number of colours to generate.
    pub count: usize,

    /// Centre hue as a fraction of a full turn.
    pub hue_center: f64,

    /// Hues are spread evenly across `hue_center ± hue_spread`.
    pub hue_spread: f64,

    /// Each hue is nudged by a uniform value in `±hue_jitter`.
    pub hue_jitter: f64,

    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self {
            count: 12,
            hue_center: 0.58,
            hue_spread: 0.07,
            hue_jitter: 0.01,
            saturation: (0.10, 0.24),
            lightness: (0.78, 0.90),
        }
    }
}

impl PaletteSpec {
    /// The evenly spaced base hues, before jitter and wrapping.
    pub fn base_hues(&self) -> Vec<f64> {
        let start = self.hue_center - self.hue_spread;
        let end = self.hue_center + self.hue_spread;
        match self.count {
            0 => vec![],
            1 => vec![start],
            k => (0..k)
                .map(|i| start + (end - start) * i as f64 / (k - 1) as f64)
                .collect(),
        }
    }

    /// Generate a palette, drawing every random value from `rng`.
    ///
    /// All hue jitters are drawn first, then saturation and lightness per
    /// colour, so the palette is a pure function of the stream position.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Palette {
        let hues: Vec<f64> = self
            .base_hues()
            .into_iter()
            .map(|h| (h + sample(rng, (-self.hue_jitter, self.hue_jitter))).rem_euclid(1.0))
            .collect();

        let colours = hues
            .into_iter()
            .map(|h| {
                let s = sample(rng, self.saturation);
                let l = sample(rng, self.lightness);
                Colour::from_hsl(h, s, l)
            })
            .collect();

        Palette::new(colours)
    }
}

/// An ordered collection of colours.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Self {
        Self { colours }
    }

    /// Pick a colour uniformly at random, returning its index too.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, Colour)> {
        if self.colours.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.colours.len());
        Some((index, self.colours[index]))
    }

    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter()
    }
}
