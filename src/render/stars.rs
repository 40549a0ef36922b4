//! Star compositor.
//!
//! Places `n` five-pointed stars at random, each drawn as three stacked
//! polygons: a dark offset shadow, the palette-coloured body, and a faint
//! enlarged white glow. Stars are drawn in index order with no overlap
//! avoidance, so later stars cover earlier ones.
//!
//! Star size depends only on the star's index (see [`SIZE_TIERS`]): the
//! first few stars are always the largest, whatever the total count.

use std::f64::consts::TAU;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{centroid, sample, scale_about, Colour, Palette, Point, StarShape};

use super::Canvas;

/// Visual size class of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        };
        f.write_str(name)
    }
}

/// One row of the tier table: stars with index below `until` (and not
/// claimed by an earlier row) get an outer radius from `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRule {
    pub tier: SizeTier,
    pub until: Option<usize>,
    pub size: (f64, f64),
}

/// Index-to-size table, checked in order.
pub const SIZE_TIERS: [TierRule; 3] = [
    TierRule {
        tier: SizeTier::Large,
        until: Some(3),
        size: (0.17, 0.25),
    },
    TierRule {
        tier: SizeTier::Medium,
        until: Some(8),
        size: (0.11, 0.17),
    },
    TierRule {
        tier: SizeTier::Small,
        until: None,
        size: (0.07, 0.11),
    },
];

/// The tier rule that applies to star `index`.
pub fn tier_for(index: usize) -> &'static TierRule {
    SIZE_TIERS
        .iter()
        .find(|rule| rule.until.map_or(true, |until| index < until))
        .unwrap_or(&SIZE_TIERS[SIZE_TIERS.len() - 1])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarSpec {
    pub center_x: (f64, f64),
    pub center_y: (f64, f64),
    pub rotation: (f64, f64),
    pub points: usize,
    /// Inner radius as a fraction of the outer radius.
    pub inner_ratio: f64,
    pub shadow_offset: (f64, f64),
    pub shadow_colour: Colour,
    pub shadow_alpha: f64,
    pub body_alpha: (f64, f64),
    pub glow_colour: Colour,
    pub glow_alpha: f64,
    /// Glow size relative to the body, scaled about the star centre.
    pub glow_scale: f64,
}

impl Default for StarSpec {
    fn default() -> Self {
        Self {
            center_x: (0.07, 0.93),
            center_y: (0.08, 0.92),
            rotation: (0.0, TAU),
            points: 5,
            inner_ratio: 0.4,
            shadow_offset: (-0.012, -0.012),
            shadow_colour: Colour::rgb(0.2, 0.25, 0.35),
            shadow_alpha: 0.12,
            body_alpha: (0.26, 0.72),
            glow_colour: Colour::WHITE,
            glow_alpha: 0.1,
            glow_scale: 1.01,
        }
    }
}

/// The three polygons drawn for one star, bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayers {
    pub shadow: Vec<Point>,
    pub body: Vec<Point>,
    pub glow: Vec<Point>,
}

/// Everything sampled for one star.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarPlacement {
    pub index: usize,
    pub tier: SizeTier,
    pub center: Point,
    pub size: f64,
    pub rotation: f64,
    pub palette_index: Option<usize>,
    pub colour: Colour,
    pub alpha: f64,
    #[serde(skip)]
    pub layers: StarLayers,
}

impl StarPlacement {
    /// Sample star `index`. Draw order: centre x, centre y, size, rotation,
    /// palette index, body alpha.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        index: usize,
        palette: &Palette,
        spec: &StarSpec,
    ) -> Self {
        let center = Point::new(sample(rng, spec.center_x), sample(rng, spec.center_y));
        let rule = tier_for(index);
        let size = sample(rng, rule.size);
        let rotation = sample(rng, spec.rotation);

        let (palette_index, colour) = match palette.choose(rng) {
            Some((i, c)) => (Some(i), c),
            None => (None, spec.glow_colour),
        };
        let alpha = sample(rng, spec.body_alpha);

        let body = StarShape::new(center, size)
            .with_inner(size * spec.inner_ratio)
            .with_points(spec.points)
            .with_rotation(rotation)
            .vertices();
        let (dx, dy) = spec.shadow_offset;
        let shadow = body.iter().map(|p| p.offset(dx, dy)).collect();
        let glow = scale_about(&body, centroid(&body), spec.glow_scale);

        Self {
            index,
            tier: rule.tier,
            center,
            size,
            rotation,
            palette_index,
            colour,
            alpha,
            layers: StarLayers { shadow, body, glow },
        }
    }

    /// Draw shadow, body and glow in that order.
    pub fn draw(&self, canvas: &mut Canvas, spec: &StarSpec) {
        canvas.fill_polygon(
            &self.layers.shadow,
            spec.shadow_colour.with_alpha(spec.shadow_alpha as f32),
        );
        canvas.fill_polygon(&self.layers.body, self.colour.with_alpha(self.alpha as f32));
        canvas.fill_polygon(
            &self.layers.glow,
            spec.glow_colour.with_alpha(spec.glow_alpha as f32),
        );
    }
}

/// Sample and draw `count` stars, returning their placements in draw order.
pub fn draw_stars<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rng: &mut R,
    palette: &Palette,
    spec: &StarSpec,
    count: usize,
) -> Vec<StarPlacement> {
    let mut stars = Vec::with_capacity(count);
    for index in 0..count {
        let star = StarPlacement::sample(rng, index, palette, spec);
        star.draw(canvas, spec);
        stars.push(star);
    }
    tracing::debug!(stars = stars.len(), "drew stars");
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaletteSpec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn palette(seed: u64) -> Palette {
        PaletteSpec::default().generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(tier_for(0).tier, SizeTier::Large);
        assert_eq!(tier_for(2).tier, SizeTier::Large);
        assert_eq!(tier_for(3).tier, SizeTier::Medium);
        assert_eq!(tier_for(7).tier, SizeTier::Medium);
        assert_eq!(tier_for(8).tier, SizeTier::Small);
        assert_eq!(tier_for(1000).tier, SizeTier::Small);
    }

    #[test]
    fn test_tier_ranges_strictly_descend() {
        for pair in SIZE_TIERS.windows(2) {
            let (upper, lower) = (pair[0].size, pair[1].size);
            assert!(upper.0 > lower.0);
            assert!(upper.1 > lower.1);
            assert!(upper.0 >= lower.1);
        }
    }

    #[test]
    fn test_one_layer_triple_per_star() {
        let mut canvas = Canvas::new(32, 32, 72.0);
        let mut rng = StdRng::seed_from_u64(10);
        let spec = StarSpec::default();
        for count in [0, 1, 5, 14, 40] {
            let stars = draw_stars(&mut canvas, &mut rng, &palette(1), &spec, count);
            assert_eq!(stars.len(), count);
            for (i, star) in stars.iter().enumerate() {
                assert_eq!(star.index, i);
                assert_eq!(star.layers.shadow.len(), 10);
                assert_eq!(star.layers.body.len(), 10);
                assert_eq!(star.layers.glow.len(), 10);
            }
        }
    }

    #[test]
    fn test_sizes_follow_tier_of_index() {
        let mut canvas = Canvas::new(32, 32, 72.0);
        let mut rng = StdRng::seed_from_u64(77);
        let stars = draw_stars(&mut canvas, &mut rng, &palette(2), &StarSpec::default(), 20);
        for star in &stars {
            let rule = tier_for(star.index);
            assert_eq!(star.tier, rule.tier);
            assert!(star.size >= rule.size.0 && star.size < rule.size.1);
        }
    }

    #[test]
    fn test_sampled_values_within_spec() {
        let spec = StarSpec::default();
        let pal = palette(3);
        let mut rng = StdRng::seed_from_u64(5);
        for i in 0..200 {
            let star = StarPlacement::sample(&mut rng, i, &pal, &spec);
            assert!((0.07..0.93).contains(&star.center.x));
            assert!((0.08..0.92).contains(&star.center.y));
            assert!((0.0..TAU).contains(&star.rotation));
            assert!((0.26..0.72).contains(&star.alpha));
            let index = star.palette_index.unwrap();
            assert_eq!(pal.get(index), Some(star.colour));
        }
    }

    #[test]
    fn test_shadow_is_offset_copy_of_body() {
        let spec = StarSpec::default();
        let mut rng = StdRng::seed_from_u64(6);
        let star = StarPlacement::sample(&mut rng, 0, &palette(4), &spec);
        for (s, b) in star.layers.shadow.iter().zip(&star.layers.body) {
            assert!((s.x - (b.x - 0.012)).abs() < 1e-12);
            assert!((s.y - (b.y - 0.012)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_glow_shares_centre_and_is_larger() {
        let spec = StarSpec::default();
        let mut rng = StdRng::seed_from_u64(9);
        let star = StarPlacement::sample(&mut rng, 4, &palette(5), &spec);
        assert!(centroid(&star.layers.glow).distance(star.center) < 1e-12);
        let body_r = star.layers.body[0].distance(star.center);
        let glow_r = star.layers.glow[0].distance(star.center);
        assert!((glow_r / body_r - 1.01).abs() < 1e-9);
    }

    #[test]
    fn test_empty_palette_uses_glow_colour() {
        let spec = StarSpec::default();
        let mut rng = StdRng::seed_from_u64(0);
        let star = StarPlacement::sample(&mut rng, 0, &Palette::default(), &spec);
        assert_eq!(star.palette_index, None);
        assert_eq!(star.colour, Colour::WHITE);
    }

    #[test]
    fn test_later_star_drawn_on_top() {
        let mut canvas = Canvas::new(64, 64, 72.0);
        canvas.fill(Colour::WHITE);
        let spec = StarSpec {
            center_x: (0.5, 0.5),
            center_y: (0.5, 0.5),
            body_alpha: (1.0, 1.0),
            glow_alpha: 0.0,
            shadow_alpha: 0.0,
            ..StarSpec::default()
        };
        let red = Palette::new(vec![Colour::rgb(1.0, 0.0, 0.0)]);
        let blue = Palette::new(vec![Colour::rgb(0.0, 0.0, 1.0)]);
        let mut rng = StdRng::seed_from_u64(0);

        StarPlacement::sample(&mut rng, 0, &red, &spec).draw(&mut canvas, &spec);
        StarPlacement::sample(&mut rng, 1, &blue, &spec).draw(&mut canvas, &spec);

        assert_eq!(canvas.get(32, 32).unwrap().to_rgba8(), [0, 0, 255, 255]);
    }
}
