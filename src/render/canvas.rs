//! The drawing surface.
//!
//! A `Canvas` is an opaque RGB float buffer addressed in normalized
//! coordinates: `(0, 0)` is the bottom-left corner and `(1, 1)` the
//! top-right. Every draw call composites its source over the existing
//! pixels with straight alpha, so later calls end up on top.

use image::{Rgba, RgbaImage};

use crate::types::{Affine, Colour, Point};

/// Vertical samples per pixel row when rasterizing polygons.
const SUBSAMPLES: usize = 4;

/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    dpi: f64,
    pixels: Vec<[f32; 3]>,
}

impl Canvas {
    /// Create a white canvas of the given pixel size.
    pub fn new(width: u32, height: u32, dpi: f64) -> Self {
        Self {
            width,
            height,
            dpi,
            pixels: vec![[1.0; 3]; width as usize * height as usize],
        }
    }

    /// Create a square canvas `side_inches` wide at `dpi`.
    pub fn square(side_inches: f64, dpi: f64) -> Self {
        let side = (side_inches * dpi).round().max(1.0) as u32;
        Self::new(side, side, dpi)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Convert a length in typographic points to pixels.
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / POINTS_PER_INCH
    }

    /// Map a canvas-space point to continuous pixel coordinates (y down).
    pub fn to_pixel(&self, p: Point) -> (f64, f64) {
        (p.x * self.width as f64, (1.0 - p.y) * self.height as f64)
    }

    /// Canvas-space position of the centre of pixel `(x, y)`.
    pub fn pixel_center(&self, x: u32, y: u32) -> Point {
        Point::new(
            (x as f64 + 0.5) / self.width as f64,
            1.0 - (y as f64 + 0.5) / self.height as f64,
        )
    }

    /// Read a pixel back as an opaque colour.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b] = self.pixels[self.index(x, y)];
        Some(Colour::rgb(r, g, b))
    }

    /// Replace every pixel with an opaque colour.
    pub fn fill(&mut self, colour: Colour) {
        let rgb = [colour.r, colour.g, colour.b];
        self.pixels.iter_mut().for_each(|px| *px = rgb);
    }

    /// Replace every row with a colour derived from its vertical position.
    ///
    /// `shade` receives the row centre's y in canvas space.
    pub fn fill_rows(&mut self, shade: impl Fn(f64) -> Colour) {
        let width = self.width as usize;
        for y in 0..self.height {
            let c = shade(self.pixel_center(0, y).y);
            let start = y as usize * width;
            self.pixels[start..start + width]
                .iter_mut()
                .for_each(|px| *px = [c.r, c.g, c.b]);
        }
    }

    /// Composite `colour` onto one pixel with extra `coverage`.
    pub fn blend(&mut self, x: u32, y: u32, colour: Colour, coverage: f32) {
        let alpha = (colour.a * coverage.clamp(0.0, 1.0)).clamp(0.0, 1.0);
        if alpha <= 0.0 || x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        let px = &mut self.pixels[i];
        px[0] += (colour.r - px[0]) * alpha;
        px[1] += (colour.g - px[1]) * alpha;
        px[2] += (colour.b - px[2]) * alpha;
    }

    /// Fill a closed polygon with anti-aliased edges.
    ///
    /// The colour's alpha is the fill opacity.
    pub fn fill_polygon(&mut self, polygon: &[Point], colour: Colour) {
        self.fill_polygons(std::slice::from_ref(&polygon.to_vec()), colour);
    }

    /// Fill several polygons as a single layer.
    ///
    /// Coverage from all polygons is summed per pixel and clamped, so shared
    /// edges between abutting polygons do not leave seams.
    pub fn fill_polygons(&mut self, polygons: &[Vec<Point>], colour: Colour) {
        let shapes: Vec<Vec<(f64, f64)>> = polygons
            .iter()
            .filter(|p| p.len() >= 3)
            .map(|p| p.iter().map(|&pt| self.to_pixel(pt)).collect())
            .collect();

        let Some((min_x, min_y, max_x, max_y)) = bounds(shapes.iter().flatten().copied()) else {
            return;
        };

        let x0 = min_x.floor().clamp(0.0, self.width as f64) as usize;
        let x1 = max_x.ceil().clamp(0.0, self.width as f64) as usize;
        let y0 = min_y.floor().clamp(0.0, self.height as f64) as usize;
        let y1 = max_y.ceil().clamp(0.0, self.height as f64) as usize;
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let mut coverage = vec![0.0f32; x1 - x0];
        let mut crossings = Vec::new();
        for row in y0..y1 {
            coverage.iter_mut().for_each(|c| *c = 0.0);
            for shape in &shapes {
                accumulate_row(shape, row, x0 as f64, &mut coverage, &mut crossings);
            }
            for (i, &c) in coverage.iter().enumerate() {
                if c > 0.0 {
                    self.blend((x0 + i) as u32, row as u32, colour, c.min(1.0));
                }
            }
        }
    }

    /// Fill an anti-aliased disc. `radius` is in pixels.
    pub fn fill_disc(&mut self, center: Point, radius: f64, colour: Colour) {
        let (cx, cy) = self.to_pixel(center);
        let reach = radius + 1.0;
        let x0 = (cx - reach).floor().max(0.0) as u32;
        let y0 = (cy - reach).floor().max(0.0) as u32;
        let x1 = ((cx + reach).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((cy + reach).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let d = (x as f64 + 0.5 - cx).hypot(y as f64 + 0.5 - cy);
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, colour, coverage as f32);
                }
            }
        }
    }

    /// Composite a footprint defined on the local square `[-1, 1]²`.
    ///
    /// `placement` maps local coordinates into canvas space. For every pixel
    /// whose centre falls inside the placed square, `shade` is called with
    /// the local coordinate and returns the colour (with alpha) to blend.
    pub fn composite_footprint(
        &mut self,
        placement: &Affine,
        shade: impl Fn(Point) -> Colour,
    ) {
        let Some(inverse) = placement.inverse() else {
            return;
        };

        let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .map(|(u, v)| self.to_pixel(placement.apply(Point::new(u, v))));
        let Some((min_x, min_y, max_x, max_y)) = bounds(corners.into_iter()) else {
            return;
        };

        let x0 = min_x.floor().clamp(0.0, self.width as f64) as u32;
        let x1 = max_x.ceil().clamp(0.0, self.width as f64) as u32;
        let y0 = min_y.floor().clamp(0.0, self.height as f64) as u32;
        let y1 = max_y.ceil().clamp(0.0, self.height as f64) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                let local = inverse.apply(self.pixel_center(x, y));
                if local.x.abs() <= 1.0 && local.y.abs() <= 1.0 {
                    self.blend(x, y, shade(local), 1.0);
                }
            }
        }
    }

    /// Quantize into an RGBA image with `padding` pixels of `border` on
    /// every side.
    pub fn to_image(&self, padding: u32, border: Colour) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(
            self.width + padding * 2,
            self.height + padding * 2,
            Rgba(border.with_alpha(1.0).to_rgba8()),
        );
        for y in 0..self.height {
            for x in 0..self.width {
                let [r, g, b] = self.pixels[self.index(x, y)];
                img.put_pixel(x + padding, y + padding, Rgba(Colour::rgb(r, g, b).to_rgba8()));
            }
        }
        img
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn bounds(points: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64, f64, f64)> {
    points.fold(None, |acc, (x, y)| match acc {
        None => Some((x, y, x, y)),
        Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
    })
}

/// Add one polygon's coverage for pixel row `row` into `coverage`.
///
/// Uses `SUBSAMPLES` horizontal scanlines per row with exact horizontal
/// span coverage and the even-odd fill rule.
fn accumulate_row(
    shape: &[(f64, f64)],
    row: usize,
    x0: f64,
    coverage: &mut [f32],
    crossings: &mut Vec<f64>,
) {
    let weight = 1.0 / SUBSAMPLES as f32;
    let n = shape.len();

    for s in 0..SUBSAMPLES {
        let sy = row as f64 + (s as f64 + 0.5) / SUBSAMPLES as f64;
        crossings.clear();
        for i in 0..n {
            let (ax, ay) = shape[i];
            let (bx, by) = shape[(i + 1) % n];
            if (ay <= sy) != (by <= sy) {
                crossings.push(ax + (sy - ay) * (bx - ax) / (by - ay));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            add_span(coverage, pair[0] - x0, pair[1] - x0, weight);
        }
    }
}

/// Add `weight` of coverage over the continuous span `[a, b)`.
fn add_span(coverage: &mut [f32], a: f64, b: f64, weight: f32) {
    let len = coverage.len() as f64;
    let a = a.clamp(0.0, len);
    let b = b.clamp(0.0, len);
    if b <= a {
        return;
    }

    let ia = a.floor() as usize;
    let ib = b.floor() as usize;
    if ia == ib {
        coverage[ia] += (b - a) as f32 * weight;
        return;
    }

    coverage[ia] += (ia as f64 + 1.0 - a) as f32 * weight;
    for c in &mut coverage[ia + 1..ib] {
        *c += weight;
    }
    if ib < coverage.len() {
        coverage[ib] += (b - ib as f64) as f32 * weight;
    }
}
