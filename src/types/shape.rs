//! Star polygon geometry.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Inner radius as a fraction of the outer radius when none is given.
pub const DEFAULT_INNER_RATIO: f64 = 0.4;

/// Number of star points when none is given.
pub const DEFAULT_POINTS: usize = 5;

/// A point in normalized canvas space (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset by a vector.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Parameters of an n-pointed star.
///
/// Vertices alternate between the outer and inner radius at evenly spaced
/// angles, starting on the outer radius at `rotation` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarShape {
    pub center: Point,
    pub outer: f64,
    pub inner: f64,
    pub points: usize,
    pub rotation: f64,
}

impl StarShape {
    /// A five-pointed star with the default inner ratio and no rotation.
    pub fn new(center: Point, outer: f64) -> Self {
        Self {
            center,
            outer,
            inner: outer * DEFAULT_INNER_RATIO,
            points: DEFAULT_POINTS,
            rotation: 0.0,
        }
    }

    pub fn with_inner(mut self, inner: f64) -> Self {
        self.inner = inner;
        self
    }

    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Compute the closed polygon, `2 * points` vertices long.
    pub fn vertices(&self) -> Vec<Point> {
        let count = self.points * 2;
        (0..count)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64 + self.rotation;
                let radius = if i % 2 == 0 { self.outer } else { self.inner };
                Point::new(
                    self.center.x + radius * angle.cos(),
                    self.center.y + radius * angle.sin(),
                )
            })
            .collect()
    }
}

/// Arithmetic mean of a polygon's vertices.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Scale a polygon about a fixed point.
pub fn scale_about(points: &[Point], origin: Point, factor: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            Point::new(
                origin.x + (p.x - origin.x) * factor,
                origin.y + (p.y - origin.y) * factor,
            )
        })
        .collect()
}
