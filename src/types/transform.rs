//! 2D affine transforms.
//!
//! Matrix layout follows the usual `[sx shx tx; shy sy ty]` convention:
//!
//! ```text
//! x' = sx * x + shx * y + tx
//! y' = shy * x + sy * y + ty
//! ```

use super::Point;

/// An affine transformation of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self {
        sx: 1.0,
        shy: 0.0,
        shx: 0.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn scaling(x: f64, y: f64) -> Self {
        Self {
            sx: x,
            sy: y,
            ..Self::IDENTITY
        }
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            sx: c,
            shy: s,
            shx: -s,
            sy: c,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            tx: x,
            ty: y,
            ..Self::IDENTITY
        }
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &Affine) -> Self {
        Self {
            sx: next.sx * self.sx + next.shx * self.shy,
            shy: next.shy * self.sx + next.sy * self.shy,
            shx: next.sx * self.shx + next.shx * self.sy,
            sy: next.shy * self.shx + next.sy * self.sy,
            tx: next.sx * self.tx + next.shx * self.ty + next.tx,
            ty: next.shy * self.tx + next.sy * self.ty + next.ty,
        }
    }

    /// Shorthand for `self.then(&Affine::scaling(x, y))`.
    pub fn scale(&self, x: f64, y: f64) -> Self {
        self.then(&Self::scaling(x, y))
    }

    pub fn rotate(&self, angle: f64) -> Self {
        self.then(&Self::rotation(angle))
    }

    pub fn translate(&self, x: f64, y: f64) -> Self {
        self.then(&Self::translation(x, y))
    }

    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }

    /// The inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return None;
        }
        let d = 1.0 / det;
        let sx = self.sy * d;
        let sy = self.sx * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        Some(Self {
            sx,
            shy,
            shx,
            sy,
            tx: -self.tx * sx - self.ty * shx,
            ty: -self.tx * shy - self.ty * sy,
        })
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.sx * p.x + self.shx * p.y + self.tx,
            self.shy * p.x + self.sy * p.y + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        let t = Affine::IDENTITY
            .scale(2.0, 3.0)
            .rotate(FRAC_PI_2)
            .translate(10.0, 20.0);

        // (1, 0) -> scale (2, 0) -> rotate (0, 2) -> translate (10, 22)
        assert!(close(t.apply(Point::new(1.0, 0.0)), Point::new(10.0, 22.0)));
        // (0, 1) -> scale (0, 3) -> rotate (-3, 0) -> translate (7, 20)
        assert!(close(t.apply(Point::new(0.0, 1.0)), Point::new(7.0, 20.0)));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Affine::scaling(0.4, 0.2).rotate(0.9).translate(0.3, 0.7);
        let inv = t.inverse().unwrap();
        let p = Point::new(-0.6, 0.85);
        assert!(close(inv.apply(t.apply(p)), p));
        assert!(close(t.apply(inv.apply(p)), p));
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(Affine::scaling(0.0, 1.0).inverse().is_none());
    }

    #[test]
    fn test_identity_default() {
        let p = Point::new(0.25, 0.75);
        assert_eq!(Affine::default().apply(p), p);
    }
}
