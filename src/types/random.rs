//! Range sampling helpers shared by every layer.
//!
//! Ranges are `(lo, hi)` pairs and half-open. A range with `hi <= lo`
//! yields `lo` without consuming a value from the stream.

use rand::Rng;

/// Uniform float in `[lo, hi)`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Uniform count in `[lo, hi)`.
pub fn sample_count<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (usize, usize)) -> usize {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
