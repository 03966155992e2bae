// File: crates/sparkline-core/src/geometry.rs
// Summary: Coordinate mapping from samples to plot-pixel points, plus polyline length.

use crate::types::Point;

/// Map samples to plot-pixel space.
///
/// Samples are spread evenly over `[0, width]`; a single sample sits at `width / 2`.
/// Larger values map to smaller `y`. A flat series (all samples equal) is drawn
/// through the vertical center, as is a series holding an infinite sample.
/// An empty input yields no points.
pub fn map_points(values: &[f64], width: f64, height: f64) -> Vec<Point> {
    let n = values.len();
    if n == 0 { return Vec::new(); }

    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &v in values {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    // Halved so that extrema near ±f64::MAX do not overflow the span.
    let (half_min, half_span) = (min_v / 2.0, max_v / 2.0 - min_v / 2.0);
    let flat = half_span == 0.0 || !half_span.is_finite();

    let sx = |i: usize| -> f64 {
        if n == 1 { width / 2.0 } else { (i as f64 / (n - 1) as f64) * width }
    };
    let sy = |v: f64| -> f64 {
        if flat { height / 2.0 } else { height - ((v / 2.0 - half_min) / half_span) * height }
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(sx(i), sy(v)))
        .collect()
}

/// Total length of the polyline through `points` (sum of segment lengths).
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
