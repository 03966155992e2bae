// File: crates/sparkline-core/src/path.rs
// Summary: Line and area path descriptions (SVG path data) built from mapped points.

use std::fmt::Write as _;

use crate::types::Point;

/// Line and area path data for one vertex set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSpec {
    /// Open polyline through every point.
    pub line: String,
    /// `line` closed down to the bottom edge of the plot.
    pub area: String,
}

/// `M x0,y0 L x1,y1 ...` with straight segments in index order.
/// A single point degenerates to a lone move-to.
pub fn build_line(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 { d.push(' '); }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{},{}", fmt_coord(p.x), fmt_coord(p.y));
    }
    d
}

/// The line path extended to `(width, height)`, then `(0, height)`, then closed.
pub fn build_area(points: &[Point], width: f64, height: f64) -> String {
    if points.is_empty() { return String::new(); }
    let mut d = build_line(points);
    let h = fmt_coord(height);
    let _ = write!(d, " L{},{h} L0,{h} Z", fmt_coord(width));
    d
}

pub fn build_paths(points: &[Point], width: f64, height: f64) -> PathSpec {
    PathSpec { line: build_line(points), area: build_area(points, width, height) }
}

/// Print a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_coord(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    // avoid "-0"
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r}")
}
