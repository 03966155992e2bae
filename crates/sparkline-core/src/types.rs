// File: crates/sparkline-core/src/types.rs
// Summary: Shared types and constants (default extent, points, plot extent).

/// Default plot width in pixels.
pub const WIDTH: f64 = 300.0;
/// Default plot height in pixels.
pub const HEIGHT: f64 = 100.0;
/// Default stroke thickness in pixels.
pub const STROKE_WIDTH: f64 = 3.0;

/// A position in plot-pixel space (origin top-left, y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Plot size and stroke thickness.
/// Contract: all fields are positive and finite (checked by `SparklineOptions::validate`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotExtent {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
}

impl PlotExtent {
    pub const fn new(width: f64, height: f64, stroke_width: f64) -> Self {
        Self { width, height, stroke_width }
    }
    /// Radius of the fixed first/last markers.
    pub fn dot_radius(&self) -> f64 { self.stroke_width * 1.5 }
    /// Radius of the marker drawn at the hovered point.
    pub fn hover_radius(&self) -> f64 { self.stroke_width * 2.0 }
}

impl Default for PlotExtent {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, STROKE_WIDTH)
    }
}
