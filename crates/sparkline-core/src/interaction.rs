// File: crates/sparkline-core/src/interaction.rs
// Summary: Pointer → nearest sample index, and the per-chart hover state.

use crate::geometry::clamp;

/// Pointer input in plot-pixel space (x relative to the plot's left edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f64 },
    Leave,
}

/// Nearest sample index for a horizontal pointer offset.
///
/// Rounds half away from zero, so a pointer exactly between index 2 and 3
/// resolves to 3. Out-of-range offsets clamp to the first/last index.
/// Returns `None` only for an empty series.
pub fn nearest_index(pointer_x: f64, width: f64, len: usize) -> Option<usize> {
    if len == 0 { return None; }
    if width.is_nan() || width <= 0.0 || pointer_x.is_nan() { return Some(0); }
    let last = (len - 1) as f64;
    let pos = (pointer_x / width * last).round();
    // inf / inf when both pointer and width are unbounded
    if pos.is_nan() { return Some(0); }
    Some(clamp(pos, 0.0, last) as usize)
}

/// Owns the hover index for one chart; the most recent event wins.
#[derive(Clone, Debug)]
pub struct InteractionTracker {
    enabled: bool,
    hover: Option<usize>,
}

impl InteractionTracker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, hover: None }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled { self.hover = None; }
    }

    pub fn hover(&self) -> Option<usize> { self.hover }

    /// Apply a pointer event against a plot of `width` showing `len` samples.
    pub fn handle_event(&mut self, evt: PointerEvent, width: f64, len: usize) -> Option<usize> {
        if !self.enabled { return None; }
        self.hover = match evt {
            PointerEvent::Move { x } => nearest_index(x, width, len),
            PointerEvent::Leave => None,
        };
        tracing::trace!(?evt, hover = ?self.hover, "pointer event");
        self.hover
    }

    /// Re-establish the index bound after the series changed length.
    pub fn retain_within(&mut self, len: usize) {
        self.hover = match self.hover {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }
}

impl Default for InteractionTracker {
    fn default() -> Self { Self::new(true) }
}
