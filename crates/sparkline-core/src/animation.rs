// File: crates/sparkline-core/src/animation.rs
// Summary: Stroke reveal schedule and the hidden → running → complete phase tracker.

use std::time::Duration;

use crate::series::SeriesKey;

/// Length of the reveal transition.
pub const REVEAL_DURATION: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
}

impl Easing {
    /// Cubic bezier control points (SMIL `keySplines` form).
    pub fn key_spline(&self) -> &'static str {
        match self {
            Easing::EaseInOut => "0.42 0 0.58 1",
        }
    }
}

/// Dash-offset transition that exposes the stroke from start to end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSchedule {
    /// Total polyline length; also the dash length.
    pub length: f64,
    /// Offset at which the stroke is fully hidden (= `length`).
    pub start_offset: f64,
    /// Offset at which the stroke is fully revealed.
    pub end_offset: f64,
    pub duration: Duration,
    pub easing: Easing,
}

/// Build a reveal schedule, or `None` when disabled or the length is unusable
/// (zero, negative, non-finite). `None` means the line is drawn fully visible.
pub fn schedule(path_length: f64, enabled: bool) -> Option<AnimationSchedule> {
    if !enabled || !path_length.is_finite() || path_length <= 0.0 {
        return None;
    }
    Some(AnimationSchedule {
        length: path_length,
        start_offset: path_length,
        end_offset: 0.0,
        duration: REVEAL_DURATION,
        easing: Easing::EaseInOut,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    /// No animation; stroke fully visible.
    Static,
    /// Stroke fully hidden; waiting for this state to reach a rendered frame.
    Hidden(AnimationSchedule),
    /// Transition in progress.
    Running { schedule: AnimationSchedule, elapsed: Duration },
    /// Transition finished; stroke fully visible.
    Complete,
}

/// Per-chart reveal state. Restarts whenever the series content changes or
/// animation is switched on.
#[derive(Clone, Debug)]
pub struct RevealAnimator {
    phase: RevealPhase,
    key: Option<SeriesKey>,
    enabled: bool,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self { phase: RevealPhase::Static, key: None, enabled: false }
    }

    pub fn phase(&self) -> RevealPhase { self.phase }

    /// Reconcile with the current series and flag. Returns true when a fresh
    /// schedule was produced.
    pub fn sync(&mut self, key: SeriesKey, enabled: bool, path_length: f64) -> bool {
        let data_changed = self.key != Some(key);
        let toggled_on = enabled && !self.enabled;
        self.key = Some(key);
        self.enabled = enabled;

        if !enabled {
            self.phase = RevealPhase::Static;
            return false;
        }
        if data_changed || toggled_on {
            self.phase = match schedule(path_length, true) {
                Some(s) => RevealPhase::Hidden(s),
                None => RevealPhase::Static,
            };
            tracing::debug!(path_length, phase = ?self.phase, "reveal retriggered");
            return matches!(self.phase, RevealPhase::Hidden(_));
        }
        self.rescale(path_length);
        false
    }

    /// The current frame has been presented. A pending hidden state starts running.
    pub fn commit_frame(&mut self) {
        if let RevealPhase::Hidden(schedule) = self.phase {
            self.phase = RevealPhase::Running { schedule, elapsed: Duration::ZERO };
        }
    }

    /// Advance wall-clock time of a running transition.
    pub fn advance(&mut self, dt: Duration) {
        if let RevealPhase::Running { schedule, elapsed } = self.phase {
            let elapsed = elapsed + dt;
            self.phase = if elapsed >= schedule.duration {
                RevealPhase::Complete
            } else {
                RevealPhase::Running { schedule, elapsed }
            };
        }
    }

    /// Jump a pending or running reveal to its end state.
    pub fn finish(&mut self) {
        if matches!(self.phase, RevealPhase::Hidden(_) | RevealPhase::Running { .. }) {
            self.phase = RevealPhase::Complete;
        }
    }

    // Extent changed without new data: keep the phase, follow the new length.
    fn rescale(&mut self, path_length: f64) {
        let Some(fresh) = schedule(path_length, true) else { return };
        match &mut self.phase {
            RevealPhase::Hidden(s) => *s = fresh,
            RevealPhase::Running { schedule, .. } => *schedule = fresh,
            _ => {}
        }
    }
}

impl Default for RevealAnimator {
    fn default() -> Self { Self::new() }
}
