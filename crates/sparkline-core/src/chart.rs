// File: crates/sparkline-core/src/chart.rs
// Summary: Sparkline struct: derived geometry, hover state, reveal phase and SVG output.

use std::path::Path;
use std::time::Duration;

use crate::animation::{self, RevealAnimator, RevealPhase};
use crate::color::{self, ColorPair};
use crate::config::{SparklineConfig, SparklineOptions};
use crate::error::{Result, SparklineError};
use crate::geometry::{map_points, polyline_length};
use crate::id::InstanceId;
use crate::interaction::{InteractionTracker, PointerEvent};
use crate::path::{build_paths, PathSpec};
use crate::series::Series;
use crate::svg;
use crate::theme;
use crate::types::Point;

/// One sparkline instance. Owns its hover index, derived paths and reveal state.
pub struct Sparkline {
    id: InstanceId,
    series: Series,
    options: SparklineOptions,
    points: Vec<Point>,
    paths: PathSpec,
    length: f64,
    tooltip_colors: ColorPair,
    tracker: InteractionTracker,
    animator: RevealAnimator,
}

impl Sparkline {
    pub fn new(id: InstanceId, data: impl Into<Series>, options: SparklineOptions) -> Result<Self> {
        options.validate()?;
        let mut chart = Self {
            id,
            series: data.into(),
            tooltip_colors: color::resolve(&options.background_color),
            tracker: InteractionTracker::new(options.show_tooltip),
            options,
            points: Vec::new(),
            paths: PathSpec::default(),
            length: 0.0,
            animator: RevealAnimator::new(),
        };
        chart.recompute();
        Ok(chart)
    }

    pub fn from_config(id: InstanceId, config: SparklineConfig) -> Result<Self> {
        Self::new(id, config.data, config.options)
    }

    pub fn id(&self) -> &InstanceId { &self.id }
    pub fn series(&self) -> &Series { &self.series }
    pub fn options(&self) -> &SparklineOptions { &self.options }
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn paths(&self) -> &PathSpec { &self.paths }
    pub fn path_length(&self) -> f64 { self.length }
    pub fn tooltip_colors(&self) -> ColorPair { self.tooltip_colors }
    pub fn hover(&self) -> Option<usize> { self.tracker.hover() }
    pub fn reveal_phase(&self) -> RevealPhase { self.animator.phase() }

    /// Hovered index with its sample value.
    pub fn hovered_sample(&self) -> Option<(usize, f64)> {
        let i = self.tracker.hover()?;
        self.series.get(i).map(|v| (i, v))
    }

    pub fn set_data(&mut self, data: impl Into<Series>) {
        self.series = data.into();
        self.tracker.retain_within(self.series.len());
        self.recompute();
    }

    pub fn set_options(&mut self, options: SparklineOptions) -> Result<()> {
        options.validate()?;
        if options.background_color != self.options.background_color {
            self.tooltip_colors = color::resolve(&options.background_color);
        }
        self.tracker.set_enabled(options.show_tooltip);
        self.options = options;
        self.recompute();
        Ok(())
    }

    pub fn handle_event(&mut self, evt: PointerEvent) -> Option<usize> {
        self.tracker.handle_event(evt, self.options.width, self.series.len())
    }

    /// Advance the running reveal transition by `dt` of wall-clock time.
    pub fn advance(&mut self, dt: Duration) {
        self.animator.advance(dt);
    }

    /// Skip the rest of the reveal; later frames draw the stroke fully visible.
    pub fn finish_reveal(&mut self) {
        self.animator.finish();
    }

    /// Render the current frame, then mark it as presented so a pending reveal
    /// starts on the next frame. `None` for an empty series.
    pub fn render(&mut self) -> Option<String> {
        let out = self.compose(self.animator.phase());
        if out.is_some() {
            self.animator.commit_frame();
        }
        out
    }

    /// Standalone document with the whole reveal embedded (when enabled).
    /// `None` for an empty series.
    pub fn render_document(&self) -> Option<String> {
        let phase = match animation::schedule(self.length, self.options.animate) {
            Some(schedule) => RevealPhase::Running { schedule, elapsed: Duration::ZERO },
            None => RevealPhase::Static,
        };
        self.compose(phase)
    }

    /// Write `render_document` to `path`. Returns false (and writes nothing) for an
    /// empty series.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let Some(doc) = self.render_document() else {
            tracing::debug!(path = %path.display(), "empty series; nothing written");
            return Ok(false);
        };
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, doc.as_bytes())
        };
        write().map_err(|source| SparklineError::SvgWrite { path: path.to_path_buf(), source })?;
        Ok(true)
    }

    fn recompute(&mut self) {
        let o = &self.options;
        self.points = map_points(self.series.values(), o.width, o.height);
        self.paths = build_paths(&self.points, o.width, o.height);
        self.length = polyline_length(&self.points);
        self.animator.sync(self.series.key(), o.animate, self.length);
        tracing::debug!(
            id = %self.id,
            samples = self.series.len(),
            path_length = self.length,
            "sparkline geometry updated"
        );
    }

    fn compose(&self, phase: RevealPhase) -> Option<String> {
        let (first, last) = (self.points.first()?, self.points.last()?);
        let o = &self.options;
        let extent = o.extent();
        let stroke_id = self.id.scoped("stroke");
        let fill_id = self.id.scoped("fill");
        let shadow_id = self.id.scoped("shadow");
        let colors = &o.gradient_colors;

        let mut out = String::with_capacity(1024 + self.paths.area.len() * 2);
        svg::open_document(&mut out, o.width, o.height);
        out.push_str("  <defs>\n");
        svg::linear_gradient(&mut out, &stroke_id, o.width, &colors.start, &colors.end, 1.0);
        svg::linear_gradient(&mut out, &fill_id, o.width, &colors.start, &colors.end, theme::FILL_OPACITY);
        if o.show_tooltip {
            svg::drop_shadow(&mut out, &shadow_id);
        }
        out.push_str("  </defs>\n");

        out.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            svg::escape_text(&o.background_color)
        ));
        out.push_str(&format!("  <path d=\"{}\" fill=\"url(#{fill_id})\"/>\n", self.paths.area));
        svg::line_path(&mut out, &self.paths.line, &format!("url(#{stroke_id})"), o.stroke_width, phase);

        if o.show_dots {
            svg::circle(&mut out, *first, extent.dot_radius(), &colors.start, None);
            svg::circle(&mut out, *last, extent.dot_radius(), &colors.end, None);
        }

        if o.show_tooltip {
            if let Some((i, value)) = self.hovered_sample() {
                let p = self.points[i];
                svg::circle(
                    &mut out,
                    p,
                    extent.hover_radius(),
                    theme::HOVER_MARKER,
                    Some((colors.end.as_str(), o.stroke_width)),
                );
                svg::tooltip(
                    &mut out,
                    p,
                    extent.hover_radius(),
                    &value.to_string(),
                    self.tooltip_colors,
                    (o.width, o.height),
                    &shadow_id,
                );
            }
        }

        svg::close_document(&mut out);
        Some(out)
    }
}
