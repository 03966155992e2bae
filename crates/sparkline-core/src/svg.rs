// File: crates/sparkline-core/src/svg.rs
// Summary: SVG markup fragments (document shell, gradients, markers, tooltip).

use std::fmt::Write as _;

use crate::animation::{AnimationSchedule, RevealPhase};
use crate::color::ColorPair;
use crate::geometry::clamp;
use crate::path::fmt_coord;
use crate::types::Point;

const TOOLTIP_HEIGHT: f64 = 20.0;
const TOOLTIP_GAP: f64 = 6.0;
const TOOLTIP_CHAR_WIDTH: f64 = 7.0;
const TOOLTIP_PADDING: f64 = 12.0;

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn open_document(svg: &mut String, width: f64, height: f64) {
    let (w, h) = (fmt_coord(width), fmt_coord(height));
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" role=\"img\">"
    );
}

pub fn close_document(svg: &mut String) {
    svg.push_str("</svg>\n");
}

/// Horizontal gradient in user space so flat (zero-height) lines still paint.
pub fn linear_gradient(svg: &mut String, id: &str, width: f64, start: &str, end: &str, opacity: f64) {
    let _ = writeln!(
        svg,
        "    <linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" x1=\"0\" y1=\"0\" x2=\"{}\" y2=\"0\">",
        fmt_coord(width)
    );
    for (offset, color) in [("0%", start), ("100%", end)] {
        let _ = writeln!(
            svg,
            "      <stop offset=\"{offset}\" stop-color=\"{}\" stop-opacity=\"{opacity}\"/>",
            escape_text(color)
        );
    }
    let _ = writeln!(svg, "    </linearGradient>");
}

pub fn drop_shadow(svg: &mut String, id: &str) {
    let _ = writeln!(svg, "    <filter id=\"{id}\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\">");
    let _ = writeln!(svg, "      <feDropShadow dx=\"0\" dy=\"1\" stdDeviation=\"1.5\" flood-opacity=\"0.3\"/>");
    let _ = writeln!(svg, "    </filter>");
}

/// The stroked line. Dash attributes and the `<animate>` child depend on the reveal phase.
pub fn line_path(svg: &mut String, d: &str, stroke: &str, stroke_width: f64, phase: RevealPhase) {
    let _ = write!(
        svg,
        "  <path d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"",
        fmt_coord(stroke_width)
    );
    match phase {
        RevealPhase::Static | RevealPhase::Complete => {
            let _ = writeln!(svg, "/>");
        }
        RevealPhase::Hidden(s) => {
            dash_attrs(svg, &s);
            let _ = writeln!(svg, "/>");
        }
        RevealPhase::Running { schedule, elapsed } => {
            dash_attrs(svg, &schedule);
            let _ = writeln!(svg, ">");
            let _ = writeln!(
                svg,
                "    <animate attributeName=\"stroke-dashoffset\" from=\"{}\" to=\"{}\" begin=\"{}s\" dur=\"{}s\" calcMode=\"spline\" keyTimes=\"0;1\" keySplines=\"{}\" fill=\"freeze\"/>",
                fmt_coord(schedule.start_offset),
                fmt_coord(schedule.end_offset),
                fmt_coord(-elapsed.as_secs_f64()),
                fmt_coord(schedule.duration.as_secs_f64()),
                schedule.easing.key_spline()
            );
            let _ = writeln!(svg, "  </path>");
        }
    }
}

fn dash_attrs(svg: &mut String, s: &AnimationSchedule) {
    let _ = write!(
        svg,
        " stroke-dasharray=\"{}\" stroke-dashoffset=\"{}\"",
        fmt_coord(s.length),
        fmt_coord(s.start_offset)
    );
}

pub fn circle(svg: &mut String, p: Point, r: f64, fill: &str, stroke: Option<(&str, f64)>) {
    let _ = write!(
        svg,
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
        fmt_coord(p.x),
        fmt_coord(p.y),
        fmt_coord(r),
        escape_text(fill)
    );
    if let Some((color, width)) = stroke {
        let _ = write!(svg, " stroke=\"{}\" stroke-width=\"{}\"", escape_text(color), fmt_coord(width));
    }
    let _ = writeln!(svg, "/>");
}

/// Label box above the hovered point (below it when there is no room),
/// kept inside the plot horizontally.
pub fn tooltip(svg: &mut String, anchor: Point, clearance: f64, label: &str, colors: ColorPair, plot: (f64, f64), filter_id: &str) {
    let (width, height) = plot;
    let box_w = label.chars().count() as f64 * TOOLTIP_CHAR_WIDTH + TOOLTIP_PADDING;
    let box_h = TOOLTIP_HEIGHT;

    let x = clamp(anchor.x - box_w / 2.0, 0.0, (width - box_w).max(0.0));
    let above = anchor.y - clearance - TOOLTIP_GAP - box_h;
    let y = if above >= 0.0 { above } else { anchor.y + clearance + TOOLTIP_GAP };
    let y = clamp(y, 0.0, (height - box_h).max(0.0));

    let _ = writeln!(svg, "  <g class=\"tooltip\" filter=\"url(#{filter_id})\">");
    let _ = writeln!(
        svg,
        "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"4\" fill=\"{}\"/>",
        fmt_coord(x),
        fmt_coord(y),
        fmt_coord(box_w),
        fmt_coord(box_h),
        colors.background
    );
    let _ = writeln!(
        svg,
        "    <text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"12\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
        fmt_coord(x + box_w / 2.0),
        fmt_coord(y + box_h / 2.0),
        colors.foreground,
        escape_text(label)
    );
    let _ = writeln!(svg, "  </g>");
}
