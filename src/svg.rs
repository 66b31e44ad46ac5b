//! SVG visualization of a stack's placements.
//!
//! Draws the container, its alignment anchor, and for every child the frame
//! it would occupy, its pivot and the offset vector from the anchor. Frames
//! that overflow the container are drawn too; the view grows to fit them.
//!
//! # Example
//!
//! ```
//! use zenstack::{Alignment, Child, ProposedSize, Rect, ScalingStack, SizingRule};
//! use zenstack::svg::render_placements_svg;
//!
//! let stack = ScalingStack::new(Alignment::Center);
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//! let children = [
//!     Child::new(()).with_size(SizingRule::fraction(0.92, 0.92)),
//!     Child::new(())
//!         .with_size(SizingRule::fraction(0.25, 0.25))
//!         .with_offset(SizingRule::fraction(0.45, 0.0)),
//! ];
//! let placements = stack.placements(bounds, ProposedSize::from(bounds.size()), &children);
//!
//! let svg = render_placements_svg(&stack, bounds, &placements);
//! // svg is a complete SVG document string
//! ```

use crate::geometry::{Point, Rect};
use crate::stack::{Placement, ScalingStack};

/// Maximum pixel width of the drawing area.
const MAX_PANEL_W: f64 = 400.0;
/// Maximum pixel height of the drawing area.
const MAX_PANEL_H: f64 = 400.0;
/// Margin around the drawing area.
const MARGIN: f64 = 30.0;
/// Height of the title above the drawing area.
const LABEL_H: f64 = 22.0;
/// Radius of pivot markers.
const PIVOT_R: f64 = 3.0;
/// Half-length of the anchor crosshair arms.
const CROSS: f64 = 7.0;

/// Render a complete SVG document showing `placements` inside `bounds`.
///
/// `placements` are usually the output of
/// [`ScalingStack::placements`](crate::ScalingStack::placements) for the
/// same `bounds`; children are numbered in slice order.
pub fn render_placements_svg(stack: &ScalingStack, bounds: Rect, placements: &[Placement]) -> String {
    let extent = placements
        .iter()
        .map(|p| p.frame())
        .fold(bounds, union);
    let (panel_w, panel_h, scale) = scale_to_fit(extent);

    let total_w = panel_w + 2.0 * MARGIN;
    let total_h = panel_h + 2.0 * MARGIN + LABEL_H;

    // Layout space → drawing space.
    let origin_x = MARGIN - extent.min_x() * scale;
    let origin_y = MARGIN + LABEL_H - extent.min_y() * scale;
    let map = |p: Point| (origin_x + p.x * scale, origin_y + p.y * scale);
    let map_rect = |r: Rect| {
        let (x, y) = map(Point::new(r.min_x(), r.min_y()));
        (x, y, r.width.abs() * scale, r.height.abs() * scale)
    };

    let mut svg = String::with_capacity(2048 + placements.len() * 256);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w.ceil() as u32,
        total_h.ceil() as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .index { font-size: 10px; fill: #2c6faa; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .child { fill: #6ba3d6; fill-opacity: 0.35; stroke: #2c6faa; stroke-width: 1.5; }
  .pivot { fill: #2c6faa; }
  .offset { stroke: #d67a2c; stroke-width: 1.5; fill: none; stroke-dasharray: 4,2; }
  .anchor { stroke: #c0392b; stroke-width: 2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .index { fill: #5a9fd4; }
    .container { fill: #2d2d2d; stroke: #555; }
    .child { fill: #3a72a4; stroke: #5a9fd4; }
    .pivot { fill: #5a9fd4; }
    .offset { stroke: #e89a5a; }
    .anchor { stroke: #e05a4a; }
  }
</style>
"##);

    // Title
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN + 14.0,
        escape_xml(&format!(
            "Stack  {}×{}  {}",
            fmt_num(bounds.width),
            fmt_num(bounds.height),
            stack.alignment
        ))
    ));
    svg.push('\n');

    // Container
    let (cx, cy, cw, ch) = map_rect(bounds);
    svg.push_str(&format!(
        r#"<rect x="{cx:.1}" y="{cy:.1}" width="{cw:.1}" height="{ch:.1}" class="container"/>"#
    ));
    svg.push('\n');

    let anchor = stack.alignment.anchor_point(bounds);
    let (ax, ay) = map(anchor);

    for (i, p) in placements.iter().enumerate() {
        let (x, y, w, h) = map_rect(p.frame());
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="child"/>"#
        ));
        svg.push('\n');

        let (px, py) = map(p.position);
        if p.position != anchor {
            svg.push_str(&format!(
                r#"<line x1="{ax:.1}" y1="{ay:.1}" x2="{px:.1}" y2="{py:.1}" class="offset"/>"#
            ));
            svg.push('\n');
        }
        svg.push_str(&format!(
            r#"<circle cx="{px:.1}" cy="{py:.1}" r="{PIVOT_R}" class="pivot"/>"#
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index">{}</text>"#,
            x + 3.0,
            y + 11.0,
            escape_xml(&format!(
                "#{i} {}×{}",
                fmt_num(p.proposal.width),
                fmt_num(p.proposal.height)
            ))
        ));
        svg.push('\n');
    }

    // Anchor crosshair on top of everything
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{ay:.1}" x2="{:.1}" y2="{ay:.1}" class="anchor"/>"#,
        ax - CROSS,
        ax + CROSS
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<line x1="{ax:.1}" y1="{:.1}" x2="{ax:.1}" y2="{:.1}" class="anchor"/>"#,
        ay - CROSS,
        ay + CROSS
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Smallest rect containing both, using standardized edges.
fn union(a: Rect, b: Rect) -> Rect {
    let min_x = a.min_x().min(b.min_x());
    let min_y = a.min_y().min(b.min_y());
    let max_x = a.max_x().max(b.max_x());
    let max_y = a.max_y().max(b.max_y());
    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Scale a rect to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(r: Rect) -> (f64, f64, f64) {
    let w = r.width.abs();
    let h = r.height.abs();
    if !(w.is_finite() && h.is_finite()) || w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Whole numbers without a fraction, everything else to one decimal.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
