// File: crates/chart-core/src/renderer/overlay.rs
// Summary: Grid bands, grid lines and markers drawn across the data area for either axis.

use crate::axis::ValueAxis;
use crate::geometry::{Line, Point, Rect};
use crate::graphics::{aligned_text_bounds, draw_aligned_string, with_alpha, Graphics2D};
use crate::marker::{Marker, MarkerKind};
use crate::paint::{Paint, Stroke};
use crate::plot::PlotContext;
use crate::shape::Shape;
use crate::types::{LengthAdjustmentType, RectangleEdge};

/// Which plot axis an overlay belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRole {
    Domain,
    Range,
}

impl AxisRole {
    fn edge(&self, plot: &PlotContext) -> RectangleEdge {
        match self {
            AxisRole::Domain => plot.domain_edge,
            AxisRole::Range => plot.range_edge,
        }
    }

    /// True when values along this axis vary with device x.
    fn runs_horizontally(&self, plot: &PlotContext) -> bool {
        (*self == AxisRole::Domain) == plot.orientation.is_vertical()
    }
}

/// Full-height (or full-width) band between two device coordinates.
fn band(role: AxisRole, plot: &PlotContext, area: &Rect, v1: f64, v2: f64) -> Rect {
    let lo = v1.min(v2);
    let extent = (v2 - v1).abs();
    if role.runs_horizontally(plot) {
        Rect::new(lo, area.min_y(), extent, area.height)
    } else {
        Rect::new(area.min_x(), lo, area.width, extent)
    }
}

/// Line across the data area at device coordinate `v`.
fn line_across(role: AxisRole, plot: &PlotContext, area: &Rect, v: f64) -> Line {
    if role.runs_horizontally(plot) {
        Line::new(v, area.min_y(), v, area.max_y())
    } else {
        Line::new(area.min_x(), v, area.max_x(), v)
    }
}

/// Fill the band between two axis values with the plot's tick-band paint, if any.
pub fn fill_grid_band(
    g2: &mut dyn Graphics2D,
    plot: &PlotContext,
    role: AxisRole,
    axis: &dyn ValueAxis,
    area: &Rect,
    start: f64,
    end: f64,
) {
    let paint = match role {
        AxisRole::Domain => plot.domain_tick_band_paint,
        AxisRole::Range => plot.range_tick_band_paint,
    };
    let Some(paint) = paint else { return };
    let edge = role.edge(plot);
    let v1 = axis.value_to_device(start, area, edge);
    let v2 = axis.value_to_device(end, area, edge);
    g2.fill(&Shape::Rect(band(role, plot, area, v1, v2)), &paint);
}

/// Grid line at `value`; values outside the axis range are skipped.
#[allow(clippy::too_many_arguments)]
pub fn draw_grid_line(
    g2: &mut dyn Graphics2D,
    plot: &PlotContext,
    role: AxisRole,
    axis: &dyn ValueAxis,
    area: &Rect,
    value: f64,
    paint: &Paint,
    stroke: &Stroke,
) {
    if !axis.range().contains(value) {
        return;
    }
    let v = axis.value_to_device(value, area, role.edge(plot));
    g2.draw(&Shape::Line(line_across(role, plot, area, v)), paint, stroke);
}

fn marker_label_anchor(
    plot: &PlotContext,
    role: AxisRole,
    marker: &Marker,
    marker_area: &Rect,
    offset_type: LengthAdjustmentType,
) -> Point {
    let contract = LengthAdjustmentType::Contract;
    let anchor_rect = if role.runs_horizontally(plot) {
        marker.label_offset.create_adjusted_rectangle(marker_area, offset_type, contract)
    } else {
        marker.label_offset.create_adjusted_rectangle(marker_area, contract, offset_type)
    };
    marker.label_anchor.anchor_point(&anchor_rect)
}

fn draw_marker_label(g2: &mut dyn Graphics2D, marker: &Marker, anchor: Point) {
    let Some(label) = marker.label.as_deref() else { return };
    let bounds = aligned_text_bounds(g2, label, &marker.label_font, anchor.x, anchor.y, marker.label_text_anchor);
    if marker.label_background.a > 0 {
        g2.fill(&Shape::Rect(bounds), &Paint::Solid(marker.label_background));
    }
    draw_aligned_string(
        g2,
        label,
        &marker.label_font,
        &marker.label_paint,
        anchor.x,
        anchor.y,
        marker.label_text_anchor,
    );
}

/// Draw a value or interval marker for `role`'s axis.
pub fn draw_marker(
    g2: &mut dyn Graphics2D,
    plot: &PlotContext,
    role: AxisRole,
    axis: &dyn ValueAxis,
    marker: &Marker,
    area: &Rect,
) {
    let range = axis.range();
    let edge = role.edge(plot);
    match marker.kind {
        MarkerKind::Value(value) => {
            if !range.contains(value) {
                return;
            }
            let v = axis.value_to_device(value, area, edge);
            let line = line_across(role, plot, area, v);
            with_alpha(g2, marker.alpha, |g2| {
                g2.draw(&Shape::Line(line), &marker.paint, &marker.stroke);
                let anchor = marker_label_anchor(plot, role, marker, &line.bounds(), LengthAdjustmentType::Expand);
                draw_marker_label(g2, marker, anchor);
            });
        }
        MarkerKind::Interval { start, end, gradient_transformer } => {
            if !range.intersects(start, end) {
                return;
            }
            let start2d = axis.value_to_device(start, area, edge);
            let end2d = axis.value_to_device(end, area, edge);
            let (mut low, mut high) = (start2d.min(end2d), start2d.max(end2d));
            let rect = if role.runs_horizontally(plot) {
                low = low.max(area.min_x());
                high = high.min(area.max_x());
                Rect::new(low, area.min_y(), high - low, area.height)
            } else {
                low = low.max(area.min_y());
                high = high.min(area.max_y());
                Rect::new(area.min_x(), low, area.width, high - low)
            };
            with_alpha(g2, marker.alpha, |g2| {
                let paint = marker.paint.fitted(gradient_transformer, &rect);
                g2.fill(&Shape::Rect(rect), &paint);
                if let (Some(outline_paint), Some(outline_stroke)) = (&marker.outline_paint, &marker.outline_stroke) {
                    if range.contains(start) {
                        let l = line_across(role, plot, area, start2d);
                        g2.draw(&Shape::Line(l), outline_paint, outline_stroke);
                    }
                    if range.contains(end) {
                        let l = line_across(role, plot, area, end2d);
                        g2.draw(&Shape::Line(l), outline_paint, outline_stroke);
                    }
                }
                let anchor = marker_label_anchor(plot, role, marker, &rect, marker.label_offset_type);
                draw_marker_label(g2, marker, anchor);
            });
        }
    }
}
