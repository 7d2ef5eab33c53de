// File: crates/chart-core/src/renderer/line_shape.rs
// Summary: Connecting lines and per-item shapes; the strategy the curve, step and cyclic renderers build on.

use std::collections::HashMap;

use crate::crosshair::CrosshairState;
use crate::dataset::XyDataset;
use crate::error::Result;
use crate::geometry::{clip_line, Line};
use crate::graphics::Graphics2D;
use crate::legend::LegendItem;
use crate::shape::Shape;

use super::base::RendererBase;
use super::state::RendererState;
use super::{DrawContext, XyItemRenderer};

/// Draws lines between consecutive items (pass 0) and a shape at each item (pass 1).
pub struct LineAndShapeRenderer {
    base: RendererBase,
    lines_visible: bool,
    series_lines_visible: HashMap<usize, bool>,
    shapes_visible: bool,
    series_shapes_visible: HashMap<usize, bool>,
    shapes_filled: bool,
    series_shapes_filled: HashMap<usize, bool>,
    draw_outlines: bool,
    use_fill_paint: bool,
    use_outline_paint: bool,
    draw_series_line_as_path: bool,
    legend_line: Shape,
}

impl Default for LineAndShapeRenderer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl LineAndShapeRenderer {
    pub fn new(lines: bool, shapes: bool) -> Self {
        Self {
            base: RendererBase::new(),
            lines_visible: lines,
            series_lines_visible: HashMap::new(),
            shapes_visible: shapes,
            series_shapes_visible: HashMap::new(),
            shapes_filled: true,
            series_shapes_filled: HashMap::new(),
            draw_outlines: true,
            use_fill_paint: false,
            use_outline_paint: false,
            draw_series_line_as_path: false,
            legend_line: Shape::Line(Line::new(-7.0, 0.0, 7.0, 0.0)),
        }
    }

    pub fn lines_visible(&self) -> bool {
        self.lines_visible
    }
    pub fn set_lines_visible(&mut self, visible: bool) {
        self.lines_visible = visible;
        self.base.fire_change_event();
    }
    pub fn set_series_lines_visible(&mut self, series: usize, visible: Option<bool>) {
        match visible {
            Some(v) => self.series_lines_visible.insert(series, v),
            None => self.series_lines_visible.remove(&series),
        };
        self.base.fire_change_event();
    }
    pub fn shapes_visible(&self) -> bool {
        self.shapes_visible
    }
    pub fn set_shapes_visible(&mut self, visible: bool) {
        self.shapes_visible = visible;
        self.base.fire_change_event();
    }
    pub fn set_series_shapes_visible(&mut self, series: usize, visible: Option<bool>) {
        match visible {
            Some(v) => self.series_shapes_visible.insert(series, v),
            None => self.series_shapes_visible.remove(&series),
        };
        self.base.fire_change_event();
    }
    pub fn set_shapes_filled(&mut self, filled: bool) {
        self.shapes_filled = filled;
        self.base.fire_change_event();
    }
    pub fn set_series_shapes_filled(&mut self, series: usize, filled: Option<bool>) {
        match filled {
            Some(v) => self.series_shapes_filled.insert(series, v),
            None => self.series_shapes_filled.remove(&series),
        };
        self.base.fire_change_event();
    }
    pub fn set_draw_outlines(&mut self, draw: bool) {
        self.draw_outlines = draw;
        self.base.fire_change_event();
    }
    pub fn set_use_fill_paint(&mut self, use_fill: bool) {
        self.use_fill_paint = use_fill;
        self.base.fire_change_event();
    }
    pub fn set_use_outline_paint(&mut self, use_outline: bool) {
        self.use_outline_paint = use_outline;
        self.base.fire_change_event();
    }
    pub fn draw_series_line_as_path(&self) -> bool {
        self.draw_series_line_as_path
    }
    pub fn set_draw_series_line_as_path(&mut self, as_path: bool) {
        self.draw_series_line_as_path = as_path;
        self.base.fire_change_event();
    }
    pub fn set_legend_line(&mut self, line: Shape) {
        self.legend_line = line;
        self.base.fire_change_event();
    }

    pub fn item_line_visible(&self, series: usize, _item: usize) -> bool {
        self.series_lines_visible.get(&series).copied().unwrap_or(self.lines_visible)
    }
    pub fn item_shape_visible(&self, series: usize, _item: usize) -> bool {
        self.series_shapes_visible.get(&series).copied().unwrap_or(self.shapes_visible)
    }
    pub fn item_shape_filled(&self, series: usize, _item: usize) -> bool {
        self.series_shapes_filled.get(&series).copied().unwrap_or(self.shapes_filled)
    }

    /// Segment from the previous item to this one, clipped to the data area.
    pub fn draw_primary_line(
        &self,
        g2: &mut dyn Graphics2D,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
    ) {
        if item == 0 {
            return;
        }
        let ds = ctx.dataset;
        let (x1, y1) = (ds.x_value(series, item), ds.y_value(series, item));
        let (x0, y0) = (ds.x_value(series, item - 1), ds.y_value(series, item - 1));
        if [x0, y0, x1, y1].iter().any(|v| v.is_nan()) {
            return;
        }
        let p0 = ctx.point(ctx.map_x(x0), ctx.map_y(y0));
        let p1 = ctx.point(ctx.map_x(x1), ctx.map_y(y1));
        if !p0.is_finite() || !p1.is_finite() {
            return;
        }
        if let Some(line) = clip_line(&Line { start: p0, end: p1 }, &ctx.area) {
            self.draw_first_pass_shape(g2, series, item, &Shape::Line(line));
        }
    }

    /// Accumulate this item into the series path; stroke it at the last item.
    pub fn draw_primary_line_as_path(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
    ) {
        let ds = ctx.dataset;
        let p = ctx.point(ctx.map_x(ds.x_value(series, item)), ctx.map_y(ds.y_value(series, item)));
        if p.is_finite() {
            if state.last_point_good {
                state.series_path.line_to(p.x, p.y);
            } else {
                state.series_path.move_to(p.x, p.y);
            }
            state.last_point_good = true;
        } else {
            state.last_point_good = false;
        }
        if item == state.last_item_index() {
            let path = Shape::Path(state.series_path.clone());
            self.draw_first_pass_shape(g2, series, item, &path);
        }
    }

    /// Stroke `shape` with the item's paint and stroke.
    pub fn draw_first_pass_shape(&self, g2: &mut dyn Graphics2D, series: usize, item: usize, shape: &Shape) {
        g2.draw(shape, &self.base.item_paint(series, item), &self.base.item_stroke(series, item));
    }

    /// Item shape, item label, crosshair update and entity.
    pub fn draw_secondary_pass(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
        crosshair: Option<&mut CrosshairState>,
    ) {
        let ds = ctx.dataset;
        let (x1, y1) = (ds.x_value(series, item), ds.y_value(series, item));
        if x1.is_nan() || y1.is_nan() {
            return;
        }
        let trans_x1 = ctx.map_x(x1);
        let trans_y1 = ctx.map_y(y1);
        let p = ctx.point(trans_x1, trans_y1);
        let mut entity_area = None;
        if self.item_shape_visible(series, item) {
            let shape = self.base.item_shape(series, item).translated(p.x, p.y);
            if shape.intersects(&ctx.area) {
                if self.item_shape_filled(series, item) {
                    let paint = if self.use_fill_paint {
                        self.base.item_fill_paint(series, item)
                    } else {
                        self.base.item_paint(series, item)
                    };
                    g2.fill(&shape, &paint);
                }
                if self.draw_outlines {
                    let paint = if self.use_outline_paint {
                        self.base.item_outline_paint(series, item)
                    } else {
                        self.base.item_paint(series, item)
                    };
                    g2.draw(&shape, &paint, &self.base.item_outline_stroke(series, item));
                }
            }
            entity_area = Some(shape);
        }
        if self.base.is_item_label_visible(series, item) {
            self.base.draw_item_label(g2, ds, series, item, p.x, p.y, y1 < 0.0);
        }
        self.base.update_crosshair_values(crosshair, ctx.plot, x1, y1, trans_x1, trans_y1);
        if ctx.area.contains(p) {
            self.base.add_entity(state, entity_area, ds, ctx.plot.dataset_index, series, item, p.x, p.y);
        }
    }

    /// Legend entry showing the series line and shape as configured.
    pub fn line_shape_legend_item(&self, dataset: &dyn XyDataset, dataset_index: usize, series: usize) -> LegendItem {
        let b = &self.base;
        let shape = b.legend_shape(series);
        let fill = if self.use_fill_paint { b.series_fill_paint(series) } else { b.series_paint(series) };
        let mut item = LegendItem::new("", shape, fill);
        b.decorate_legend_item(&mut item, dataset, dataset_index, series);
        item.shape_visible = self.item_shape_visible(series, 0);
        item.shape_filled = self.item_shape_filled(series, 0);
        item.shape_outline_visible = self.draw_outlines;
        item.outline_paint = if self.use_outline_paint { b.series_outline_paint(series) } else { b.series_paint(series) };
        item.outline_stroke = b.series_outline_stroke(series);
        item.line_visible = self.item_line_visible(series, 0);
        item.line = self.legend_line.clone();
        item.line_paint = b.series_paint(series);
        item.line_stroke = b.series_stroke(series);
        item
    }
}

impl XyItemRenderer for LineAndShapeRenderer {
    fn name(&self) -> &'static str {
        "line-and-shape"
    }
    fn base(&self) -> &RendererBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        &mut self.base
    }
    fn pass_count(&self) -> usize {
        2
    }

    fn draw_item(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
        crosshair: Option<&mut CrosshairState>,
        pass: usize,
    ) -> Result<()> {
        ctx.dataset.check_item(series, item)?;
        if !self.base.item_visible(series, item) {
            return Ok(());
        }
        match pass {
            0 if self.item_line_visible(series, item) => {
                if self.draw_series_line_as_path {
                    self.draw_primary_line_as_path(g2, state, ctx, series, item);
                } else {
                    self.draw_primary_line(g2, ctx, series, item);
                }
            }
            1 => self.draw_secondary_pass(g2, state, ctx, series, item, crosshair),
            _ => {}
        }
        Ok(())
    }

    fn legend_item(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize, series: usize) -> Option<LegendItem> {
        Some(self.line_shape_legend_item(dataset?, dataset_index, series))
    }
}
