// File: crates/chart-core/src/renderer/area.rs
// Summary: Filled area under a series, with optional lines, shapes and outline.

use crate::crosshair::CrosshairState;
use crate::dataset::XyDataset;
use crate::error::Result;
use crate::geometry::{Line, Point};
use crate::graphics::Graphics2D;
use crate::legend::LegendItem;
use crate::paint::GradientPaintTransformer;
use crate::path::Path;
use crate::shape::Shape;

use super::base::RendererBase;
use super::state::{AreaScratch, RendererState, Scratch};
use super::{DrawContext, XyItemRenderer};

/// What an [`AreaRenderer`] draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaRendererType {
    Shapes,
    Lines,
    ShapesAndLines,
    #[default]
    Area,
    AreaAndShapes,
}

impl AreaRendererType {
    fn flags(self) -> (bool, bool, bool) {
        // (shapes, lines, area)
        match self {
            AreaRendererType::Shapes => (true, false, false),
            AreaRendererType::Lines => (false, true, false),
            AreaRendererType::ShapesAndLines => (true, true, false),
            AreaRendererType::Area => (false, false, true),
            AreaRendererType::AreaAndShapes => (true, false, true),
        }
    }
}

/// Accumulates one closed polygon per series, seeded and closed on the zero baseline.
pub struct AreaRenderer {
    base: RendererBase,
    plot_shapes: bool,
    plot_lines: bool,
    plot_area: bool,
    show_outline: bool,
    use_fill_paint: bool,
    gradient_transformer: GradientPaintTransformer,
    legend_area: Shape,
}

impl Default for AreaRenderer {
    fn default() -> Self {
        Self::new(AreaRendererType::Area)
    }
}

impl AreaRenderer {
    pub fn new(kind: AreaRendererType) -> Self {
        let (plot_shapes, plot_lines, plot_area) = kind.flags();
        Self {
            base: RendererBase::new(),
            plot_shapes,
            plot_lines,
            plot_area,
            show_outline: false,
            use_fill_paint: false,
            gradient_transformer: GradientPaintTransformer::default(),
            legend_area: default_legend_area(),
        }
    }

    pub fn plot_shapes(&self) -> bool {
        self.plot_shapes
    }
    pub fn plot_lines(&self) -> bool {
        self.plot_lines
    }
    pub fn plot_area(&self) -> bool {
        self.plot_area
    }

    pub fn is_outline(&self) -> bool {
        self.show_outline
    }
    pub fn set_outline(&mut self, show: bool) {
        self.show_outline = show;
        self.base.fire_change_event();
    }

    pub fn use_fill_paint(&self) -> bool {
        self.use_fill_paint
    }
    pub fn set_use_fill_paint(&mut self, use_fill: bool) {
        self.use_fill_paint = use_fill;
        self.base.fire_change_event();
    }

    pub fn gradient_transformer(&self) -> GradientPaintTransformer {
        self.gradient_transformer
    }
    pub fn set_gradient_transformer(&mut self, transformer: GradientPaintTransformer) {
        self.gradient_transformer = transformer;
        self.base.fire_change_event();
    }

    pub fn legend_area(&self) -> &Shape {
        &self.legend_area
    }
    pub fn set_legend_area(&mut self, area: Shape) {
        self.legend_area = area;
        self.base.fire_change_event();
    }
}

fn default_legend_area() -> Shape {
    Shape::polygon(&[
        Point::new(0.0, -4.0),
        Point::new(3.0, -2.0),
        Point::new(4.0, 4.0),
        Point::new(-4.0, 4.0),
        Point::new(-3.0, -2.0),
    ])
}

/// Y value used by the area renderers: NaN sits on the baseline.
pub(crate) fn area_y(dataset: &dyn XyDataset, series: usize, item: usize) -> f64 {
    let y = dataset.y_value(series, item);
    if y.is_nan() {
        0.0
    } else {
        y
    }
}

/// Hit region around `item`, built from the midpoints to its neighbours and
/// clamped at the series ends. Vertices are device points, orientation applied.
pub(crate) fn area_hotspot(ctx: &DrawContext<'_>, series: usize, item: usize) -> Path {
    let ds = ctx.dataset;
    let count = ds.item_count(series);
    let prev = item.saturating_sub(1);
    let next = (item + 1).min(count.saturating_sub(1));

    let x0 = ctx.map_x(ds.x_value(series, prev));
    let y0 = ctx.map_y(area_y(ds, series, prev));
    let x1 = ctx.map_x(ds.x_value(series, item));
    let y1 = ctx.map_y(area_y(ds, series, item));
    let x2 = ctx.map_x(ds.x_value(series, next));
    let y2 = ctx.map_y(area_y(ds, series, next));
    let zero = ctx.map_y(0.0);

    let pts = [
        ctx.point((x0 + x1) / 2.0, zero),
        ctx.point((x0 + x1) / 2.0, (y0 + y1) / 2.0),
        ctx.point(x1, y1),
        ctx.point((x1 + x2) / 2.0, (y1 + y2) / 2.0),
        ctx.point((x1 + x2) / 2.0, zero),
    ];
    Path::from_polygon(&pts)
}

impl XyItemRenderer for AreaRenderer {
    fn name(&self) -> &'static str {
        "area"
    }
    fn base(&self) -> &RendererBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        &mut self.base
    }

    fn initialise(&self, _ctx: &DrawContext<'_>, collect_entities: bool) -> Result<RendererState> {
        Ok(RendererState::with_scratch(collect_entities, Scratch::Area(AreaScratch::default())))
    }

    fn draw_item(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
        crosshair: Option<&mut CrosshairState>,
        _pass: usize,
    ) -> Result<()> {
        let ds = ctx.dataset;
        ds.check_item(series, item)?;
        if !self.base.item_visible(series, item) {
            return Ok(());
        }
        let count = ds.item_count(series);
        let x1 = ds.x_value(series, item);
        let y1 = area_y(ds, series, item);
        let trans_x1 = ctx.map_x(x1);
        let trans_y1 = ctx.map_y(y1);
        let zero = ctx.map_y(0.0);
        let p1 = ctx.point(trans_x1, trans_y1);

        let hotspot = area_hotspot(ctx, series, item);

        let area = &mut state.area_mut().area;
        if item == 0 {
            area.reset();
            let seed = ctx.point(trans_x1, zero);
            area.move_to(seed.x, seed.y);
        }
        area.line_to(p1.x, p1.y);

        let paint = self.base.item_paint(series, item);
        let stroke = self.base.item_stroke(series, item);

        if self.plot_shapes {
            let shape = self.base.item_shape(series, item).translated(p1.x, p1.y);
            g2.draw(&shape, &paint, &stroke);
        }

        if self.plot_lines && item > 0 {
            let x0 = ds.x_value(series, item - 1);
            let y0 = area_y(ds, series, item - 1);
            let p0 = ctx.point(ctx.map_x(x0), ctx.map_y(y0));
            g2.draw(&Shape::Line(Line { start: p0, end: p1 }), &paint, &stroke);
        }

        if self.plot_area && item > 0 && item + 1 == count {
            let close = ctx.point(trans_x1, zero);
            let area = &mut state.area_mut().area;
            area.line_to(close.x, close.y);
            area.close();
            let polygon = area.clone();

            let fill = if self.use_fill_paint {
                self.base.series_fill_paint(series)
            } else {
                paint
            };
            let fill = fill.fitted(Some(self.gradient_transformer), &ctx.area);
            let shape = Shape::Path(polygon);
            g2.fill(&shape, &fill);

            if self.show_outline {
                let outline_stroke = self.base.series_outline_stroke(series);
                let outline = if outline_stroke.is_dashed() {
                    match &shape {
                        Shape::Path(p) => Shape::Path(p.clip_to_rect(&ctx.area.expanded(5.0, 5.0))),
                        other => other.clone(),
                    }
                } else {
                    shape
                };
                g2.draw(&outline, &self.base.series_outline_paint(series), &outline_stroke);
            }
        }

        self.base.update_crosshair_values(crosshair, ctx.plot, x1, y1, trans_x1, trans_y1);

        let clipped = hotspot.clip_to_rect(&ctx.area);
        if !clipped.is_empty() {
            self.base.add_entity(state, Some(Shape::Path(clipped)), ds, ctx.plot.dataset_index, series, item, p1.x, p1.y);
        }
        Ok(())
    }

    fn legend_item(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize, series: usize) -> Option<LegendItem> {
        let ds = dataset?;
        let paint = self.base.series_paint(series);
        let mut item = LegendItem::new("", self.legend_area.clone(), paint);
        self.base.decorate_legend_item(&mut item, ds, dataset_index, series);
        if self.use_fill_paint {
            item.fill_paint = self.base.series_fill_paint(series);
        }
        item.shape_outline_visible = self.show_outline;
        item.outline_paint = self.base.series_outline_paint(series);
        item.outline_stroke = self.base.series_outline_stroke(series);
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_map_to_flags() {
        let r = AreaRenderer::new(AreaRendererType::AreaAndShapes);
        assert!(r.plot_area() && r.plot_shapes() && !r.plot_lines());
        let r = AreaRenderer::new(AreaRendererType::Lines);
        assert!(!r.plot_area() && !r.plot_shapes() && r.plot_lines());
    }

    #[test]
    fn legend_area_is_a_pentagon() {
        let r = AreaRenderer::default();
        let bounds = r.legend_area().bounds();
        assert_eq!((bounds.width, bounds.height), (8.0, 8.0));
    }
}
