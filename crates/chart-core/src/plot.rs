// File: crates/chart-core/src/plot.rs
// Summary: Plot settings seen by renderers, and the XY plot that drives a renderer over a dataset.

use crate::annotation::Layer;
use crate::axis::{NumberAxis, ValueAxis};
use crate::crosshair::CrosshairState;
use crate::dataset::XyDataset;
use crate::entity::PlotRenderingInfo;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::graphics::Graphics2D;
use crate::legend::LegendItem;
use crate::marker::Marker;
use crate::paint::{Color, Paint, Stroke};
use crate::range::Range;
use crate::renderer::{AxisRole, DrawContext, XyItemRenderer};
use crate::shape::Shape;
use crate::types::{PlotOrientation, RectangleEdge};

/// Plot-level settings a renderer reads while drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotContext {
    pub orientation: PlotOrientation,
    pub domain_edge: RectangleEdge,
    pub range_edge: RectangleEdge,
    pub dataset_index: usize,
    pub domain_crosshair_locked_on_data: bool,
    pub range_crosshair_locked_on_data: bool,
    pub domain_tick_band_paint: Option<Paint>,
    pub range_tick_band_paint: Option<Paint>,
}

impl PlotContext {
    /// Default edges: domain along the bottom and range on the left for vertical plots.
    pub fn new(orientation: PlotOrientation) -> Self {
        let (domain_edge, range_edge) = match orientation {
            PlotOrientation::Vertical => (RectangleEdge::Bottom, RectangleEdge::Left),
            PlotOrientation::Horizontal => (RectangleEdge::Left, RectangleEdge::Bottom),
        };
        Self {
            orientation,
            domain_edge,
            range_edge,
            dataset_index: 0,
            domain_crosshair_locked_on_data: true,
            range_crosshair_locked_on_data: true,
            domain_tick_band_paint: None,
            range_tick_band_paint: None,
        }
    }

    /// Data point (`x`, `y`) in device space.
    pub fn to_device(
        &self,
        x: f64,
        y: f64,
        area: &Rect,
        domain_axis: &dyn ValueAxis,
        range_axis: &dyn ValueAxis,
    ) -> Point {
        let tx = domain_axis.value_to_device(x, area, self.domain_edge);
        let ty = range_axis.value_to_device(y, area, self.range_edge);
        if self.orientation.is_horizontal() {
            Point::new(ty, tx)
        } else {
            Point::new(tx, ty)
        }
    }
}

impl Default for PlotContext {
    fn default() -> Self {
        Self::new(PlotOrientation::Vertical)
    }
}

/// Order in which series are handed to the renderer within a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeriesRenderingOrder {
    Forward,
    #[default]
    Reverse,
}

/// One dataset, two axes and one renderer, drawn into a data area.
pub struct XyPlot {
    pub context: PlotContext,
    pub dataset: Option<Box<dyn XyDataset>>,
    pub domain_axis: Box<dyn ValueAxis>,
    pub range_axis: Box<dyn ValueAxis>,
    pub renderer: Box<dyn XyItemRenderer>,
    pub domain_markers: Vec<Marker>,
    pub range_markers: Vec<Marker>,
    pub series_rendering_order: SeriesRenderingOrder,
    pub background: Option<Paint>,
    pub gridline_paint: Paint,
    pub gridline_stroke: Stroke,
    /// Number of grid lines per axis; zero disables grid lines and bands.
    pub grid_steps: usize,
}

impl XyPlot {
    pub fn new(dataset: Box<dyn XyDataset>, renderer: Box<dyn XyItemRenderer>) -> Self {
        Self {
            context: PlotContext::default(),
            dataset: Some(dataset),
            domain_axis: Box::new(NumberAxis::default_x()),
            range_axis: Box::new(NumberAxis::default_y()),
            renderer,
            domain_markers: Vec::new(),
            range_markers: Vec::new(),
            series_rendering_order: SeriesRenderingOrder::default(),
            background: None,
            gridline_paint: Paint::Solid(Color::LIGHT_GRAY),
            gridline_stroke: Stroke::new(0.5),
            grid_steps: 6,
        }
    }

    pub fn with_axes(mut self, domain_axis: Box<dyn ValueAxis>, range_axis: Box<dyn ValueAxis>) -> Self {
        self.domain_axis = domain_axis;
        self.range_axis = range_axis;
        self
    }

    pub fn with_orientation(mut self, orientation: PlotOrientation) -> Self {
        let mut ctx = PlotContext::new(orientation);
        ctx.domain_crosshair_locked_on_data = self.context.domain_crosshair_locked_on_data;
        ctx.range_crosshair_locked_on_data = self.context.range_crosshair_locked_on_data;
        ctx.domain_tick_band_paint = self.context.domain_tick_band_paint;
        ctx.range_tick_band_paint = self.context.range_tick_band_paint;
        self.context = ctx;
        self
    }

    /// X extent of the data as the renderer reports it.
    pub fn domain_bounds(&self) -> Option<Range> {
        self.renderer.find_domain_bounds(self.dataset.as_deref())
    }

    /// Y extent of the data within the current domain axis range.
    pub fn range_bounds(&self) -> Option<Range> {
        self.renderer
            .find_range_bounds(self.dataset.as_deref(), Some(self.domain_axis.range()))
    }

    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.renderer.legend_items(self.dataset.as_deref(), self.context.dataset_index)
    }

    fn draw_grid(&self, g2: &mut dyn Graphics2D, area: &Rect) {
        if self.grid_steps < 2 {
            return;
        }
        let axes: [(AxisRole, &dyn ValueAxis); 2] = [
            (AxisRole::Domain, self.domain_axis.as_ref()),
            (AxisRole::Range, self.range_axis.as_ref()),
        ];
        for (role, axis) in axes {
            let r = axis.range();
            let ticks = grid_ticks(r, self.grid_steps);
            for pair in ticks.windows(2).step_by(2) {
                self.renderer.fill_grid_band(g2, &self.context, role, axis, area, pair[0], pair[1]);
            }
            for &t in &ticks {
                self.renderer.draw_grid_line(
                    g2,
                    &self.context,
                    role,
                    axis,
                    area,
                    t,
                    &self.gridline_paint,
                    &self.gridline_stroke,
                );
            }
        }
    }

    /// Draw everything into `area`: background, grid, markers, annotations and series.
    pub fn draw(
        &self,
        g2: &mut dyn Graphics2D,
        area: Rect,
        mut crosshair: Option<&mut CrosshairState>,
        collect_entities: bool,
    ) -> Result<PlotRenderingInfo> {
        let mut info = PlotRenderingInfo { data_area: area, ..Default::default() };
        let renderer = self.renderer.as_ref();
        let (domain_axis, range_axis) = (self.domain_axis.as_ref(), self.range_axis.as_ref());

        if let Some(bg) = &self.background {
            g2.fill(&Shape::Rect(area), bg);
        }
        self.draw_grid(g2, &area);
        for m in &self.domain_markers {
            renderer.draw_marker(g2, &self.context, AxisRole::Domain, domain_axis, m, &area);
        }
        for m in &self.range_markers {
            renderer.draw_marker(g2, &self.context, AxisRole::Range, range_axis, m, &area);
        }
        renderer.draw_annotations(g2, &self.context, &area, domain_axis, range_axis, Layer::Background);

        if let Some(dataset) = self.dataset.as_deref() {
            let ctx = DrawContext::new(area, &self.context, domain_axis, range_axis, dataset);
            let mut state = renderer.initialise(&ctx, collect_entities)?;
            let passes = renderer.pass_count();
            let mut series_order: Vec<usize> = (0..dataset.series_count()).collect();
            if self.series_rendering_order == SeriesRenderingOrder::Reverse {
                series_order.reverse();
            }
            tracing::debug!(renderer = renderer.name(), passes, series = series_order.len(), "drawing dataset");
            for pass in 0..passes {
                for &series in &series_order {
                    let count = dataset.item_count(series);
                    if count == 0 || !renderer.base().is_series_visible(series) {
                        continue;
                    }
                    state.start_series_pass(dataset, series, 0, count - 1, pass, passes);
                    for item in 0..count {
                        renderer.draw_item(g2, &mut state, &ctx, series, item, crosshair.as_deref_mut(), pass)?;
                    }
                    state.end_series_pass(series, pass);
                }
            }
            if let Some(entities) = state.take_entities() {
                info.entities = entities;
            }
        }

        renderer.draw_annotations(g2, &self.context, &area, domain_axis, range_axis, Layer::Foreground);
        Ok(info)
    }
}

/// `steps` evenly spaced values across `range`, both ends included.
fn grid_ticks(range: Range, steps: usize) -> Vec<f64> {
    let step = range.length() / (steps.max(2) - 1) as f64;
    (0..steps.max(2)).map(|i| range.lower() + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_ticks_include_both_ends() {
        assert_eq!(grid_ticks(Range::new(0.0, 10.0), 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }
}
