// File: crates/chart-core/src/renderer/mod.rs
// Summary: XY item renderer contract, draw context, and the renderer family.

mod attributes;
mod base;
mod overlay;
mod state;

pub mod area;
pub mod area2;
pub mod bezier;
pub mod candlestick;
pub mod cyclic;
pub mod deviation_step;
pub mod line_shape;
pub mod sampling;

pub use attributes::SeriesAttribute;
pub use base::{AnnotationRemoval, RendererBase};
pub use overlay::AxisRole;
pub use state::RendererState;

pub use area::{AreaRenderer, AreaRendererType};
pub use area2::Area2Renderer;
pub use bezier::{BezierRenderer, FillType};
pub use candlestick::{CandlestickRenderer, CandleWidthMethod};
pub use cyclic::{CyclicRenderer, CyclicSegmentDataset};
pub use deviation_step::DeviationStepRenderer;
pub use line_shape::LineAndShapeRenderer;
pub use sampling::SamplingRenderer;

use crate::annotation::Layer;
use crate::axis::ValueAxis;
use crate::crosshair::CrosshairState;
use crate::dataset::XyDataset;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::graphics::Graphics2D;
use crate::legend::LegendItem;
use crate::marker::Marker;
use crate::paint::{Paint, Stroke};
use crate::plot::PlotContext;
use crate::range::Range;

/// Everything a renderer needs to map one series onto the data area.
#[derive(Clone, Copy)]
pub struct DrawContext<'a> {
    pub area: Rect,
    pub plot: &'a PlotContext,
    pub domain_axis: &'a dyn ValueAxis,
    pub range_axis: &'a dyn ValueAxis,
    pub dataset: &'a dyn XyDataset,
}

impl<'a> DrawContext<'a> {
    pub fn new(
        area: Rect,
        plot: &'a PlotContext,
        domain_axis: &'a dyn ValueAxis,
        range_axis: &'a dyn ValueAxis,
        dataset: &'a dyn XyDataset,
    ) -> Self {
        Self { area, plot, domain_axis, range_axis, dataset }
    }

    /// Domain value to device coordinate along the domain edge.
    pub fn map_x(&self, x: f64) -> f64 {
        self.domain_axis.value_to_device(x, &self.area, self.plot.domain_edge)
    }

    /// Range value to device coordinate along the range edge.
    pub fn map_y(&self, y: f64) -> f64 {
        self.range_axis.value_to_device(y, &self.area, self.plot.range_edge)
    }

    /// Device point for a (domain, range) device pair, honoring orientation.
    pub fn point(&self, trans_x: f64, trans_y: f64) -> Point {
        let (x, y) = RendererBase::orient(self.plot.orientation, trans_x, trans_y);
        Point::new(x, y)
    }

    pub fn with_domain_axis(&self, domain_axis: &'a dyn ValueAxis) -> Self {
        Self { domain_axis, ..*self }
    }

    pub fn with_dataset(&self, dataset: &'a dyn XyDataset) -> Self {
        Self { dataset, ..*self }
    }
}

/// One XY rendering strategy.
///
/// The plot calls [`initialise`](Self::initialise) once per draw, then
/// [`draw_item`](Self::draw_item) for every pass, series and item, in that
/// nesting order, threading the same state through.
pub trait XyItemRenderer {
    fn name(&self) -> &'static str;
    fn base(&self) -> &RendererBase;
    fn base_mut(&mut self) -> &mut RendererBase;

    fn pass_count(&self) -> usize {
        1
    }

    fn initialise(&self, ctx: &DrawContext<'_>, collect_entities: bool) -> Result<RendererState> {
        let _ = ctx;
        Ok(RendererState::new(collect_entities))
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_item(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
        crosshair: Option<&mut CrosshairState>,
        pass: usize,
    ) -> Result<()>;

    fn find_domain_bounds(&self, dataset: Option<&dyn XyDataset>) -> Option<Range> {
        self.base().find_domain_bounds(dataset, false)
    }

    /// Y extent of visible data, limited to `domain_window` when given.
    fn find_range_bounds(&self, dataset: Option<&dyn XyDataset>, domain_window: Option<Range>) -> Option<Range> {
        self.base().find_range_bounds(dataset, domain_window, false)
    }

    fn legend_item(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize, series: usize) -> Option<LegendItem> {
        Some(self.base().default_legend_item(dataset?, dataset_index, series))
    }

    fn legend_items(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize) -> Vec<LegendItem> {
        let Some(ds) = dataset else { return Vec::new() };
        (0..ds.series_count())
            .filter(|&s| self.base().is_series_visible(s) && self.base().is_series_visible_in_legend(s))
            .filter_map(|s| self.legend_item(Some(ds), dataset_index, s))
            .collect()
    }

    fn draw_annotations(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        area: &Rect,
        domain_axis: &dyn ValueAxis,
        range_axis: &dyn ValueAxis,
        layer: Layer,
    ) {
        self.base().draw_annotations(g2, plot, area, domain_axis, range_axis, layer);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_grid_band(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        role: AxisRole,
        axis: &dyn ValueAxis,
        area: &Rect,
        start: f64,
        end: f64,
    ) {
        overlay::fill_grid_band(g2, plot, role, axis, area, start, end);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_grid_line(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        role: AxisRole,
        axis: &dyn ValueAxis,
        area: &Rect,
        value: f64,
        paint: &Paint,
        stroke: &Stroke,
    ) {
        overlay::draw_grid_line(g2, plot, role, axis, area, value, paint, stroke);
    }

    fn draw_marker(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        role: AxisRole,
        axis: &dyn ValueAxis,
        marker: &Marker,
        area: &Rect,
    ) {
        overlay::draw_marker(g2, plot, role, axis, marker, area);
    }
}
