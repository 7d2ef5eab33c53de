// File: crates/chart-core/src/renderer/deviation_step.rs
// Summary: Step line with a shaded deviation band drawn from interval y bounds.

use crate::crosshair::CrosshairState;
use crate::dataset::{IntervalXyDataset, XyDataset};
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::graphics::{with_alpha, Graphics2D};
use crate::legend::LegendItem;
use crate::path::Path;
use crate::range::Range;
use crate::shape::Shape;

use super::base::RendererBase;
use super::line_shape::LineAndShapeRenderer;
use super::state::{DeviationScratch, RendererState, Scratch};
use super::{DrawContext, XyItemRenderer};

const SHADING_PASS: usize = 0;
const LINE_PASS: usize = 1;
const ITEM_PASS: usize = 2;

/// Three passes per series: the band, the step line, then item shapes and entities.
pub struct DeviationStepRenderer {
    inner: LineAndShapeRenderer,
    alpha: f32,
}

impl Default for DeviationStepRenderer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl DeviationStepRenderer {
    pub fn new(lines: bool, shapes: bool) -> Self {
        let mut inner = LineAndShapeRenderer::new(lines, shapes);
        inner.set_draw_series_line_as_path(true);
        Self { inner, alpha: 0.5 }
    }

    pub fn line_and_shape(&self) -> &LineAndShapeRenderer {
        &self.inner
    }
    pub fn line_and_shape_mut(&mut self) -> &mut LineAndShapeRenderer {
        &mut self.inner
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Opacity of the band, in `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ChartError::invalid("alpha", format!("must be in [0, 1], got {alpha}")));
        }
        self.alpha = alpha;
        self.inner.base().fire_change_event();
        Ok(())
    }

    pub fn is_line_pass(&self, pass: usize) -> bool {
        pass == LINE_PASS
    }

    pub fn is_item_pass(&self, pass: usize) -> bool {
        pass == ITEM_PASS
    }

    fn intervals<'d>(&self, dataset: &'d dyn XyDataset) -> Result<&'d dyn IntervalXyDataset> {
        dataset.as_interval().ok_or(ChartError::UnsupportedDataset {
            renderer: "deviation-step",
            capability: "y interval",
        })
    }

    fn draw_band(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
    ) -> Result<()> {
        let ds = self.intervals(ctx.dataset)?;
        let x = ds.x_value(series, item);
        let y_low = ds.start_y_value(series, item);
        let y_high = ds.end_y_value(series, item);
        let xx = ctx.map_x(x);
        let yy_low = ctx.map_y(y_low);
        let yy_high = ctx.map_y(y_high);

        let band = state.deviation_mut();
        if item > 0 && xx.is_finite() && yy_low.is_finite() && yy_high.is_finite() {
            let yy_low_prev = ctx.map_y(ds.start_y_value(series, item - 1));
            let yy_high_prev = ctx.map_y(ds.end_y_value(series, item - 1));
            if yy_low_prev.is_finite() && yy_high_prev.is_finite() {
                band.lower.push(ctx.point(xx, yy_low_prev));
                band.upper.push(ctx.point(xx, yy_high_prev));
            }
        }

        let interval_good = xx.is_finite() && y_low.is_finite() && y_high.is_finite();
        if interval_good {
            band.lower.push(ctx.point(xx, yy_low));
            band.upper.push(ctx.point(xx, yy_high));
        }

        let last = item + 1 == ds.item_count(series);
        if (last || !interval_good) && band.lower.len() > 1 {
            let outline: Vec<Point> = band.lower.iter().chain(band.upper.iter().rev()).copied().collect();
            tracing::trace!(series, item, vertices = outline.len(), "deviation band flushed");
            let paint = self.inner.base().item_fill_paint(series, item);
            with_alpha(g2, self.alpha, |g2| g2.fill(&Shape::Path(Path::from_polygon(&outline)), &paint));
            band.lower.clear();
            band.upper.clear();
        } else if !interval_good {
            band.lower.clear();
            band.upper.clear();
        }
        Ok(())
    }

    /// Horizontal then vertical segments between consecutive items.
    fn draw_step_line(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
    ) {
        if item == 0 {
            state.series_path.reset();
            state.last_point_good = false;
        }
        if !self.inner.item_line_visible(series, item) {
            return;
        }
        let ds = ctx.dataset;
        let trans_x = ctx.map_x(ds.x_value(series, item));
        let trans_y = ctx.map_y(ds.y_value(series, item));
        if trans_x.is_finite() && trans_y.is_finite() {
            let p = ctx.point(trans_x, trans_y);
            if state.last_point_good {
                if let Some(current) = state.series_path.current_point() {
                    let corner = if ctx.plot.orientation.is_horizontal() {
                        Point::new(current.x, p.y)
                    } else {
                        Point::new(p.x, current.y)
                    };
                    state.series_path.line_to(corner.x, corner.y);
                }
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
            self.inner.draw_first_pass_shape(g2, series, item, &path);
        }
    }
}

impl XyItemRenderer for DeviationStepRenderer {
    fn name(&self) -> &'static str {
        "deviation-step"
    }
    fn base(&self) -> &RendererBase {
        self.inner.base()
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        self.inner.base_mut()
    }
    fn pass_count(&self) -> usize {
        3
    }

    fn initialise(&self, ctx: &DrawContext<'_>, collect_entities: bool) -> Result<RendererState> {
        self.intervals(ctx.dataset)?;
        Ok(RendererState::with_scratch(collect_entities, Scratch::Deviation(DeviationScratch::default())))
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
        if !self.base().item_visible(series, item) {
            return Ok(());
        }
        if pass == SHADING_PASS {
            self.draw_band(g2, state, ctx, series, item)?;
        }
        if self.is_line_pass(pass) {
            self.draw_step_line(g2, state, ctx, series, item);
        } else if self.is_item_pass(pass) {
            self.inner.draw_secondary_pass(g2, state, ctx, series, item, crosshair);
        }
        Ok(())
    }

    fn find_range_bounds(&self, dataset: Option<&dyn XyDataset>, domain_window: Option<Range>) -> Option<Range> {
        self.base().find_range_bounds(dataset, domain_window, true)
    }

    fn legend_item(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize, series: usize) -> Option<LegendItem> {
        Some(self.inner.line_shape_legend_item(dataset?, dataset_index, series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_must_be_a_fraction() {
        let mut r = DeviationStepRenderer::default();
        assert!(r.set_alpha(1.5).is_err());
        assert!(r.set_alpha(-0.1).is_err());
        r.set_alpha(0.25).unwrap();
        assert_eq!(r.alpha(), 0.25);
    }

    #[test]
    fn passes_are_shading_line_items() {
        let r = DeviationStepRenderer::default();
        assert_eq!(r.pass_count(), 3);
        assert!(!r.is_line_pass(0) && !r.is_item_pass(0));
        assert!(r.is_line_pass(1));
        assert!(r.is_item_pass(2));
    }
}
