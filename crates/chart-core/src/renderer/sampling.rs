// File: crates/chart-core/src/renderer/sampling.rs
// Summary: Line renderer for dense series that folds sub-pixel runs into vertical extent wicks.

use crate::crosshair::CrosshairState;
use crate::error::{ChartError, Result};
use crate::geometry::{Line, Point};
use crate::graphics::Graphics2D;
use crate::path::Path;
use crate::shape::Shape;

use super::base::RendererBase;
use super::state::{RendererState, SamplingScratch, Scratch};
use super::{DrawContext, XyItemRenderer};

const NOMINAL_DPI: f64 = 72.0;

/// Emits a vertex only when the domain coordinate moved more than one device
/// unit at the configured resolution; the y range of each skipped run is kept
/// as a vertical wick so spikes stay visible.
pub struct SamplingRenderer {
    base: RendererBase,
    dpi: f64,
}

impl Default for SamplingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingRenderer {
    pub fn new() -> Self {
        let mut base = RendererBase::new();
        base.set_default_legend_shape(Some(Shape::Line(Line::new(-7.0, 0.0, 7.0, 0.0))));
        base.set_treat_legend_shape_as_line(true);
        Self { base, dpi: NOMINAL_DPI }
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Output resolution; the sampling threshold is `72 / dpi` device units.
    pub fn set_dpi(&mut self, dpi: f64) -> Result<()> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(ChartError::invalid("dpi", format!("must be positive, got {dpi}")));
        }
        self.dpi = dpi;
        self.base.fire_change_event();
        Ok(())
    }
}

/// Close the current run: its wick, then a segment to the last folded point.
fn flush(s: &mut SamplingScratch, series_path: &mut Path, ctx: &DrawContext<'_>) {
    let Some(pending) = s.pending.take() else { return };
    push_wick(s, ctx);
    let end = ctx.point(pending.x, pending.y);
    series_path.line_to(end.x, end.y);
}

/// Vertical segment spanning the run's low and high; returns whether one was added.
fn push_wick(s: &mut SamplingScratch, ctx: &DrawContext<'_>) -> bool {
    if s.low_y >= s.high_y {
        return false;
    }
    let lo = ctx.point(s.last_x, s.low_y);
    let hi = ctx.point(s.last_x, s.high_y);
    s.interval_path.move_to(lo.x, lo.y);
    s.interval_path.line_to(hi.x, hi.y);
    true
}

fn start_run(s: &mut SamplingScratch, x: f64, y: f64) {
    s.last_x = x;
    s.high_y = y;
    s.low_y = y;
    s.close_y = y;
}

impl XyItemRenderer for SamplingRenderer {
    fn name(&self) -> &'static str {
        "sampling"
    }
    fn base(&self) -> &RendererBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        &mut self.base
    }

    fn initialise(&self, _ctx: &DrawContext<'_>, collect_entities: bool) -> Result<RendererState> {
        let scratch = SamplingScratch { dx: NOMINAL_DPI / self.dpi, ..Default::default() };
        Ok(RendererState::with_scratch(collect_entities, Scratch::Sampling(scratch)))
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
        let x1 = ds.x_value(series, item);
        let y1 = ds.y_value(series, item);
        // run bookkeeping is in (domain, range) device units; orientation is applied on emit
        let tx = ctx.map_x(x1);
        let ty = ctx.map_y(y1);

        let last_point_good = state.last_point_good;
        let (series_path, s) = state.sampling_parts();

        let good = tx.is_finite() && ty.is_finite();
        if good {
            if last_point_good {
                if (tx - s.last_x).abs() > s.dx {
                    if push_wick(s, ctx) {
                        let close = ctx.point(s.last_x, s.close_y);
                        series_path.move_to(close.x, close.y);
                    }
                    let p = ctx.point(tx, ty);
                    series_path.line_to(p.x, p.y);
                    start_run(s, tx, ty);
                    s.pending = None;
                } else {
                    s.high_y = s.high_y.max(ty);
                    s.low_y = s.low_y.min(ty);
                    s.close_y = ty;
                    s.pending = Some(Point::new(tx, ty));
                }
            } else {
                let p = ctx.point(tx, ty);
                series_path.move_to(p.x, p.y);
                start_run(s, tx, ty);
                s.pending = None;
            }
        } else {
            flush(s, series_path, ctx);
            tracing::trace!(series, vertices = series_path.vertices().len(), "sampled path flushed");
        }
        state.last_point_good = good;

        if good {
            self.base.update_crosshair_values(crosshair, ctx.plot, x1, y1, tx, ty);
        }

        if item == state.last_item_index() {
            let (series_path, s) = state.sampling_parts();
            flush(s, series_path, ctx);
            let paint = self.base.series_paint(series);
            let stroke = self.base.series_stroke(series);
            g2.draw(&Shape::Path(series_path.clone()), &paint, &stroke);
            g2.draw(&Shape::Path(s.interval_path.clone()), &paint, &stroke);
        }
        Ok(())
    }
}
