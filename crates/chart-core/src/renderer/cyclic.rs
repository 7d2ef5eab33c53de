// File: crates/chart-core/src/renderer/cyclic.rs
// Summary: Line-and-shape decorator that splits segments at the wrap point of cyclic axes.

use crate::axis::{CyclicNumberAxis, ValueAxis};
use crate::crosshair::CrosshairState;
use crate::dataset::XyDataset;
use crate::error::Result;
use crate::graphics::Graphics2D;
use crate::legend::LegendItem;

use super::base::RendererBase;
use super::line_shape::LineAndShapeRenderer;
use super::state::RendererState;
use super::{DrawContext, XyItemRenderer};

/// Segments that cross the cycle bound of a [`CyclicNumberAxis`] are drawn as
/// two pieces, each against an axis copy whose bound maps to the side that
/// piece lives on. Everything else is delegated to the wrapped renderer.
pub struct CyclicRenderer {
    inner: LineAndShapeRenderer,
}

impl Default for CyclicRenderer {
    fn default() -> Self {
        Self::new(LineAndShapeRenderer::new(true, false))
    }
}

impl CyclicRenderer {
    pub fn new(inner: LineAndShapeRenderer) -> Self {
        Self { inner }
    }

    pub fn line_and_shape(&self) -> &LineAndShapeRenderer {
        &self.inner
    }
    pub fn line_and_shape_mut(&mut self) -> &mut LineAndShapeRenderer {
        &mut self.inner
    }
}

/// A crossing segment rewritten as a short polyline, exposed as a dataset so
/// the wrapped renderer can draw its pieces as ordinary items.
///
/// Every series reports the same points; series keys come from the source dataset.
pub struct CyclicSegmentDataset<'a> {
    source: &'a dyn XyDataset,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl<'a> CyclicSegmentDataset<'a> {
    pub fn new(source: &'a dyn XyDataset, x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { source, x, y }
    }
}

impl XyDataset for CyclicSegmentDataset<'_> {
    fn series_count(&self) -> usize {
        self.source.series_count()
    }
    fn series_key(&self, series: usize) -> &str {
        self.source.series_key(series)
    }
    fn item_count(&self, _series: usize) -> usize {
        self.x.len()
    }
    fn x_value(&self, _series: usize, item: usize) -> f64 {
        self.x.get(item).copied().unwrap_or(f64::NAN)
    }
    fn y_value(&self, _series: usize, item: usize) -> f64 {
        self.y.get(item).copied().unwrap_or(f64::NAN)
    }
}

fn crosses(start: f64, end: f64, bound: f64) -> bool {
    start != end && ((bound >= start && bound <= end) || (bound >= end && bound <= start))
}

fn interpolate(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    (y2 - y1) * (x - x1) / (x2 - x1) + y1
}

/// Insert a vertex wherever a segment of (`a`, `b`) reaches `bound` along `a`.
/// A segment ending on the bound gets a zero-length piece so both ends pick a side.
fn split_at(a: &mut Vec<f64>, b: &mut Vec<f64>, bound: f64) {
    let mut i = 1;
    while i < a.len() {
        let (a0, a1) = (a[i - 1], a[i]);
        if crosses(a0, a1, bound) {
            let mid = interpolate(a0, b[i - 1], a1, b[i], bound);
            a.insert(i, bound);
            b.insert(i, mid);
            i += 1;
        }
        i += 1;
    }
}

/// Bound mapping for the piece between `prev` and `next`; unchanged when neither end sits on the bound.
fn piece_mapping(current: bool, prev: f64, next: f64, bound: f64) -> bool {
    let mut mapping = current;
    if bound == prev {
        mapping = next <= bound;
    }
    if bound == next {
        mapping = prev <= bound;
    }
    mapping
}

impl CyclicRenderer {
    fn uses_standard_drawing(&self, ctx: &DrawContext<'_>, item: usize) -> bool {
        !self.inner.lines_visible()
            || (ctx.domain_axis.as_cyclic().is_none() && ctx.range_axis.as_cyclic().is_none())
            || item == 0
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cyclic_line(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
        crosshair: Option<&mut CrosshairState>,
        pass: usize,
    ) -> Result<()> {
        let ds = ctx.dataset;
        let mut x = vec![ds.x_value(series, item - 1), ds.x_value(series, item)];
        let mut y = vec![ds.y_value(series, item - 1), ds.y_value(series, item)];

        let cx = ctx.domain_axis.as_cyclic();
        let cy = ctx.range_axis.as_cyclic();
        if let Some(axis) = cx {
            split_at(&mut x, &mut y, axis.cycle_bound());
        }
        if let Some(axis) = cy {
            split_at(&mut y, &mut x, axis.cycle_bound());
        }
        if x.len() == 2 {
            return self.inner.draw_item(g2, state, ctx, series, item, crosshair, pass);
        }

        tracing::trace!(series, item, pieces = x.len() - 1, "splitting segment at cycle bound");
        let segments = CyclicSegmentDataset::new(ds, x.clone(), y.clone());
        let mut x_mapping = cx.map(CyclicNumberAxis::is_bound_mapped_to_last_cycle);
        let mut y_mapping = cy.map(CyclicNumberAxis::is_bound_mapped_to_last_cycle);
        for i in 1..x.len() {
            let domain_copy = cx.zip(x_mapping.as_mut()).map(|(axis, m)| {
                *m = piece_mapping(*m, x[i - 1], x[i], axis.cycle_bound());
                axis.with_bound_mapping(*m)
            });
            let range_copy = cy.zip(y_mapping.as_mut()).map(|(axis, m)| {
                *m = piece_mapping(*m, y[i - 1], y[i], axis.cycle_bound());
                axis.with_bound_mapping(*m)
            });
            if x[i - 1] == x[i] && y[i - 1] == y[i] {
                continue;
            }
            let piece = DrawContext {
                domain_axis: domain_copy.as_ref().map_or(ctx.domain_axis, |a| a as &dyn ValueAxis),
                range_axis: range_copy.as_ref().map_or(ctx.range_axis, |a| a as &dyn ValueAxis),
                dataset: &segments,
                ..*ctx
            };
            self.inner.draw_primary_line(g2, &piece, series, i);
        }
        Ok(())
    }
}

impl XyItemRenderer for CyclicRenderer {
    fn name(&self) -> &'static str {
        "cyclic"
    }
    fn base(&self) -> &RendererBase {
        self.inner.base()
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        self.inner.base_mut()
    }
    fn pass_count(&self) -> usize {
        self.inner.pass_count()
    }

    fn initialise(&self, ctx: &DrawContext<'_>, collect_entities: bool) -> Result<RendererState> {
        self.inner.initialise(ctx, collect_entities)
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
        // pieces only replace the connecting line; shapes and entities use the real item
        if pass != 0 || self.uses_standard_drawing(ctx, item) || ctx.dataset.y_value(series, item - 1).is_nan() {
            return self.inner.draw_item(g2, state, ctx, series, item, crosshair, pass);
        }
        if ctx.dataset.y_value(series, item).is_nan() {
            return Ok(());
        }
        if !self.base().item_visible(series, item) || !self.inner.item_line_visible(series, item) {
            return Ok(());
        }
        self.draw_cyclic_line(g2, state, ctx, series, item, crosshair, pass)
    }

    fn legend_item(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize, series: usize) -> Option<LegendItem> {
        self.inner.legend_item(dataset, dataset_index, series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_inserts_bound_vertex() {
        let mut x = vec![8.0, 13.0];
        let mut y = vec![0.0, 10.0];
        split_at(&mut x, &mut y, 10.0);
        assert_eq!(x, vec![8.0, 10.0, 13.0]);
        assert_eq!(y, vec![0.0, 4.0, 10.0]);
    }

    #[test]
    fn segment_starting_on_bound_gets_empty_piece() {
        let mut x = vec![10.0, 13.0];
        let mut y = vec![1.0, 4.0];
        split_at(&mut x, &mut y, 10.0);
        assert_eq!(x, vec![10.0, 10.0, 13.0]);
        assert_eq!(y, vec![1.0, 1.0, 4.0]);
    }

    #[test]
    fn pieces_map_bound_to_their_own_side() {
        assert!(piece_mapping(false, 8.0, 10.0, 10.0));
        assert!(!piece_mapping(true, 10.0, 13.0, 10.0));
        assert!(piece_mapping(true, 1.0, 2.0, 10.0));
    }
}
