// File: crates/chart-core/src/renderer/bezier.rs
// Summary: Smooth series curve built from cubic Bezier segments through every data point.

use crate::crosshair::CrosshairState;
use crate::dataset::XyDataset;
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::graphics::Graphics2D;
use crate::legend::LegendItem;
use crate::paint::GradientPaintTransformer;
use crate::path::Path;
use crate::shape::Shape;

use super::base::RendererBase;
use super::line_shape::LineAndShapeRenderer;
use super::state::{BezierScratch, RendererState, Scratch};
use super::{DrawContext, XyItemRenderer};

/// Region filled below (or above) the curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillType {
    #[default]
    None,
    ToZero,
    ToLowerBound,
    ToUpperBound,
}

/// Curve renderer: collects the device points of a series and, at the last
/// item, strokes one path of `precision` line segments per Bezier span.
pub struct BezierRenderer {
    inner: LineAndShapeRenderer,
    precision: usize,
    tension: f64,
    fill_type: FillType,
    gradient_transformer: GradientPaintTransformer,
}

impl Default for BezierRenderer {
    fn default() -> Self {
        Self::new(5, 25.0, FillType::None)
    }
}

impl BezierRenderer {
    /// # Panics
    /// When `precision` is zero or `tension` is not positive; use the setters for checked updates.
    pub fn new(precision: usize, tension: f64, fill_type: FillType) -> Self {
        assert!(precision > 0, "precision must be positive");
        assert!(tension > 0.0, "tension must be positive");
        let mut inner = LineAndShapeRenderer::new(true, false);
        inner.set_draw_series_line_as_path(true);
        Self {
            inner,
            precision,
            tension,
            fill_type,
            gradient_transformer: GradientPaintTransformer::default(),
        }
    }

    pub fn line_and_shape(&self) -> &LineAndShapeRenderer {
        &self.inner
    }
    pub fn line_and_shape_mut(&mut self) -> &mut LineAndShapeRenderer {
        &mut self.inner
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
    pub fn set_precision(&mut self, precision: usize) -> Result<()> {
        if precision == 0 {
            return Err(ChartError::invalid("precision", "must be greater than zero"));
        }
        self.precision = precision;
        self.inner.base().fire_change_event();
        Ok(())
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }
    pub fn set_tension(&mut self, tension: f64) -> Result<()> {
        if !tension.is_finite() || tension <= 0.0 {
            return Err(ChartError::invalid("tension", format!("must be positive, got {tension}")));
        }
        self.tension = tension;
        self.inner.base().fire_change_event();
        Ok(())
    }

    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }
    pub fn set_fill_type(&mut self, fill_type: FillType) {
        self.fill_type = fill_type;
        self.inner.base().fire_change_event();
    }

    pub fn set_gradient_transformer(&mut self, transformer: GradientPaintTransformer) {
        self.gradient_transformer = transformer;
        self.inner.base().fire_change_event();
    }

    /// Device point the fill closes back to.
    fn fill_origin(&self, ctx: &DrawContext<'_>) -> Point {
        let (x, y) = match self.fill_type {
            FillType::ToLowerBound => (
                ctx.map_x(ctx.domain_axis.lower_bound()),
                ctx.map_y(ctx.range_axis.lower_bound()),
            ),
            FillType::ToUpperBound => (
                ctx.map_x(ctx.domain_axis.upper_bound()),
                ctx.map_y(ctx.range_axis.upper_bound()),
            ),
            FillType::ToZero | FillType::None => (ctx.map_x(0.0), ctx.map_y(0.0)),
        };
        ctx.point(x, y)
    }

    fn draw_curve(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
    ) {
        let ds = ctx.dataset;
        let p = ctx.point(ctx.map_x(ds.x_value(series, item)), ctx.map_y(ds.y_value(series, item)));
        let scratch = state.bezier_mut();
        if p.is_finite() && scratch.points.last() != Some(&p) {
            scratch.points.push(p);
        }
        if item + 1 != ds.item_count(series) {
            return;
        }

        let filling = self.fill_type != FillType::None;
        let origin = self.fill_origin(ctx);
        let horizontal = ctx.plot.orientation.is_horizontal();
        let BezierScratch { points, fill_area } = scratch;
        let points = std::mem::take(points);
        if points.len() < 2 {
            if ds.item_count(series) > 1 {
                tracing::warn!(series, kept = points.len(), "bezier points collapsed to fewer than two");
            }
            return;
        }

        let mut curve = Path::new();
        let cp0 = points[0];
        curve.move_to(cp0.x, cp0.y);
        if filling {
            if horizontal {
                fill_area.move_to(origin.x, cp0.y);
            } else {
                fill_area.move_to(cp0.x, origin.y);
            }
            fill_area.line_to(cp0.x, cp0.y);
        }
        let fill = filling.then_some(&mut *fill_area);
        self.build_segments(&points, &mut curve, fill);

        if filling {
            if let Some(last) = points.last() {
                if horizontal {
                    fill_area.line_to(origin.x, last.y);
                } else {
                    fill_area.line_to(last.x, origin.y);
                }
            }
            fill_area.close();
            let area = std::mem::take(fill_area);
            let mut paint = self.inner.base().series_fill_paint(series);
            if let Some(bounds) = area.bounds() {
                paint = paint.fitted(Some(self.gradient_transformer), &bounds);
            }
            g2.fill(&Shape::Path(area), &paint);
        }

        tracing::trace!(series, points = points.len(), vertices = curve.vertices().len(), "bezier curve built");
        state.series_path = curve;
        let path = Shape::Path(state.series_path.clone());
        self.inner.draw_first_pass_shape(g2, series, item, &path);
    }

    /// Append the spans through `points` to `curve` (and `fill`, when filling).
    fn build_segments(&self, points: &[Point], curve: &mut Path, mut fill: Option<&mut Path>) {
        let np = points.len();
        if np == 2 {
            let p = points[1];
            curve.line_to(p.x, p.y);
            if let Some(f) = fill {
                f.line_to(p.x, p.y);
            }
            return;
        }
        let mut emit = |cps: [Point; 4]| {
            for p in self.sample_cubic(&cps) {
                curve.line_to(p.x, p.y);
                if let Some(f) = fill.as_deref_mut() {
                    f.line_to(p.x, p.y);
                }
            }
        };
        match np {
            0..=2 => {}
            3 => {
                emit(self.initial_segment(points[0], points[1], points[2]));
                emit(self.final_segment(points[0], points[1], points[2]));
            }
            _ => {
                for i in 0..np - 1 {
                    if i == 0 {
                        emit(self.initial_segment(points[0], points[1], points[2]));
                    }
                    if i == np - 2 {
                        emit(self.final_segment(points[np - 3], points[np - 2], points[np - 1]));
                    }
                    if i != 0 && i != np - 2 {
                        emit(self.medium_segment([points[i - 1], points[i], points[i + 1], points[i + 2]]));
                    }
                }
            }
        }
    }

    /// `precision + 1` points along the cubic defined by `cps`.
    fn sample_cubic(&self, cps: &[Point; 4]) -> Vec<Point> {
        (0..=self.precision)
            .map(|t| {
                let k = t as f64 / self.precision as f64;
                let r = 1.0 - k;
                let b0 = r.powi(3);
                let b1 = 3.0 * k * r.powi(2);
                let b2 = 3.0 * k.powi(2) * r;
                let b3 = k.powi(3);
                Point::new(
                    b0 * cps[0].x + b1 * cps[1].x + b2 * cps[2].x + b3 * cps[3].x,
                    b0 * cps[0].y + b1 * cps[1].y + b2 * cps[2].y + b3 * cps[3].y,
                )
            })
            .collect()
    }

    fn initial_segment(&self, p0: Point, p1: Point, p2: Point) -> [Point; 4] {
        let a = unit_vector(p0, p1);
        let b = unit_vector(p2, p1);
        let c = unit_vector(a, b);
        [p0, p0, Point::new(p1.x + self.tension * c.x, p1.y + self.tension * c.y), p1]
    }

    fn final_segment(&self, o1: Point, o2: Point, o3: Point) -> [Point; 4] {
        let a = unit_vector(o3, o2);
        let b = unit_vector(o1, o2);
        let c = unit_vector(a, b);
        [o2, Point::new(o2.x + self.tension * c.x, o2.y + self.tension * c.y), o3, o3]
    }

    fn medium_segment(&self, orig: [Point; 4]) -> [Point; 4] {
        let mut cps = [orig[1], orig[1], orig[2], orig[2]];
        for i in 1..3 {
            let a = unit_vector(orig[i - 1], orig[i]);
            let b = unit_vector(orig[i + 1], orig[i]);
            let c = unit_vector(b, a);
            let sign = if i % 2 == 1 { 1.0 } else { -1.0 };
            cps[i] = Point::new(orig[i].x + sign * self.tension * c.x, orig[i].y + sign * self.tension * c.y);
        }
        cps
    }
}

/// Unit vector from `origin` to `end`; zero when the points coincide.
fn unit_vector(origin: Point, end: Point) -> Point {
    let (dx, dy) = (end.x - origin.x, end.y - origin.y);
    let module = dx.hypot(dy);
    if module == 0.0 {
        return Point::new(0.0, 0.0);
    }
    Point::new(dx / module, dy / module)
}

impl XyItemRenderer for BezierRenderer {
    fn name(&self) -> &'static str {
        "bezier"
    }
    fn base(&self) -> &RendererBase {
        self.inner.base()
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        self.inner.base_mut()
    }
    fn pass_count(&self) -> usize {
        2
    }

    fn initialise(&self, _ctx: &DrawContext<'_>, collect_entities: bool) -> Result<RendererState> {
        Ok(RendererState::with_scratch(collect_entities, Scratch::Bezier(BezierScratch::default())))
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
        match pass {
            0 if self.inner.item_line_visible(series, item) => self.draw_curve(g2, state, ctx, series, item),
            1 => self.inner.draw_secondary_pass(g2, state, ctx, series, item, crosshair),
            _ => {}
        }
        Ok(())
    }

    fn legend_item(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize, series: usize) -> Option<LegendItem> {
        Some(self.inner.line_shape_legend_item(dataset?, dataset_index, series))
    }
}
