// File: crates/chart-core/src/renderer/candlestick.rs
// Summary: OHLC candles with optional volume underlay and automatic candle width.

use std::rc::Rc;

use chrono::Duration;

use crate::crosshair::CrosshairState;
use crate::dataset::{OhlcDataset, XyDataset};
use crate::error::{ChartError, Result};
use crate::geometry::{Line, Rect};
use crate::graphics::{with_alpha, Graphics2D};
use crate::labels::HighLowItemLabelGenerator;
use crate::paint::{Color, Paint};
use crate::range::Range;
use crate::shape::Shape;

use super::base::RendererBase;
use super::state::{CandlestickScratch, RendererState, Scratch};
use super::{DrawContext, XyItemRenderer};

const VOLUME_ALPHA: f32 = 0.3;

/// How the candle width is derived when no fixed width is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandleWidthMethod {
    /// Data-area length divided by the series item count.
    #[default]
    Average,
    /// Smallest device spacing between adjacent items of the series.
    Smallest,
    /// Device width of the item's declared x interval.
    IntervalData,
}

pub struct CandlestickRenderer {
    base: RendererBase,
    candle_width: f64,
    max_candle_width_in_millis: f64,
    auto_width_method: CandleWidthMethod,
    auto_width_factor: f64,
    auto_width_gap: f64,
    draw_volume: bool,
    volume_paint: Paint,
    up_paint: Option<Paint>,
    down_paint: Option<Paint>,
    use_outline_paint: bool,
}

impl Default for CandlestickRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CandlestickRenderer {
    pub fn new() -> Self {
        let mut base = RendererBase::new();
        base.set_default_tool_tip_generator(Some(Rc::new(HighLowItemLabelGenerator::default())));
        Self {
            base,
            candle_width: -1.0,
            max_candle_width_in_millis: Duration::hours(20).num_milliseconds() as f64,
            auto_width_method: CandleWidthMethod::Average,
            auto_width_factor: 4.5 / 7.0,
            auto_width_gap: 0.0,
            draw_volume: true,
            volume_paint: Paint::Solid(Color::GRAY),
            up_paint: Some(Paint::Solid(Color::GREEN)),
            down_paint: Some(Paint::Solid(Color::RED)),
            use_outline_paint: false,
        }
    }

    pub fn candle_width(&self) -> f64 {
        self.candle_width
    }
    /// Fixed candle width in device units; zero or negative selects automatic width.
    pub fn set_candle_width(&mut self, width: f64) {
        self.candle_width = width;
        self.base.fire_change_event();
    }

    pub fn max_candle_width_in_millis(&self) -> f64 {
        self.max_candle_width_in_millis
    }
    pub fn set_max_candle_width_in_millis(&mut self, millis: f64) {
        self.max_candle_width_in_millis = millis;
        self.base.fire_change_event();
    }
    /// Cap on automatic widths, for a domain axis measured in epoch milliseconds.
    pub fn set_max_candle_width(&mut self, max: Duration) {
        self.set_max_candle_width_in_millis(max.num_milliseconds() as f64);
    }

    pub fn auto_width_method(&self) -> CandleWidthMethod {
        self.auto_width_method
    }
    pub fn set_auto_width_method(&mut self, method: CandleWidthMethod) {
        self.auto_width_method = method;
        self.base.fire_change_event();
    }

    pub fn set_auto_width_factor(&mut self, factor: f64) {
        self.auto_width_factor = factor;
        self.base.fire_change_event();
    }
    pub fn set_auto_width_gap(&mut self, gap: f64) {
        self.auto_width_gap = gap;
        self.base.fire_change_event();
    }

    pub fn draw_volume(&self) -> bool {
        self.draw_volume
    }
    pub fn set_draw_volume(&mut self, draw: bool) {
        self.draw_volume = draw;
        self.base.fire_change_event();
    }
    pub fn set_volume_paint(&mut self, paint: Paint) {
        self.volume_paint = paint;
        self.base.fire_change_event();
    }

    /// Body paint for rising candles; `None` falls back to the item paint.
    pub fn set_up_paint(&mut self, paint: Option<Paint>) {
        self.up_paint = paint;
        self.base.fire_change_event();
    }
    /// Body paint for falling or flat candles; `None` falls back to the item paint.
    pub fn set_down_paint(&mut self, paint: Option<Paint>) {
        self.down_paint = paint;
        self.base.fire_change_event();
    }
    pub fn set_use_outline_paint(&mut self, use_outline: bool) {
        self.use_outline_paint = use_outline;
        self.base.fire_change_event();
    }

    fn ohlc<'d>(&self, dataset: &'d dyn XyDataset) -> Result<&'d dyn OhlcDataset> {
        dataset.as_ohlc().ok_or(ChartError::UnsupportedDataset {
            renderer: "candlestick",
            capability: "open/high/low/close",
        })
    }

    /// Raw width before gap, factor and clamping are applied.
    fn raw_width(
        &self,
        scratch: &mut CandlestickScratch,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
    ) -> Result<f64> {
        let ds = ctx.dataset;
        let horizontal = ctx.plot.orientation.is_horizontal();
        let length = if horizontal { ctx.area.height } else { ctx.area.width };
        Ok(match self.auto_width_method {
            CandleWidthMethod::Average => length / ds.item_count(series) as f64,
            CandleWidthMethod::Smallest => *scratch
                .smallest_spacing
                .entry(series)
                .or_insert_with(|| smallest_spacing(ctx, series, length)),
            CandleWidthMethod::IntervalData => {
                let interval = ds.as_interval().ok_or(ChartError::UnsupportedDataset {
                    renderer: "candlestick",
                    capability: "x interval",
                })?;
                let start = ctx.map_x(interval.start_x_value(series, item));
                let end = ctx.map_x(interval.end_x_value(series, item));
                (end - start).abs()
            }
        })
    }
}

/// Smallest absolute device spacing between adjacent items, starting from `initial`.
fn smallest_spacing(ctx: &DrawContext<'_>, series: usize, initial: f64) -> f64 {
    let ds = ctx.dataset;
    let mut width = initial;
    let mut last: Option<f64> = None;
    for i in 0..ds.item_count(series) {
        let pos = ctx.map_x(ds.x_value(series, i));
        if let Some(prev) = last {
            width = width.min((pos - prev).abs());
        }
        last = Some(pos);
    }
    width
}

impl XyItemRenderer for CandlestickRenderer {
    fn name(&self) -> &'static str {
        "candlestick"
    }
    fn base(&self) -> &RendererBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        &mut self.base
    }

    fn initialise(&self, ctx: &DrawContext<'_>, collect_entities: bool) -> Result<RendererState> {
        let ohlc = self.ohlc(ctx.dataset)?;
        let x1 = ctx.domain_axis.lower_bound();
        let max_candle_width = (ctx.map_x(x1 + self.max_candle_width_in_millis) - ctx.map_x(x1)).abs();

        let mut max_volume = 0.0_f64;
        if self.draw_volume {
            for series in 0..ohlc.series_count() {
                for item in 0..ohlc.item_count(series) {
                    let v = ohlc.volume_value(series, item);
                    if v > max_volume {
                        max_volume = v;
                    }
                }
            }
        }
        if self.draw_volume && max_volume <= 0.0 {
            tracing::warn!("volume underlay enabled but no positive volume in dataset");
        }
        tracing::debug!(max_candle_width, max_volume, "candlestick initialised");
        Ok(RendererState::with_scratch(
            collect_entities,
            Scratch::Candlestick(CandlestickScratch {
                max_candle_width,
                max_volume,
                ..Default::default()
            }),
        ))
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
        let ohlc = self.ohlc(ds)?;
        let horizontal = ctx.plot.orientation.is_horizontal();

        let x = ohlc.x_value(series, item);
        let y_high = ohlc.high_value(series, item);
        let y_low = ohlc.low_value(series, item);
        let y_open = ohlc.open_value(series, item);
        let y_close = ohlc.close_value(series, item);

        let xx = ctx.map_x(x);
        let yy_high = ctx.map_y(y_high);
        let yy_low = ctx.map_y(y_low);
        let yy_close = ctx.map_y(y_close);

        let scratch = state.candlestick_mut();
        let max_candle_width = scratch.max_candle_width;
        let max_volume = scratch.max_volume;
        let (volume_width, stick_width) = if self.candle_width > 0.0 {
            (self.candle_width, self.candle_width)
        } else {
            let mut w = self.raw_width(scratch, ctx, series, item)?;
            w -= 2.0 * self.auto_width_gap;
            w *= self.auto_width_factor;
            w = w.min(max_candle_width);
            (1.0_f64.min(max_candle_width).max(w), 3.0_f64.min(max_candle_width).max(w))
        };

        let paint = self.base.item_paint(series, item);
        let stroke = self.base.item_stroke(series, item);
        let line_paint = if self.use_outline_paint {
            self.base.item_outline_paint(series, item)
        } else {
            paint
        };

        if self.draw_volume && max_volume > 0.0 {
            let volume = ohlc.volume_value(series, item);
            let (min, max) = if horizontal {
                (ctx.area.min_x(), ctx.area.max_x())
            } else {
                (ctx.area.min_y(), ctx.area.max_y())
            };
            let zz = volume / max_volume * (max - min);
            let bar = if horizontal {
                Rect::new(min, xx - volume_width / 2.0, zz, volume_width)
            } else {
                Rect::new(xx - volume_width / 2.0, max - zz, volume_width, zz)
            };
            let volume_paint = self.volume_paint;
            with_alpha(g2, VOLUME_ALPHA, |g2| g2.fill(&Shape::Rect(bar), &volume_paint));
        }

        let max_oc = y_open.max(y_close);
        let min_oc = y_open.min(y_close);
        let yy_max_oc = ctx.map_y(max_oc);
        let yy_min_oc = ctx.map_y(min_oc);
        let (body_lo, body_hi) = (yy_max_oc.min(yy_min_oc), yy_max_oc.max(yy_min_oc));

        let wick = |from: f64, to: f64| {
            if horizontal {
                Shape::Line(Line::new(from, xx, to, xx))
            } else {
                Shape::Line(Line::new(xx, from, xx, to))
            }
        };
        if y_high > max_oc {
            g2.draw(&wick(yy_high, yy_max_oc), &line_paint, &stroke);
        }
        if y_low < min_oc {
            g2.draw(&wick(yy_low, yy_min_oc), &line_paint, &stroke);
        }

        let length = (yy_high - yy_low).abs();
        let base = yy_high.min(yy_low);
        let (body, hotspot) = if horizontal {
            (
                Rect::new(body_lo, xx - stick_width / 2.0, body_hi - body_lo, stick_width),
                Rect::new(base, xx - stick_width / 2.0, length, stick_width),
            )
        } else {
            (
                Rect::new(xx - stick_width / 2.0, body_lo, stick_width, body_hi - body_lo),
                Rect::new(xx - stick_width / 2.0, base, stick_width, length),
            )
        };
        let body_paint = (if y_close > y_open { self.up_paint } else { self.down_paint }).unwrap_or(paint);
        g2.fill(&Shape::Rect(body), &body_paint);
        g2.draw(&Shape::Rect(body), &line_paint, &stroke);

        self.base.update_crosshair_values(crosshair, ctx.plot, x, y_close, xx, yy_close);
        self.base
            .add_entity(state, Some(Shape::Rect(hotspot)), ds, ctx.plot.dataset_index, series, item, 0.0, 0.0);
        Ok(())
    }

    fn find_range_bounds(&self, dataset: Option<&dyn XyDataset>, domain_window: Option<Range>) -> Option<Range> {
        self.base.find_range_bounds(dataset, domain_window, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::NumberAxis;
    use crate::dataset::XySeriesCollection;
    use crate::plot::PlotContext;
    use crate::series::XySeries;
    use crate::types::PlotOrientation;

    #[test]
    fn initialise_rejects_plain_xy_data() {
        let r = CandlestickRenderer::new();
        let ds = XySeriesCollection::with_series(XySeries::with_data("s", vec![(0.0, 1.0)]));
        let plot = PlotContext::new(PlotOrientation::Vertical);
        let (x, y) = (NumberAxis::default_x(), NumberAxis::default_y());
        let ctx = DrawContext::new(Rect::new(0.0, 0.0, 100.0, 100.0), &plot, &x, &y, &ds);
        let err = r.initialise(&ctx, false).err();
        assert!(matches!(err, Some(ChartError::UnsupportedDataset { renderer: "candlestick", .. })));
    }

    #[test]
    fn smallest_spacing_scans_adjacent_items() {
        let ds = XySeriesCollection::with_series(XySeries::with_data(
            "s",
            vec![(10.0, 1.0), (30.0, 1.0), (45.0, 1.0)],
        ));
        let plot = PlotContext::new(PlotOrientation::Vertical);
        let (x, y) = (NumberAxis::new("x", 0.0, 100.0), NumberAxis::new("y", 0.0, 10.0));
        let ctx = DrawContext::new(Rect::new(0.0, 0.0, 100.0, 100.0), &plot, &x, &y, &ds);
        assert_eq!(smallest_spacing(&ctx, 0, 100.0), 15.0);
    }

    #[test]
    fn max_width_duration_is_stored_in_millis() {
        let mut r = CandlestickRenderer::new();
        assert_eq!(r.max_candle_width_in_millis(), 72_000_000.0);
        r.set_max_candle_width(Duration::minutes(90));
        assert_eq!(r.max_candle_width_in_millis(), 5_400_000.0);
    }
}
