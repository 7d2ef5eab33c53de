// File: crates/chart-core/tests/candlestick.rs
// Purpose: Candle bodies, wicks, volume underlay and width selection through a plot.

use chart_core::{
    Candle, CandleWidthMethod, CandlestickRenderer, ChartError, Color, NumberAxis, OhlcSeries, OhlcSeriesCollection,
    Paint, RecordingGraphics, Rect, Shape, XyItemRenderer, XyPlot, XySeries, XySeriesCollection,
};

const AREA: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn candles() -> OhlcSeriesCollection {
    let mut ds = OhlcSeriesCollection::new(2.0);
    ds.add_series(OhlcSeries::from_candles(
        "ohlc",
        vec![
            Candle::try_new(2.0, 3.0, 6.0, 2.0, 5.0).expect("valid").with_volume(100.0),
            Candle::try_new(5.0, 5.0, 7.0, 4.0, 4.0).expect("valid").with_volume(50.0),
        ],
    ));
    ds
}

fn plot_with(renderer: CandlestickRenderer) -> XyPlot {
    let mut plot = XyPlot::new(Box::new(candles()), Box::new(renderer))
        .with_axes(Box::new(NumberAxis::new("t", 0.0, 10.0)), Box::new(NumberAxis::new("price", 0.0, 10.0)));
    plot.grid_steps = 0;
    plot
}

fn rect_of(shape: &Shape) -> Rect {
    match shape {
        Shape::Rect(r) => *r,
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn bodies_use_up_and_down_paints() {
    let plot = plot_with(CandlestickRenderer::new());
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");

    let bodies: Vec<_> = g.fills().filter(|(_, _, alpha)| *alpha == 1.0).collect();
    assert_eq!(bodies.len(), 2);
    assert_eq!(*bodies[0].1, Paint::Solid(Color::GREEN));
    assert_eq!(*bodies[1].1, Paint::Solid(Color::RED));

    let rising = rect_of(bodies[0].0);
    assert!((rising.center_x() - 20.0).abs() < 1e-9);
    assert!((rising.min_y() - 50.0).abs() < 1e-9 && (rising.max_y() - 70.0).abs() < 1e-9);
    // average width: 100 / 2 items, scaled by 4.5 / 7
    assert!((rising.width - 50.0 * 4.5 / 7.0).abs() < 1e-9);
}

#[test]
fn missing_direction_paint_falls_back_to_series_paint() {
    let mut renderer = CandlestickRenderer::new();
    renderer.set_up_paint(None);
    let plot = plot_with(renderer);
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let first_body = g.fills().find(|(_, _, alpha)| *alpha == 1.0).expect("body");
    assert_eq!(*first_body.1, plot.renderer.base().series_paint(0));
}

#[test]
fn wicks_only_extend_past_the_body() {
    let plot = plot_with(CandlestickRenderer::new());
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let wicks: Vec<_> = g.draws().filter(|(s, _, _)| matches!(s, Shape::Line(_))).collect();
    // first candle has both wicks, second only an upper one since low == close
    assert_eq!(wicks.len(), 3);
    let Shape::Line(upper) = wicks[0].0 else { unreachable!() };
    assert_eq!(*upper, chart_core::Line::new(20.0, 40.0, 20.0, 50.0));
}

#[test]
fn volume_bars_are_translucent_and_scaled_to_max() {
    let plot = plot_with(CandlestickRenderer::new());
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let bars: Vec<Rect> = g.fills().filter(|(_, _, a)| (*a - 0.3).abs() < 1e-6).map(|(s, _, _)| rect_of(s)).collect();
    assert_eq!(bars.len(), 2);
    assert!((bars[0].height - 100.0).abs() < 1e-9);
    assert!((bars[1].height - 50.0).abs() < 1e-9);
    assert_eq!(bars[1].max_y(), 100.0);

    let mut renderer = CandlestickRenderer::new();
    renderer.set_draw_volume(false);
    let plot = plot_with(renderer);
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    assert!(g.fills().all(|(_, _, a)| a == 1.0));
}

#[test]
fn fixed_and_interval_widths() {
    let mut renderer = CandlestickRenderer::new();
    renderer.set_candle_width(10.0);
    let plot = plot_with(renderer);
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    assert!(g.fills().all(|(s, _, _)| (rect_of(s).width - 10.0).abs() < 1e-9));

    let mut renderer = CandlestickRenderer::new();
    renderer.set_auto_width_method(CandleWidthMethod::IntervalData);
    renderer.set_auto_width_factor(1.0);
    renderer.set_draw_volume(false);
    let plot = plot_with(renderer);
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    // period 2 on a 0..10 axis over 100 device units
    assert!(g.fills().all(|(s, _, _)| (rect_of(s).width - 20.0).abs() < 1e-9));

    let mut renderer = CandlestickRenderer::new();
    renderer.set_auto_width_method(CandleWidthMethod::Smallest);
    renderer.set_auto_width_factor(1.0);
    renderer.set_draw_volume(false);
    let plot = plot_with(renderer);
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    assert!(g.fills().all(|(s, _, _)| (rect_of(s).width - 30.0).abs() < 1e-9));
}

#[test]
fn hotspot_spans_high_to_low() {
    let plot = plot_with(CandlestickRenderer::new());
    let mut g = RecordingGraphics::new();
    let info = plot.draw(&mut g, AREA, None, true).expect("draw");
    assert_eq!(info.entities.len(), 2);
    let first = info.entities.iter().find(|e| e.item == 0).expect("entity");
    let b = first.area.bounds();
    assert!((b.min_y() - 40.0).abs() < 1e-9 && (b.max_y() - 80.0).abs() < 1e-9);
    assert!(first.tool_tip.as_deref().is_some_and(|t| t.contains("High")));
}

#[test]
fn range_bounds_cover_highs_and_lows() {
    let plot = plot_with(CandlestickRenderer::new());
    let r = plot.range_bounds().expect("bounds");
    assert_eq!((r.lower(), r.upper()), (2.0, 7.0));
}

#[test]
fn plain_xy_data_is_rejected() {
    let ds = XySeriesCollection::with_series(XySeries::with_data("s", vec![(1.0, 1.0)]));
    let mut plot = XyPlot::new(Box::new(ds), Box::new(CandlestickRenderer::new()));
    plot.grid_steps = 0;
    let mut g = RecordingGraphics::new();
    let err = plot.draw(&mut g, AREA, None, false).err();
    assert!(matches!(err, Some(ChartError::UnsupportedDataset { .. })));
    assert!(g.commands().is_empty());
}
