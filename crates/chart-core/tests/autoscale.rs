// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale from renderer-reported data bounds.

use chart_core::{
    Candle, CandlestickRenderer, LineAndShapeRenderer, NumberAxis, OhlcSeries, OhlcSeriesCollection, Range, ValueAxis, XyDataset,
    XyItemRenderer, XyPlot, XySeries, XySeriesCollection,
};

#[test]
fn autoscale_line_series() {
    let ds = XySeriesCollection::with_series(XySeries::with_data("line", vec![(0.0, 1.0), (5.0, 3.0), (2.0, f64::NAN)]));
    let plot = XyPlot::new(Box::new(ds), Box::new(LineAndShapeRenderer::default()))
        .with_axes(Box::new(NumberAxis::new("x", 0.0, 10.0)), Box::new(NumberAxis::new("y", 0.0, 10.0)));

    let mut x_axis = NumberAxis::default_x();
    x_axis.auto_range(plot.domain_bounds().expect("domain"), 0.0);
    assert_eq!(x_axis.range(), Range::new(0.0, 5.0));

    let mut y_axis = NumberAxis::default_y();
    y_axis.auto_range(plot.range_bounds().expect("range"), 0.1);
    assert!((y_axis.lower_bound() - 0.8).abs() < 1e-9);
    assert!((y_axis.upper_bound() - 3.2).abs() < 1e-9);
}

#[test]
fn autoscale_candles_uses_highs_lows_and_period() {
    let mut ds = OhlcSeriesCollection::new(1.0);
    ds.add_series(OhlcSeries::from_candles(
        "ohlc",
        vec![
            Candle::try_new(2.0, 2.0, 6.0, 1.5, 4.0).expect("valid"),
            Candle::try_new(3.0, 4.0, 5.5, 2.0, 2.5).expect("valid"),
        ],
    ));
    let renderer = CandlestickRenderer::new();
    let r = renderer.find_range_bounds(Some(&ds as &dyn XyDataset), None).expect("range");
    assert_eq!((r.lower(), r.upper()), (1.5, 6.0));
    let d = renderer.find_domain_bounds(Some(&ds as &dyn XyDataset)).expect("domain");
    assert_eq!((d.lower(), d.upper()), (2.0, 3.0));
}

#[test]
fn degenerate_data_still_gets_a_window() {
    let mut axis = NumberAxis::default_y();
    axis.auto_range(Range::new(4.0, 4.0), 0.05);
    assert_eq!((axis.lower_bound(), axis.upper_bound()), (3.0, 5.0));
}

#[test]
fn range_bounds_are_stable_across_calls() {
    let ds = XySeriesCollection::with_series(XySeries::with_data("s", vec![(1.0, 4.0), (2.0, -1.0), (3.0, 2.5)]));
    let plot = XyPlot::new(Box::new(ds), Box::new(LineAndShapeRenderer::default()))
        .with_axes(Box::new(NumberAxis::new("x", 0.0, 10.0)), Box::new(NumberAxis::new("y", 0.0, 10.0)));
    let first = plot.range_bounds();
    assert_eq!(first, Some(Range::new(-1.0, 4.0)));
    assert_eq!(plot.range_bounds(), first);
}
