use chart_core::{
    Candle, CandleWidthMethod, CandlestickRenderer, NumberAxis, OhlcSeries, OhlcSeriesCollection, RecordingGraphics,
    Rect, XyPlot,
};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn gen_candles(n: usize) -> Vec<Candle> {
    let mut out = Vec::with_capacity(n);
    let mut last = 100.0f64;
    for i in 0..n {
        let drift = (i as f64 * 0.05).sin() * 2.0;
        let o = last;
        let c = o + drift;
        let h = o.max(c) + 1.0;
        let l = o.min(c) - 1.0;
        if let Ok(candle) = Candle::try_new(i as f64, o, h, l, c) {
            out.push(candle.with_volume(1_000.0 + (i % 17) as f64 * 50.0));
        }
        last = c;
    }
    out
}

fn build_plot(n: usize, method: CandleWidthMethod) -> XyPlot {
    let mut ds = OhlcSeriesCollection::new(1.0);
    ds.add_series(OhlcSeries::from_candles("ohlc", gen_candles(n)));
    let mut renderer = CandlestickRenderer::new();
    renderer.set_auto_width_method(method);
    let mut plot = XyPlot::new(Box::new(ds), Box::new(renderer))
        .with_axes(Box::new(NumberAxis::new("T", 0.0, n as f64)), Box::new(NumberAxis::new("Price", 60.0, 140.0)));
    plot.grid_steps = 0;
    plot
}

fn bench_candles(c: &mut Criterion) {
    let mut group = c.benchmark_group("candlestick");
    for (name, method) in [
        ("average", CandleWidthMethod::Average),
        ("smallest", CandleWidthMethod::Smallest),
        ("interval", CandleWidthMethod::IntervalData),
    ] {
        let plot = build_plot(5_000, method);
        group.bench_function(format!("{name}_5000"), |b| {
            b.iter(|| {
                let mut g2 = RecordingGraphics::new();
                let info = plot.draw(&mut g2, Rect::new(0.0, 0.0, 1200.0, 600.0), None, true);
                black_box(info.map(|i| i.entities.len()).ok());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_candles);
criterion_main!(benches);
