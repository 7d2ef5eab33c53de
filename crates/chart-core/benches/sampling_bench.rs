use chart_core::{NumberAxis, RecordingGraphics, Rect, SamplingRenderer, XyPlot, XySeries, XySeriesCollection};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            // simple waveform with drift
            let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
            (i as f64, y)
        })
        .collect()
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    for &n in &[50_000usize, 200_000usize] {
        let ds = XySeriesCollection::with_series(XySeries::with_data("wave", gen_xy(n)));
        let mut plot = XyPlot::new(Box::new(ds), Box::new(SamplingRenderer::new()))
            .with_axes(Box::new(NumberAxis::new("X", 0.0, n as f64)), Box::new(NumberAxis::new("Y", -12.0, 32.0)));
        plot.grid_steps = 0;
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &plot, |b, plot| {
            b.iter(|| {
                let mut g2 = RecordingGraphics::new();
                let info = plot.draw(&mut g2, Rect::new(0.0, 0.0, 800.0, 500.0), None, false);
                black_box((info.is_ok(), g2.commands().len()));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
