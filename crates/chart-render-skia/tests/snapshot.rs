// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow, one image per renderer.
// Behavior:
// - Renders deterministic small plots to PNG bytes with text disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{
    AreaRenderer, BezierRenderer, Candle, CandlestickRenderer, DeviationStepRenderer, FillType, NumberAxis,
    OhlcSeries, OhlcSeriesCollection, SamplingRenderer, XyDataset, XyItemRenderer, XyPlot, XySeries,
    XySeriesCollection, YIntervalSeries, YIntervalSeriesCollection,
};
use chart_render_skia::{render_plot_to_png_bytes, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_to_bytes(dataset: Box<dyn XyDataset>, renderer: Box<dyn XyItemRenderer>, y: (f64, f64)) -> Vec<u8> {
    let plot = XyPlot::new(dataset, renderer)
        .with_axes(Box::new(NumberAxis::new("X", 0.0, 9.0)), Box::new(NumberAxis::new("Y", y.0, y.1)));
    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 300;
    opts.draw_labels = false; // deterministic
    render_plot_to_png_bytes(&plot, &opts).expect("render bytes")
}

fn wave() -> XySeriesCollection {
    XySeriesCollection::with_series(XySeries::with_data(
        "wave",
        (0..10).map(|i| (i as f64, (i as f64 * 0.7).sin() * 2.0 + 2.0)).collect(),
    ))
}

#[test]
fn golden_area() {
    let bytes = render_to_bytes(Box::new(wave()), Box::new(AreaRenderer::default()), (-2.0, 6.0));
    write_or_compare("area.png", &bytes);
}

#[test]
fn golden_bezier_filled() {
    let renderer = BezierRenderer::new(8, 25.0, FillType::ToLowerBound);
    let bytes = render_to_bytes(Box::new(wave()), Box::new(renderer), (-2.0, 6.0));
    write_or_compare("bezier.png", &bytes);
}

#[test]
fn golden_sampling() {
    let dense = XySeriesCollection::with_series(XySeries::with_data(
        "dense",
        (0..5_000).map(|i| (i as f64 * 0.0018, ((i * 37) % 101) as f64 / 25.0)).collect(),
    ));
    let bytes = render_to_bytes(Box::new(dense), Box::new(SamplingRenderer::new()), (-2.0, 6.0));
    write_or_compare("sampling.png", &bytes);
}

#[test]
fn golden_candles() {
    let mut ds = OhlcSeriesCollection::new(1.0);
    let candles = [
        (1.0, 2.0, 3.0, 1.0, 2.5),
        (2.0, 2.5, 4.0, 2.0, 3.5),
        (3.0, 3.5, 3.8, 2.2, 2.4),
        (4.0, 2.4, 2.6, 0.5, 1.0),
        (5.0, 1.0, 2.0, 0.8, 1.9),
    ]
    .iter()
    .filter_map(|&(t, o, h, l, c)| Candle::try_new(t, o, h, l, c).ok().map(|k| k.with_volume(t * 10.0)))
    .collect();
    ds.add_series(OhlcSeries::from_candles("ohlc", candles));
    let bytes = render_to_bytes(Box::new(ds), Box::new(CandlestickRenderer::new()), (-2.0, 6.0));
    write_or_compare("candles.png", &bytes);
}

#[test]
fn golden_deviation_step() {
    let mut series = YIntervalSeries::new("band");
    for i in 0..10 {
        let y = (i as f64 * 0.5).cos() * 1.5 + 2.0;
        series.add(i as f64, y, y - 0.8, y + 0.8);
    }
    let mut ds = YIntervalSeriesCollection::new();
    ds.add_series(series);
    let bytes = render_to_bytes(Box::new(ds), Box::new(DeviationStepRenderer::default()), (-2.0, 6.0));
    write_or_compare("deviation_step.png", &bytes);
}
