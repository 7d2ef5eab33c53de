// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{LineAndShapeRenderer, NumberAxis, XyPlot, XySeries, XySeriesCollection};
use chart_render_skia::{render_plot_to_png, render_plot_to_png_bytes, render_plot_with_info, RenderOptions};

fn small_plot() -> XyPlot {
    // Minimal data: tiny line series
    let ds = XySeriesCollection::with_series(XySeries::with_data(
        "line",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));
    XyPlot::new(Box::new(ds), Box::new(LineAndShapeRenderer::default()))
        .with_axes(Box::new(NumberAxis::new("X", 0.0, 4.0)), Box::new(NumberAxis::new("Y", 0.0, 4.0)))
}

#[test]
fn render_smoke_png() {
    let plot = small_plot();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    render_plot_to_png(&plot, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_plot_to_png_bytes(&plot, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn entities_are_collected_on_request() {
    let plot = small_plot();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.collect_entities = true;
    let (_, info) = render_plot_with_info(&plot, &opts).expect("render");
    assert_eq!(info.entities.len(), 5);
    assert_eq!(info.data_area, opts.data_area());
}
