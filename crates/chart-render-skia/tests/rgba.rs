// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Color, NumberAxis, Paint, Rect, XyPlot, XySeries, XySeriesCollection};
use chart_core::{AreaRenderer, XyItemRenderer};
use chart_render_skia::{render_plot_to_rgba8, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let ds = XySeriesCollection::with_series(XySeries::with_data("line", vec![(0.0, 0.0), (4.0, 4.0)]));
    let plot = XyPlot::new(Box::new(ds), Box::new(AreaRenderer::default()))
        .with_axes(Box::new(NumberAxis::new("X", 0.0, 4.0)), Box::new(NumberAxis::new("Y", 0.0, 4.0)));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = render_plot_to_rgba8(&plot, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn area_fill_covers_lower_right_of_data_area() {
    let ds = XySeriesCollection::with_series(XySeries::with_data("ramp", vec![(0.0, 0.0), (4.0, 4.0)]));
    let mut renderer = AreaRenderer::default();
    renderer.base_mut().set_series_paint(0, Some(Paint::Solid(Color::from_rgb(255, 0, 0))));
    let mut plot = XyPlot::new(Box::new(ds), Box::new(renderer))
        .with_axes(Box::new(NumberAxis::new("X", 0.0, 4.0)), Box::new(NumberAxis::new("Y", 0.0, 4.0)));
    plot.grid_steps = 0;

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.width = 200;
    opts.height = 200;
    opts.insets = chart_core::types::RectangleInsets::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(opts.data_area(), Rect::new(0.0, 0.0, 200.0, 200.0));

    let (px, w, _, stride) = render_plot_to_rgba8(&plot, &opts).expect("rgba render");
    let pixel = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    // below the diagonal is filled, above it is background
    assert_eq!(pixel(150, 150), &[255, 0, 0, 255]);
    assert_eq!(pixel(50, 20), &[18, 18, 20, 255]);
    assert_eq!(w, 200);
}
