// File: crates/chart-core/tests/curve_renderers.rs
// Purpose: Line-and-shape, Bezier and sampling renderers: path construction and pass behavior.

use chart_core::geometry::Point;
use chart_core::renderer::FillType;
use chart_core::{
    BezierRenderer, LineAndShapeRenderer, NumberAxis, Path, RecordingGraphics, Rect, SamplingRenderer, Shape,
    XyDataset, XyItemRenderer, XyPlot, XySeries, XySeriesCollection,
};

const AREA: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn plot_with(data: Vec<(f64, f64)>, renderer: Box<dyn XyItemRenderer>) -> XyPlot {
    let ds = XySeriesCollection::with_series(XySeries::with_data("s0", data));
    let mut plot = XyPlot::new(Box::new(ds), renderer)
        .with_axes(Box::new(NumberAxis::new("x", 0.0, 10.0)), Box::new(NumberAxis::new("y", 0.0, 10.0)));
    plot.grid_steps = 0;
    plot
}

fn drawn_paths(g: &RecordingGraphics) -> Vec<Path> {
    g.draws()
        .filter_map(|(s, _, _)| match s {
            Shape::Path(p) => Some(p.clone()),
            _ => None,
        })
        .collect()
}

fn zigzag(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (1.0 + i as f64, if i % 2 == 0 { 2.0 } else { 6.0 })).collect()
}

#[test]
fn line_and_shape_draws_lines_then_shapes() {
    let plot = plot_with(zigzag(3), Box::new(LineAndShapeRenderer::default()));
    let mut g = RecordingGraphics::new();
    let info = plot.draw(&mut g, AREA, None, true).expect("draw");
    let lines = g.draws().filter(|(s, _, _)| matches!(s, Shape::Line(_))).count();
    assert_eq!(lines, 2);
    assert_eq!(g.fills().count(), 3, "filled item shapes");
    assert_eq!(info.entities.len(), 3);
}

#[test]
fn hidden_series_draws_nothing() {
    let mut renderer = LineAndShapeRenderer::default();
    renderer.base_mut().set_series_visible(0, Some(false));
    let plot = plot_with(zigzag(3), Box::new(renderer));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, true).expect("draw");
    assert!(g.commands().is_empty());
}

#[test]
fn bezier_path_has_precision_plus_one_vertices_per_span() {
    let plot = plot_with(zigzag(5), Box::new(BezierRenderer::default()));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let paths = drawn_paths(&g);
    assert_eq!(paths.len(), 1, "curve is stroked once, at the last item");
    let curve = &paths[0];
    assert_eq!(curve.move_count(), 1);
    assert_eq!(curve.line_count(), 4 * 6);
    assert_eq!(curve.vertices()[0], Point::new(10.0, 80.0));
    let last = *curve.vertices().last().expect("vertices");
    assert!((last.x - 50.0).abs() < 1e-9 && (last.y - 80.0).abs() < 1e-9);
}

#[test]
fn bezier_passes_through_every_input_point() {
    let data = zigzag(6);
    let plot = plot_with(data.clone(), Box::new(BezierRenderer::default()));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let curve = &drawn_paths(&g)[0];
    assert_eq!(curve.line_count(), 5 * 6);
    let vertices = curve.vertices();
    for (x, y) in data {
        let p = Point::new(x * 10.0, 100.0 - y * 10.0);
        assert!(
            vertices.iter().any(|v| (v.x - p.x).abs() < 1e-9 && (v.y - p.y).abs() < 1e-9),
            "{p:?} not on the curve"
        );
    }
}

#[test]
fn bezier_three_points_use_initial_and_final_spans() {
    let plot = plot_with(zigzag(3), Box::new(BezierRenderer::new(4, 25.0, FillType::None)));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    assert_eq!(drawn_paths(&g)[0].line_count(), 2 * 5);
}

#[test]
fn bezier_two_points_is_a_straight_segment() {
    let plot = plot_with(vec![(1.0, 2.0), (1.0, 2.0), (2.0, f64::NAN), (3.0, 4.0)], Box::new(BezierRenderer::default()));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let curve = &drawn_paths(&g)[0];
    assert_eq!(curve.vertices(), vec![Point::new(10.0, 80.0), Point::new(30.0, 60.0)]);
}

#[test]
fn bezier_fill_to_zero_closes_on_baseline() {
    let plot = plot_with(zigzag(4), Box::new(BezierRenderer::new(5, 25.0, FillType::ToZero)));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let (shape, _, _) = g.fills().next().expect("fill before stroke");
    let Shape::Path(fill) = shape else { panic!("fill is a path") };
    assert!(fill.is_closed());
    let v = fill.vertices();
    assert_eq!(v[0], Point::new(10.0, 100.0));
    assert_eq!(*v.last().expect("vertices"), Point::new(40.0, 100.0));
    assert!(matches!(g.commands()[0], chart_core::graphics::DrawCommand::Fill { .. }));
}

#[test]
fn sampling_folds_dense_runs_into_wicks() {
    let data: Vec<(f64, f64)> = (0..1000).map(|i| (i as f64 * 0.01, if i % 7 == 0 { 9.0 } else { 1.0 })).collect();
    let plot = plot_with(data, Box::new(SamplingRenderer::new()));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let paths = drawn_paths(&g);
    assert_eq!(paths.len(), 2, "series path and interval path");
    assert!(paths[0].vertices().len() < 300);
    assert!(paths[1].line_count() > 0);
}

#[test]
fn sampling_breaks_the_path_at_gaps() {
    let data = vec![(1.0, 1.0), (2.0, 2.0), (3.0, f64::NAN), (4.0, 4.0), (5.0, 5.0)];
    let plot = plot_with(data, Box::new(SamplingRenderer::new()));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let series = &drawn_paths(&g)[0];
    assert_eq!(series.move_count(), 2);
    assert_eq!(
        series.vertices(),
        vec![Point::new(10.0, 90.0), Point::new(20.0, 80.0), Point::new(40.0, 60.0), Point::new(50.0, 50.0)]
    );
}

#[test]
fn sampling_legend_is_a_line() {
    let renderer = SamplingRenderer::new();
    let ds = XySeriesCollection::with_series(XySeries::with_data("s0", zigzag(2)));
    let item = renderer.legend_item(Some(&ds as &dyn XyDataset), 0, 0).expect("legend item");
    assert!(item.line_visible);
    assert!(!item.shape_visible);
    assert_eq!(item.label, "s0");
}

#[test]
fn sampling_collapses_sub_threshold_steps_to_one_segment() {
    let data = vec![(1.0, 2.0), (1.01, 5.0), (1.02, 3.0), (1.03, 4.0)];
    let plot = plot_with(data, Box::new(SamplingRenderer::new()));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let series_path = &drawn_paths(&g)[0];
    assert_eq!(series_path.move_count(), 1);
    assert_eq!(series_path.line_count(), 1);
}
