// File: crates/chart-core/tests/area_renderers.rs
// Purpose: Area and per-item area renderers drawn through a plot into a recording surface.

use chart_core::geometry::Point;
use chart_core::path::PathCommand;
use chart_core::{
    Area2Renderer, AreaRenderer, AreaRendererType, NumberAxis, PlotOrientation, RecordingGraphics, Rect, Shape,
    XyItemRenderer, XyPlot, XySeries, XySeriesCollection,
};

const AREA: Rect = Rect { x: 0.0, y: 0.0, width: 100.0, height: 100.0 };

fn plot_with(data: Vec<(f64, f64)>, renderer: Box<dyn XyItemRenderer>) -> XyPlot {
    let ds = XySeriesCollection::with_series(XySeries::with_data("s0", data));
    let mut plot = XyPlot::new(Box::new(ds), renderer)
        .with_axes(Box::new(NumberAxis::new("x", 0.0, 10.0)), Box::new(NumberAxis::new("y", 0.0, 10.0)));
    plot.grid_steps = 0;
    plot
}

fn path_of(shape: &Shape) -> &chart_core::Path {
    match shape {
        Shape::Path(p) => p,
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn series_polygon_is_seeded_and_closed_on_baseline() {
    let plot = plot_with(vec![(1.0, 2.0), (2.0, 4.0), (3.0, 3.0)], Box::new(AreaRenderer::default()));
    let mut g = RecordingGraphics::new();
    let info = plot.draw(&mut g, AREA, None, true).expect("draw");

    let fills: Vec<_> = g.fills().collect();
    assert_eq!(fills.len(), 1, "one polygon per series");
    let (shape, paint, alpha) = fills[0];
    assert_eq!(*paint, plot.renderer.base().series_paint(0));
    assert_eq!(alpha, 1.0);

    let path = path_of(shape);
    assert!(path.is_closed());
    assert_eq!(
        path.vertices(),
        vec![
            Point::new(10.0, 100.0),
            Point::new(10.0, 80.0),
            Point::new(20.0, 60.0),
            Point::new(30.0, 70.0),
            Point::new(30.0, 100.0),
        ]
    );
    assert_eq!(g.draws().count(), 0, "no outline, lines or shapes by default");
    assert_eq!(info.entities.len(), 3);
}

#[test]
fn hotspot_spans_midpoints_to_neighbours() {
    let plot = plot_with(vec![(1.0, 2.0), (2.0, 4.0), (3.0, 3.0)], Box::new(AreaRenderer::default()));
    let mut g = RecordingGraphics::new();
    let info = plot.draw(&mut g, AREA, None, true).expect("draw");

    let middle = info.entities.iter().find(|e| e.item == 1).expect("entity for item 1");
    let b = middle.area.bounds();
    assert!((b.min_x() - 15.0).abs() < 1e-9 && (b.max_x() - 25.0).abs() < 1e-9);
    assert!((b.min_y() - 60.0).abs() < 1e-9 && (b.max_y() - 100.0).abs() < 1e-9);
    assert_eq!(middle.series_key, "s0");
}

#[test]
fn nan_values_sit_on_the_baseline() {
    let plot = plot_with(vec![(1.0, 2.0), (2.0, f64::NAN), (3.0, 3.0)], Box::new(AreaRenderer::default()));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let (shape, _, _) = g.fills().next().expect("area fill");
    assert_eq!(path_of(shape).vertices()[2], Point::new(20.0, 100.0));
}

#[test]
fn horizontal_orientation_swaps_coordinates() {
    let plot = plot_with(vec![(1.0, 2.0), (2.0, 4.0)], Box::new(AreaRenderer::default()))
        .with_orientation(PlotOrientation::Horizontal);
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    let (shape, _, _) = g.fills().next().expect("area fill");
    let path = path_of(shape);
    assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(0.0, 90.0)));
    assert_eq!(path.vertices()[1], Point::new(20.0, 90.0));
}

#[test]
fn outline_and_lines_are_optional() {
    let mut renderer = AreaRenderer::new(AreaRendererType::Area);
    renderer.set_outline(true);
    let plot = plot_with(vec![(1.0, 2.0), (2.0, 4.0), (3.0, 3.0)], Box::new(renderer));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    assert_eq!(g.draws().count(), 1);

    let plot = plot_with(vec![(1.0, 2.0), (2.0, 4.0), (3.0, 3.0)], Box::new(AreaRenderer::new(AreaRendererType::Lines)));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    assert_eq!(g.fills().count(), 0);
    assert!(g.draws().all(|(s, _, _)| matches!(s, Shape::Line(_))));
    assert_eq!(g.draws().count(), 2);
}

#[test]
fn single_item_series_fills_nothing() {
    let plot = plot_with(vec![(1.0, 2.0)], Box::new(AreaRenderer::default()));
    let mut g = RecordingGraphics::new();
    let info = plot.draw(&mut g, AREA, None, true).expect("draw");
    assert_eq!(g.fills().count(), 0);
    assert!(info.entities.len() <= 1);
}

#[test]
fn area2_fills_one_polygon_per_item() {
    let plot = plot_with(vec![(1.0, 2.0), (2.0, 4.0), (3.0, 3.0)], Box::new(Area2Renderer::new()));
    let mut g = RecordingGraphics::new();
    let info = plot.draw(&mut g, AREA, None, true).expect("draw");
    assert_eq!(g.fills().count(), 3);
    assert_eq!(info.entities.len(), 3);
    assert!(g.fills().all(|(s, _, _)| path_of(s).is_closed()));
}

#[test]
fn area2_hit_regions_stay_inside_the_data_area() {
    let plot = plot_with(vec![(1.0, 2.0), (2.0, 4.0), (30.0, 3.0)], Box::new(Area2Renderer::new()));
    let mut g = RecordingGraphics::new();
    let info = plot.draw(&mut g, AREA, None, true).expect("draw");
    assert_eq!(g.fills().count(), 3, "every item is still filled");
    assert_eq!(info.entities.len(), 2, "the off-screen item registers no hit region");
    for e in info.entities.iter() {
        let b = e.area.bounds();
        assert!(b.min_x() >= -1e-9 && b.max_x() <= 100.0 + 1e-9, "item {} bounds {b:?}", e.item);
    }
    assert!(info.entities.iter().all(|e| e.item != 2));
}

#[test]
fn two_item_series_keeps_axis_roles() {
    let ds = XySeriesCollection::with_series(XySeries::with_data("s0", vec![(1.0, 10.0), (2.0, 20.0)]));
    let mut plot = XyPlot::new(Box::new(ds), Box::new(AreaRenderer::default()))
        .with_axes(Box::new(NumberAxis::new("x", 0.0, 3.0)), Box::new(NumberAxis::new("y", 0.0, 30.0)));
    plot.grid_steps = 0;
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");

    let (shape, _, _) = g.fills().next().expect("area");
    let v = path_of(shape).vertices();
    let third = 100.0 / 3.0;
    let expected = [(third, 100.0), (third, 100.0 - third), (2.0 * third, 100.0 - 2.0 * third), (2.0 * third, 100.0)];
    assert_eq!(v.len(), expected.len());
    for (p, (x, y)) in v.iter().zip(expected) {
        assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?}");
    }
}
