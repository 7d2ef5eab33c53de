// File: crates/chart-core/tests/plot_overlays.rs
// Purpose: Markers, annotations, change events, crosshair tracking, legend items and axis mapping.

use std::cell::Cell;
use std::rc::Rc;

use chart_core::graphics::DrawCommand;
use chart_core::{
    Color, CrosshairState, Layer, LineAndShapeRenderer, LogarithmicAxis, Marker, NumberAxis, Paint, Point,
    RecordingGraphics, Rect, RectangleEdge, Shape, ValueAxis, XyAnnotation, XyItemRenderer, XyLineAnnotation, XyPlot,
    XySeries, XySeriesCollection, XyTextAnnotation,
};

const AREA: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn plot_with(renderer: LineAndShapeRenderer) -> XyPlot {
    let mut ds = XySeriesCollection::new();
    ds.add_series(XySeries::with_data("a", vec![(1.0, 1.0), (2.0, 2.0), (3.0, 1.5)]));
    ds.add_series(XySeries::with_data("b", vec![(1.0, 6.0), (4.0, 8.0)]));
    let mut plot = XyPlot::new(Box::new(ds), Box::new(renderer))
        .with_axes(Box::new(NumberAxis::new("x", 0.0, 10.0)), Box::new(NumberAxis::new("y", 0.0, 10.0)));
    plot.grid_steps = 0;
    plot
}

#[test]
fn value_marker_spans_the_data_area() {
    let mut plot = plot_with(LineAndShapeRenderer::new(false, false));
    plot.domain_markers.push(Marker::value(5.0, Color::BLUE).with_label("now"));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");

    let DrawCommand::Draw { shape: Shape::Line(l), alpha, .. } = &g.commands()[0] else {
        panic!("marker line first");
    };
    assert_eq!(*l, chart_core::Line::new(50.0, 0.0, 50.0, 100.0));
    assert!((alpha - 0.8).abs() < 1e-6);
    assert!(g.texts().any(|t| t == "now"));
}

#[test]
fn markers_outside_the_axis_range_are_skipped() {
    let mut plot = plot_with(LineAndShapeRenderer::new(false, false));
    plot.domain_markers.push(Marker::value(50.0, Color::BLUE));
    plot.range_markers.push(Marker::interval(20.0, 30.0, Color::BLUE));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");
    assert!(g.commands().is_empty());
}

#[test]
fn interval_marker_fills_band_and_outlines_ends() {
    let mut plot = plot_with(LineAndShapeRenderer::new(false, false));
    plot.range_markers.push(Marker::interval(2.0, 4.0, Color::BLUE));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");

    let (band, paint, _) = g.fills().next().expect("band");
    assert_eq!(*band, Shape::Rect(Rect::new(0.0, 60.0, 100.0, 20.0)));
    assert_eq!(*paint, Paint::Solid(Color::BLUE));
    let outlines: Vec<_> = g.draws().collect();
    assert_eq!(outlines.len(), 2);
}

#[test]
fn annotations_draw_on_their_layer() {
    let mut renderer = LineAndShapeRenderer::new(true, false);
    renderer.base_mut().add_annotation(Rc::new(XyTextAnnotation::new("behind", 5.0, 5.0)), Layer::Background);
    renderer.base_mut().add_annotation(Rc::new(XyLineAnnotation::new(1.0, 1.0, 2.0, 2.0)), Layer::Foreground);
    let plot = plot_with(renderer);
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, None, false).expect("draw");

    let commands = g.commands();
    assert!(matches!(&commands[0], DrawCommand::Text { text, .. } if text == "behind"));
    let DrawCommand::Draw { shape: Shape::Line(l), .. } = commands.last().expect("commands") else {
        panic!("foreground annotation last");
    };
    assert_eq!(*l, chart_core::Line::new(10.0, 90.0, 20.0, 80.0));
}

#[test]
fn annotation_changes_reach_renderer_listeners_until_removed() {
    let mut renderer = LineAndShapeRenderer::default();
    let events = Rc::new(Cell::new(0));
    let counter = Rc::clone(&events);
    renderer.base().add_change_listener(move |_| counter.set(counter.get() + 1));

    let line = Rc::new(XyLineAnnotation::new(0.0, 0.0, 1.0, 1.0));
    let handle: Rc<dyn XyAnnotation> = line.clone();
    renderer.base_mut().add_annotation(Rc::clone(&handle), Layer::Foreground);
    assert_eq!(events.get(), 1);

    line.set_line(0.0, 0.0, 2.0, 2.0);
    assert_eq!(events.get(), 2);

    let removal = renderer.base_mut().remove_annotation(&handle);
    assert!(removal.foreground && !removal.background);
    assert_eq!(events.get(), 3);

    line.set_line(0.0, 0.0, 3.0, 3.0);
    assert_eq!(events.get(), 3, "detached annotation no longer notifies");
    assert!(!renderer.base_mut().remove_annotation(&handle).any());
    assert_eq!(events.get(), 3);
}

#[test]
fn crosshair_locks_onto_nearest_item() {
    let plot = plot_with(LineAndShapeRenderer::default());
    let mut crosshair = CrosshairState::with_anchor(Point::new(21.0, 79.0));
    let mut g = RecordingGraphics::new();
    plot.draw(&mut g, AREA, Some(&mut crosshair), false).expect("draw");
    assert_eq!((crosshair.crosshair_x(), crosshair.crosshair_y()), (2.0, 2.0));
    assert!((crosshair.distance() - 2.0).abs() < 1e-9);
}

#[test]
fn legend_skips_hidden_series() {
    let mut renderer = LineAndShapeRenderer::default();
    renderer.base_mut().set_series_visible_in_legend(1, Some(false));
    let plot = plot_with(renderer);
    let items = plot.legend_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "a");
    assert_eq!(items[0].series_index, 0);
    assert!(items[0].line_visible && items[0].shape_visible);
}

#[test]
fn bounds_track_visible_series() {
    let mut renderer = LineAndShapeRenderer::default();
    renderer.base_mut().set_series_visible(1, Some(false));
    renderer.base_mut().set_data_bounds_include_visible_series_only(true);
    let plot = plot_with(renderer);
    let d = plot.domain_bounds().expect("domain");
    assert_eq!((d.lower(), d.upper()), (1.0, 3.0));
    let r = plot.range_bounds().expect("range");
    assert_eq!((r.lower(), r.upper()), (1.0, 2.0));
}

#[test]
fn log_axis_round_trips_through_device_space() {
    let axis = LogarithmicAxis::new("y", 1.0, 1000.0);
    let device = axis.value_to_device(10.0, &AREA, RectangleEdge::Left);
    assert!((device - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
    let back = axis.device_to_value(device, &AREA, RectangleEdge::Left);
    assert!((back - 10.0).abs() < 1e-9);
}
