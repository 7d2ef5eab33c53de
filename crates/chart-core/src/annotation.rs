// File: crates/chart-core/src/annotation.rs
// Summary: Annotations drawn by a renderer in front of or behind the data, with change notification.

use std::cell::{Cell, RefCell};

use crate::axis::ValueAxis;
use crate::events::{AnnotationChangeEvent, ChangeNotifier};
use crate::geometry::{Line, Rect};
use crate::graphics::{draw_aligned_string, Graphics2D};
use crate::paint::{Color, Font, Paint, Stroke};
use crate::plot::PlotContext;
use crate::shape::Shape;
use crate::types::TextAnchor;

/// Drawing layer relative to the series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

pub trait XyAnnotation {
    fn draw(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        area: &Rect,
        domain_axis: &dyn ValueAxis,
        range_axis: &dyn ValueAxis,
    );

    /// Listeners here are told whenever the annotation changes.
    fn notifier(&self) -> &ChangeNotifier<AnnotationChangeEvent>;
}

/// A line segment between two data points.
#[derive(Debug)]
pub struct XyLineAnnotation {
    line: Cell<Line>,
    pub paint: Paint,
    pub stroke: Stroke,
    notifier: ChangeNotifier<AnnotationChangeEvent>,
}

impl XyLineAnnotation {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            line: Cell::new(Line::new(x1, y1, x2, y2)),
            paint: Paint::Solid(Color::BLACK),
            stroke: Stroke::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn line(&self) -> Line {
        self.line.get()
    }

    pub fn set_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.line.set(Line::new(x1, y1, x2, y2));
        self.notifier.fire(&AnnotationChangeEvent);
    }
}

impl XyAnnotation for XyLineAnnotation {
    fn draw(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        area: &Rect,
        domain_axis: &dyn ValueAxis,
        range_axis: &dyn ValueAxis,
    ) {
        let l = self.line.get();
        let a = plot.to_device(l.start.x, l.start.y, area, domain_axis, range_axis);
        let b = plot.to_device(l.end.x, l.end.y, area, domain_axis, range_axis);
        if !a.is_finite() || !b.is_finite() {
            return;
        }
        g2.draw(&Shape::Line(Line { start: a, end: b }), &self.paint, &self.stroke);
    }

    fn notifier(&self) -> &ChangeNotifier<AnnotationChangeEvent> {
        &self.notifier
    }
}

/// Text anchored at a data point.
#[derive(Debug)]
pub struct XyTextAnnotation {
    text: RefCell<String>,
    pub x: f64,
    pub y: f64,
    pub font: Font,
    pub paint: Paint,
    pub anchor: TextAnchor,
    notifier: ChangeNotifier<AnnotationChangeEvent>,
}

impl XyTextAnnotation {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: RefCell::new(text.into()),
            x,
            y,
            font: Font::default(),
            paint: Paint::Solid(Color::BLACK),
            anchor: TextAnchor::Center,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
        self.notifier.fire(&AnnotationChangeEvent);
    }
}

impl XyAnnotation for XyTextAnnotation {
    fn draw(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        area: &Rect,
        domain_axis: &dyn ValueAxis,
        range_axis: &dyn ValueAxis,
    ) {
        let p = plot.to_device(self.x, self.y, area, domain_axis, range_axis);
        if !p.is_finite() {
            return;
        }
        let text = self.text.borrow();
        draw_aligned_string(g2, &text, &self.font, &self.paint, p.x, p.y, self.anchor);
    }

    fn notifier(&self) -> &ChangeNotifier<AnnotationChangeEvent> {
        &self.notifier
    }
}
