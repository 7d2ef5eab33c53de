// File: crates/chart-core/src/shape.rs
// Summary: Drawable shapes (rect, ellipse, line, path) and the standard series shape sequence.

use crate::geometry::{Line, Point, Rect};
use crate::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(Rect),
    /// Ellipse inscribed in the rectangle.
    Ellipse(Rect),
    Line(Line),
    Path(Path),
}

impl Shape {
    /// Circle of radius `r` centred on (`x`, `y`).
    pub fn circle(x: f64, y: f64, r: f64) -> Shape {
        Shape::Ellipse(Rect::new(x - r, y - r, 2.0 * r, 2.0 * r))
    }

    pub fn polygon(points: &[Point]) -> Shape {
        Shape::Path(Path::from_polygon(points))
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rect(r) | Shape::Ellipse(r) => *r,
            Shape::Line(l) => l.bounds(),
            Shape::Path(p) => p.bounds().unwrap_or_default(),
        }
    }

    /// Bounding-box overlap with `rect`. Lines count even when they have zero width.
    pub fn intersects(&self, rect: &Rect) -> bool {
        let b = self.bounds();
        b.min_x() <= rect.max_x()
            && b.max_x() >= rect.min_x()
            && b.min_y() <= rect.max_y()
            && b.max_y() >= rect.min_y()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        match self {
            Shape::Rect(r) => Shape::Rect(Rect::new(r.x + dx, r.y + dy, r.width, r.height)),
            Shape::Ellipse(r) => Shape::Ellipse(Rect::new(r.x + dx, r.y + dy, r.width, r.height)),
            Shape::Line(l) => Shape::Line(Line {
                start: l.start.translated(dx, dy),
                end: l.end.translated(dx, dy),
            }),
            Shape::Path(p) => Shape::Path(p.translated(dx, dy)),
        }
    }

    /// Empty paths and zero-area rectangles.
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Rect(r) | Shape::Ellipse(r) => r.is_empty(),
            Shape::Line(_) => false,
            Shape::Path(p) => p.is_empty(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}

impl From<Path> for Shape {
    fn from(p: Path) -> Self {
        Shape::Path(p)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

/// The ten standard series shapes, centred on the origin, cycled by series index.
pub fn standard_series_shapes() -> Vec<Shape> {
    let size = 6.0;
    let d = size / 2.0;
    let p = Point::new;
    vec![
        Shape::Rect(Rect::new(-d, -d, size, size)),
        Shape::Ellipse(Rect::new(-d, -d, size, size)),
        Shape::polygon(&[p(0.0, -d), p(d, d), p(-d, d)]),
        Shape::polygon(&[p(0.0, -d), p(d, 0.0), p(0.0, d), p(-d, 0.0)]),
        Shape::Rect(Rect::new(-d, -d / 2.0, size, size / 2.0)),
        Shape::polygon(&[p(-d, -d), p(d, -d), p(0.0, d)]),
        Shape::Ellipse(Rect::new(-d, -d / 2.0, size, size / 2.0)),
        Shape::polygon(&[p(-d, -d), p(d, 0.0), p(-d, d)]),
        Shape::Rect(Rect::new(-d / 2.0, -d, size / 2.0, size)),
        Shape::polygon(&[p(-d, 0.0), p(d, -d), p(d, d)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_circle_keeps_size() {
        let c = Shape::circle(0.0, 0.0, 3.0).translated(10.0, 20.0);
        assert_eq!(c.bounds(), Rect::new(7.0, 17.0, 6.0, 6.0));
    }

    #[test]
    fn standard_shapes_are_centred() {
        for s in standard_series_shapes() {
            let b = s.bounds();
            assert!((b.center_x()).abs() < 1e-9 || s.is_empty());
        }
        assert_eq!(standard_series_shapes().len(), 10);
    }
}
