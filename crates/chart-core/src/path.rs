// File: crates/chart-core/src/path.rs
// Summary: General path built from move/line/close commands, with bounds and rectangle clipping.

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// An ordered list of path commands. Coordinates are device space.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed polygon through `points` (empty path when `points` is empty).
    pub fn from_polygon(points: &[Point]) -> Self {
        let mut path = Path::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(first.x, first.y);
            for p in rest {
                path.line_to(p.x, p.y);
            }
            path.close();
        }
        path
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    /// Append a line. A line with no current point starts a subpath instead.
    pub fn line_to(&mut self, x: f64, y: f64) {
        if self.current_point().is_none() {
            self.move_to(x, y);
        } else {
            self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        }
    }

    pub fn close(&mut self) {
        if !self.commands.is_empty() && !matches!(self.commands.last(), Some(PathCommand::Close)) {
            self.commands.push(PathCommand::Close);
        }
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Last point reached. After a close this is the start of the closed subpath.
    pub fn current_point(&self) -> Option<Point> {
        let mut current = None;
        let mut subpath_start = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(p);
                    current = Some(p);
                }
                PathCommand::LineTo(p) => current = Some(p),
                PathCommand::Close => current = subpath_start,
            }
        }
        current
    }

    /// Every explicit vertex, in order (move and line targets).
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::Close => None,
            })
            .collect()
    }

    pub fn move_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count()
    }

    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::LineTo(_))).count()
    }

    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.vertices().into_iter();
        let first = it.next()?;
        let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
        for p in it {
            l = l.min(p.x);
            t = t.min(p.y);
            r = r.max(p.x);
            b = b.max(p.y);
        }
        Some(Rect::from_ltrb(l, t, r, b))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p.translated(dx, dy)),
                PathCommand::LineTo(p) => PathCommand::LineTo(p.translated(dx, dy)),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }

    /// Split into subpaths as (vertices, closed) pairs.
    pub fn subpaths(&self) -> Vec<(Vec<Point>, bool)> {
        let mut out = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    if !current.is_empty() {
                        out.push((std::mem::take(&mut current), false));
                    }
                    current.push(p);
                }
                PathCommand::LineTo(p) => current.push(p),
                PathCommand::Close => {
                    if !current.is_empty() {
                        out.push((std::mem::take(&mut current), true));
                    }
                }
            }
        }
        if !current.is_empty() {
            out.push((current, false));
        }
        out
    }

    /// Intersect the area enclosed by this path with `rect`.
    /// Each subpath is treated as a polygon; degenerate results are dropped.
    pub fn clip_to_rect(&self, rect: &Rect) -> Path {
        let mut out = Path::new();
        for (poly, _) in self.subpaths() {
            let clipped = clip_polygon(&poly, rect);
            if clipped.len() >= 3 && polygon_area(&clipped).abs() > f64::EPSILON {
                let sub = Path::from_polygon(&clipped);
                out.commands.extend(sub.commands);
            }
        }
        out
    }
}

/// Shoelace area, signed by winding.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

#[derive(Clone, Copy)]
enum Edge {
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
}

impl Edge {
    fn inside(&self, p: Point) -> bool {
        match *self {
            Edge::Left(v) => p.x >= v,
            Edge::Right(v) => p.x <= v,
            Edge::Top(v) => p.y >= v,
            Edge::Bottom(v) => p.y <= v,
        }
    }

    fn cross(&self, a: Point, b: Point) -> Point {
        match *self {
            Edge::Left(v) | Edge::Right(v) => {
                let t = (v - a.x) / (b.x - a.x);
                Point::new(v, a.y + t * (b.y - a.y))
            }
            Edge::Top(v) | Edge::Bottom(v) => {
                let t = (v - a.y) / (b.y - a.y);
                Point::new(a.x + t * (b.x - a.x), v)
            }
        }
    }
}

// Sutherland-Hodgman against the four rectangle edges.
fn clip_polygon(points: &[Point], rect: &Rect) -> Vec<Point> {
    let edges = [
        Edge::Left(rect.min_x()),
        Edge::Right(rect.max_x()),
        Edge::Top(rect.min_y()),
        Edge::Bottom(rect.max_y()),
    ];
    let mut output: Vec<Point> = points.to_vec();
    for edge in edges {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let mut prev = input[input.len() - 1];
        for &cur in &input {
            match (edge.inside(cur), edge.inside(prev)) {
                (true, true) => output.push(cur),
                (true, false) => {
                    output.push(edge.cross(prev, cur));
                    output.push(cur);
                }
                (false, true) => output.push(edge.cross(prev, cur)),
                (false, false) => {}
            }
            prev = cur;
        }
    }
    output.dedup();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_without_current_point_starts_subpath() {
        let mut p = Path::new();
        p.line_to(1.0, 2.0);
        assert_eq!(p.commands(), &[PathCommand::MoveTo(Point::new(1.0, 2.0))]);
        p.line_to(3.0, 4.0);
        assert_eq!(p.current_point(), Some(Point::new(3.0, 4.0)));
        p.close();
        assert_eq!(p.current_point(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn clip_triangle_to_rect() {
        let tri = Path::from_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(0.0, 20.0),
        ]);
        let clipped = tri.clip_to_rect(&Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = clipped.bounds().unwrap();
        assert_eq!(b, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(clipped.is_closed());

        let outside = tri.clip_to_rect(&Rect::new(50.0, 50.0, 10.0, 10.0));
        assert!(outside.is_empty());
    }
}
