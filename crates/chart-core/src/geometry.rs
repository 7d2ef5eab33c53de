// File: crates/chart-core/src/geometry.rs
// Summary: Device-space geometry helpers: points, lines, rectangles and line clipping.

/// A point in device space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A straight segment between two device points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { start: Point::new(x1, y1), end: Point::new(x2, y2) }
    }
    pub fn bounds(&self) -> Rect {
        Rect::from_ltrb(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }
}

/// Axis-aligned rectangle. `x`/`y` is the top-left corner in device space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }
    pub fn min_x(&self) -> f64 { self.x }
    pub fn max_x(&self) -> f64 { self.x + self.width }
    pub fn min_y(&self) -> f64 { self.y }
    pub fn max_y(&self) -> f64 { self.y + self.height }
    pub fn center_x(&self) -> f64 { self.x + self.width / 2.0 }
    pub fn center_y(&self) -> f64 { self.y + self.height / 2.0 }

    /// True when the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Inclusive containment test (edges count as inside).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.min_x() < self.max_x()
            && other.max_x() > self.min_x()
            && other.min_y() < self.max_y()
            && other.max_y() > self.min_y()
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let l = self.min_x().max(other.min_x());
        let t = self.min_y().max(other.min_y());
        let r = self.max_x().min(other.max_x());
        let b = self.max_y().min(other.max_y());
        let out = Rect::from_ltrb(l, t, r, b);
        if out.is_empty() { None } else { Some(out) }
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_ltrb(
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Grow (or shrink, for negative values) on every side.
    pub fn expanded(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x - dx, self.y - dy, self.width + 2.0 * dx, self.height + 2.0 * dy)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

fn outcode(r: &Rect, x: f64, y: f64) -> u8 {
    let mut code = INSIDE;
    if x < r.min_x() {
        code |= LEFT;
    } else if x > r.max_x() {
        code |= RIGHT;
    }
    if y < r.min_y() {
        code |= TOP;
    } else if y > r.max_y() {
        code |= BOTTOM;
    }
    code
}

/// Clip `line` to `rect` (Cohen-Sutherland). Returns `None` when nothing is visible.
pub fn clip_line(line: &Line, rect: &Rect) -> Option<Line> {
    let (mut x1, mut y1, mut x2, mut y2) = (line.start.x, line.start.y, line.end.x, line.end.y);
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return None;
    }
    let mut c1 = outcode(rect, x1, y1);
    let mut c2 = outcode(rect, x2, y2);
    loop {
        if c1 | c2 == INSIDE {
            return Some(Line::new(x1, y1, x2, y2));
        }
        if c1 & c2 != INSIDE {
            return None;
        }
        let out = if c1 != INSIDE { c1 } else { c2 };
        let (x, y);
        if out & TOP != 0 {
            x = x1 + (x2 - x1) * (rect.min_y() - y1) / (y2 - y1);
            y = rect.min_y();
        } else if out & BOTTOM != 0 {
            x = x1 + (x2 - x1) * (rect.max_y() - y1) / (y2 - y1);
            y = rect.max_y();
        } else if out & RIGHT != 0 {
            y = y1 + (y2 - y1) * (rect.max_x() - x1) / (x2 - x1);
            x = rect.max_x();
        } else {
            y = y1 + (y2 - y1) * (rect.min_x() - x1) / (x2 - x1);
            x = rect.min_x();
        }
        if out == c1 {
            x1 = x;
            y1 = y;
            c1 = outcode(rect, x1, y1);
        } else {
            x2 = x;
            y2 = y;
            c2 = outcode(rect, x2, y2);
        }
    }
}
