// File: crates/chart-core/src/paint.rs
// Summary: Colors, paints (solid and two-stop gradients), gradient transformers, strokes and fonts.

use crate::geometry::{Point, Rect};

/// 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const GRAY: Color = Color::from_rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::from_rgb(192, 192, 192);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
}

/// Linear two-stop gradient between device points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientPaint {
    pub start: Point,
    pub start_color: Color,
    pub end: Point,
    pub end_color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(GradientPaint),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<GradientPaint> for Paint {
    fn from(g: GradientPaint) -> Self {
        Paint::Gradient(g)
    }
}

impl Paint {
    pub fn as_gradient(&self) -> Option<&GradientPaint> {
        match self {
            Paint::Gradient(g) => Some(g),
            Paint::Solid(_) => None,
        }
    }

    /// Fit gradients to `bounds` with `transformer`; solid paints pass through.
    pub fn fitted(&self, transformer: Option<GradientPaintTransformer>, bounds: &Rect) -> Paint {
        match (self, transformer) {
            (Paint::Gradient(g), Some(t)) => Paint::Gradient(t.transform(g, bounds)),
            _ => *self,
        }
    }
}

/// Re-anchors a gradient onto the bounds of the shape it fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GradientPaintTransformer {
    #[default]
    Vertical,
    Horizontal,
    CenterVertical,
    CenterHorizontal,
}

impl GradientPaintTransformer {
    pub fn transform(&self, paint: &GradientPaint, b: &Rect) -> GradientPaint {
        let (start, end) = match self {
            GradientPaintTransformer::Vertical => (
                Point::new(b.center_x(), b.min_y()),
                Point::new(b.center_x(), b.max_y()),
            ),
            GradientPaintTransformer::Horizontal => (
                Point::new(b.min_x(), b.center_y()),
                Point::new(b.max_x(), b.center_y()),
            ),
            GradientPaintTransformer::CenterVertical => (
                Point::new(b.center_x(), b.center_y()),
                Point::new(b.center_x(), b.min_y()),
            ),
            GradientPaintTransformer::CenterHorizontal => (
                Point::new(b.center_x(), b.center_y()),
                Point::new(b.min_x(), b.center_y()),
            ),
        };
        GradientPaint { start, end, ..*paint }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Square,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    /// On/off intervals; `None` for a solid stroke.
    pub dash: Option<Vec<f32>>,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self { width, ..Default::default() }
    }
    pub fn dashed(width: f32, dash: Vec<f32>) -> Self {
        Self { width, dash: Some(dash), ..Default::default() }
    }
    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self { width: 1.0, dash: None, cap: LineCap::default(), join: LineJoin::default() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub bold: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size, bold: false }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("SansSerif", 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_transformer_spans_bounds() {
        let g = GradientPaint {
            start: Point::new(0.0, 0.0),
            start_color: Color::RED,
            end: Point::new(1.0, 1.0),
            end_color: Color::BLUE,
        };
        let t = GradientPaintTransformer::Vertical.transform(&g, &Rect::new(10.0, 20.0, 40.0, 60.0));
        assert_eq!(t.start, Point::new(30.0, 20.0));
        assert_eq!(t.end, Point::new(30.0, 80.0));
        assert_eq!(t.start_color, Color::RED);
    }
}
