// File: crates/chart-core/src/graphics.rs
// Summary: Drawing-context trait consumed by renderers, plus a recording implementation for tests.

use crate::geometry::{Point, Rect};
use crate::paint::{Font, Paint, Stroke};
use crate::shape::Shape;
use crate::types::TextAnchor;

/// Backend-agnostic 2D drawing surface.
///
/// Paint and stroke are passed per call; alpha is the only piece of
/// composite state and multiplies every paint drawn while it is set.
pub trait Graphics2D {
    fn fill(&mut self, shape: &Shape, paint: &Paint);
    fn draw(&mut self, shape: &Shape, paint: &Paint, stroke: &Stroke);
    /// Draw `text` with its top-left corner at `at`.
    fn draw_string(&mut self, text: &str, at: Point, font: &Font, paint: &Paint);
    /// Width and height of `text` laid out in `font`.
    fn text_size(&mut self, text: &str, font: &Font) -> (f64, f64);
    fn alpha(&self) -> f32;
    fn set_alpha(&mut self, alpha: f32);
}

/// Run `f` with the composite alpha set to `alpha`, then restore the previous value.
pub fn with_alpha<G, R>(g2: &mut G, alpha: f32, f: impl FnOnce(&mut G) -> R) -> R
where
    G: Graphics2D + ?Sized,
{
    let saved = g2.alpha();
    g2.set_alpha(alpha);
    let out = f(g2);
    g2.set_alpha(saved);
    out
}

/// Bounds `text` would occupy when drawn aligned on (`x`, `y`).
pub fn aligned_text_bounds(
    g2: &mut dyn Graphics2D,
    text: &str,
    font: &Font,
    x: f64,
    y: f64,
    anchor: TextAnchor,
) -> Rect {
    let (w, h) = g2.text_size(text, font);
    let (dx, dy) = anchor.offset(w, h);
    Rect::new(x + dx, y + dy, w, h)
}

/// Draw `text` so that `anchor` of its bounding box lands on (`x`, `y`). Returns the bounds.
pub fn draw_aligned_string(
    g2: &mut dyn Graphics2D,
    text: &str,
    font: &Font,
    paint: &Paint,
    x: f64,
    y: f64,
    anchor: TextAnchor,
) -> Rect {
    let bounds = aligned_text_bounds(g2, text, font, x, y, anchor);
    g2.draw_string(text, Point::new(bounds.x, bounds.y), font, paint);
    bounds
}

/// One captured drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill { shape: Shape, paint: Paint, alpha: f32 },
    Draw { shape: Shape, paint: Paint, stroke: Stroke, alpha: f32 },
    Text { text: String, at: Point, paint: Paint, alpha: f32 },
}

/// Records every call instead of rasterizing. Text is measured as 0.6em per char by 1em.
#[derive(Clone, Debug)]
pub struct RecordingGraphics {
    commands: Vec<DrawCommand>,
    alpha: f32,
}

impl Default for RecordingGraphics {
    fn default() -> Self {
        Self { commands: Vec::new(), alpha: 1.0 }
    }
}

impl RecordingGraphics {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
    pub fn clear(&mut self) {
        self.commands.clear();
    }
    pub fn fills(&self) -> impl Iterator<Item = (&Shape, &Paint, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { shape, paint, alpha } => Some((shape, paint, *alpha)),
            _ => None,
        })
    }
    pub fn draws(&self) -> impl Iterator<Item = (&Shape, &Paint, &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Draw { shape, paint, stroke, .. } => Some((shape, paint, stroke)),
            _ => None,
        })
    }
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Graphics2D for RecordingGraphics {
    fn fill(&mut self, shape: &Shape, paint: &Paint) {
        self.commands.push(DrawCommand::Fill { shape: shape.clone(), paint: *paint, alpha: self.alpha });
    }
    fn draw(&mut self, shape: &Shape, paint: &Paint, stroke: &Stroke) {
        self.commands.push(DrawCommand::Draw {
            shape: shape.clone(),
            paint: *paint,
            stroke: stroke.clone(),
            alpha: self.alpha,
        });
    }
    fn draw_string(&mut self, text: &str, at: Point, _font: &Font, paint: &Paint) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, paint: *paint, alpha: self.alpha });
    }
    fn text_size(&mut self, text: &str, font: &Font) -> (f64, f64) {
        let size = font.size as f64;
        (text.chars().count() as f64 * size * 0.6, size)
    }
    fn alpha(&self) -> f32 {
        self.alpha
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn with_alpha_restores_previous_value() {
        let mut g = RecordingGraphics::new();
        with_alpha(&mut g, 0.3, |g| {
            g.fill(&Shape::circle(0.0, 0.0, 1.0), &Paint::Solid(Color::RED));
        });
        assert_eq!(g.alpha(), 1.0);
        let (_, _, alpha) = g.fills().next().unwrap();
        assert!((alpha - 0.3).abs() < 1e-6);
    }
}
