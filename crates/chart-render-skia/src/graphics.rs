// File: crates/chart-render-skia/src/graphics.rs
// Summary: Graphics2D over a Skia canvas: shapes, strokes, gradients and composite alpha.

use skia_safe as skia;

use chart_core::paint::{LineCap, LineJoin};
use chart_core::path::PathCommand;
use chart_core::{Color, Font, Graphics2D, Paint, Point, Rect, Shape, Stroke};

use crate::text::TextShaper;

pub(crate) fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_sk_rect(r: &Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
}

fn to_sk_path(path: &chart_core::Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                out.move_to((p.x as f32, p.y as f32));
            }
            PathCommand::LineTo(p) => {
                out.line_to((p.x as f32, p.y as f32));
            }
            PathCommand::Close => {
                out.close();
            }
        }
    }
    out
}

/// Draws onto a borrowed canvas. Text goes through the shared [`TextShaper`];
/// with `draw_text` off, strings are measured but not painted.
pub struct SkiaGraphics<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    alpha: f32,
    draw_text: bool,
}

impl<'a> SkiaGraphics<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, alpha: 1.0, draw_text: true }
    }

    pub fn with_text(mut self, draw_text: bool) -> Self {
        self.draw_text = draw_text;
        self
    }

    fn sk_paint(&self, paint: &Paint) -> skia::Paint {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        match paint {
            Paint::Solid(c) => {
                p.set_color(to_sk_color(*c));
            }
            Paint::Gradient(g) => {
                let colors = [to_sk_color(g.start_color), to_sk_color(g.end_color)];
                let shader = skia::Shader::linear_gradient(
                    ((g.start.x as f32, g.start.y as f32), (g.end.x as f32, g.end.y as f32)),
                    &colors[..],
                    None,
                    skia::TileMode::Clamp,
                    None,
                    None,
                );
                match shader {
                    Some(s) => {
                        p.set_shader(s);
                    }
                    // coincident end points: fall back to the start color
                    None => {
                        p.set_color(colors[0]);
                    }
                }
            }
        }
        if self.alpha < 1.0 {
            let a = p.alpha_f() * self.alpha.clamp(0.0, 1.0);
            p.set_alpha_f(a);
        }
        p
    }

    fn stroke_paint(&self, paint: &Paint, stroke: &Stroke) -> skia::Paint {
        let mut p = self.sk_paint(paint);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(stroke.width);
        p.set_stroke_cap(match stroke.cap {
            LineCap::Butt => skia::paint::Cap::Butt,
            LineCap::Square => skia::paint::Cap::Square,
            LineCap::Round => skia::paint::Cap::Round,
        });
        p.set_stroke_join(match stroke.join {
            LineJoin::Miter => skia::paint::Join::Miter,
            LineJoin::Round => skia::paint::Join::Round,
            LineJoin::Bevel => skia::paint::Join::Bevel,
        });
        if let Some(dash) = stroke.dash.as_deref() {
            if let Some(effect) = skia::PathEffect::dash(dash, 0.0) {
                p.set_path_effect(effect);
            }
        }
        p
    }

    fn paint_shape(&self, shape: &Shape, paint: &skia::Paint) {
        match shape {
            Shape::Rect(r) => {
                self.canvas.draw_rect(to_sk_rect(r), paint);
            }
            Shape::Ellipse(r) => {
                self.canvas.draw_oval(to_sk_rect(r), paint);
            }
            Shape::Line(l) => {
                self.canvas.draw_line(
                    (l.start.x as f32, l.start.y as f32),
                    (l.end.x as f32, l.end.y as f32),
                    paint,
                );
            }
            Shape::Path(path) => {
                self.canvas.draw_path(&to_sk_path(path), paint);
            }
        }
    }
}

impl Graphics2D for SkiaGraphics<'_> {
    fn fill(&mut self, shape: &Shape, paint: &Paint) {
        if matches!(shape, Shape::Line(_)) {
            return;
        }
        let mut p = self.sk_paint(paint);
        p.set_style(skia::paint::Style::Fill);
        self.paint_shape(shape, &p);
    }

    fn draw(&mut self, shape: &Shape, paint: &Paint, stroke: &Stroke) {
        let p = self.stroke_paint(paint, stroke);
        self.paint_shape(shape, &p);
    }

    fn draw_string(&mut self, text: &str, at: Point, font: &Font, paint: &Paint) {
        if !self.draw_text {
            return;
        }
        let color = match paint {
            Paint::Solid(c) => *c,
            Paint::Gradient(g) => g.start_color,
        };
        let a = (color.a as f32 * self.alpha.clamp(0.0, 1.0)).round() as u8;
        self.shaper
            .draw_top_left(self.canvas, text, at.x as f32, at.y as f32, font, to_sk_color(color.with_alpha(a)));
    }

    fn text_size(&mut self, text: &str, font: &Font) -> (f64, f64) {
        let (w, h) = self.shaper.measure(text, font);
        (w as f64, h as f64)
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}
