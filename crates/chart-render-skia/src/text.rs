// File: crates/chart-render-skia/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use chart_core::Font;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        let weight = if font.bold { skia::font_style::Weight::BOLD } else { skia::font_style::Weight::NORMAL };
        ts.set_font_style(skia::FontStyle::new(weight, skia::font_style::Width::NORMAL, skia::font_style::Slant::Upright));
        let requested = font.family.as_str();
        let families: Vec<&str> = if requested.eq_ignore_ascii_case("monospaced") {
            vec!["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]
        } else {
            vec![requested, "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]
        };
        ts.set_font_families(&families);
        ts
    }

    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line and total height.
    pub fn measure(&self, text: &str, font: &Font) -> (f32, f32) {
        let p = self.layout(text, font, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Paint `text` with its top-left corner at (`x`, `y`).
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &Font, color: skia::Color) {
        let mut p = self.layout(text, font, color);
        p.paint(canvas, (x, y));
    }
}
