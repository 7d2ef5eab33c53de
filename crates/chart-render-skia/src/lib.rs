// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia backend; headless PNG and RGBA rendering of an XY plot using CPU raster surfaces.

mod graphics;
mod text;

pub use graphics::SkiaGraphics;
pub use text::TextShaper;

use anyhow::Result;
use skia_safe as skia;

use chart_core::types::RectangleInsets;
use chart_core::{
    Font, Graphics2D, Line, Paint, PlotRenderingInfo, Point, Rect, Shape, Stroke, Theme, ValueAxis, XyItemRenderer, XyPlot,
};

pub const WIDTH: i32 = 1280;
pub const HEIGHT: i32 = 720;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Space between the image edge and the data area.
    pub insets: RectangleInsets,
    /// Image background and axis chrome colours.
    pub theme: Theme,
    /// Axis labels and other text; off gives platform-independent pixels.
    pub draw_labels: bool,
    pub collect_entities: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: RectangleInsets::new(20.0, 64.0, 48.0, 20.0),
            theme: Theme::dark(),
            draw_labels: true,
            collect_entities: false,
        }
    }
}

impl RenderOptions {
    pub fn data_area(&self) -> Rect {
        let i = &self.insets;
        Rect::new(
            i.left,
            i.top,
            (self.width as f64 - i.left - i.right).max(0.0),
            (self.height as f64 - i.top - i.bottom).max(0.0),
        )
    }
}

fn axis_frame(g2: &mut dyn Graphics2D, plot: &XyPlot, area: &Rect, theme: &Theme, draw_labels: bool) {
    let paint = Paint::Solid(theme.axis_line);
    let stroke = Stroke::new(1.5);
    g2.draw(&Shape::Line(Line::new(area.min_x(), area.max_y(), area.max_x(), area.max_y())), &paint, &stroke);
    g2.draw(&Shape::Line(Line::new(area.min_x(), area.min_y(), area.min_x(), area.max_y())), &paint, &stroke);
    if !draw_labels {
        return;
    }
    let font = Font::new("SansSerif", 14.0);
    let text = Paint::Solid(theme.axis_label);
    let (bottom, left) = if plot.context.orientation.is_horizontal() {
        (plot.range_axis.label(), plot.domain_axis.label())
    } else {
        (plot.domain_axis.label(), plot.range_axis.label())
    };
    let (w, _) = g2.text_size(bottom, &font);
    g2.draw_string(bottom, Point::new(area.max_x() - w, area.max_y() + 8.0), &font, &text);
    g2.draw_string(left, Point::new((area.min_x() - 56.0).max(0.0), area.min_y()), &font, &text);
}

/// Render into a fresh raster surface and hand it back with the plot's rendering info.
fn render_surface(plot: &XyPlot, opts: &RenderOptions) -> Result<(skia::Surface, PlotRenderingInfo)> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    let area = opts.data_area();
    tracing::debug!(
        width = opts.width,
        height = opts.height,
        renderer = plot.renderer.name(),
        "rendering plot"
    );
    let info = {
        let canvas = surface.canvas();
        canvas.clear(graphics::to_sk_color(opts.theme.background));
        let mut g2 = SkiaGraphics::new(canvas, &shaper).with_text(opts.draw_labels);
        let info = plot.draw(&mut g2, area, None, opts.collect_entities)?;
        axis_frame(&mut g2, plot, &area, &opts.theme, opts.draw_labels);
        info
    };
    Ok((surface, info))
}

/// Render the plot to PNG bytes.
pub fn render_plot_to_png_bytes(plot: &XyPlot, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_plot_with_info(plot, opts).map(|(bytes, _)| bytes)
}

/// Render the plot to a PNG at `output_png_path`, creating parent directories.
pub fn render_plot_to_png(
    plot: &XyPlot,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_plot_to_png_bytes(plot, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render to unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
pub fn render_plot_to_rgba8(plot: &XyPlot, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (mut surface, _) = render_surface(plot, opts)?;
    let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
    let row_bytes = w as usize * 4;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading surface pixels failed");
    }
    Ok((pixels, w, h, row_bytes))
}

/// Render and return the entity collection gathered while drawing.
pub fn render_plot_with_info(plot: &XyPlot, opts: &RenderOptions) -> Result<(Vec<u8>, PlotRenderingInfo)> {
    let (mut surface, info) = render_surface(plot, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok((data.as_bytes().to_vec(), info))
}
