// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for plot chrome, candle paints and the series paint palette.

use crate::paint::{Color, Paint};
use crate::plot::XyPlot;
use crate::renderer::CandlestickRenderer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub plot_background: Color,
    pub grid: Color,
    pub tick_band: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub candle_up: Color,
    pub candle_down: Color,
    pub volume: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            plot_background: Color::from_argb(255, 24, 24, 28),
            grid: Color::from_argb(255, 40, 40, 45),
            tick_band: Color::from_argb(255, 30, 30, 34),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            candle_up: Color::from_argb(255, 40, 200, 120),
            candle_down: Color::from_argb(255, 220, 80, 80),
            volume: Color::from_argb(255, 96, 156, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            plot_background: Color::from_argb(255, 255, 255, 255),
            grid: Color::from_argb(255, 230, 230, 235),
            tick_band: Color::from_argb(255, 244, 244, 248),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            candle_up: Color::from_argb(255, 20, 160, 90),
            candle_down: Color::from_argb(255, 200, 60, 60),
            volume: Color::from_argb(255, 128, 128, 128),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            plot_background: Color::from_argb(255, 0x00, 0x2b, 0x36),
            grid: Color::from_argb(255, 0x07, 0x36, 0x42), // base02
            tick_band: Color::from_argb(255, 0x03, 0x30, 0x3c),
            axis_line: Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            candle_up: Color::from_argb(255, 0x2a, 0xa1, 0x98),
            candle_down: Color::from_argb(255, 0xdc, 0x32, 0x2f),
            volume: Color::from_argb(255, 0x26, 0x8b, 0xd2),
        }
    }

    /// Plot background, grid lines and range tick bands.
    pub fn apply_to_plot(&self, plot: &mut XyPlot) {
        plot.background = Some(Paint::Solid(self.plot_background));
        plot.gridline_paint = Paint::Solid(self.grid);
        plot.context.range_tick_band_paint = Some(Paint::Solid(self.tick_band));
    }

    pub fn apply_to_candles(&self, renderer: &mut CandlestickRenderer) {
        renderer.set_up_paint(Some(Paint::Solid(self.candle_up)));
        renderer.set_down_paint(Some(Paint::Solid(self.candle_down)));
        renderer.set_volume_paint(Paint::Solid(self.volume));
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// The standard series sequence: bright primaries, then darker variants.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::from_rgb(0xFF, 0x55, 0x55),
        Color::from_rgb(0x55, 0x55, 0xFF),
        Color::from_rgb(0x55, 0xFF, 0x55),
        Color::from_rgb(0xFF, 0xFF, 0x55),
        Color::from_rgb(0xFF, 0x55, 0xFF),
        Color::from_rgb(0x55, 0xFF, 0xFF),
        Color::from_rgb(255, 175, 175),
        Color::GRAY,
        Color::from_rgb(0xC0, 0x00, 0x00),
        Color::from_rgb(0x00, 0x00, 0xC0),
        Color::from_rgb(0x00, 0xC0, 0x00),
        Color::from_rgb(0xC0, 0xC0, 0x00),
        Color::from_rgb(0xC0, 0x00, 0xC0),
        Color::from_rgb(0x00, 0xC0, 0xC0),
    ]
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::XySeriesCollection;
    use crate::renderer::LineAndShapeRenderer;
    use crate::series::XySeries;

    #[test]
    fn find_is_case_insensitive_with_dark_fallback() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("Solarized-Dark").name, "solarized-dark");
        assert_eq!(find("neon").name, "dark");
    }

    #[test]
    fn plot_picks_up_theme_chrome() {
        let ds = XySeriesCollection::with_series(XySeries::with_data("s", vec![(0.0, 0.0)]));
        let mut plot = XyPlot::new(Box::new(ds), Box::new(LineAndShapeRenderer::default()));
        let theme = Theme::light();
        theme.apply_to_plot(&mut plot);
        assert_eq!(plot.background, Some(Paint::Solid(theme.plot_background)));
        assert_eq!(plot.gridline_paint, Paint::Solid(theme.grid));
        assert_eq!(plot.context.range_tick_band_paint, Some(Paint::Solid(theme.tick_band)));
        assert_eq!(plot.context.domain_tick_band_paint, None);
    }
}
