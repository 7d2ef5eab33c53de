// File: crates/chart-core/src/labels.rs
// Summary: Tooltip, URL, item-label and series-label generators with their standard formats.

use chrono::DateTime;

use crate::dataset::XyDataset;
use crate::geometry::Point;
use crate::types::TextAnchor;

pub trait XyToolTipGenerator {
    fn generate_tool_tip(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Option<String>;
}

pub trait XyUrlGenerator {
    fn generate_url(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Option<String>;
}

pub trait XyItemLabelGenerator {
    fn generate_label(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Option<String>;
}

pub trait XySeriesLabelGenerator {
    fn generate_label(&self, dataset: &dyn XyDataset, series: usize) -> String;
}

/// Format a number with up to three decimals and no trailing zeros.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Substitute `{0}`, `{1}`, ... in `format` with `args`.
pub fn format_message(format: &str, args: &[&str]) -> String {
    let mut out = format.to_string();
    for (i, a) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), a);
    }
    out
}

/// Item labels and tooltips from a format with `{0}` series key, `{1}` x and `{2}` y.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardXyItemLabelGenerator {
    pub format: String,
}

impl StandardXyItemLabelGenerator {
    pub const DEFAULT_ITEM_LABEL_FORMAT: &'static str = "{2}";
    pub const DEFAULT_TOOL_TIP_FORMAT: &'static str = "{0}: ({1}, {2})";

    pub fn new(format: impl Into<String>) -> Self {
        Self { format: format.into() }
    }

    pub fn tool_tips() -> Self {
        Self::new(Self::DEFAULT_TOOL_TIP_FORMAT)
    }

    fn render(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> String {
        let x = format_number(dataset.x_value(series, item));
        let y = dataset.y_value(series, item);
        let y = if y.is_nan() { "null".to_string() } else { format_number(y) };
        format_message(&self.format, &[dataset.series_key(series), &x, &y])
    }
}

impl Default for StandardXyItemLabelGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITEM_LABEL_FORMAT)
    }
}

impl XyItemLabelGenerator for StandardXyItemLabelGenerator {
    fn generate_label(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Option<String> {
        Some(self.render(dataset, series, item))
    }
}

impl XyToolTipGenerator for StandardXyItemLabelGenerator {
    fn generate_tool_tip(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Option<String> {
        Some(self.render(dataset, series, item))
    }
}

/// Series labels from a format with `{0}` series key.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardXySeriesLabelGenerator {
    pub format: String,
}

impl Default for StandardXySeriesLabelGenerator {
    fn default() -> Self {
        Self { format: "{0}".to_string() }
    }
}

impl XySeriesLabelGenerator for StandardXySeriesLabelGenerator {
    fn generate_label(&self, dataset: &dyn XyDataset, series: usize) -> String {
        format_message(&self.format, &[dataset.series_key(series)])
    }
}

/// `prefix?series=<key>&item=<index>` URLs.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardXyUrlGenerator {
    pub prefix: String,
    pub series_parameter: String,
    pub item_parameter: String,
}

impl Default for StandardXyUrlGenerator {
    fn default() -> Self {
        Self {
            prefix: "index.html".to_string(),
            series_parameter: "series".to_string(),
            item_parameter: "item".to_string(),
        }
    }
}

impl XyUrlGenerator for StandardXyUrlGenerator {
    fn generate_url(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Option<String> {
        let sep = if self.prefix.contains('?') { '&' } else { '?' };
        let key: String = dataset
            .series_key(series)
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || "-_.~".contains(c) { c.to_string() } else { format!("%{:02X}", c as u32 & 0xFF) })
            .collect();
        Some(format!(
            "{}{sep}{}={key}&{}={item}",
            self.prefix, self.series_parameter, self.item_parameter
        ))
    }
}

/// OHLC tooltips: `<key>--> Date=<date> High=.. Low=.. Open=.. Close=..`.
/// X values are read as epoch milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct HighLowItemLabelGenerator {
    pub date_format: String,
}

impl Default for HighLowItemLabelGenerator {
    fn default() -> Self {
        Self { date_format: "%Y-%m-%d".to_string() }
    }
}

impl XyToolTipGenerator for HighLowItemLabelGenerator {
    fn generate_tool_tip(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Option<String> {
        let ohlc = dataset.as_ohlc()?;
        let mut sb = dataset.series_key(series).to_string();
        let x = dataset.x_value(series, item);
        if x.is_nan() {
            return Some(sb);
        }
        let date = DateTime::from_timestamp_millis(x as i64)
            .map(|d| d.format(&self.date_format).to_string())
            .unwrap_or_else(|| format_number(x));
        sb.push_str("--> Date=");
        sb.push_str(&date);
        let fields = [
            ("High", ohlc.high_value(series, item)),
            ("Low", ohlc.low_value(series, item)),
            ("Open", ohlc.open_value(series, item)),
            ("Close", ohlc.close_value(series, item)),
        ];
        for (name, v) in fields {
            if !v.is_nan() {
                sb.push_str(&format!(" {name}={}", format_number(v)));
            }
        }
        Some(sb)
    }
}

/// Where an item label sits relative to its data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemLabelAnchor {
    Center,
    Outside12,
    Outside3,
    Outside6,
    Outside9,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemLabelPosition {
    pub anchor: ItemLabelAnchor,
    pub text_anchor: TextAnchor,
}

impl ItemLabelPosition {
    /// Above the point, for non-negative values.
    pub fn positive() -> Self {
        Self { anchor: ItemLabelAnchor::Outside12, text_anchor: TextAnchor::BottomCenter }
    }
    /// Below the point, for negative values.
    pub fn negative() -> Self {
        Self { anchor: ItemLabelAnchor::Outside6, text_anchor: TextAnchor::TopCenter }
    }
}

impl ItemLabelAnchor {
    /// Device point for a label anchored `offset` away from (`x`, `y`).
    pub fn anchor_point(&self, x: f64, y: f64, offset: f64) -> Point {
        match self {
            ItemLabelAnchor::Center => Point::new(x, y),
            ItemLabelAnchor::Outside12 => Point::new(x, y - 2.0 * offset),
            ItemLabelAnchor::Outside3 => Point::new(x + 2.0 * offset, y),
            ItemLabelAnchor::Outside6 => Point::new(x, y + 2.0 * offset),
            ItemLabelAnchor::Outside9 => Point::new(x - 2.0 * offset, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{OhlcSeriesCollection, XySeriesCollection};
    use crate::series::{Candle, OhlcSeries, XySeries};

    #[test]
    fn standard_tool_tip_format() {
        let ds = XySeriesCollection::with_series(XySeries::with_data("S1", vec![(1.0, 2.5)]));
        let g = StandardXyItemLabelGenerator::tool_tips();
        assert_eq!(g.generate_tool_tip(&ds, 0, 0).as_deref(), Some("S1: (1, 2.5)"));
    }

    #[test]
    fn high_low_tool_tip_needs_ohlc() {
        let xy = XySeriesCollection::with_series(XySeries::with_data("S1", vec![(1.0, 2.5)]));
        assert!(HighLowItemLabelGenerator::default().generate_tool_tip(&xy, 0, 0).is_none());

        let mut ds = OhlcSeriesCollection::new(0.0);
        ds.add_series(OhlcSeries::from_candles("C", vec![Candle::try_new(0.0, 1.0, 2.0, 0.5, 1.5).unwrap()]));
        let tip = HighLowItemLabelGenerator::default().generate_tool_tip(&ds, 0, 0).unwrap();
        assert_eq!(tip, "C--> Date=1970-01-01 High=2 Low=0.5 Open=1 Close=1.5");
    }

    #[test]
    fn url_escapes_key() {
        let ds = XySeriesCollection::with_series(XySeries::with_data("a b", vec![(1.0, 2.5)]));
        let url = StandardXyUrlGenerator::default().generate_url(&ds, 0, 3).unwrap();
        assert_eq!(url, "index.html?series=a%20b&item=3");
    }
}
