// File: crates/chart-core/src/dataset.rs
// Summary: Dataset access traits (XY, OHLC, interval), standard collections and bounds scans.

use crate::error::{ChartError, Result};
use crate::range::Range;
use crate::series::{OhlcSeries, XySeries, YIntervalSeries};

/// Read-only view of a multi-series XY dataset.
pub trait XyDataset {
    fn series_count(&self) -> usize;
    fn series_key(&self, series: usize) -> &str;
    fn item_count(&self, series: usize) -> usize;
    fn x_value(&self, series: usize, item: usize) -> f64;
    fn y_value(&self, series: usize, item: usize) -> f64;

    fn as_ohlc(&self) -> Option<&dyn OhlcDataset> {
        None
    }
    fn as_interval(&self) -> Option<&dyn IntervalXyDataset> {
        None
    }

    fn check_item(&self, series: usize, item: usize) -> Result<()> {
        let count = self.series_count();
        if series >= count {
            return Err(ChartError::SeriesOutOfBounds { series, count });
        }
        let count = self.item_count(series);
        if item >= count {
            return Err(ChartError::ItemOutOfBounds { series, item, count });
        }
        Ok(())
    }
}

/// Open/high/low/close/volume per item.
pub trait OhlcDataset: XyDataset {
    fn high_value(&self, series: usize, item: usize) -> f64;
    fn low_value(&self, series: usize, item: usize) -> f64;
    fn open_value(&self, series: usize, item: usize) -> f64;
    fn close_value(&self, series: usize, item: usize) -> f64;
    fn volume_value(&self, series: usize, item: usize) -> f64;
}

/// Start/end bounds around each x and y value.
pub trait IntervalXyDataset: XyDataset {
    fn start_x_value(&self, series: usize, item: usize) -> f64;
    fn end_x_value(&self, series: usize, item: usize) -> f64;
    fn start_y_value(&self, series: usize, item: usize) -> f64;
    fn end_y_value(&self, series: usize, item: usize) -> f64;
}

#[derive(Clone, Debug, Default)]
pub struct XySeriesCollection {
    pub series: Vec<XySeries>,
}

impl XySeriesCollection {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_series(series: XySeries) -> Self {
        Self { series: vec![series] }
    }
    pub fn add_series(&mut self, series: XySeries) {
        self.series.push(series);
    }
}

impl XyDataset for XySeriesCollection {
    fn series_count(&self) -> usize {
        self.series.len()
    }
    fn series_key(&self, series: usize) -> &str {
        &self.series[series].key
    }
    fn item_count(&self, series: usize) -> usize {
        self.series[series].data.len()
    }
    fn x_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].data[item].0
    }
    fn y_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].data[item].1
    }
}

/// Candle series. Each candle covers `period` on the x axis, centred on its time.
#[derive(Clone, Debug, Default)]
pub struct OhlcSeriesCollection {
    pub series: Vec<OhlcSeries>,
    pub period: f64,
}

impl OhlcSeriesCollection {
    pub fn new(period: f64) -> Self {
        Self { series: Vec::new(), period }
    }
    pub fn add_series(&mut self, series: OhlcSeries) {
        self.series.push(series);
    }
}

impl XyDataset for OhlcSeriesCollection {
    fn series_count(&self) -> usize {
        self.series.len()
    }
    fn series_key(&self, series: usize) -> &str {
        &self.series[series].key
    }
    fn item_count(&self, series: usize) -> usize {
        self.series[series].candles.len()
    }
    fn x_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].candles[item].t
    }
    fn y_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].candles[item].c
    }
    fn as_ohlc(&self) -> Option<&dyn OhlcDataset> {
        Some(self)
    }
    fn as_interval(&self) -> Option<&dyn IntervalXyDataset> {
        Some(self)
    }
}

impl OhlcDataset for OhlcSeriesCollection {
    fn high_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].candles[item].h
    }
    fn low_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].candles[item].l
    }
    fn open_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].candles[item].o
    }
    fn close_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].candles[item].c
    }
    fn volume_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].candles[item].v
    }
}

impl IntervalXyDataset for OhlcSeriesCollection {
    fn start_x_value(&self, series: usize, item: usize) -> f64 {
        self.x_value(series, item) - self.period / 2.0
    }
    fn end_x_value(&self, series: usize, item: usize) -> f64 {
        self.x_value(series, item) + self.period / 2.0
    }
    fn start_y_value(&self, series: usize, item: usize) -> f64 {
        self.low_value(series, item)
    }
    fn end_y_value(&self, series: usize, item: usize) -> f64 {
        self.high_value(series, item)
    }
}

#[derive(Clone, Debug, Default)]
pub struct YIntervalSeriesCollection {
    pub series: Vec<YIntervalSeries>,
}

impl YIntervalSeriesCollection {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_series(&mut self, series: YIntervalSeries) {
        self.series.push(series);
    }
}

impl XyDataset for YIntervalSeriesCollection {
    fn series_count(&self) -> usize {
        self.series.len()
    }
    fn series_key(&self, series: usize) -> &str {
        &self.series[series].key
    }
    fn item_count(&self, series: usize) -> usize {
        self.series[series].items.len()
    }
    fn x_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].items[item].x
    }
    fn y_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].items[item].y
    }
    fn as_interval(&self) -> Option<&dyn IntervalXyDataset> {
        Some(self)
    }
}

impl IntervalXyDataset for YIntervalSeriesCollection {
    fn start_x_value(&self, series: usize, item: usize) -> f64 {
        self.x_value(series, item)
    }
    fn end_x_value(&self, series: usize, item: usize) -> f64 {
        self.x_value(series, item)
    }
    fn start_y_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].items[item].low
    }
    fn end_y_value(&self, series: usize, item: usize) -> f64 {
        self.series[series].items[item].high
    }
}

fn fold_bounds(acc: Option<Range>, lo: f64, hi: f64) -> Option<Range> {
    let (lo, hi) = match (lo.is_nan(), hi.is_nan()) {
        (true, true) => return acc,
        (true, false) => (hi, hi),
        (false, true) => (lo, lo),
        (false, false) => (lo.min(hi), lo.max(hi)),
    };
    Range::combine(acc, Some(Range::new(lo, hi)))
}

/// X extent over the given series. Interval datasets contribute their start/end x when asked.
pub fn find_domain_bounds(dataset: &dyn XyDataset, series: &[usize], include_interval: bool) -> Option<Range> {
    let interval = if include_interval { dataset.as_interval() } else { None };
    let mut out = None;
    for &s in series {
        for i in 0..dataset.item_count(s) {
            out = match interval {
                Some(iv) => fold_bounds(out, iv.start_x_value(s, i), iv.end_x_value(s, i)),
                None => {
                    let x = dataset.x_value(s, i);
                    fold_bounds(out, x, x)
                }
            };
        }
    }
    out
}

/// Y extent over the given series, restricted to items whose x lies in `x_range` when set.
pub fn find_range_bounds(
    dataset: &dyn XyDataset,
    series: &[usize],
    x_range: Option<Range>,
    include_interval: bool,
) -> Option<Range> {
    let interval = if include_interval { dataset.as_interval() } else { None };
    let mut out = None;
    for &s in series {
        for i in 0..dataset.item_count(s) {
            if let Some(xr) = x_range {
                if !xr.contains(dataset.x_value(s, i)) {
                    continue;
                }
            }
            out = match interval {
                Some(iv) => fold_bounds(out, iv.start_y_value(s, i), iv.end_y_value(s, i)),
                None => {
                    let y = dataset.y_value(s, i);
                    fold_bounds(out, y, y)
                }
            };
        }
    }
    out
}
