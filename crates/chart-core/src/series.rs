// File: crates/chart-core/src/series.rs
// Summary: Series data: plain XY pairs, OHLC(V) candles and Y-interval items.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub t: f64, // time/index (displayed on X)
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
}

impl Candle {
    /// Try to construct a candle enforcing OHLC invariants:
    /// l <= min(o,c) and h >= max(o,c), and l <= h.
    pub fn try_new(t: f64, o: f64, h: f64, l: f64, c: f64) -> Result<Self, &'static str> {
        let lo = o.min(c);
        let hi = o.max(c);
        if l > lo { return Err("low above min(open,close)"); }
        if h < hi { return Err("high below max(open,close)"); }
        if l > h { return Err("low above high"); }
        Ok(Self { t, o, h, l, c, v: 0.0 })
    }

    pub fn with_volume(mut self, v: f64) -> Self {
        self.v = v;
        self
    }
}

/// Named sequence of (x, y) pairs. NaN y marks a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct XySeries {
    pub key: String,
    pub data: Vec<(f64, f64)>,
}

impl XySeries {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), data: Vec::new() }
    }

    pub fn with_data(key: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { key: key.into(), data }
    }

    pub fn add(&mut self, x: f64, y: f64) {
        self.data.push((x, y));
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OhlcSeries {
    pub key: String,
    pub candles: Vec<Candle>,
}

impl OhlcSeries {
    pub fn from_candles(key: impl Into<String>, candles: Vec<Candle>) -> Self {
        Self { key: key.into(), candles }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YInterval {
    pub x: f64,
    pub y: f64,
    pub low: f64,
    pub high: f64,
}

/// Series of y values with a [low, high] band around each.
#[derive(Clone, Debug, PartialEq)]
pub struct YIntervalSeries {
    pub key: String,
    pub items: Vec<YInterval>,
}

impl YIntervalSeries {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), items: Vec::new() }
    }

    pub fn add(&mut self, x: f64, y: f64, low: f64, high: f64) {
        self.items.push(YInterval { x, y, low, high });
    }
}
