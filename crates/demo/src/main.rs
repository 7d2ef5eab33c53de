// File: crates/demo/src/main.rs
// Summary: Demo loads an OHLC CSV and renders it through several XY renderers (candles, sampling, bezier, deviation, area) to PNGs.

use anyhow::{Context, Result};
use chart_core::{
    AreaRenderer, BezierRenderer, Candle, CandleWidthMethod, CandlestickRenderer, DeviationStepRenderer, FillType,
    NumberAxis, OhlcSeries, OhlcSeriesCollection, Range, SamplingRenderer, XyDataset, XyItemRenderer, XyPlot,
    XySeries, XySeriesCollection, YIntervalSeries, YIntervalSeriesCollection,
};
use chart_render_skia::{render_plot_to_png, RenderOptions};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept path from CLI or fall back to sample filename (supports .csv/.cvs swap)
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.cvs".to_string());

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), used_alt, "using input file");

    let candles = load_ohlc_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if candles.is_empty() {
        anyhow::bail!("no candles loaded; check headers/delimiter.");
    }
    let n = candles.len();
    let (t0, t1) = (candles[0].t, candles[n - 1].t);
    let period = if n > 1 { (t1 - t0) / (n - 1) as f64 } else { 1.0 };
    let (min_p, max_p) = minmax_price(&candles);
    info!(rows = n, min_p, max_p, period, "loaded candles");

    let theme = std::env::var("CHART_THEME").map(|name| chart_core::theme::find(&name)).unwrap_or_default();
    info!(theme = theme.name, "theme");
    let opts = RenderOptions { theme, ..RenderOptions::default() };
    let time_axis = || NumberAxis::new("Time (epoch ms)", t0 - period, t1 + period);
    let price_axis = || {
        let mut axis = NumberAxis::default_y();
        axis.label = "Price".to_string();
        axis.auto_range(Range::new(min_p, max_p), 0.02);
        axis
    };

    // 1) Candlesticks with volume underlay
    let mut ohlc = OhlcSeriesCollection::new(period);
    ohlc.add_series(OhlcSeries::from_candles("ohlc", candles.clone()));
    let mut candle_renderer = CandlestickRenderer::new();
    candle_renderer.set_auto_width_method(CandleWidthMethod::Smallest);
    theme.apply_to_candles(&mut candle_renderer);
    render(Box::new(ohlc), Box::new(candle_renderer), time_axis(), price_axis(), &opts, &path, "candles")?;

    // 2) Closes through the sampling renderer
    let closes: Vec<(f64, f64)> = candles.iter().map(|c| (c.t, c.c)).collect();
    let close_ds = XySeriesCollection::with_series(XySeries::with_data("close", closes.clone()));
    render(Box::new(close_ds), Box::new(SamplingRenderer::new()), time_axis(), price_axis(), &opts, &path, "sampling")?;

    // 3) Bezier over a decimated close series
    let step = (n / 60).max(1);
    let sparse: Vec<(f64, f64)> = closes.iter().step_by(step).copied().collect();
    let sparse_ds = XySeriesCollection::with_series(XySeries::with_data("close (sparse)", sparse));
    let bezier = BezierRenderer::new(8, 25.0, FillType::ToLowerBound);
    render(Box::new(sparse_ds), Box::new(bezier), time_axis(), price_axis(), &opts, &path, "bezier")?;

    // 4) Rolling mean with a one-sigma band
    let band_ds = rolling_band(&closes, 20);
    render(Box::new(band_ds), Box::new(DeviationStepRenderer::new(true, false)), time_axis(), price_axis(), &opts, &path, "deviation")?;

    // 5) Volume as an area
    let volume: Vec<(f64, f64)> = candles.iter().map(|c| (c.t, c.v)).collect();
    let max_v = volume.iter().map(|&(_, v)| v).fold(0.0_f64, f64::max);
    let volume_ds = XySeriesCollection::with_series(XySeries::with_data("volume", volume));
    let volume_axis = NumberAxis::new("Volume", 0.0, if max_v > 0.0 { max_v * 1.05 } else { 1.0 });
    render(Box::new(volume_ds), Box::new(AreaRenderer::default()), time_axis(), volume_axis, &opts, &path, "volume")?;

    Ok(())
}

fn render(
    dataset: Box<dyn XyDataset>,
    renderer: Box<dyn XyItemRenderer>,
    domain: NumberAxis,
    range: NumberAxis,
    opts: &RenderOptions,
    input: &Path,
    suffix: &str,
) -> Result<()> {
    let mut plot = XyPlot::new(dataset, renderer).with_axes(Box::new(domain), Box::new(range));
    opts.theme.apply_to_plot(&mut plot);
    let out = out_name_with(input, suffix);
    render_plot_to_png(&plot, opts, &out).with_context(|| format!("rendering {suffix}"))?;
    info!(out = %out.display(), "wrote chart");
    Ok(())
}

/// Mean and standard deviation of the trailing `window` closes.
fn rolling_band(closes: &[(f64, f64)], window: usize) -> YIntervalSeriesCollection {
    let mut series = YIntervalSeries::new("mean ± 1σ");
    for (i, &(t, _)) in closes.iter().enumerate() {
        let lo = (i + 1).saturating_sub(window);
        let slice = &closes[lo..=i];
        let mean = slice.iter().map(|&(_, c)| c).sum::<f64>() / slice.len() as f64;
        let var = slice.iter().map(|&(_, c)| (c - mean).powi(2)).sum::<f64>() / slice.len() as f64;
        let sd = var.sqrt();
        series.add(t, mean, mean - sd, mean + sd);
    }
    let mut ds = YIntervalSeriesCollection::new();
    ds.add_series(series);
    ds
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("chart_{}.png", suffix));
    } else {
        out.push(format!("chart_{}_{}.png", short, suffix));
    }
    out
}

/// Load Binance-like OHLC(V) CSV into a Candle vec.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    // Common Binance headers
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    let mut rejected = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };

        // x-value: epoch milliseconds, or the row index when there is no usable time column
        let t = i_time.and_then(|ix| rec.get(ix)).and_then(parse_time_to_millis).unwrap_or(row as f64);

        if let (Some(o), Some(h), Some(l), Some(c)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            match Candle::try_new(t, o, h, l, c) {
                Ok(candle) => out.push(candle.with_volume(parse(i_volume).unwrap_or(0.0))),
                Err(_) => rejected += 1,
            }
        }
    }
    if rejected > 0 {
        warn!(rejected, "skipped rows violating OHLC invariants");
    }
    Ok(out)
}

fn parse_time_to_millis(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms stays, epoch sec is scaled up
        return Some(if n > 10_i64.pow(12) { n as f64 } else { n as f64 * 1000.0 });
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis() as f64);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
}

fn swap_ext(p: &Path) -> Option<std::path::PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

fn minmax_price(c: &[Candle]) -> (f64, f64) {
    let mut min_p = f64::INFINITY;
    let mut max_p = f64::NEG_INFINITY;
    for k in c {
        min_p = min_p.min(k.l);
        max_p = max_p.max(k.h);
    }
    (min_p, max_p)
}
