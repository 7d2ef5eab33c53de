// File: crates/chart-core/src/axis.rs
// Summary: Coordinate mappers: linear, logarithmic and cyclic value axes.

use crate::error::{ChartError, Result};
use crate::geometry::Rect;
use crate::range::Range;
use crate::scale::{adjusted_log10, adjusted_pow10, device_extent, linear_from_device, linear_to_device};
use crate::types::RectangleEdge;

/// Maps data values to device coordinates along one edge of a data area.
pub trait ValueAxis {
    fn label(&self) -> &str;
    fn range(&self) -> Range;
    fn is_inverted(&self) -> bool;
    /// Device coordinate for `value`; may be NaN for values the axis cannot show.
    fn value_to_device(&self, value: f64, area: &Rect, edge: RectangleEdge) -> f64;
    fn device_to_value(&self, device: f64, area: &Rect, edge: RectangleEdge) -> f64;

    fn lower_bound(&self) -> f64 {
        self.range().lower()
    }
    fn upper_bound(&self) -> f64 {
        self.range().upper()
    }
    fn as_cyclic(&self) -> Option<&CyclicNumberAxis> {
        None
    }
}

#[derive(Clone, Debug)]
pub struct NumberAxis {
    pub label: String,
    range: Range,
    pub inverted: bool,
}

impl NumberAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), range: Range::new(min.min(max), max.max(min)), inverted: false }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    pub fn set_range(&mut self, range: Range) {
        self.range = range;
    }

    /// Fit the range to `data`, padding each side by `margin` of its length.
    pub fn auto_range(&mut self, data: Range, margin: f64) {
        let pad = if data.length() > 0.0 { data.length() * margin } else { 1.0 };
        self.range = Range::new(data.lower() - pad, data.upper() + pad);
    }
}

impl ValueAxis for NumberAxis {
    fn label(&self) -> &str {
        &self.label
    }
    fn range(&self) -> Range {
        self.range
    }
    fn is_inverted(&self) -> bool {
        self.inverted
    }
    fn value_to_device(&self, value: f64, area: &Rect, edge: RectangleEdge) -> f64 {
        linear_to_device(value, self.range, area, edge, self.inverted)
    }
    fn device_to_value(&self, device: f64, area: &Rect, edge: RectangleEdge) -> f64 {
        linear_from_device(device, self.range, area, edge, self.inverted)
    }
}

/// Base-10 logarithmic axis.
///
/// With a positive lower bound below 10 and negatives disallowed, plain
/// `log10` is used. Otherwise values go through the adjusted log, which
/// stays defined at zero and for negative values.
#[derive(Clone, Debug)]
pub struct LogarithmicAxis {
    pub label: String,
    range: Range,
    pub inverted: bool,
    allow_negatives: bool,
    small_log: bool,
}

impl LogarithmicAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut axis = Self {
            label: label.into(),
            range: Range::new(min.min(max), max.max(min)),
            inverted: false,
            allow_negatives: false,
            small_log: false,
        };
        axis.update_small_log();
        axis
    }

    pub fn allow_negatives(&self) -> bool {
        self.allow_negatives
    }

    pub fn set_allow_negatives(&mut self, allow: bool) {
        self.allow_negatives = allow;
        self.update_small_log();
    }

    pub fn set_range(&mut self, range: Range) -> Result<()> {
        if !self.allow_negatives && range.lower() <= 0.0 {
            return Err(ChartError::invalid("range", "log axis lower bound must be positive"));
        }
        self.range = range;
        self.update_small_log();
        Ok(())
    }

    fn update_small_log(&mut self) {
        let lower = self.range.lower();
        self.small_log = !self.allow_negatives && lower < 10.0 && lower > 0.0;
    }

    pub fn switched_log10(&self, value: f64) -> f64 {
        if self.small_log { value.log10() } else { adjusted_log10(value) }
    }

    pub fn switched_pow10(&self, value: f64) -> f64 {
        if self.small_log { 10f64.powf(value) } else { adjusted_pow10(value) }
    }
}

impl ValueAxis for LogarithmicAxis {
    fn label(&self) -> &str {
        &self.label
    }
    fn range(&self) -> Range {
        self.range
    }
    fn is_inverted(&self) -> bool {
        self.inverted
    }
    fn value_to_device(&self, value: f64, area: &Rect, edge: RectangleEdge) -> f64 {
        let log_range = Range::new(
            self.switched_log10(self.range.lower()),
            self.switched_log10(self.range.upper()),
        );
        linear_to_device(self.switched_log10(value), log_range, area, edge, self.inverted)
    }
    fn device_to_value(&self, device: f64, area: &Rect, edge: RectangleEdge) -> f64 {
        let log_range = Range::new(
            self.switched_log10(self.range.lower()),
            self.switched_log10(self.range.upper()),
        );
        self.switched_pow10(linear_from_device(device, log_range, area, edge, self.inverted))
    }
}

/// Axis that folds values into a repeating period.
///
/// The visible window is `[upper - period, upper]`. The cycle bound is the
/// last multiple of `period` (shifted by `offset`) inside that window; values
/// before it are drawn at the far end of the axis and values after it wrap
/// to the start. The bound itself maps to either end depending on
/// `bound_mapped_to_last_cycle`.
#[derive(Clone, Debug)]
pub struct CyclicNumberAxis {
    pub label: String,
    period: f64,
    offset: f64,
    upper: f64,
    pub inverted: bool,
    bound_mapped_to_last_cycle: bool,
}

impl CyclicNumberAxis {
    pub fn new(label: impl Into<String>, period: f64) -> Result<Self> {
        Self::with_offset(label, period, 0.0)
    }

    pub fn with_offset(label: impl Into<String>, period: f64, offset: f64) -> Result<Self> {
        if !period.is_finite() || period <= 0.0 {
            return Err(ChartError::invalid("period", format!("must be positive, got {period}")));
        }
        Ok(Self {
            label: label.into(),
            period,
            offset,
            upper: offset + period,
            inverted: false,
            bound_mapped_to_last_cycle: true,
        })
    }

    pub fn period(&self) -> f64 {
        self.period
    }
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Slide the visible window so that it ends at `upper`.
    pub fn set_upper(&mut self, upper: f64) {
        self.upper = upper;
    }

    pub fn is_bound_mapped_to_last_cycle(&self) -> bool {
        self.bound_mapped_to_last_cycle
    }

    pub fn set_bound_mapped_to_last_cycle(&mut self, last_cycle: bool) {
        self.bound_mapped_to_last_cycle = last_cycle;
    }

    /// Copy of this axis with the bound mapping replaced.
    pub fn with_bound_mapping(&self, last_cycle: bool) -> Self {
        Self { bound_mapped_to_last_cycle: last_cycle, label: self.label.clone(), ..*self }
    }

    pub fn cycle_bound(&self) -> f64 {
        ((self.upper - self.offset) / self.period).floor() * self.period + self.offset
    }
}

impl ValueAxis for CyclicNumberAxis {
    fn label(&self) -> &str {
        &self.label
    }
    fn range(&self) -> Range {
        Range::new(self.upper - self.period, self.upper)
    }
    fn is_inverted(&self) -> bool {
        self.inverted
    }
    fn as_cyclic(&self) -> Option<&CyclicNumberAxis> {
        Some(self)
    }

    fn value_to_device(&self, value: f64, area: &Rect, edge: RectangleEdge) -> f64 {
        if !self.range().contains(value) {
            return f64::NAN;
        }
        let vp = self.cycle_bound();
        let (jmin, jmax) = device_extent(area, edge);
        let span = jmax - jmin;
        if self.inverted {
            if value == vp {
                if self.bound_mapped_to_last_cycle { jmin } else { jmax }
            } else if value > vp {
                jmax - (value - vp) * span / self.period
            } else {
                jmin + (vp - value) * span / self.period
            }
        } else if value == vp {
            if self.bound_mapped_to_last_cycle { jmax } else { jmin }
        } else if value >= vp {
            jmin + (value - vp) * span / self.period
        } else {
            jmax - (vp - value) * span / self.period
        }
    }

    fn device_to_value(&self, device: f64, area: &Rect, edge: RectangleEdge) -> f64 {
        let vmax = self.upper;
        let vp = self.cycle_bound();
        let (jmin, jmax) = device_extent(area, edge);
        let span = jmax - jmin;
        if self.inverted {
            let jbreak = jmax - (vmax - vp) * span / self.period;
            if device >= jbreak {
                vp + (jmax - device) * self.period / span
            } else {
                vp - (device - jmin) * self.period / span
            }
        } else {
            let jbreak = (vmax - vp) * span / self.period + jmin;
            if device <= jbreak {
                vp + (device - jmin) * self.period / span
            } else {
                vp - (jmax - device) * self.period / span
            }
        }
    }
}
