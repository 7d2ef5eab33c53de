// File: crates/chart-core/src/scale.rs
// Summary: Value <-> device mapping math shared by the axis implementations.

use crate::geometry::Rect;
use crate::range::Range;
use crate::types::RectangleEdge;

/// Device extent of `area` along `edge`, as (start, end). Vertical extents run bottom-up.
#[inline]
pub fn device_extent(area: &Rect, edge: RectangleEdge) -> (f64, f64) {
    if edge.is_top_or_bottom() {
        (area.min_x(), area.max_x())
    } else {
        (area.max_y(), area.min_y())
    }
}

/// Linear mapping of `value` within `range` onto `area` along `edge`.
#[inline]
pub fn linear_to_device(value: f64, range: Range, area: &Rect, edge: RectangleEdge, inverted: bool) -> f64 {
    let (min, max) = device_extent(area, edge);
    let frac = (value - range.lower()) / range.length();
    if inverted {
        max - frac * (max - min)
    } else {
        min + frac * (max - min)
    }
}

/// Inverse of [`linear_to_device`].
#[inline]
pub fn linear_from_device(device: f64, range: Range, area: &Rect, edge: RectangleEdge, inverted: bool) -> f64 {
    let (min, max) = device_extent(area, edge);
    let frac = (device - min) / (max - min);
    if inverted {
        range.upper() - frac * range.length()
    } else {
        range.lower() + frac * range.length()
    }
}

/// Log10 that stays finite and sign-symmetric: magnitudes below 10 are
/// compressed onto [1, 10) before taking the log.
pub fn adjusted_log10(value: f64) -> f64 {
    let negative = value < 0.0;
    let mut v = value.abs();
    if v < 10.0 {
        v += (10.0 - v) / 10.0;
    }
    let res = v.log10();
    if negative { -res } else { res }
}

/// Inverse of [`adjusted_log10`].
pub fn adjusted_pow10(value: f64) -> f64 {
    let negative = value < 0.0;
    let v = value.abs();
    let res = if v < 1.0 {
        (10f64.powf(v + 1.0) - 10.0) / 9.0
    } else {
        10f64.powf(v)
    };
    if negative { -res } else { res }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_left_edge_runs_bottom_up() {
        let area = Rect::new(0.0, 0.0, 100.0, 200.0);
        let r = Range::new(0.0, 10.0);
        assert_eq!(linear_to_device(0.0, r, &area, RectangleEdge::Left, false), 200.0);
        assert_eq!(linear_to_device(10.0, r, &area, RectangleEdge::Left, false), 0.0);
        assert_eq!(linear_to_device(5.0, r, &area, RectangleEdge::Bottom, true), 50.0);
        assert_eq!(linear_from_device(50.0, r, &area, RectangleEdge::Bottom, false), 5.0);
    }

    #[test]
    fn adjusted_log_is_zero_at_zero() {
        assert_eq!(adjusted_log10(0.0), 0.0);
        assert!((adjusted_pow10(adjusted_log10(-3.5)) + 3.5).abs() < 1e-9);
    }
}
