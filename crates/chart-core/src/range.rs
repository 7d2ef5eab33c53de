// File: crates/chart-core/src/range.rs
// Summary: Closed numeric interval used for axis ranges and data bounds.

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// # Panics
    /// When `lower > upper`. Use [`Range::try_new`] for unchecked input.
    pub fn new(lower: f64, upper: f64) -> Self {
        assert!(lower <= upper || lower.is_nan() || upper.is_nan(), "range lower {lower} above upper {upper}");
        Self { lower, upper }
    }

    pub fn try_new(lower: f64, upper: f64) -> Result<Self> {
        if lower > upper {
            return Err(ChartError::invalid("range", format!("lower {lower} above upper {upper}")));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 { self.lower }
    pub fn upper(&self) -> f64 { self.upper }
    pub fn length(&self) -> f64 { self.upper - self.lower }
    pub fn central_value(&self) -> f64 { self.lower / 2.0 + self.upper / 2.0 }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Overlap test against `[b0, b1]`.
    pub fn intersects(&self, b0: f64, b1: f64) -> bool {
        if b0 <= self.lower {
            b1 > self.lower
        } else {
            b0 < self.upper && b1 >= b0
        }
    }

    /// Clamp `value` into the range.
    pub fn constrain(&self, value: f64) -> f64 {
        crate::geometry::clamp(value, self.lower, self.upper)
    }

    pub fn include(&self, value: f64) -> Range {
        if value.is_nan() {
            return *self;
        }
        Range { lower: self.lower.min(value), upper: self.upper.max(value) }
    }

    /// Union of two optional ranges.
    pub fn combine(a: Option<Range>, b: Option<Range>) -> Option<Range> {
        match (a, b) {
            (None, r) | (r, None) => r,
            (Some(a), Some(b)) => Some(Range { lower: a.lower.min(b.lower), upper: a.upper.max(b.upper) }),
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Range[{},{}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_matches_closed_open_semantics() {
        let r = Range::new(0.0, 10.0);
        assert!(r.intersects(-5.0, 1.0));
        assert!(!r.intersects(-5.0, 0.0));
        assert!(r.intersects(9.0, 20.0));
        assert!(!r.intersects(10.0, 20.0));
    }

    #[test]
    fn try_new_rejects_inverted() {
        assert!(Range::try_new(2.0, 1.0).is_err());
        assert_eq!(Range::combine(None, Some(Range::new(1.0, 2.0))), Some(Range::new(1.0, 2.0)));
    }
}
