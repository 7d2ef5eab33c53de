// File: crates/chart-core/src/types.rs
// Summary: Shared layout types: plot orientation, edges, insets and anchors.

use crate::geometry::{Point, Rect};

/// Which way the domain runs. Vertical plots put the domain on the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlotOrientation {
    Horizontal,
    #[default]
    Vertical,
}

impl PlotOrientation {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, PlotOrientation::Horizontal)
    }
    pub fn is_vertical(&self) -> bool {
        matches!(self, PlotOrientation::Vertical)
    }
}

/// Edge of the data area an axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectangleEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl RectangleEdge {
    pub fn is_top_or_bottom(&self) -> bool {
        matches!(self, RectangleEdge::Top | RectangleEdge::Bottom)
    }
    pub fn is_left_or_right(&self) -> bool {
        matches!(self, RectangleEdge::Left | RectangleEdge::Right)
    }
}

/// Whether an inset shrinks or grows a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LengthAdjustmentType {
    NoChange,
    Expand,
    #[default]
    Contract,
}

/// Insets in device units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectangleInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl RectangleInsets {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    pub fn create_adjusted_rectangle(
        &self,
        base: &Rect,
        width_type: LengthAdjustmentType,
        height_type: LengthAdjustmentType,
    ) -> Rect {
        let (mut x, mut y, mut w, mut h) = (base.x, base.y, base.width, base.height);
        match width_type {
            LengthAdjustmentType::Contract => {
                x += self.left;
                w -= self.left + self.right;
            }
            LengthAdjustmentType::Expand => {
                x -= self.left;
                w += self.left + self.right;
            }
            LengthAdjustmentType::NoChange => {}
        }
        match height_type {
            LengthAdjustmentType::Contract => {
                y += self.top;
                h -= self.top + self.bottom;
            }
            LengthAdjustmentType::Expand => {
                y -= self.top;
                h += self.top + self.bottom;
            }
            LengthAdjustmentType::NoChange => {}
        }
        Rect::new(x, y, w, h)
    }
}

/// Nine reference points on a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RectangleAnchor {
    Center,
    Top,
    #[default]
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    Right,
}

impl RectangleAnchor {
    pub fn anchor_point(&self, r: &Rect) -> Point {
        let (x, y) = match self {
            RectangleAnchor::Center => (r.center_x(), r.center_y()),
            RectangleAnchor::Top => (r.center_x(), r.min_y()),
            RectangleAnchor::TopLeft => (r.min_x(), r.min_y()),
            RectangleAnchor::TopRight => (r.max_x(), r.min_y()),
            RectangleAnchor::Bottom => (r.center_x(), r.max_y()),
            RectangleAnchor::BottomLeft => (r.min_x(), r.max_y()),
            RectangleAnchor::BottomRight => (r.max_x(), r.max_y()),
            RectangleAnchor::Left => (r.min_x(), r.center_y()),
            RectangleAnchor::Right => (r.max_x(), r.center_y()),
        };
        Point::new(x, y)
    }
}

/// The point of a text block that sits on the anchor coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TextAnchor {
    /// Offset from the anchor to the text block's top-left corner.
    pub fn offset(&self, width: f64, height: f64) -> (f64, f64) {
        let dx = match self {
            TextAnchor::TopLeft | TextAnchor::CenterLeft | TextAnchor::BottomLeft => 0.0,
            TextAnchor::TopCenter | TextAnchor::Center | TextAnchor::BottomCenter => -width / 2.0,
            TextAnchor::TopRight | TextAnchor::CenterRight | TextAnchor::BottomRight => -width,
        };
        let dy = match self {
            TextAnchor::TopLeft | TextAnchor::TopCenter | TextAnchor::TopRight => 0.0,
            TextAnchor::CenterLeft | TextAnchor::Center | TextAnchor::CenterRight => -height / 2.0,
            TextAnchor::BottomLeft | TextAnchor::BottomCenter | TextAnchor::BottomRight => -height,
        };
        (dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_and_expand_are_inverse() {
        let insets = RectangleInsets::new(3.0, 3.0, 3.0, 3.0);
        let base = Rect::new(10.0, 10.0, 100.0, 50.0);
        let c = insets.create_adjusted_rectangle(&base, LengthAdjustmentType::Contract, LengthAdjustmentType::NoChange);
        assert_eq!(c, Rect::new(13.0, 10.0, 94.0, 50.0));
        let e = insets.create_adjusted_rectangle(&c, LengthAdjustmentType::Expand, LengthAdjustmentType::NoChange);
        assert_eq!(e, base);
    }
}
