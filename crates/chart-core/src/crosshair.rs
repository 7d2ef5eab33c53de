// File: crates/chart-core/src/crosshair.rs
// Summary: Tracks the data item nearest to an anchor point while items are drawn.

use crate::geometry::Point;
use crate::types::PlotOrientation;

#[derive(Clone, Debug, PartialEq)]
pub struct CrosshairState {
    /// Device-space anchor; `None` disables tracking.
    anchor: Option<Point>,
    /// Anchor in data space, used when distances are measured in data space.
    anchor_x: f64,
    anchor_y: f64,
    crosshair_x: f64,
    crosshair_y: f64,
    dataset_index: usize,
    distance: f64,
    distance_in_data_space: bool,
}

impl Default for CrosshairState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl CrosshairState {
    pub fn new(distance_in_data_space: bool) -> Self {
        Self {
            anchor: None,
            anchor_x: f64::NAN,
            anchor_y: f64::NAN,
            crosshair_x: 0.0,
            crosshair_y: 0.0,
            dataset_index: 0,
            distance: f64::INFINITY,
            distance_in_data_space,
        }
    }

    pub fn with_anchor(anchor: Point) -> Self {
        let mut s = Self::new(false);
        s.anchor = Some(anchor);
        s
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }
    pub fn set_anchor(&mut self, anchor: Option<Point>) {
        self.anchor = anchor;
    }
    pub fn set_anchor_data(&mut self, x: f64, y: f64) {
        self.anchor_x = x;
        self.anchor_y = y;
    }
    pub fn crosshair_x(&self) -> f64 {
        self.crosshair_x
    }
    pub fn crosshair_y(&self) -> f64 {
        self.crosshair_y
    }
    pub fn dataset_index(&self) -> usize {
        self.dataset_index
    }
    pub fn distance(&self) -> f64 {
        self.distance
    }
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    /// Offer an item; it replaces the current crosshair point when it is closer to the anchor.
    pub fn update_point(
        &mut self,
        x: f64,
        y: f64,
        dataset_index: usize,
        trans_x: f64,
        trans_y: f64,
        orientation: PlotOrientation,
    ) {
        let Some(anchor) = self.anchor else { return };
        let d = if self.distance_in_data_space {
            (x - self.anchor_x).powi(2) + (y - self.anchor_y).powi(2)
        } else {
            let (xx, yy) = if orientation.is_horizontal() {
                (anchor.y, anchor.x)
            } else {
                (anchor.x, anchor.y)
            };
            (trans_x - xx).powi(2) + (trans_y - yy).powi(2)
        };
        if d < self.distance {
            self.crosshair_x = x;
            self.crosshair_y = y;
            self.dataset_index = dataset_index;
            self.distance = d;
        }
    }

    pub fn update_x(&mut self, x: f64, trans_x: f64, dataset_index: usize) {
        let Some(anchor) = self.anchor else { return };
        let d = (trans_x - anchor.x).abs();
        if d < self.distance {
            self.crosshair_x = x;
            self.dataset_index = dataset_index;
            self.distance = d;
        }
    }

    pub fn update_y(&mut self, y: f64, trans_y: f64, dataset_index: usize) {
        let Some(anchor) = self.anchor else { return };
        let d = (trans_y - anchor.y).abs();
        if d < self.distance {
            self.crosshair_y = y;
            self.dataset_index = dataset_index;
            self.distance = d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_item_wins() {
        let mut s = CrosshairState::with_anchor(Point::new(10.0, 10.0));
        s.update_point(1.0, 1.0, 0, 50.0, 50.0, PlotOrientation::Vertical);
        s.update_point(2.0, 2.0, 0, 12.0, 11.0, PlotOrientation::Vertical);
        s.update_point(3.0, 3.0, 0, 30.0, 30.0, PlotOrientation::Vertical);
        assert_eq!((s.crosshair_x(), s.crosshair_y()), (2.0, 2.0));
        assert_eq!(s.distance(), 5.0);
    }

    #[test]
    fn no_anchor_no_update() {
        let mut s = CrosshairState::default();
        s.update_point(1.0, 1.0, 0, 0.0, 0.0, PlotOrientation::Vertical);
        s.update_x(1.0, 0.0, 0);
        assert_eq!(s.distance(), f64::INFINITY);
    }
}
