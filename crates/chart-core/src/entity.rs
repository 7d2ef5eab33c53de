// File: crates/chart-core/src/entity.rs
// Summary: Hit-test regions recorded for drawn items.

use crate::geometry::{Point, Rect};
use crate::shape::Shape;

/// Hit region for one data item.
#[derive(Clone, Debug, PartialEq)]
pub struct XyItemEntity {
    pub area: Shape,
    pub dataset_index: usize,
    pub series_key: String,
    pub series: usize,
    pub item: usize,
    pub tool_tip: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityCollection {
    entities: Vec<XyItemEntity>,
}

impl EntityCollection {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, entity: XyItemEntity) {
        self.entities.push(entity);
    }
    pub fn len(&self) -> usize {
        self.entities.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&XyItemEntity> {
        self.entities.get(index)
    }
    pub fn iter(&self) -> impl Iterator<Item = &XyItemEntity> {
        self.entities.iter()
    }
    pub fn clear(&mut self) {
        self.entities.clear();
    }
    pub fn extend(&mut self, other: EntityCollection) {
        self.entities.extend(other.entities);
    }

    /// Last-added entity whose bounds contain `p`.
    pub fn entity_at(&self, p: Point) -> Option<&XyItemEntity> {
        self.entities.iter().rev().find(|e| e.area.bounds().contains(p))
    }
}

/// Per-draw output: where the data went and what was hit-testable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotRenderingInfo {
    pub data_area: Rect,
    pub entities: EntityCollection,
}
