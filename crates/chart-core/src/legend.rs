// File: crates/chart-core/src/legend.rs
// Summary: Legend entry describing how a series is represented in a legend.

use crate::geometry::Line;
use crate::paint::{Color, Font, Paint, Stroke};
use crate::shape::Shape;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub description: String,
    pub tool_tip: Option<String>,
    pub url: Option<String>,
    pub series_key: String,
    pub series_index: usize,
    pub dataset_index: usize,
    pub shape_visible: bool,
    pub shape: Shape,
    pub shape_filled: bool,
    pub fill_paint: Paint,
    pub shape_outline_visible: bool,
    pub outline_paint: Paint,
    pub outline_stroke: Stroke,
    pub line_visible: bool,
    pub line: Shape,
    pub line_paint: Paint,
    pub line_stroke: Stroke,
    pub label_font: Option<Font>,
    pub label_paint: Option<Paint>,
}

impl LegendItem {
    /// Filled-shape item with no line.
    pub fn new(label: impl Into<String>, shape: Shape, fill_paint: Paint) -> Self {
        let label = label.into();
        Self {
            description: label.clone(),
            label,
            tool_tip: None,
            url: None,
            series_key: String::new(),
            series_index: 0,
            dataset_index: 0,
            shape_visible: true,
            shape,
            shape_filled: true,
            fill_paint,
            shape_outline_visible: false,
            outline_paint: Paint::Solid(Color::BLACK),
            outline_stroke: Stroke::default(),
            line_visible: false,
            line: Shape::Line(Line::new(-7.0, 0.0, 7.0, 0.0)),
            line_paint: Paint::Solid(Color::BLACK),
            line_stroke: Stroke::default(),
            label_font: None,
            label_paint: None,
        }
    }
}
