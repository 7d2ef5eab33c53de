// File: crates/chart-core/src/marker.rs
// Summary: Value and interval markers highlighted across the data area.

use crate::paint::{Color, Font, GradientPaintTransformer, Paint, Stroke};
use crate::types::{LengthAdjustmentType, RectangleAnchor, RectangleInsets, TextAnchor};

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerKind {
    /// A single value drawn as a line.
    Value(f64),
    /// A band between two values, optionally outlined at each end.
    Interval {
        start: f64,
        end: f64,
        gradient_transformer: Option<GradientPaintTransformer>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub paint: Paint,
    pub stroke: Stroke,
    pub outline_paint: Option<Paint>,
    pub outline_stroke: Option<Stroke>,
    pub alpha: f32,
    pub label: Option<String>,
    pub label_font: Font,
    pub label_paint: Paint,
    pub label_background: Color,
    pub label_anchor: RectangleAnchor,
    pub label_text_anchor: TextAnchor,
    pub label_offset: RectangleInsets,
    pub label_offset_type: LengthAdjustmentType,
}

impl Marker {
    fn with_kind(kind: MarkerKind, paint: Paint) -> Self {
        Self {
            kind,
            paint,
            stroke: Stroke::new(0.5),
            outline_paint: None,
            outline_stroke: None,
            alpha: 0.8,
            label: None,
            label_font: Font::default(),
            label_paint: Paint::Solid(Color::BLACK),
            label_background: Color::TRANSPARENT,
            label_anchor: RectangleAnchor::TopLeft,
            label_text_anchor: TextAnchor::Center,
            label_offset: RectangleInsets::new(3.0, 3.0, 3.0, 3.0),
            label_offset_type: LengthAdjustmentType::Contract,
        }
    }

    pub fn value(value: f64, paint: impl Into<Paint>) -> Self {
        Self::with_kind(MarkerKind::Value(value), paint.into())
    }

    pub fn interval(start: f64, end: f64, paint: impl Into<Paint>) -> Self {
        let mut m = Self::with_kind(
            MarkerKind::Interval { start, end, gradient_transformer: None },
            paint.into(),
        );
        m.outline_paint = Some(Paint::Solid(Color::BLACK));
        m.outline_stroke = Some(Stroke::default());
        m
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}
