// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the XY renderer family, datasets, axes and drawing primitives.

pub mod error;
pub mod geometry;
pub mod path;
pub mod shape;
pub mod paint;
pub mod types;
pub mod graphics;
pub mod range;
pub mod scale;
pub mod axis;
pub mod series;
pub mod dataset;
pub mod crosshair;
pub mod entity;
pub mod events;
pub mod labels;
pub mod legend;
pub mod theme;
pub mod marker;
pub mod annotation;
pub mod plot;
pub mod renderer;

pub use error::{ChartError, Result};
pub use geometry::{Line, Point, Rect};
pub use path::Path;
pub use shape::Shape;
pub use paint::{Color, Font, GradientPaint, GradientPaintTransformer, Paint, Stroke};
pub use types::{PlotOrientation, RectangleEdge};
pub use graphics::{Graphics2D, RecordingGraphics};
pub use range::Range;
pub use axis::{CyclicNumberAxis, LogarithmicAxis, NumberAxis, ValueAxis};
pub use series::{Candle, OhlcSeries, XySeries, YIntervalSeries};
pub use dataset::{IntervalXyDataset, OhlcDataset, OhlcSeriesCollection, XyDataset, XySeriesCollection, YIntervalSeriesCollection};
pub use crosshair::CrosshairState;
pub use entity::{EntityCollection, PlotRenderingInfo, XyItemEntity};
pub use legend::LegendItem;
pub use theme::Theme;
pub use marker::Marker;
pub use annotation::{Layer, XyAnnotation, XyLineAnnotation, XyTextAnnotation};
pub use plot::{PlotContext, SeriesRenderingOrder, XyPlot};
pub use renderer::{
    Area2Renderer, AreaRenderer, AreaRendererType, BezierRenderer, CandleWidthMethod, CandlestickRenderer,
    CyclicRenderer, DeviationStepRenderer, DrawContext, FillType, LineAndShapeRenderer, RendererState,
    SamplingRenderer, XyItemRenderer,
};
