// File: crates/chart-core/src/renderer/base.rs
// Summary: Shared renderer configuration: attribute lookups, visibility, generators, entities,
// annotations, legend defaults and change notification.

use std::collections::HashMap;
use std::rc::Rc;

use crate::annotation::{Layer, XyAnnotation};
use crate::axis::ValueAxis;
use crate::crosshair::CrosshairState;
use crate::dataset::{find_domain_bounds, find_range_bounds, XyDataset};
use crate::entity::XyItemEntity;
use crate::events::{ChangeNotifier, ListenerId, RendererChangeEvent};
use crate::geometry::Rect;
use crate::graphics::{draw_aligned_string, Graphics2D};
use crate::labels::{
    ItemLabelPosition, StandardXySeriesLabelGenerator, XyItemLabelGenerator, XySeriesLabelGenerator,
    XyToolTipGenerator, XyUrlGenerator,
};
use crate::legend::LegendItem;
use crate::paint::{Color, Font, Paint, Stroke};
use crate::plot::PlotContext;
use crate::range::Range;
use crate::shape::{standard_series_shapes, Shape};
use crate::theme::default_palette;
use crate::types::PlotOrientation;

use super::attributes::SeriesAttribute;
use super::state::RendererState;

struct AnnotationEntry {
    annotation: Rc<dyn XyAnnotation>,
    listener: ListenerId,
}

/// Result of removing an annotation: which layers it was found in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnnotationRemoval {
    pub foreground: bool,
    pub background: bool,
}

impl AnnotationRemoval {
    pub fn any(&self) -> bool {
        self.foreground || self.background
    }
}

/// Configuration shared by every item renderer.
pub struct RendererBase {
    series_visible: HashMap<usize, bool>,
    default_series_visible: bool,
    series_visible_in_legend: HashMap<usize, bool>,
    default_series_visible_in_legend: bool,

    paint: SeriesAttribute<Paint>,
    fill_paint: SeriesAttribute<Paint>,
    outline_paint: SeriesAttribute<Paint>,
    stroke: SeriesAttribute<Stroke>,
    outline_stroke: SeriesAttribute<Stroke>,
    shape: SeriesAttribute<Shape>,
    palette: Vec<Color>,
    shape_sequence: Vec<Shape>,
    auto_populate_series_paint: bool,
    auto_populate_series_shape: bool,

    item_labels_visible: SeriesAttribute<bool>,
    pub item_label_font: Font,
    pub item_label_paint: Paint,
    pub positive_item_label_position: ItemLabelPosition,
    pub negative_item_label_position: ItemLabelPosition,
    pub item_label_anchor_offset: f64,
    series_item_label_generators: HashMap<usize, Rc<dyn XyItemLabelGenerator>>,
    default_item_label_generator: Option<Rc<dyn XyItemLabelGenerator>>,
    series_tool_tip_generators: HashMap<usize, Rc<dyn XyToolTipGenerator>>,
    default_tool_tip_generator: Option<Rc<dyn XyToolTipGenerator>>,
    url_generator: Option<Rc<dyn XyUrlGenerator>>,

    legend_item_label_generator: Rc<dyn XySeriesLabelGenerator>,
    legend_item_tool_tip_generator: Option<Rc<dyn XySeriesLabelGenerator>>,
    legend_item_url_generator: Option<Rc<dyn XySeriesLabelGenerator>>,
    legend_shape: HashMap<usize, Shape>,
    default_legend_shape: Option<Shape>,
    legend_text_font: Option<Font>,
    legend_text_paint: Option<Paint>,
    treat_legend_shape_as_line: bool,

    create_entities: SeriesAttribute<bool>,
    default_entity_radius: f64,
    data_bounds_include_visible_series_only: bool,

    foreground_annotations: Vec<AnnotationEntry>,
    background_annotations: Vec<AnnotationEntry>,
    notifier: Rc<ChangeNotifier<RendererChangeEvent>>,
}

impl Default for RendererBase {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererBase {
    pub fn new() -> Self {
        Self {
            series_visible: HashMap::new(),
            default_series_visible: true,
            series_visible_in_legend: HashMap::new(),
            default_series_visible_in_legend: true,
            paint: SeriesAttribute::new(Paint::Solid(Color::BLUE)),
            fill_paint: SeriesAttribute::new(Paint::Solid(Color::WHITE)),
            outline_paint: SeriesAttribute::new(Paint::Solid(Color::GRAY)),
            stroke: SeriesAttribute::new(Stroke::default()),
            outline_stroke: SeriesAttribute::new(Stroke::default()),
            shape: SeriesAttribute::new(Shape::Rect(Rect::new(-3.0, -3.0, 6.0, 6.0))),
            palette: default_palette(),
            shape_sequence: standard_series_shapes(),
            auto_populate_series_paint: true,
            auto_populate_series_shape: true,
            item_labels_visible: SeriesAttribute::new(false),
            item_label_font: Font::default(),
            item_label_paint: Paint::Solid(Color::BLACK),
            positive_item_label_position: ItemLabelPosition::positive(),
            negative_item_label_position: ItemLabelPosition::negative(),
            item_label_anchor_offset: 2.0,
            series_item_label_generators: HashMap::new(),
            default_item_label_generator: None,
            series_tool_tip_generators: HashMap::new(),
            default_tool_tip_generator: None,
            url_generator: None,
            legend_item_label_generator: Rc::new(StandardXySeriesLabelGenerator::default()),
            legend_item_tool_tip_generator: None,
            legend_item_url_generator: None,
            legend_shape: HashMap::new(),
            default_legend_shape: None,
            legend_text_font: None,
            legend_text_paint: None,
            treat_legend_shape_as_line: false,
            create_entities: SeriesAttribute::new(true),
            default_entity_radius: 3.0,
            data_bounds_include_visible_series_only: true,
            foreground_annotations: Vec::new(),
            background_annotations: Vec::new(),
            notifier: Rc::new(ChangeNotifier::new()),
        }
    }

    // ---- change notification ------------------------------------------------

    pub fn add_change_listener(&self, listener: impl Fn(&RendererChangeEvent) + 'static) -> ListenerId {
        self.notifier.add(listener)
    }

    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        self.notifier.remove(id)
    }

    pub fn fire_change_event(&self) {
        self.notifier.fire(&RendererChangeEvent::default());
    }

    fn fire_visibility_change(&self) {
        self.notifier.fire(&RendererChangeEvent { series_visibility_changed: true });
    }

    // ---- visibility ---------------------------------------------------------

    pub fn is_series_visible(&self, series: usize) -> bool {
        self.series_visible.get(&series).copied().unwrap_or(self.default_series_visible)
    }

    pub fn item_visible(&self, series: usize, _item: usize) -> bool {
        self.is_series_visible(series)
    }

    pub fn set_series_visible(&mut self, series: usize, visible: Option<bool>) {
        match visible {
            Some(v) => self.series_visible.insert(series, v),
            None => self.series_visible.remove(&series),
        };
        self.fire_visibility_change();
    }

    pub fn set_default_series_visible(&mut self, visible: bool) {
        self.default_series_visible = visible;
        self.fire_visibility_change();
    }

    pub fn is_series_visible_in_legend(&self, series: usize) -> bool {
        self.series_visible_in_legend
            .get(&series)
            .copied()
            .unwrap_or(self.default_series_visible_in_legend)
    }

    pub fn set_series_visible_in_legend(&mut self, series: usize, visible: Option<bool>) {
        match visible {
            Some(v) => self.series_visible_in_legend.insert(series, v),
            None => self.series_visible_in_legend.remove(&series),
        };
        self.fire_change_event();
    }

    // ---- paints, strokes, shapes ----------------------------------------------

    fn palette_paint(&self, series: usize) -> Option<Paint> {
        if !self.auto_populate_series_paint || self.palette.is_empty() {
            return None;
        }
        Some(Paint::Solid(self.palette[series % self.palette.len()]))
    }

    fn sequence_shape(&self, series: usize) -> Option<Shape> {
        if !self.auto_populate_series_shape || self.shape_sequence.is_empty() {
            return None;
        }
        Some(self.shape_sequence[series % self.shape_sequence.len()].clone())
    }

    pub fn item_paint(&self, series: usize, item: usize) -> Paint {
        self.paint.resolve(series, item, || self.palette_paint(series))
    }
    pub fn series_paint(&self, series: usize) -> Paint {
        self.paint.resolve_series(series, || self.palette_paint(series))
    }
    pub fn item_fill_paint(&self, series: usize, item: usize) -> Paint {
        self.fill_paint.resolve(series, item, || None)
    }
    pub fn series_fill_paint(&self, series: usize) -> Paint {
        self.fill_paint.resolve_series(series, || None)
    }
    pub fn item_outline_paint(&self, series: usize, item: usize) -> Paint {
        self.outline_paint.resolve(series, item, || None)
    }
    pub fn series_outline_paint(&self, series: usize) -> Paint {
        self.outline_paint.resolve_series(series, || None)
    }
    pub fn item_stroke(&self, series: usize, item: usize) -> Stroke {
        self.stroke.resolve(series, item, || None)
    }
    pub fn series_stroke(&self, series: usize) -> Stroke {
        self.stroke.resolve_series(series, || None)
    }
    pub fn item_outline_stroke(&self, series: usize, item: usize) -> Stroke {
        self.outline_stroke.resolve(series, item, || None)
    }
    pub fn series_outline_stroke(&self, series: usize) -> Stroke {
        self.outline_stroke.resolve_series(series, || None)
    }
    pub fn item_shape(&self, series: usize, item: usize) -> Shape {
        self.shape.resolve(series, item, || self.sequence_shape(series))
    }
    pub fn series_shape(&self, series: usize) -> Shape {
        self.shape.resolve_series(series, || self.sequence_shape(series))
    }

    pub fn set_series_paint(&mut self, series: usize, paint: Option<Paint>) {
        self.paint.set_series(series, paint);
        self.fire_change_event();
    }
    pub fn set_item_paint(&mut self, series: usize, item: usize, paint: Option<Paint>) {
        self.paint.set_item(series, item, paint);
        self.fire_change_event();
    }
    pub fn set_default_paint(&mut self, paint: Paint) {
        self.paint.set_default(paint);
        self.fire_change_event();
    }
    pub fn set_series_fill_paint(&mut self, series: usize, paint: Option<Paint>) {
        self.fill_paint.set_series(series, paint);
        self.fire_change_event();
    }
    pub fn set_default_fill_paint(&mut self, paint: Paint) {
        self.fill_paint.set_default(paint);
        self.fire_change_event();
    }
    pub fn set_series_outline_paint(&mut self, series: usize, paint: Option<Paint>) {
        self.outline_paint.set_series(series, paint);
        self.fire_change_event();
    }
    pub fn set_default_outline_paint(&mut self, paint: Paint) {
        self.outline_paint.set_default(paint);
        self.fire_change_event();
    }
    pub fn set_series_stroke(&mut self, series: usize, stroke: Option<Stroke>) {
        self.stroke.set_series(series, stroke);
        self.fire_change_event();
    }
    pub fn set_default_stroke(&mut self, stroke: Stroke) {
        self.stroke.set_default(stroke);
        self.fire_change_event();
    }
    pub fn set_series_outline_stroke(&mut self, series: usize, stroke: Option<Stroke>) {
        self.outline_stroke.set_series(series, stroke);
        self.fire_change_event();
    }
    pub fn set_default_outline_stroke(&mut self, stroke: Stroke) {
        self.outline_stroke.set_default(stroke);
        self.fire_change_event();
    }
    pub fn set_series_shape(&mut self, series: usize, shape: Option<Shape>) {
        self.shape.set_series(series, shape);
        self.fire_change_event();
    }
    pub fn set_default_shape(&mut self, shape: Shape) {
        self.shape.set_default(shape);
        self.fire_change_event();
    }

    /// Replace the palette that series without an explicit paint cycle through.
    pub fn set_palette(&mut self, palette: Vec<Color>) {
        self.palette = palette;
        self.fire_change_event();
    }
    pub fn set_auto_populate_series_paint(&mut self, auto: bool) {
        self.auto_populate_series_paint = auto;
        self.fire_change_event();
    }
    pub fn set_auto_populate_series_shape(&mut self, auto: bool) {
        self.auto_populate_series_shape = auto;
        self.fire_change_event();
    }

    // ---- item labels and generators -------------------------------------------

    pub fn is_item_label_visible(&self, series: usize, item: usize) -> bool {
        self.item_labels_visible.resolve(series, item, || None)
    }
    pub fn set_series_item_labels_visible(&mut self, series: usize, visible: Option<bool>) {
        self.item_labels_visible.set_series(series, visible);
        self.fire_change_event();
    }
    pub fn set_default_item_labels_visible(&mut self, visible: bool) {
        self.item_labels_visible.set_default(visible);
        self.fire_change_event();
    }

    pub fn item_label_generator(&self, series: usize) -> Option<Rc<dyn XyItemLabelGenerator>> {
        self.series_item_label_generators
            .get(&series)
            .cloned()
            .or_else(|| self.default_item_label_generator.clone())
    }
    pub fn set_series_item_label_generator(&mut self, series: usize, generator: Option<Rc<dyn XyItemLabelGenerator>>) {
        match generator {
            Some(g) => self.series_item_label_generators.insert(series, g),
            None => self.series_item_label_generators.remove(&series),
        };
        self.fire_change_event();
    }
    pub fn set_default_item_label_generator(&mut self, generator: Option<Rc<dyn XyItemLabelGenerator>>) {
        self.default_item_label_generator = generator;
        self.fire_change_event();
    }

    pub fn tool_tip_generator(&self, series: usize) -> Option<Rc<dyn XyToolTipGenerator>> {
        self.series_tool_tip_generators
            .get(&series)
            .cloned()
            .or_else(|| self.default_tool_tip_generator.clone())
    }
    pub fn set_series_tool_tip_generator(&mut self, series: usize, generator: Option<Rc<dyn XyToolTipGenerator>>) {
        match generator {
            Some(g) => self.series_tool_tip_generators.insert(series, g),
            None => self.series_tool_tip_generators.remove(&series),
        };
        self.fire_change_event();
    }
    pub fn set_default_tool_tip_generator(&mut self, generator: Option<Rc<dyn XyToolTipGenerator>>) {
        self.default_tool_tip_generator = generator;
        self.fire_change_event();
    }

    pub fn url_generator(&self) -> Option<Rc<dyn XyUrlGenerator>> {
        self.url_generator.clone()
    }
    pub fn set_url_generator(&mut self, generator: Option<Rc<dyn XyUrlGenerator>>) {
        self.url_generator = generator;
        self.fire_change_event();
    }

    /// Draw the label for an item at device point (`x`, `y`), if a generator yields one.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_item_label(
        &self,
        g2: &mut dyn Graphics2D,
        dataset: &dyn XyDataset,
        series: usize,
        item: usize,
        x: f64,
        y: f64,
        negative: bool,
    ) {
        let Some(generator) = self.item_label_generator(series) else { return };
        let Some(label) = generator.generate_label(dataset, series, item) else { return };
        let position = if negative {
            self.negative_item_label_position
        } else {
            self.positive_item_label_position
        };
        let anchor = position.anchor.anchor_point(x, y, self.item_label_anchor_offset);
        draw_aligned_string(
            g2,
            &label,
            &self.item_label_font,
            &self.item_label_paint,
            anchor.x,
            anchor.y,
            position.text_anchor,
        );
    }

    // ---- entities -------------------------------------------------------------

    pub fn item_create_entity(&self, series: usize, item: usize) -> bool {
        self.create_entities.resolve(series, item, || None)
    }
    pub fn set_series_create_entities(&mut self, series: usize, create: Option<bool>) {
        self.create_entities.set_series(series, create);
        self.fire_change_event();
    }
    pub fn set_default_create_entities(&mut self, create: bool) {
        self.create_entities.set_default(create);
        self.fire_change_event();
    }
    pub fn default_entity_radius(&self) -> f64 {
        self.default_entity_radius
    }
    pub fn set_default_entity_radius(&mut self, radius: f64) {
        self.default_entity_radius = radius;
        self.fire_change_event();
    }

    /// Record a hit region for an item when the state collects entities.
    /// Without a hotspot, a circle of the default radius around (`entity_x`, `entity_y`) is used.
    #[allow(clippy::too_many_arguments)]
    pub fn add_entity(
        &self,
        state: &mut RendererState,
        hotspot: Option<Shape>,
        dataset: &dyn XyDataset,
        dataset_index: usize,
        series: usize,
        item: usize,
        entity_x: f64,
        entity_y: f64,
    ) {
        if !self.item_create_entity(series, item) {
            return;
        }
        let Some(entities) = state.entities_mut() else { return };
        let area = hotspot.unwrap_or_else(|| Shape::circle(entity_x, entity_y, self.default_entity_radius));
        let tool_tip = self
            .tool_tip_generator(series)
            .and_then(|g| g.generate_tool_tip(dataset, series, item));
        let url = self.url_generator.as_ref().and_then(|g| g.generate_url(dataset, series, item));
        entities.add(XyItemEntity {
            area,
            dataset_index,
            series_key: dataset.series_key(series).to_string(),
            series,
            item,
            tool_tip,
            url,
        });
    }

    // ---- crosshair ------------------------------------------------------------

    /// Offer an item to the crosshair according to the plot's lock-on-data flags.
    #[allow(clippy::too_many_arguments)]
    pub fn update_crosshair_values(
        &self,
        crosshair: Option<&mut CrosshairState>,
        plot: &PlotContext,
        x: f64,
        y: f64,
        trans_x: f64,
        trans_y: f64,
    ) {
        let Some(state) = crosshair else { return };
        match (plot.domain_crosshair_locked_on_data, plot.range_crosshair_locked_on_data) {
            (true, true) => state.update_point(x, y, plot.dataset_index, trans_x, trans_y, plot.orientation),
            (true, false) => state.update_x(x, trans_x, plot.dataset_index),
            (false, true) => state.update_y(y, trans_y, plot.dataset_index),
            (false, false) => {}
        }
    }

    // ---- data bounds ----------------------------------------------------------

    pub fn set_data_bounds_include_visible_series_only(&mut self, visible_only: bool) {
        self.data_bounds_include_visible_series_only = visible_only;
        self.fire_change_event();
    }

    fn bounds_series(&self, dataset: &dyn XyDataset) -> Vec<usize> {
        (0..dataset.series_count())
            .filter(|&s| !self.data_bounds_include_visible_series_only || self.is_series_visible(s))
            .collect()
    }

    pub fn find_domain_bounds(&self, dataset: Option<&dyn XyDataset>, include_interval: bool) -> Option<Range> {
        let dataset = dataset?;
        find_domain_bounds(dataset, &self.bounds_series(dataset), include_interval)
    }

    pub fn find_range_bounds(
        &self,
        dataset: Option<&dyn XyDataset>,
        domain_window: Option<Range>,
        include_interval: bool,
    ) -> Option<Range> {
        let dataset = dataset?;
        find_range_bounds(dataset, &self.bounds_series(dataset), domain_window, include_interval)
    }

    // ---- annotations ----------------------------------------------------------

    /// Add an annotation on `layer`. Its changes are forwarded to this renderer's listeners.
    pub fn add_annotation(&mut self, annotation: Rc<dyn XyAnnotation>, layer: Layer) {
        let notifier = Rc::clone(&self.notifier);
        let listener = annotation
            .notifier()
            .add(move |_| notifier.fire(&RendererChangeEvent::default()));
        let entry = AnnotationEntry { annotation, listener };
        match layer {
            Layer::Foreground => self.foreground_annotations.push(entry),
            Layer::Background => self.background_annotations.push(entry),
        }
        self.fire_change_event();
    }

    /// Remove `annotation` from both layers, reporting where it was found.
    pub fn remove_annotation(&mut self, annotation: &Rc<dyn XyAnnotation>) -> AnnotationRemoval {
        let removal = AnnotationRemoval {
            foreground: detach(&mut self.foreground_annotations, annotation),
            background: detach(&mut self.background_annotations, annotation),
        };
        if removal.any() {
            self.fire_change_event();
        }
        removal
    }

    pub fn clear_annotations(&mut self) {
        for entry in self.foreground_annotations.drain(..).chain(self.background_annotations.drain(..)) {
            entry.annotation.notifier().remove(entry.listener);
        }
        self.fire_change_event();
    }

    pub fn annotations(&self, layer: Layer) -> Vec<Rc<dyn XyAnnotation>> {
        let list = match layer {
            Layer::Foreground => &self.foreground_annotations,
            Layer::Background => &self.background_annotations,
        };
        list.iter().map(|e| Rc::clone(&e.annotation)).collect()
    }

    pub fn draw_annotations(
        &self,
        g2: &mut dyn Graphics2D,
        plot: &PlotContext,
        area: &Rect,
        domain_axis: &dyn ValueAxis,
        range_axis: &dyn ValueAxis,
        layer: Layer,
    ) {
        let list = match layer {
            Layer::Foreground => &self.foreground_annotations,
            Layer::Background => &self.background_annotations,
        };
        for entry in list {
            entry.annotation.draw(g2, plot, area, domain_axis, range_axis);
        }
    }

    // ---- legend ---------------------------------------------------------------

    pub fn set_legend_item_label_generator(&mut self, generator: Rc<dyn XySeriesLabelGenerator>) {
        self.legend_item_label_generator = generator;
        self.fire_change_event();
    }
    pub fn set_legend_item_tool_tip_generator(&mut self, generator: Option<Rc<dyn XySeriesLabelGenerator>>) {
        self.legend_item_tool_tip_generator = generator;
        self.fire_change_event();
    }
    pub fn set_legend_item_url_generator(&mut self, generator: Option<Rc<dyn XySeriesLabelGenerator>>) {
        self.legend_item_url_generator = generator;
        self.fire_change_event();
    }
    pub fn set_series_legend_shape(&mut self, series: usize, shape: Option<Shape>) {
        match shape {
            Some(s) => self.legend_shape.insert(series, s),
            None => self.legend_shape.remove(&series),
        };
        self.fire_change_event();
    }
    pub fn set_default_legend_shape(&mut self, shape: Option<Shape>) {
        self.default_legend_shape = shape;
        self.fire_change_event();
    }
    pub fn set_legend_text_font(&mut self, font: Option<Font>) {
        self.legend_text_font = font;
        self.fire_change_event();
    }
    pub fn set_legend_text_paint(&mut self, paint: Option<Paint>) {
        self.legend_text_paint = paint;
        self.fire_change_event();
    }
    pub fn treat_legend_shape_as_line(&self) -> bool {
        self.treat_legend_shape_as_line
    }
    pub fn set_treat_legend_shape_as_line(&mut self, as_line: bool) {
        self.treat_legend_shape_as_line = as_line;
        self.fire_change_event();
    }

    /// Legend shape for `series`: series override, renderer default, then the series shape.
    pub fn legend_shape(&self, series: usize) -> Shape {
        self.legend_shape
            .get(&series)
            .cloned()
            .or_else(|| self.default_legend_shape.clone())
            .unwrap_or_else(|| self.series_shape(series))
    }

    /// Label, description, tooltip, URL, series key and fonts; shape and paints are left to the caller.
    pub fn decorate_legend_item(&self, item: &mut LegendItem, dataset: &dyn XyDataset, dataset_index: usize, series: usize) {
        item.label = self.legend_item_label_generator.generate_label(dataset, series);
        item.description = item.label.clone();
        item.tool_tip = self
            .legend_item_tool_tip_generator
            .as_ref()
            .map(|g| g.generate_label(dataset, series));
        item.url = self
            .legend_item_url_generator
            .as_ref()
            .map(|g| g.generate_label(dataset, series));
        item.series_key = dataset.series_key(series).to_string();
        item.series_index = series;
        item.dataset_index = dataset_index;
        item.label_font = self.legend_text_font.clone();
        item.label_paint = self.legend_text_paint;
    }

    /// Plain legend entry: the legend shape filled with the series paint.
    pub fn default_legend_item(&self, dataset: &dyn XyDataset, dataset_index: usize, series: usize) -> LegendItem {
        let shape = self.legend_shape(series);
        let paint = self.series_paint(series);
        let mut item = LegendItem::new("", shape.clone(), paint);
        self.decorate_legend_item(&mut item, dataset, dataset_index, series);
        if self.treat_legend_shape_as_line {
            item.shape_visible = false;
            item.line_visible = true;
            item.line = shape;
            item.line_paint = paint;
            item.line_stroke = self.series_stroke(series);
        }
        item
    }

    /// Map a data point to device space, swapping axes for horizontal plots.
    pub fn orient(orientation: PlotOrientation, trans_x: f64, trans_y: f64) -> (f64, f64) {
        if orientation.is_horizontal() {
            (trans_y, trans_x)
        } else {
            (trans_x, trans_y)
        }
    }
}

fn detach(list: &mut Vec<AnnotationEntry>, annotation: &Rc<dyn XyAnnotation>) -> bool {
    match list.iter().position(|e| Rc::ptr_eq(&e.annotation, annotation)) {
        Some(pos) => {
            let entry = list.remove(pos);
            entry.annotation.notifier().remove(entry.listener);
            true
        }
        None => false,
    }
}
