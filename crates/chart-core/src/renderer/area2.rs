// File: crates/chart-core/src/renderer/area2.rs
// Summary: Area renderer that fills one hotspot polygon per item instead of a series polygon.

use crate::crosshair::CrosshairState;
use crate::dataset::XyDataset;
use crate::error::Result;
use crate::geometry::Rect;
use crate::graphics::Graphics2D;
use crate::legend::LegendItem;
use crate::shape::Shape;

use super::area::{area_hotspot, area_y};
use super::base::RendererBase;
use super::state::RendererState;
use super::{DrawContext, XyItemRenderer};

/// Each item fills the region between the midpoints to its neighbours and the baseline.
pub struct Area2Renderer {
    base: RendererBase,
    show_outline: bool,
    legend_area: Shape,
}

impl Default for Area2Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Area2Renderer {
    pub fn new() -> Self {
        Self {
            base: RendererBase::new(),
            show_outline: false,
            legend_area: Shape::Rect(Rect::new(-4.0, -4.0, 8.0, 8.0)),
        }
    }

    pub fn is_outline(&self) -> bool {
        self.show_outline
    }
    pub fn set_outline(&mut self, show: bool) {
        self.show_outline = show;
        self.base.fire_change_event();
    }

    pub fn set_legend_area(&mut self, area: Shape) {
        self.legend_area = area;
        self.base.fire_change_event();
    }
}

impl XyItemRenderer for Area2Renderer {
    fn name(&self) -> &'static str {
        "area2"
    }
    fn base(&self) -> &RendererBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut RendererBase {
        &mut self.base
    }

    fn draw_item(
        &self,
        g2: &mut dyn Graphics2D,
        state: &mut RendererState,
        ctx: &DrawContext<'_>,
        series: usize,
        item: usize,
        crosshair: Option<&mut CrosshairState>,
        _pass: usize,
    ) -> Result<()> {
        let ds = ctx.dataset;
        ds.check_item(series, item)?;
        if !self.base.item_visible(series, item) {
            return Ok(());
        }
        let x1 = ds.x_value(series, item);
        let y1 = area_y(ds, series, item);
        let trans_x1 = ctx.map_x(x1);
        let trans_y1 = ctx.map_y(y1);

        let polygon = area_hotspot(ctx, series, item);
        let hotspot = Shape::Path(polygon.clone());
        g2.fill(&hotspot, &self.base.item_paint(series, item));
        if self.show_outline {
            g2.draw(
                &hotspot,
                &self.base.series_outline_paint(series),
                &self.base.series_outline_stroke(series),
            );
        }

        self.base.update_crosshair_values(crosshair, ctx.plot, x1, y1, trans_x1, trans_y1);

        let clipped = polygon.clip_to_rect(&ctx.area);
        if !clipped.is_empty() {
            let p = ctx.point(trans_x1, trans_y1);
            self.base.add_entity(state, Some(Shape::Path(clipped)), ds, ctx.plot.dataset_index, series, item, p.x, p.y);
        }
        Ok(())
    }

    fn legend_item(&self, dataset: Option<&dyn XyDataset>, dataset_index: usize, series: usize) -> Option<LegendItem> {
        let ds = dataset?;
        let mut item = LegendItem::new("", self.legend_area.clone(), self.base.series_paint(series));
        self.base.decorate_legend_item(&mut item, ds, dataset_index, series);
        Some(item)
    }
}
